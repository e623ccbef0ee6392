//! Fuzzy task picker implementation using skim.
//!
//! Provides an interactive terminal interface for selecting tasks.

use std::sync::Arc;

use skim::prelude::*;

use crate::error::SereinError;

use super::task::Task;

/// A wrapper around Task that implements `SkimItem`.
struct TaskItem {
    id: u64,
    display: String,
}

impl TaskItem {
    fn new(task: &Task) -> Self {
        let status_icon = if task.completed { "[x]" } else { "[ ]" };

        let time = task
            .scheduled_time
            .map(|t| format!(" {}", t.format("%H:%M")))
            .unwrap_or_default();

        let display = format!(
            "#{} {}{} {} ({}, {})",
            task.id, status_icon, time, task.title, task.category, task.priority
        );

        Self {
            id: task.id,
            display,
        }
    }
}

impl SkimItem for TaskItem {
    fn text(&self) -> Cow<'_, str> {
        Cow::Borrowed(&self.display)
    }

    // The output() method carries the task ID through the selection.
    fn output(&self) -> Cow<'_, str> {
        Cow::Owned(self.id.to_string())
    }
}

/// Interactively pick task IDs.
///
/// Returns the selected IDs, or an empty list if the user aborted or there
/// was nothing to pick from.
///
/// # Errors
///
/// Returns an error if the picker cannot be constructed.
pub fn pick_task_ids(tasks: &[Task], multi: bool) -> Result<Vec<u64>, SereinError> {
    if tasks.is_empty() {
        return Ok(Vec::new());
    }

    let options = SkimOptionsBuilder::default()
        .height(Some("50%"))
        .multi(multi)
        .prompt(Some("task> "))
        .build()
        .map_err(|e| SereinError::Config(format!("Failed to build picker: {e}")))?;

    let (tx, rx): (SkimItemSender, SkimItemReceiver) = unbounded();
    for task in tasks {
        // A send can only fail if the receiver is gone, which ends the pick.
        if tx.send(Arc::new(TaskItem::new(task))).is_err() {
            break;
        }
    }
    drop(tx);

    let Some(output) = Skim::run_with(&options, Some(rx)) else {
        return Ok(Vec::new());
    };

    if output.is_abort {
        return Ok(Vec::new());
    }

    Ok(output
        .selected_items
        .iter()
        .filter_map(|item| item.output().parse::<u64>().ok())
        .collect())
}
