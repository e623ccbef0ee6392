//! Task command implementation.

use colored::Colorize;

use crate::cli::args::{OutputFormat, TaskCommands};
use crate::error::SereinError;
use crate::features::planner::{pick_task_ids, Category, Priority, Task, TaskStore};
use crate::output::{format_tasks, to_json};

/// Execute task subcommands.
///
/// # Errors
///
/// Returns an error if validation, storage, or output formatting fails.
pub fn task(cmd: TaskCommands, format: OutputFormat) -> Result<String, SereinError> {
    let store = TaskStore::new()?;

    match cmd {
        TaskCommands::Add {
            title,
            notes,
            priority,
            category,
            time,
        } => {
            let priority: Priority = priority.parse()?;
            let category: Category = category.parse()?;

            let task = Task::build(&title, notes, priority, category, time.as_deref())?;
            let task = store.add(task)?;

            match format {
                OutputFormat::Json => to_json(&task),
                OutputFormat::Pretty => Ok(format!(
                    "{}\n   {}",
                    format!("✅ Added task #{}: {}", task.id, task.title).green(),
                    "See the day with 'serein task list'".dimmed()
                )),
            }
        }

        TaskCommands::List { category } => {
            let category = category.map(|c| c.parse::<Category>()).transpose()?;
            let tasks = store.list(category)?;
            format_tasks(&tasks, "Tasks", format)
        }

        TaskCommands::Done { id } => {
            let task = store.set_completed(id, true)?;
            match format {
                OutputFormat::Json => to_json(&task),
                OutputFormat::Pretty => Ok(format!("✅ Done: {}", task.title)),
            }
        }

        TaskCommands::Undone { id } => {
            let task = store.set_completed(id, false)?;
            match format {
                OutputFormat::Json => to_json(&task),
                OutputFormat::Pretty => Ok(format!("↩️  Reopened: {}", task.title)),
            }
        }

        TaskCommands::Remove { id } => {
            let task = store.remove(id)?;
            match format {
                OutputFormat::Json => to_json(&task),
                OutputFormat::Pretty => Ok(format!("🗑️  Removed: {}", task.title)),
            }
        }

        TaskCommands::Pick => pick(&store, format),
    }
}

/// Fuzzy-pick tasks and toggle their completion.
fn pick(store: &TaskStore, format: OutputFormat) -> Result<String, SereinError> {
    let tasks = store.list(None)?;

    if tasks.is_empty() {
        return Ok("No tasks to pick from. Add one with: serein task add \"...\"".to_string());
    }

    let ids = pick_task_ids(&tasks, true)?;

    if ids.is_empty() {
        return Ok("Nothing selected.".to_string());
    }

    let mut toggled = Vec::new();
    for id in ids {
        let completed = tasks
            .iter()
            .find(|t| t.id == id)
            .is_some_and(|t| t.completed);
        toggled.push(store.set_completed(id, !completed)?);
    }

    match format {
        OutputFormat::Json => to_json(&toggled),
        OutputFormat::Pretty => {
            let lines: Vec<String> = toggled
                .iter()
                .map(|t| {
                    if t.completed {
                        format!("✅ Done: {}", t.title)
                    } else {
                        format!("↩️  Reopened: {}", t.title)
                    }
                })
                .collect();
            Ok(lines.join("\n"))
        }
    }
}
