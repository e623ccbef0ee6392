use colored::Colorize;

use crate::features::diary::DiaryEntry;
use crate::features::mood::MoodEntry;
use crate::features::planner::{DayProgress, Priority, Task};

/// Format a list of mood entries as pretty output
#[must_use]
pub fn format_mood_entries_pretty(entries: &[MoodEntry], title: &str) -> String {
    if entries.is_empty() {
        return format!("{} (0 entries)\n  No entries", title);
    }

    let mut output = format!("{} ({} entries)\n", title, entries.len());
    output.push_str(&"─".repeat(60));
    output.push('\n');

    for entry in entries {
        let when = entry.recorded_at.format("%Y-%m-%d %H:%M");
        let mut line = format!("{}  {}", when.to_string().dimmed(), entry.level.to_string().bold());

        if !entry.emotions.is_empty() {
            line.push_str(&format!("  {}", entry.emotions.join(", ").cyan()));
        }

        if !entry.domains.is_empty() {
            let domains = entry
                .domains
                .iter()
                .map(|d| format!("@{d}"))
                .collect::<Vec<_>>()
                .join(" ");
            line.push_str(&format!("  {}", domains.yellow()));
        }

        output.push_str(&line);
        output.push('\n');

        if let Some(notes) = &entry.notes {
            output.push_str(&format!("    {}\n", notes.dimmed()));
        }
    }

    output
}

/// Format a list of tasks as pretty output, with the day's progress
#[must_use]
pub fn format_tasks_pretty(tasks: &[Task], title: &str) -> String {
    if tasks.is_empty() {
        return format!(
            "{} (0 tasks)\n  No tasks. Add one with: serein task add \"...\"",
            title
        );
    }

    let progress = DayProgress::of(tasks);

    let mut output = format!(
        "{} ({}/{} done, {}%)\n",
        title,
        progress.completed,
        progress.total,
        progress.percentage()
    );
    output.push_str(&"─".repeat(60));
    output.push('\n');

    for task in tasks {
        let status_icon = if task.completed {
            "[x]".green()
        } else {
            "[ ]".white()
        };

        let name = if task.completed {
            task.title.strikethrough().to_string()
        } else {
            task.title.clone()
        };

        let mut line = format!("{} #{} {}", status_icon, task.id, name.bold());

        if let Some(time) = task.scheduled_time {
            line.push_str(&format!("  {}", time.format("%H:%M").to_string().yellow()));
        }

        line.push_str(&format!("  {}", task.category.to_string().dimmed()));

        let priority = match task.priority {
            Priority::High => task.priority.to_string().red(),
            Priority::Medium => task.priority.to_string().yellow(),
            Priority::Low => task.priority.to_string().dimmed(),
        };
        line.push_str(&format!("  !{priority}"));

        output.push_str(&line);
        output.push('\n');

        if let Some(description) = &task.description {
            output.push_str(&format!("      {}\n", description.dimmed()));
        }
    }

    output
}

/// Format a list of diary entries as pretty output
#[must_use]
pub fn format_diary_entries_pretty(entries: &[DiaryEntry]) -> String {
    if entries.is_empty() {
        return "Diary (0 entries)\n  No entries. Write one with: serein diary add".to_string();
    }

    let mut output = format!("Diary ({} entries)\n", entries.len());
    output.push_str(&"─".repeat(60));
    output.push('\n');

    for entry in entries {
        let id = entry.id.map_or_else(|| "-".to_string(), |id| id.to_string());
        let when = entry.created_at.format("%Y-%m-%d");

        output.push_str(&format!(
            "#{:<4} {}  {}  {}\n",
            id,
            when.to_string().dimmed(),
            entry.title.bold(),
            entry.mood_level().to_string().cyan()
        ));
    }

    output
}

/// Format a single diary entry as pretty output
#[must_use]
pub fn format_diary_entry_pretty(entry: &DiaryEntry) -> String {
    let mut output = format!("{}\n", entry.title.bold());
    output.push_str(&format!(
        "  {}: {}\n",
        "Written".dimmed(),
        entry.created_at.format("%Y-%m-%d %H:%M")
    ));
    output.push_str(&format!("  {}: {}\n", "Mood".dimmed(), entry.mood_level()));
    output.push('\n');
    output.push_str(&entry.content);
    output.push('\n');

    output
}
