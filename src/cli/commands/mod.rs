//! Command implementations for serein.
//!
//! This module contains the implementation of all CLI commands.

mod diary;
mod mood;
mod session;
mod stats;
mod task;

pub use diary::diary;
pub use mood::mood;
pub use session::{breathe, mix, pomodoro};
pub use stats::stats;
pub use task::task;

use clap::CommandFactory;
use colored::Colorize;

use crate::cli::args::{Cli, OutputFormat};
use crate::error::SereinError;
use crate::features::insights::{ReportPeriod, WellnessReport};
use crate::features::mood::MoodStorage;
use crate::features::planner::{DayProgress, TaskStore};
use crate::output::format_tasks_pretty;

/// Execute the today command: tasks, mood, and streak at a glance.
///
/// # Errors
///
/// Returns an error if storage access or output formatting fails.
pub fn today(format: OutputFormat) -> Result<String, SereinError> {
    let tasks = TaskStore::new()?.list(None)?;
    let moods = MoodStorage::new()?;
    let today_moods = moods.today()?;
    let all_moods = moods.all()?;

    let report = WellnessReport::generate(ReportPeriod::Today, &today_moods, &all_moods);

    match format {
        OutputFormat::Json => {
            let progress = DayProgress::of(&tasks);
            let output = serde_json::json!({
                "tasks": tasks,
                "completed": progress.completed,
                "percentage": progress.percentage(),
                "moods_logged": today_moods.len(),
                "average_mood": report.average_mood,
                "streak_days": report.streak_days,
            });
            Ok(serde_json::to_string_pretty(&output)?)
        }
        OutputFormat::Pretty => {
            let mut output = Vec::new();

            output.push(format_tasks_pretty(&tasks, "Today"));

            if today_moods.is_empty() {
                output.push(
                    "No mood logged yet today. Try: serein mood add --level 3"
                        .dimmed()
                        .to_string(),
                );
            } else {
                output.push(format!(
                    "Mood today: {} entr{}, average {:.1}/5",
                    today_moods.len(),
                    if today_moods.len() == 1 { "y" } else { "ies" },
                    report.average_mood
                ));
            }

            output.push(format!(
                "Streak: {} day{}",
                report.streak_days,
                if report.streak_days == 1 { "" } else { "s" }
            ));

            Ok(output.join("\n"))
        }
    }
}

/// Generate shell completions for the specified shell.
///
/// # Errors
///
/// Returns an error if the generated script is not valid UTF-8.
pub fn completions(shell: clap_complete::Shell) -> Result<String, SereinError> {
    let mut cmd = Cli::command();
    let mut buf = Vec::new();
    clap_complete::generate(shell, &mut cmd, "serein", &mut buf);
    String::from_utf8(buf).map_err(|e| SereinError::Config(format!("UTF-8 error: {e}")))
}
