//! Output formatting for serein.
//!
//! This module provides formatters for displaying serein data in various
//! formats.

mod json;
mod pretty;

use crate::cli::args::OutputFormat;
use crate::error::SereinError;
use crate::features::diary::DiaryEntry;
use crate::features::mood::MoodEntry;
use crate::features::planner::Task;

pub use json::*;
pub use pretty::*;

/// Format mood entries based on output format
///
/// # Errors
///
/// Returns `SereinError::Parse` if JSON serialization fails.
pub fn format_mood_entries(
    entries: &[MoodEntry],
    title: &str,
    format: OutputFormat,
) -> Result<String, SereinError> {
    match format {
        OutputFormat::Pretty => Ok(format_mood_entries_pretty(entries, title)),
        OutputFormat::Json => format_mood_entries_json(entries, title),
    }
}

/// Format tasks based on output format
///
/// # Errors
///
/// Returns `SereinError::Parse` if JSON serialization fails.
pub fn format_tasks(
    tasks: &[Task],
    title: &str,
    format: OutputFormat,
) -> Result<String, SereinError> {
    match format {
        OutputFormat::Pretty => Ok(format_tasks_pretty(tasks, title)),
        OutputFormat::Json => format_tasks_json(tasks, title),
    }
}

/// Format diary entries based on output format
///
/// # Errors
///
/// Returns `SereinError::Parse` if JSON serialization fails.
pub fn format_diary_entries(
    entries: &[DiaryEntry],
    format: OutputFormat,
) -> Result<String, SereinError> {
    match format {
        OutputFormat::Pretty => Ok(format_diary_entries_pretty(entries)),
        OutputFormat::Json => format_diary_entries_json(entries),
    }
}

/// Format a single diary entry based on output format
///
/// # Errors
///
/// Returns `SereinError::Parse` if JSON serialization fails.
pub fn format_diary_entry(entry: &DiaryEntry, format: OutputFormat) -> Result<String, SereinError> {
    match format {
        OutputFormat::Pretty => Ok(format_diary_entry_pretty(entry)),
        OutputFormat::Json => to_json(entry),
    }
}
