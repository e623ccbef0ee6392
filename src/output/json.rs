//! JSON output formatting for serein.

use serde::Serialize;
use serde_json::json;

use crate::error::SereinError;
use crate::features::diary::DiaryEntry;
use crate::features::mood::MoodEntry;
use crate::features::planner::{DayProgress, Task};

/// Format mood entries as JSON
///
/// # Errors
///
/// Returns `SereinError::Parse` if JSON serialization fails.
pub fn format_mood_entries_json(
    entries: &[MoodEntry],
    list_name: &str,
) -> Result<String, SereinError> {
    let output = json!({
        "list": list_name,
        "count": entries.len(),
        "items": entries
    });
    Ok(serde_json::to_string_pretty(&output)?)
}

/// Format tasks as JSON, with the day's completion summary
///
/// # Errors
///
/// Returns `SereinError::Parse` if JSON serialization fails.
pub fn format_tasks_json(tasks: &[Task], list_name: &str) -> Result<String, SereinError> {
    let progress = DayProgress::of(tasks);
    let output = json!({
        "list": list_name,
        "count": tasks.len(),
        "completed": progress.completed,
        "percentage": progress.percentage(),
        "items": tasks
    });
    Ok(serde_json::to_string_pretty(&output)?)
}

/// Format diary entries as JSON
///
/// # Errors
///
/// Returns `SereinError::Parse` if JSON serialization fails.
pub fn format_diary_entries_json(entries: &[DiaryEntry]) -> Result<String, SereinError> {
    let output = json!({
        "count": entries.len(),
        "items": entries
    });
    Ok(serde_json::to_string_pretty(&output)?)
}

/// Generic JSON formatter for any serializable type
///
/// # Errors
///
/// Returns `SereinError::Parse` if JSON serialization fails.
pub fn to_json<T: Serialize>(value: &T) -> Result<String, SereinError> {
    Ok(serde_json::to_string_pretty(value)?)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::features::mood::LifeDomain;
    use crate::features::planner::{Category, Priority};

    #[test]
    fn test_format_mood_entries_json() {
        let entries = vec![MoodEntry::build(
            4,
            &["calm".to_string()],
            vec![LifeDomain::Work],
            None,
        )
        .unwrap()];

        let json = format_mood_entries_json(&entries, "Recent").unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value["list"], "Recent");
        assert_eq!(value["count"], 1);
        assert_eq!(value["items"][0]["level"], 4);
        assert_eq!(value["items"][0]["emotions"][0], "calm");
    }

    #[test]
    fn test_format_tasks_json_includes_progress() {
        let mut tasks = vec![
            Task::build("a", None, Priority::Low, Category::Work, None).unwrap(),
            Task::build("b", None, Priority::Low, Category::Work, None).unwrap(),
        ];
        tasks[0].completed = true;

        let json = format_tasks_json(&tasks, "Tasks").unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value["count"], 2);
        assert_eq!(value["completed"], 1);
        assert_eq!(value["percentage"], 50);
    }

    #[test]
    fn test_to_json() {
        let json = to_json(&vec![1, 2, 3]).unwrap();
        assert!(json.contains('1'));
    }
}
