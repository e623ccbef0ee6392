//! Task types for the day planner.

use chrono::{DateTime, NaiveTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::SereinError;

/// Task priority.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    /// Can wait
    Low,
    /// Normal
    #[default]
    Medium,
    /// Urgent
    High,
}

impl Priority {
    /// Stable lowercase name.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
        }
    }
}

impl std::fmt::Display for Priority {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Priority {
    type Err = SereinError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "low" | "l" => Ok(Self::Low),
            "medium" | "med" | "m" => Ok(Self::Medium),
            "high" | "h" | "urgent" => Ok(Self::High),
            other => Err(SereinError::Validation(format!(
                "Unknown priority '{other}' (expected low, medium, or high)"
            ))),
        }
    }
}

/// Task category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    /// Work tasks
    Work,
    /// Physical health
    Health,
    /// Mindfulness and self-care
    Wellness,
    /// Everything else
    #[default]
    Personal,
}

impl Category {
    /// Every category, in display order.
    pub const ALL: [Self; 4] = [Self::Work, Self::Health, Self::Wellness, Self::Personal];

    /// Stable lowercase name.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Work => "work",
            Self::Health => "health",
            Self::Wellness => "wellness",
            Self::Personal => "personal",
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Category {
    type Err = SereinError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "work" => Ok(Self::Work),
            "health" => Ok(Self::Health),
            "wellness" | "wellbeing" => Ok(Self::Wellness),
            "personal" => Ok(Self::Personal),
            other => Err(SereinError::Validation(format!(
                "Unknown category '{other}' (expected one of: {})",
                Self::ALL.map(|c| c.as_str()).join(", ")
            ))),
        }
    }
}

/// A planner task.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Task {
    /// Store-assigned identifier
    pub id: u64,
    /// Task title
    pub title: String,
    /// Optional details
    #[serde(default)]
    pub description: Option<String>,
    /// Priority
    #[serde(default)]
    pub priority: Priority,
    /// Category
    #[serde(default)]
    pub category: Category,
    /// Optional time of day (HH:MM)
    #[serde(default)]
    pub scheduled_time: Option<NaiveTime>,
    /// Whether the task is done
    #[serde(default)]
    pub completed: bool,
    /// When the task was created
    pub created_at: DateTime<Utc>,
}

impl Task {
    /// Build a validated task (the store assigns the real ID on add).
    ///
    /// # Errors
    ///
    /// Returns `SereinError::Validation` for an empty title or an
    /// unparseable time.
    pub fn build(
        title: &str,
        description: Option<String>,
        priority: Priority,
        category: Category,
        time: Option<&str>,
    ) -> Result<Self, SereinError> {
        let title = title.trim();
        if title.is_empty() {
            return Err(SereinError::Validation(
                "Task title must not be empty".to_string(),
            ));
        }

        let scheduled_time = time.map(parse_time).transpose()?;

        Ok(Self {
            id: 0,
            title: title.to_string(),
            description: description.filter(|d| !d.trim().is_empty()),
            priority,
            category,
            scheduled_time,
            completed: false,
            created_at: Utc::now(),
        })
    }
}

/// Parse a time of day like "8:00" or "18:30".
///
/// # Errors
///
/// Returns `SereinError::Validation` if the string is not HH:MM.
pub fn parse_time(s: &str) -> Result<NaiveTime, SereinError> {
    NaiveTime::parse_from_str(s.trim(), "%H:%M")
        .map_err(|_| SereinError::Validation(format!("Invalid time '{s}' (expected HH:MM)")))
}

/// Completion summary for a set of tasks.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct DayProgress {
    /// Completed tasks
    pub completed: usize,
    /// All tasks
    pub total: usize,
}

impl DayProgress {
    /// Summarize a task list.
    #[must_use]
    pub fn of(tasks: &[Task]) -> Self {
        Self {
            completed: tasks.iter().filter(|t| t.completed).count(),
            total: tasks.len(),
        }
    }

    /// Completion as a percentage (0 when there are no tasks).
    #[must_use]
    #[allow(clippy::cast_precision_loss, clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn percentage(&self) -> u8 {
        if self.total == 0 {
            return 0;
        }
        ((self.completed as f64 / self.total as f64) * 100.0).round() as u8
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_priority_parse() {
        assert_eq!("high".parse::<Priority>().unwrap(), Priority::High);
        assert_eq!("M".parse::<Priority>().unwrap(), Priority::Medium);
        assert!("critical".parse::<Priority>().is_err());
    }

    #[test]
    fn test_category_parse() {
        assert_eq!("wellness".parse::<Category>().unwrap(), Category::Wellness);
        assert!("chores".parse::<Category>().is_err());
    }

    #[test]
    fn test_parse_time() {
        assert_eq!(
            parse_time("08:00").unwrap(),
            NaiveTime::from_hms_opt(8, 0, 0).unwrap()
        );
        assert_eq!(
            parse_time("18:30").unwrap(),
            NaiveTime::from_hms_opt(18, 30, 0).unwrap()
        );
        assert!(parse_time("25:00").is_err());
        assert!(parse_time("morning").is_err());
    }

    #[test]
    fn test_build_rejects_empty_title() {
        let result = Task::build("  ", None, Priority::Low, Category::Personal, None);
        assert!(matches!(result, Err(SereinError::Validation(_))));
    }

    #[test]
    fn test_build_task() {
        let task = Task::build(
            "Morning meditation",
            Some("10 minutes".to_string()),
            Priority::High,
            Category::Wellness,
            Some("08:00"),
        )
        .unwrap();

        assert_eq!(task.title, "Morning meditation");
        assert_eq!(task.priority, Priority::High);
        assert_eq!(task.category, Category::Wellness);
        assert!(!task.completed);
        assert!(task.scheduled_time.is_some());
    }

    #[test]
    fn test_day_progress() {
        let mut tasks = vec![
            Task::build("a", None, Priority::Low, Category::Work, None).unwrap(),
            Task::build("b", None, Priority::Low, Category::Work, None).unwrap(),
            Task::build("c", None, Priority::Low, Category::Work, None).unwrap(),
            Task::build("d", None, Priority::Low, Category::Work, None).unwrap(),
        ];
        tasks[0].completed = true;

        let progress = DayProgress::of(&tasks);
        assert_eq!(progress.completed, 1);
        assert_eq!(progress.total, 4);
        assert_eq!(progress.percentage(), 25);
    }

    #[test]
    fn test_day_progress_empty() {
        assert_eq!(DayProgress::of(&[]).percentage(), 0);
    }
}
