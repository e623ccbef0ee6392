//! Mood entry types and catalogs.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::SereinError;

/// Lowest mood level.
pub const MOOD_LEVEL_MIN: u8 = 1;
/// Highest mood level.
pub const MOOD_LEVEL_MAX: u8 = 5;

/// A mood level on the 1-5 scale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MoodLevel(u8);

impl MoodLevel {
    /// Create a level, rejecting values outside 1-5.
    ///
    /// # Errors
    ///
    /// Returns `SereinError::Validation` for out-of-range values.
    pub fn new(level: u8) -> Result<Self, SereinError> {
        if (MOOD_LEVEL_MIN..=MOOD_LEVEL_MAX).contains(&level) {
            Ok(Self(level))
        } else {
            Err(SereinError::Validation(format!(
                "Mood level must be between {MOOD_LEVEL_MIN} and {MOOD_LEVEL_MAX}, got {level}"
            )))
        }
    }

    /// Create a level, clamping out-of-range values into 1-5.
    #[must_use]
    pub const fn clamped(level: u8) -> Self {
        if level < MOOD_LEVEL_MIN {
            Self(MOOD_LEVEL_MIN)
        } else if level > MOOD_LEVEL_MAX {
            Self(MOOD_LEVEL_MAX)
        } else {
            Self(level)
        }
    }

    /// The numeric value, 1-5.
    #[must_use]
    pub const fn value(self) -> u8 {
        self.0
    }

    /// Human-readable label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self.0 {
            1 => "very low",
            2 => "low",
            3 => "neutral",
            4 => "good",
            _ => "excellent",
        }
    }
}

impl std::fmt::Display for MoodLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/5 ({})", self.0, self.label())
    }
}

/// The fixed emotion catalog.
pub const EMOTIONS: [&str; 15] = [
    "happy",
    "calm",
    "energetic",
    "confident",
    "grateful",
    "anxious",
    "stressed",
    "tired",
    "irritated",
    "sad",
    "motivated",
    "creative",
    "relaxed",
    "optimistic",
    "peaceful",
];

/// Resolve an emotion name to its catalog spelling (case-insensitive).
#[must_use]
pub fn canonical_emotion(name: &str) -> Option<&'static str> {
    EMOTIONS
        .iter()
        .find(|e| e.eq_ignore_ascii_case(name.trim()))
        .copied()
}

/// A life domain a mood entry can be attributed to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LifeDomain {
    /// Work life
    Work,
    /// Studies
    Study,
    /// Family
    Family,
    /// Relationships
    Relationships,
    /// Physical and mental health
    Health,
    /// Finances
    Finance,
    /// Personal growth
    Personal,
    /// Social life
    Social,
}

impl LifeDomain {
    /// Every domain, in display order.
    pub const ALL: [Self; 8] = [
        Self::Work,
        Self::Study,
        Self::Family,
        Self::Relationships,
        Self::Health,
        Self::Finance,
        Self::Personal,
        Self::Social,
    ];

    /// Stable lowercase name.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Work => "work",
            Self::Study => "study",
            Self::Family => "family",
            Self::Relationships => "relationships",
            Self::Health => "health",
            Self::Finance => "finance",
            Self::Personal => "personal",
            Self::Social => "social",
        }
    }
}

impl std::fmt::Display for LifeDomain {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for LifeDomain {
    type Err = SereinError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "work" => Ok(Self::Work),
            "study" | "studies" => Ok(Self::Study),
            "family" => Ok(Self::Family),
            "relationships" | "relationship" => Ok(Self::Relationships),
            "health" => Ok(Self::Health),
            "finance" | "finances" => Ok(Self::Finance),
            "personal" => Ok(Self::Personal),
            "social" => Ok(Self::Social),
            other => Err(SereinError::Validation(format!(
                "Unknown life domain '{other}' (expected one of: {})",
                Self::ALL.map(|d| d.as_str()).join(", ")
            ))),
        }
    }
}

/// One mood log entry.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MoodEntry {
    /// Database ID (None if not persisted)
    pub id: Option<i64>,
    /// Mood level, 1-5
    pub level: MoodLevel,
    /// Emotions felt (catalog spellings)
    pub emotions: Vec<String>,
    /// Life domains affected
    pub domains: Vec<LifeDomain>,
    /// Optional free-form notes
    pub notes: Option<String>,
    /// When the mood was recorded
    pub recorded_at: DateTime<Utc>,
}

impl MoodEntry {
    /// Build a validated entry stamped with the current time.
    ///
    /// Emotion names are resolved against the catalog case-insensitively.
    ///
    /// # Errors
    ///
    /// Returns `SereinError::Validation` for an out-of-range level or an
    /// emotion not in the catalog.
    pub fn build(
        level: u8,
        emotions: &[String],
        domains: Vec<LifeDomain>,
        notes: Option<String>,
    ) -> Result<Self, SereinError> {
        let level = MoodLevel::new(level)?;

        let mut resolved = Vec::with_capacity(emotions.len());
        for name in emotions {
            let canonical = canonical_emotion(name).ok_or_else(|| {
                SereinError::Validation(format!(
                    "Unknown emotion '{name}' (expected one of: {})",
                    EMOTIONS.join(", ")
                ))
            })?;
            if !resolved.contains(&canonical.to_string()) {
                resolved.push(canonical.to_string());
            }
        }

        Ok(Self {
            id: None,
            level,
            emotions: resolved,
            domains,
            notes: notes.filter(|n| !n.trim().is_empty()),
            recorded_at: Utc::now(),
        })
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_mood_level_bounds() {
        assert!(MoodLevel::new(1).is_ok());
        assert!(MoodLevel::new(5).is_ok());
        assert!(MoodLevel::new(0).is_err());
        assert!(MoodLevel::new(6).is_err());
    }

    #[test]
    fn test_mood_level_labels() {
        assert_eq!(MoodLevel::new(1).unwrap().label(), "very low");
        assert_eq!(MoodLevel::new(3).unwrap().label(), "neutral");
        assert_eq!(MoodLevel::new(5).unwrap().label(), "excellent");
    }

    #[test]
    fn test_mood_level_clamped() {
        assert_eq!(MoodLevel::clamped(0).value(), 1);
        assert_eq!(MoodLevel::clamped(9).value(), 5);
        assert_eq!(MoodLevel::clamped(3).value(), 3);
    }

    #[test]
    fn test_canonical_emotion() {
        assert_eq!(canonical_emotion("Calm"), Some("calm"));
        assert_eq!(canonical_emotion(" HAPPY "), Some("happy"));
        assert_eq!(canonical_emotion("bored"), None);
    }

    #[test]
    fn test_life_domain_parse() {
        assert_eq!("work".parse::<LifeDomain>().unwrap(), LifeDomain::Work);
        assert_eq!(
            "Relationships".parse::<LifeDomain>().unwrap(),
            LifeDomain::Relationships
        );
        assert!("gardening".parse::<LifeDomain>().is_err());
    }

    #[test]
    fn test_build_resolves_and_dedupes_emotions() {
        let entry = MoodEntry::build(
            4,
            &["Calm".to_string(), "calm".to_string(), "happy".to_string()],
            vec![LifeDomain::Work],
            None,
        )
        .unwrap();

        assert_eq!(entry.emotions, vec!["calm", "happy"]);
    }

    #[test]
    fn test_build_rejects_unknown_emotion() {
        let result = MoodEntry::build(3, &["bored".to_string()], vec![], None);
        assert!(matches!(result, Err(SereinError::Validation(_))));
    }

    #[test]
    fn test_build_rejects_bad_level() {
        assert!(MoodEntry::build(0, &[], vec![], None).is_err());
    }

    #[test]
    fn test_build_drops_blank_notes() {
        let entry = MoodEntry::build(3, &[], vec![], Some("   ".to_string())).unwrap();
        assert!(entry.notes.is_none());
    }
}
