//! Diary entries and draft validation.
//!
//! A draft is validated before it reaches the journal store: an empty title
//! or content, or a mood outside 1-5, never results in a store call.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::SereinError;
use crate::features::mood::{MoodLevel, MOOD_LEVEL_MAX, MOOD_LEVEL_MIN};
use crate::journal::JournalStore;

/// A persisted diary entry.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DiaryEntry {
    /// Database ID (None if not persisted)
    pub id: Option<i64>,
    /// Entry title
    pub title: String,
    /// Entry body
    pub content: String,
    /// Mood at the time of writing, 1-5
    pub mood: u8,
    /// When the entry was written
    pub created_at: DateTime<Utc>,
}

impl DiaryEntry {
    /// The entry's mood as a typed level.
    #[must_use]
    pub const fn mood_level(&self) -> MoodLevel {
        MoodLevel::clamped(self.mood)
    }
}

/// An unvalidated diary draft.
#[derive(Debug, Clone, Default)]
pub struct DiaryDraft {
    /// Draft title
    pub title: String,
    /// Draft body
    pub content: String,
    /// Mood, 1-5
    pub mood: u8,
}

impl DiaryDraft {
    /// Create a draft.
    #[must_use]
    pub const fn new(title: String, content: String, mood: u8) -> Self {
        Self {
            title,
            content,
            mood,
        }
    }

    /// Validate the draft into an entry stamped with the current time.
    ///
    /// # Errors
    ///
    /// Returns `SereinError::Validation` if the title or content is empty
    /// (after trimming) or the mood is outside 1-5.
    pub fn validate(self) -> Result<DiaryEntry, SereinError> {
        let title = self.title.trim();
        if title.is_empty() {
            return Err(SereinError::Validation(
                "Diary title must not be empty".to_string(),
            ));
        }

        let content = self.content.trim();
        if content.is_empty() {
            return Err(SereinError::Validation(
                "Diary content must not be empty".to_string(),
            ));
        }

        if !(MOOD_LEVEL_MIN..=MOOD_LEVEL_MAX).contains(&self.mood) {
            return Err(SereinError::Validation(format!(
                "Mood must be between {MOOD_LEVEL_MIN} and {MOOD_LEVEL_MAX}, got {}",
                self.mood
            )));
        }

        Ok(DiaryEntry {
            id: None,
            title: title.to_string(),
            content: content.to_string(),
            mood: self.mood,
            created_at: Utc::now(),
        })
    }
}

/// Validate a draft and save it through the journal boundary.
///
/// Validation failures never reach the store.
///
/// # Errors
///
/// Returns a validation error for an invalid draft, or the store's error if
/// saving fails (the caller keeps the draft so the user can retry).
pub fn save_draft(store: &dyn JournalStore, draft: DiaryDraft) -> Result<DiaryEntry, SereinError> {
    let mut entry = draft.validate()?;
    store.save_entry(&mut entry)?;
    Ok(entry)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::journal::MockJournalStore;

    fn draft(title: &str, content: &str, mood: u8) -> DiaryDraft {
        DiaryDraft::new(title.to_string(), content.to_string(), mood)
    }

    #[test]
    fn test_validate_accepts_well_formed_draft() {
        let entry = draft("A good day", "Went for a long walk.", 4)
            .validate()
            .unwrap();

        assert_eq!(entry.title, "A good day");
        assert_eq!(entry.mood, 4);
        assert!(entry.id.is_none());
    }

    #[test]
    fn test_validate_trims_whitespace() {
        let entry = draft("  Title  ", "  Body  ", 3).validate().unwrap();

        assert_eq!(entry.title, "Title");
        assert_eq!(entry.content, "Body");
    }

    #[test]
    fn test_validate_rejects_empty_title() {
        assert!(matches!(
            draft("   ", "Body", 3).validate(),
            Err(SereinError::Validation(_))
        ));
    }

    #[test]
    fn test_validate_rejects_empty_content() {
        assert!(matches!(
            draft("Title", "", 3).validate(),
            Err(SereinError::Validation(_))
        ));
    }

    #[test]
    fn test_validate_rejects_out_of_range_mood() {
        assert!(draft("Title", "Body", 0).validate().is_err());
        assert!(draft("Title", "Body", 6).validate().is_err());
    }

    #[test]
    fn test_invalid_draft_never_reaches_store() {
        let mut store = MockJournalStore::new();
        store.expect_save_entry().times(0);

        let result = save_draft(&store, draft("", "Body", 3));

        assert!(matches!(result, Err(SereinError::Validation(_))));
    }

    #[test]
    fn test_valid_draft_is_saved() {
        let mut store = MockJournalStore::new();
        store.expect_save_entry().times(1).returning(|entry| {
            entry.id = Some(7);
            Ok(())
        });

        let entry = save_draft(&store, draft("Title", "Body", 5)).unwrap();

        assert_eq!(entry.id, Some(7));
    }

    #[test]
    fn test_store_failure_surfaces() {
        let mut store = MockJournalStore::new();
        store
            .expect_save_entry()
            .times(1)
            .returning(|_| Err(SereinError::Journal("disk full".to_string())));

        let result = save_draft(&store, draft("Title", "Body", 2));

        assert!(matches!(result, Err(SereinError::Journal(_))));
    }
}
