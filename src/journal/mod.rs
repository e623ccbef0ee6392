//! The journal boundary: diary persistence.
//!
//! The diary backend is the one external collaborator in serein. Commands
//! talk to it through the narrow [`JournalStore`] trait so the backend can
//! be swapped (and mocked in tests); the production implementation writes to
//! the local SQLite database.

mod sqlite;

pub use sqlite::SqliteJournal;

use crate::error::SereinError;
use crate::features::diary::DiaryEntry;

/// Narrow interface to the diary backend.
#[cfg_attr(test, mockall::automock)]
pub trait JournalStore {
    /// Persist an entry, filling in its ID on success.
    ///
    /// # Errors
    ///
    /// Returns `SereinError::Journal` if the backend rejects or fails the
    /// insert. The caller's draft state is untouched so it can retry.
    fn save_entry(&self, entry: &mut DiaryEntry) -> Result<(), SereinError>;

    /// List the most recent entries, newest first.
    ///
    /// # Errors
    ///
    /// Returns `SereinError::Journal` if the backend query fails.
    fn list_entries(&self, limit: usize) -> Result<Vec<DiaryEntry>, SereinError>;

    /// Fetch a single entry by ID.
    ///
    /// # Errors
    ///
    /// Returns `SereinError::Journal` if the backend query fails.
    fn get_entry(&self, id: i64) -> Result<Option<DiaryEntry>, SereinError>;
}
