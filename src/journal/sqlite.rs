//! SQLite-backed journal store.

use chrono::{DateTime, Utc};
use rusqlite::{params, OptionalExtension, Row};

use crate::error::SereinError;
use crate::features::diary::DiaryEntry;
use crate::storage::Database;

use super::JournalStore;

/// Diary persistence in the local database.
pub struct SqliteJournal {
    db: Database,
}

impl SqliteJournal {
    /// Open the journal at the default database location.
    ///
    /// # Errors
    ///
    /// Returns an error if the database cannot be opened.
    pub fn new() -> Result<Self, SereinError> {
        let db = Database::open()?;
        Ok(Self { db })
    }

    /// Create a journal over an existing database connection.
    #[must_use]
    pub const fn with_database(db: Database) -> Self {
        Self { db }
    }
}

impl JournalStore for SqliteJournal {
    fn save_entry(&self, entry: &mut DiaryEntry) -> Result<(), SereinError> {
        let conn = self.db.connection();

        conn.execute(
            r"INSERT INTO diary_entries (title, content, mood, created_at)
              VALUES (?1, ?2, ?3, ?4)",
            params![
                entry.title,
                entry.content,
                entry.mood,
                entry.created_at.to_rfc3339(),
            ],
        )
        .map_err(|e| SereinError::Journal(format!("Failed to save entry: {e}")))?;

        entry.id = Some(conn.last_insert_rowid());
        Ok(())
    }

    fn list_entries(&self, limit: usize) -> Result<Vec<DiaryEntry>, SereinError> {
        let conn = self.db.connection();

        let mut stmt = conn
            .prepare(
                r"SELECT id, title, content, mood, created_at
                  FROM diary_entries
                  ORDER BY created_at DESC
                  LIMIT ?1",
            )
            .map_err(|e| SereinError::Journal(format!("Failed to prepare query: {e}")))?;

        let rows = stmt
            .query_map([limit], row_to_entry)
            .map_err(|e| SereinError::Journal(format!("Failed to query entries: {e}")))?;

        let mut entries = Vec::new();
        for row in rows {
            entries.push(row.map_err(|e| SereinError::Journal(e.to_string()))?);
        }

        Ok(entries)
    }

    fn get_entry(&self, id: i64) -> Result<Option<DiaryEntry>, SereinError> {
        let conn = self.db.connection();

        let mut stmt = conn
            .prepare(
                r"SELECT id, title, content, mood, created_at
                  FROM diary_entries WHERE id = ?1",
            )
            .map_err(|e| SereinError::Journal(format!("Failed to prepare query: {e}")))?;

        stmt.query_row([id], row_to_entry)
            .optional()
            .map_err(|e| SereinError::Journal(format!("Failed to query entry: {e}")))
    }
}

/// Convert a database row to a `DiaryEntry`.
fn row_to_entry(row: &Row<'_>) -> Result<DiaryEntry, rusqlite::Error> {
    let id: i64 = row.get(0)?;
    let title: String = row.get(1)?;
    let content: String = row.get(2)?;
    let mood: u8 = row.get(3)?;
    let created_at_str: String = row.get(4)?;

    let created_at = DateTime::parse_from_rfc3339(&created_at_str)
        .map(|t| t.with_timezone(&Utc))
        .unwrap_or_else(|_| Utc::now());

    Ok(DiaryEntry {
        id: Some(id),
        title,
        content,
        mood,
        created_at,
    })
}
