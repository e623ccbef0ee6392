//! Mood entry storage.
//!
//! Persists mood entries to the local database. Emotion and domain lists are
//! stored as JSON arrays in text columns.

use chrono::{DateTime, Duration, NaiveTime, Utc};
use rusqlite::{params, Row};

use crate::error::SereinError;
use crate::storage::Database;

use super::entry::{LifeDomain, MoodEntry, MoodLevel};

/// Storage for mood entries.
pub struct MoodStorage {
    db: Database,
}

impl MoodStorage {
    /// Open mood storage at the default database location.
    ///
    /// # Errors
    ///
    /// Returns an error if the database cannot be opened.
    pub fn new() -> Result<Self, SereinError> {
        let db = Database::open()?;
        Ok(Self { db })
    }

    /// Create storage over an existing database connection.
    #[must_use]
    pub const fn with_database(db: Database) -> Self {
        Self { db }
    }

    /// Save a mood entry, filling in its ID.
    ///
    /// # Errors
    ///
    /// Returns an error if the insert fails.
    pub fn save(&self, entry: &mut MoodEntry) -> Result<(), SereinError> {
        let conn = self.db.connection();

        let emotions = serde_json::to_string(&entry.emotions)?;
        let domains = serde_json::to_string(&entry.domains)?;

        conn.execute(
            r"INSERT INTO mood_entries (level, emotions, domains, notes, recorded_at)
              VALUES (?1, ?2, ?3, ?4, ?5)",
            params![
                entry.level.value(),
                emotions,
                domains,
                entry.notes,
                entry.recorded_at.to_rfc3339(),
            ],
        )
        .map_err(|e| SereinError::Database(format!("Failed to save mood entry: {e}")))?;

        entry.id = Some(conn.last_insert_rowid());
        Ok(())
    }

    /// Get the most recent entries, newest first.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn recent(&self, limit: usize) -> Result<Vec<MoodEntry>, SereinError> {
        let conn = self.db.connection();

        let mut stmt = conn
            .prepare(
                r"SELECT id, level, emotions, domains, notes, recorded_at
                  FROM mood_entries
                  ORDER BY recorded_at DESC
                  LIMIT ?1",
            )
            .map_err(|e| SereinError::Database(format!("Failed to prepare query: {e}")))?;

        let rows = stmt
            .query_map([limit], row_to_entry)
            .map_err(|e| SereinError::Database(format!("Failed to query mood entries: {e}")))?;

        collect_rows(rows)
    }

    /// Get entries in a time range, newest first.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn range(
        &self,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> Result<Vec<MoodEntry>, SereinError> {
        let conn = self.db.connection();

        let mut stmt = conn
            .prepare(
                r"SELECT id, level, emotions, domains, notes, recorded_at
                  FROM mood_entries
                  WHERE recorded_at >= ?1 AND recorded_at < ?2
                  ORDER BY recorded_at DESC",
            )
            .map_err(|e| SereinError::Database(format!("Failed to prepare query: {e}")))?;

        let rows = stmt
            .query_map([start.to_rfc3339(), end.to_rfc3339()], row_to_entry)
            .map_err(|e| SereinError::Database(format!("Failed to query mood entries: {e}")))?;

        collect_rows(rows)
    }

    /// Get every entry, newest first.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn all(&self) -> Result<Vec<MoodEntry>, SereinError> {
        let conn = self.db.connection();

        let mut stmt = conn
            .prepare(
                r"SELECT id, level, emotions, domains, notes, recorded_at
                  FROM mood_entries
                  ORDER BY recorded_at DESC",
            )
            .map_err(|e| SereinError::Database(format!("Failed to prepare query: {e}")))?;

        let rows = stmt
            .query_map([], row_to_entry)
            .map_err(|e| SereinError::Database(format!("Failed to query mood entries: {e}")))?;

        collect_rows(rows)
    }

    /// Get today's entries (UTC day), newest first.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn today(&self) -> Result<Vec<MoodEntry>, SereinError> {
        let day = Utc::now().date_naive();
        let start = day.and_time(NaiveTime::MIN).and_utc();
        let end = (day + Duration::days(1)).and_time(NaiveTime::MIN).and_utc();

        self.range(start, end)
    }
}

fn collect_rows(
    rows: impl Iterator<Item = Result<MoodEntry, rusqlite::Error>>,
) -> Result<Vec<MoodEntry>, SereinError> {
    let mut entries = Vec::new();
    for row in rows {
        entries.push(row.map_err(|e| SereinError::Database(e.to_string()))?);
    }
    Ok(entries)
}

/// Convert a database row to a `MoodEntry`.
fn row_to_entry(row: &Row<'_>) -> Result<MoodEntry, rusqlite::Error> {
    let id: i64 = row.get(0)?;
    let level: u8 = row.get(1)?;
    let emotions_str: String = row.get(2)?;
    let domains_str: String = row.get(3)?;
    let notes: Option<String> = row.get(4)?;
    let recorded_at_str: String = row.get(5)?;

    let emotions: Vec<String> = serde_json::from_str(&emotions_str).unwrap_or_default();
    let domains: Vec<LifeDomain> = serde_json::from_str(&domains_str).unwrap_or_default();

    let recorded_at = DateTime::parse_from_rfc3339(&recorded_at_str)
        .map(|t| t.with_timezone(&Utc))
        .unwrap_or_else(|_| Utc::now());

    Ok(MoodEntry {
        id: Some(id),
        level: MoodLevel::clamped(level),
        emotions,
        domains,
        notes,
        recorded_at,
    })
}
