//! Diary command implementation.
//!
//! The save path validates drafts before the journal store is touched; a
//! failed save keeps the draft intact so the user can retry.

use colored::Colorize;

use crate::cli::args::{DiaryCommands, OutputFormat};
use crate::error::SereinError;
use crate::features::diary::{save_draft, DiaryDraft};
use crate::journal::{JournalStore, SqliteJournal};
use crate::output::{format_diary_entries, format_diary_entry, to_json};

/// Execute diary subcommands.
///
/// # Errors
///
/// Returns an error if validation, the journal backend, or output
/// formatting fails.
pub fn diary(cmd: DiaryCommands, format: OutputFormat) -> Result<String, SereinError> {
    let journal = SqliteJournal::new()?;
    diary_with_store(&journal, cmd, format)
}

/// Command logic against any journal backend (mockable in tests).
pub(crate) fn diary_with_store(
    store: &dyn JournalStore,
    cmd: DiaryCommands,
    format: OutputFormat,
) -> Result<String, SereinError> {
    match cmd {
        DiaryCommands::Add {
            title,
            content,
            mood,
        } => {
            let draft = DiaryDraft::new(title, content, mood);

            let entry = save_draft(store, draft).map_err(|e| match e {
                SereinError::Journal(msg) => SereinError::Journal(format!(
                    "{msg}. Your entry was not saved; re-run the same command to retry."
                )),
                other => other,
            })?;

            match format {
                OutputFormat::Json => to_json(&entry),
                OutputFormat::Pretty => {
                    let id = entry.id.unwrap_or_default();
                    Ok(format!(
                        "{}\n   {}",
                        format!("📖 Entry saved: {} (ID {id})", entry.title).green(),
                        "Read it back with 'serein diary show'".dimmed()
                    ))
                }
            }
        }

        DiaryCommands::List { limit } => {
            let entries = store.list_entries(limit)?;
            format_diary_entries(&entries, format)
        }

        DiaryCommands::Show { id } => {
            let entry = store
                .get_entry(id)?
                .ok_or_else(|| SereinError::NotFound(format!("Diary entry {id}")))?;
            format_diary_entry(&entry, format)
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::journal::MockJournalStore;

    #[test]
    fn test_add_with_empty_title_never_touches_store() {
        let mut store = MockJournalStore::new();
        store.expect_save_entry().times(0);

        let result = diary_with_store(
            &store,
            DiaryCommands::Add {
                title: "  ".to_string(),
                content: "body".to_string(),
                mood: 3,
            },
            OutputFormat::Pretty,
        );

        assert!(matches!(result, Err(SereinError::Validation(_))));
    }

    #[test]
    fn test_add_saves_and_reports_id() {
        let mut store = MockJournalStore::new();
        store.expect_save_entry().times(1).returning(|entry| {
            entry.id = Some(12);
            Ok(())
        });

        let output = diary_with_store(
            &store,
            DiaryCommands::Add {
                title: "A walk".to_string(),
                content: "It rained.".to_string(),
                mood: 4,
            },
            OutputFormat::Pretty,
        )
        .unwrap();

        assert!(output.contains("A walk"));
        assert!(output.contains("ID 12"));
    }

    #[test]
    fn test_store_failure_adds_retry_hint() {
        let mut store = MockJournalStore::new();
        store
            .expect_save_entry()
            .returning(|_| Err(SereinError::Journal("database is locked".to_string())));

        let result = diary_with_store(
            &store,
            DiaryCommands::Add {
                title: "Title".to_string(),
                content: "Body".to_string(),
                mood: 3,
            },
            OutputFormat::Pretty,
        );

        match result {
            Err(SereinError::Journal(msg)) => {
                assert!(msg.contains("database is locked"));
                assert!(msg.contains("retry"));
            }
            other => panic!("expected journal error, got {other:?}"),
        }
    }

    #[test]
    fn test_show_missing_entry() {
        let mut store = MockJournalStore::new();
        store.expect_get_entry().returning(|_| Ok(None));

        let result = diary_with_store(
            &store,
            DiaryCommands::Show { id: 5 },
            OutputFormat::Pretty,
        );

        assert!(matches!(result, Err(SereinError::NotFound(_))));
    }
}
