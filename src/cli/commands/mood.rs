//! Mood command implementation.

use colored::Colorize;

use crate::cli::args::{MoodCommands, OutputFormat};
use crate::error::SereinError;
use crate::features::mood::{LifeDomain, MoodEntry, MoodStorage};
use crate::output::{format_mood_entries, to_json};

/// Execute mood subcommands.
///
/// # Errors
///
/// Returns an error if validation, storage, or output formatting fails.
pub fn mood(cmd: MoodCommands, format: OutputFormat) -> Result<String, SereinError> {
    let storage = MoodStorage::new()?;

    match cmd {
        MoodCommands::Add {
            level,
            emotions,
            domains,
            notes,
        } => add_entry(&storage, level, &emotions, &domains, notes, format),

        MoodCommands::List { limit } => {
            let entries = storage.recent(limit)?;
            format_mood_entries(&entries, "Recent moods", format)
        }

        MoodCommands::Today => {
            let entries = storage.today()?;
            format_mood_entries(&entries, "Today", format)
        }
    }
}

fn add_entry(
    storage: &MoodStorage,
    level: u8,
    emotions: &[String],
    domains: &[String],
    notes: Option<String>,
    format: OutputFormat,
) -> Result<String, SereinError> {
    let domains = domains
        .iter()
        .map(|d| d.parse::<LifeDomain>())
        .collect::<Result<Vec<_>, _>>()?;

    let mut entry = MoodEntry::build(level, emotions, domains, notes)?;
    storage.save(&mut entry)?;

    match format {
        OutputFormat::Json => to_json(&entry),
        OutputFormat::Pretty => {
            let mut output = Vec::new();

            output.push(format!("💙 Mood logged: {}", entry.level).green().to_string());

            if !entry.emotions.is_empty() {
                output.push(format!("   Emotions: {}", entry.emotions.join(", ")));
            }

            if !entry.domains.is_empty() {
                let domains = entry
                    .domains
                    .iter()
                    .map(ToString::to_string)
                    .collect::<Vec<_>>()
                    .join(", ");
                output.push(format!("   Domains:  {domains}"));
            }

            output.push(String::new());
            output.push("   See your trends with 'serein stats'".dimmed().to_string());

            Ok(output.join("\n"))
        }
    }
}
