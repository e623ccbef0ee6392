//! Stats command implementation.

use crate::cli::args::OutputFormat;
use crate::error::SereinError;
use crate::features::insights::{ReportPeriod, WellnessReport};
use crate::features::mood::MoodStorage;
use crate::output::to_json;

/// Execute the stats command.
///
/// # Errors
///
/// Returns an error if storage access or output formatting fails.
pub fn stats(period: &str, format: OutputFormat) -> Result<String, SereinError> {
    let storage = MoodStorage::new()?;

    let period = ReportPeriod::parse(period);
    let (start, end) = period.date_range();

    let in_period = storage.range(start, end)?;
    let all = storage.all()?;

    let report = WellnessReport::generate(period, &in_period, &all);

    match format {
        OutputFormat::Json => to_json(&report),
        OutputFormat::Pretty => Ok(report.format()),
    }
}
