//! Wellness reports.
//!
//! Aggregates stored mood entries into the figures the analytics screen of
//! the original app showed: average mood, streak, a 7-day trend, top
//! emotions, and life-domain impact.

use std::collections::HashMap;

use chrono::{DateTime, Duration, NaiveDate, NaiveTime, Utc};
use colored::Colorize;
use serde::{Deserialize, Serialize};

use crate::core::render_progress_bar;
use crate::features::mood::{LifeDomain, MoodEntry};

/// Report time period.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportPeriod {
    /// Today only
    Today,
    /// Last 7 days
    Week,
    /// Last 30 days
    Month,
    /// All time
    AllTime,
}

impl ReportPeriod {
    /// Get the start (inclusive) and end (exclusive) instants for this
    /// period, on UTC day boundaries.
    #[must_use]
    pub fn date_range(&self) -> (DateTime<Utc>, DateTime<Utc>) {
        let today = Utc::now().date_naive();
        let end = (today + Duration::days(1)).and_time(NaiveTime::MIN).and_utc();

        let start_day = match self {
            Self::Today => today,
            Self::Week => today - Duration::days(6),
            Self::Month => today - Duration::days(29),
            Self::AllTime => NaiveDate::from_ymd_opt(2000, 1, 1).unwrap_or(today),
        };

        (start_day.and_time(NaiveTime::MIN).and_utc(), end)
    }

    /// Parse period from string, defaulting to a week.
    #[must_use]
    pub fn parse(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "today" | "t" | "d" => Self::Today,
            "month" | "m" | "30d" => Self::Month,
            "all" | "alltime" | "all-time" => Self::AllTime,
            _ => Self::Week,
        }
    }

    /// Get display name.
    #[must_use]
    pub const fn display_name(&self) -> &'static str {
        match self {
            Self::Today => "Today",
            Self::Week => "This Week",
            Self::Month => "This Month",
            Self::AllTime => "All Time",
        }
    }
}

/// Average mood for one day.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DailyMood {
    /// Date (ISO)
    pub date: String,
    /// Short weekday label
    pub weekday: String,
    /// Average level for the day (0.0 when no entries)
    pub average: f64,
    /// Entry count for the day
    pub entries: usize,
}

/// How often an emotion was logged.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmotionCount {
    /// Catalog emotion name
    pub emotion: String,
    /// Times logged in the period
    pub count: usize,
    /// Share of entries mentioning it, in percent
    pub percentage: u8,
}

/// Share of entries attributing their mood to a domain.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DomainShare {
    /// Life domain
    pub domain: LifeDomain,
    /// Entries naming the domain
    pub count: usize,
    /// Share of entries, in percent
    pub percentage: u8,
}

/// Wellness report data.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WellnessReport {
    /// Report period name
    pub period: String,
    /// Entries in the period
    pub entries: usize,
    /// Average mood level in the period
    pub average_mood: f64,
    /// Consecutive days (ending today or yesterday) with at least one entry
    pub streak_days: usize,
    /// Daily averages for the last 7 days, oldest first
    pub weekly: Vec<DailyMood>,
    /// Most-logged emotions, top five
    pub top_emotions: Vec<EmotionCount>,
    /// Life-domain impact, most-named first
    pub domain_impact: Vec<DomainShare>,
}

impl WellnessReport {
    /// Build a report from the period's entries plus the full log (the full
    /// log feeds the streak and the fixed 7-day trend).
    #[must_use]
    pub fn generate(period: ReportPeriod, in_period: &[MoodEntry], all: &[MoodEntry]) -> Self {
        Self {
            period: period.display_name().to_string(),
            entries: in_period.len(),
            average_mood: average_level(in_period),
            streak_days: streak_days(all),
            weekly: weekly_trend(all),
            top_emotions: top_emotions(in_period),
            domain_impact: domain_impact(in_period),
        }
    }

    /// Format the report for terminal display.
    #[must_use]
    pub fn format(&self) -> String {
        let mut output = Vec::new();

        output.push(format!("🌿 Wellness Report ({})", self.period).bold().to_string());
        output.push("═".repeat(48));
        output.push(format!("Entries:       {}", self.entries));
        output.push(format!("Average mood:  {:.1}/5", self.average_mood));
        output.push(format!(
            "Streak:        {} day{}",
            self.streak_days,
            if self.streak_days == 1 { "" } else { "s" }
        ));

        if !self.weekly.is_empty() {
            output.push(String::new());
            output.push("Last 7 days".bold().to_string());
            for day in &self.weekly {
                let bar = render_progress_bar(day.average / 5.0, 10);
                let line = if day.entries == 0 {
                    format!("  {}  {}   -", day.weekday, bar)
                } else {
                    format!("  {}  {}  {:.1}", day.weekday, bar, day.average)
                };
                output.push(line);
            }
        }

        if !self.top_emotions.is_empty() {
            output.push(String::new());
            output.push("Top emotions".bold().to_string());
            for e in &self.top_emotions {
                let bar = render_progress_bar(f64::from(e.percentage) / 100.0, 10);
                output.push(format!(
                    "  {:<12} {} {:>3}% ({})",
                    e.emotion.cyan(),
                    bar,
                    e.percentage,
                    e.count
                ));
            }
        }

        if !self.domain_impact.is_empty() {
            output.push(String::new());
            output.push("Domain impact".bold().to_string());
            for d in &self.domain_impact {
                let bar = render_progress_bar(f64::from(d.percentage) / 100.0, 10);
                output.push(format!(
                    "  {:<14} {} {:>3}%",
                    d.domain.to_string().yellow(),
                    bar,
                    d.percentage
                ));
            }
        }

        if self.entries == 0 {
            output.push(String::new());
            output.push(
                "No entries in this period. Log one with: serein mood add --level 3"
                    .dimmed()
                    .to_string(),
            );
        }

        output.join("\n")
    }
}

/// Mean mood level.
#[allow(clippy::cast_precision_loss)]
fn average_level(entries: &[MoodEntry]) -> f64 {
    if entries.is_empty() {
        return 0.0;
    }

    let sum: u32 = entries.iter().map(|e| u32::from(e.level.value())).sum();
    f64::from(sum) / entries.len() as f64
}

/// Consecutive days with at least one entry, counting back from today
/// (a streak kept alive yesterday still counts).
fn streak_days(entries: &[MoodEntry]) -> usize {
    let mut dates: Vec<NaiveDate> = entries.iter().map(|e| e.recorded_at.date_naive()).collect();
    dates.sort_unstable();
    dates.dedup();

    if dates.is_empty() {
        return 0;
    }

    let today = Utc::now().date_naive();

    let mut start = today;
    if !dates.contains(&start) {
        start -= Duration::days(1);
        if !dates.contains(&start) {
            return 0;
        }
    }

    let mut streak = 0;
    let mut check = start;
    while dates.contains(&check) {
        streak += 1;
        check -= Duration::days(1);
    }

    streak
}

/// Daily averages for the last seven days, oldest first.
#[allow(clippy::cast_precision_loss)]
fn weekly_trend(entries: &[MoodEntry]) -> Vec<DailyMood> {
    let today = Utc::now().date_naive();

    let mut by_date: HashMap<NaiveDate, (u32, usize)> = HashMap::new();
    for entry in entries {
        let date = entry.recorded_at.date_naive();
        let slot = by_date.entry(date).or_default();
        slot.0 += u32::from(entry.level.value());
        slot.1 += 1;
    }

    (0..7)
        .map(|offset| {
            let date = today - Duration::days(6 - offset);
            let (sum, count) = by_date.get(&date).copied().unwrap_or((0, 0));
            let average = if count == 0 {
                0.0
            } else {
                f64::from(sum) / count as f64
            };

            DailyMood {
                date: date.format("%Y-%m-%d").to_string(),
                weekday: date.format("%a").to_string(),
                average,
                entries: count,
            }
        })
        .collect()
}

/// The five most-logged emotions.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss, clippy::cast_precision_loss)]
fn top_emotions(entries: &[MoodEntry]) -> Vec<EmotionCount> {
    let mut counts: HashMap<&str, usize> = HashMap::new();
    for entry in entries {
        for emotion in &entry.emotions {
            *counts.entry(emotion.as_str()).or_default() += 1;
        }
    }

    let mut counted: Vec<(&str, usize)> = counts.into_iter().collect();
    counted.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0)));

    counted
        .into_iter()
        .take(5)
        .map(|(emotion, count)| EmotionCount {
            emotion: emotion.to_string(),
            count,
            percentage: share(count, entries.len()),
        })
        .collect()
}

/// Share of entries naming each life domain.
fn domain_impact(entries: &[MoodEntry]) -> Vec<DomainShare> {
    let mut shares: Vec<DomainShare> = LifeDomain::ALL
        .iter()
        .map(|&domain| {
            let count = entries.iter().filter(|e| e.domains.contains(&domain)).count();
            DomainShare {
                domain,
                count,
                percentage: share(count, entries.len()),
            }
        })
        .filter(|d| d.count > 0)
        .collect();

    shares.sort_by(|a, b| b.count.cmp(&a.count).then_with(|| a.domain.as_str().cmp(b.domain.as_str())));
    shares
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss, clippy::cast_precision_loss)]
fn share(count: usize, total: usize) -> u8 {
    if total == 0 {
        return 0;
    }
    ((count as f64 / total as f64) * 100.0).round() as u8
}
