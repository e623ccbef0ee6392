//! Countdown primitive and duration helpers.
//!
//! The countdown drives both the Pomodoro and breathing machines: a fixed
//! total, a remaining value that never leaves `[0, total]`, and a one-second
//! tick that reports when zero is reached.

use chrono::Duration;
use once_cell::sync::Lazy;
use regex::Regex;

/// A second-granularity countdown.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Countdown {
    /// Total duration in seconds
    total_seconds: u32,
    /// Remaining seconds
    remaining_seconds: u32,
}

impl Countdown {
    /// Create a new countdown at its full duration.
    #[must_use]
    pub const fn new(total_seconds: u32) -> Self {
        Self {
            total_seconds,
            remaining_seconds: total_seconds,
        }
    }

    /// Advance by one second.
    ///
    /// Returns true if the countdown just reached zero. The remaining value
    /// saturates at zero and never goes negative.
    pub fn tick(&mut self) -> bool {
        self.remaining_seconds = self.remaining_seconds.saturating_sub(1);
        self.remaining_seconds == 0
    }

    /// Refill to the full duration.
    pub fn reset(&mut self) {
        self.remaining_seconds = self.total_seconds;
    }

    /// Replace the duration and refill.
    pub fn reload(&mut self, total_seconds: u32) {
        self.total_seconds = total_seconds;
        self.remaining_seconds = total_seconds;
    }

    /// Remaining seconds.
    #[must_use]
    pub const fn remaining_seconds(&self) -> u32 {
        self.remaining_seconds
    }

    /// Total seconds.
    #[must_use]
    pub const fn total_seconds(&self) -> u32 {
        self.total_seconds
    }

    /// Get progress as a ratio (0.0 - 1.0).
    #[must_use]
    pub fn progress(&self) -> f64 {
        if self.total_seconds == 0 {
            return 1.0;
        }
        1.0 - (f64::from(self.remaining_seconds) / f64::from(self.total_seconds))
    }

    /// Format remaining time as MM:SS.
    #[must_use]
    pub fn format_remaining(&self) -> String {
        format_mmss(self.remaining_seconds)
    }
}

/// Format a second count as MM:SS.
#[must_use]
pub fn format_mmss(total_seconds: u32) -> String {
    let minutes = total_seconds / 60;
    let seconds = total_seconds % 60;
    format!("{minutes:02}:{seconds:02}")
}

/// Format a duration as a human-readable string.
#[must_use]
pub fn format_duration(d: Duration) -> String {
    let total_minutes = d.num_minutes();

    if total_minutes < 1 {
        let seconds = d.num_seconds();
        return format!("{} second{}", seconds, if seconds == 1 { "" } else { "s" });
    }

    let hours = total_minutes / 60;
    let minutes = total_minutes % 60;

    if hours > 0 {
        if minutes > 0 {
            format!(
                "{} hour{}, {} minute{}",
                hours,
                if hours == 1 { "" } else { "s" },
                minutes,
                if minutes == 1 { "" } else { "s" }
            )
        } else {
            format!("{} hour{}", hours, if hours == 1 { "" } else { "s" })
        }
    } else {
        format!("{} minute{}", minutes, if minutes == 1 { "" } else { "s" })
    }
}

// A bare number is read as minutes; otherwise numbers must carry h/m/s units.
static DURATION_PART: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(\d+)\s*([hms])").unwrap_or_else(|e| panic!("Invalid duration regex: {e}"))
});

/// Parse a duration string like "25m", "1h30m", "90s".
#[must_use]
pub fn parse_duration(s: &str) -> Option<Duration> {
    let s = s.trim().to_lowercase();

    // Try parsing as just a number (assume minutes)
    if let Ok(minutes) = s.parse::<i64>() {
        return Some(Duration::minutes(minutes));
    }

    let mut total_seconds: i64 = 0;

    for caps in DURATION_PART.captures_iter(&s) {
        let num: i64 = caps.get(1)?.as_str().parse().ok()?;

        match caps.get(2)?.as_str() {
            "h" => total_seconds += num * 3600,
            "m" => total_seconds += num * 60,
            "s" => total_seconds += num,
            _ => return None,
        }
    }

    if total_seconds > 0 {
        Some(Duration::seconds(total_seconds))
    } else {
        None
    }
}

/// Render a progress bar.
#[must_use]
#[allow(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    clippy::cast_precision_loss
)]
pub fn render_progress_bar(progress: f64, width: usize) -> String {
    let filled = (progress.clamp(0.0, 1.0) * width as f64) as usize;
    let empty = width.saturating_sub(filled);

    format!("[{}{}]", "█".repeat(filled), "░".repeat(empty))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_countdown_tick() {
        let mut countdown = Countdown::new(3);

        assert!(!countdown.tick());
        assert_eq!(countdown.remaining_seconds(), 2);
        assert!(!countdown.tick());
        assert!(countdown.tick());
        assert_eq!(countdown.remaining_seconds(), 0);
    }

    #[test]
    fn test_countdown_never_negative() {
        let mut countdown = Countdown::new(1);

        for _ in 0..10 {
            countdown.tick();
            assert_eq!(countdown.remaining_seconds().min(1), countdown.remaining_seconds());
        }

        assert_eq!(countdown.remaining_seconds(), 0);
    }

    #[test]
    fn test_countdown_reload() {
        let mut countdown = Countdown::new(10);
        countdown.tick();
        countdown.reload(5);

        assert_eq!(countdown.total_seconds(), 5);
        assert_eq!(countdown.remaining_seconds(), 5);
    }

    #[test]
    fn test_countdown_progress() {
        let mut countdown = Countdown::new(100);
        assert!((countdown.progress() - 0.0).abs() < f64::EPSILON);

        for _ in 0..50 {
            countdown.tick();
        }

        assert!((countdown.progress() - 0.5).abs() < 0.01);
    }

    #[test]
    fn test_format_mmss() {
        assert_eq!(format_mmss(1500), "25:00");
        assert_eq!(format_mmss(90), "01:30");
        assert_eq!(format_mmss(0), "00:00");
    }

    #[test]
    fn test_parse_duration_minutes() {
        assert_eq!(parse_duration("25"), Some(Duration::minutes(25)));
        assert_eq!(parse_duration("25m"), Some(Duration::minutes(25)));
    }

    #[test]
    fn test_parse_duration_hours() {
        assert_eq!(parse_duration("1h"), Some(Duration::hours(1)));
        assert_eq!(parse_duration("2h30m"), Some(Duration::minutes(150)));
    }

    #[test]
    fn test_parse_duration_seconds() {
        assert_eq!(parse_duration("90s"), Some(Duration::seconds(90)));
        assert_eq!(parse_duration("1m30s"), Some(Duration::seconds(90)));
    }

    #[test]
    fn test_parse_duration_invalid() {
        assert!(parse_duration("").is_none());
        assert!(parse_duration("abc").is_none());
    }

    #[test]
    fn test_format_duration() {
        assert_eq!(format_duration(Duration::minutes(25)), "25 minutes");
        assert_eq!(format_duration(Duration::minutes(1)), "1 minute");
        assert_eq!(format_duration(Duration::hours(2)), "2 hours");
        assert_eq!(format_duration(Duration::minutes(90)), "1 hour, 30 minutes");
    }

    #[test]
    fn test_render_progress_bar() {
        let bar = render_progress_bar(0.5, 10);
        assert!(bar.contains("█████"));
        assert!(bar.contains("░░░░░"));
    }
}
