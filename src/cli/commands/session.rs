//! Interactive session launchers (Pomodoro, breathing, mixer).
//!
//! Each launcher loads the configuration, applies any command-line
//! overrides, and hands off to the TUI.

use crate::config::Config;
use crate::core::parse_duration;
use crate::error::SereinError;
use crate::tui::{self, Screen};

/// Launch the Pomodoro screen, with optional duration overrides.
///
/// # Errors
///
/// Returns an error if an override cannot be parsed or the TUI fails.
pub fn pomodoro(
    work: Option<String>,
    short_break: Option<String>,
    long_break: Option<String>,
) -> Result<String, SereinError> {
    let mut config = Config::load()?;

    if let Some(s) = work {
        config.pomodoro.work_minutes = parse_minutes(&s)?;
    }
    if let Some(s) = short_break {
        config.pomodoro.short_break_minutes = parse_minutes(&s)?;
    }
    if let Some(s) = long_break {
        config.pomodoro.long_break_minutes = parse_minutes(&s)?;
    }

    tui::run(Screen::Pomodoro, config)?;
    Ok(String::new())
}

/// Launch the breathing screen, optionally overriding the phase length.
///
/// # Errors
///
/// Returns an error if the override is zero or the TUI fails.
pub fn breathe(seconds: Option<u32>) -> Result<String, SereinError> {
    let mut config = Config::load()?;

    if let Some(seconds) = seconds {
        if seconds == 0 {
            return Err(SereinError::Validation(
                "Phase length must be at least one second".to_string(),
            ));
        }
        config.breathing.phase_seconds = seconds;
    }

    tui::run(Screen::Breathing, config)?;
    Ok(String::new())
}

/// Launch the mixer screen.
///
/// # Errors
///
/// Returns an error if the TUI fails.
pub fn mix() -> Result<String, SereinError> {
    let config = Config::load()?;
    tui::run(Screen::Mixer, config)?;
    Ok(String::new())
}

/// Parse a duration override into whole minutes.
fn parse_minutes(s: &str) -> Result<u32, SereinError> {
    let duration = parse_duration(s)
        .ok_or_else(|| SereinError::Validation(format!("Invalid duration '{s}' (try 25m or 1h)")))?;

    let minutes = duration.num_minutes();
    if minutes < 1 {
        return Err(SereinError::Validation(format!(
            "Duration '{s}' is shorter than a minute"
        )));
    }

    u32::try_from(minutes)
        .map_err(|_| SereinError::Validation(format!("Duration '{s}' is too long")))
}
