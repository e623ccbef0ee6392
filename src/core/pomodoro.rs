//! Pomodoro session state machine.
//!
//! Cycles through work, short-break, and long-break sessions. Reaching a
//! zero countdown is the only transition trigger: a finished work session
//! moves to a break (the long one after every fourth work session), and a
//! finished break always moves back to work. Completing a session does not
//! pause the machine; the next session keeps counting until the user pauses.

use crate::config::PomodoroConfig;

use super::timer::Countdown;

/// The kind of session currently counting down.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionKind {
    /// Focused work
    Work,
    /// Short break between work sessions
    ShortBreak,
    /// Long break after a full cycle of work sessions
    LongBreak,
}

impl SessionKind {
    /// Get display name.
    #[must_use]
    pub const fn display_name(&self) -> &'static str {
        match self {
            Self::Work => "Work",
            Self::ShortBreak => "Short Break",
            Self::LongBreak => "Long Break",
        }
    }

    /// Check if this is a break kind.
    #[must_use]
    pub const fn is_break(&self) -> bool {
        matches!(self, Self::ShortBreak | Self::LongBreak)
    }
}

impl std::fmt::Display for SessionKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.display_name())
    }
}

/// Session durations and cycle length, resolved to seconds.
#[derive(Debug, Clone, Copy)]
pub struct SessionPlan {
    /// Work session length in seconds.
    pub work_seconds: u32,
    /// Short break length in seconds.
    pub short_break_seconds: u32,
    /// Long break length in seconds.
    pub long_break_seconds: u32,
    /// Work sessions completed before a long break.
    pub sessions_until_long_break: u32,
}

impl SessionPlan {
    /// Resolve a plan from configured minutes.
    #[must_use]
    pub const fn from_config(config: &PomodoroConfig) -> Self {
        Self {
            work_seconds: config.work_minutes * 60,
            short_break_seconds: config.short_break_minutes * 60,
            long_break_seconds: config.long_break_minutes * 60,
            sessions_until_long_break: config.sessions_until_long_break,
        }
    }

    /// Full duration of a session kind.
    #[must_use]
    pub const fn duration_for(&self, kind: SessionKind) -> u32 {
        match kind {
            SessionKind::Work => self.work_seconds,
            SessionKind::ShortBreak => self.short_break_seconds,
            SessionKind::LongBreak => self.long_break_seconds,
        }
    }
}

impl Default for SessionPlan {
    fn default() -> Self {
        Self::from_config(&PomodoroConfig::default())
    }
}

/// A completed session transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Transition {
    /// The session that just finished.
    pub from: SessionKind,
    /// The session that just started.
    pub to: SessionKind,
}

/// The Pomodoro state machine.
#[derive(Debug, Clone)]
pub struct Pomodoro {
    plan: SessionPlan,
    kind: SessionKind,
    countdown: Countdown,
    running: bool,
    completed_work: u32,
    cycle: u32,
}

impl Pomodoro {
    /// Create a new machine at the start of a work session, paused.
    #[must_use]
    pub const fn new(plan: SessionPlan) -> Self {
        Self {
            plan,
            kind: SessionKind::Work,
            countdown: Countdown::new(plan.work_seconds),
            running: false,
            completed_work: 0,
            cycle: 1,
        }
    }

    /// Start or pause the countdown.
    pub fn toggle(&mut self) {
        self.running = !self.running;
    }

    /// Pause the countdown.
    pub fn pause(&mut self) {
        self.running = false;
    }

    /// Advance by one second while running.
    ///
    /// Returns the transition if the current session just finished. The
    /// machine keeps running across transitions.
    pub fn tick(&mut self) -> Option<Transition> {
        if !self.running {
            return None;
        }

        if self.countdown.tick() {
            Some(self.advance())
        } else {
            None
        }
    }

    /// Move to the next session and refill the countdown.
    fn advance(&mut self) -> Transition {
        let from = self.kind;

        let to = match self.kind {
            SessionKind::Work => {
                self.completed_work += 1;

                if self.completed_work >= self.plan.sessions_until_long_break {
                    self.completed_work = 0;
                    self.cycle += 1;
                    SessionKind::LongBreak
                } else {
                    SessionKind::ShortBreak
                }
            }
            SessionKind::ShortBreak | SessionKind::LongBreak => SessionKind::Work,
        };

        self.kind = to;
        self.countdown.reload(self.plan.duration_for(to));

        Transition { from, to }
    }

    /// Refill the current session without changing its kind. Pauses.
    pub fn reset_current(&mut self) {
        self.running = false;
        self.countdown.reload(self.plan.duration_for(self.kind));
    }

    /// Return to the initial state: work session, counters zeroed, cycle 1,
    /// paused.
    pub fn reset_all(&mut self) {
        self.kind = SessionKind::Work;
        self.countdown.reload(self.plan.work_seconds);
        self.running = false;
        self.completed_work = 0;
        self.cycle = 1;
    }

    /// Switch to a different session kind.
    ///
    /// Only permitted while paused; returns false (and changes nothing)
    /// while running.
    pub fn select(&mut self, kind: SessionKind) -> bool {
        if self.running {
            return false;
        }

        self.kind = kind;
        self.countdown.reload(self.plan.duration_for(kind));
        true
    }

    /// Current session kind.
    #[must_use]
    pub const fn kind(&self) -> SessionKind {
        self.kind
    }

    /// Whether the countdown is running.
    #[must_use]
    pub const fn is_running(&self) -> bool {
        self.running
    }

    /// Remaining seconds in the current session.
    #[must_use]
    pub const fn remaining_seconds(&self) -> u32 {
        self.countdown.remaining_seconds()
    }

    /// Work sessions completed since the last long break.
    #[must_use]
    pub const fn completed_work(&self) -> u32 {
        self.completed_work
    }

    /// Current cycle number (starts at 1).
    #[must_use]
    pub const fn cycle(&self) -> u32 {
        self.cycle
    }

    /// The configured plan.
    #[must_use]
    pub const fn plan(&self) -> SessionPlan {
        self.plan
    }

    /// Progress through the current session (0.0 - 1.0).
    #[must_use]
    pub fn progress(&self) -> f64 {
        self.countdown.progress()
    }

    /// Remaining time as MM:SS.
    #[must_use]
    pub fn format_remaining(&self) -> String {
        self.countdown.format_remaining()
    }
}

impl Default for Pomodoro {
    fn default() -> Self {
        Self::new(SessionPlan::default())
    }
}
