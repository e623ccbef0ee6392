//! Core abstractions for serein.
//!
//! This module provides the session-timer building blocks shared by the
//! interactive screens: a countdown, a tick scheduler, and the Pomodoro,
//! breathing, and mixer state models.

mod breathing;
mod mixer;
mod pomodoro;
mod ticker;
mod timer;

pub use breathing::{BreathPhase, Breathing};
pub use mixer::{sound_track, Mixer, SoundTrack, SOUND_TRACKS};
pub use pomodoro::{Pomodoro, SessionKind, SessionPlan, Transition};
pub use ticker::{Ticker, TICK_PERIOD};
pub use timer::{format_duration, format_mmss, parse_duration, render_progress_bar, Countdown};
