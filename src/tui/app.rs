//! Application state for the TUI.
//!
//! The app owns at most one tick source at a time, keyed to the active
//! screen's running flag: whenever the flag or session state changes the
//! previous ticker is dropped (stopping it) before a replacement is started,
//! and leaving a screen discards that screen's session state entirely.

use std::path::PathBuf;
use std::sync::mpsc;

use crate::config::Config;
use crate::core::{
    Breathing, Mixer, Pomodoro, SessionKind, SessionPlan, Ticker, SOUND_TRACKS, TICK_PERIOD,
};
use crate::tui::event::Event;

/// The interactive screens.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    /// Pomodoro session timer
    Pomodoro,
    /// Guided breathing exercise
    Breathing,
    /// Ambient-sound mixer
    Mixer,
}

impl Screen {
    /// Tab title.
    #[must_use]
    pub const fn title(&self) -> &'static str {
        match self {
            Self::Pomodoro => "Pomodoro",
            Self::Breathing => "Breathing",
            Self::Mixer => "Mixer",
        }
    }

    /// Tab index for rendering.
    #[must_use]
    pub const fn index(&self) -> usize {
        match self {
            Self::Pomodoro => 0,
            Self::Breathing => 1,
            Self::Mixer => 2,
        }
    }
}

/// Application state.
pub struct App {
    /// Active screen.
    pub screen: Screen,
    /// Pomodoro machine.
    pub pomodoro: Pomodoro,
    /// Breathing machine.
    pub breathing: Breathing,
    /// Sound mixer.
    pub mixer: Mixer,
    /// Selected row on the mixer screen.
    pub selected_track: usize,
    /// Status message to display.
    pub status: Option<String>,
    /// Whether the app should quit.
    pub should_quit: bool,
    ticker: Option<Ticker>,
    tx: mpsc::Sender<Event>,
    mixer_path: Option<PathBuf>,
}

impl App {
    /// Create a new app instance.
    #[must_use]
    pub fn new(
        config: &Config,
        mixer: Mixer,
        mixer_path: Option<PathBuf>,
        screen: Screen,
        tx: mpsc::Sender<Event>,
    ) -> Self {
        Self {
            screen,
            pomodoro: Pomodoro::new(SessionPlan::from_config(&config.pomodoro)),
            breathing: Breathing::from_config(&config.breathing),
            mixer,
            selected_track: 0,
            status: None,
            should_quit: false,
            ticker: None,
            tx,
            mixer_path,
        }
    }

    /// Whether the active screen's machine is running.
    fn machine_running(&self) -> bool {
        match self.screen {
            Screen::Pomodoro => self.pomodoro.is_running(),
            Screen::Breathing => self.breathing.is_running(),
            Screen::Mixer => false,
        }
    }

    /// Recreate the tick source to match the running flag.
    ///
    /// The previous ticker is always dropped first so there is never more
    /// than one tick source, no matter how quickly running is toggled.
    fn sync_ticker(&mut self) {
        self.ticker = None;

        if self.machine_running() {
            self.ticker = Some(Ticker::start(TICK_PERIOD, self.tx.clone(), Event::Tick));
        }
    }

    /// Advance the active machine by one second.
    pub fn on_tick(&mut self) {
        match self.screen {
            Screen::Pomodoro => {
                if let Some(transition) = self.pomodoro.tick() {
                    self.status = Some(format!(
                        "{} finished, {} started",
                        transition.from, transition.to
                    ));
                }
            }
            Screen::Breathing => {
                self.breathing.tick();
            }
            Screen::Mixer => {}
        }
    }

    /// Start or pause the active machine.
    pub fn toggle_running(&mut self) {
        match self.screen {
            Screen::Pomodoro => self.pomodoro.toggle(),
            Screen::Breathing => self.breathing.toggle(),
            Screen::Mixer => return,
        }

        self.status = None;
        self.sync_ticker();
    }

    /// Reset the current Pomodoro session.
    pub fn reset_current(&mut self) {
        self.pomodoro.reset_current();
        self.status = Some("Session reset".to_string());
        self.sync_ticker();
    }

    /// Reset the whole Pomodoro state.
    pub fn reset_all(&mut self) {
        self.pomodoro.reset_all();
        self.status = Some("New cycle".to_string());
        self.sync_ticker();
    }

    /// Reset the breathing exercise.
    pub fn reset_breathing(&mut self) {
        self.breathing.reset();
        self.status = None;
        self.sync_ticker();
    }

    /// Switch the Pomodoro session kind (paused only).
    pub fn select_session(&mut self, kind: SessionKind) {
        if self.pomodoro.select(kind) {
            self.status = Some(format!("{kind} selected"));
        } else {
            self.status = Some("Pause before switching sessions".to_string());
        }
    }

    /// Switch screens, discarding the old screen's session state.
    pub fn select_screen(&mut self, screen: Screen) {
        if screen == self.screen {
            return;
        }

        self.ticker = None;

        match self.screen {
            Screen::Pomodoro => self.pomodoro.reset_all(),
            Screen::Breathing => self.breathing.reset(),
            Screen::Mixer => {}
        }

        self.screen = screen;
        self.status = None;
    }

    /// Move the mixer selection down.
    pub fn next_track(&mut self) {
        if self.selected_track + 1 < SOUND_TRACKS.len() {
            self.selected_track += 1;
        }
    }

    /// Move the mixer selection up.
    pub fn previous_track(&mut self) {
        self.selected_track = self.selected_track.saturating_sub(1);
    }

    /// Toggle the selected sound.
    pub fn toggle_selected_track(&mut self) {
        let id = SOUND_TRACKS[self.selected_track].id;
        // The id comes from the catalog, so this cannot fail.
        if let Ok(active) = self.mixer.toggle(id) {
            self.status = Some(if active {
                format!("Playing {id}")
            } else {
                format!("Stopped {id}")
            });
        }
    }

    /// Nudge the selected track's volume by five points.
    pub fn adjust_selected_volume(&mut self, up: bool) {
        let id = SOUND_TRACKS[self.selected_track].id;
        let current = self.mixer.volume(id);
        let target = if up {
            current.saturating_add(5)
        } else {
            current.saturating_sub(5)
        };

        let _ = self.mixer.set_volume(id, target);
    }

    /// Nudge the master volume by five points.
    pub fn adjust_master(&mut self, up: bool) {
        let current = self.mixer.master();
        let target = if up {
            current.saturating_add(5)
        } else {
            current.saturating_sub(5)
        };

        self.mixer.set_master(target);
    }

    /// Stop every sound.
    pub fn stop_all_tracks(&mut self) {
        self.mixer.stop_all();
        self.status = Some("All sounds stopped".to_string());
    }

    /// Persist the mixer and flag the app to exit.
    pub fn quit(&mut self) {
        self.ticker = None;

        if let Some(path) = &self.mixer_path {
            // Losing the mix on exit is not worth blocking quit over.
            self.mixer.save_to_path(path).ok();
        }

        self.should_quit = true;
    }
}
