//! Event handling for the TUI.
//!
//! Key presses arrive from a reader thread; timer ticks arrive from the
//! app-owned [`crate::core::Ticker`] on the same channel.

use std::sync::mpsc;
use std::thread;
use std::time::Duration;

use crossterm::event::{self, Event as CrosstermEvent, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::core::SessionKind;
use crate::error::SereinError;
use crate::tui::app::{App, Screen};

/// An event delivered to the main loop.
#[derive(Debug, Clone)]
pub enum Event {
    /// One second elapsed on the active timer.
    Tick,
    /// A key was pressed.
    Key(KeyEvent),
    /// The terminal was resized.
    Resize,
}

/// Merges terminal input and timer ticks into one channel.
pub struct EventHandler {
    tx: mpsc::Sender<Event>,
    rx: mpsc::Receiver<Event>,
}

impl EventHandler {
    /// Start the input reader thread.
    #[must_use]
    pub fn new() -> Self {
        let (tx, rx) = mpsc::channel();

        let input_tx = tx.clone();
        thread::spawn(move || loop {
            match event::poll(Duration::from_millis(100)) {
                Ok(true) => match event::read() {
                    Ok(CrosstermEvent::Key(key)) => {
                        if input_tx.send(Event::Key(key)).is_err() {
                            break;
                        }
                    }
                    Ok(CrosstermEvent::Resize(_, _)) => {
                        if input_tx.send(Event::Resize).is_err() {
                            break;
                        }
                    }
                    Ok(_) => {}
                    Err(_) => break,
                },
                Ok(false) => {}
                Err(_) => break,
            }
        });

        Self { tx, rx }
    }

    /// A sender for the app's ticker to feed ticks into the loop.
    #[must_use]
    pub fn sender(&self) -> mpsc::Sender<Event> {
        self.tx.clone()
    }

    /// Block until the next event.
    ///
    /// # Errors
    ///
    /// Returns an error if the event channel closes unexpectedly.
    pub fn next(&self) -> Result<Event, SereinError> {
        self.rx
            .recv()
            .map_err(|e| SereinError::Terminal(format!("Event channel closed: {e}")))
    }
}

impl Default for EventHandler {
    fn default() -> Self {
        Self::new()
    }
}

/// Apply a key press to the app. Returns true when the app should quit.
pub fn handle_key(app: &mut App, key: KeyEvent) -> bool {
    if key.kind != KeyEventKind::Press {
        return false;
    }

    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return true;
    }

    match key.code {
        // Quit
        KeyCode::Char('q') | KeyCode::Esc => return true,

        // Screen switching
        KeyCode::Char('1') => app.select_screen(Screen::Pomodoro),
        KeyCode::Char('2') => app.select_screen(Screen::Breathing),
        KeyCode::Char('3') => app.select_screen(Screen::Mixer),

        _ => match app.screen {
            Screen::Pomodoro => match key.code {
                KeyCode::Char(' ') => app.toggle_running(),
                KeyCode::Char('r') => app.reset_current(),
                KeyCode::Char('R') => app.reset_all(),
                KeyCode::Char('w') => app.select_session(SessionKind::Work),
                KeyCode::Char('s') => app.select_session(SessionKind::ShortBreak),
                KeyCode::Char('l') => app.select_session(SessionKind::LongBreak),
                _ => {}
            },

            Screen::Breathing => match key.code {
                KeyCode::Char(' ') => app.toggle_running(),
                KeyCode::Char('r') => app.reset_breathing(),
                _ => {}
            },

            Screen::Mixer => match key.code {
                KeyCode::Char('j') | KeyCode::Down => app.next_track(),
                KeyCode::Char('k') | KeyCode::Up => app.previous_track(),
                KeyCode::Char(' ') | KeyCode::Enter => app.toggle_selected_track(),
                KeyCode::Char('h') | KeyCode::Left => app.adjust_selected_volume(false),
                KeyCode::Char('l') | KeyCode::Right => app.adjust_selected_volume(true),
                KeyCode::Char('-') => app.adjust_master(false),
                KeyCode::Char('+') | KeyCode::Char('=') => app.adjust_master(true),
                KeyCode::Char('s') => app.stop_all_tracks(),
                _ => {}
            },
        },
    }

    false
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::core::Mixer;

    fn test_app() -> (App, mpsc::Receiver<Event>) {
        let (tx, rx) = mpsc::channel();
        let app = App::new(
            &Config::default(),
            Mixer::default(),
            None,
            Screen::Pomodoro,
            tx,
        );
        (app, rx)
    }

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_quit_keys() {
        let (mut app, _rx) = test_app();

        assert!(handle_key(&mut app, press(KeyCode::Char('q'))));
        assert!(handle_key(&mut app, press(KeyCode::Esc)));
        assert!(!handle_key(&mut app, press(KeyCode::Char('x'))));
    }

    #[test]
    fn test_space_toggles_pomodoro() {
        let (mut app, _rx) = test_app();

        assert!(!app.pomodoro.is_running());
        handle_key(&mut app, press(KeyCode::Char(' ')));
        assert!(app.pomodoro.is_running());
        handle_key(&mut app, press(KeyCode::Char(' ')));
        assert!(!app.pomodoro.is_running());
    }

    #[test]
    fn test_session_select_while_paused() {
        let (mut app, _rx) = test_app();

        handle_key(&mut app, press(KeyCode::Char('l')));
        assert_eq!(app.pomodoro.kind(), SessionKind::LongBreak);

        handle_key(&mut app, press(KeyCode::Char(' ')));
        handle_key(&mut app, press(KeyCode::Char('w')));
        assert_eq!(app.pomodoro.kind(), SessionKind::LongBreak);
    }

    #[test]
    fn test_screen_switch_resets_machine() {
        let (mut app, _rx) = test_app();

        handle_key(&mut app, press(KeyCode::Char(' ')));
        app.on_tick();
        assert!(app.pomodoro.remaining_seconds() < 1500);

        handle_key(&mut app, press(KeyCode::Char('2')));
        assert_eq!(app.screen, Screen::Breathing);
        assert_eq!(app.pomodoro.remaining_seconds(), 1500);
        assert!(!app.pomodoro.is_running());
    }

    #[test]
    fn test_mixer_keys() {
        let (mut app, _rx) = test_app();
        app.select_screen(Screen::Mixer);

        handle_key(&mut app, press(KeyCode::Char(' ')));
        assert_eq!(app.mixer.active_count(), 1);

        handle_key(&mut app, press(KeyCode::Char('j')));
        handle_key(&mut app, press(KeyCode::Char(' ')));
        assert_eq!(app.mixer.active_count(), 2);

        handle_key(&mut app, press(KeyCode::Char('s')));
        assert_eq!(app.mixer.active_count(), 0);
    }
}
