//! Terminal User Interface (TUI) for serein.
//!
//! Hosts the interactive screens: Pomodoro, guided breathing, and the
//! ambient-sound mixer. Built with ratatui and crossterm.

mod app;
mod event;
mod ui;

pub use app::{App, Screen};

use std::io;

use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::prelude::*;

use crate::config::{Config, Paths};
use crate::core::Mixer;
use crate::error::SereinError;

use event::{Event, EventHandler};

/// Run the TUI application starting on the given screen.
///
/// # Errors
///
/// Returns an error if the TUI fails to initialize or run.
pub fn run(screen: Screen, config: Config) -> Result<(), SereinError> {
    let paths = Paths::new()?;
    paths.ensure_dirs()?;

    let mixer = Mixer::load_from_path(&paths.mixer, &config.mixer)?;

    // Setup terminal
    enable_raw_mode()
        .map_err(|e| SereinError::Terminal(format!("Failed to enable raw mode: {e}")))?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)
        .map_err(|e| SereinError::Terminal(format!("Failed to setup terminal: {e}")))?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)
        .map_err(|e| SereinError::Terminal(format!("Failed to create terminal: {e}")))?;

    // Create app state and run main loop
    let events = EventHandler::new();
    let mut app = App::new(&config, mixer, Some(paths.mixer), screen, events.sender());
    let result = run_app(&mut terminal, &mut app, &events);

    // Restore terminal
    disable_raw_mode().ok();
    execute!(terminal.backend_mut(), LeaveAlternateScreen).ok();
    terminal.show_cursor().ok();

    result
}

/// Run the main application loop.
fn run_app<B: Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
    events: &EventHandler,
) -> Result<(), SereinError> {
    loop {
        terminal
            .draw(|frame| ui::render(frame, app))
            .map_err(|e| SereinError::Terminal(format!("Failed to draw: {e}")))?;

        match events.next()? {
            Event::Tick => app.on_tick(),
            Event::Key(key) => {
                if event::handle_key(app, key) {
                    app.quit();
                }
            }
            Event::Resize => {}
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}
