//! UI rendering for the TUI.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Gauge, List, ListItem, ListState, Paragraph, Tabs},
    Frame,
};

use crate::core::{format_mmss, SOUND_TRACKS};
use crate::tui::app::{App, Screen};

/// Render the application UI.
pub fn render(frame: &mut Frame<'_>, app: &App) {
    // Create layout: tabs, screen body, status bar
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Tabs
            Constraint::Min(0),    // Body
            Constraint::Length(1), // Status bar
        ])
        .split(frame.area());

    render_tabs(frame, app, chunks[0]);

    match app.screen {
        Screen::Pomodoro => render_pomodoro(frame, app, chunks[1]),
        Screen::Breathing => render_breathing(frame, app, chunks[1]),
        Screen::Mixer => render_mixer(frame, app, chunks[1]),
    }

    render_status_bar(frame, app, chunks[2]);
}

/// Render the screen tabs.
fn render_tabs(frame: &mut Frame<'_>, app: &App, area: Rect) {
    let titles = [Screen::Pomodoro, Screen::Breathing, Screen::Mixer]
        .iter()
        .map(|s| format!(" {} ", s.title()))
        .collect::<Vec<_>>();

    let tabs = Tabs::new(titles)
        .select(app.screen.index())
        .style(Style::default().fg(Color::DarkGray))
        .highlight_style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Cyan))
                .title(" serein "),
        );

    frame.render_widget(tabs, area);
}

/// Render the Pomodoro screen.
fn render_pomodoro(frame: &mut Frame<'_>, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(5), // Session + time
            Constraint::Length(3), // Progress gauge
            Constraint::Length(2), // Cycle line
            Constraint::Min(0),
        ])
        .split(area);

    let machine = &app.pomodoro;

    let session_color = if machine.kind().is_break() {
        Color::Green
    } else {
        Color::Red
    };

    let state_label = if machine.is_running() {
        "running"
    } else {
        "paused"
    };

    let header = Paragraph::new(vec![
        Line::from(Span::styled(
            machine.kind().display_name(),
            Style::default()
                .fg(session_color)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            machine.format_remaining(),
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(state_label, Style::default().fg(Color::DarkGray))),
    ])
    .centered()
    .block(Block::default().borders(Borders::ALL));

    frame.render_widget(header, chunks[0]);

    let gauge = Gauge::default()
        .gauge_style(Style::default().fg(session_color))
        .ratio(machine.progress().clamp(0.0, 1.0))
        .label(format!("{:.0}%", machine.progress() * 100.0))
        .block(Block::default().borders(Borders::ALL));

    frame.render_widget(gauge, chunks[1]);

    let dots = (0..machine.plan().sessions_until_long_break)
        .map(|i| if i < machine.completed_work() { "●" } else { "○" })
        .collect::<Vec<_>>()
        .join(" ");

    let cycle = Paragraph::new(format!(
        "{dots}   cycle {}  ·  {}/{} sessions",
        machine.cycle(),
        machine.completed_work(),
        machine.plan().sessions_until_long_break
    ))
    .centered()
    .style(Style::default().fg(Color::DarkGray));

    frame.render_widget(cycle, chunks[2]);
}

/// Render the breathing screen.
fn render_breathing(frame: &mut Frame<'_>, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(5), // Phase + countdown
            Constraint::Length(3), // Progress gauge
            Constraint::Length(2), // Cycles
            Constraint::Min(0),
        ])
        .split(area);

    let machine = &app.breathing;

    let phase_color = match machine.phase() {
        crate::core::BreathPhase::Inhale => Color::Cyan,
        crate::core::BreathPhase::Exhale => Color::Blue,
    };

    let header = Paragraph::new(vec![
        Line::from(Span::styled(
            machine.phase().instruction(),
            Style::default().fg(phase_color).add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            machine.remaining_seconds().to_string(),
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            if machine.is_running() { "running" } else { "paused" },
            Style::default().fg(Color::DarkGray),
        )),
    ])
    .centered()
    .block(Block::default().borders(Borders::ALL));

    frame.render_widget(header, chunks[0]);

    let gauge = Gauge::default()
        .gauge_style(Style::default().fg(phase_color))
        .ratio(machine.progress().clamp(0.0, 1.0))
        .label(format_mmss(machine.remaining_seconds()))
        .block(Block::default().borders(Borders::ALL));

    frame.render_widget(gauge, chunks[1]);

    let cycles = Paragraph::new(format!("cycles completed: {}", machine.cycles()))
        .centered()
        .style(Style::default().fg(Color::DarkGray));

    frame.render_widget(cycles, chunks[2]);
}

/// Render the mixer screen.
fn render_mixer(frame: &mut Frame<'_>, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Master volume
            Constraint::Min(0),    // Track list
        ])
        .split(area);

    let master = Gauge::default()
        .gauge_style(Style::default().fg(Color::Magenta))
        .ratio(f64::from(app.mixer.master()) / 100.0)
        .label(format!("master {}%", app.mixer.master()))
        .block(Block::default().borders(Borders::ALL).title(" Master "));

    frame.render_widget(master, chunks[0]);

    let items: Vec<ListItem<'_>> = SOUND_TRACKS
        .iter()
        .map(|track| {
            let active = app.mixer.is_active(track.id);
            let volume = app.mixer.volume(track.id);
            let effective = app.mixer.effective_volume(track.id);

            let icon = if active { "▶" } else { " " };
            let bar_width = 10;
            let filled = usize::from(volume) * bar_width / 100;
            let bar = format!("{}{}", "█".repeat(filled), "░".repeat(bar_width - filled));

            let spans = vec![
                Span::styled(
                    format!("{icon} "),
                    Style::default().fg(if active { Color::Green } else { Color::DarkGray }),
                ),
                Span::styled(
                    format!("{:<14}", track.name),
                    Style::default().add_modifier(if active {
                        Modifier::BOLD
                    } else {
                        Modifier::empty()
                    }),
                ),
                Span::raw(format!(" {bar} {volume:>3}%")),
                Span::styled(
                    if active {
                        format!("  playing at {effective}%")
                    } else {
                        format!("  {}", track.description)
                    },
                    Style::default().fg(Color::DarkGray),
                ),
            ];

            ListItem::new(Line::from(spans))
        })
        .collect();

    let list = List::new(items)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(format!(" Sounds ({} playing) ", app.mixer.active_count())),
        )
        .highlight_style(Style::default().bg(Color::DarkGray));

    let mut state = ListState::default();
    state.select(Some(app.selected_track));

    frame.render_stateful_widget(list, chunks[1], &mut state);
}

/// Render the status bar.
fn render_status_bar(frame: &mut Frame<'_>, app: &App, area: Rect) {
    let keys = match app.screen {
        Screen::Pomodoro => "space:start/pause | r:reset | R:new cycle | w/s/l:session | 1/2/3:screens | q:quit",
        Screen::Breathing => "space:start/pause | r:reset | 1/2/3:screens | q:quit",
        Screen::Mixer => "j/k:select | space:play/stop | h/l:volume | +/-:master | s:stop all | q:quit",
    };

    let status_text = app.status.as_deref().unwrap_or(keys);

    let status = Paragraph::new(status_text).style(Style::default().fg(Color::DarkGray));

    frame.render_widget(status, area);
}
