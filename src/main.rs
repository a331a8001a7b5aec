// src/main.rs

use color_eyre::Result;
use crossterm::{
    ExecutableCommand,
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEventKind},
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::prelude::*;
use std::io::stdout;
use std::time::Duration;
use tokio::sync::mpsc;

mod app;
mod core;
mod logging;
mod ui;

use app::{App, AppState};
use crate::core::models::RiskReport;

/// Simulated scan duration. The scorer itself is instant; the pause is pure
/// presentation pacing so the spinner reads as an actual scan.
const SCAN_DELAY: Duration = Duration::from_millis(1500);

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;
    logging::initialize_logging()?;

    // --- Setup ---
    stdout().execute(EnterAlternateScreen)?;
    stdout().execute(EnableMouseCapture)?;
    enable_raw_mode()?;
    let mut terminal = Terminal::new(CrosstermBackend::new(stdout()))?;
    terminal.clear()?;

    let mut app = App::new();
    let (tx, mut rx) = mpsc::channel(1);

    while !app.should_quit {
        terminal.draw(|frame| ui::render(&mut app, frame))?;

        if event::poll(Duration::from_millis(100))? {
            handle_events(&mut app, &tx)?;
        }
        app.on_tick();

        if let Ok(report) = rx.try_recv() {
            app.finish_scan(report);
        }
    }

    // --- Restore Terminal ---
    stdout().execute(LeaveAlternateScreen)?;
    stdout().execute(DisableMouseCapture)?;
    disable_raw_mode()?;
    Ok(())
}

/// Single event handler, dispatching on popup visibility and app state.
fn handle_events(app: &mut App, tx: &mpsc::Sender<RiskReport>) -> Result<()> {
    if let Event::Key(key) = event::read()? {
        if key.kind == KeyEventKind::Press {
            if app.show_disclaimer {
                match key.code {
                    KeyCode::Enter => app.show_disclaimer = false,
                    KeyCode::Char('q') => app.quit(),
                    _ => {}
                }
                return Ok(());
            }
            match app.state {
                AppState::Idle => handle_idle_input(app, key.code, tx),
                AppState::Finished => handle_finished_input(app, key.code),
                AppState::Scanning => {
                    if key.code == KeyCode::Char('q') {
                        app.quit();
                    }
                }
            }
        }
    }
    Ok(())
}

/// Handles input while the app waits for a URL. Quitting is on Esc here so
/// that 'q' stays typeable inside the URL.
fn handle_idle_input(app: &mut App, key_code: KeyCode, tx: &mpsc::Sender<RiskReport>) {
    match key_code {
        KeyCode::Esc => app.quit(),
        KeyCode::Char(c) => app.input.push(c),
        KeyCode::Backspace => {
            app.input.pop();
        }
        KeyCode::Enter => {
            if app.input.is_empty() {
                return;
            }
            app.begin_scan();
            let tx_clone = tx.clone();
            // The scorer gets the string exactly as typed; host extraction
            // exists only for display in the summary panel.
            let target = app.target.clone();
            tokio::spawn(async move {
                tokio::time::sleep(SCAN_DELAY).await;
                let report = crate::core::scanner::scan_url(&target);
                let _ = tx_clone.send(report).await;
            });
        }
        _ => {}
    }
}

/// Handles input while the report is on screen.
fn handle_finished_input(app: &mut App, key_code: KeyCode) {
    match key_code {
        KeyCode::Char('q') => app.quit(),
        KeyCode::Char('n') => app.reset(),
        KeyCode::Char('e') => app.export_report(),
        KeyCode::Char('l') => app.toggle_logs(),
        KeyCode::Up => app.select_previous(),
        KeyCode::Down => app.select_next(),
        KeyCode::Left => app.scroll_log_left(),
        KeyCode::Right => app.scroll_log_right(),
        _ => {}
    }
}
