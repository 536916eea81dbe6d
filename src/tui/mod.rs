//! TUI module for siterec
//!
//! Single-screen recording form using ratatui.

mod app;
pub mod screens;
pub mod strings;
pub mod widgets;

use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::prelude::*;
use std::io;
use std::time::Duration;

use crate::config::Settings;
use crate::storage::StorageRoot;
pub use app::{App, Status};

/// Run the TUI application
pub fn run(settings: &Settings, root: Box<dyn StorageRoot>) -> Result<()> {
    let mut terminal = setup_terminal()?;

    // Create app state
    let mut app = App::new(settings, root);
    let tick = Duration::from_millis(settings.ui.tick_ms.max(10));

    // Run main loop
    let result = run_app(&mut terminal, &mut app, tick);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

/// Enter raw mode and the alternate screen
///
/// Raw mode is switched back off if anything after it fails.
fn setup_terminal() -> Result<Terminal<CrosstermBackend<io::Stdout>>> {
    enable_raw_mode()?;
    or_restore(enter_alternate_screen(), restore_terminal)
}

fn enter_alternate_screen() -> Result<Terminal<CrosstermBackend<io::Stdout>>> {
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    Ok(Terminal::new(CrosstermBackend::new(stdout))?)
}

// Best effort; the setup error is the one reported.
fn restore_terminal() {
    let _ = disable_raw_mode();
    let _ = execute!(io::stdout(), LeaveAlternateScreen);
}

fn or_restore<T>(result: Result<T>, restore: impl FnOnce()) -> Result<T> {
    if result.is_err() {
        restore();
    }
    result
}

/// Main application loop
fn run_app<B: Backend>(terminal: &mut Terminal<B>, app: &mut App, tick: Duration) -> Result<()> {
    loop {
        // Draw UI
        terminal.draw(|f| app.draw(f))?;

        // Poll with a timeout so the elapsed time keeps ticking
        if event::poll(tick)? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    match key.code {
                        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                            app.request_quit();
                        }
                        KeyCode::Esc => {
                            app.handle_back();
                        }
                        code => {
                            app.handle_key(code);
                        }
                    }
                }
            }
        }

        if app.should_quit() {
            return Ok(());
        }
    }
}
