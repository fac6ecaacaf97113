//! Terminal UI for tic-tac-toe.
//!
//! A blocking crossterm event loop on the main thread: one key press, one
//! call into the engine, one redraw.

mod app;
mod input;
mod ui;

pub use app::App;
pub use input::{Action, action_for, move_cursor};
pub use ui::draw;

use crate::config::AppConfig;
use anyhow::{Context, Result};
use crossterm::{
    cursor::Show,
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io::{self, Stdout};
use tracing::{error, info, instrument};

/// Undoes terminal setup when dropped.
///
/// Created as soon as raw mode is on; every later exit from [`run_tui`],
/// including a failed setup step, restores the terminal.
#[derive(Debug, Default)]
struct TerminalGuard {
    alternate_screen: bool,
}

impl TerminalGuard {
    /// Leaves the alternate screen (if entered) and disables raw mode.
    fn restore(&mut self) -> io::Result<()> {
        if std::mem::take(&mut self.alternate_screen) {
            execute!(io::stdout(), LeaveAlternateScreen, Show)?;
        }
        disable_raw_mode()
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        if let Err(err) = self.restore() {
            error!(error = ?err, "Failed to restore terminal");
        }
    }
}

/// Run the TUI until the user quits.
///
/// Expects logging to be set up already (a file subscriber, since stdout
/// belongs to the UI).
pub fn run_tui(config: AppConfig) -> Result<()> {
    info!("Starting tic-tac-toe TUI");

    enable_raw_mode().context("Failed to enable raw mode")?;
    let mut guard = TerminalGuard::default();
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen).context("Failed to enter alternate screen")?;
    guard.alternate_screen = true;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend).context("Failed to create terminal")?;

    let mut app = App::new(config);
    let res = run_app(&mut terminal, &mut app);
    let restored = guard.restore().context("Failed to restore terminal");

    if let Err(err) = &res {
        error!(error = ?err, "Game loop error");
    }
    info!("TUI closed");
    res.and(restored)
}

#[instrument(skip_all)]
fn run_app(terminal: &mut Terminal<CrosstermBackend<Stdout>>, app: &mut App) -> Result<()> {
    while !app.should_quit() {
        terminal.draw(|frame| ui::draw(frame, app))?;

        if let Event::Key(key) = event::read()?
            && key.kind == KeyEventKind::Press
        {
            app.handle_key(key);
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_guard_restore_without_raw_mode() {
        let mut guard = TerminalGuard::default();
        guard.restore().unwrap();
        guard.restore().unwrap();
        assert!(!guard.alternate_screen);
    }
}
