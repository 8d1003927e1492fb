//! Terminal UI for the game.

mod app;
mod input;
pub mod ui;

use anyhow::Result;
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io::{self, Stdout};
use std::time::Duration;
use tracing::{debug, error, info, instrument, warn};

pub use app::{App, AppFlow, Focus};
pub use input::move_cursor;

use crate::config::AppConfig;
use crate::games::tictactoe::GameController;
use crate::store::KeyValueStore;

/// Runs the terminal UI until the user quits.
///
/// Expects tracing to write somewhere other than the terminal being drawn
/// on; the binary points it at the configured log file.
///
/// # Errors
///
/// Returns an error if the terminal cannot be set up or a state change
/// cannot be persisted. The terminal is restored either way.
pub fn run_tui<S: KeyValueStore>(config: &AppConfig, game: GameController<S>) -> Result<()> {
    info!("Starting tic-tac-toe TUI");

    let mut terminal = match setup_terminal() {
        Ok(terminal) => terminal,
        Err(err) => {
            error!(error = ?err, "Terminal setup failed");
            if let Err(restore) = restore_terminal() {
                warn!(error = ?restore, "Failed to restore terminal");
            }
            return Err(err);
        }
    };

    let mut app = App::new(game);
    let tick_rate = Duration::from_millis(*config.tick_rate_ms());
    let res = run_app(&mut terminal, &mut app, tick_rate);

    restore_terminal()?;
    terminal.show_cursor()?;

    if let Err(err) = &res {
        error!(error = ?err, "Game loop error");
    }
    info!("TUI stopped");

    res
}

fn setup_terminal() -> Result<Terminal<CrosstermBackend<Stdout>>> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    Ok(Terminal::new(CrosstermBackend::new(stdout))?)
}

fn restore_terminal() -> Result<()> {
    disable_raw_mode()?;
    execute!(io::stdout(), LeaveAlternateScreen, DisableMouseCapture)?;
    Ok(())
}

/// Draw, wait for input, handle it; repeat until quit.
#[instrument(skip_all)]
fn run_app<S: KeyValueStore>(
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    app: &mut App<S>,
    tick_rate: Duration,
) -> Result<()> {
    loop {
        terminal.draw(|f| app.draw(f))?;

        if event::poll(tick_rate)? {
            let event = event::read()?;
            if app.handle_event(event)? == AppFlow::Quit {
                return Ok(());
            }
            debug!(
                current_move = app.game().current_move(),
                history_len = app.game().history().len(),
                "Event handled"
            );
        }
    }
}
