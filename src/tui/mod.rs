//! Terminal UI: the presentation layer around a game [`Session`].
//!
//! [`Session`]: tictactoe3d_core::Session

mod app;
mod input;
mod ui;

pub use app::App;
pub use input::move_cursor;
pub use ui::draw;

use anyhow::{Context, Result};
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io::{self, Stdout};
use tracing::{debug, error, info, instrument};

use crate::config::Settings;

/// Restores the terminal on drop, including on early error returns.
struct TerminalGuard;

impl TerminalGuard {
    fn enter() -> Result<Self> {
        enable_raw_mode().context("Failed to enable raw mode")?;
        let guard = Self;
        execute!(io::stdout(), EnterAlternateScreen).context("Failed to enter alternate screen")?;
        Ok(guard)
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        debug!("Restoring terminal");
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
    }
}

/// Runs the interactive game until the user quits.
#[instrument(skip_all)]
pub fn run(settings: Settings) -> Result<()> {
    info!("Starting terminal UI");

    let _guard = TerminalGuard::enter()?;
    let mut terminal =
        Terminal::new(CrosstermBackend::new(io::stdout())).context("Failed to set up terminal")?;
    let mut app = App::new(settings);

    let res = run_loop(&mut terminal, &mut app);
    let _ = terminal.show_cursor();

    if let Err(err) = &res {
        error!(error = ?err, "Game loop error");
    }
    let scores = app.session().state().scores();
    info!(
        player1 = scores.player1(),
        player2 = scores.player2(),
        "Session finished"
    );
    res
}

/// Draw, then block for the next key press; one key is handled at a time.
fn run_loop(terminal: &mut Terminal<CrosstermBackend<Stdout>>, app: &mut App) -> Result<()> {
    loop {
        terminal.draw(|frame| draw(frame, app))?;

        if *app.should_quit() {
            return Ok(());
        }

        if let Event::Key(key) = event::read()? {
            // Ignore key release/repeat events reported by some terminals.
            if key.kind == KeyEventKind::Press {
                app.handle_key(key.code);
            }
        }
    }
}
