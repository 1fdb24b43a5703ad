//! Application state and key handling.

use crossterm::event::KeyCode;
use derive_getters::Getters;
use tictactoe3d_core::{MoveOutcome, Position, Session};
use tracing::{debug, info, instrument};

use super::input::move_cursor;
use crate::config::Settings;

/// Terminal front-end state around one game session.
#[derive(Debug, Getters)]
pub struct App {
    /// The game being played.
    session: Session,
    /// Names and log settings.
    settings: Settings,
    /// Highlighted cell, played with Enter or Space.
    cursor: Position,
    /// Why the last move was ignored, cleared by the next accepted key.
    notice: Option<String>,
    /// Set once the user asked to leave.
    should_quit: bool,
}

impl App {
    /// Creates the app with a fresh session and the cursor in the center.
    #[instrument(skip(settings))]
    pub fn new(settings: Settings) -> Self {
        Self {
            session: Session::new(),
            settings,
            cursor: Position::Center,
            notice: None,
            should_quit: false,
        }
    }

    /// Handles one key press.
    ///
    /// - `1`-`9` play that cell (row-major, 1 is top-left)
    /// - arrows or `h`/`j`/`k`/`l` move the cursor, Enter/Space play it
    /// - `r` starts a new round, `q`/Esc quits
    #[instrument(skip(self))]
    pub fn handle_key(&mut self, key: KeyCode) {
        match key {
            KeyCode::Char('q') | KeyCode::Esc => {
                info!("User quit");
                self.should_quit = true;
            }
            KeyCode::Char('r') => self.reset(),
            KeyCode::Char(c @ '1'..='9') => {
                let cell = c as usize - '1' as usize;
                if let Some(pos) = Position::from_index(cell) {
                    self.cursor = pos;
                }
                self.play(cell);
            }
            KeyCode::Enter | KeyCode::Char(' ') => self.play(self.cursor.to_index()),
            other => {
                self.cursor = move_cursor(self.cursor, other);
            }
        }
    }

    fn play(&mut self, cell: usize) {
        match self.session.submit_move_reported(cell) {
            MoveOutcome::Accepted { position, status } => {
                debug!(%position, ?status, "Move accepted");
                self.notice = None;
            }
            MoveOutcome::Rejected(reason) => {
                debug!(%reason, "Move rejected");
                self.notice = Some(reason.to_string());
            }
        }
    }

    fn reset(&mut self) {
        debug!("Resetting round");
        self.session.reset_game();
        self.cursor = Position::Center;
        self.notice = None;
    }
}
