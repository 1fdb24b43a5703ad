//! Session: the contract between the game core and a presentation layer.
//!
//! The presentation layer reads the current [`GameState`] and forwards cell
//! indices and reset requests. Illegal moves leave the state exactly as it
//! was.

use super::position::Position;
use super::transition::{apply_move, reset};
use super::types::{GameState, GameStatus};
use super::validator::{MoveRejection, check_move};
use tracing::{debug, info, instrument};

/// What happened to a submitted move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveOutcome {
    /// The mark was placed.
    Accepted {
        /// Cell that was marked.
        position: Position,
        /// Round status after the move.
        status: GameStatus,
    },
    /// The move was ignored; the state is unchanged.
    Rejected(MoveRejection),
}

impl MoveOutcome {
    /// True if the move was applied.
    pub fn is_accepted(&self) -> bool {
        matches!(self, MoveOutcome::Accepted { .. })
    }
}

/// One play session on one device: the current round plus the tally.
#[derive(Debug, Clone, Default)]
pub struct Session {
    state: GameState,
}

impl Session {
    /// Starts a session with an empty board and no wins.
    #[instrument]
    pub fn new() -> Self {
        info!("Starting game session");
        Self::default()
    }

    /// Read-only view of the current state.
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Submits a move for the player whose turn it is.
    ///
    /// Legal moves are applied; anything else is a no-op.
    pub fn submit_move(&mut self, cell_index: usize) -> &GameState {
        self.submit_move_reported(cell_index);
        &self.state
    }

    /// Like [`submit_move`](Self::submit_move), but reports the outcome.
    #[instrument(skip(self), fields(player = ?self.state.current_player()))]
    pub fn submit_move_reported(&mut self, cell_index: usize) -> MoveOutcome {
        match check_move(&self.state, cell_index) {
            Ok(position) => {
                let state = std::mem::take(&mut self.state);
                self.state = apply_move(state, position);
                debug!(%position, status = ?self.state.status(), "Move applied");
                MoveOutcome::Accepted {
                    position,
                    status: self.state.status(),
                }
            }
            Err(reason) => {
                debug!(%reason, "Move ignored");
                MoveOutcome::Rejected(reason)
            }
        }
    }

    /// Clears the board for a new round; scores carry over.
    #[instrument(skip(self))]
    pub fn reset_game(&mut self) -> &GameState {
        let state = std::mem::take(&mut self.state);
        self.state = reset(state);
        &self.state
    }
}
