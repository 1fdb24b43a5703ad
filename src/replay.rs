//! Non-interactive play: feed a move list to a fresh session.

use crate::config::Settings;
use crate::status::{seat_label, status_line};
use tictactoe3d_core::{GameState, MoveOutcome, MoveRejection, Player, Session};
use tracing::{info, instrument, warn};

/// A move from the list that the game ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IgnoredMove {
    /// Zero-based position in the submitted list.
    pub step: usize,
    /// The submitted cell index.
    pub cell: usize,
    /// Why it was ignored.
    pub reason: MoveRejection,
}

/// Result of a replay.
#[derive(Debug, Clone)]
pub struct ReplayReport {
    state: GameState,
    ignored: Vec<IgnoredMove>,
}

impl ReplayReport {
    /// Final game state.
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Moves that were rejected, in submission order.
    pub fn ignored(&self) -> &[IgnoredMove] {
        &self.ignored
    }

    /// Plain-text rendering: board, status line, scores and ignored moves.
    pub fn render_text(&self, settings: &Settings) -> String {
        let scores = self.state.scores();
        let mut out = String::new();
        out.push_str(&self.state.board().display());
        out.push_str("\n\n");
        out.push_str(&status_line(&self.state, settings));
        out.push('\n');
        out.push_str(&format!(
            "Score: {} {} - {} {}\n",
            seat_label(Player::X, settings),
            scores.player1(),
            scores.player2(),
            seat_label(Player::O, settings),
        ));
        for ignored in &self.ignored {
            out.push_str(&format!(
                "ignored move #{} (cell {}): {}\n",
                ignored.step + 1,
                ignored.cell,
                ignored.reason
            ));
        }
        out
    }

    /// Pretty JSON of the final state.
    pub fn render_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(&self.state)
    }
}

/// Submits `moves` in order to a new session.
#[instrument]
pub fn run_replay(moves: &[usize]) -> ReplayReport {
    let mut session = Session::new();
    let mut ignored = Vec::new();

    for (step, &cell) in moves.iter().enumerate() {
        if let MoveOutcome::Rejected(reason) = session.submit_move_reported(cell) {
            warn!(step, cell, %reason, "Move ignored");
            ignored.push(IgnoredMove { step, cell, reason });
        }
    }

    info!(status = ?session.state().status(), ignored = ignored.len(), "Replay finished");
    ReplayReport {
        state: session.state().clone(),
        ignored,
    }
}
