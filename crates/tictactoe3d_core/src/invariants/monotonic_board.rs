//! Monotonic board invariant: squares never change once set.

use super::Invariant;
use crate::types::{Board, GameState, Player, Square};

/// Invariant: the board is exactly the history replayed onto an empty board.
///
/// Marks alternate X, O, X... along the history and no cell is written
/// twice, so a square that was marked can only be cleared by a reset.
pub struct MonotonicBoardInvariant;

impl Invariant<GameState> for MonotonicBoardInvariant {
    fn holds(state: &GameState) -> bool {
        let mut reconstructed = Board::new();
        let mut player = Player::X;

        for &pos in state.history() {
            if !reconstructed.is_empty(pos) {
                return false;
            }
            reconstructed.set(pos, Square::Occupied(player));
            player = player.opponent();
        }

        reconstructed == *state.board()
    }

    fn description() -> &'static str {
        "Board squares are monotonic (never overwritten)"
    }
}
