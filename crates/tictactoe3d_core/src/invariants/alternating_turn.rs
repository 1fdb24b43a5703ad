//! Alternating turn invariant: X, O, X, O, ...

use super::Invariant;
use crate::types::{GameState, Player};

/// Invariant: the player to move follows from the history.
///
/// X opens every round. While the round is open the player to move is X
/// after an even number of moves and O after an odd one. Once the round is
/// over the turn stays with whoever made the last move.
pub struct AlternatingTurnInvariant;

impl Invariant<GameState> for AlternatingTurnInvariant {
    fn holds(state: &GameState) -> bool {
        let moves = state.history().len();
        let last_mover = if moves % 2 == 1 { Player::X } else { Player::O };

        if state.status().is_terminal() {
            moves > 0 && state.current_player() == last_mover
        } else {
            state.current_player() == last_mover.opponent()
        }
    }

    fn description() -> &'static str {
        "Players alternate turns (X, O, X, O, ...)"
    }
}
