//! Status invariant: the recorded status matches the board.

use super::Invariant;
use crate::rules::{evaluate, is_full};
use crate::types::{GameState, GameStatus};

/// Invariant: `status` is what the rules derive from the board.
pub struct StatusConsistentInvariant;

impl Invariant<GameState> for StatusConsistentInvariant {
    fn holds(state: &GameState) -> bool {
        let derived = match evaluate(state.board()) {
            Some(winner) => GameStatus::Won(winner),
            None if is_full(state.board()) => GameStatus::Draw,
            None => GameStatus::InProgress,
        };
        derived == state.status()
    }

    fn description() -> &'static str {
        "Status matches the board (line wins, full board draws)"
    }
}
