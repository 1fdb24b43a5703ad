//! Running win tally across rounds.

use super::types::Player;
use derive_new::new;
use serde::{Deserialize, Serialize};
use tracing::{info, instrument};

/// Wins per player for the current session.
///
/// Draws are not counted. Resetting the board leaves the tally alone.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, new)]
pub struct Scores {
    player1: u32,
    player2: u32,
}

impl Scores {
    /// Wins for player 1 (X).
    pub fn player1(&self) -> u32 {
        self.player1
    }

    /// Wins for player 2 (O).
    pub fn player2(&self) -> u32 {
        self.player2
    }

    /// Wins for the given player.
    pub fn get(&self, player: Player) -> u32 {
        match player {
            Player::X => self.player1,
            Player::O => self.player2,
        }
    }
}

/// Credits one win to `winner` and returns the new tally.
#[instrument]
pub fn record_win(scores: Scores, winner: Player) -> Scores {
    let mut next = scores;
    match winner {
        Player::X => next.player1 = next.player1.saturating_add(1),
        Player::O => next.player2 = next.player2.saturating_add(1),
    }
    info!(player1 = next.player1, player2 = next.player2, "Win recorded");
    next
}
