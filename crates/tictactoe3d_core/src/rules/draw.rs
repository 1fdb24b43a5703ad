//! Draw detection for tic-tac-toe.

use crate::types::{Board, Square};
use tracing::instrument;

/// Checks if every square is occupied.
///
/// A full board with no winner is a draw; the caller checks for a winner
/// first.
#[instrument(skip(board))]
pub fn is_full(board: &Board) -> bool {
    board.squares().iter().all(|s| *s != Square::Empty)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::evaluate;
    use crate::{Player, Position};
    use strum::IntoEnumIterator;

    fn mark(board: &mut Board, player: Player, cells: &[Position]) {
        for &pos in cells {
            board.set(pos, Square::Occupied(player));
        }
    }

    #[test]
    fn test_empty_board_not_full() {
        assert!(!is_full(&Board::new()));
    }

    #[test]
    fn test_eight_of_nine_not_full() {
        let mut board = Board::new();
        for pos in Position::iter().take(8) {
            board.set(pos, Square::Occupied(Player::O));
        }
        assert!(!is_full(&board));
    }

    #[test]
    fn test_drawn_board_is_full_without_winner() {
        // X O X
        // X O O
        // O X X
        let mut board = Board::new();
        mark(
            &mut board,
            Player::X,
            &[
                Position::TopLeft,
                Position::TopRight,
                Position::MiddleLeft,
                Position::BottomCenter,
                Position::BottomRight,
            ],
        );
        mark(
            &mut board,
            Player::O,
            &[
                Position::TopCenter,
                Position::Center,
                Position::MiddleRight,
                Position::BottomLeft,
            ],
        );
        assert!(is_full(&board));
        assert_eq!(evaluate(&board), None);
    }
}
