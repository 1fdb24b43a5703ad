//! Win detection for tic-tac-toe.

use crate::position::Position;
use crate::types::{Board, Player, Square};
use tracing::instrument;

/// The eight triples, in scan order: rows top to bottom, columns left to
/// right, then the two diagonals.
pub const LINES: [[Position; 3]; 8] = [
    // Rows
    [Position::TopLeft, Position::TopCenter, Position::TopRight],
    [Position::MiddleLeft, Position::Center, Position::MiddleRight],
    [Position::BottomLeft, Position::BottomCenter, Position::BottomRight],
    // Columns
    [Position::TopLeft, Position::MiddleLeft, Position::BottomLeft],
    [Position::TopCenter, Position::Center, Position::BottomCenter],
    [Position::TopRight, Position::MiddleRight, Position::BottomRight],
    // Diagonals
    [Position::TopLeft, Position::Center, Position::BottomRight],
    [Position::TopRight, Position::Center, Position::BottomLeft],
];

/// Returns the first triple in [`LINES`] held entirely by one player.
#[instrument(skip(board))]
pub fn winning_line(board: &Board) -> Option<[Position; 3]> {
    LINES.into_iter().find(|&[a, b, c]| {
        let sq = board.get(a);
        sq != Square::Empty && sq == board.get(b) && sq == board.get(c)
    })
}

/// Returns the player owning the first completed triple, if any.
#[instrument(skip(board))]
pub fn evaluate(board: &Board) -> Option<Player> {
    winning_line(board).and_then(|[first, _, _]| board.get(first).player())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board_with(cells: &[(Position, Player)]) -> Board {
        let mut board = Board::new();
        for &(pos, player) in cells {
            board.set(pos, Square::Occupied(player));
        }
        board
    }

    #[test]
    fn test_no_winner_empty_board() {
        assert_eq!(evaluate(&Board::new()), None);
        assert_eq!(winning_line(&Board::new()), None);
    }

    #[test]
    fn test_every_line_is_detected() {
        for line in LINES {
            let cells: Vec<_> = line.iter().map(|&p| (p, Player::O)).collect();
            let board = board_with(&cells);
            assert_eq!(evaluate(&board), Some(Player::O));
            assert_eq!(winning_line(&board), Some(line));
        }
    }

    #[test]
    fn test_mixed_line_is_not_a_win() {
        let board = board_with(&[
            (Position::TopLeft, Player::X),
            (Position::TopCenter, Player::O),
            (Position::TopRight, Player::X),
        ]);
        assert_eq!(evaluate(&board), None);
    }

    #[test]
    fn test_incomplete_line_is_not_a_win() {
        let board = board_with(&[
            (Position::TopLeft, Player::X),
            (Position::TopCenter, Player::X),
        ]);
        assert_eq!(evaluate(&board), None);
    }

    #[test]
    fn test_first_line_in_scan_order_wins() {
        // Two completed lines can only come from a hand-built board; the
        // scan reports the row before the column.
        let board = board_with(&[
            (Position::TopLeft, Player::X),
            (Position::TopCenter, Player::X),
            (Position::TopRight, Player::X),
            (Position::MiddleLeft, Player::O),
            (Position::Center, Player::O),
            (Position::BottomLeft, Player::O),
            (Position::MiddleRight, Player::O),
            (Position::BottomCenter, Player::O),
            (Position::BottomRight, Player::O),
        ]);
        assert_eq!(winning_line(&board), Some(LINES[0]));
        assert_eq!(evaluate(&board), Some(Player::X));
    }
}
