//! Cursor movement for keyboard navigation.

use crossterm::event::KeyCode;
use tictactoe3d_core::Position;

/// Moves the cursor one cell with the arrow keys (or h/j/k/l).
///
/// The cursor stops at the board edge; other keys leave it where it is.
pub fn move_cursor(cursor: Position, key: KeyCode) -> Position {
    let (row, col) = (cursor.row(), cursor.col());

    let (row, col) = match key {
        KeyCode::Up | KeyCode::Char('k') => (row.saturating_sub(1), col),
        KeyCode::Down | KeyCode::Char('j') => ((row + 1).min(2), col),
        KeyCode::Left | KeyCode::Char('h') => (row, col.saturating_sub(1)),
        KeyCode::Right | KeyCode::Char('l') => (row, (col + 1).min(2)),
        _ => (row, col),
    };

    Position::from_row_col(row, col).unwrap_or(cursor)
}
