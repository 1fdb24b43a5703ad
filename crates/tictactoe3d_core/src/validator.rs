//! Move legality checks.
//!
//! A move is legal when the cell exists, the round is still in progress and
//! the cell is empty. These checks never touch the state; rejected moves are
//! turned into no-ops by the callers.

use super::position::Position;
use super::types::GameState;
use tracing::{instrument, trace};

/// Why a proposed move was not accepted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum MoveRejection {
    /// The cell index is not on the board.
    #[display("Cell {} is off the board (expected 0-8)", _0)]
    OutOfRange(usize),

    /// The round already ended in a win or a draw.
    #[display("Game is already over, reset to play again")]
    GameOver,

    /// The cell already carries a mark.
    #[display("{} is already taken", _0)]
    Occupied(Position),
}

impl std::error::Error for MoveRejection {}

/// Checks a move given as a raw cell index.
///
/// Checks run in a fixed order: range, then round status, then occupancy.
#[instrument(skip(state), fields(status = ?state.status()))]
pub fn check_move(state: &GameState, cell_index: usize) -> Result<Position, MoveRejection> {
    let position = Position::from_index(cell_index).ok_or(MoveRejection::OutOfRange(cell_index))?;
    check_position(state, position)?;
    Ok(position)
}

/// Checks a move to an in-range position.
#[instrument(skip(state), fields(status = ?state.status()))]
pub fn check_position(state: &GameState, position: Position) -> Result<(), MoveRejection> {
    if state.status().is_terminal() {
        trace!("Round is over");
        return Err(MoveRejection::GameOver);
    }
    if !state.board().is_empty(position) {
        trace!("Cell is occupied");
        return Err(MoveRejection::Occupied(position));
    }
    Ok(())
}

/// Returns true when `cell_index` is a legal move in `state`.
pub fn can_move(state: &GameState, cell_index: usize) -> bool {
    check_move(state, cell_index).is_ok()
}
