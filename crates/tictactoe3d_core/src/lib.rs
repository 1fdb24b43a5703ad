//! Tic-tac-toe game core.
//!
//! Everything a presentation layer needs to run a two-player game on one
//! device: the board and turn state machine, move validation, win and draw
//! detection, and a score tally that survives resets.
//!
//! The crate has no rendering or terminal dependencies. A front end owns a
//! [`Session`], reads its [`GameState`] and forwards cell indices.
//!
//! # Example
//!
//! ```
//! use tictactoe3d_core::{GameStatus, Player, Session};
//!
//! let mut session = Session::new();
//! for cell in [0, 3, 1, 4, 2] {
//!     session.submit_move(cell);
//! }
//! assert_eq!(session.state().status(), GameStatus::Won(Player::X));
//! assert_eq!(session.state().scores().player1(), 1);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod invariants;
mod position;
mod rules;
mod scores;
mod session;
mod transition;
mod types;
mod validator;

pub use invariants::{
    AlternatingTurnInvariant, GameInvariants, Invariant, InvariantSet, InvariantViolation,
    MonotonicBoardInvariant, StatusConsistentInvariant,
};
pub use position::Position;
pub use rules::{LINES, evaluate, is_full, winning_line};
pub use scores::{Scores, record_win};
pub use session::{MoveOutcome, Session};
pub use transition::{apply_move, reset};
pub use types::{Board, GameState, GameStatus, Player, Square};
pub use validator::{MoveRejection, can_move, check_move, check_position};
