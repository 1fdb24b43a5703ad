//! Game rules for tic-tac-toe.
//!
//! Pure functions over a [`Board`](crate::Board). They know nothing about
//! turns or scores, so the transition code and the invariants can both
//! lean on them.

mod draw;
mod win;

pub use draw::is_full;
pub use win::{LINES, evaluate, winning_line};
