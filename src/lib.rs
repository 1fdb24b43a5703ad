//! tictactoe3d - two-player tic-tac-toe in the terminal.
//!
//! The game rules live in [`tictactoe3d_core`]; this crate is the front end
//! around them.
//!
//! # Architecture
//!
//! - **Tui**: ratatui presentation layer that reads the game state and
//!   forwards key presses as moves
//! - **Replay**: feeds a move list to a fresh game and prints the result
//! - **Config**: optional TOML settings (player names, logging)
//!
//! # Example
//!
//! ```
//! use tictactoe3d::{run_replay, Settings};
//!
//! let report = run_replay(&[0, 3, 1, 4, 2]);
//! let text = report.render_text(&Settings::default());
//! assert!(text.contains("Player 1 wins!"));
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod cli;
mod config;
mod logging;
mod replay;
mod status;
pub mod tui;

pub use cli::{Cli, Command};
pub use config::{ConfigError, DEFAULT_CONFIG_PATH, Settings};
pub use logging::{init_file_logging, init_stderr_logging};
pub use replay::{IgnoredMove, ReplayReport, run_replay};
pub use status::{seat_label, status_line};
