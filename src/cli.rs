//! Command-line interface for tictactoe3d.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// tictactoe3d - two players, one keyboard, a running score
#[derive(Parser, Debug)]
#[command(name = "tictactoe3d")]
#[command(about = "Two-player tic-tac-toe in the terminal", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Settings file (TOML). Defaults to ./tictactoe3d.toml when present.
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Command {
    /// Play in the terminal UI
    Play,

    /// Submit a list of moves to a fresh game and print the result
    Replay {
        /// Cell indices 0-8, row-major, comma or space separated
        #[arg(value_delimiter = ',', required = true)]
        moves: Vec<usize>,

        /// Print the final state as JSON
        #[arg(long)]
        json: bool,
    },
}
