//! tictactoe3d - unified CLI

use anyhow::{Context, Result};
use clap::Parser;
use tictactoe3d::{Cli, Command, Settings, init_file_logging, init_stderr_logging, run_replay, tui};
use tracing::info;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let settings = Settings::load(cli.config.as_deref())?;

    match cli.command {
        Command::Play => {
            init_file_logging(&settings)?;
            tui::run(settings)
        }
        Command::Replay { moves, json } => {
            init_stderr_logging(&settings);
            info!(moves = moves.len(), "Replaying moves");

            let report = run_replay(&moves);
            if json {
                println!("{}", report.render_json().context("Failed to serialize state")?);
            } else {
                print!("{}", report.render_text(&settings));
            }
            Ok(())
        }
    }
}
