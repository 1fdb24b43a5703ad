//! Tracing subscriber setup.
//!
//! `RUST_LOG` wins over the configured filter in both modes.

use crate::config::Settings;
use anyhow::{Context, Result};
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

fn filter_for(settings: &Settings) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(settings.log_filter()))
}

/// Logs to the configured file so output does not interfere with the TUI.
pub fn init_file_logging(settings: &Settings) -> Result<()> {
    let log_file = std::fs::File::create(settings.log_file()).with_context(|| {
        format!("Failed to create log file {}", settings.log_file().display())
    })?;

    // Don't panic if already initialized
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter_for(settings))
        .with_writer(Arc::new(log_file))
        .with_ansi(false)
        .try_init();

    Ok(())
}

/// Logs to stderr, keeping stdout for command output.
pub fn init_stderr_logging(settings: &Settings) {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter_for(settings))
        .with_writer(std::io::stderr)
        .try_init();
}
