//! User settings loaded from a TOML file.

use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tictactoe3d_core::Player;
use tracing::{debug, info, instrument};

/// Settings file looked up when `--config` is not given.
pub const DEFAULT_CONFIG_PATH: &str = "tictactoe3d.toml";

/// User-configurable settings. Every key is optional.
///
/// ```toml
/// player_one_name = "Ada"
/// player_two_name = "Grace"
/// log_file = "tictactoe3d.log"
/// log_filter = "tictactoe3d=debug,info"
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Settings {
    /// Display name for player 1 (X).
    player_one_name: String,

    /// Display name for player 2 (O).
    player_two_name: String,

    /// File the terminal UI writes its log to.
    log_file: PathBuf,

    /// `tracing` filter directives used when `RUST_LOG` is unset.
    log_filter: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            player_one_name: Player::X.label().to_string(),
            player_two_name: Player::O.label().to_string(),
            log_file: PathBuf::from("tictactoe3d.log"),
            log_filter: "info".to_string(),
        }
    }
}

impl Settings {
    /// Loads settings from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading settings from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read settings file: {}", e)))?;

        let settings = Self::from_toml(&content)?;
        info!("Settings loaded");
        Ok(settings)
    }

    /// Parses settings from TOML text.
    #[instrument(skip(content))]
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content)
            .map_err(|e| ConfigError::new(format!("Failed to parse settings: {}", e)))
    }

    /// Resolves the settings for a run.
    ///
    /// An explicit path must exist. Without one, [`DEFAULT_CONFIG_PATH`] is
    /// used if present and built-in defaults otherwise.
    #[instrument]
    pub fn load(explicit: Option<&Path>) -> Result<Self, ConfigError> {
        match explicit {
            Some(path) => Self::from_file(path),
            None if Path::new(DEFAULT_CONFIG_PATH).exists() => Self::from_file(DEFAULT_CONFIG_PATH),
            None => {
                debug!("No settings file, using defaults");
                Ok(Self::default())
            }
        }
    }

    /// Display name for the given player.
    pub fn player_name(&self, player: Player) -> &str {
        match player {
            Player::X => &self.player_one_name,
            Player::O => &self.player_two_name,
        }
    }
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error.
    #[track_caller]
    pub fn new(message: impl Into<String>) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: loc.line(),
            file: loc.file(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_file_keeps_defaults() {
        let settings = Settings::from_toml("player_two_name = \"Grace\"").unwrap();
        assert_eq!(settings.player_one_name(), "Player 1");
        assert_eq!(settings.player_name(Player::O), "Grace");
        assert_eq!(settings.log_filter(), "info");
    }

    #[test]
    fn test_empty_file_is_default() {
        assert_eq!(Settings::from_toml("").unwrap(), Settings::default());
    }

    #[test]
    fn test_unknown_key_rejected() {
        let err = Settings::from_toml("board_size = 4").unwrap_err();
        assert!(err.message.contains("Failed to parse settings"));
        assert!(err.file.ends_with("config.rs"));
    }
}
