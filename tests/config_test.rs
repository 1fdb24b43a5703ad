//! Tests for loading settings files.

use std::io::Write;
use std::path::PathBuf;
use tictactoe3d::Settings;
use tictactoe3d_core::Player;

#[test]
fn test_load_from_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(
        file,
        "player_one_name = \"Ada\"\nplayer_two_name = \"Grace\"\nlog_file = \"game.log\"\nlog_filter = \"debug\""
    )
    .unwrap();

    let settings = Settings::load(Some(file.path())).unwrap();
    assert_eq!(settings.player_name(Player::X), "Ada");
    assert_eq!(settings.player_name(Player::O), "Grace");
    assert_eq!(settings.log_file(), &PathBuf::from("game.log"));
    assert_eq!(settings.log_filter(), "debug");
}

#[test]
fn test_explicit_missing_file_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("nope.toml");

    let err = Settings::load(Some(missing.as_path())).unwrap_err();
    assert!(err.message.contains("Failed to read settings file"));
}

#[test]
fn test_malformed_file_is_an_error() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "player_one_name = 7").unwrap();

    let err = Settings::from_file(file.path()).unwrap_err();
    assert!(err.message.contains("Failed to parse settings"));
}
