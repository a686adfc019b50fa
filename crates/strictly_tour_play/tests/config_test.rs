//! Tests for loading play configuration from disk.

use std::io::Write;
use strictly_tour_play::{PlayConfig, PlaySession};

#[test]
fn test_load_from_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "rows = 5\ncols = 6\nplayer = \"ada\"\nshow_hints = true").unwrap();

    let config = PlayConfig::from_file(file.path()).expect("Valid config");
    assert_eq!(*config.rows(), 5);
    assert_eq!(*config.cols(), 6);
    assert_eq!(config.player(), "ada");
    assert!(*config.show_hints());
    assert_eq!(config.board().unwrap().square_count(), 30);
}

#[test]
fn test_missing_path_uses_defaults() {
    let config = PlayConfig::load(None).unwrap();
    assert_eq!(config, PlayConfig::default());
}

#[test]
fn test_unreadable_file_is_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = PlayConfig::from_file(dir.path().join("absent.toml")).unwrap_err();
    assert!(err.message.contains("Failed to read config file"));
}

#[test]
fn test_malformed_file_is_error() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "rows = \"eight\"").unwrap();

    let err = PlayConfig::from_file(file.path()).unwrap_err();
    assert!(err.message.contains("Failed to parse config"));
}

#[test]
fn test_invalid_board_rejected_by_session() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "rows = -2").unwrap();

    let config = PlayConfig::from_file(file.path()).expect("Parses");
    assert!(PlaySession::new(&config).is_err());
}
