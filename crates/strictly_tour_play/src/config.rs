//! Play configuration loaded from TOML.

use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::Path;
use strictly_tour::BoardDimensions;
use tracing::{debug, info, instrument};

/// Settings for an interactive tour session.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct PlayConfig {
    /// Board rows.
    #[serde(default = "default_side")]
    rows: i32,

    /// Board columns.
    #[serde(default = "default_side")]
    cols: i32,

    /// Name recorded on the leaderboard.
    #[serde(default = "default_player")]
    player: String,

    /// Render the advisor's suggestion on every board.
    #[serde(default)]
    show_hints: bool,
}

#[instrument]
fn default_side() -> i32 {
    8
}

#[instrument]
fn default_player() -> String {
    "player".to_string()
}

impl Default for PlayConfig {
    fn default() -> Self {
        Self {
            rows: default_side(),
            cols: default_side(),
            player: default_player(),
            show_hints: false,
        }
    }
}

impl PlayConfig {
    /// Loads configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config: Self = toml::from_str(&content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;

        info!(player = %config.player, rows = config.rows, cols = config.cols, "Config loaded");
        Ok(config)
    }

    /// Loads from `path` if given, otherwise returns defaults.
    #[instrument(skip(path))]
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(path) => Self::from_file(path),
            None => Ok(Self::default()),
        }
    }

    /// Applies command-line overrides.
    #[instrument(skip(self))]
    pub fn with_overrides(
        mut self,
        rows: Option<i32>,
        cols: Option<i32>,
        player: Option<String>,
        show_hints: bool,
    ) -> Self {
        if let Some(rows) = rows {
            self.rows = rows;
        }
        if let Some(cols) = cols {
            self.cols = cols;
        }
        if let Some(player) = player {
            self.player = player;
        }
        self.show_hints |= show_hints;
        self
    }

    /// Validated board dimensions.
    pub fn board(&self) -> Result<BoardDimensions, ConfigError> {
        BoardDimensions::new(self.rows, self.cols).map_err(|e| ConfigError::new(e.to_string()))
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
    #[instrument(skip(message))]
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
    fn test_partial_file_uses_defaults() {
        let config: PlayConfig = toml::from_str("player = \"ada\"").unwrap();
        assert_eq!(config.player(), "ada");
        assert_eq!(*config.rows(), 8);
        assert!(!*config.show_hints());
    }

    #[test]
    fn test_overrides_win() {
        let config = PlayConfig::default().with_overrides(Some(5), None, Some("bo".into()), true);
        assert_eq!(*config.rows(), 5);
        assert_eq!(*config.cols(), 8);
        assert_eq!(config.player(), "bo");
        assert!(*config.show_hints());
    }

    #[test]
    fn test_invalid_board_reported() {
        let config = PlayConfig::default().with_overrides(Some(0), None, None, false);
        assert!(config.board().is_err());
    }
}
