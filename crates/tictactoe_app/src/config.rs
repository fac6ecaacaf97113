//! Application configuration.

use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tictactoe_engine::Player;
use tracing::{debug, instrument};

/// Settings for the front ends, loadable from TOML.
///
/// Every field has a default, so an empty file (or no file) is valid.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct AppConfig {
    /// Display name for X, who moves first.
    #[serde(default = "default_player_x_name")]
    player_x_name: String,

    /// Display name for O.
    #[serde(default = "default_player_o_name")]
    player_o_name: String,

    /// `tracing` filter used when `RUST_LOG` is not set.
    #[serde(default = "default_log_filter")]
    log_filter: String,

    /// Log destination for the terminal UI.
    #[serde(default = "default_log_file")]
    log_file: PathBuf,
}

fn default_player_x_name() -> String {
    "Player 1".to_string()
}

fn default_player_o_name() -> String {
    "Player 2".to_string()
}

fn default_log_filter() -> String {
    "info".to_string()
}

fn default_log_file() -> PathBuf {
    PathBuf::from("tictactoe_tui.log")
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            player_x_name: default_player_x_name(),
            player_o_name: default_player_o_name(),
            log_filter: default_log_filter(),
            log_file: default_log_file(),
        }
    }
}

impl AppConfig {
    /// Loads configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        Self::from_toml(&content)
    }

    /// Parses configuration from TOML text.
    #[instrument(skip(content))]
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;
        config.validate()?;
        Ok(config)
    }

    /// Loads `path` if given, otherwise falls back to defaults.
    #[instrument]
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(path) => Self::from_file(path),
            None => {
                debug!("No config file given, using defaults");
                Ok(Self::default())
            }
        }
    }

    /// Display name for `player`.
    pub fn player_name(&self, player: Player) -> &str {
        match player {
            Player::X => &self.player_x_name,
            Player::O => &self.player_o_name,
        }
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.player_x_name.trim().is_empty() || self.player_o_name.trim().is_empty() {
            return Err(ConfigError::new("Player names must not be empty"));
        }
        if self.player_x_name == self.player_o_name {
            return Err(ConfigError::new(format!(
                "Both players are named {:?}",
                self.player_x_name
            )));
        }
        Ok(())
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
    /// Creates a new config error with caller location tracking.
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
    fn test_empty_toml_uses_defaults() {
        let config = AppConfig::from_toml("").unwrap();
        assert_eq!(config, AppConfig::default());
        assert_eq!(config.player_name(Player::X), "Player 1");
        assert_eq!(config.player_name(Player::O), "Player 2");
        assert_eq!(config.log_filter(), "info");
    }

    #[test]
    fn test_partial_toml_overrides() {
        let config = AppConfig::from_toml(
            r#"
            player_x_name = "Ada"
            log_filter = "tictactoe_engine=debug"
            "#,
        )
        .unwrap();
        assert_eq!(config.player_x_name(), "Ada");
        assert_eq!(config.player_o_name(), "Player 2");
        assert_eq!(config.log_filter(), "tictactoe_engine=debug");
    }

    #[test]
    fn test_invalid_toml_is_rejected() {
        let err = AppConfig::from_toml("player_x_name = ").unwrap_err();
        assert!(err.message.starts_with("Failed to parse config"));
    }

    #[test]
    fn test_duplicate_names_are_rejected() {
        let err = AppConfig::from_toml(
            r#"
            player_x_name = "Sam"
            player_o_name = "Sam"
            "#,
        )
        .unwrap_err();
        assert!(err.message.contains("Sam"));
    }

    #[test]
    fn test_missing_file() {
        let err = AppConfig::from_file("definitely/not/here.toml").unwrap_err();
        assert!(err.message.starts_with("Failed to read config file"));
        assert!(err.to_string().starts_with("Config error:"));
    }

    #[test]
    fn test_load_without_path() {
        assert_eq!(AppConfig::load(None).unwrap(), AppConfig::default());
    }
}
