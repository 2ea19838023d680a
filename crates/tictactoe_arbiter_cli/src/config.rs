//! Configuration for the arbiter CLI.

use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info, instrument};

/// Settings read from `arbiter.toml`.
///
/// Every field has a default, so an empty or missing file is valid.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct CliConfig {
    /// Identity of the first seat (X) in hot-seat games.
    #[serde(default = "default_initiator")]
    initiator: String,

    /// Identity of the second seat (O) in hot-seat games.
    #[serde(default = "default_opponent")]
    opponent: String,

    /// Tracing filter used when `RUST_LOG` is not set.
    #[serde(default = "default_log_filter")]
    log_filter: String,

    /// Print the board after every accepted move.
    #[serde(default = "default_show_boards")]
    show_boards: bool,
}

#[instrument]
fn default_initiator() -> String {
    "player-one".to_string()
}

#[instrument]
fn default_opponent() -> String {
    "player-two".to_string()
}

#[instrument]
fn default_log_filter() -> String {
    "warn".to_string()
}

fn default_show_boards() -> bool {
    true
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            initiator: default_initiator(),
            opponent: default_opponent(),
            log_filter: default_log_filter(),
            show_boards: default_show_boards(),
        }
    }
}

impl CliConfig {
    /// Loads configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config: Self =
            toml::from_str(&content).map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;

        info!(initiator = %config.initiator, opponent = %config.opponent, "Config loaded successfully");
        Ok(config)
    }

    /// Loads `path` if it exists, otherwise falls back to defaults.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn load_or_default(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        if path.as_ref().exists() {
            Self::from_file(path)
        } else {
            debug!("Config file not found, using defaults");
            Ok(Self::default())
        }
    }

    /// Overrides the hot-seat identities where given.
    pub fn with_players(mut self, initiator: Option<String>, opponent: Option<String>) -> Self {
        if let Some(initiator) = initiator {
            self.initiator = initiator;
        }
        if let Some(opponent) = opponent {
            self.opponent = opponent;
        }
        self
    }
}

/// Configuration or script loading error.
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
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}
