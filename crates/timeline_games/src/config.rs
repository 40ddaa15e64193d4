//! Display configuration for the terminal driver.

use derive_getters::Getters;
use derive_more::{Display, Error};
use derive_setters::Setters;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info, instrument};

/// How empty cells are drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum EmptyCellStyle {
    /// Show the cell number, so players can see what to type.
    #[default]
    Index,
    /// Show a dot.
    Dot,
}

/// Driver configuration, loaded from TOML.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Setters, Serialize, Deserialize)]
#[setters(prefix = "with_")]
pub struct GameConfig {
    /// Tracing filter used when `RUST_LOG` is unset.
    #[serde(default = "default_log_filter")]
    #[setters(into)]
    log_filter: String,

    /// How empty cells are drawn.
    #[serde(default)]
    empty_cell: EmptyCellStyle,

    /// Bracket the cells of a winning line.
    #[serde(default = "default_highlight_winner")]
    highlight_winner: bool,
}

#[instrument]
fn default_log_filter() -> String {
    "warn,timeline_games=info".to_string()
}

#[instrument]
fn default_highlight_winner() -> bool {
    true
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            log_filter: default_log_filter(),
            empty_cell: EmptyCellStyle::default(),
            highlight_winner: default_highlight_winner(),
        }
    }
}

impl GameConfig {
    /// Loads configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config: Self = toml::from_str(&content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;

        info!(empty_cell = ?config.empty_cell, "Config loaded successfully");
        Ok(config)
    }

    /// Loads `path` if it exists, otherwise returns defaults.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn load_or_default(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        if path.as_ref().exists() {
            Self::from_file(path)
        } else {
            debug!("Config file not found, using defaults");
            Ok(Self::default())
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
