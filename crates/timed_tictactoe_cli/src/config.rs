//! Driver configuration.

use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;
use timed_tictactoe::BoardSize;
use tracing::{debug, info, instrument};

/// Configuration for the terminal driver.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct AppConfig {
    /// Milliseconds between timer ticks. One tick counts one second of
    /// the turn countdown.
    #[serde(default = "default_tick_millis")]
    tick_millis: u64,

    /// Board size to start with instead of asking.
    #[serde(default)]
    board_size: Option<BoardSize>,

    /// Tracing filter used when `RUST_LOG` is not set.
    #[serde(default = "default_log_filter")]
    log_filter: String,
}

#[instrument]
fn default_tick_millis() -> u64 {
    1000
}

#[instrument]
fn default_log_filter() -> String {
    "warn,timed_tictactoe=info".to_string()
}

impl AppConfig {
    /// Loads configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config: Self = toml::from_str(&content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;
        config.validate()?;

        info!(tick_millis = config.tick_millis, "Config loaded successfully");
        Ok(config)
    }

    /// Loads the file if it exists, otherwise returns defaults.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn load_or_default(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        if path.as_ref().exists() {
            Self::from_file(path)
        } else {
            debug!("Config file not found, using defaults");
            Ok(Self::default())
        }
    }

    /// Overrides the tick period.
    ///
    /// # Errors
    ///
    /// Rejects a zero period.
    #[instrument(skip(self))]
    pub fn with_tick_millis(mut self, tick_millis: u64) -> Result<Self, ConfigError> {
        self.tick_millis = tick_millis;
        self.validate()?;
        Ok(self)
    }

    /// Overrides the starting board size.
    #[instrument(skip(self))]
    pub fn with_board_size(mut self, board_size: BoardSize) -> Self {
        self.board_size = Some(board_size);
        self
    }

    /// Tick period as a duration.
    pub fn tick_period(&self) -> Duration {
        Duration::from_millis(self.tick_millis)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.tick_millis == 0 {
            return Err(ConfigError::new("tick_millis must be positive".to_string()));
        }
        Ok(())
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            tick_millis: default_tick_millis(),
            board_size: None,
            log_filter: default_log_filter(),
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
