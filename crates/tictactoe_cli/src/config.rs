//! Play configuration loaded from TOML.

use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

/// Settings for the command-line driver.
///
/// Every field has a default, so an empty file (or no file at all) is valid.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct PlayConfig {
    /// Pause before the engine answers, in milliseconds.
    #[serde(default = "default_thinking_delay_ms")]
    #[getter(skip)]
    thinking_delay_ms: u64,

    /// Tracing filter used when `RUST_LOG` is not set.
    #[serde(default = "default_log_filter")]
    log_filter: String,

    /// Name shown for the human side in the event log.
    #[serde(default = "default_player_name")]
    player_name: String,
}

fn default_thinking_delay_ms() -> u64 {
    500
}

fn default_log_filter() -> String {
    "info".to_string()
}

fn default_player_name() -> String {
    "Human".to_string()
}

impl Default for PlayConfig {
    fn default() -> Self {
        Self {
            thinking_delay_ms: default_thinking_delay_ms(),
            log_filter: default_log_filter(),
            player_name: default_player_name(),
        }
    }
}

impl PlayConfig {
    /// Loads configuration from TOML file.
    ///
    /// Runs before the subscriber is installed, so it does not log.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        toml::from_str(&content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))
    }

    /// Loads the file if it exists, otherwise returns the defaults.
    ///
    /// A file that exists but does not parse is still an error.
    pub fn load_or_default(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        if path.as_ref().exists() {
            Self::from_file(path)
        } else {
            Ok(Self::default())
        }
    }

    /// Overrides the thinking delay.
    pub fn with_thinking_delay_ms(mut self, delay_ms: u64) -> Self {
        self.thinking_delay_ms = delay_ms;
        self
    }

    /// Pause before the engine answers, in milliseconds.
    pub fn thinking_delay_ms(&self) -> u64 {
        self.thinking_delay_ms
    }

    /// Thinking delay as a [`Duration`].
    pub fn thinking_delay(&self) -> Duration {
        Duration::from_millis(self.thinking_delay_ms)
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
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}
