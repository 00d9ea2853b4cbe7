use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::config::types::Config;

/// Upper bound for the commit delay. Anything slower reads as a hang.
pub const MAX_TRANSITION_MS: u64 = 5_000;

/// Errors that can occur when loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file '{path}': {source}")]
    ReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config file '{path}': {source}")]
    ParseError {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Config validation failed: {message}")]
    ValidationError { message: String },
}

impl Config {
    /// Returns the path to the configuration file.
    ///
    /// Uses `<config dir>/clasy-deck/config.toml` via `dirs::config_dir()`,
    /// falling back to the current directory.
    pub fn config_path() -> PathBuf {
        let config_dir = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
        config_dir.join("clasy-deck").join("config.toml")
    }

    /// Loads and validates configuration from the default config file.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(&Self::config_path())
    }

    /// Loads configuration from `path` and validates it.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let config = Self::read_from(path)?;
        config.validate()?;
        Ok(config)
    }

    /// Reads the default config file without validating it.
    pub fn read() -> Result<Self, ConfigError> {
        Self::read_from(&Self::config_path())
    }

    /// Reads `path` without validating, so overrides can be applied first.
    ///
    /// A missing file yields `Config::default()`.
    pub fn read_from(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            tracing::debug!(path = %path.display(), "no config file, using defaults");
            return Ok(Config::default());
        }

        let content = fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
            path: path.to_path_buf(),
            source: e,
        })?;

        toml::from_str(&content).map_err(|e| ConfigError::ParseError {
            path: path.to_path_buf(),
            source: e,
        })
    }

    /// Validates the configuration.
    ///
    /// Checks:
    /// - The commit delay is between 1 ms and [`MAX_TRANSITION_MS`]
    /// - The exit animation fits inside the commit delay
    /// - Frame and tick intervals are non-zero
    /// - Swipe threshold and cell width are positive numbers
    pub fn validate(&self) -> Result<(), ConfigError> {
        let deck = &self.deck;
        if deck.transition_ms == 0 || deck.transition_ms > MAX_TRANSITION_MS {
            return Err(invalid(format!(
                "deck.transition_ms must be between 1 and {MAX_TRANSITION_MS}, got {}",
                deck.transition_ms
            )));
        }
        if deck.animation_ms > deck.transition_ms {
            return Err(invalid(format!(
                "deck.animation_ms ({}) must not exceed deck.transition_ms ({})",
                deck.animation_ms, deck.transition_ms
            )));
        }
        if deck.frame_ms == 0 {
            return Err(invalid("deck.frame_ms must be at least 1".to_string()));
        }
        if deck.tick_ms == 0 {
            return Err(invalid("deck.tick_ms must be at least 1".to_string()));
        }

        let input = &self.input;
        if !is_positive(input.swipe_threshold_px) {
            return Err(invalid(format!(
                "input.swipe_threshold_px must be a positive number, got {}",
                input.swipe_threshold_px
            )));
        }
        if !is_positive(input.cell_width_px) {
            return Err(invalid(format!(
                "input.cell_width_px must be a positive number, got {}",
                input.cell_width_px
            )));
        }

        Ok(())
    }
}

fn invalid(message: String) -> ConfigError {
    ConfigError::ValidationError { message }
}

fn is_positive(value: f32) -> bool {
    value.is_finite() && value > 0.0
}
