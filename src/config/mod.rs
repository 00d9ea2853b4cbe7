//! TOML configuration.

mod loader;
mod types;

pub use loader::{ConfigError, MAX_TRANSITION_MS};
pub use types::{Config, DeckConfig, InputConfig, LoggingConfig};
