use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;

use crate::ui::deck::TransitionTiming;

/// Root configuration container.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub deck: DeckConfig,
    #[serde(default)]
    pub input: InputConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Transition and redraw timing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeckConfig {
    /// Delay before a transition commits, in milliseconds (default: 300).
    #[serde(default = "default_transition_ms")]
    pub transition_ms: u64,
    /// Length of the exit animation in milliseconds (default: 280).
    #[serde(default = "default_animation_ms")]
    pub animation_ms: u64,
    /// Redraw interval while a slide is animating (default: 33).
    #[serde(default = "default_frame_ms")]
    pub frame_ms: u64,
    /// Idle tick interval (default: 250).
    #[serde(default = "default_tick_ms")]
    pub tick_ms: u64,
}

/// Pointer and keyboard tuning.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InputConfig {
    /// Horizontal drag distance that counts as a swipe (default: 50).
    #[serde(default = "default_swipe_threshold_px")]
    pub swipe_threshold_px: f32,
    /// Pixels per terminal column when measuring drags (default: 8).
    #[serde(default = "default_cell_width_px")]
    pub cell_width_px: f32,
    /// Space advances to the next slide (default: true).
    #[serde(default = "default_true")]
    pub space_advances: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Filter used when `RUST_LOG` is unset (default: "info").
    #[serde(default = "default_log_level")]
    pub level: String,
    /// Log file. Defaults to `<cache dir>/clasy-deck/deck.log`.
    #[serde(default)]
    pub file: Option<PathBuf>,
}

fn default_transition_ms() -> u64 {
    300
}

fn default_animation_ms() -> u64 {
    280
}

fn default_frame_ms() -> u64 {
    33
}

fn default_tick_ms() -> u64 {
    250
}

fn default_swipe_threshold_px() -> f32 {
    50.0
}

fn default_cell_width_px() -> f32 {
    8.0
}

fn default_true() -> bool {
    true
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for DeckConfig {
    fn default() -> Self {
        Self {
            transition_ms: default_transition_ms(),
            animation_ms: default_animation_ms(),
            frame_ms: default_frame_ms(),
            tick_ms: default_tick_ms(),
        }
    }
}

impl Default for InputConfig {
    fn default() -> Self {
        Self {
            swipe_threshold_px: default_swipe_threshold_px(),
            cell_width_px: default_cell_width_px(),
            space_advances: default_true(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            file: None,
        }
    }
}

impl DeckConfig {
    pub fn timing(&self) -> TransitionTiming {
        TransitionTiming {
            commit_delay: Duration::from_millis(self.transition_ms),
            animation: Duration::from_millis(self.animation_ms),
        }
    }

    pub fn frame_interval(&self) -> Duration {
        Duration::from_millis(self.frame_ms)
    }

    pub fn tick_interval(&self) -> Duration {
        Duration::from_millis(self.tick_ms)
    }
}

impl LoggingConfig {
    /// Configured file, else `<cache dir>/clasy-deck/deck.log`, else the
    /// current directory.
    pub fn file_path(&self) -> PathBuf {
        if let Some(file) = &self.file {
            return file.clone();
        }
        let cache_dir = dirs::cache_dir().unwrap_or_else(|| PathBuf::from("."));
        cache_dir.join("clasy-deck").join("deck.log")
    }
}
