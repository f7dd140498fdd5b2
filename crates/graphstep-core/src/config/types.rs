//! Configuration type definitions

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Delay between playback steps in milliseconds
pub const DEFAULT_DELAY_MS: u64 = 700;

/// Start vertex used when neither the CLI nor the config names one
pub const DEFAULT_START: &str = "A";

/// Goal vertex used when neither the CLI nor the config names one
pub const DEFAULT_GOAL: &str = "F";

/// Top-level graphstep configuration (`config.toml`)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Playback pacing
    #[serde(default)]
    pub playback: PlaybackConfig,

    /// Defaults applied when a command omits an argument
    #[serde(default)]
    pub defaults: DefaultsConfig,
}

/// Configuration for consumer-side pacing
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlaybackConfig {
    /// Milliseconds to wait between successive events
    #[serde(default = "default_delay_ms")]
    pub delay_ms: u64,
}

impl Default for PlaybackConfig {
    fn default() -> Self {
        Self {
            delay_ms: default_delay_ms(),
        }
    }
}

/// Default start/goal vertices and graph source
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DefaultsConfig {
    #[serde(default = "default_start")]
    pub start: String,

    #[serde(default = "default_goal")]
    pub goal: String,

    /// Graph file read when no `--graph`/`--text` is given (optional)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub graph: Option<PathBuf>,
}

impl Default for DefaultsConfig {
    fn default() -> Self {
        Self {
            start: default_start(),
            goal: default_goal(),
            graph: None,
        }
    }
}

fn default_delay_ms() -> u64 {
    DEFAULT_DELAY_MS
}

fn default_start() -> String {
    DEFAULT_START.to_string()
}

fn default_goal() -> String {
    DEFAULT_GOAL.to_string()
}
