//! Configuration for graphstep
//!
//! Looked up in `$GRAPHSTEP_CONFIG_DIR/config.toml`, falling back to
//! `~/.config/graphstep/config.toml`. A missing file yields defaults.

pub mod types;

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::error::{GraphstepError, Result};

pub use types::{
    Config, DefaultsConfig, PlaybackConfig, DEFAULT_DELAY_MS, DEFAULT_GOAL, DEFAULT_START,
};

const CONFIG_DIR: &str = "graphstep";
const CONFIG_FILE: &str = "config.toml";
const CONFIG_DIR_ENV_VAR: &str = "GRAPHSTEP_CONFIG_DIR";

impl Config {
    /// Path of the discovered configuration file
    pub fn config_path() -> Result<PathBuf> {
        // Allow environment variable override for testing
        let config_dir = if let Ok(env_dir) = std::env::var(CONFIG_DIR_ENV_VAR) {
            PathBuf::from(env_dir)
        } else {
            dirs::config_dir()
                .ok_or_else(|| {
                    GraphstepError::Other("unable to determine config directory".to_string())
                })?
                .join(CONFIG_DIR)
        };

        Ok(config_dir.join(CONFIG_FILE))
    }

    /// Load the discovered configuration, or defaults if none exists
    pub fn load() -> Result<Self> {
        let path = Self::config_path()?;

        if !path.exists() {
            tracing::debug!(path = %path.display(), "no config file, using defaults");
            return Ok(Self::default());
        }

        Self::load_from(&path)
    }

    /// Load configuration from an explicit file, which must exist
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| GraphstepError::InvalidConfig {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;

        let config: Config = toml::from_str(&content).map_err(|e| GraphstepError::InvalidConfig {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;

        tracing::debug!(path = %path.display(), "loaded config");
        Ok(config)
    }

    /// Delay between playback steps
    pub fn step_delay(&self) -> Duration {
        Duration::from_millis(self.playback.delay_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.playback.delay_ms, 700);
        assert_eq!(config.defaults.start, "A");
        assert_eq!(config.defaults.goal, "F");
        assert!(config.defaults.graph.is_none());
        assert_eq!(config.step_delay(), Duration::from_millis(700));
    }

    #[test]
    fn test_partial_config_fills_defaults() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "[playback]\ndelay_ms = 0\n").unwrap();

        let config = Config::load_from(&path).unwrap();
        assert_eq!(config.playback.delay_ms, 0);
        assert_eq!(config.defaults.start, "A");
    }

    #[test]
    fn test_load_full_config() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(
            &path,
            "[playback]\ndelay_ms = 250\n\n[defaults]\nstart = \"S\"\ngoal = \"T\"\ngraph = \"graph.txt\"\n",
        )
        .unwrap();

        let config = Config::load_from(&path).unwrap();
        assert_eq!(config.step_delay(), Duration::from_millis(250));
        assert_eq!(config.defaults.start, "S");
        assert_eq!(config.defaults.goal, "T");
        assert_eq!(config.defaults.graph, Some(PathBuf::from("graph.txt")));
    }

    #[test]
    fn test_load_from_missing_file_is_data_error() {
        let dir = tempdir().unwrap();
        let err = Config::load_from(&dir.path().join("absent.toml")).unwrap_err();
        assert!(matches!(err, GraphstepError::InvalidConfig { .. }));
    }

    #[test]
    fn test_load_from_malformed_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "[playback]\ndelay_ms = \"slow\"\n").unwrap();

        let err = Config::load_from(&path).unwrap_err();
        assert!(matches!(err, GraphstepError::InvalidConfig { .. }));
    }
}
