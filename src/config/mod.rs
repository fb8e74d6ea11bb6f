// SPDX-License-Identifier: MPL-2.0
//! This module handles the picker configuration, including loading and saving
//! user preferences to a `settings.toml` file.
//!
//! # Path Resolution
//!
//! The config file location can be customized for testing or portable deployments:
//! 1. Use `load_from_path()`/`save_to_path()` with explicit path
//! 2. Pass `--config-dir` on the command line (see [`set_config_dir_override`])
//! 3. Set `ICED_SNAP_CONFIG_DIR` environment variable
//! 4. Falls back to platform-specific config directory
//!
//! # Examples
//!
//! ```no_run
//! use iced_snap::config::{self, Config};
//! use std::path::PathBuf;
//!
//! // Load existing configuration
//! let mut config = config::load().unwrap_or_default();
//!
//! // Show four pages at once
//! config.visible_count = Some(4);
//!
//! // Save the modified configuration
//! config::save(&config).expect("Failed to save config");
//!
//! // To load/save from a specific path (e.g., for testing)
//! let temp_dir = PathBuf::from("./temp_config_dir");
//! std::fs::create_dir_all(&temp_dir).unwrap();
//! let temp_file = temp_dir.join("test_settings.toml");
//! config::save_to_path(&config, &temp_file).expect("Failed to save to path");
//! let loaded_config = config::load_from_path(&temp_file).expect("Failed to load from path");
//! assert_eq!(loaded_config.visible_count, Some(4));
//! std::fs::remove_dir_all(&temp_dir).unwrap();
//! ```

mod defaults;

pub use defaults::*;

use crate::domain::ui::{SnapDuration, TouchSlop, VisibleCount};
use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::OnceLock;

const CONFIG_FILE: &str = "settings.toml";
const APP_NAME: &str = "IcedSnap";

/// Environment variable to override the config directory.
pub const ENV_CONFIG_DIR: &str = "ICED_SNAP_CONFIG_DIR";

/// Global CLI override for the config directory (set once at startup).
static CLI_CONFIG_DIR: OnceLock<PathBuf> = OnceLock::new();

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Pages sharing the viewport height.
    #[serde(default)]
    pub visible_count: Option<u32>,
    /// Drag distance in logical pixels before the picker claims a gesture.
    #[serde(default)]
    pub touch_slop: Option<f32>,
    /// Settle animation time budget in milliseconds.
    #[serde(default)]
    pub snap_duration_ms: Option<u64>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            visible_count: Some(DEFAULT_VISIBLE_COUNT),
            touch_slop: Some(DEFAULT_TOUCH_SLOP),
            snap_duration_ms: Some(DEFAULT_SNAP_DURATION_MS),
        }
    }
}

impl Config {
    /// Returns the validated visible page count.
    #[must_use]
    pub fn visible_count(&self) -> VisibleCount {
        self.visible_count
            .map(VisibleCount::new)
            .unwrap_or_default()
    }

    /// Returns the validated touch slop.
    #[must_use]
    pub fn touch_slop(&self) -> TouchSlop {
        self.touch_slop.map(TouchSlop::new).unwrap_or_default()
    }

    /// Returns the validated settle duration.
    #[must_use]
    pub fn snap_duration(&self) -> SnapDuration {
        self.snap_duration_ms
            .map(SnapDuration::from_millis)
            .unwrap_or_default()
    }
}

/// Sets the config directory passed on the command line.
///
/// Only the first call has an effect; later calls are ignored with a warning.
pub fn set_config_dir_override(dir: PathBuf) {
    if CLI_CONFIG_DIR.set(dir).is_err() {
        log::warn!("config directory override already set, ignoring");
    }
}

fn config_dir() -> Option<PathBuf> {
    if let Some(dir) = CLI_CONFIG_DIR.get() {
        return Some(dir.clone());
    }
    if let Some(dir) = std::env::var_os(ENV_CONFIG_DIR) {
        return Some(PathBuf::from(dir));
    }
    dirs::config_dir().map(|mut path| {
        path.push(APP_NAME);
        path
    })
}

fn get_default_config_path() -> Option<PathBuf> {
    config_dir().map(|dir| dir.join(CONFIG_FILE))
}

pub fn load() -> Result<Config> {
    if let Some(path) = get_default_config_path() {
        if path.exists() {
            return load_from_path(&path);
        }
    }
    Ok(Config::default())
}

pub fn save(config: &Config) -> Result<()> {
    if let Some(path) = get_default_config_path() {
        return save_to_path(config, &path);
    }
    Ok(())
}

pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    match toml::from_str(&content) {
        Ok(config) => Ok(config),
        Err(err) => {
            log::warn!(
                "ignoring invalid config at {}: {}; using defaults",
                path.display(),
                err
            );
            Ok(Config::default())
        }
    }
}

pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config)?;
    fs::write(path, content)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn save_and_load_round_trip_preserves_values() {
        let config = Config {
            visible_count: Some(5),
            touch_slop: Some(8.0),
            snap_duration_ms: Some(400),
        };
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("nested").join("settings.toml");

        save_to_path(&config, &config_path).expect("failed to save config");
        let loaded = load_from_path(&config_path).expect("failed to load config");

        assert_eq!(loaded, config);
    }

    #[test]
    fn load_from_path_returns_default_on_invalid_toml() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("settings.toml");
        fs::write(&config_path, "not = valid = toml").expect("failed to write invalid toml");

        let loaded = load_from_path(&config_path).expect("load should not error");
        assert_eq!(loaded, Config::default());
    }

    #[test]
    fn load_from_path_errors_on_missing_file() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let missing = temp_dir.path().join("absent.toml");

        assert!(load_from_path(&missing).is_err());
    }

    #[test]
    fn missing_fields_deserialize_as_none() {
        let config: Config = toml::from_str("visible_count = 2").expect("valid toml");

        assert_eq!(config.visible_count, Some(2));
        assert!(config.touch_slop.is_none());
        assert_eq!(config.touch_slop(), TouchSlop::default());
        assert_eq!(config.snap_duration(), SnapDuration::default());
    }

    #[test]
    fn accessors_clamp_out_of_range_values() {
        let config = Config {
            visible_count: Some(0),
            touch_slop: Some(-4.0),
            snap_duration_ms: Some(60_000),
        };

        assert_eq!(config.visible_count().value(), MIN_VISIBLE_COUNT);
        assert_eq!(config.touch_slop().value(), MIN_TOUCH_SLOP);
        assert_eq!(
            config.snap_duration().as_duration().as_millis(),
            u128::from(MAX_SNAP_DURATION_MS)
        );
    }

    #[test]
    fn default_config_uses_defaults() {
        let config = Config::default();
        assert_eq!(config.visible_count, Some(DEFAULT_VISIBLE_COUNT));
        assert_eq!(config.touch_slop, Some(DEFAULT_TOUCH_SLOP));
        assert_eq!(config.snap_duration_ms, Some(DEFAULT_SNAP_DURATION_MS));
    }
}
