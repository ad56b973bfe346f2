// SPDX-License-Identifier: MPL-2.0
//! This module handles the toast configuration, including loading and saving
//! defaults to a `toasts.toml` file.
//!
//! # Examples
//!
//! ```no_run
//! use iced_toasts::config::{self, Config};
//! use iced_toasts::Position;
//!
//! // Load existing configuration
//! let mut config = config::load().unwrap_or_default();
//!
//! // Stack new toasts at the bottom by default
//! config.default_position = Some(Position::BottomRight);
//!
//! // Save the modified configuration
//! config::save(&config).expect("Failed to save config");
//! ```

mod defaults;

pub use defaults::*;

use crate::error::Result;
use crate::position::Position;
use crate::toast::ToastOptions;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

const CONFIG_FILE: &str = "toasts.toml";
const APP_NAME: &str = "IcedToasts";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub default_duration_ms: Option<u64>,
    #[serde(default)]
    pub default_position: Option<Position>,
    #[serde(default)]
    pub history_capacity: Option<usize>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            default_duration_ms: Some(DEFAULT_DURATION_MS),
            default_position: Some(Position::default()),
            history_capacity: Some(DEFAULT_HISTORY_CAPACITY),
        }
    }
}

impl Config {
    /// Options used to fill whatever a caller leaves unset.
    ///
    /// The kind is never defaulted here so the factory default stays in charge.
    #[must_use]
    pub fn toast_defaults(&self) -> ToastOptions {
        ToastOptions {
            kind: None,
            duration: self.default_duration_ms.map(Duration::from_millis),
            position: self.default_position,
        }
    }

    /// History capacity clamped to the supported range.
    #[must_use]
    pub fn history_capacity(&self) -> usize {
        self.history_capacity
            .unwrap_or(DEFAULT_HISTORY_CAPACITY)
            .clamp(MIN_HISTORY_CAPACITY, MAX_HISTORY_CAPACITY)
    }
}

fn get_default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|mut path| {
        path.push(APP_NAME);
        path.push(CONFIG_FILE);
        path
    })
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

/// Reads a config file. Unknown positions are rejected rather than coerced.
pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    Ok(toml::from_str(&content)?)
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
    use crate::error::Error;
    use tempfile::tempdir;

    #[test]
    fn save_and_load_round_trip_preserves_position() {
        let config = Config {
            default_duration_ms: Some(1500),
            default_position: Some(Position::BottomLeft),
            history_capacity: Some(8),
        };
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("nested").join("toasts.toml");

        save_to_path(&config, &config_path).expect("failed to save config");
        let loaded = load_from_path(&config_path).expect("failed to load config");

        assert_eq!(loaded, config);
    }

    #[test]
    fn load_from_path_rejects_unknown_position() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("toasts.toml");
        fs::write(&config_path, "default_position = \"middle\"\n")
            .expect("failed to write config");

        let err = load_from_path(&config_path).expect_err("unknown position must be rejected");
        assert!(matches!(err, Error::Config(_)));
    }

    #[test]
    fn load_from_path_accepts_partial_files() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("toasts.toml");
        fs::write(&config_path, "default_position = \"top-center\"\n")
            .expect("failed to write config");

        let loaded = load_from_path(&config_path).expect("partial config should load");
        assert_eq!(loaded.default_position, Some(Position::TopCenter));
        assert_eq!(loaded.default_duration_ms, None);
    }

    #[test]
    fn load_from_missing_path_is_an_io_error() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let err = load_from_path(&temp_dir.path().join("absent.toml"))
            .expect_err("missing file should fail");
        assert!(matches!(err, Error::Io(_)));
    }

    #[test]
    fn default_config_matches_factory_defaults() {
        let defaults = Config::default().toast_defaults();
        assert_eq!(defaults.kind, None);
        assert_eq!(
            defaults.duration,
            Some(Duration::from_millis(DEFAULT_DURATION_MS))
        );
        assert_eq!(defaults.position, Some(Position::TopRight));
    }

    #[test]
    fn history_capacity_is_clamped() {
        let mut config = Config {
            history_capacity: Some(0),
            ..Config::default()
        };
        assert_eq!(config.history_capacity(), MIN_HISTORY_CAPACITY);

        config.history_capacity = Some(1_000_000);
        assert_eq!(config.history_capacity(), MAX_HISTORY_CAPACITY);

        config.history_capacity = None;
        assert_eq!(config.history_capacity(), DEFAULT_HISTORY_CAPACITY);
    }
}
