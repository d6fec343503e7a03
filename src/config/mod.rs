// SPDX-License-Identifier: MPL-2.0
//! This module handles the persisted undo bar preferences, loading and saving
//! them to a `settings.toml` file. The values seed a
//! [`Builder`](crate::ui::undo_bar::Builder) via
//! [`Builder::from_config`](crate::ui::undo_bar::Builder::from_config).
//!
//! # Examples
//!
//! ```no_run
//! use undo_bar::config::{self, Config};
//! use undo_bar::ui::undo_bar::Style;
//! use std::path::PathBuf;
//!
//! // Load existing configuration
//! let mut config = config::load().unwrap_or_default();
//!
//! // Modify a setting
//! config.style = Some(Style::Lollipop);
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
//! assert_eq!(loaded_config.style, Some(Style::Lollipop));
//! std::fs::remove_dir_all(&temp_dir).unwrap();
//! ```

pub mod defaults;

use crate::domain::ui::{AnimationDuration, DisplayDuration};
use crate::error::Result;
use crate::ui::undo_bar::Style;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

pub use defaults::{DEFAULT_ANIMATION_DURATION_MS, DEFAULT_DURATION_MS};

const CONFIG_FILE: &str = "settings.toml";
const APP_NAME: &str = "UndoBar";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Preferred locale for the localized button label.
    pub language: Option<String>,
    #[serde(default)]
    pub style: Option<Style>,
    #[serde(default)]
    pub duration_ms: Option<u32>,
    #[serde(default)]
    pub animation_duration_ms: Option<u32>,
    #[serde(default)]
    pub use_english_locale: Option<bool>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            language: None,
            style: Some(Style::Default),
            duration_ms: Some(DEFAULT_DURATION_MS),
            animation_duration_ms: Some(DEFAULT_ANIMATION_DURATION_MS),
            use_english_locale: Some(false),
        }
    }
}

impl Config {
    /// Display duration, falling back to the default when unset.
    #[must_use]
    pub fn duration(&self) -> DisplayDuration {
        self.duration_ms
            .map(DisplayDuration::from_millis)
            .unwrap_or_default()
    }

    /// Animation duration, falling back to the default when unset.
    #[must_use]
    pub fn animation_duration(&self) -> AnimationDuration {
        self.animation_duration_ms
            .map(AnimationDuration::from_millis)
            .unwrap_or_default()
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

pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    match toml::from_str(&content) {
        Ok(config) => Ok(config),
        Err(err) => {
            tracing::warn!(path = %path.display(), error = %err, "invalid settings, using defaults");
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
    fn save_and_load_round_trip_preserves_style() {
        let config = Config {
            language: Some("fr".to_string()),
            style: Some(Style::Holo),
            duration_ms: Some(3000),
            animation_duration_ms: Some(150),
            use_english_locale: Some(true),
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
    fn load_from_missing_path_is_io_error() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let result = load_from_path(&temp_dir.path().join("absent.toml"));
        assert!(matches!(result, Err(crate::error::Error::Io(_))));
    }

    #[test]
    fn partial_file_leaves_missing_fields_unset() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("settings.toml");
        fs::write(&config_path, "duration_ms = 8000\n").expect("failed to write toml");

        let loaded = load_from_path(&config_path).expect("load should not error");
        assert_eq!(loaded.duration_ms, Some(8000));
        assert_eq!(loaded.style, None);
        assert_eq!(loaded.animation_duration(), AnimationDuration::default());
    }

    #[test]
    fn default_config_uses_default_timings() {
        let config = Config::default();
        assert_eq!(config.duration().millis(), DEFAULT_DURATION_MS);
        assert_eq!(
            config.animation_duration().millis(),
            DEFAULT_ANIMATION_DURATION_MS
        );
        assert_eq!(config.style, Some(Style::Default));
    }
}
