//! Configuration handling for habit-cli
//!
//! Configuration is stored in `~/.config/habit-cli/config.toml` (or the
//! platform equivalent). Everything has a sensible default; the file is
//! optional.

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::domain::Weekday;

/// Environment variable overriding the data directory (handy for tests and
/// portable setups)
pub const DATA_DIR_ENV: &str = "HABIT_DATA_DIR";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Could not determine a home directory for this platform")]
    NoHomeDirectory,
}

/// Defaults applied when adding a reminder without explicit time/days
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ReminderDefaults {
    /// Wall-clock time in "HH:MM" form
    pub time: String,

    /// Weekdays the reminder fires on
    pub days: Vec<Weekday>,
}

impl Default for ReminderDefaults {
    fn default() -> Self {
        Self {
            time: "08:00".to_string(),
            days: vec![Weekday::Monday, Weekday::Wednesday, Weekday::Friday],
        }
    }
}

/// User configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    /// Overrides where `habits.json` lives (default: platform data dir)
    pub data_dir: Option<PathBuf>,

    /// Defaults for `habit reminder add`
    pub reminder: ReminderDefaults,
}

impl Config {
    /// Loads configuration from the default location; a missing file yields
    /// the defaults
    pub fn load() -> Result<Self> {
        let Some(path) = Self::config_path() else {
            return Ok(Self::default());
        };
        if !path.exists() {
            return Ok(Self::default());
        }

        let text = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read config: {}", path.display()))?;
        let config = toml::from_str(&text)
            .with_context(|| format!("Failed to parse config: {}", path.display()))?;

        Ok(config)
    }

    /// Returns the config file path, if the platform has a config directory
    pub fn config_path() -> Option<PathBuf> {
        project_dirs().map(|dirs| dirs.config_dir().join("config.toml"))
    }

    /// Resolves the data directory
    ///
    /// Precedence: `HABIT_DATA_DIR` environment variable, then the
    /// `data_dir` config key, then the platform data directory.
    pub fn data_dir(&self) -> Result<PathBuf> {
        if let Ok(dir) = std::env::var(DATA_DIR_ENV) {
            if !dir.is_empty() {
                return Ok(PathBuf::from(dir));
            }
        }

        if let Some(dir) = &self.data_dir {
            return Ok(dir.clone());
        }

        let dirs = project_dirs().ok_or(ConfigError::NoHomeDirectory)?;
        Ok(dirs.data_dir().to_path_buf())
    }
}

fn project_dirs() -> Option<ProjectDirs> {
    ProjectDirs::from("dev", "habit", "habit-cli")
}
