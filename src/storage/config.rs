//! Configuration handling for the contact book
//!
//! Configuration is read from an explicit `--config` file, or from
//! `~/.config/contact-book/config.toml` (platform equivalent) when present.
//! Every key is optional.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::domain::DEFAULT_BIRTHDAY_WINDOW_DAYS;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration file not found: {0}")]
    NotFound(PathBuf),

    #[error("Failed to parse configuration: {0}")]
    Parse(String),
}

/// Where the address book snapshot lives
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StorageConfig {
    /// Snapshot file, relative paths resolve against the working directory
    pub file: PathBuf,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            file: PathBuf::from("addressbook.json"),
        }
    }
}

/// Settings for the `birthdays` command
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BirthdayConfig {
    /// Days ahead (inclusive) to look for upcoming birthdays
    pub window_days: u32,
}

impl Default for BirthdayConfig {
    fn default() -> Self {
        Self {
            window_days: DEFAULT_BIRTHDAY_WINDOW_DAYS,
        }
    }
}

/// Application configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Prompt shown before each command
    pub prompt: String,

    pub storage: StorageConfig,

    pub birthdays: BirthdayConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            prompt: "Enter a command: ".to_string(),
            storage: StorageConfig::default(),
            birthdays: BirthdayConfig::default(),
        }
    }
}

impl Config {
    /// Loads configuration from `explicit` if given, else the global location
    ///
    /// An explicit path must exist. A missing global file yields defaults.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        match explicit {
            Some(path) => {
                if !path.is_file() {
                    return Err(ConfigError::NotFound(path.to_path_buf()).into());
                }
                Self::load_from(path)
            }
            None => match Self::global_config_path() {
                Some(path) if path.is_file() => Self::load_from(&path),
                _ => Ok(Self::default()),
            },
        }
    }

    /// Returns the global config directory
    pub fn global_config_dir() -> Option<PathBuf> {
        ProjectDirs::from("dev", "contact-book", "contact-book")
            .map(|dirs| dirs.config_dir().to_path_buf())
    }

    /// Returns the global config file path
    pub fn global_config_path() -> Option<PathBuf> {
        Self::global_config_dir().map(|dir| dir.join("config.toml"))
    }

    /// Loads configuration from a specific file
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config: {}", path.display()))?;

        Self::parse(&content)
            .with_context(|| format!("Failed to parse config: {}", path.display()))
    }

    /// Parses configuration from TOML text
    pub fn parse(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(|e| ConfigError::Parse(e.to_string()))
    }
}
