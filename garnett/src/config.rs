//! Configuration module for the garnett CLI.
//!
//! This module handles loading, saving, and managing configuration
//! settings for the garnett application.

use dirs::{config_dir, home_dir};
use num_cpus::get as get_num_cpus;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::{GarnettError, Result};

/// Default configuration file name.
pub const CONFIG_FILE_NAME: &str = "garnett.toml";

/// Fallback job count if the CPU count does not fit.
const DEFAULT_JOB_COUNT: usize = 4;

/// Application configuration structure.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Config {
    /// Global verbose setting.
    #[serde(default)]
    pub verbose: bool,

    /// Tokenize-specific configuration.
    #[serde(default)]
    pub tokenize: TokenizeConfig,
}

/// Tokenize-specific configuration options.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TokenizeConfig {
    /// Default output format (`pretty`, `json` or `plain`).
    #[serde(default = "default_format")]
    pub format: String,

    /// Number of files tokenized in parallel.
    #[serde(default = "default_jobs")]
    pub jobs: usize,
}

fn default_format() -> String {
    "pretty".to_string()
}

/// Get the default number of parallel jobs based on CPU count.
fn default_jobs() -> usize {
    match get_num_cpus() {
        0 => DEFAULT_JOB_COUNT,
        n => n,
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            verbose: false,
            tokenize: TokenizeConfig::default(),
        }
    }
}

impl Default for TokenizeConfig {
    fn default() -> Self {
        Self {
            format: default_format(),
            jobs: default_jobs(),
        }
    }
}

impl Config {
    /// Load configuration from the default location.
    ///
    /// Searches for configuration in the following order:
    /// 1. Current directory
    /// 2. User's home directory
    /// 3. System configuration directory
    ///
    /// Returns the default configuration if no config file is found.
    pub fn load() -> Result<Self> {
        match Self::find_config_file() {
            Some(path) => Self::load_from_path(&path),
            None => Ok(Self::default()),
        }
    }

    /// Load configuration from a specific path.
    pub fn load_from_path(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(GarnettError::Config(format!(
                "Configuration file not found: {}",
                path.display()
            )));
        }

        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content).map_err(|e| {
            GarnettError::Config(format!("Failed to parse configuration: {}", e))
        })?;

        tracing::debug!(path = %path.display(), "loaded configuration");
        Ok(config)
    }

    /// Save configuration to a specific path.
    pub fn save_to_path(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self).map_err(|e| {
            GarnettError::Config(format!("Failed to serialize configuration: {}", e))
        })?;

        std::fs::write(path, content)?;
        Ok(())
    }

    /// Check for config in current directory.
    fn check_current_dir_config() -> Option<PathBuf> {
        let path = PathBuf::from(CONFIG_FILE_NAME);
        path.exists().then_some(path)
    }

    /// Check for config in home directory.
    fn check_home_config() -> Option<PathBuf> {
        home_dir()
            .map(|dir| dir.join(".config").join("garnett").join(CONFIG_FILE_NAME))
            .filter(|path| path.exists())
    }

    /// Check for config in system config directory.
    fn check_system_config() -> Option<PathBuf> {
        config_dir()
            .map(|dir| dir.join("garnett").join(CONFIG_FILE_NAME))
            .filter(|path| path.exists())
    }

    /// Find the configuration file in standard locations.
    fn find_config_file() -> Option<PathBuf> {
        Self::check_current_dir_config()
            .or_else(Self::check_home_config)
            .or_else(Self::check_system_config)
    }
}
