//! CLI configuration

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// Data directory used when nothing else is configured
pub const DEFAULT_DATA_DIR: &str = "large";

/// Environment variable overriding the config file location
pub const CONFIG_ENV: &str = "COSTAR_CONFIG";

/// Get the config file path
pub fn config_file_path() -> PathBuf {
    if let Some(path) = std::env::var_os(CONFIG_ENV) {
        return PathBuf::from(path);
    }
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("costar")
        .join("config.toml")
}

/// Configuration for the CLI
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub data_dir: PathBuf,
    pub format: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from(DEFAULT_DATA_DIR),
            format: "table".to_string(),
        }
    }
}

impl Config {
    /// Load from the default location
    pub fn load() -> Self {
        Self::load_from(&config_file_path())
    }

    /// Load from `path`; missing or broken files give the defaults
    pub fn load_from(path: &Path) -> Self {
        let content = match fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                tracing::debug!("No config file at {:?}", path);
                return Self::default();
            }
            Err(e) => {
                tracing::warn!("Cannot read config file {:?}: {}", path, e);
                return Self::default();
            }
        };

        match toml::from_str(&content) {
            Ok(config) => config,
            Err(e) => {
                tracing::warn!("Ignoring malformed config file {:?}: {}", path, e);
                Self::default()
            }
        }
    }
}
