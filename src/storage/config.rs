//! Configuration handling for nodo
//!
//! Configuration is stored in `~/.config/nodo/config.toml` (or the
//! platform equivalent). Every field is optional.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to parse configuration: {0}")]
    Parse(String),

    #[error("Could not determine a data directory; pass --db or set NODO_DB")]
    NoDataDir,
}

/// User configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Config {
    /// Database file (defaults to `<data_dir>/nodo.db`)
    pub database: Option<PathBuf>,

    /// List used by `nodo add <task_name>`
    pub default_list: String,

    /// Emphasis styling when writing to a terminal
    pub color: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database: None,
            default_list: "todo".to_string(),
            color: true,
        }
    }
}

impl Config {
    /// Version string shown by `nodo version`
    pub const VERSION: &'static str = env!("CARGO_PKG_VERSION");

    fn project_dirs() -> Option<ProjectDirs> {
        ProjectDirs::from("", "", "nodo")
    }

    /// Returns the config file location
    pub fn config_path() -> Option<PathBuf> {
        Self::project_dirs().map(|dirs| dirs.config_dir().join("config.toml"))
    }

    /// Loads configuration from the default location
    pub fn load() -> Result<Self> {
        match Self::config_path() {
            Some(path) => Self::load_from(&path),
            None => Ok(Self::default()),
        }
    }

    /// Loads configuration from a specific file, falling back to defaults when absent
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config: {}", path.display()))?;

        toml::from_str(&content)
            .map_err(|e| ConfigError::Parse(e.to_string()))
            .with_context(|| format!("Failed to parse config: {}", path.display()))
    }

    /// Resolves the database path: explicit override, then config, then the data dir
    pub fn database_path(&self, override_path: Option<&Path>) -> Result<PathBuf> {
        if let Some(path) = override_path {
            return Ok(path.to_path_buf());
        }

        if let Some(path) = &self.database {
            return Ok(path.clone());
        }

        Self::project_dirs()
            .map(|dirs| dirs.data_dir().join("nodo.db"))
            .ok_or_else(|| ConfigError::NoDataDir.into())
    }
}
