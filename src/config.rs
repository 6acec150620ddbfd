//! User configuration.
//!
//! Optional TOML file at `~/.config/adp/config.toml` providing defaults
//! for the theme, the script file, and the log file. Command-line flags
//! always win over the config file.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// Configuration file contents. Every field is optional; a missing file is
/// the default configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Theme name (terminal, classic, ocean)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub theme: Option<String>,
    /// Script file played when none is given on the command line
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub script: Option<PathBuf>,
    /// File tracing output is appended to
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub log_file: Option<PathBuf>,
}

impl Config {
    /// Path of the config file inside the user config directory.
    pub fn config_path() -> Result<PathBuf> {
        let base = dirs::config_dir().context("could not determine the user config directory")?;
        Ok(base.join("adp").join("config.toml"))
    }

    /// Load the user config file, or defaults when it does not exist.
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path()?)
    }

    /// Load a config file from an explicit path.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?;
        toml::from_str(&content).with_context(|| format!("invalid config file {}", path.display()))
    }
}
