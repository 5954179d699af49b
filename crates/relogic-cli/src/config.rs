//! Configuration file support for the relogic CLI
//!
//! Supports loading configuration from .relogicrc files in:
//! - Custom path via environment variable
//! - Current directory
//! - User home directory

use anyhow::{Context, Result};
use relogic_engine::EngineConfig;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::cli::OutputFormat;

pub const CONFIG_FILE_NAME: &str = ".relogicrc";
pub const CONFIG_ENV_VAR: &str = "RELOGIC_CONFIG";

/// Configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Reasoning engine settings
    pub engine: EngineConfig,

    /// Output settings
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Default output format
    pub format: OutputFormat,

    /// Enable colored output
    pub colored: bool,

    /// Print the proof steps of valid arguments
    pub show_proofs: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: OutputFormat::Text,
            colored: true,
            show_proofs: true,
        }
    }
}

impl Config {
    /// Load configuration from file
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let config: Config = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;
        config
            .engine
            .validate()
            .with_context(|| format!("Invalid engine settings in {}", path.display()))?;
        Ok(config)
    }

    /// Save configuration to file
    pub fn save(&self, path: &Path) -> Result<()> {
        let content = toml::to_string_pretty(self).context("Failed to serialize configuration")?;

        fs::write(path, content)
            .with_context(|| format!("Failed to write config file: {}", path.display()))
    }

    /// Find and load configuration file
    ///
    /// Search order:
    /// 1. RELOGIC_CONFIG environment variable
    /// 2. .relogicrc in current directory
    /// 3. .relogicrc in user home directory
    ///
    /// A file that exists but cannot be parsed is an error rather than being skipped.
    pub fn load_default() -> Result<Self> {
        if let Ok(path) = std::env::var(CONFIG_ENV_VAR) {
            return Self::load(Path::new(&path));
        }

        let current_config = PathBuf::from(CONFIG_FILE_NAME);
        if current_config.exists() {
            return Self::load(&current_config);
        }

        if let Some(home) = dirs::home_dir() {
            let home_config = home.join(CONFIG_FILE_NAME);
            if home_config.exists() {
                return Self::load(&home_config);
            }
        }

        Ok(Self::default())
    }

    /// Get configuration file path (current or home)
    pub fn config_path() -> PathBuf {
        if let Ok(path) = std::env::var(CONFIG_ENV_VAR) {
            return PathBuf::from(path);
        }

        let current = PathBuf::from(CONFIG_FILE_NAME);
        if current.exists() {
            return current;
        }

        match dirs::home_dir() {
            Some(home) => home.join(CONFIG_FILE_NAME),
            None => current,
        }
    }

    /// Create a default configuration file, refusing to overwrite an existing one
    pub fn create_default() -> Result<PathBuf> {
        let path = Self::config_path();
        if path.exists() {
            anyhow::bail!("Config file already exists: {}", path.display());
        }
        Self::default().save(&path)?;
        Ok(path)
    }
}
