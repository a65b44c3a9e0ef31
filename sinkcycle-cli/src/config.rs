//! Configuration management

use std::path::PathBuf;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// Tool configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Path to configuration file
    #[serde(skip)]
    pub config_path: PathBuf,

    /// Directory receiving the per-process diagnostic logs
    pub log_dir: PathBuf,

    /// Binary used to reach the audio server (e.g. a pactl wrapper)
    pub pactl_bin: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            config_path: Self::default_config_path(),
            log_dir: std::env::temp_dir(),
            pactl_bin: sinkcycle_pactl::DEFAULT_PACTL_BIN.to_string(),
        }
    }
}

impl Config {
    /// Load configuration from file, or create default
    pub fn load() -> Result<Self> {
        let config_path = Self::default_config_path();

        if config_path.exists() {
            let contents = std::fs::read_to_string(&config_path)
                .context("Failed to read config file")?;

            let mut config: Config = toml::from_str(&contents)
                .context("Failed to parse config file")?;

            config.config_path = config_path;
            Ok(config)
        } else {
            let config = Self::default();
            config.save().context("Failed to save default config")?;
            Ok(config)
        }
    }

    /// Save configuration to file
    pub fn save(&self) -> Result<()> {
        if let Some(parent) = self.config_path.parent() {
            std::fs::create_dir_all(parent)
                .context("Failed to create config directory")?;
        }

        let contents = toml::to_string_pretty(self)
            .context("Failed to serialize config")?;

        std::fs::write(&self.config_path, contents)
            .context("Failed to write config file")?;

        Ok(())
    }

    fn default_config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("sinkcycle")
            .join("config.toml")
    }
}
