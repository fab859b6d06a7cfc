//! Configuration management for spec-maker.
//!
//! Supports layered configuration: defaults → user → env

use crate::error::ConfigError;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;

/// Main configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub ui: UiConfig,
    #[serde(default)]
    pub export: ExportConfig,
}

impl AppConfig {
    /// Load configuration with hierarchy: defaults → user → env
    pub fn load() -> Result<Self, ConfigError> {
        use config::{Config, Environment, File};

        let mut builder = Config::builder();

        // 1. Start with defaults
        builder = builder.add_source(
            config::File::from_str(
                include_str!("../default_config.toml"),
                config::FileFormat::Toml,
            )
            .required(false),
        );

        // 2. User config (~/.config/spec-maker/config.toml)
        if let Some(config_dir) = directories::ProjectDirs::from("com", "spec-maker", "spec-maker")
        {
            let user_config = config_dir.config_dir().join("config.toml");
            if user_config.exists() {
                builder = builder.add_source(File::from(user_config).required(false));
            }
        }

        // 3. Environment variables (SPEC_MAKER__*)
        builder = builder.add_source(
            Environment::with_prefix("SPEC_MAKER")
                .separator("__")
                .try_parsing(true),
        );

        let config = builder
            .build()
            .map_err(|e| ConfigError::Parse(e.to_string()))?;

        config
            .try_deserialize()
            .map_err(|e| ConfigError::Parse(e.to_string()))
    }
}

/// UI configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiConfig {
    /// UI refresh rate in milliseconds
    #[serde(default = "default_tick_rate_ms")]
    pub tick_rate_ms: u64,
    /// Enable vim-style navigation (j/k)
    #[serde(default = "default_vim_navigation")]
    pub vim_navigation: bool,
    /// Celebration overlay duration in seconds
    #[serde(default = "default_celebration_seconds")]
    pub celebration_seconds: u64,
}

impl UiConfig {
    /// Celebration duration as a `Duration`
    pub fn celebration_duration(&self) -> Duration {
        Duration::from_secs(self.celebration_seconds)
    }
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            tick_rate_ms: default_tick_rate_ms(),
            vim_navigation: default_vim_navigation(),
            celebration_seconds: default_celebration_seconds(),
        }
    }
}

fn default_tick_rate_ms() -> u64 {
    100
}

fn default_vim_navigation() -> bool {
    true
}

fn default_celebration_seconds() -> u64 {
    5
}

/// Export configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExportConfig {
    /// Directory where generated artifacts are written
    #[serde(default = "default_export_directory")]
    pub directory: PathBuf,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            directory: default_export_directory(),
        }
    }
}

fn default_export_directory() -> PathBuf {
    PathBuf::from(".")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();
        assert_eq!(config.ui.tick_rate_ms, 100);
        assert!(config.ui.vim_navigation);
        assert_eq!(config.ui.celebration_seconds, 5);
        assert_eq!(config.export.directory, PathBuf::from("."));
    }

    #[test]
    fn test_celebration_duration() {
        let config = UiConfig::default();
        assert_eq!(config.celebration_duration(), Duration::from_secs(5));
    }
}
