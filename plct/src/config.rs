//! Configuration module for the plct CLI.
//!
//! This module handles loading, saving, and managing configuration
//! settings for the plct application.

use dirs::{config_dir, home_dir};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::commands::common::OutputFormat;
use crate::error::{PlctError, Result};

/// Default configuration file name.
pub const CONFIG_FILE_NAME: &str = "plct.toml";

/// Application configuration structure.
///
/// This struct represents the complete configuration for the plct CLI,
/// including global settings and command-specific options.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Config {
    /// Global verbose setting.
    #[serde(default)]
    pub verbose: bool,

    /// REPL-specific configuration.
    #[serde(default)]
    pub repl: ReplConfig,

    /// Token output configuration.
    #[serde(default)]
    pub output: OutputConfig,
}

/// REPL-specific configuration options.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ReplConfig {
    /// Prompt printed before each input.
    #[serde(default = "default_prompt")]
    pub prompt: String,

    /// Print each token's character span after it.
    #[serde(default)]
    pub show_spans: bool,
}

/// Token output configuration options.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct OutputConfig {
    /// Default format for `plct lex`.
    #[serde(default)]
    pub format: OutputFormat,
}

fn default_prompt() -> String {
    "> ".to_string()
}

impl Default for ReplConfig {
    fn default() -> Self {
        Self {
            prompt: default_prompt(),
            show_spans: false,
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
            None => {
                debug!("no configuration file found, using defaults");
                Ok(Self::default())
            }
        }
    }

    /// Load configuration from a specific path.
    pub fn load_from_path(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(PlctError::Config(format!(
                "Configuration file not found: {}",
                path.display()
            )));
        }

        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content).map_err(|e| {
            PlctError::Config(format!("Failed to parse {}: {}", path.display(), e))
        })?;

        debug!(path = %path.display(), "loaded configuration");
        Ok(config)
    }

    /// Save configuration to a specific path.
    ///
    /// Creates missing parent directories.
    pub fn save_to_path(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        std::fs::write(path, self.to_toml()?)?;
        Ok(())
    }

    /// Serialize the configuration as pretty TOML.
    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self)
            .map_err(|e| PlctError::Config(format!("Failed to serialize configuration: {}", e)))
    }

    /// Check for config in current directory.
    fn check_current_dir_config() -> Option<PathBuf> {
        let path = PathBuf::from(CONFIG_FILE_NAME);
        path.exists().then_some(path)
    }

    /// Check for config in home directory.
    fn check_home_config() -> Option<PathBuf> {
        home_dir()
            .map(|dir| dir.join(".config").join("plct").join(CONFIG_FILE_NAME))
            .filter(|path| path.exists())
    }

    /// Check for config in system config directory.
    fn check_system_config() -> Option<PathBuf> {
        config_dir()
            .map(|dir| dir.join("plct").join(CONFIG_FILE_NAME))
            .filter(|path| path.exists())
    }

    /// Find the configuration file in standard locations.
    fn find_config_file() -> Option<PathBuf> {
        Self::check_current_dir_config()
            .or_else(Self::check_home_config)
            .or_else(Self::check_system_config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn create_test_config() -> Config {
        Config {
            verbose: true,
            repl: ReplConfig {
                prompt: "plc> ".to_string(),
                show_spans: true,
            },
            output: OutputConfig {
                format: OutputFormat::Json,
            },
        }
    }

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert!(!config.verbose);
        assert_eq!(config.repl.prompt, "> ");
        assert!(!config.repl.show_spans);
        assert_eq!(config.output.format, OutputFormat::Text);
    }

    #[test]
    fn test_config_save_and_load() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("test_config.toml");

        let original_config = create_test_config();
        original_config.save_to_path(&config_path).unwrap();

        let loaded_config = Config::load_from_path(&config_path).unwrap();

        assert_eq!(original_config, loaded_config);
    }

    #[test]
    fn test_save_creates_parent_directories() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("nested").join("dir").join(CONFIG_FILE_NAME);

        Config::default().save_to_path(&config_path).unwrap();
        assert!(config_path.exists());
    }

    #[test]
    fn test_partial_config_uses_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join(CONFIG_FILE_NAME);
        std::fs::write(&config_path, "[output]\nformat = \"json\"\n").unwrap();

        let config = Config::load_from_path(&config_path).unwrap();
        assert_eq!(config.output.format, OutputFormat::Json);
        assert_eq!(config.repl, ReplConfig::default());
        assert!(!config.verbose);
    }

    #[test]
    fn test_invalid_format_is_rejected() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join(CONFIG_FILE_NAME);
        std::fs::write(&config_path, "[output]\nformat = \"xml\"\n").unwrap();

        let result = Config::load_from_path(&config_path);
        assert!(matches!(result, Err(PlctError::Config(_))));
    }

    #[test]
    fn test_to_toml_lists_sections() {
        let toml = Config::default().to_toml().unwrap();
        assert!(toml.contains("[repl]"));
        assert!(toml.contains("prompt = \"> \""));
        assert!(toml.contains("[output]"));
        assert!(toml.contains("format = \"text\""));
    }

    #[test]
    fn test_load_from_nonexistent_path() {
        let result = Config::load_from_path(Path::new("/nonexistent/path/config.toml"));
        assert!(result.is_err());
    }
}
