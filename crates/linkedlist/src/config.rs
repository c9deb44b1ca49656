//! Configuration management for linkedlist.
//!
//! This module provides configuration loading and validation using figment,
//! supporting TOML config files, environment variables, and defaults.

use std::path::PathBuf;

use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Default configuration file name.
const CONFIG_FILE_NAME: &str = "config.toml";

/// Default configuration directory name.
const CONFIG_DIR_NAME: &str = "linkedlist";

/// Prefix for environment variable overrides.
const ENV_PREFIX: &str = "LINKEDLIST_";

/// Application configuration.
///
/// Configuration is loaded from (in order of precedence, highest first):
/// 1. Environment variables (prefixed with `LINKEDLIST_`)
/// 2. TOML config file at `~/.config/linkedlist/config.toml`
/// 3. Default values
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// How lists are rendered by `display_elements`.
    pub display: DisplayConfig,
}

/// Rendering of a list on the console.
///
/// The defaults produce:
///
/// ```text
/// Elements of List:
/// 8 -> 7 -> hello -> None
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    /// Line printed before the elements.
    pub label: String,
    /// Text placed after every element.
    pub separator: String,
    /// Token closing the chain.
    pub terminator: String,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            label: "Elements of List:".to_string(),
            separator: " -> ".to_string(),
            terminator: "None".to_string(),
        }
    }
}

impl Config {
    /// Load configuration from all sources.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration loading or parsing fails.
    pub fn load() -> Result<Self> {
        Self::load_from(None)
    }

    /// Load configuration with an optional custom config path.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration loading or parsing fails.
    pub fn load_from(config_path: Option<PathBuf>) -> Result<Self> {
        let config_file = config_path.unwrap_or_else(Self::default_config_path);

        let figment = Figment::new()
            .merge(Serialized::defaults(Config::default()))
            .merge(Toml::file(&config_file).nested())
            .merge(Env::prefixed(ENV_PREFIX).split("_"));

        let config: Config = figment.extract()?;
        config.validate()?;
        Ok(config)
    }

    /// Get the default configuration file path.
    #[must_use]
    pub fn default_config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from(".config"))
            .join(CONFIG_DIR_NAME)
            .join(CONFIG_FILE_NAME)
    }

    /// Validate the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if any configuration values are invalid.
    pub fn validate(&self) -> Result<()> {
        if self.display.separator.is_empty() {
            return Err(Error::ConfigValidation {
                message: "display.separator must not be empty".to_string(),
            });
        }

        if self.display.terminator.is_empty() {
            return Err(Error::ConfigValidation {
                message: "display.terminator must not be empty".to_string(),
            });
        }

        if self.display.label.contains('\n') {
            return Err(Error::ConfigValidation {
                message: "display.label must be a single line".to_string(),
            });
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_display_config() {
        let display = DisplayConfig::default();

        assert_eq!(display.label, "Elements of List:");
        assert_eq!(display.separator, " -> ");
        assert_eq!(display.terminator, "None");
    }

    #[test]
    fn test_validate_valid_config() {
        let config = Config::default();
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_empty_separator() {
        let mut config = Config::default();
        config.display.separator = String::new();

        let err = config.validate().unwrap_err().to_string();
        assert!(err.contains("separator"));
    }

    #[test]
    fn test_validate_empty_terminator() {
        let mut config = Config::default();
        config.display.terminator = String::new();

        let err = config.validate().unwrap_err().to_string();
        assert!(err.contains("terminator"));
    }

    #[test]
    fn test_validate_multiline_label() {
        let mut config = Config::default();
        config.display.label = "one\ntwo".to_string();

        let err = config.validate().unwrap_err().to_string();
        assert!(err.contains("label"));
    }

    #[test]
    fn test_default_config_path() {
        let path = Config::default_config_path();
        assert!(path.to_string_lossy().contains("linkedlist"));
        assert!(path.to_string_lossy().contains("config.toml"));
    }

    #[test]
    fn test_load_nonexistent_config() {
        // Loading from a nonexistent path should work (uses defaults)
        let result = Config::load_from(Some(PathBuf::from("/nonexistent/config.toml")));
        assert!(result.is_ok());

        let config = result.unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_display_config_deserialize_partial() {
        let json = r#"{"separator": " => "}"#;
        let display: DisplayConfig = serde_json::from_str(json).unwrap();
        assert_eq!(display.separator, " => ");
        assert_eq!(display.terminator, "None");
    }

    #[test]
    fn test_config_serialize() {
        let json = serde_json::to_string(&Config::default()).unwrap();
        assert!(json.contains("separator"));
        assert!(json.contains("terminator"));
    }
}
