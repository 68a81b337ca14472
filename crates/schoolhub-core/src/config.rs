//! Configuration management for SchoolHub.
//!
//! Loads configuration from ${SCHOOLHUB_HOME}/config.toml with sensible defaults.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

pub mod paths {
    //! Path resolution for SchoolHub configuration and data directories.
    //!
    //! SCHOOLHUB_HOME resolution order:
    //! 1. SCHOOLHUB_HOME environment variable (if set)
    //! 2. ~/.config/schoolhub (default)

    use std::path::PathBuf;

    /// Returns the user's home directory, if one can be determined.
    pub fn home_dir() -> Option<PathBuf> {
        std::env::var_os("HOME").map(PathBuf::from)
    }

    /// Returns the SchoolHub home directory.
    ///
    /// Checks SCHOOLHUB_HOME env var first, falls back to ~/.config/schoolhub.
    pub fn schoolhub_home() -> PathBuf {
        if let Some(home) = std::env::var_os("SCHOOLHUB_HOME") {
            return PathBuf::from(home);
        }

        home_dir()
            .map(|h| h.join(".config").join("schoolhub"))
            .unwrap_or_else(|| PathBuf::from(".schoolhub"))
    }

    /// Returns the path to the config.toml file.
    pub fn config_path() -> PathBuf {
        schoolhub_home().join("config.toml")
    }

    /// Returns the path to the stored session file.
    pub fn session_path() -> PathBuf {
        schoolhub_home().join("session.json")
    }

    /// Returns the path to the log file directory.
    pub fn log_dir() -> PathBuf {
        schoolhub_home().join("logs")
    }
}

/// Identity provider connection settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ProviderConfig {
    /// Base URL of the directory backend (auth endpoints live under /auth/v1).
    pub base_url: String,
    /// Publishable API key sent as the `apikey` header on every auth request.
    pub publishable_key: String,
}

impl Default for ProviderConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:54321".to_string(),
            publishable_key: String::new(),
        }
    }
}

/// Main configuration structure.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Identity provider connection settings.
    pub provider: ProviderConfig,
}

impl Config {
    /// Loads the configuration from the default location.
    ///
    /// Missing file yields defaults; a malformed file is an error.
    pub fn load() -> Result<Self> {
        Self::load_from(&paths::config_path())
    }

    /// Loads the configuration from an explicit path.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config from {}", path.display()))?;
        toml::from_str(&contents)
            .with_context(|| format!("Failed to parse config from {}", path.display()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.provider.base_url, "http://localhost:54321");
        assert!(config.provider.publishable_key.is_empty());
    }

    #[test]
    fn test_load_missing_file_yields_defaults() {
        let config = Config::load_from(Path::new("/nonexistent/config.toml")).unwrap();
        assert_eq!(config.provider.base_url, Config::default().provider.base_url);
    }

    #[test]
    fn test_parse_provider_section() {
        let parsed: Config = toml::from_str(
            r#"
            [provider]
            base_url = "https://directory.example.com"
            publishable_key = "pk_test_123"
            "#,
        )
        .unwrap();
        assert_eq!(parsed.provider.base_url, "https://directory.example.com");
        assert_eq!(parsed.provider.publishable_key, "pk_test_123");
    }
}
