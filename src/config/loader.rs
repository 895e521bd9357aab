//! Configuration structures and loading logic.

use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::config::validation::validate_config;
use crate::error::{Error, Result};

/// Main configuration structure.
///
/// Unknown keys are rejected, both at the top level and inside
/// `[api_tokens]`, so an unsupported platform name fails the load.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// URLs to download media from.
    pub urls: Vec<String>,

    /// Per-platform API credentials.
    #[serde(default)]
    pub api_tokens: ApiTokens,
}

/// Per-platform session credentials. Absent means unauthenticated.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ApiTokens {
    pub instagram: Option<String>,
}

impl Config {
    /// Load and validate configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                Error::Config(format!(
                    "Configuration file not found: {}",
                    path.display()
                ))
            } else {
                Error::Io(e)
            }
        })?;

        let config: Config = toml::from_str(&content)?;
        validate_config(&config)?;

        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn load_str(content: &str) -> Result<Config> {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, content).unwrap();
        Config::load(&path)
    }

    #[test]
    fn loads_urls_and_tokens() {
        let config = load_str(
            "urls = [\"https://www.instagram.com/p/CF2iwCfsSVI/\"]\n\
             [api_tokens]\n\
             instagram = \"instagram token\"\n",
        )
        .unwrap();

        assert_eq!(config.urls, vec!["https://www.instagram.com/p/CF2iwCfsSVI/"]);
        assert_eq!(config.api_tokens.instagram.as_deref(), Some("instagram token"));
    }

    #[test]
    fn tokens_are_optional() {
        let config = load_str("urls = [\"https://www.instagram.com/p/x/\"]\n").unwrap();
        assert!(config.api_tokens.instagram.is_none());
    }

    #[test]
    fn rejects_unknown_platform() {
        let err = load_str(
            "urls = []\n\
             [api_tokens]\n\
             tiktok = \"token\"\n",
        )
        .unwrap_err();

        assert!(matches!(err, Error::TomlParse(_)));
    }

    #[test]
    fn rejects_unknown_top_level_key() {
        let err = load_str("urls = []\nretries = 3\n").unwrap_err();
        assert!(matches!(err, Error::TomlParse(_)));
    }

    #[test]
    fn rejects_missing_urls() {
        let err = load_str("[api_tokens]\ninstagram = \"token\"\n").unwrap_err();
        assert!(matches!(err, Error::TomlParse(_)));
    }

    #[test]
    fn rejects_invalid_url() {
        let err = load_str("urls = [\"not a url\"]\n").unwrap_err();
        assert!(matches!(err, Error::ConfigValidation { field, .. } if field == "urls"));
    }

    #[test]
    fn missing_file_is_a_config_error() {
        let err = Config::load(Path::new("/nonexistent/config.toml")).unwrap_err();
        assert!(matches!(err, Error::Config(_)));
    }
}
