//! TOML-based application configuration.
//!
//! Stores the keyword vocabulary for the classifier and the recommendation
//! engine knobs. Configuration is stored at `<data_dir>/config.toml`; a
//! missing file means defaults.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use super::data_dir;
use crate::error::{CoreError, Result};
use crate::recommend::{EngineConfig, KeywordSets};

/// Application configuration.
///
/// Serialized to/from TOML at `<data_dir>/config.toml`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Keyword sets for the classifier axes.
    #[serde(default)]
    pub keywords: KeywordSets,
    /// Recommendation engine settings.
    #[serde(default)]
    pub recommend: EngineConfig,
}

impl Config {
    fn path() -> Result<PathBuf> {
        Ok(data_dir()?.join("config.toml"))
    }

    /// Load the configuration, falling back to defaults if the file does not
    /// exist.
    pub fn load() -> Result<Self> {
        let path = Self::path()?;
        if !path.exists() {
            return Ok(Config::default());
        }
        let raw = std::fs::read_to_string(&path)?;
        toml::from_str(&raw).map_err(|e| CoreError::Config(e.to_string()))
    }

    /// Save the configuration.
    pub fn save(&self) -> Result<()> {
        let raw = toml::to_string_pretty(self).map_err(|e| CoreError::Config(e.to_string()))?;
        std::fs::write(Self::path()?, raw)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_has_fixed_vocabulary() {
        let config = Config::default();
        assert!(config.keywords.urgent.contains(&"asap".to_string()));
        assert!(config.keywords.done.contains(&"shipped".to_string()));
        assert!(config.recommend.max_related.is_none());
    }

    #[test]
    fn parse_partial_config() {
        let config: Config = toml::from_str(
            r#"
            [recommend]
            max_related = 10

            [keywords]
            urgent = ["blocker", "p0"]
            "#,
        )
        .unwrap();
        assert_eq!(config.recommend.max_related, Some(10));
        assert_eq!(config.keywords.urgent, vec!["blocker", "p0"]);
        // Unspecified sets fall back to defaults.
        assert!(config.keywords.todo.contains(&"backlog".to_string()));
    }

    #[test]
    fn roundtrip_toml() {
        let config = Config::default();
        let raw = toml::to_string_pretty(&config).unwrap();
        let parsed: Config = toml::from_str(&raw).unwrap();
        assert_eq!(parsed.keywords.urgent, config.keywords.urgent);
    }
}
