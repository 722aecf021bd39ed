//! # Configuration
//!
//! Carlot configuration is stored as `config.json` next to the listing data.
//! Missing files and missing keys fall back to compiled defaults.
//!
//! | Key | Default | Description |
//! |-----|---------|-------------|
//! | `placeholder_image` | placeholder URL | Image used for listings submitted without one |
//! | `on_corrupt_data` | `fail` | What to do when the stored listings cannot be parsed: `fail` or `reseed` |

use crate::error::{CarlotError, Result};
use crate::model::PLACEHOLDER_IMAGE;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::Path;
use std::str::FromStr;

const CONFIG_FILENAME: &str = "config.json";

pub const CONFIG_KEYS: [&str; 2] = ["placeholder_image", "on_corrupt_data"];

/// Policy for a persisted listing document that no longer parses.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CorruptDataPolicy {
    /// Surface the parse error and leave the stored data alone.
    #[default]
    Fail,
    /// Log a warning and overwrite the collection with the seed listings.
    Reseed,
}

impl fmt::Display for CorruptDataPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CorruptDataPolicy::Fail => write!(f, "fail"),
            CorruptDataPolicy::Reseed => write!(f, "reseed"),
        }
    }
}

impl FromStr for CorruptDataPolicy {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "fail" => Ok(CorruptDataPolicy::Fail),
            "reseed" => Ok(CorruptDataPolicy::Reseed),
            other => Err(format!(
                "Invalid on_corrupt_data value '{}' (expected 'fail' or 'reseed')",
                other
            )),
        }
    }
}

/// Configuration for carlot, stored in `<data dir>/config.json`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CarlotConfig {
    /// Image URL used for listings submitted without one.
    #[serde(default = "default_placeholder_image")]
    pub placeholder_image: String,

    #[serde(default)]
    pub on_corrupt_data: CorruptDataPolicy,
}

fn default_placeholder_image() -> String {
    PLACEHOLDER_IMAGE.to_string()
}

impl Default for CarlotConfig {
    fn default() -> Self {
        Self {
            placeholder_image: default_placeholder_image(),
            on_corrupt_data: CorruptDataPolicy::default(),
        }
    }
}

impl CarlotConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path)?;
        serde_json::from_str(&content).map_err(|e| {
            let message = format!("{}: {}", config_path.display(), e);
            CarlotError::Config(message)
        })
    }

    /// Save config to the given directory
    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();
        if !config_dir.exists() {
            fs::create_dir_all(config_dir)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        fs::write(config_dir.join(CONFIG_FILENAME), content)?;
        Ok(())
    }

    pub fn get(&self, key: &str) -> Option<String> {
        match key {
            "placeholder_image" => Some(self.placeholder_image.clone()),
            "on_corrupt_data" => Some(self.on_corrupt_data.to_string()),
            _ => None,
        }
    }

    pub fn set(&mut self, key: &str, value: &str) -> std::result::Result<(), String> {
        match key {
            "placeholder_image" => {
                let value = value.trim();
                if let Err(e) = url::Url::parse(value) {
                    return Err(format!("Invalid placeholder_image URL: {}", e));
                }
                self.placeholder_image = value.to_string();
                Ok(())
            }
            "on_corrupt_data" => {
                self.on_corrupt_data = value.parse()?;
                Ok(())
            }
            _ => Err(format!("Unknown config key: {}", key)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = CarlotConfig::default();
        assert_eq!(config.placeholder_image, PLACEHOLDER_IMAGE);
        assert_eq!(config.on_corrupt_data, CorruptDataPolicy::Fail);
    }

    #[test]
    fn test_load_missing_config() {
        let dir = tempfile::tempdir().unwrap();
        let config = CarlotConfig::load(dir.path().join("nope")).unwrap();
        assert_eq!(config, CarlotConfig::default());
    }

    #[test]
    fn test_save_and_load() {
        let dir = tempfile::tempdir().unwrap();
        let mut config = CarlotConfig::default();
        config.set("on_corrupt_data", "reseed").unwrap();
        config.save(dir.path()).unwrap();

        let loaded = CarlotConfig::load(dir.path()).unwrap();
        assert_eq!(loaded.on_corrupt_data, CorruptDataPolicy::Reseed);
        assert_eq!(loaded.placeholder_image, PLACEHOLDER_IMAGE);
    }

    #[test]
    fn test_partial_file_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(
            dir.path().join(CONFIG_FILENAME),
            r#"{"placeholder_image": "https://example.com/none.png"}"#,
        )
        .unwrap();

        let loaded = CarlotConfig::load(dir.path()).unwrap();
        assert_eq!(loaded.placeholder_image, "https://example.com/none.png");
        assert_eq!(loaded.on_corrupt_data, CorruptDataPolicy::Fail);
    }

    #[test]
    fn test_malformed_file_is_config_error() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join(CONFIG_FILENAME), "{not json").unwrap();
        let loaded = CarlotConfig::load(dir.path());
        assert!(matches!(loaded, Err(CarlotError::Config(_))));
    }

    #[test]
    fn test_set_rejects_bad_values() {
        let mut config = CarlotConfig::default();
        assert!(config.set("placeholder_image", "not a url").is_err());
        assert!(config.set("on_corrupt_data", "ignore").is_err());
        assert!(config.set("colour", "blue").is_err());
        assert_eq!(config, CarlotConfig::default());
    }

    #[test]
    fn test_get_known_and_unknown_keys() {
        let config = CarlotConfig::default();
        for key in CONFIG_KEYS {
            assert!(config.get(key).is_some(), "missing {}", key);
        }
        assert_eq!(config.get("on_corrupt_data").as_deref(), Some("fail"));
        assert_eq!(config.get("colour"), None);
    }
}
