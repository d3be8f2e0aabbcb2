use crate::error::{ContactzError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::num::NonZeroUsize;
use std::path::Path;

const CONFIG_FILENAME: &str = "config.json";
const DEFAULT_PAGE_SIZE: usize = 10;

pub const KEYS: &[&str] = &["page-size"];

/// Configuration for contactz, stored as `config.json` in the data directory
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ContactzConfig {
    /// How many contacts `show` prints per page
    #[serde(default = "default_page_size")]
    pub page_size: usize,
}

fn default_page_size() -> usize {
    DEFAULT_PAGE_SIZE
}

impl Default for ContactzConfig {
    fn default() -> Self {
        Self {
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

impl ContactzConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path)?;
        let config: ContactzConfig = serde_json::from_str(&content)?;
        if config.page_size == 0 {
            return Err(ContactzError::Config(
                "page-size in config.json must be greater than zero".to_string(),
            ));
        }
        Ok(config)
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

    pub fn page_size(&self) -> NonZeroUsize {
        NonZeroUsize::new(self.page_size).unwrap_or(NonZeroUsize::MIN)
    }

    pub fn get(&self, key: &str) -> Option<String> {
        match key {
            "page-size" => Some(self.page_size.to_string()),
            _ => None,
        }
    }

    pub fn set(&mut self, key: &str, value: &str) -> std::result::Result<(), String> {
        match key {
            "page-size" => {
                let size: usize = value
                    .parse()
                    .map_err(|_| format!("page-size must be a number, got '{}'", value))?;
                if size == 0 {
                    return Err("page-size must be greater than zero".to_string());
                }
                self.page_size = size;
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
        let config = ContactzConfig::default();
        assert_eq!(config.page_size, 10);
        assert_eq!(config.page_size().get(), 10);
    }

    #[test]
    fn test_set_page_size() {
        let mut config = ContactzConfig::default();
        config.set("page-size", "25").unwrap();
        assert_eq!(config.get("page-size").as_deref(), Some("25"));
    }

    #[test]
    fn test_set_rejects_bad_values() {
        let mut config = ContactzConfig::default();
        assert!(config.set("page-size", "0").is_err());
        assert!(config.set("page-size", "lots").is_err());
        assert!(config.set("colour", "blue").is_err());
        assert_eq!(config, ContactzConfig::default());
    }

    #[test]
    fn test_load_missing_config() {
        let temp_dir = tempfile::tempdir().unwrap();
        let config = ContactzConfig::load(temp_dir.path().join("missing")).unwrap();
        assert_eq!(config, ContactzConfig::default());
    }

    #[test]
    fn test_save_and_load() {
        let temp_dir = tempfile::tempdir().unwrap();
        let dir = temp_dir.path().join("nested");

        let mut config = ContactzConfig::default();
        config.set("page-size", "3").unwrap();
        config.save(&dir).unwrap();

        let loaded = ContactzConfig::load(&dir).unwrap();
        assert_eq!(loaded.page_size, 3);
    }

    #[test]
    fn test_load_fills_missing_fields() {
        let temp_dir = tempfile::tempdir().unwrap();
        fs::write(temp_dir.path().join(CONFIG_FILENAME), "{}").unwrap();

        let loaded = ContactzConfig::load(temp_dir.path()).unwrap();
        assert_eq!(loaded, ContactzConfig::default());
    }

    #[test]
    fn test_load_rejects_zero_page_size() {
        let temp_dir = tempfile::tempdir().unwrap();
        fs::write(
            temp_dir.path().join(CONFIG_FILENAME),
            r#"{"page_size": 0}"#,
        )
        .unwrap();

        let err = ContactzConfig::load(temp_dir.path()).unwrap_err();
        assert!(matches!(err, ContactzError::Config(_)));
    }
}
