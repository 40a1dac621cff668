use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

const CONFIG_FILENAME: &str = "config.json";
const DEFAULT_EXPORT_PREFIX: &str = "Backup_Aufträge";

/// Configuration for one data directory, stored in `<data-dir>/config.json`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct HuntConfig {
    /// Chapters offered by chapter navigation
    #[serde(default = "default_chapters")]
    pub chapters: Vec<u8>,

    /// File name prefix for exported backups; the date is appended
    #[serde(default = "default_export_prefix")]
    pub export_prefix: String,
}

fn default_chapters() -> Vec<u8> {
    vec![1, 2, 3, 4]
}

fn default_export_prefix() -> String {
    DEFAULT_EXPORT_PREFIX.to_string()
}

impl Default for HuntConfig {
    fn default() -> Self {
        Self {
            chapters: default_chapters(),
            export_prefix: default_export_prefix(),
        }
    }
}

impl HuntConfig {
    pub const KEYS: [&'static str; 2] = ["chapters", "export-prefix"];

    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path)?;
        let config: HuntConfig = serde_json::from_str(&content)?;
        Ok(config)
    }

    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();
        if !config_dir.exists() {
            fs::create_dir_all(config_dir)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        fs::write(config_dir.join(CONFIG_FILENAME), content)?;
        Ok(())
    }

    pub fn unknown_key(key: &str) -> String {
        format!(
            "Unknown setting `{}`. Known settings: {}",
            key,
            Self::KEYS.join(", ")
        )
    }

    pub fn get(&self, key: &str) -> Option<String> {
        match key {
            "chapters" => Some(
                self.chapters
                    .iter()
                    .map(u8::to_string)
                    .collect::<Vec<_>>()
                    .join(","),
            ),
            "export-prefix" => Some(self.export_prefix.clone()),
            _ => None,
        }
    }

    pub fn set(&mut self, key: &str, value: &str) -> std::result::Result<(), String> {
        match key {
            "chapters" => {
                let chapters = value
                    .split(',')
                    .map(str::trim)
                    .filter(|s| !s.is_empty())
                    .map(|s| match s.parse::<u8>() {
                        Ok(n) if n <= 9 => Ok(n),
                        _ => Err(format!("Chapters must be digits 0-9, got: {}", s)),
                    })
                    .collect::<std::result::Result<Vec<_>, _>>()?;
                if chapters.is_empty() {
                    return Err("At least one chapter is required".to_string());
                }
                self.chapters = chapters;
            }
            "export-prefix" => {
                let prefix = value.trim();
                if prefix.is_empty() {
                    return Err("Export prefix cannot be empty".to_string());
                }
                self.export_prefix = prefix.to_string();
            }
            other => return Err(Self::unknown_key(other)),
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = HuntConfig::default();
        assert_eq!(config.chapters, vec![1, 2, 3, 4]);
        assert_eq!(config.export_prefix, "Backup_Aufträge");
    }

    #[test]
    fn test_load_missing_config() {
        let dir = tempfile::tempdir().unwrap();
        let config = HuntConfig::load(dir.path()).unwrap();
        assert_eq!(config, HuntConfig::default());
    }

    #[test]
    fn test_save_and_load() {
        let dir = tempfile::tempdir().unwrap();
        let mut config = HuntConfig::default();
        config.set("chapters", "1, 2,5").unwrap();
        config.save(dir.path()).unwrap();

        let loaded = HuntConfig::load(dir.path()).unwrap();
        assert_eq!(loaded.chapters, vec![1, 2, 5]);
        assert_eq!(loaded.get("chapters").unwrap(), "1,2,5");
    }

    #[test]
    fn test_partial_file_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join(CONFIG_FILENAME), r#"{"export_prefix": "Hunt"}"#).unwrap();
        let config = HuntConfig::load(dir.path()).unwrap();
        assert_eq!(config.export_prefix, "Hunt");
        assert_eq!(config.chapters, vec![1, 2, 3, 4]);
    }

    #[test]
    fn test_set_rejects_bad_values() {
        let mut config = HuntConfig::default();
        assert!(config.set("chapters", "1,12").is_err());
        assert!(config.set("chapters", " , ").is_err());
        assert!(config.set("export-prefix", "  ").is_err());
        assert!(config.set("colour", "red").is_err());
        assert_eq!(config, HuntConfig::default());
    }
}
