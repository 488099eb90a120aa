use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

const CONFIG_FILENAME: &str = "config.json";
const DEFAULT_EXPORT_FILE: &str = "Inventory.csv";

/// Configuration for pillbox, stored in the data directory as config.json
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PillboxConfig {
    /// File name used by `export` when no output path is given
    #[serde(default = "default_export_file")]
    pub export_file: String,
}

fn default_export_file() -> String {
    DEFAULT_EXPORT_FILE.to_string()
}

impl Default for PillboxConfig {
    fn default() -> Self {
        Self {
            export_file: default_export_file(),
        }
    }
}

impl PillboxConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path)?;
        let config: PillboxConfig = serde_json::from_str(&content)?;
        Ok(config)
    }

    /// Save config to the given directory
    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();

        if !config_dir.exists() {
            fs::create_dir_all(config_dir)?;
        }

        let config_path = config_dir.join(CONFIG_FILENAME);
        let content = serde_json::to_string_pretty(self)?;
        fs::write(config_path, content)?;
        Ok(())
    }

    pub fn get(&self, key: &str) -> Option<String> {
        match key {
            "export-file" => Some(self.export_file.clone()),
            _ => None,
        }
    }

    pub fn set(&mut self, key: &str, value: &str) -> std::result::Result<(), String> {
        match key {
            "export-file" => {
                if value.trim().is_empty() {
                    return Err("export-file cannot be empty".to_string());
                }
                self.export_file = value.to_string();
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
        let config = PillboxConfig::default();
        assert_eq!(config.export_file, "Inventory.csv");
    }

    #[test]
    fn test_set_export_file() {
        let mut config = PillboxConfig::default();
        config.set("export-file", "stock.csv").unwrap();
        assert_eq!(config.export_file, "stock.csv");
    }

    #[test]
    fn test_set_unknown_key() {
        let mut config = PillboxConfig::default();
        assert!(config.set("no-such-key", "x").is_err());
    }

    #[test]
    fn test_load_missing_config() {
        let temp_dir = tempfile::tempdir().unwrap();
        let config = PillboxConfig::load(temp_dir.path().join("absent")).unwrap();
        assert_eq!(config, PillboxConfig::default());
    }

    #[test]
    fn test_save_and_load() {
        let temp_dir = tempfile::tempdir().unwrap();

        let mut config = PillboxConfig::default();
        config.set("export-file", "stock.csv").unwrap();
        config.save(temp_dir.path()).unwrap();

        let loaded = PillboxConfig::load(temp_dir.path()).unwrap();
        assert_eq!(loaded.export_file, "stock.csv");
    }

    #[test]
    fn test_serialization_roundtrip() {
        let config = PillboxConfig {
            export_file: "out.csv".to_string(),
        };

        let json = serde_json::to_string(&config).unwrap();
        let parsed: PillboxConfig = serde_json::from_str(&json).unwrap();

        assert_eq!(config, parsed);
    }
}
