use crate::error::{PrincipiaError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

const CONFIG_FILENAME: &str = "config.json";
const DEFAULT_SEPARATOR: &str = "=====";
const DEFAULT_SAVE_DESTINATION: &str = "journal.txt";

/// Keys accepted by `config <key> [value]`.
pub const CONFIG_KEYS: &[&str] = &["separator", "save-destination", "overwrite"];

/// Configuration for principia, stored in `<config dir>/config.json`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PrincipiaConfig {
    /// Line printed between filter passes
    #[serde(default = "default_separator")]
    pub separator: String,

    /// Destination handed to the journal store on save
    #[serde(default = "default_save_destination")]
    pub save_destination: String,

    /// Whether saves may replace an earlier save of the same destination
    #[serde(default)]
    pub overwrite: bool,
}

fn default_separator() -> String {
    DEFAULT_SEPARATOR.to_string()
}

fn default_save_destination() -> String {
    DEFAULT_SAVE_DESTINATION.to_string()
}

impl Default for PrincipiaConfig {
    fn default() -> Self {
        Self {
            separator: default_separator(),
            save_destination: default_save_destination(),
            overwrite: false,
        }
    }
}

impl PrincipiaConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path)?;
        let config: PrincipiaConfig = serde_json::from_str(&content)?;
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

    pub fn get_value(&self, key: &str) -> Result<String> {
        match key {
            "separator" => Ok(self.separator.clone()),
            "save-destination" => Ok(self.save_destination.clone()),
            "overwrite" => Ok(self.overwrite.to_string()),
            other => Err(unknown_key(other)),
        }
    }

    pub fn set_value(&mut self, key: &str, value: &str) -> Result<()> {
        match key {
            "separator" => self.separator = value.to_string(),
            "save-destination" => self.save_destination = value.to_string(),
            "overwrite" => {
                self.overwrite = value.parse().map_err(|_| PrincipiaError::UnknownValue {
                    field: "overwrite flag",
                    value: value.to_string(),
                })?
            }
            other => return Err(unknown_key(other)),
        }
        Ok(())
    }
}

fn unknown_key(key: &str) -> PrincipiaError {
    PrincipiaError::UnknownConfigKey(key.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = PrincipiaConfig::default();
        assert_eq!(config.separator, "=====");
        assert_eq!(config.save_destination, "journal.txt");
        assert!(!config.overwrite);
    }

    #[test]
    fn test_load_missing_config() {
        let temp_dir = tempfile::tempdir().unwrap();
        let config = PrincipiaConfig::load(temp_dir.path().join("missing")).unwrap();
        assert_eq!(config, PrincipiaConfig::default());
    }

    #[test]
    fn test_save_and_load() {
        let temp_dir = tempfile::tempdir().unwrap();
        let config_dir = temp_dir.path().join("nested");

        let mut config = PrincipiaConfig::default();
        config.set_value("separator", "-----").unwrap();
        config.set_value("overwrite", "true").unwrap();
        config.save(&config_dir).unwrap();

        let loaded = PrincipiaConfig::load(&config_dir).unwrap();
        assert_eq!(loaded.separator, "-----");
        assert!(loaded.overwrite);
        assert_eq!(loaded.save_destination, "journal.txt");
    }

    #[test]
    fn test_partial_file_falls_back_to_defaults() {
        let temp_dir = tempfile::tempdir().unwrap();
        fs::write(
            temp_dir.path().join(CONFIG_FILENAME),
            r#"{"separator": "~~"}"#,
        )
        .unwrap();

        let loaded = PrincipiaConfig::load(temp_dir.path()).unwrap();
        assert_eq!(loaded.separator, "~~");
        assert_eq!(loaded.save_destination, "journal.txt");
        assert!(!loaded.overwrite);
    }

    #[test]
    fn test_malformed_file_is_a_serialization_error() {
        let temp_dir = tempfile::tempdir().unwrap();
        fs::write(temp_dir.path().join(CONFIG_FILENAME), "not json").unwrap();

        let err = PrincipiaConfig::load(temp_dir.path()).unwrap_err();
        assert!(matches!(err, PrincipiaError::Serialization(_)));
    }

    #[test]
    fn test_get_value_for_every_key() {
        let config = PrincipiaConfig::default();
        for key in CONFIG_KEYS {
            assert!(config.get_value(key).is_ok(), "key {} should resolve", key);
        }
        assert_eq!(config.get_value("overwrite").unwrap(), "false");
    }

    #[test]
    fn test_unknown_key_and_bad_flag() {
        let mut config = PrincipiaConfig::default();
        assert!(matches!(
            config.get_value("file-ext"),
            Err(PrincipiaError::UnknownConfigKey(ref k)) if k == "file-ext"
        ));
        assert!(config.set_value("file-ext", ".md").is_err());
        assert!(config.set_value("overwrite", "maybe").is_err());
        assert_eq!(config, PrincipiaConfig::default());
    }
}
