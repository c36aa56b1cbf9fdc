//! Configuration management

use crate::error::{Result, RosterError};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Name of the per-roster metadata directory
pub const ROSTER_DIR: &str = ".roster";

/// Store key used when the config does not name one
pub const DEFAULT_STORAGE_KEY: &str = "employees";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Key the employee list is stored under
    #[serde(default = "default_storage_key")]
    pub storage_key: String,
    /// Write the demo employees when the store has no list yet
    #[serde(default = "default_seed_demo_data")]
    pub seed_demo_data: bool,
}

fn default_storage_key() -> String {
    DEFAULT_STORAGE_KEY.to_string()
}

fn default_seed_demo_data() -> bool {
    true
}

impl Default for Config {
    fn default() -> Self {
        Config {
            storage_key: default_storage_key(),
            seed_demo_data: default_seed_demo_data(),
        }
    }
}

impl Config {
    /// Load config from .roster/config.toml in the given directory
    pub fn load_from_dir(path: &Path) -> Result<Self> {
        let config_path = path.join(ROSTER_DIR).join("config.toml");

        let contents = fs::read_to_string(&config_path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                RosterError::NotRosterDirectory(path.to_path_buf())
            } else {
                RosterError::Io(e)
            }
        })?;

        let config: Config = toml::from_str(&contents)?;
        Self::validate_storage_key(&config.storage_key)?;

        Ok(config)
    }

    /// Save config to .roster/config.toml in the given directory
    pub fn save_to_dir(&self, path: &Path) -> Result<()> {
        let roster_dir = path.join(ROSTER_DIR);
        let config_path = roster_dir.join("config.toml");

        if !roster_dir.exists() {
            fs::create_dir(&roster_dir)?;
        }

        let contents = toml::to_string_pretty(self)?;
        fs::write(&config_path, contents)?;

        Ok(())
    }

    /// Storage keys double as file names, so only a safe subset is allowed
    pub fn validate_storage_key(key: &str) -> Result<()> {
        let valid = !key.is_empty()
            && key
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_');

        if valid {
            Ok(())
        } else {
            Err(RosterError::Config(format!(
                "Invalid storage key: '{}'. Use letters, digits, '-' or '_'",
                key
            )))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.storage_key, "employees");
        assert!(config.seed_demo_data);
    }

    #[test]
    fn test_save_and_load_config() {
        let temp = TempDir::new().unwrap();
        let config = Config {
            storage_key: "staff".to_string(),
            seed_demo_data: false,
        };

        config.save_to_dir(temp.path()).unwrap();

        assert!(temp.path().join(".roster").exists());
        assert!(temp.path().join(".roster/config.toml").exists());

        let loaded = Config::load_from_dir(temp.path()).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_load_missing_config() {
        let temp = TempDir::new().unwrap();

        let result = Config::load_from_dir(temp.path());

        match result.unwrap_err() {
            RosterError::NotRosterDirectory(_) => {}
            other => panic!("Expected NotRosterDirectory error, got {:?}", other),
        }
    }

    #[test]
    fn test_missing_fields_use_defaults() {
        let temp = TempDir::new().unwrap();
        fs::create_dir(temp.path().join(".roster")).unwrap();
        fs::write(temp.path().join(".roster/config.toml"), "").unwrap();

        let loaded = Config::load_from_dir(temp.path()).unwrap();
        assert_eq!(loaded, Config::default());
    }

    #[test]
    fn test_load_malformed_config() {
        let temp = TempDir::new().unwrap();
        fs::create_dir(temp.path().join(".roster")).unwrap();
        fs::write(temp.path().join(".roster/config.toml"), "storage_key = [").unwrap();

        assert!(matches!(
            Config::load_from_dir(temp.path()),
            Err(RosterError::TomlDeserialize(_))
        ));
    }

    #[test]
    fn test_load_rejects_unsafe_key() {
        let temp = TempDir::new().unwrap();
        fs::create_dir(temp.path().join(".roster")).unwrap();
        fs::write(
            temp.path().join(".roster/config.toml"),
            "storage_key = \"../escape\"\n",
        )
        .unwrap();

        assert!(matches!(
            Config::load_from_dir(temp.path()),
            Err(RosterError::Config(_))
        ));
    }

    #[test]
    fn test_validate_storage_key() {
        assert!(Config::validate_storage_key("employees").is_ok());
        assert!(Config::validate_storage_key("team_2-b").is_ok());
        assert!(Config::validate_storage_key("").is_err());
        assert!(Config::validate_storage_key("a/b").is_err());
        assert!(Config::validate_storage_key("a.json").is_err());
    }
}
