//! Config management use case

use crate::error::{Result, RosterError};
use crate::infrastructure::{Config, FileStore};

/// Service for managing roster configuration
pub struct ConfigService {
    store: FileStore,
}

impl ConfigService {
    pub fn new(store: FileStore) -> Self {
        ConfigService { store }
    }

    /// Get a single config value
    pub fn get(&self, key: &str) -> Result<String> {
        let config = self.store.load_config()?;

        match key {
            "storage_key" => Ok(config.storage_key),
            "seed_demo_data" => Ok(config.seed_demo_data.to_string()),
            _ => Err(Self::unknown_key(key)),
        }
    }

    /// Set a config value
    pub fn set(&self, key: &str, value: &str) -> Result<()> {
        let mut config = self.store.load_config()?;

        match key {
            "storage_key" => {
                Config::validate_storage_key(value)?;
                config.storage_key = value.to_string();
            }
            "seed_demo_data" => {
                config.seed_demo_data = value.parse().map_err(|_| {
                    RosterError::Config(format!(
                        "Invalid value for seed_demo_data: '{}'. Use true or false",
                        value
                    ))
                })?;
            }
            _ => return Err(Self::unknown_key(key)),
        }

        self.store.save_config(&config)
    }

    /// List all config values
    pub fn list(&self) -> Result<Config> {
        self.store.load_config()
    }

    fn unknown_key(key: &str) -> RosterError {
        RosterError::Config(format!(
            "Unknown config key: '{}'. Valid keys are: storage_key, seed_demo_data",
            key
        ))
    }
}
