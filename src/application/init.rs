//! Initialize roster use case

use crate::error::Result;
use crate::infrastructure::{Config, FileStore};
use std::fs;
use std::path::Path;
use tracing::info;

/// Initialize a new roster at the specified path.
pub fn init(path: &Path, config: &Config) -> Result<()> {
    Config::validate_storage_key(&config.storage_key)?;

    if !path.exists() {
        fs::create_dir_all(path)?;
    }

    let store = FileStore::new(path.to_path_buf());
    store.initialize()?;
    store.save_config(config)?;

    info!(path = %path.display(), key = %config.storage_key, "Initialized roster");
    Ok(())
}
