//! Key-value text stores backing the employee list

use crate::error::{Result, RosterError, StoreError};
use crate::infrastructure::config::ROSTER_DIR;
use crate::infrastructure::Config;
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

/// Synchronous key-value text storage.
///
/// No transactional guarantees: two writers on the same key race and the
/// last write wins.
pub trait KeyValueStore {
    /// Read the value under `key`, `None` when absent
    fn get(&self, key: &str) -> std::result::Result<Option<String>, StoreError>;

    /// Write `value` under `key`, replacing any previous value
    fn set(&mut self, key: &str, value: &str) -> std::result::Result<(), StoreError>;
}

/// In-process store, lost when dropped
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
    quota: Option<usize>,
}

impl MemoryStore {
    pub fn new() -> Self {
        MemoryStore::default()
    }

    /// Store that refuses values larger than `bytes`
    pub fn with_quota(bytes: usize) -> Self {
        MemoryStore {
            entries: HashMap::new(),
            quota: Some(bytes),
        }
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> std::result::Result<Option<String>, StoreError> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> std::result::Result<(), StoreError> {
        if let Some(limit) = self.quota {
            if value.len() > limit {
                return Err(StoreError::QuotaExceeded {
                    needed: value.len(),
                    limit,
                });
            }
        }

        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// Store keeping one `<key>.json` file per key in a roster's `.roster` directory
#[derive(Debug, Clone)]
pub struct FileStore {
    pub root: PathBuf,
}

impl FileStore {
    /// Create a store rooted at the given roster directory
    pub fn new(root: PathBuf) -> Self {
        FileStore { root }
    }

    /// `ROSTER_ROOT` wins when set; otherwise search upwards from the working directory
    pub fn discover() -> Result<Self> {
        match std::env::var_os("ROSTER_ROOT") {
            Some(root) => {
                let root = PathBuf::from(root);
                if !Self::has_roster_dir(&root) {
                    return Err(RosterError::Config(format!(
                        "ROSTER_ROOT points to '{}', which has no .roster directory. \
                        Run 'roster init' there or unset ROSTER_ROOT.",
                        root.display()
                    )));
                }
                Ok(FileStore::new(root))
            }
            None => Self::discover_from(&std::env::current_dir()?),
        }
    }

    /// Nearest ancestor of `start` (itself included) holding a .roster directory
    pub fn discover_from(start: &Path) -> Result<Self> {
        start
            .ancestors()
            .find(|dir| Self::has_roster_dir(dir))
            .map(|dir| FileStore::new(dir.to_path_buf()))
            .ok_or_else(|| RosterError::NotRosterDirectory(start.to_path_buf()))
    }

    fn has_roster_dir(path: &Path) -> bool {
        path.join(ROSTER_DIR).is_dir()
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn is_initialized(&self) -> bool {
        Self::has_roster_dir(&self.root)
    }

    /// Refuses to reuse an existing .roster directory
    pub fn initialize(&self) -> Result<()> {
        match fs::create_dir(self.root.join(ROSTER_DIR)) {
            Err(e) if e.kind() == std::io::ErrorKind::AlreadyExists => {
                Err(RosterError::Config(format!(
                    "Directory already initialized: {}",
                    self.root.display()
                )))
            }
            other => Ok(other?),
        }
    }

    pub fn load_config(&self) -> Result<Config> {
        Config::load_from_dir(&self.root)
    }

    pub fn save_config(&self, config: &Config) -> Result<()> {
        config.save_to_dir(&self.root)
    }

    fn replace(from: &Path, to: &Path) -> std::io::Result<()> {
        // Windows rename does not overwrite
        if cfg!(windows) && to.exists() {
            fs::remove_file(to)?;
        }
        fs::rename(from, to)
    }

    /// Path of the file holding `key`
    pub fn path_for_key(&self, key: &str) -> PathBuf {
        self.root.join(ROSTER_DIR).join(format!("{}.json", key))
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> std::result::Result<Option<String>, StoreError> {
        match fs::read_to_string(self.path_for_key(key)) {
            Ok(contents) => Ok(Some(contents)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(StoreError::Io(e)),
        }
    }

    /// Writes to a temp file next to the target, then renames it into place
    fn set(&mut self, key: &str, value: &str) -> std::result::Result<(), StoreError> {
        let path = self.path_for_key(key);

        if let Some(parent) = path.parent() {
            if !parent.exists() {
                fs::create_dir_all(parent)?;
            }
        }

        let tmp_path = path.with_file_name(format!(
            "{}.json.roster-tmp-{}",
            key,
            std::process::id()
        ));

        fs::write(&tmp_path, value)?;

        if let Err(e) = Self::replace(&tmp_path, &path) {
            let _ = fs::remove_file(&tmp_path);
            return Err(StoreError::Io(e));
        }
        Ok(())
    }
}
