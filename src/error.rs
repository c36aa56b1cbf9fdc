//! Error types for roster

use std::path::PathBuf;
use thiserror::Error;

/// Failure of the backing key-value store
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Store IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Store quota exceeded: {needed} bytes needed, {limit} allowed")]
    QuotaExceeded { needed: usize, limit: usize },
}

/// Main error type for roster application
#[derive(Debug, Error)]
pub enum RosterError {
    #[error("Not a roster directory: {0}")]
    NotRosterDirectory(PathBuf),

    #[error("Invalid employee: {0}")]
    InvalidEmployee(String),

    #[error("Employee not found: {0}")]
    EmployeeNotFound(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error(transparent)]
    Store(#[from] StoreError),

    #[error("Stored data is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML deserialization error: {0}")]
    TomlDeserialize(#[from] toml::de::Error),

    #[error("TOML serialization error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),
}

impl RosterError {
    /// Get the exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            RosterError::NotRosterDirectory(_) => 2,
            RosterError::InvalidEmployee(_) => 3,
            RosterError::EmployeeNotFound(_) => 4,
            _ => 1,
        }
    }

    /// Get a user-friendly error message with suggestions
    pub fn display_with_suggestions(&self) -> String {
        match self {
            RosterError::NotRosterDirectory(path) => {
                format!(
                    "Not a roster directory: {}\n\n\
                    Suggestions:\n\
                    • Run 'roster init' in this directory to create a new roster\n\
                    • Navigate to an existing roster directory\n\
                    • Set ROSTER_ROOT environment variable to your roster path",
                    path.display()
                )
            }
            RosterError::InvalidEmployee(reasons) => {
                format!(
                    "Invalid employee: {}\n\n\
                    Rules:\n\
                    • First name, last name and address must not be blank\n\
                    • Experience must be 0 or more years\n\
                    • Age must be between 18 and 100",
                    reasons
                )
            }
            RosterError::EmployeeNotFound(id) => {
                format!(
                    "Employee not found: {}\n\n\
                    Suggestions:\n\
                    • Use 'roster list' to see existing ids",
                    id
                )
            }
            RosterError::Json(_) => {
                format!(
                    "{}\n\n\
                    The stored employee list could not be read.\n\
                    Fix or remove .roster/<storage_key>.json to start over.",
                    self
                )
            }
            _ => self.to_string(),
        }
    }
}

/// Result type using RosterError
pub type Result<T> = std::result::Result<T, RosterError>;
