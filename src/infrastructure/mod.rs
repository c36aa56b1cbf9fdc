//! Infrastructure layer - Storage and persistence

pub mod config;
pub mod repository;
pub mod store;

pub use config::Config;
pub use repository::{ChangeEvent, ChangeKind, EmployeeRepository, SubscriptionId};
pub use store::{FileStore, KeyValueStore, MemoryStore};
