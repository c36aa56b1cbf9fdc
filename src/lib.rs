//! roster - Employee list manager
//!
//! Keeps a validated list of employee records in memory and mirrors every
//! change to a key-value text store.

pub mod application;
pub mod cli;
pub mod domain;
pub mod error;
pub mod infrastructure;

pub use error::RosterError;
