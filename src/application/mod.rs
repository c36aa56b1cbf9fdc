//! Application layer - Use cases and orchestration

pub mod employees;
pub mod init;
pub mod manage_config;

pub use employees::{EmployeeDraft, EmployeeService};
pub use manage_config::ConfigService;
