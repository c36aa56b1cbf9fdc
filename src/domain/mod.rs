//! Domain layer - Employee records and their rules

pub mod employee;
pub mod id;
pub mod seed;

pub use employee::{Employee, ValidationIssue};
pub use id::{EmployeeId, IdGenerator, TimestampIdGenerator};
pub use seed::demo_employees;
