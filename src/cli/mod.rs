//! CLI layer - Command-line interface

pub mod commands;
pub mod output;

pub use commands::{Cli, Commands, EmployeeChanges};
pub use output::{format_employee, format_employee_list, format_issues};
