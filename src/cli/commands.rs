//! CLI command definitions

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "roster")]
#[command(about = "Employee list manager", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Initialize a new roster
    Init {
        /// Directory to initialize (default: current directory)
        #[arg(default_value = ".")]
        path: PathBuf,

        /// Key the employee list is stored under
        #[arg(long, default_value = "employees")]
        storage_key: String,

        /// Start with an empty list instead of the demo employees
        #[arg(long)]
        no_demo: bool,
    },

    /// List all employees
    List {
        /// Print the stored JSON instead of a table
        #[arg(long)]
        json: bool,
    },

    /// Show one employee
    Show {
        /// Employee id
        id: String,
    },

    /// Add a new employee
    Add {
        #[arg(long, allow_hyphen_values = true)]
        first_name: String,

        #[arg(long, allow_hyphen_values = true)]
        last_name: String,

        /// Years of experience
        #[arg(long, allow_negative_numbers = true)]
        experience: f64,

        #[arg(long, allow_negative_numbers = true)]
        age: i64,

        #[arg(long, allow_hyphen_values = true)]
        address: String,
    },

    /// Change fields of an existing employee
    Update {
        /// Employee id
        id: String,

        #[command(flatten)]
        changes: EmployeeChanges,
    },

    /// Delete an employee
    Delete {
        /// Employee id
        id: String,
    },

    /// Print an empty employee template as JSON
    Blank,

    /// View or modify configuration
    Config {
        /// Config key to get or set
        key: Option<String>,

        /// Value to set (if provided, sets the key)
        value: Option<String>,

        /// List all configuration
        #[arg(short, long)]
        list: bool,
    },
}

/// Fields to overwrite on update; omitted fields keep their current value
#[derive(Args, Debug, Default)]
pub struct EmployeeChanges {
    #[arg(long, allow_hyphen_values = true)]
    pub first_name: Option<String>,

    #[arg(long, allow_hyphen_values = true)]
    pub last_name: Option<String>,

    #[arg(long, allow_negative_numbers = true)]
    pub experience: Option<f64>,

    #[arg(long, allow_negative_numbers = true)]
    pub age: Option<i64>,

    #[arg(long, allow_hyphen_values = true)]
    pub address: Option<String>,
}

impl EmployeeChanges {
    pub fn is_empty(&self) -> bool {
        self.first_name.is_none()
            && self.last_name.is_none()
            && self.experience.is_none()
            && self.age.is_none()
            && self.address.is_none()
    }
}
