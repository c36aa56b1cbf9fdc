//! Employee record and its validation rules

use crate::domain::EmployeeId;
use serde::{Deserialize, Serialize, Serializer};
use std::fmt;

/// Youngest accepted age
pub const MIN_AGE: i64 = 18;
/// Oldest accepted age
pub const MAX_AGE: i64 = 100;

/// One employee's data.
///
/// Construction never validates: a record may be invalid while it is being
/// edited. Call [`Employee::is_valid`] before storing it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Employee {
    #[serde(default)]
    pub id: Option<EmployeeId>,
    pub first_name: String,
    pub last_name: String,
    /// Years; fractional values are allowed
    #[serde(serialize_with = "serialize_years")]
    pub experience: f64,
    pub age: i64,
    pub address: String,
}

/// A single broken validation rule
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationIssue {
    EmptyFirstName,
    EmptyLastName,
    NegativeExperience,
    AgeOutOfRange,
    EmptyAddress,
}

impl fmt::Display for ValidationIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationIssue::EmptyFirstName => write!(f, "first name is empty"),
            ValidationIssue::EmptyLastName => write!(f, "last name is empty"),
            ValidationIssue::NegativeExperience => write!(f, "experience is negative"),
            ValidationIssue::AgeOutOfRange => {
                write!(f, "age must be between {} and {}", MIN_AGE, MAX_AGE)
            }
            ValidationIssue::EmptyAddress => write!(f, "address is empty"),
        }
    }
}

impl Employee {
    pub fn new(
        id: Option<EmployeeId>,
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        experience: f64,
        age: i64,
        address: impl Into<String>,
    ) -> Self {
        Employee {
            id,
            first_name: first_name.into(),
            last_name: last_name.into(),
            experience,
            age,
            address: address.into(),
        }
    }

    /// True when every validation rule holds
    pub fn is_valid(&self) -> bool {
        self.validation_errors().is_empty()
    }

    /// Broken rules, in field order
    pub fn validation_errors(&self) -> Vec<ValidationIssue> {
        let mut issues = Vec::new();

        if self.first_name.trim().is_empty() {
            issues.push(ValidationIssue::EmptyFirstName);
        }
        if self.last_name.trim().is_empty() {
            issues.push(ValidationIssue::EmptyLastName);
        }
        if self.experience.is_nan() || self.experience < 0.0 {
            issues.push(ValidationIssue::NegativeExperience);
        }
        if !(MIN_AGE..=MAX_AGE).contains(&self.age) {
            issues.push(ValidationIssue::AgeOutOfRange);
        }
        if self.address.trim().is_empty() {
            issues.push(ValidationIssue::EmptyAddress);
        }

        issues
    }

    /// Empty form values: no id, blank text, no experience, age 25
    pub fn blank() -> Self {
        Employee::new(None, "", "", 0.0, 25, "")
    }

    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

/// Whole years are written as JSON integers, the rest as floats
fn serialize_years<S: Serializer>(years: &f64, serializer: S) -> Result<S::Ok, S::Error> {
    if years.fract() == 0.0 && years.abs() < 9.0e15 {
        serializer.serialize_i64(*years as i64)
    } else {
        serializer.serialize_f64(*years)
    }
}
