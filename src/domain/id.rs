//! Employee identifiers and id generation

use chrono::Utc;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Scalar identifier of an employee record.
///
/// Stored data keeps whatever scalar type it was written with: numeric ids
/// for seeded and generated records, text ids for anything else.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum EmployeeId {
    Number(i64),
    Text(String),
}

impl fmt::Display for EmployeeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EmployeeId::Number(n) => write!(f, "{}", n),
            EmployeeId::Text(s) => write!(f, "{}", s),
        }
    }
}

impl From<i64> for EmployeeId {
    fn from(value: i64) -> Self {
        EmployeeId::Number(value)
    }
}

impl FromStr for EmployeeId {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err("Employee id cannot be empty".to_string());
        }

        Ok(match trimmed.parse::<i64>() {
            Ok(n) => EmployeeId::Number(n),
            Err(_) => EmployeeId::Text(trimmed.to_string()),
        })
    }
}

/// Source of fresh ids for newly created employees
pub trait IdGenerator {
    fn next_id(&mut self) -> EmployeeId;
}

/// Generates ids from the current Unix time in milliseconds.
///
/// Two calls within the same millisecond would collide, so the generator
/// never hands out a value lower than or equal to the previous one.
#[derive(Debug, Default)]
pub struct TimestampIdGenerator {
    last: i64,
}

impl TimestampIdGenerator {
    pub fn new() -> Self {
        TimestampIdGenerator::default()
    }
}

impl IdGenerator for TimestampIdGenerator {
    fn next_id(&mut self) -> EmployeeId {
        let now = Utc::now().timestamp_millis();
        self.last = if now > self.last { now } else { self.last + 1 };
        EmployeeId::Number(self.last)
    }
}
