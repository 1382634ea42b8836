//! Errors raised by the entity contract and by opt-in validation.

use std::fmt;
use thiserror::Error;

/// A keyed insert found the key already present. The existing value is left
/// untouched.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("duplicated key ({key}) provided for {field}")]
pub struct DuplicateKeyError {
    /// Wire name of the map field.
    pub field: &'static str,
    pub key: String,
}

/// An entity's values do not satisfy its field metadata.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{entity} failed validation: {}", join(.violations))]
pub struct ValidationError {
    pub entity: &'static str,
    pub violations: Vec<Violation>,
}

fn join(violations: &[Violation]) -> String {
    violations
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

/// A single failed check, located by a path such as `Targets[0].Key`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Violation {
    pub path: String,
    pub kind: ViolationKind,
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.path, self.kind)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViolationKind {
    /// A required field is absent.
    Missing,
    TooShort { min: usize, actual: usize },
    TooLong { max: usize, actual: usize },
    BelowMinimum { min: i64, actual: i64 },
    AboveMaximum { max: i64, actual: i64 },
    PatternMismatch { pattern: &'static str },
    /// The value is not in the field's closed value set.
    NotAllowed { value: String },
}

impl fmt::Display for ViolationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Missing => f.write_str("required value is missing"),
            Self::TooShort { min, actual } => {
                write!(f, "length {actual} is below the minimum of {min}")
            }
            Self::TooLong { max, actual } => {
                write!(f, "length {actual} exceeds the maximum of {max}")
            }
            Self::BelowMinimum { min, actual } => write!(f, "{actual} is below {min}"),
            Self::AboveMaximum { max, actual } => write!(f, "{actual} is above {max}"),
            Self::PatternMismatch { pattern } => write!(f, "does not match {pattern}"),
            Self::NotAllowed { value } => write!(f, "{value} is not an allowed value"),
        }
    }
}
