//! Error types for the calculation core and its adapters.
//!
//! Calculators never fail on well-formed input. The only failure inside the
//! core is input validation, which happens once at the boundary when an
//! [`OrganizationInputs`](crate::core::OrganizationInputs) value is built.
//! Everything else (config files, report output) is adapter territory.

use serde::Serialize;
use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// A single rejected input field.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FieldViolation {
    pub field: &'static str,
    pub message: String,
}

impl FieldViolation {
    pub fn new(field: &'static str, message: impl Into<String>) -> Self {
        Self {
            field,
            message: message.into(),
        }
    }
}

impl fmt::Display for FieldViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

/// Input validation failure.
///
/// All violations are collected before reporting so a user fixing a config
/// file sees every problem in one run.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    #[error("invalid input: {}", format_violations(.violations))]
    InvalidInput { violations: Vec<FieldViolation> },
}

impl ValidationError {
    pub fn violations(&self) -> &[FieldViolation] {
        match self {
            Self::InvalidInput { violations } => violations,
        }
    }

    /// True if `field` is among the rejected fields.
    pub fn has_field(&self, field: &str) -> bool {
        self.violations().iter().any(|v| v.field == field)
    }
}

fn format_violations(violations: &[FieldViolation]) -> String {
    violations
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

/// Main error type for nac-tco operations
#[derive(Debug, Error)]
pub enum Error {
    /// Rejected organization inputs
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// A comparison was requested without any vendors
    #[error("No vendors selected for comparison")]
    EmptyComparison,

    /// A sensitivity sweep range that yields no usable points
    #[error("Invalid sweep range: {0}")]
    InvalidRange(String),

    /// Configuration file could not be read
    #[error("Failed to read {path}: {source}")]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// IO errors
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// TOML parse errors
    #[error(transparent)]
    Toml(#[from] toml::de::Error),

    /// JSON errors
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

/// Result type alias using our error type
pub type Result<T> = std::result::Result<T, Error>;
