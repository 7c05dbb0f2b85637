// src/error.rs
use std::fmt;

/// Error types for the fd-boundary library
///
/// Payoff evaluation and the plain constructors never fail. These errors are
/// only produced by the strict constructors and by parsing option kinds.
#[derive(Debug, Clone, PartialEq)]
pub enum PayoffError {
    /// Invalid contract parameter values
    InvalidParameters {
        parameter: String,
        value: f64,
        constraint: String,
    },

    /// Unrecognised option kind tag
    UnknownOptionKind { input: String },
}

impl fmt::Display for PayoffError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PayoffError::InvalidParameters {
                parameter,
                value,
                constraint,
            } => {
                write!(
                    f,
                    "Invalid parameter '{}' = {}: {}",
                    parameter, value, constraint
                )
            }
            PayoffError::UnknownOptionKind { input } => {
                write!(
                    f,
                    "Unknown option kind '{}': expected 'put' or 'call'",
                    input
                )
            }
        }
    }
}

impl std::error::Error for PayoffError {}

/// Result type alias for fd-boundary operations
pub type PayoffResult<T> = Result<T, PayoffError>;

/// Validation utilities
pub mod validation {
    use super::{PayoffError, PayoffResult};

    /// Validate that a parameter is positive
    pub fn validate_positive(name: &str, value: f64) -> PayoffResult<()> {
        validate_finite(name, value)?;
        if value <= 0.0 {
            Err(PayoffError::InvalidParameters {
                parameter: name.to_string(),
                value,
                constraint: "must be positive (> 0)".to_string(),
            })
        } else {
            Ok(())
        }
    }

    /// Validate that a parameter is non-negative
    pub fn validate_non_negative(name: &str, value: f64) -> PayoffResult<()> {
        validate_finite(name, value)?;
        if value < 0.0 {
            Err(PayoffError::InvalidParameters {
                parameter: name.to_string(),
                value,
                constraint: "must be non-negative (≥ 0)".to_string(),
            })
        } else {
            Ok(())
        }
    }

    /// Validate that a value is finite and not NaN
    pub fn validate_finite(name: &str, value: f64) -> PayoffResult<()> {
        if !value.is_finite() {
            Err(PayoffError::InvalidParameters {
                parameter: name.to_string(),
                value,
                constraint: "must be finite (not NaN or infinite)".to_string(),
            })
        } else {
            Ok(())
        }
    }
}
