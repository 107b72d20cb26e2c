//! Error types for scoring input validation.

use thiserror::Error;

/// Errors that occur during input object construction.
///
/// Scoring itself is total; only the `try_new` constructors on input
/// structs produce these.
#[derive(Debug, Clone, Error)]
pub enum ValidationError {
    #[error("Field '{field}' must be positive, got {actual}")]
    NonPositive { field: String, actual: f64 },

    #[error("Field '{field}' must be between {min} and {max}, got {actual}")]
    OutOfRange {
        field: String,
        min: f64,
        max: f64,
        actual: f64,
    },
}

impl ValidationError {
    /// Creates a non-positive field validation error.
    pub fn non_positive(field: impl Into<String>, actual: f64) -> Self {
        ValidationError::NonPositive {
            field: field.into(),
            actual,
        }
    }

    /// Creates an out of range validation error.
    pub fn out_of_range(field: impl Into<String>, min: f64, max: f64, actual: f64) -> Self {
        ValidationError::OutOfRange {
            field: field.into(),
            min,
            max,
            actual,
        }
    }
}
