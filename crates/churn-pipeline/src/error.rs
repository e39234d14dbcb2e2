//! Error types for the churn-pipeline crate.
//!
//! This module defines the rejection taxonomy for preprocessing: schema
//! violations, missing values, unknown categories, coercion failures, and
//! layout mismatches. Every rejection names the offending field so callers
//! can surface a precise client error.

use thiserror::Error;

/// Error type for preprocessing operations.
#[derive(Debug, Error, PartialEq)]
pub enum PipelineError {
    /// An input attribute violated its declared schema.
    #[error("Schema violation in field `{field}`: {message}")]
    SchemaViolation {
        /// The offending field
        field: String,
        /// Description of the violation
        message: String,
    },

    /// A required field was missing or empty after normalization.
    #[error("Missing value in field `{field}`")]
    MissingValue {
        /// The field whose value was missing
        field: String,
    },

    /// A categorical value was not in its fixed declared domain.
    #[error("Unknown category `{value}` for field `{field}`")]
    UnknownCategory {
        /// The field holding the value
        field: String,
        /// The out-of-domain value
        value: String,
    },

    /// A residual value could not be coerced to a numeric type.
    #[error("Cannot coerce value `{value}` in field `{field}` to a number")]
    CoercionFailure {
        /// The field holding the value
        field: String,
        /// The non-numeric value
        value: String,
    },

    /// The transformed frame does not match the fitted column layout.
    #[error("Feature layout mismatch: expected {expected} columns, got {actual}")]
    LayoutMismatch {
        /// The number of columns the fitted artifact expects
        expected: usize,
        /// The number of columns actually produced
        actual: usize,
    },

    /// Invalid fitted scale parameters.
    #[error("Invalid scale parameters for column `{column}`: {message}")]
    InvalidScale {
        /// The fitted column
        column: String,
        /// Description of the problem
        message: String,
    },
}

/// Result type alias for preprocessing operations.
pub type PipelineResult<T> = Result<T, PipelineError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_names_field() {
        let err = PipelineError::MissingValue {
            field: "InternetService".to_string(),
        };
        assert!(err.to_string().contains("InternetService"));

        let err = PipelineError::UnknownCategory {
            field: "PaymentMethod".to_string(),
            value: "Cash".to_string(),
        };
        assert!(err.to_string().contains("PaymentMethod"));
        assert!(err.to_string().contains("Cash"));
    }
}
