//! Error types for the churn-model crate.

use thiserror::Error;

/// Error type for model operations.
#[derive(Debug, Error, PartialEq)]
pub enum ModelError {
    /// Shape mismatch between expected and actual tensor shapes.
    #[error("Shape mismatch: expected {expected:?}, got {actual:?}")]
    ShapeMismatch {
        /// The expected shape
        expected: Vec<usize>,
        /// The actual shape that was provided
        actual: Vec<usize>,
    },

    /// Invalid input dimension for a layer.
    #[error("Invalid input dimension: expected {expected}, got {actual}")]
    InvalidInputDimension {
        /// The expected input dimension
        expected: usize,
        /// The actual input dimension
        actual: usize,
    },

    /// Configuration error while building a network.
    #[error("Configuration error: {message}")]
    ConfigError {
        /// Description of the configuration error
        message: String,
    },

    /// Weight data does not match the declared layer shape.
    #[error("Invalid weights for layer {layer}: {message}")]
    InvalidWeights {
        /// Index of the offending layer
        layer: usize,
        /// Description of the problem
        message: String,
    },
}

/// Result type alias for model operations.
pub type ModelResult<T> = Result<T, ModelError>;
