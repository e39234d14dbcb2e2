//! Error types for the churn-serving crate.
//!
//! Separates per-request rejections (pipeline and model errors, invalid
//! vectors) from fatal startup conditions (unreadable or mismatched
//! artifacts). A startup error must prevent the service from accepting
//! requests.

use churn_model::ModelError;
use churn_pipeline::PipelineError;
use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for serving operations.
pub type ServingResult<T> = Result<T, ServingError>;

/// Errors that can occur while loading artifacts or serving predictions.
#[derive(Debug, Error)]
pub enum ServingError {
    /// The preprocessing pipeline rejected the record.
    #[error("Preprocessing rejected the record: {0}")]
    Pipeline(#[from] PipelineError),

    /// The scoring network failed on the feature vector.
    #[error("Scoring failed: {0}")]
    Model(#[from] ModelError),

    /// An artifact file could not be read.
    #[error("Failed to read artifact {path}: {source}")]
    ArtifactIo {
        /// Path of the artifact file
        path: PathBuf,
        /// The underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// An artifact file could not be parsed.
    #[error("Malformed artifact {path}: {source}")]
    ArtifactFormat {
        /// Path of the artifact file
        path: PathBuf,
        /// The underlying deserialization error
        #[source]
        source: serde_json::Error,
    },

    /// The pipeline and model artifacts carry different versions.
    #[error("Artifact version mismatch: pipeline is `{pipeline}`, model is `{model}`")]
    VersionMismatch {
        /// Version string of the pipeline artifact
        pipeline: String,
        /// Version string of the model artifact
        model: String,
    },

    /// The pipeline's feature layout disagrees with the model's input.
    #[error(
        "Feature layout mismatch: pipeline produces {pipeline_columns} columns, \
         model expects {model_inputs} inputs"
    )]
    FeatureLayoutMismatch {
        /// Number of feature columns the pipeline artifact declares
        pipeline_columns: usize,
        /// Input dimension the model artifact declares
        model_inputs: usize,
    },

    /// Configuration error.
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// Prediction failed on a structurally invalid feature vector.
    #[error("Prediction failed: {0}")]
    PredictionError(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version_mismatch_display() {
        let err = ServingError::VersionMismatch {
            pipeline: "V0".to_string(),
            model: "V1".to_string(),
        };
        let text = err.to_string();
        assert!(text.contains("V0"));
        assert!(text.contains("V1"));
    }

    #[test]
    fn test_pipeline_error_converts() {
        let err: ServingError = PipelineError::MissingValue {
            field: "tenure".to_string(),
        }
        .into();
        assert!(matches!(err, ServingError::Pipeline(_)));
    }
}
