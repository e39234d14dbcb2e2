//! Persisted pipeline and model artifacts.
//!
//! Both artifacts are fit offline, serialized as JSON, and loaded
//! read-only at process start. They are versioned together: the feature
//! vector layout is a joint contract between the fitted scale parameters
//! and the model weights, so loading a mismatched pair is a fatal startup
//! error, checked by [`check_compatibility`].

use crate::error::{ServingError, ServingResult};
use churn_model::{Fcnn, FcnnConfig, LayerSpec};
use churn_pipeline::{ColumnScale, MinMaxScaler};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use tracing::info;

/// Fitted preprocessing parameters, produced offline.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PipelineArtifact {
    /// Version tag shared with the model artifact fit against the same
    /// feature layout.
    pub version: String,
    /// Per-column min-max parameters, in canonical feature order.
    pub feature_columns: Vec<ColumnScale>,
}

impl PipelineArtifact {
    /// Loads the artifact from a JSON file.
    ///
    /// # Errors
    ///
    /// Returns [`ServingError::ArtifactIo`] if the file cannot be read
    /// and [`ServingError::ArtifactFormat`] if it cannot be parsed.
    pub fn load(path: impl AsRef<Path>) -> ServingResult<Self> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|source| ServingError::ArtifactIo {
            path: path.to_path_buf(),
            source,
        })?;
        let artifact: Self =
            serde_json::from_str(&text).map_err(|source| ServingError::ArtifactFormat {
                path: path.to_path_buf(),
                source,
            })?;
        info!(
            version = %artifact.version,
            columns = artifact.feature_columns.len(),
            "loaded pipeline artifact"
        );
        Ok(artifact)
    }

    /// Writes the artifact as pretty-printed JSON.
    ///
    /// Used by offline export tooling and test fixtures; the serving path
    /// never writes artifacts.
    ///
    /// # Errors
    ///
    /// Returns [`ServingError::ArtifactIo`] on write failure.
    pub fn save(&self, path: impl AsRef<Path>) -> ServingResult<()> {
        let path = path.as_ref();
        let text = serde_json::to_string_pretty(self).map_err(|source| {
            ServingError::ArtifactFormat {
                path: path.to_path_buf(),
                source,
            }
        })?;
        fs::write(path, text).map_err(|source| ServingError::ArtifactIo {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Builds the immutable scaler stage from the fitted parameters.
    ///
    /// # Errors
    ///
    /// Returns a pipeline error if the parameters are invalid or do not
    /// cover the canonical feature layout.
    pub fn build_scaler(&self) -> ServingResult<MinMaxScaler> {
        let scaler = MinMaxScaler::new(self.feature_columns.clone())?;
        let expected = churn_pipeline::schema::feature_columns();
        let actual = scaler.column_names();
        if actual != expected.iter().map(String::as_str).collect::<Vec<_>>() {
            return Err(ServingError::ConfigError(format!(
                "pipeline artifact columns do not match the canonical feature \
                 layout (artifact has {} columns, layout has {})",
                actual.len(),
                expected.len()
            )));
        }
        Ok(scaler)
    }
}

/// Pretrained model weights, produced offline.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModelArtifact {
    /// Version tag shared with the pipeline artifact.
    pub version: String,
    /// Input dimension the network was fit against.
    pub input_dim: usize,
    /// Per-layer weights in forward order.
    pub layers: Vec<LayerSpec>,
}

impl ModelArtifact {
    /// Loads the artifact from a JSON file.
    ///
    /// # Errors
    ///
    /// Returns [`ServingError::ArtifactIo`] if the file cannot be read
    /// and [`ServingError::ArtifactFormat`] if it cannot be parsed.
    pub fn load(path: impl AsRef<Path>) -> ServingResult<Self> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|source| ServingError::ArtifactIo {
            path: path.to_path_buf(),
            source,
        })?;
        let artifact: Self =
            serde_json::from_str(&text).map_err(|source| ServingError::ArtifactFormat {
                path: path.to_path_buf(),
                source,
            })?;
        info!(
            version = %artifact.version,
            input_dim = artifact.input_dim,
            layers = artifact.layers.len(),
            "loaded model artifact"
        );
        Ok(artifact)
    }

    /// Writes the artifact as pretty-printed JSON.
    ///
    /// # Errors
    ///
    /// Returns [`ServingError::ArtifactIo`] on write failure.
    pub fn save(&self, path: impl AsRef<Path>) -> ServingResult<()> {
        let path = path.as_ref();
        let text = serde_json::to_string_pretty(self).map_err(|source| {
            ServingError::ArtifactFormat {
                path: path.to_path_buf(),
                source,
            }
        })?;
        fs::write(path, text).map_err(|source| ServingError::ArtifactIo {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Builds the immutable network from the pretrained weights.
    ///
    /// # Errors
    ///
    /// Returns a model error if the weights disagree with the declared
    /// architecture.
    pub fn build_model(&self) -> ServingResult<Fcnn> {
        let mut config = FcnnConfig::new(self.input_dim);
        config.layers = self.layers.clone();
        Ok(config.build()?)
    }
}

/// Verifies that a pipeline/model artifact pair was fit together.
///
/// # Errors
///
/// Returns [`ServingError::VersionMismatch`] on differing version tags
/// and [`ServingError::FeatureLayoutMismatch`] when the pipeline's column
/// count is not the model's input dimension. Either is fatal at startup.
pub fn check_compatibility(
    pipeline: &PipelineArtifact,
    model: &ModelArtifact,
) -> ServingResult<()> {
    if pipeline.version != model.version {
        return Err(ServingError::VersionMismatch {
            pipeline: pipeline.version.clone(),
            model: model.version.clone(),
        });
    }
    if pipeline.feature_columns.len() != model.input_dim {
        return Err(ServingError::FeatureLayoutMismatch {
            pipeline_columns: pipeline.feature_columns.len(),
            model_inputs: model.input_dim,
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{fixture_model_artifact, fixture_pipeline_artifact};

    #[test]
    fn test_compatible_fixtures() {
        let pipeline = fixture_pipeline_artifact();
        let model = fixture_model_artifact();
        assert!(check_compatibility(&pipeline, &model).is_ok());
        assert!(pipeline.build_scaler().is_ok());
        assert!(model.build_model().is_ok());
    }

    #[test]
    fn test_version_mismatch_is_fatal() {
        let pipeline = fixture_pipeline_artifact();
        let mut model = fixture_model_artifact();
        model.version = "V1".to_string();
        assert!(matches!(
            check_compatibility(&pipeline, &model).unwrap_err(),
            ServingError::VersionMismatch { .. }
        ));
    }

    #[test]
    fn test_layout_mismatch_is_fatal() {
        let mut pipeline = fixture_pipeline_artifact();
        pipeline.feature_columns.pop();
        let model = fixture_model_artifact();
        assert!(matches!(
            check_compatibility(&pipeline, &model).unwrap_err(),
            ServingError::FeatureLayoutMismatch { .. }
        ));
    }

    #[test]
    fn test_truncated_scaler_fails_layout_check() {
        let mut pipeline = fixture_pipeline_artifact();
        pipeline.feature_columns.pop();
        assert!(pipeline.build_scaler().is_err());
    }
}
