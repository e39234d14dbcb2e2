//! The composed churn prediction service.
//!
//! [`ChurnService`] ties the preprocessing pipeline and the predictor
//! together behind one immutable object, constructed once at process
//! start from a versioned artifact pair. All fitted state is read-only
//! after construction, so the service can be shared across concurrent
//! callers behind an `Arc` without any request-level locking.

use crate::artifacts::{check_compatibility, ModelArtifact, PipelineArtifact};
use crate::config::ServiceConfig;
use crate::error::ServingResult;
use crate::label::Label;
use crate::predictor::Predictor;
use churn_pipeline::{CustomerRecord, FeatureVector, Preprocessor};
use tracing::{debug, info};

/// One-record churn prediction: preprocess, score, threshold.
pub struct ChurnService {
    preprocessor: Preprocessor,
    predictor: Predictor,
    version: String,
}

impl std::fmt::Debug for ChurnService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ChurnService")
            .field("version", &self.version)
            .finish_non_exhaustive()
    }
}

impl ChurnService {
    /// Loads both artifacts from the configured paths and builds the
    /// service.
    ///
    /// # Errors
    ///
    /// Any failure here is fatal for the process: unreadable or
    /// malformed artifact files, a version mismatch between the pair, or
    /// a feature layout disagreement.
    pub fn from_config(config: &ServiceConfig) -> ServingResult<Self> {
        config.validate()?;
        let pipeline = PipelineArtifact::load(&config.pipeline_path)?;
        let model = ModelArtifact::load(&config.model_path)?;
        Self::from_artifacts(&pipeline, &model)
    }

    /// Builds the service from already-loaded artifacts.
    ///
    /// # Errors
    ///
    /// Returns a fatal startup error if the artifacts were not fit
    /// together or either one is internally invalid.
    pub fn from_artifacts(
        pipeline: &PipelineArtifact,
        model: &ModelArtifact,
    ) -> ServingResult<Self> {
        check_compatibility(pipeline, model)?;
        let preprocessor = Preprocessor::standard(pipeline.build_scaler()?);
        let predictor = Predictor::new(model.build_model()?)?;
        info!(version = %pipeline.version, "churn service ready");
        Ok(Self {
            preprocessor,
            predictor,
            version: pipeline.version.clone(),
        })
    }

    /// Builds the service from preconstructed parts.
    ///
    /// Intended for tests injecting fixture pipelines and predictors.
    pub fn from_parts(
        preprocessor: Preprocessor,
        predictor: Predictor,
        version: impl Into<String>,
    ) -> Self {
        Self {
            preprocessor,
            predictor,
            version: version.into(),
        }
    }

    /// Returns the artifact version the service was built from.
    pub fn version(&self) -> &str {
        &self.version
    }

    /// Transforms one record into its feature vector without scoring it.
    ///
    /// # Errors
    ///
    /// Returns the pipeline's rejection for invalid records.
    pub fn featurize(&self, record: &CustomerRecord) -> ServingResult<FeatureVector> {
        Ok(self.preprocessor.transform_record(record)?)
    }

    /// Computes the churn probability for one record.
    ///
    /// # Errors
    ///
    /// Returns a rejection from preprocessing or scoring.
    pub fn probability(&self, record: &CustomerRecord) -> ServingResult<f32> {
        let vector = self.featurize(record)?;
        self.predictor.probability(&vector)
    }

    /// Predicts the churn label for one record.
    ///
    /// Deterministic: the same record always produces the same vector,
    /// probability, and label.
    ///
    /// # Errors
    ///
    /// Returns a rejection from preprocessing or scoring; the caller
    /// never receives an empty or partial result.
    pub fn predict(&self, record: &CustomerRecord) -> ServingResult<Label> {
        let vector = self.featurize(record)?;
        let label = self.predictor.predict(&vector)?;
        debug!(customer = %record.customer_id, %label, "prediction served");
        Ok(label)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_send_sync<T: Send + Sync>() {}

    #[test]
    fn test_service_is_shareable() {
        assert_send_sync::<ChurnService>();
    }
}
