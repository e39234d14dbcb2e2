//! Feature vector scoring.
//!
//! The [`Predictor`] owns the pretrained network and maps one feature
//! vector to a churn probability and label: forward pass to a single
//! logit, sigmoid to `[0, 1]`, threshold at 0.5 with ties rounding to
//! "Yes". Scoring is a pure function of the vector; there are no retries
//! and no partial results.

use crate::error::{ServingError, ServingResult};
use crate::label::Label;
use churn_model::{sigmoid, Fcnn, Layer, Tensor};
use churn_pipeline::FeatureVector;
use tracing::debug;

/// Scores feature vectors with a pretrained network.
#[derive(Debug)]
pub struct Predictor {
    model: Fcnn,
}

impl Predictor {
    /// Creates a predictor around a pretrained network.
    ///
    /// # Errors
    ///
    /// Returns [`ServingError::ConfigError`] unless the network emits a
    /// single logit.
    pub fn new(model: Fcnn) -> ServingResult<Self> {
        if model.output_dim() != 1 {
            return Err(ServingError::ConfigError(format!(
                "scoring network must emit a single logit, emits {}",
                model.output_dim()
            )));
        }
        Ok(Self { model })
    }

    /// Returns the input dimension the network expects.
    pub fn input_dim(&self) -> usize {
        self.model.input_dim()
    }

    /// Computes the churn probability for one feature vector.
    ///
    /// # Errors
    ///
    /// Returns [`ServingError::PredictionError`] if the vector length
    /// does not match the network's input dimension.
    pub fn probability(&self, vector: &FeatureVector) -> ServingResult<f32> {
        if vector.len() != self.model.input_dim() {
            return Err(ServingError::PredictionError(format!(
                "feature vector has {} values, network expects {}",
                vector.len(),
                self.model.input_dim()
            )));
        }
        let input = Tensor::row(vector.as_slice());
        let output = self.model.forward(&input)?;
        let logit = output.data()[0];
        let probability = sigmoid(logit);
        debug!(logit, probability, "scored feature vector");
        Ok(probability)
    }

    /// Maps one feature vector to its churn label.
    ///
    /// # Errors
    ///
    /// See [`Predictor::probability`].
    pub fn predict(&self, vector: &FeatureVector) -> ServingResult<Label> {
        Ok(Label::from_probability(self.probability(vector)?))
    }
}
