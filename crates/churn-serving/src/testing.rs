//! Artifact fixtures shared by tests.
//!
//! The fixture model is a hand-weighted 24 -> 24 -> 1 network over the
//! canonical feature layout: an identity hidden layer under ReLU (scaled
//! features are non-negative, so it passes them through) and an output
//! layer whose weights encode a simple churn heuristic: short tenure,
//! month-to-month contracts, and electronic checks push toward "Yes",
//! while long tenure and accumulated charges push toward "No". That keeps
//! end-to-end label expectations readable in tests.

use crate::artifacts::{ModelArtifact, PipelineArtifact};
use churn_model::{ActivationKind, LayerSpec};
use churn_pipeline::schema;
use churn_pipeline::testing::fitted_scaler;

/// Version tag shared by the fixture artifact pair.
pub const FIXTURE_VERSION: &str = "V0";

/// Fitted preprocessing artifact matching the canonical layout.
pub fn fixture_pipeline_artifact() -> PipelineArtifact {
    PipelineArtifact {
        version: FIXTURE_VERSION.to_string(),
        feature_columns: fitted_scaler().columns().to_vec(),
    }
}

/// Pretrained model artifact fit against the fixture pipeline.
pub fn fixture_model_artifact() -> ModelArtifact {
    let dim = schema::FEATURE_DIM;

    // Identity hidden layer.
    let mut hidden = vec![0.0f32; dim * dim];
    for i in 0..dim {
        hidden[i * dim + i] = 1.0;
    }

    let mut output = vec![0.0f32; dim];
    let columns = schema::feature_columns();
    for (i, name) in columns.iter().enumerate() {
        output[i] = match name.as_str() {
            "tenure" => -2.0,
            "InternetService" => 0.5,
            "MonthlyCharges" => 1.0,
            "TotalCharges" => -1.0,
            "Contract_Month-to-month" => 1.0,
            "Contract_Two year" => -1.0,
            "PaymentMethod_Electronic check" => 0.5,
            _ => 0.0,
        };
    }

    ModelArtifact {
        version: FIXTURE_VERSION.to_string(),
        input_dim: dim,
        layers: vec![
            LayerSpec {
                out_features: dim,
                activation: ActivationKind::ReLU,
                weights: hidden,
                bias: vec![0.0; dim],
            },
            LayerSpec {
                out_features: 1,
                activation: ActivationKind::None,
                weights: output,
                bias: vec![-1.5],
            },
        ],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::artifacts::check_compatibility;

    #[test]
    fn test_fixture_pair_is_compatible() {
        let pipeline = fixture_pipeline_artifact();
        let model = fixture_model_artifact();
        assert!(check_compatibility(&pipeline, &model).is_ok());
        assert_eq!(model.layers[0].weights.len(), 24 * 24);
        assert_eq!(model.layers[1].weights.len(), 24);
    }
}
