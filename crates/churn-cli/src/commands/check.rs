//! Check Command Implementation
//!
//! Loads a pipeline/model artifact pair and verifies the joint contract:
//! matching version tags and a feature layout the model was fit against.

use anyhow::{Context, Result};
use churn_serving::{check_compatibility, ModelArtifact, PipelineArtifact};
use clap::Args;
use std::path::PathBuf;

/// Verify that a pipeline/model artifact pair is compatible
///
/// # Example
///
/// ```bash
/// churn check \
///     --pipeline churn_preprocessing_V0.json \
///     --model fcnn_churn_V0.json
/// ```
#[derive(Args, Debug, Clone)]
pub struct CheckCommand {
    /// Path to the fitted preprocessing artifact
    #[arg(long, env = "CHURN_PIPELINE_ARTIFACT")]
    pub pipeline: PathBuf,

    /// Path to the pretrained model-weights artifact
    #[arg(long, env = "CHURN_MODEL_ARTIFACT")]
    pub model: PathBuf,
}

impl CheckCommand {
    /// Runs the check command.
    pub fn run(&self) -> Result<()> {
        let pipeline = PipelineArtifact::load(&self.pipeline)
            .context("failed to load the pipeline artifact")?;
        let model =
            ModelArtifact::load(&self.model).context("failed to load the model artifact")?;

        check_compatibility(&pipeline, &model)
            .context("artifact pair is not compatible")?;
        // Building both surfaces validates the parameters themselves.
        pipeline
            .build_scaler()
            .context("pipeline artifact parameters are invalid")?;
        let network = model
            .build_model()
            .context("model artifact weights are invalid")?;

        println!(
            "OK: version {} | {} feature columns | {} layers | input dim {}",
            pipeline.version,
            pipeline.feature_columns.len(),
            model.layers.len(),
            network.input_dim()
        );
        Ok(())
    }
}
