//! Predict Command Implementation
//!
//! Scores one customer record against a pipeline/model artifact pair and
//! prints the churn label.

use anyhow::{Context, Result};
use churn_pipeline::CustomerRecord;
use churn_serving::{ChurnService, ServiceConfig};
use clap::Args;
use std::fs;
use std::path::PathBuf;
use tracing::info;

/// Predict the churn label for one customer record
///
/// The record file is a JSON object using the original wire field names
/// (`customerID`, `MonthlyCharges`, ...). Both artifacts must carry the
/// same version tag; a mismatched pair aborts before any scoring.
///
/// # Example
///
/// ```bash
/// churn predict \
///     --record customer.json \
///     --pipeline churn_preprocessing_V0.json \
///     --model fcnn_churn_V0.json
/// ```
#[derive(Args, Debug, Clone)]
pub struct PredictCommand {
    /// Path to the customer record JSON file
    #[arg(long, short = 'r')]
    pub record: PathBuf,

    /// Path to the fitted preprocessing artifact
    #[arg(long, env = "CHURN_PIPELINE_ARTIFACT")]
    pub pipeline: PathBuf,

    /// Path to the pretrained model-weights artifact
    #[arg(long, env = "CHURN_MODEL_ARTIFACT")]
    pub model: PathBuf,

    /// Also print the churn probability
    #[arg(long, default_value = "false")]
    pub probability: bool,
}

impl PredictCommand {
    /// Runs the predict command.
    pub fn run(&self) -> Result<()> {
        let config = ServiceConfig::builder()
            .pipeline_path(&self.pipeline)
            .model_path(&self.model)
            .build();
        let service = ChurnService::from_config(&config)
            .context("failed to build the churn service from the artifact pair")?;
        info!(version = service.version(), "service ready");

        let text = fs::read_to_string(&self.record)
            .with_context(|| format!("failed to read record file {}", self.record.display()))?;
        let record: CustomerRecord = serde_json::from_str(&text)
            .with_context(|| format!("failed to parse record file {}", self.record.display()))?;

        if self.probability {
            let probability = service.probability(&record)?;
            println!("{:.6}", probability);
        }
        let label = service.predict(&record)?;
        println!("{}", label);
        Ok(())
    }
}
