//! Churn CLI Library
//!
//! This crate provides the command-line interface for the churn
//! prediction service:
//!
//! - **Predict**: Score one customer record against an artifact pair
//! - **Check**: Verify that a pipeline/model artifact pair was fit together
//!
//! # Example
//!
//! ```bash
//! # Predict one record
//! churn predict --record customer.json \
//!     --pipeline churn_preprocessing_V0.json --model fcnn_churn_V0.json
//!
//! # Check an artifact pair
//! churn check --pipeline churn_preprocessing_V0.json --model fcnn_churn_V0.json
//! ```

pub mod commands;

use clap::{Parser, Subcommand};

pub use commands::{CheckCommand, PredictCommand};

/// Churn - customer churn prediction over a pretrained artifact pair
#[derive(Parser, Debug)]
#[command(name = "churn")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// The subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Available CLI commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Predict the churn label for one customer record
    Predict(PredictCommand),

    /// Verify that a pipeline/model artifact pair is compatible
    Check(CheckCommand),
}

/// Result type alias for CLI operations
pub type CliResult<T> = anyhow::Result<T>;
