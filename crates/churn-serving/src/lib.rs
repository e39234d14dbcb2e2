//! Churn prediction serving: artifacts, predictor, and the composed
//! service.
//!
//! This crate loads the versioned pipeline/model artifact pair produced
//! offline, verifies the pair was fit together, and exposes
//! [`ChurnService`], the one-call surface mapping a customer record to a
//! "Yes"/"No" churn label. Artifacts are immutable for the process
//! lifetime; a mismatched or unreadable pair is a fatal startup error.
//!
//! # Quick start
//!
//! ```
//! use churn_serving::prelude::*;
//! use churn_serving::testing::{fixture_model_artifact, fixture_pipeline_artifact};
//! use churn_pipeline::testing::no_service_record;
//!
//! let service =
//!     ChurnService::from_artifacts(&fixture_pipeline_artifact(), &fixture_model_artifact())
//!         .unwrap();
//! let label = service.predict(&no_service_record()).unwrap();
//! assert_eq!(label, Label::No);
//! ```

#![warn(missing_docs)]

pub mod artifacts;
pub mod config;
pub mod error;
pub mod label;
pub mod predictor;
pub mod service;
pub mod testing;

pub use artifacts::{check_compatibility, ModelArtifact, PipelineArtifact};
pub use config::{ServiceConfig, ServiceConfigBuilder};
pub use error::{ServingError, ServingResult};
pub use label::Label;
pub use predictor::Predictor;
pub use service::ChurnService;

/// Commonly used types, importable in one line.
pub mod prelude {
    pub use crate::artifacts::{check_compatibility, ModelArtifact, PipelineArtifact};
    pub use crate::config::ServiceConfig;
    pub use crate::error::{ServingError, ServingResult};
    pub use crate::label::Label;
    pub use crate::predictor::Predictor;
    pub use crate::service::ChurnService;
}
