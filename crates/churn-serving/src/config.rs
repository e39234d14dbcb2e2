//! Service configuration.

use crate::error::{ServingError, ServingResult};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Configuration for constructing a churn service.
///
/// # Example
///
/// ```
/// use churn_serving::config::ServiceConfig;
///
/// let config = ServiceConfig::builder()
///     .pipeline_path("artifacts/churn_preprocessing_V0.json")
///     .model_path("artifacts/fcnn_churn_V0.json")
///     .build();
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServiceConfig {
    /// Path to the fitted preprocessing artifact.
    pub pipeline_path: PathBuf,
    /// Path to the pretrained model-weights artifact.
    pub model_path: PathBuf,
}

impl ServiceConfig {
    /// Creates a new configuration builder.
    pub fn builder() -> ServiceConfigBuilder {
        ServiceConfigBuilder::default()
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ServingError::ConfigError`] if either path is empty.
    pub fn validate(&self) -> ServingResult<()> {
        if self.pipeline_path.as_os_str().is_empty() {
            return Err(ServingError::ConfigError(
                "pipeline artifact path is empty".to_string(),
            ));
        }
        if self.model_path.as_os_str().is_empty() {
            return Err(ServingError::ConfigError(
                "model artifact path is empty".to_string(),
            ));
        }
        Ok(())
    }
}

/// Builder for [`ServiceConfig`].
#[derive(Debug, Clone, Default)]
pub struct ServiceConfigBuilder {
    pipeline_path: PathBuf,
    model_path: PathBuf,
}

impl ServiceConfigBuilder {
    /// Sets the path to the fitted preprocessing artifact.
    pub fn pipeline_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.pipeline_path = path.into();
        self
    }

    /// Sets the path to the pretrained model-weights artifact.
    pub fn model_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.model_path = path.into();
        self
    }

    /// Builds the configuration.
    pub fn build(self) -> ServiceConfig {
        ServiceConfig {
            pipeline_path: self.pipeline_path,
            model_path: self.model_path,
        }
    }
}
