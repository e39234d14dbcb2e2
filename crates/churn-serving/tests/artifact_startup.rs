//! Startup contract: artifacts load read-only, and a missing or
//! mismatched pair must prevent the service from coming up.

use churn_serving::testing::{fixture_model_artifact, fixture_pipeline_artifact};
use churn_serving::{ChurnService, ModelArtifact, PipelineArtifact, ServiceConfig, ServingError};
use tempfile::TempDir;

fn write_fixture_pair(dir: &TempDir) -> ServiceConfig {
    let pipeline_path = dir.path().join("churn_preprocessing_V0.json");
    let model_path = dir.path().join("fcnn_churn_V0.json");
    fixture_pipeline_artifact().save(&pipeline_path).unwrap();
    fixture_model_artifact().save(&model_path).unwrap();
    ServiceConfig::builder()
        .pipeline_path(pipeline_path)
        .model_path(model_path)
        .build()
}

#[test]
fn service_builds_from_saved_artifact_pair() {
    let dir = TempDir::new().unwrap();
    let config = write_fixture_pair(&dir);
    let service = ChurnService::from_config(&config).unwrap();
    assert_eq!(service.version(), "V0");
}

#[test]
fn artifact_roundtrip_preserves_contents() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("pipeline.json");
    let original = fixture_pipeline_artifact();
    original.save(&path).unwrap();

    let loaded = PipelineArtifact::load(&path).unwrap();
    assert_eq!(loaded.version, original.version);
    assert_eq!(loaded.feature_columns, original.feature_columns);
}

#[test]
fn missing_artifact_file_is_fatal() {
    let dir = TempDir::new().unwrap();
    let config = ServiceConfig::builder()
        .pipeline_path(dir.path().join("absent.json"))
        .model_path(dir.path().join("also_absent.json"))
        .build();
    assert!(matches!(
        ChurnService::from_config(&config).unwrap_err(),
        ServingError::ArtifactIo { .. }
    ));
}

#[test]
fn malformed_artifact_file_is_fatal() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("broken.json");
    std::fs::write(&path, "{ not json").unwrap();
    assert!(matches!(
        ModelArtifact::load(&path).unwrap_err(),
        ServingError::ArtifactFormat { .. }
    ));
}

#[test]
fn mismatched_versions_are_fatal() {
    let pipeline = fixture_pipeline_artifact();
    let mut model = fixture_model_artifact();
    model.version = "V1".to_string();
    assert!(matches!(
        ChurnService::from_artifacts(&pipeline, &model).unwrap_err(),
        ServingError::VersionMismatch { .. }
    ));
}

#[test]
fn mismatched_input_dim_is_fatal() {
    let pipeline = fixture_pipeline_artifact();
    let mut model = fixture_model_artifact();
    model.input_dim = 23;
    assert!(matches!(
        ChurnService::from_artifacts(&pipeline, &model).unwrap_err(),
        ServingError::FeatureLayoutMismatch { .. }
    ));
}
