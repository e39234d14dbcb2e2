//! End-to-end pipeline properties: fixed layout, determinism, and the
//! rejection contract.

use churn_pipeline::prelude::*;
use churn_pipeline::schema;
use churn_pipeline::testing::{fitted_scaler, no_service_record, sample_record};

fn standard() -> Preprocessor {
    Preprocessor::standard(fitted_scaler())
}

#[test]
fn valid_record_yields_fixed_length_vector() {
    let vector = standard().transform_record(&sample_record()).unwrap();
    assert_eq!(vector.len(), schema::FEATURE_DIM);
}

#[test]
fn transform_is_deterministic() {
    let preprocessor = standard();
    let record = sample_record();
    let first = preprocessor.transform_record(&record).unwrap();
    let second = preprocessor.transform_record(&record).unwrap();
    assert_eq!(first, second);
}

#[test]
fn no_service_record_encodes_expected_positions() {
    let vector = standard().transform_record(&no_service_record()).unwrap();
    let values = vector.as_slice();

    // tenure = 1 scaled over [0, 72]
    assert!((values[4] - 1.0 / 72.0).abs() < 1e-6);
    // PhoneService = Yes
    assert_eq!(values[5], 1.0);
    // InternetService = No, ordinal 0 over [0, 2]
    assert_eq!(values[7], 0.0);
    // every internet add-on collapses to 0
    for position in 8..=13 {
        assert_eq!(values[position], 0.0);
    }
    // Contract = Month-to-month
    assert_eq!(&values[17..20], &[1.0, 0.0, 0.0]);
    // PaymentMethod = Mailed check
    assert_eq!(&values[20..24], &[0.0, 1.0, 0.0, 0.0]);
}

#[test]
fn zero_tenure_and_zero_charges_pass() {
    let mut record = no_service_record();
    record.tenure = 0;
    record.monthly_charges = 0.0;
    record.total_charges = 0.0;
    let vector = standard().transform_record(&record).unwrap();
    assert_eq!(vector.as_slice()[4], 0.0);
    assert_eq!(vector.as_slice()[15], 0.0);
}

#[test]
fn missing_internet_service_is_rejected() {
    let mut record = sample_record();
    record.internet_service = "".to_string();
    let err = standard().transform_record(&record).unwrap_err();
    assert_eq!(
        err,
        PipelineError::MissingValue {
            field: "InternetService".to_string()
        }
    );
}

#[test]
fn unseen_payment_method_is_rejected_not_zero_filled() {
    let mut record = sample_record();
    record.payment_method = "Cash".to_string();
    let err = standard().transform_record(&record).unwrap_err();
    assert!(matches!(
        err,
        PipelineError::SchemaViolation { ref field, .. } if field == "PaymentMethod"
    ));
}

#[test]
fn encoded_columns_follow_canonical_order() {
    let frame = standard().transform(sample_record().to_frame()).unwrap();
    let expected = schema::feature_columns();
    let actual: Vec<String> = frame
        .column_names()
        .into_iter()
        .map(|s| s.to_string())
        .collect();
    assert_eq!(actual, expected);
}
