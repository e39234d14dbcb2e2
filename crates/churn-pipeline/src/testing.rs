//! Record and scaler fixtures shared by tests.
//!
//! The two records mirror the worked examples the scoring artifact was
//! validated against: a mid-tenure DSL customer and a minimal no-service
//! month-to-month customer.

use crate::record::CustomerRecord;
use crate::scale::{ColumnScale, MinMaxScaler};
use crate::schema;

/// A valid mid-tenure DSL customer on a one-year contract.
pub fn sample_record() -> CustomerRecord {
    CustomerRecord {
        customer_id: "0000-TEST".to_string(),
        gender: "Male".to_string(),
        senior_citizen: "No".to_string(),
        partner: "No".to_string(),
        dependents: "Yes".to_string(),
        tenure: 5,
        phone_service: "Yes".to_string(),
        multiple_lines: "No".to_string(),
        internet_service: "DSL".to_string(),
        online_security: "No".to_string(),
        online_backup: "No".to_string(),
        device_protection: "No".to_string(),
        tech_support: "No".to_string(),
        streaming_tv: "No".to_string(),
        streaming_movies: "Yes".to_string(),
        contract: "One year".to_string(),
        paperless_billing: "Yes".to_string(),
        payment_method: "Bank transfer (automatic)".to_string(),
        monthly_charges: 15.0,
        total_charges: 75.0,
    }
}

/// A short-tenure customer with phone service only: every internet add-on
/// is "No internet service", month-to-month contract, mailed check.
pub fn no_service_record() -> CustomerRecord {
    CustomerRecord {
        customer_id: "0001-TEST".to_string(),
        gender: "Male".to_string(),
        senior_citizen: "No".to_string(),
        partner: "No".to_string(),
        dependents: "No".to_string(),
        tenure: 1,
        phone_service: "Yes".to_string(),
        multiple_lines: "No".to_string(),
        internet_service: "No".to_string(),
        online_security: "No internet service".to_string(),
        online_backup: "No internet service".to_string(),
        device_protection: "No internet service".to_string(),
        tech_support: "No internet service".to_string(),
        streaming_tv: "No internet service".to_string(),
        streaming_movies: "No internet service".to_string(),
        contract: "Month-to-month".to_string(),
        paperless_billing: "No".to_string(),
        payment_method: "Mailed check".to_string(),
        monthly_charges: 20.15,
        total_charges: 20.15,
    }
}

/// A long-tenure multi-service customer on a one-year contract.
pub fn long_tenure_record() -> CustomerRecord {
    CustomerRecord {
        customer_id: "0002-TEST".to_string(),
        gender: "Female".to_string(),
        senior_citizen: "No".to_string(),
        partner: "Yes".to_string(),
        dependents: "Yes".to_string(),
        tenure: 60,
        phone_service: "Yes".to_string(),
        multiple_lines: "Yes".to_string(),
        internet_service: "Fiber optic".to_string(),
        online_security: "Yes".to_string(),
        online_backup: "Yes".to_string(),
        device_protection: "Yes".to_string(),
        tech_support: "Yes".to_string(),
        streaming_tv: "Yes".to_string(),
        streaming_movies: "Yes".to_string(),
        contract: "One year".to_string(),
        paperless_billing: "Yes".to_string(),
        payment_method: "Credit card (automatic)".to_string(),
        monthly_charges: 105.5,
        total_charges: 6330.0,
    }
}

/// Fitted scale parameters matching the canonical feature layout.
///
/// Continuous columns carry the ranges observed during the offline fit;
/// encoded columns are 0/1 indicators (identity under min-max) and the
/// ordinal internet tier spans 0..=2.
pub fn fitted_scaler() -> MinMaxScaler {
    let columns = schema::feature_columns()
        .into_iter()
        .map(|name| {
            let (min, max) = match name.as_str() {
                "tenure" => (0.0, 72.0),
                "MonthlyCharges" => (0.0, 120.0),
                "TotalCharges" => (0.0, 8700.0),
                "InternetService" => (0.0, 2.0),
                _ => (0.0, 1.0),
            };
            ColumnScale::new(name, min, max)
        })
        .collect();
    MinMaxScaler::new(columns).expect("fixture scale parameters are valid")
}
