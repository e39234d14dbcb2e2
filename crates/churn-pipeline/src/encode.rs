//! Categorical feature encoding.
//!
//! [`FeatureEncoder`] reproduces the training-time encoding exactly:
//!
//! 1. `gender` maps through a fixed two-entry lookup.
//! 2. `Contract` and `PaymentMethod` expand one-hot against their fixed
//!    declared category lists, in that order; indicator columns append at
//!    the end of the frame and the source column is dropped, matching the
//!    column order the scoring artifact was fit against.
//! 3. `InternetService` encodes ordinally via the fixed rank table.
//! 4. Every remaining text column maps through the exact-match Yes/No
//!    table (the "No internet service" / "No phone service" variants
//!    collapse to 0).
//!
//! Unseen categories are rejected, never zero-filled: the input schema
//! enforces enumeration membership at the boundary, so an unknown value
//! here is a contract violation. Cells that are already numeric are left
//! untouched, which makes a second application of the encoder a no-op.

use crate::error::{PipelineError, PipelineResult};
use crate::frame::{Cell, Frame};
use crate::schema;
use crate::stage::Stage;

/// Encodes categorical attributes into fixed numeric codes.
#[derive(Debug, Clone, Copy, Default)]
pub struct FeatureEncoder;

impl FeatureEncoder {
    /// Creates the encoder stage.
    pub fn new() -> Self {
        Self
    }

    fn encode_lookup(
        &self,
        frame: &mut Frame,
        field: &str,
        codes: &[(&str, f64)],
    ) -> PipelineResult<()> {
        let cell = match frame.get(field) {
            Some(cell) => cell,
            None => {
                return Err(PipelineError::SchemaViolation {
                    field: field.to_string(),
                    message: "column absent before encoding".to_string(),
                })
            }
        };
        let text = match cell {
            // Already encoded; leave in place.
            Cell::Number(_) => return Ok(()),
            Cell::Text(s) => s.clone(),
        };
        let code = codes
            .iter()
            .find(|(name, _)| *name == text)
            .map(|(_, code)| *code)
            .ok_or_else(|| PipelineError::UnknownCategory {
                field: field.to_string(),
                value: text.clone(),
            })?;
        frame.set(field, Cell::Number(code));
        Ok(())
    }

    fn encode_one_hot(
        &self,
        frame: &mut Frame,
        field: &str,
        categories: &[&str],
    ) -> PipelineResult<()> {
        if !frame.contains(field) {
            // Already expanded: the stage must be idempotent, so verify
            // the indicator columns exist and leave the frame unchanged.
            for category in categories {
                let column = schema::one_hot_column(field, category);
                if !frame.contains(&column) {
                    return Err(PipelineError::SchemaViolation {
                        field: field.to_string(),
                        message: format!("neither source column nor indicator `{}` present", column),
                    });
                }
            }
            return Ok(());
        }

        let value = match frame.get(field) {
            Some(Cell::Text(s)) => s.clone(),
            _ => {
                return Err(PipelineError::SchemaViolation {
                    field: field.to_string(),
                    message: "expected a categorical text value".to_string(),
                })
            }
        };

        if !categories.contains(&value.as_str()) {
            return Err(PipelineError::UnknownCategory {
                field: field.to_string(),
                value,
            });
        }

        frame.remove(field);
        for category in categories {
            let indicator = if *category == value { 1.0 } else { 0.0 };
            frame.push(schema::one_hot_column(field, category), Cell::Number(indicator));
        }
        Ok(())
    }

    fn encode_remaining_binary(&self, frame: &mut Frame) -> PipelineResult<()> {
        let mut updates: Vec<(String, f64)> = Vec::new();
        for (name, cell) in frame.iter() {
            if let Cell::Text(text) = cell {
                let code = schema::BINARY_CODES
                    .iter()
                    .find(|(value, _)| value == text)
                    .map(|(_, code)| *code)
                    .ok_or_else(|| PipelineError::UnknownCategory {
                        field: name.to_string(),
                        value: text.clone(),
                    })?;
                updates.push((name.to_string(), code));
            }
        }
        for (name, code) in updates {
            frame.set(&name, Cell::Number(code));
        }
        Ok(())
    }
}

impl Stage for FeatureEncoder {
    fn apply(&self, mut frame: Frame) -> PipelineResult<Frame> {
        self.encode_lookup(&mut frame, "gender", schema::GENDER_CODES)?;
        self.encode_one_hot(&mut frame, "Contract", schema::CONTRACT_CATEGORIES)?;
        self.encode_one_hot(&mut frame, "PaymentMethod", schema::PAYMENT_METHOD_CATEGORIES)?;
        self.encode_lookup(&mut frame, "InternetService", schema::INTERNET_SERVICE_RANKS)?;
        self.encode_remaining_binary(&mut frame)?;
        Ok(frame)
    }

    fn name(&self) -> &str {
        "FeatureEncoder"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::FEATURE_DIM;
    use crate::stage::DropColumns;
    use crate::testing::sample_record;

    fn encoded_sample() -> Frame {
        let frame = sample_record().to_frame();
        let frame = DropColumns::new([schema::CUSTOMER_ID]).apply(frame).unwrap();
        FeatureEncoder::new().apply(frame).unwrap()
    }

    #[test]
    fn test_encodes_to_feature_dim_columns() {
        let frame = encoded_sample();
        assert_eq!(frame.width(), FEATURE_DIM);
        assert_eq!(frame.column_names(), schema::feature_columns());
    }

    #[test]
    fn test_gender_lookup() {
        let frame = encoded_sample();
        // sample record is Male
        assert_eq!(frame.get("gender"), Some(&Cell::Number(0.0)));
    }

    #[test]
    fn test_one_hot_marks_single_category() {
        let frame = encoded_sample();
        // sample record has Contract = "One year"
        assert_eq!(
            frame.get("Contract_Month-to-month"),
            Some(&Cell::Number(0.0))
        );
        assert_eq!(frame.get("Contract_One year"), Some(&Cell::Number(1.0)));
        assert_eq!(frame.get("Contract_Two year"), Some(&Cell::Number(0.0)));
        assert!(!frame.contains("Contract"));
    }

    #[test]
    fn test_ordinal_internet_service() {
        let frame = encoded_sample();
        // sample record has InternetService = "DSL"
        assert_eq!(frame.get("InternetService"), Some(&Cell::Number(1.0)));
    }

    #[test]
    fn test_service_variant_collapses_to_zero() {
        let mut record = sample_record();
        record.internet_service = "No".to_string();
        record.online_security = "No internet service".to_string();
        let frame = DropColumns::new([schema::CUSTOMER_ID])
            .apply(record.to_frame())
            .unwrap();
        let frame = FeatureEncoder::new().apply(frame).unwrap();
        assert_eq!(frame.get("OnlineSecurity"), Some(&Cell::Number(0.0)));
        assert_eq!(frame.get("InternetService"), Some(&Cell::Number(0.0)));
    }

    #[test]
    fn test_unseen_payment_method_rejected() {
        let mut record = sample_record();
        record.payment_method = "Cash".to_string();
        let err = FeatureEncoder::new().apply(record.to_frame()).unwrap_err();
        assert_eq!(
            err,
            PipelineError::UnknownCategory {
                field: "PaymentMethod".to_string(),
                value: "Cash".to_string()
            }
        );
    }

    #[test]
    fn test_unknown_binary_value_rejected() {
        let mut record = sample_record();
        record.partner = "Maybe".to_string();
        let frame = DropColumns::new([schema::CUSTOMER_ID])
            .apply(record.to_frame())
            .unwrap();
        let err = FeatureEncoder::new().apply(frame).unwrap_err();
        assert_eq!(
            err,
            PipelineError::UnknownCategory {
                field: "Partner".to_string(),
                value: "Maybe".to_string()
            }
        );
    }

    #[test]
    fn test_encoder_is_idempotent() {
        let once = encoded_sample();
        let twice = FeatureEncoder::new().apply(once.clone()).unwrap();
        assert_eq!(once, twice);
        assert_eq!(twice.width(), FEATURE_DIM);
    }
}
