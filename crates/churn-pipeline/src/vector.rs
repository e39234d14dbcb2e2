//! Fixed-length feature vector output.

use crate::error::{PipelineError, PipelineResult};
use crate::frame::{Cell, Frame};
use crate::schema;

/// The fixed-length numeric representation of one customer record.
///
/// Length and per-position meaning are a joint contract with the scoring
/// artifact: position `i` holds the column `schema::feature_columns()[i]`.
/// Created per request, consumed immediately by the predictor.
#[derive(Debug, Clone, PartialEq)]
pub struct FeatureVector {
    values: Vec<f32>,
}

impl FeatureVector {
    /// Builds a feature vector from a fully transformed frame.
    ///
    /// The frame must contain exactly the canonical feature columns, in
    /// canonical order, all numeric.
    ///
    /// # Errors
    ///
    /// Returns [`PipelineError::LayoutMismatch`] on a wrong column count
    /// or order, and [`PipelineError::CoercionFailure`] if any cell is
    /// still text.
    pub fn from_frame(frame: &Frame) -> PipelineResult<Self> {
        let expected = schema::feature_columns();
        if frame.width() != expected.len() {
            return Err(PipelineError::LayoutMismatch {
                expected: expected.len(),
                actual: frame.width(),
            });
        }
        let mut values = Vec::with_capacity(expected.len());
        for (position, ((name, cell), expected_name)) in
            frame.iter().zip(expected.iter()).enumerate()
        {
            if name != expected_name {
                return Err(PipelineError::SchemaViolation {
                    field: expected_name.clone(),
                    message: format!("expected at position {}, found `{}`", position, name),
                });
            }
            match cell {
                Cell::Number(n) => values.push(*n as f32),
                Cell::Text(s) => {
                    return Err(PipelineError::CoercionFailure {
                        field: name.to_string(),
                        value: s.clone(),
                    })
                }
            }
        }
        Ok(Self { values })
    }

    /// Returns the vector values in canonical column order.
    pub fn as_slice(&self) -> &[f32] {
        &self.values
    }

    /// Returns the vector length (always [`schema::FEATURE_DIM`] for
    /// vectors built from a canonical frame).
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Returns `true` if the vector holds no values.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Consumes the vector, returning its values.
    pub fn into_values(self) -> Vec<f32> {
        self.values
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn canonical_frame() -> Frame {
        let mut frame = Frame::new();
        for (i, name) in schema::feature_columns().into_iter().enumerate() {
            frame.push(name, Cell::Number(i as f64));
        }
        frame
    }

    #[test]
    fn test_from_canonical_frame() {
        let vector = FeatureVector::from_frame(&canonical_frame()).unwrap();
        assert_eq!(vector.len(), schema::FEATURE_DIM);
        assert_eq!(vector.as_slice()[0], 0.0);
        assert_eq!(vector.as_slice()[23], 23.0);
    }

    #[test]
    fn test_rejects_wrong_width() {
        let mut frame = canonical_frame();
        frame.remove("tenure");
        assert!(matches!(
            FeatureVector::from_frame(&frame).unwrap_err(),
            PipelineError::LayoutMismatch { .. }
        ));
    }

    #[test]
    fn test_rejects_out_of_order_columns() {
        let mut frame = Frame::new();
        let mut names = schema::feature_columns();
        names.swap(0, 1);
        for name in names {
            frame.push(name, Cell::Number(0.0));
        }
        assert!(matches!(
            FeatureVector::from_frame(&frame).unwrap_err(),
            PipelineError::SchemaViolation { .. }
        ));
    }

    #[test]
    fn test_rejects_residual_text() {
        let mut frame = canonical_frame();
        frame.set("gender", Cell::from("Male"));
        assert!(matches!(
            FeatureVector::from_frame(&frame).unwrap_err(),
            PipelineError::CoercionFailure { .. }
        ));
    }
}
