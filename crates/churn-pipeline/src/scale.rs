//! Min-max normalization against fitted scale parameters.
//!
//! The per-column minimum and maximum are fit once offline and loaded as
//! an immutable artifact; the [`MinMaxScaler`] stage only ever applies
//! `(x - min) / (max - min)`. There is deliberately no `fit` path here:
//! refitting at request time would leak request data into the scale
//! parameters and desynchronize the vector from the scoring artifact.

use crate::error::{PipelineError, PipelineResult};
use crate::frame::{Cell, Frame};
use crate::stage::Stage;
use serde::{Deserialize, Serialize};

/// Fitted scale parameters for one feature column.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColumnScale {
    /// Feature column name.
    pub name: String,
    /// Minimum observed during the offline fit.
    pub min: f64,
    /// Maximum observed during the offline fit.
    pub max: f64,
}

impl ColumnScale {
    /// Creates scale parameters for one column.
    pub fn new(name: impl Into<String>, min: f64, max: f64) -> Self {
        Self {
            name: name.into(),
            min,
            max,
        }
    }

    /// Applies the min-max transform to one value.
    ///
    /// A degenerate column (`max == min`) scales to 0.0.
    pub fn scale(&self, value: f64) -> f64 {
        let range = self.max - self.min;
        if range == 0.0 {
            0.0
        } else {
            (value - self.min) / range
        }
    }
}

/// Applies fitted min-max parameters to every feature column.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MinMaxScaler {
    columns: Vec<ColumnScale>,
}

impl MinMaxScaler {
    /// Creates a scaler from fitted per-column parameters.
    ///
    /// # Errors
    ///
    /// Returns [`PipelineError::InvalidScale`] if any column has
    /// `min > max` or a non-finite bound, and
    /// [`PipelineError::LayoutMismatch`] on duplicate column names.
    pub fn new(columns: Vec<ColumnScale>) -> PipelineResult<Self> {
        for column in &columns {
            if !column.min.is_finite() || !column.max.is_finite() {
                return Err(PipelineError::InvalidScale {
                    column: column.name.clone(),
                    message: "bounds must be finite".to_string(),
                });
            }
            if column.min > column.max {
                return Err(PipelineError::InvalidScale {
                    column: column.name.clone(),
                    message: format!("min {} exceeds max {}", column.min, column.max),
                });
            }
        }
        let mut names: Vec<&str> = columns.iter().map(|c| c.name.as_str()).collect();
        names.sort_unstable();
        let before = names.len();
        names.dedup();
        if names.len() != before {
            return Err(PipelineError::LayoutMismatch {
                expected: names.len(),
                actual: before,
            });
        }
        Ok(Self { columns })
    }

    /// Returns the fitted column parameters in layout order.
    pub fn columns(&self) -> &[ColumnScale] {
        &self.columns
    }

    /// Returns the fitted column names in layout order.
    pub fn column_names(&self) -> Vec<&str> {
        self.columns.iter().map(|c| c.name.as_str()).collect()
    }
}

impl Stage for MinMaxScaler {
    fn apply(&self, mut frame: Frame) -> PipelineResult<Frame> {
        if frame.width() != self.columns.len() {
            return Err(PipelineError::LayoutMismatch {
                expected: self.columns.len(),
                actual: frame.width(),
            });
        }
        for column in &self.columns {
            let value = match frame.get(&column.name) {
                Some(Cell::Number(n)) => *n,
                Some(Cell::Text(s)) => {
                    return Err(PipelineError::CoercionFailure {
                        field: column.name.clone(),
                        value: s.clone(),
                    })
                }
                None => {
                    return Err(PipelineError::SchemaViolation {
                        field: column.name.clone(),
                        message: "fitted column absent from frame".to_string(),
                    })
                }
            };
            frame.set(&column.name, Cell::Number(column.scale(value)));
        }
        Ok(frame)
    }

    fn name(&self) -> &str {
        "MinMaxScaler"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scale_maps_bounds_to_unit_interval() {
        let scale = ColumnScale::new("tenure", 0.0, 72.0);
        assert_eq!(scale.scale(0.0), 0.0);
        assert_eq!(scale.scale(72.0), 1.0);
        assert!((scale.scale(36.0) - 0.5).abs() < 1e-12);
    }

    #[test]
    fn test_degenerate_column_scales_to_zero() {
        let scale = ColumnScale::new("flag", 1.0, 1.0);
        assert_eq!(scale.scale(1.0), 0.0);
    }

    #[test]
    fn test_inverted_bounds_rejected() {
        let err = MinMaxScaler::new(vec![ColumnScale::new("tenure", 10.0, 0.0)]).unwrap_err();
        assert!(matches!(err, PipelineError::InvalidScale { .. }));
    }

    #[test]
    fn test_duplicate_columns_rejected() {
        let err = MinMaxScaler::new(vec![
            ColumnScale::new("tenure", 0.0, 72.0),
            ColumnScale::new("tenure", 0.0, 72.0),
        ])
        .unwrap_err();
        assert!(matches!(err, PipelineError::LayoutMismatch { .. }));
    }

    #[test]
    fn test_apply_scales_every_column() {
        let scaler = MinMaxScaler::new(vec![
            ColumnScale::new("tenure", 0.0, 72.0),
            ColumnScale::new("MonthlyCharges", 0.0, 100.0),
        ])
        .unwrap();

        let mut frame = Frame::new();
        frame.push("tenure", Cell::Number(36.0));
        frame.push("MonthlyCharges", Cell::Number(25.0));

        let out = scaler.apply(frame).unwrap();
        assert_eq!(out.get("tenure"), Some(&Cell::Number(0.5)));
        assert_eq!(out.get("MonthlyCharges"), Some(&Cell::Number(0.25)));
    }

    #[test]
    fn test_apply_rejects_width_mismatch() {
        let scaler = MinMaxScaler::new(vec![ColumnScale::new("tenure", 0.0, 72.0)]).unwrap();
        let mut frame = Frame::new();
        frame.push("tenure", Cell::Number(1.0));
        frame.push("extra", Cell::Number(1.0));
        let err = scaler.apply(frame).unwrap_err();
        assert_eq!(
            err,
            PipelineError::LayoutMismatch {
                expected: 1,
                actual: 2
            }
        );
    }

    #[test]
    fn test_apply_rejects_text_cell() {
        let scaler = MinMaxScaler::new(vec![ColumnScale::new("tenure", 0.0, 72.0)]).unwrap();
        let mut frame = Frame::new();
        frame.push("tenure", Cell::from("five"));
        assert!(matches!(
            scaler.apply(frame).unwrap_err(),
            PipelineError::CoercionFailure { .. }
        ));
    }
}
