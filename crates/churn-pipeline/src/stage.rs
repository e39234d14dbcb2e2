//! Stage trait and stage composition.
//!
//! A [`Stage`] transforms one tabular record. Stages are deterministic and
//! stateless per call; the [`Preprocessor`] applies a fixed ordered
//! sequence of them. A record that cannot be transformed is rejected with
//! an explicit error, never silently dropped.
//!
//! # Example
//!
//! ```
//! use churn_pipeline::frame::{Cell, Frame};
//! use churn_pipeline::stage::{DropColumns, Stage};
//!
//! let drop = DropColumns::new(["customerID"]);
//! let mut frame = Frame::new();
//! frame.push("customerID", Cell::from("0000-ABCD"));
//! frame.push("tenure", Cell::Number(5.0));
//!
//! let frame = drop.apply(frame).unwrap();
//! assert!(!frame.contains("customerID"));
//! ```

use crate::encode::FeatureEncoder;
use crate::error::{PipelineError, PipelineResult};
use crate::frame::{Cell, Frame};
use crate::record::CustomerRecord;
use crate::scale::MinMaxScaler;
use crate::schema;
use crate::vector::FeatureVector;
use tracing::debug;

/// A transformation applied to one tabular record.
pub trait Stage: Send + Sync {
    /// Applies the transformation, producing the next frame.
    ///
    /// # Errors
    ///
    /// Returns a [`PipelineError`] rejecting the record; the caller must
    /// surface the rejection rather than score a partial result.
    fn apply(&self, frame: Frame) -> PipelineResult<Frame>;

    /// Returns the name of this stage for logging purposes.
    fn name(&self) -> &str {
        "Stage"
    }
}

/// A fixed ordered sequence of stages.
///
/// Stages run in insertion order; the first rejection aborts the record.
#[derive(Default)]
pub struct Preprocessor {
    stages: Vec<Box<dyn Stage>>,
}

impl Preprocessor {
    /// Creates an empty preprocessor.
    pub fn new() -> Self {
        Self { stages: Vec::new() }
    }

    /// Appends a stage to the sequence.
    pub fn add<S: Stage + 'static>(mut self, stage: S) -> Self {
        self.stages.push(Box::new(stage));
        self
    }

    /// Returns the number of stages.
    pub fn len(&self) -> usize {
        self.stages.len()
    }

    /// Returns `true` if no stages are configured.
    pub fn is_empty(&self) -> bool {
        self.stages.is_empty()
    }

    /// Builds the canonical churn preprocessing sequence around fitted
    /// scale parameters: drop identifier, reject missing values, encode
    /// categoricals, coerce to numeric, min-max normalize.
    pub fn standard(scaler: MinMaxScaler) -> Self {
        Self::new()
            .add(DropColumns::new([schema::CUSTOMER_ID]))
            .add(MissingValueCheck::new())
            .add(FeatureEncoder::new())
            .add(NumericValidator::new())
            .add(scaler)
    }

    /// Runs every stage in order over the frame.
    ///
    /// # Errors
    ///
    /// Propagates the first stage rejection.
    pub fn transform(&self, mut frame: Frame) -> PipelineResult<Frame> {
        for stage in &self.stages {
            frame = stage.apply(frame)?;
            debug!(stage = stage.name(), width = frame.width(), "stage applied");
        }
        Ok(frame)
    }

    /// Maps one validated customer record to its feature vector.
    ///
    /// Validates the record against the declared schema, converts it to a
    /// frame, runs the stage sequence, and checks the final layout against
    /// the canonical column order.
    ///
    /// # Errors
    ///
    /// Returns the first schema violation or stage rejection.
    pub fn transform_record(&self, record: &CustomerRecord) -> PipelineResult<FeatureVector> {
        record.validate()?;
        let frame = self.transform(record.to_frame())?;
        FeatureVector::from_frame(&frame)
    }
}

/// Removes columns that carry no predictive signal.
pub struct DropColumns {
    columns: Vec<String>,
}

impl DropColumns {
    /// Creates a stage dropping the named columns.
    ///
    /// Absent columns are ignored; dropping is idempotent.
    pub fn new<I, S>(columns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            columns: columns.into_iter().map(Into::into).collect(),
        }
    }
}

impl Stage for DropColumns {
    fn apply(&self, mut frame: Frame) -> PipelineResult<Frame> {
        for column in &self.columns {
            frame.remove(column);
        }
        Ok(frame)
    }

    fn name(&self) -> &str {
        "DropColumns"
    }
}

/// Rejects records containing missing values.
///
/// Empty or whitespace-only text cells and non-finite numeric cells count
/// as missing. The original training pipeline dropped such rows; at
/// serving time a dropped record must surface as an explicit error
/// instead of an empty result.
#[derive(Debug, Clone, Copy, Default)]
pub struct MissingValueCheck;

impl MissingValueCheck {
    /// Creates the missing-value rejection stage.
    pub fn new() -> Self {
        Self
    }
}

impl Stage for MissingValueCheck {
    fn apply(&self, frame: Frame) -> PipelineResult<Frame> {
        for (name, cell) in frame.iter() {
            let missing = match cell {
                Cell::Text(s) => s.trim().is_empty(),
                Cell::Number(n) => !n.is_finite(),
            };
            if missing {
                return Err(PipelineError::MissingValue {
                    field: name.to_string(),
                });
            }
        }
        Ok(frame)
    }

    fn name(&self) -> &str {
        "MissingValueCheck"
    }
}

/// Coerces every residual cell to a number.
///
/// After encoding, all cells must be numeric. Text that parses as `f64`
/// is coerced in place; anything else is a fatal input-validation error
/// for the request.
#[derive(Debug, Clone, Copy, Default)]
pub struct NumericValidator;

impl NumericValidator {
    /// Creates the numeric coercion stage.
    pub fn new() -> Self {
        Self
    }
}

impl Stage for NumericValidator {
    fn apply(&self, mut frame: Frame) -> PipelineResult<Frame> {
        let mut coerced: Vec<(String, f64)> = Vec::new();
        for (name, cell) in frame.iter() {
            if let Cell::Text(s) = cell {
                match s.trim().parse::<f64>() {
                    Ok(n) => coerced.push((name.to_string(), n)),
                    Err(_) => {
                        return Err(PipelineError::CoercionFailure {
                            field: name.to_string(),
                            value: s.clone(),
                        })
                    }
                }
            }
        }
        for (name, n) in coerced {
            frame.set(&name, Cell::Number(n));
        }
        Ok(frame)
    }

    fn name(&self) -> &str {
        "NumericValidator"
    }
}
