//! Preprocessing pipeline for customer churn prediction.
//!
//! This crate maps a loosely-typed [`CustomerRecord`] to a fixed-width
//! numeric [`FeatureVector`], reproducing the training-time
//! transformations exactly: identifier drop, missing-value rejection,
//! categorical encoding against fixed declared domains, numeric coercion,
//! and min-max normalization with offline-fitted parameters.
//!
//! Every transformation is a deterministic pure function of its input; a
//! record that cannot be transformed is rejected with an explicit
//! [`PipelineError`] naming the offending field, never silently dropped.
//!
//! # Quick start
//!
//! ```
//! use churn_pipeline::prelude::*;
//! use churn_pipeline::testing::{fitted_scaler, sample_record};
//!
//! let preprocessor = Preprocessor::standard(fitted_scaler());
//! let vector = preprocessor.transform_record(&sample_record()).unwrap();
//! assert_eq!(vector.len(), churn_pipeline::schema::FEATURE_DIM);
//! ```

#![warn(missing_docs)]

pub mod encode;
pub mod error;
pub mod frame;
pub mod record;
pub mod scale;
pub mod schema;
pub mod stage;
pub mod testing;
pub mod vector;

pub use encode::FeatureEncoder;
pub use error::{PipelineError, PipelineResult};
pub use frame::{Cell, Frame};
pub use record::CustomerRecord;
pub use scale::{ColumnScale, MinMaxScaler};
pub use stage::{DropColumns, MissingValueCheck, NumericValidator, Preprocessor, Stage};
pub use vector::FeatureVector;

/// Commonly used types, importable in one line.
pub mod prelude {
    pub use crate::encode::FeatureEncoder;
    pub use crate::error::{PipelineError, PipelineResult};
    pub use crate::frame::{Cell, Frame};
    pub use crate::record::CustomerRecord;
    pub use crate::scale::{ColumnScale, MinMaxScaler};
    pub use crate::stage::{
        DropColumns, MissingValueCheck, NumericValidator, Preprocessor, Stage,
    };
    pub use crate::vector::FeatureVector;
}
