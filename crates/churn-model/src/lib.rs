//! Forward-only neural network for churn scoring.
//!
//! This crate provides the minimal building blocks to run a pretrained
//! fully connected classifier: a row-major [`Tensor`], a forward-only
//! [`Layer`] trait, [`Dense`] layers with externally supplied weights,
//! ReLU/sigmoid activations, and the [`Fcnn`] stack itself. There is no
//! training surface: no gradients, no optimizers, no weight
//! initialization.
//!
//! # Quick start
//!
//! ```
//! use churn_model::prelude::*;
//!
//! let fcnn = FcnnConfig::new(2)
//!     .add_layer(2, ActivationKind::ReLU, vec![1.0, 0.0, 0.0, 1.0], vec![0.0, 0.0])
//!     .add_layer(1, ActivationKind::None, vec![1.0, 1.0], vec![0.0])
//!     .build()
//!     .unwrap();
//!
//! let logit = fcnn.forward(&Tensor::row(&[0.5, 0.25])).unwrap();
//! assert_eq!(logit.shape(), &[1, 1]);
//! ```

#![warn(missing_docs)]

pub mod activation;
pub mod dense;
pub mod error;
pub mod fcnn;
pub mod layer;
pub mod tensor;

pub use activation::{sigmoid, ReLU, Sigmoid};
pub use dense::Dense;
pub use error::{ModelError, ModelResult};
pub use fcnn::{ActivationKind, Fcnn, FcnnConfig, LayerSpec};
pub use layer::Layer;
pub use tensor::Tensor;

/// Commonly used types, importable in one line.
pub mod prelude {
    pub use crate::activation::{sigmoid, ReLU, Sigmoid};
    pub use crate::dense::Dense;
    pub use crate::error::{ModelError, ModelResult};
    pub use crate::fcnn::{ActivationKind, Fcnn, FcnnConfig, LayerSpec};
    pub use crate::layer::Layer;
    pub use crate::tensor::Tensor;
}
