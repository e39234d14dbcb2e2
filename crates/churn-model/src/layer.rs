//! Layer trait definition.
//!
//! Forward-only interface: this crate scores pretrained weights and has no
//! training paths, so the trait exposes a forward pass and nothing else.

use crate::error::ModelError;
use crate::tensor::Tensor;

/// A network layer that supports forward propagation.
///
/// # Example
///
/// ```
/// use churn_model::activation::ReLU;
/// use churn_model::layer::Layer;
/// use churn_model::tensor::Tensor;
///
/// let relu = ReLU::new();
/// let input = Tensor::from_data(&[1, 3], vec![-1.0, 0.0, 2.0]).unwrap();
/// let output = relu.forward(&input).unwrap();
/// assert_eq!(output.data(), &[0.0, 0.0, 2.0]);
/// ```
pub trait Layer: Send + Sync {
    /// Performs a forward pass through the layer.
    ///
    /// # Errors
    ///
    /// Returns a [`ModelError`] if the input shape is incompatible with
    /// the layer.
    fn forward(&self, input: &Tensor) -> Result<Tensor, ModelError>;

    /// Returns the name of the layer for logging purposes.
    fn name(&self) -> &str {
        "Layer"
    }
}
