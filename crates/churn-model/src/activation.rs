//! Activation function layers.

use crate::error::ModelError;
use crate::layer::Layer;
use crate::tensor::Tensor;
use serde::{Deserialize, Serialize};

/// Rectified Linear Unit (ReLU) activation function.
///
/// Computes `f(x) = max(0, x)` element-wise.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct ReLU;

impl ReLU {
    /// Creates a new ReLU activation layer.
    pub fn new() -> Self {
        Self
    }
}

impl Layer for ReLU {
    fn forward(&self, input: &Tensor) -> Result<Tensor, ModelError> {
        Ok(input.map(|x| x.max(0.0)))
    }

    fn name(&self) -> &str {
        "ReLU"
    }
}

/// Sigmoid activation function.
///
/// Computes `f(x) = 1 / (1 + exp(-x))` element-wise, mapping logits to
/// probabilities in `[0, 1]`.
///
/// # Example
///
/// ```
/// use churn_model::activation::{sigmoid, Sigmoid};
/// use churn_model::layer::Layer;
/// use churn_model::tensor::Tensor;
///
/// assert!((sigmoid(0.0) - 0.5).abs() < 1e-6);
///
/// let layer = Sigmoid::new();
/// let output = layer.forward(&Tensor::zeros(&[1, 2])).unwrap();
/// assert!((output.data()[0] - 0.5).abs() < 1e-6);
/// ```
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct Sigmoid;

impl Sigmoid {
    /// Creates a new sigmoid activation layer.
    pub fn new() -> Self {
        Self
    }
}

impl Layer for Sigmoid {
    fn forward(&self, input: &Tensor) -> Result<Tensor, ModelError> {
        Ok(input.map(sigmoid))
    }

    fn name(&self) -> &str {
        "Sigmoid"
    }
}

/// Scalar sigmoid, shared by the [`Sigmoid`] layer and the predictor's
/// logit-to-probability mapping.
pub fn sigmoid(x: f32) -> f32 {
    1.0 / (1.0 + (-x).exp())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_relu_clamps_negatives() {
        let relu = ReLU::new();
        let input = Tensor::from_data(&[2, 2], vec![-1.0, 0.0, 1.0, 2.0]).unwrap();
        let output = relu.forward(&input).unwrap();
        assert_eq!(output.data(), &[0.0, 0.0, 1.0, 2.0]);
    }

    #[test]
    fn test_sigmoid_midpoint_and_saturation() {
        assert!((sigmoid(0.0) - 0.5).abs() < 1e-6);
        assert!(sigmoid(10.0) > 0.999);
        assert!(sigmoid(-10.0) < 0.001);
    }

    #[test]
    fn test_sigmoid_is_monotonic() {
        let values = [-2.0f32, -1.0, 0.0, 1.0, 2.0];
        for pair in values.windows(2) {
            assert!(sigmoid(pair[0]) < sigmoid(pair[1]));
        }
    }
}
