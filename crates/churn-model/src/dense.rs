//! Dense (fully connected) layer.
//!
//! Performs `y = xW + b`. Weights are always supplied by the caller,
//! either from the loaded model artifact in production or a fixture in
//! tests. There are no random initializers because nothing here trains.

use crate::error::{ModelError, ModelResult};
use crate::layer::Layer;
use crate::tensor::Tensor;
use serde::{Deserialize, Serialize};

/// A dense layer with pretrained weights.
///
/// - input: `[batch, in_features]`
/// - weights: `[in_features, out_features]`
/// - bias: `[out_features]`
/// - output: `[batch, out_features]`
///
/// # Example
///
/// ```
/// use churn_model::dense::Dense;
/// use churn_model::layer::Layer;
/// use churn_model::tensor::Tensor;
///
/// // 2 -> 1 layer computing x0 + x1 + 0.5
/// let layer = Dense::from_weights(2, 1, vec![1.0, 1.0], vec![0.5]).unwrap();
/// let input = Tensor::row(&[2.0, 3.0]);
/// let output = layer.forward(&input).unwrap();
/// assert_eq!(output.data(), &[5.5]);
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Dense {
    weights: Tensor,
    bias: Tensor,
    in_features: usize,
    out_features: usize,
}

impl Dense {
    /// Creates a dense layer from flat row-major weight data and a bias
    /// vector.
    ///
    /// # Errors
    ///
    /// Returns [`ModelError::ShapeMismatch`] if the data lengths do not
    /// match `in_features * out_features` and `out_features`.
    pub fn from_weights(
        in_features: usize,
        out_features: usize,
        weights: Vec<f32>,
        bias: Vec<f32>,
    ) -> ModelResult<Self> {
        let weights = Tensor::from_data(&[in_features, out_features], weights)?;
        let bias = Tensor::from_data(&[out_features], bias)?;
        Ok(Self {
            weights,
            bias,
            in_features,
            out_features,
        })
    }

    /// Returns the input feature dimension.
    pub fn in_features(&self) -> usize {
        self.in_features
    }

    /// Returns the output feature dimension.
    pub fn out_features(&self) -> usize {
        self.out_features
    }
}

impl Layer for Dense {
    fn forward(&self, input: &Tensor) -> Result<Tensor, ModelError> {
        if input.cols() != self.in_features {
            return Err(ModelError::InvalidInputDimension {
                expected: self.in_features,
                actual: input.cols(),
            });
        }
        let product = input.matmul(&self.weights)?;
        product.add_row_vector(&self.bias)
    }

    fn name(&self) -> &str {
        "Dense"
    }
}
