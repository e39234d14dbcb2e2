//! Fully connected network built from pretrained weights.
//!
//! The canonical churn classifier is `Dense(24, 24) -> ReLU ->
//! Dense(24, 1)`, producing one logit per record. The config carries the
//! pretrained weights for each layer; building never touches a random
//! number generator.

use crate::activation::{ReLU, Sigmoid};
use crate::dense::Dense;
use crate::error::{ModelError, ModelResult};
use crate::layer::Layer;
use crate::tensor::Tensor;
use serde::{Deserialize, Serialize};

/// Activation function applied after a dense layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ActivationKind {
    /// Rectified Linear Unit
    ReLU,
    /// Sigmoid function
    Sigmoid,
    /// No activation (identity)
    #[default]
    None,
}

/// Pretrained parameters for one dense layer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LayerSpec {
    /// Output dimension of the layer.
    pub out_features: usize,
    /// Activation applied after the linear transform.
    pub activation: ActivationKind,
    /// Flat row-major weights, `in_features * out_features` values.
    pub weights: Vec<f32>,
    /// Bias vector, `out_features` values.
    pub bias: Vec<f32>,
}

/// Configuration for building an [`Fcnn`] from pretrained weights.
///
/// # Example
///
/// ```
/// use churn_model::fcnn::{ActivationKind, FcnnConfig};
///
/// // 2 -> 2 -> 1 network with hand-picked weights
/// let fcnn = FcnnConfig::new(2)
///     .add_layer(2, ActivationKind::ReLU, vec![1.0, 0.0, 0.0, 1.0], vec![0.0, 0.0])
///     .add_layer(1, ActivationKind::None, vec![1.0, 1.0], vec![0.0])
///     .build()
///     .unwrap();
/// assert_eq!(fcnn.input_dim(), 2);
/// assert_eq!(fcnn.output_dim(), 1);
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FcnnConfig {
    /// Input feature dimension.
    pub input_dim: usize,
    /// Layer parameters in forward order.
    pub layers: Vec<LayerSpec>,
}

impl FcnnConfig {
    /// Creates a configuration with the specified input dimension.
    pub fn new(input_dim: usize) -> Self {
        Self {
            input_dim,
            layers: Vec::new(),
        }
    }

    /// Appends a layer with its pretrained weights.
    pub fn add_layer(
        mut self,
        out_features: usize,
        activation: ActivationKind,
        weights: Vec<f32>,
        bias: Vec<f32>,
    ) -> Self {
        self.layers.push(LayerSpec {
            out_features,
            activation,
            weights,
            bias,
        });
        self
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ModelError::ConfigError`] for an empty or zero-dimension
    /// network and [`ModelError::InvalidWeights`] when a layer's weight
    /// data disagrees with its declared shape.
    pub fn validate(&self) -> ModelResult<()> {
        if self.input_dim == 0 {
            return Err(ModelError::ConfigError {
                message: "input dimension must be positive".to_string(),
            });
        }
        if self.layers.is_empty() {
            return Err(ModelError::ConfigError {
                message: "network must have at least one layer".to_string(),
            });
        }
        let mut prev_dim = self.input_dim;
        for (i, layer) in self.layers.iter().enumerate() {
            if layer.out_features == 0 {
                return Err(ModelError::ConfigError {
                    message: format!("layer {} has zero output dimension", i),
                });
            }
            if layer.weights.len() != prev_dim * layer.out_features {
                return Err(ModelError::InvalidWeights {
                    layer: i,
                    message: format!(
                        "expected {} weight values, got {}",
                        prev_dim * layer.out_features,
                        layer.weights.len()
                    ),
                });
            }
            if layer.bias.len() != layer.out_features {
                return Err(ModelError::InvalidWeights {
                    layer: i,
                    message: format!(
                        "expected {} bias values, got {}",
                        layer.out_features,
                        layer.bias.len()
                    ),
                });
            }
            prev_dim = layer.out_features;
        }
        Ok(())
    }

    /// Builds the network from this configuration.
    pub fn build(self) -> ModelResult<Fcnn> {
        Fcnn::from_config(self)
    }
}

/// Internal enum holding the activation layer between dense layers.
#[derive(Debug, Clone)]
enum ActivationLayer {
    ReLU(ReLU),
    Sigmoid(Sigmoid),
    None,
}

impl ActivationLayer {
    fn forward(&self, input: &Tensor) -> ModelResult<Tensor> {
        match self {
            Self::ReLU(a) => a.forward(input),
            Self::Sigmoid(a) => a.forward(input),
            Self::None => Ok(input.clone()),
        }
    }
}

/// A fully connected network with pretrained weights.
///
/// Immutable after construction; a forward pass is a pure function of the
/// input tensor.
#[derive(Debug, Clone)]
pub struct Fcnn {
    dense_layers: Vec<Dense>,
    activations: Vec<ActivationLayer>,
    input_dim: usize,
}

impl Fcnn {
    /// Creates a network from a configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid.
    pub fn from_config(config: FcnnConfig) -> ModelResult<Self> {
        config.validate()?;

        let mut dense_layers = Vec::new();
        let mut activations = Vec::new();
        let mut prev_dim = config.input_dim;

        for layer in config.layers {
            dense_layers.push(Dense::from_weights(
                prev_dim,
                layer.out_features,
                layer.weights,
                layer.bias,
            )?);
            activations.push(match layer.activation {
                ActivationKind::ReLU => ActivationLayer::ReLU(ReLU::new()),
                ActivationKind::Sigmoid => ActivationLayer::Sigmoid(Sigmoid::new()),
                ActivationKind::None => ActivationLayer::None,
            });
            prev_dim = layer.out_features;
        }

        Ok(Self {
            dense_layers,
            activations,
            input_dim: config.input_dim,
        })
    }

    /// Returns the number of dense layers.
    pub fn num_layers(&self) -> usize {
        self.dense_layers.len()
    }

    /// Returns the input dimension.
    pub fn input_dim(&self) -> usize {
        self.input_dim
    }

    /// Returns the output dimension.
    pub fn output_dim(&self) -> usize {
        self.dense_layers
            .last()
            .map(|layer| layer.out_features())
            .unwrap_or(0)
    }
}

impl Layer for Fcnn {
    fn forward(&self, input: &Tensor) -> Result<Tensor, ModelError> {
        let mut x = input.clone();
        for (dense, activation) in self.dense_layers.iter().zip(self.activations.iter()) {
            x = dense.forward(&x)?;
            x = activation.forward(&x)?;
        }
        Ok(x)
    }

    fn name(&self) -> &str {
        "Fcnn"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn identity_2x2() -> Vec<f32> {
        vec![1.0, 0.0, 0.0, 1.0]
    }

    #[test]
    fn test_config_validation() {
        assert!(FcnnConfig::new(0).validate().is_err());
        assert!(FcnnConfig::new(2).validate().is_err()); // no layers

        let bad_weights = FcnnConfig::new(2).add_layer(1, ActivationKind::None, vec![1.0], vec![0.0]);
        assert!(matches!(
            bad_weights.validate().unwrap_err(),
            ModelError::InvalidWeights { layer: 0, .. }
        ));
    }

    #[test]
    fn test_forward_computes_sum_through_identity() {
        let fcnn = FcnnConfig::new(2)
            .add_layer(2, ActivationKind::ReLU, identity_2x2(), vec![0.0, 0.0])
            .add_layer(1, ActivationKind::None, vec![1.0, 1.0], vec![0.0])
            .build()
            .unwrap();

        let output = fcnn.forward(&Tensor::row(&[2.0, 3.0])).unwrap();
        assert_eq!(output.shape(), &[1, 1]);
        assert_eq!(output.data(), &[5.0]);
    }

    #[test]
    fn test_relu_gates_negative_hidden_units() {
        // Hidden unit 0 goes negative and is clamped before the sum.
        let fcnn = FcnnConfig::new(2)
            .add_layer(
                2,
                ActivationKind::ReLU,
                vec![-1.0, 0.0, 0.0, 1.0],
                vec![0.0, 0.0],
            )
            .add_layer(1, ActivationKind::None, vec![1.0, 1.0], vec![0.0])
            .build()
            .unwrap();

        let output = fcnn.forward(&Tensor::row(&[2.0, 3.0])).unwrap();
        assert_eq!(output.data(), &[3.0]);
    }

    #[test]
    fn test_forward_is_deterministic() {
        let fcnn = FcnnConfig::new(2)
            .add_layer(2, ActivationKind::ReLU, identity_2x2(), vec![0.1, -0.2])
            .add_layer(1, ActivationKind::None, vec![0.5, -0.5], vec![0.25])
            .build()
            .unwrap();

        let input = Tensor::row(&[1.5, -0.5]);
        let first = fcnn.forward(&input).unwrap();
        let second = fcnn.forward(&input).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_dims() {
        let fcnn = FcnnConfig::new(2)
            .add_layer(3, ActivationKind::ReLU, vec![0.0; 6], vec![0.0; 3])
            .add_layer(1, ActivationKind::None, vec![0.0; 3], vec![0.0])
            .build()
            .unwrap();
        assert_eq!(fcnn.num_layers(), 2);
        assert_eq!(fcnn.input_dim(), 2);
        assert_eq!(fcnn.output_dim(), 1);
    }
}
