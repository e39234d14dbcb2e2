//! Tensor type for forward-pass computations.
//!
//! A minimal row-major tensor over `f32`, covering exactly the operations
//! a forward pass through a small fully connected network needs: matrix
//! multiplication, row-vector broadcast addition, and element-wise maps.

use crate::error::{ModelError, ModelResult};
use serde::{Deserialize, Serialize};

/// A multi-dimensional array in row-major order.
///
/// # Example
///
/// ```
/// use churn_model::tensor::Tensor;
///
/// let t = Tensor::zeros(&[2, 3]);
/// assert_eq!(t.shape(), &[2, 3]);
/// assert_eq!(t.numel(), 6);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tensor {
    /// The shape of the tensor (dimensions)
    shape: Vec<usize>,
    /// The underlying data in row-major order
    data: Vec<f32>,
}

impl Tensor {
    /// Creates a tensor with the given shape, filled with zeros.
    pub fn zeros(shape: &[usize]) -> Self {
        let numel: usize = shape.iter().product();
        Self {
            shape: shape.to_vec(),
            data: vec![0.0; numel],
        }
    }

    /// Creates a tensor with the given shape and data.
    ///
    /// # Errors
    ///
    /// Returns [`ModelError::ShapeMismatch`] if `data.len()` does not
    /// equal the product of the dimensions.
    pub fn from_data(shape: &[usize], data: Vec<f32>) -> ModelResult<Self> {
        let numel: usize = shape.iter().product();
        if data.len() != numel {
            return Err(ModelError::ShapeMismatch {
                expected: shape.to_vec(),
                actual: vec![data.len()],
            });
        }
        Ok(Self {
            shape: shape.to_vec(),
            data,
        })
    }

    /// Creates a `[1, len]` row tensor from a slice.
    pub fn row(values: &[f32]) -> Self {
        Self {
            shape: vec![1, values.len()],
            data: values.to_vec(),
        }
    }

    /// Returns the shape of the tensor.
    pub fn shape(&self) -> &[usize] {
        &self.shape
    }

    /// Returns the total number of elements.
    pub fn numel(&self) -> usize {
        self.data.len()
    }

    /// Returns the underlying data in row-major order.
    pub fn data(&self) -> &[f32] {
        &self.data
    }

    /// Returns the number of rows of a 2-D tensor.
    pub fn rows(&self) -> usize {
        self.shape.first().copied().unwrap_or(0)
    }

    /// Returns the number of columns of a 2-D tensor.
    pub fn cols(&self) -> usize {
        self.shape.get(1).copied().unwrap_or(0)
    }

    /// Applies a function element-wise, producing a new tensor.
    pub fn map<F: Fn(f32) -> f32>(&self, f: F) -> Self {
        Self {
            shape: self.shape.clone(),
            data: self.data.iter().map(|&x| f(x)).collect(),
        }
    }

    /// Matrix product of two 2-D tensors: `[m, k] x [k, n] -> [m, n]`.
    ///
    /// # Errors
    ///
    /// Returns [`ModelError::ShapeMismatch`] if either tensor is not 2-D
    /// or the inner dimensions disagree.
    pub fn matmul(&self, other: &Tensor) -> ModelResult<Tensor> {
        if self.shape.len() != 2 || other.shape.len() != 2 || self.shape[1] != other.shape[0] {
            return Err(ModelError::ShapeMismatch {
                expected: self.shape.clone(),
                actual: other.shape.clone(),
            });
        }
        let (m, k, n) = (self.shape[0], self.shape[1], other.shape[1]);
        let mut data = vec![0.0f32; m * n];
        for i in 0..m {
            for p in 0..k {
                let lhs = self.data[i * k + p];
                if lhs == 0.0 {
                    continue;
                }
                for j in 0..n {
                    data[i * n + j] += lhs * other.data[p * n + j];
                }
            }
        }
        Ok(Tensor {
            shape: vec![m, n],
            data,
        })
    }

    /// Adds a `[n]` or `[1, n]` bias vector to every row of a `[m, n]`
    /// tensor.
    ///
    /// # Errors
    ///
    /// Returns [`ModelError::ShapeMismatch`] if the bias length does not
    /// match the column count.
    pub fn add_row_vector(&self, bias: &Tensor) -> ModelResult<Tensor> {
        let n = self.cols();
        if self.shape.len() != 2 || bias.numel() != n {
            return Err(ModelError::ShapeMismatch {
                expected: vec![n],
                actual: bias.shape.clone(),
            });
        }
        let mut data = self.data.clone();
        for (idx, value) in data.iter_mut().enumerate() {
            *value += bias.data[idx % n];
        }
        Ok(Tensor {
            shape: self.shape.clone(),
            data,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zeros() {
        let t = Tensor::zeros(&[3, 4]);
        assert_eq!(t.shape(), &[3, 4]);
        assert_eq!(t.numel(), 12);
        assert!(t.data().iter().all(|&x| x == 0.0));
    }

    #[test]
    fn test_from_data_validates_length() {
        assert!(Tensor::from_data(&[2, 2], vec![1.0, 2.0, 3.0, 4.0]).is_ok());
        assert!(Tensor::from_data(&[2, 2], vec![1.0]).is_err());
    }

    #[test]
    fn test_row() {
        let t = Tensor::row(&[1.0, 2.0, 3.0]);
        assert_eq!(t.shape(), &[1, 3]);
        assert_eq!(t.rows(), 1);
        assert_eq!(t.cols(), 3);
    }

    #[test]
    fn test_matmul() {
        // [1, 2] x [2, 2]
        let a = Tensor::from_data(&[1, 2], vec![1.0, 2.0]).unwrap();
        let b = Tensor::from_data(&[2, 2], vec![1.0, 0.0, 0.0, 1.0]).unwrap();
        let c = a.matmul(&b).unwrap();
        assert_eq!(c.shape(), &[1, 2]);
        assert_eq!(c.data(), &[1.0, 2.0]);

        let d = Tensor::from_data(&[2, 2], vec![2.0, 3.0, 4.0, 5.0]).unwrap();
        let e = a.matmul(&d).unwrap();
        assert_eq!(e.data(), &[10.0, 13.0]);
    }

    #[test]
    fn test_matmul_shape_mismatch() {
        let a = Tensor::zeros(&[1, 3]);
        let b = Tensor::zeros(&[2, 2]);
        assert!(a.matmul(&b).is_err());
    }

    #[test]
    fn test_add_row_vector() {
        let t = Tensor::from_data(&[2, 2], vec![1.0, 2.0, 3.0, 4.0]).unwrap();
        let bias = Tensor::from_data(&[2], vec![10.0, 20.0]).unwrap();
        let out = t.add_row_vector(&bias).unwrap();
        assert_eq!(out.data(), &[11.0, 22.0, 13.0, 24.0]);
    }

    #[test]
    fn test_map() {
        let t = Tensor::from_data(&[1, 3], vec![-1.0, 0.0, 2.0]).unwrap();
        let relu = t.map(|x| x.max(0.0));
        assert_eq!(relu.data(), &[0.0, 0.0, 2.0]);
    }
}
