use ndarray::{Array1, Array2, ArrayView2, linalg};

use super::ActFn;
use crate::{ClassifierErr, Result};

/// A fully connected layer holding its trained weights.
#[derive(Debug, Clone)]
pub struct Dense {
    dim: (usize, usize),
    act_fn: Option<ActFn>,
    w: Array2<f32>,
    b: Array1<f32>,
}

impl Dense {
    /// Creates a new `Dense` layer.
    ///
    /// # Arguments
    /// * `dim` - The (inputs, outputs) of the layer.
    /// * `weights` - The row-major `inputs * outputs` weight matrix.
    /// * `biases` - One bias per output.
    /// * `act_fn` - The optional activation.
    ///
    /// # Returns
    /// A new `Dense`, an error for an empty `dim`, or a size mismatch if the parameters
    /// don't fit `dim`.
    pub fn new(
        dim: (usize, usize),
        weights: Vec<f32>,
        biases: Vec<f32>,
        act_fn: Option<ActFn>,
    ) -> Result<Self> {
        let (n, m) = dim;
        if n == 0 || m == 0 {
            return Err(ClassifierErr::InvalidModel(format!(
                "dense layer of shape {n}x{m} has no units"
            )));
        }

        if weights.len() != n * m {
            return Err(ClassifierErr::SizeMismatch {
                what: "dense weights",
                got: weights.len(),
                expected: n * m,
            });
        }

        if biases.len() != m {
            return Err(ClassifierErr::SizeMismatch {
                what: "dense biases",
                got: biases.len(),
                expected: m,
            });
        }

        let w = Array2::from_shape_vec(dim, weights)
            .map_err(|e| ClassifierErr::InvalidModel(e.to_string()))?;

        Ok(Self {
            dim,
            act_fn,
            w,
            b: Array1::from(biases),
        })
    }

    pub fn dim(&self) -> (usize, usize) {
        self.dim
    }

    /// Computes the layer output for every row of `x`.
    ///
    /// `x` must have exactly `dim.0` columns.
    pub fn forward(&self, x: ArrayView2<f32>) -> Array2<f32> {
        let mut z = Array2::zeros((x.nrows(), self.dim.1));
        linalg::general_mat_mul(1.0, &x, &self.w, 0.0, &mut z);
        z += &self.b;

        if let Some(act_fn) = &self.act_fn {
            z.mapv_inplace(|z| act_fn.f(z));
        }

        z
    }
}
