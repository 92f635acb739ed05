use ndarray::{Array1, Array2, ArrayView2, Axis};

use super::{ActFn, Estimator, argmax};
use crate::{ClassifierErr, Result};

/// A (multinomial) logistic regression.
///
/// One coefficient row means a binary model deciding between classes 0 and 1; `k > 1` rows
/// mean one score per class.
#[derive(Debug, Clone)]
pub struct Logistic {
    coef: Array2<f32>,
    intercept: Array1<f32>,
}

impl Logistic {
    pub fn new(coef: Vec<Vec<f32>>, intercept: Vec<f32>) -> Result<Self> {
        let k = coef.len();
        let n = coef.first().map(Vec::len).unwrap_or_default();

        if k == 0 || n == 0 {
            return Err(ClassifierErr::InvalidModel(
                "logistic coefficients must not be empty".into(),
            ));
        }

        if let Some(row) = coef.iter().find(|row| row.len() != n) {
            return Err(ClassifierErr::SizeMismatch {
                what: "coefficient row",
                got: row.len(),
                expected: n,
            });
        }

        if intercept.len() != k {
            return Err(ClassifierErr::SizeMismatch {
                what: "intercept",
                got: intercept.len(),
                expected: k,
            });
        }

        let coef = Array2::from_shape_vec((k, n), coef.into_iter().flatten().collect())
            .map_err(|e| ClassifierErr::InvalidModel(e.to_string()))?;

        Ok(Self {
            coef,
            intercept: Array1::from(intercept),
        })
    }
}

impl Estimator for Logistic {
    fn n_features(&self) -> usize {
        self.coef.ncols()
    }

    fn n_classes(&self) -> usize {
        match self.coef.nrows() {
            1 => 2,
            k => k,
        }
    }

    fn decide(&self, x: ArrayView2<f32>) -> Vec<usize> {
        let scores = x.dot(&self.coef.t()) + &self.intercept;

        if self.coef.nrows() == 1 {
            let sigmoid = ActFn::sigmoid(1.);
            return scores
                .column(0)
                .iter()
                .map(|z| usize::from(sigmoid.f(*z) >= 0.5))
                .collect();
        }

        scores.axis_iter(Axis(0)).map(argmax).collect()
    }
}
