use ndarray::{Array2, ArrayView2, Axis};

use super::{Dense, Estimator, argmax};
use crate::{ClassifierErr, Result};

/// A feed-forward network: information flows through its layers in order.
#[derive(Debug, Clone)]
pub struct Sequential {
    layers: Vec<Dense>,
}

impl Sequential {
    /// Creates a new `Sequential`.
    ///
    /// # Arguments
    /// * `layers` - The layers the sequential is composed of.
    ///
    /// # Returns
    /// A new `Sequential` instance, or an error if consecutive layers don't chain.
    pub fn new<I>(layers: I) -> Result<Self>
    where
        I: IntoIterator<Item = Dense>,
    {
        let layers: Vec<Dense> = layers.into_iter().collect();

        if layers.is_empty() {
            return Err(ClassifierErr::InvalidModel(
                "model must have at least one layer".into(),
            ));
        }

        for pair in layers.windows(2) {
            let (prev, next) = (pair[0].dim(), pair[1].dim());
            if prev.1 != next.0 {
                return Err(ClassifierErr::SizeMismatch {
                    what: "layer inputs",
                    got: next.0,
                    expected: prev.1,
                });
            }
        }

        Ok(Self { layers })
    }

    /// Makes a forward pass through the network.
    pub fn forward(&self, x: ArrayView2<f32>) -> Array2<f32> {
        let mut layers = self.layers.iter();
        let mut a = match layers.next() {
            Some(first) => first.forward(x),
            None => x.to_owned(),
        };

        for layer in layers {
            a = layer.forward(a.view());
        }

        a
    }

    fn n_outputs(&self) -> usize {
        self.layers[self.layers.len() - 1].dim().1
    }
}

impl Estimator for Sequential {
    fn n_features(&self) -> usize {
        self.layers[0].dim().0
    }

    fn n_classes(&self) -> usize {
        match self.n_outputs() {
            1 => 2,
            k => k,
        }
    }

    fn decide(&self, x: ArrayView2<f32>) -> Vec<usize> {
        let y = self.forward(x);

        if self.n_outputs() == 1 {
            return y.column(0).iter().map(|y| usize::from(*y >= 0.5)).collect();
        }

        y.axis_iter(Axis(0)).map(argmax).collect()
    }
}
