mod activations;
mod dense;
mod encoder;
mod linear;
mod pipeline;
mod sequential;
mod test;
mod tree;

pub use activations::ActFn;
pub use dense::Dense;
pub use encoder::Encoder;
pub use linear::Logistic;
pub use pipeline::Pipeline;
pub use sequential::Sequential;
pub use tree::{Forest, Node, Tree};

use ndarray::{ArrayView1, ArrayView2};

/// The numeric core of a model: maps encoded rows to class indices.
pub trait Estimator {
    /// Returns the amount of columns every row must have.
    fn n_features(&self) -> usize;

    /// Returns the amount of class indices `decide` may produce.
    fn n_classes(&self) -> usize;

    /// Picks a class index for every row of `x`.
    ///
    /// `x` must have exactly `n_features` columns.
    fn decide(&self, x: ArrayView2<f32>) -> Vec<usize>;
}

/// Index of the first maximum, NaNs never win.
fn argmax(row: ArrayView1<f32>) -> usize {
    let mut best = 0;
    let mut best_score = f32::NEG_INFINITY;

    for (i, &score) in row.iter().enumerate() {
        if score > best_score {
            best = i;
            best_score = score;
        }
    }

    best
}

fn argmax_counts(counts: &[usize]) -> usize {
    let mut best = 0;
    for (i, &count) in counts.iter().enumerate() {
        if count > counts[best] {
            best = i;
        }
    }
    best
}
