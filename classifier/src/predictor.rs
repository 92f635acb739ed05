use crate::{error::Result, input::InputVector, value::Value};

/// A label produced by a predictor.
pub type Label = Value;

/// Anything able to label rows of feature values.
pub trait Predictor {
    /// Labels every row of `batch`.
    ///
    /// # Arguments
    /// * `batch` - The rows to label.
    ///
    /// # Returns
    /// One label per row, or an error if the rows don't fit the model.
    fn predict(&self, batch: &[InputVector]) -> Result<Vec<Label>>;
}

impl<F> Predictor for F
where
    F: Fn(&[InputVector]) -> Result<Vec<Label>>,
{
    fn predict(&self, batch: &[InputVector]) -> Result<Vec<Label>> {
        self(batch)
    }
}
