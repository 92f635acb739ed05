use std::slice;

use crate::{
    error::{ClassifierErr, Result},
    input::InputVector,
    predictor::{Label, Predictor},
};

/// Labels a single vector with `predictor`.
///
/// # Errors
/// Whatever the predictor rejects, or `EmptyPrediction` if it returned no labels.
pub fn classify(predictor: &dyn Predictor, vector: &InputVector) -> Result<Label> {
    let labels = predictor.predict(slice::from_ref(vector))?;
    log::debug!("predictor returned {} label(s)", labels.len());

    labels.into_iter().next().ok_or(ClassifierErr::EmptyPrediction)
}
