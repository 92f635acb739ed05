use super::{Encoder, Estimator};
use crate::{ClassifierErr, InputVector, Label, Predictor, Result};

/// An encoder, an estimator and the labels its class indices stand for.
#[derive(Debug, Clone)]
pub struct Pipeline<E> {
    encoder: Encoder,
    classes: Vec<Label>,
    estimator: E,
}

impl<E: Estimator> Pipeline<E> {
    /// Creates a new `Pipeline`.
    ///
    /// # Errors
    /// `InvalidModel` without classes, `SizeMismatch` if the parts disagree on the amount of
    /// features or classes.
    pub fn new(encoder: Encoder, classes: Vec<Label>, estimator: E) -> Result<Self> {
        if classes.is_empty() || estimator.n_classes() == 0 {
            return Err(ClassifierErr::InvalidModel("model has no classes".into()));
        }

        if encoder.n_features() != estimator.n_features() {
            return Err(ClassifierErr::SizeMismatch {
                what: "model features",
                got: estimator.n_features(),
                expected: encoder.n_features(),
            });
        }

        if classes.len() != estimator.n_classes() {
            return Err(ClassifierErr::SizeMismatch {
                what: "classes",
                got: classes.len(),
                expected: estimator.n_classes(),
            });
        }

        Ok(Self {
            encoder,
            classes,
            estimator,
        })
    }
}

impl<E: Estimator> Predictor for Pipeline<E> {
    fn predict(&self, batch: &[InputVector]) -> Result<Vec<Label>> {
        let x = self.encoder.encode(batch)?;

        self.estimator
            .decide(x.view())
            .into_iter()
            .map(|i| {
                self.classes.get(i).cloned().ok_or_else(|| {
                    ClassifierErr::InvalidModel(format!("class index {i} out of range"))
                })
            })
            .collect()
    }
}
