use std::collections::HashMap;

use ndarray::{Array1, Array2};

use crate::{ClassifierErr, InputVector, Result, Value, schema};

/// Turns input vectors into the numeric matrix a model consumes.
///
/// Text values are looked up in per-feature category tables, numbers pass through, and an
/// optional standard scaler is applied last.
#[derive(Debug, Clone)]
pub struct Encoder {
    n_features: usize,
    categories: Vec<Option<HashMap<String, f32>>>,
    scaler: Option<(Array1<f32>, Array1<f32>)>,
}

impl Encoder {
    pub fn new(n_features: usize) -> Self {
        Self {
            n_features,
            categories: vec![None; n_features],
            scaler: None,
        }
    }

    /// Registers the numeric codes of a categorical feature.
    ///
    /// Keys are matched trimmed and case-insensitively.
    pub fn with_categories<I, S>(mut self, index: usize, codes: I) -> Result<Self>
    where
        I: IntoIterator<Item = (S, f32)>,
        S: AsRef<str>,
    {
        let slot = self.categories.get_mut(index).ok_or_else(|| {
            ClassifierErr::InvalidModel(format!(
                "categories for {} but the model takes {} features",
                schema::name(index),
                self.n_features
            ))
        })?;

        let table = slot.get_or_insert_with(HashMap::new);
        table.extend(codes.into_iter().map(|(k, v)| (normalize(k.as_ref()), v)));
        Ok(self)
    }

    /// Standardizes every column as `(x - mean) / scale`.
    pub fn with_scaler(mut self, mean: Vec<f32>, scale: Vec<f32>) -> Result<Self> {
        for (what, len) in [("scaler mean", mean.len()), ("scaler scale", scale.len())] {
            if len != self.n_features {
                return Err(ClassifierErr::SizeMismatch {
                    what,
                    got: len,
                    expected: self.n_features,
                });
            }
        }

        if scale.iter().any(|s| *s == 0. || !s.is_finite()) {
            return Err(ClassifierErr::InvalidModel(
                "scaler scale must be finite and non-zero".into(),
            ));
        }

        self.scaler = Some((Array1::from(mean), Array1::from(scale)));
        Ok(self)
    }

    pub fn n_features(&self) -> usize {
        self.n_features
    }

    /// Encodes a batch into a `(rows, n_features)` matrix.
    ///
    /// # Errors
    /// `SizeMismatch` if a row has the wrong arity, `UnencodedValue` if a text value has no code.
    pub fn encode(&self, batch: &[InputVector]) -> Result<Array2<f32>> {
        let mut x = Array2::zeros((batch.len(), self.n_features));

        for (r, row) in batch.iter().enumerate() {
            if row.len() != self.n_features {
                return Err(ClassifierErr::SizeMismatch {
                    what: "features",
                    got: row.len(),
                    expected: self.n_features,
                });
            }

            for (c, value) in row.iter().enumerate() {
                x[[r, c]] = self.encode_value(c, value)?;
            }
        }

        if let Some((mean, scale)) = &self.scaler {
            x -= mean;
            x /= scale;
        }

        Ok(x)
    }

    fn encode_value(&self, index: usize, value: &Value) -> Result<f32> {
        let text = match value {
            Value::Number(n) => return Ok(*n as f32),
            Value::Text(t) => t,
        };

        self.categories[index]
            .as_ref()
            .and_then(|table| table.get(&normalize(text)))
            .copied()
            .ok_or_else(|| ClassifierErr::UnencodedValue {
                feature: schema::name(index),
                value: text.clone(),
            })
    }
}

fn normalize(key: &str) -> String {
    key.trim().to_lowercase()
}
