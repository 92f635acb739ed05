use std::{ops::Deref, str::FromStr};

use crate::{
    error::{ClassifierErr, Result},
    schema::FEATURES,
    value::{Value, looks_numeric},
};

/// How strictly entries are checked before coercion.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Validation {
    /// Any non-blank entry is accepted.
    #[default]
    Lenient,
    /// Only numeric-looking entries are accepted.
    Numeric,
}

impl FromStr for Validation {
    type Err = ClassifierErr;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "lenient" => Ok(Self::Lenient),
            "numeric" => Ok(Self::Numeric),
            _ => Err(ClassifierErr::Config {
                key: "validation",
                value: s.to_string(),
            }),
        }
    }
}

/// One value per schema feature, in schema order.
///
/// Built by [`collect`] or through `TryFrom`, both of which enforce the schema length.
#[derive(Debug, Clone, PartialEq)]
pub struct InputVector(Vec<Value>);

impl InputVector {
    /// Wraps `values` without the schema length check, for exercising narrow models.
    #[cfg(test)]
    pub(crate) fn unchecked(values: Vec<Value>) -> Self {
        Self(values)
    }
}

impl TryFrom<Vec<Value>> for InputVector {
    type Error = ClassifierErr;

    fn try_from(values: Vec<Value>) -> Result<Self> {
        if values.len() != FEATURES.len() {
            return Err(ClassifierErr::SizeMismatch {
                what: "entries",
                got: values.len(),
                expected: FEATURES.len(),
            });
        }

        Ok(Self(values))
    }
}

impl Deref for InputVector {
    type Target = [Value];

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

/// Checks a single raw entry.
///
/// # Errors
/// `EmptyField` for blank entries, and `InvalidField` for non-numeric entries under
/// [`Validation::Numeric`].
pub fn validate(value: &str, feature: &str, mode: Validation) -> Result<()> {
    if value.is_empty() {
        return Err(ClassifierErr::EmptyField {
            feature: feature.to_string(),
        });
    }

    if mode == Validation::Numeric && !looks_numeric(value) {
        return Err(ClassifierErr::InvalidField {
            feature: feature.to_string(),
            value: value.to_string(),
        });
    }

    Ok(())
}

/// Builds an [`InputVector`] from raw entries aligned with `features`.
///
/// The first entry failing [`validate`] aborts the whole collection.
///
/// # Arguments
/// * `features` - The feature names, in positional order.
/// * `raw` - One raw entry per feature.
/// * `mode` - The validation strictness.
///
/// # Returns
/// The coerced vector, the first validation error, or a size mismatch when `features`
/// does not cover the schema.
pub fn collect<S: AsRef<str>>(
    features: &[&str],
    raw: &[S],
    mode: Validation,
) -> Result<InputVector> {
    if raw.len() != features.len() {
        return Err(ClassifierErr::SizeMismatch {
            what: "entries",
            got: raw.len(),
            expected: features.len(),
        });
    }

    features
        .iter()
        .zip(raw)
        .map(|(feature, value)| {
            let value = value.as_ref();
            validate(value, feature, mode)?;
            Ok(Value::coerce(value))
        })
        .collect::<Result<Vec<_>>>()
        .and_then(InputVector::try_from)
}
