use std::fmt::{self, Display};

use serde::{Deserialize, Serialize};

/// A single scalar entered for a feature, or a label produced by a model.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Value {
    Number(f64),
    Text(String),
}

impl Value {
    /// Coerces a raw entry: purely numeric strings become numbers, anything else stays text.
    pub fn coerce(raw: &str) -> Self {
        if looks_numeric(raw) {
            if let Ok(n) = raw.parse() {
                return Self::Number(n);
            }
        }

        Self::Text(raw.to_string())
    }

    pub fn as_number(&self) -> Option<f64> {
        match self {
            Value::Number(n) => Some(*n),
            Value::Text(_) => None,
        }
    }
}

impl Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Number(n) => write!(f, "{n:?}"),
            Value::Text(t) => write!(f, "{t}"),
        }
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

/// ASCII decimal digits with at most one `.` separator and at least one digit.
///
/// Signs, exponents and surrounding whitespace do not qualify.
pub fn looks_numeric(raw: &str) -> bool {
    let mut digits = 0;
    let mut dots = 0;

    for c in raw.chars() {
        match c {
            '0'..='9' => digits += 1,
            '.' => dots += 1,
            _ => return false,
        }
    }

    digits > 0 && dots <= 1
}
