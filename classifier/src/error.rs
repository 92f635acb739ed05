use std::{
    error::Error,
    fmt::{self, Display},
    io,
    path::PathBuf,
};

/// The result type used in the entire classifier crate.
pub type Result<T> = std::result::Result<T, ClassifierErr>;

/// The classifier crate's error type.
#[derive(Debug)]
pub enum ClassifierErr {
    Io(io::Error),
    /// The models directory could not be listed.
    ReadDir {
        path: PathBuf,
        source: io::Error,
    },
    /// A model file could not be turned into a predictor.
    InvalidArtifact {
        file: PathBuf,
        reason: String,
    },
    /// A model description is internally inconsistent.
    InvalidModel(String),
    EmptyField {
        feature: String,
    },
    InvalidField {
        feature: String,
        value: String,
    },
    SizeMismatch {
        what: &'static str,
        got: usize,
        expected: usize,
    },
    /// A text value has no numeric encoding in the selected model.
    UnencodedValue {
        feature: String,
        value: String,
    },
    EmptyPrediction,
    UnknownModel(String),
    Config {
        key: &'static str,
        value: String,
    },
}

impl Display for ClassifierErr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ClassifierErr::Io(e) => write!(f, "io error: {e}"),
            ClassifierErr::ReadDir { path, source } => {
                write!(f, "cannot list '{}': {source}", path.display())
            }
            ClassifierErr::InvalidArtifact { file, reason } => {
                write!(f, "cannot load '{}': {reason}", file.display())
            }
            ClassifierErr::InvalidModel(msg) => write!(f, "invalid model: {msg}"),
            ClassifierErr::EmptyField { feature } => {
                write!(f, "Please enter a value for {feature}!")
            }
            ClassifierErr::InvalidField { feature, value } => {
                write!(f, "Invalid input value for {feature}: {value}")
            }
            ClassifierErr::SizeMismatch {
                what,
                got,
                expected,
            } => write!(
                f,
                "size mismatch for {what}: got {got}, expected {expected}"
            ),
            ClassifierErr::UnencodedValue { feature, value } => {
                write!(f, "the model has no encoding for {feature} = '{value}'")
            }
            ClassifierErr::EmptyPrediction => write!(f, "the model returned no prediction"),
            ClassifierErr::UnknownModel(name) => write!(f, "unknown model: {name}"),
            ClassifierErr::Config { key, value } => {
                write!(f, "invalid value for {key}: '{value}'")
            }
        }
    }
}

impl Error for ClassifierErr {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            ClassifierErr::Io(e) => Some(e),
            ClassifierErr::ReadDir { source, .. } => Some(source),
            _ => None,
        }
    }
}

impl From<io::Error> for ClassifierErr {
    fn from(value: io::Error) -> Self {
        Self::Io(value)
    }
}

impl From<serde_json::Error> for ClassifierErr {
    fn from(value: serde_json::Error) -> Self {
        Self::InvalidModel(value.to_string())
    }
}
