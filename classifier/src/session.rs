use crate::{
    ClassifierErr, Label, Registry, Validation, input, invoker, schema::FEATURES, store::Skipped,
};

/// How loudly a notification should be presented.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Info,
    Warning,
    Error,
}

/// The user-facing outcome of an action.
#[derive(Debug, Clone, PartialEq)]
pub enum Notification {
    MissingSelection,
    UnknownModel(String),
    MissingField { feature: String },
    InvalidField { feature: String, value: String },
    LoadFailed(String),
    ModelsSkipped(Vec<Skipped>),
    InferenceFailed(String),
    Prediction(Label),
}

impl Notification {
    pub fn severity(&self) -> Severity {
        match self {
            Notification::MissingSelection
            | Notification::MissingField { .. }
            | Notification::ModelsSkipped(_) => Severity::Warning,
            Notification::UnknownModel(_)
            | Notification::InvalidField { .. }
            | Notification::LoadFailed(_)
            | Notification::InferenceFailed(_) => Severity::Error,
            Notification::Prediction(_) => Severity::Info,
        }
    }

    pub fn title(&self) -> &'static str {
        match self.severity() {
            Severity::Info => "Prediction Result",
            Severity::Warning => "Warning",
            Severity::Error => "Error",
        }
    }

    pub fn message(&self) -> String {
        match self {
            Notification::MissingSelection => "Please select a model!".into(),
            Notification::UnknownModel(name) => format!("Model '{name}' is not loaded."),
            Notification::MissingField { feature } => {
                format!("Please enter a value for {feature}!")
            }
            Notification::InvalidField { feature, value } => {
                format!("Invalid input value for {feature}: {value}")
            }
            Notification::LoadFailed(reason) => format!("Failed to load models: {reason}"),
            Notification::ModelsSkipped(skipped) => {
                let files = skipped
                    .iter()
                    .map(|s| format!("{}: {}", s.file.display(), s.reason))
                    .collect::<Vec<_>>()
                    .join("\n");
                format!("{} model file(s) could not be loaded:\n{files}", skipped.len())
            }
            Notification::InferenceFailed(reason) => {
                format!("An error occurred during classification: {reason}")
            }
            Notification::Prediction(label) => format!("Prediction: {label}"),
        }
    }
}

/// Runs the classify action against a loaded registry.
#[derive(Debug, Clone, Copy)]
pub struct Session<'r> {
    registry: &'r Registry,
    validation: Validation,
}

impl<'r> Session<'r> {
    pub fn new(registry: &'r Registry, validation: Validation) -> Self {
        Self {
            registry,
            validation,
        }
    }

    pub fn registry(&self) -> &'r Registry {
        self.registry
    }

    /// Collects `entries` and classifies them with the selected model.
    ///
    /// # Arguments
    /// * `selection` - The chosen model name, if any.
    /// * `entries` - One raw entry per schema feature, in schema order.
    ///
    /// # Returns
    /// The notification to show. No inference happens unless every entry is valid.
    pub fn submit<S: AsRef<str>>(&self, selection: Option<&str>, entries: &[S]) -> Notification {
        let Some(name) = selection.filter(|s| !s.is_empty()) else {
            return Notification::MissingSelection;
        };

        let Some(predictor) = self.registry.get(name) else {
            return Notification::UnknownModel(name.to_string());
        };

        let vector = match input::collect(&FEATURES, entries, self.validation) {
            Ok(vector) => vector,
            Err(ClassifierErr::EmptyField { feature }) => {
                return Notification::MissingField { feature };
            }
            Err(ClassifierErr::InvalidField { feature, value }) => {
                return Notification::InvalidField { feature, value };
            }
            Err(e) => return Notification::InferenceFailed(e.to_string()),
        };

        match invoker::classify(predictor, &vector) {
            Ok(label) => {
                log::info!("model {name} predicted {label}");
                Notification::Prediction(label)
            }
            Err(e) => {
                log::warn!("model {name} failed: {e}");
                Notification::InferenceFailed(e.to_string())
            }
        }
    }
}
