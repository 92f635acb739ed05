use std::{env, path::PathBuf};

use crate::{LoadPolicy, Result, Validation};

pub const MODELS_DIR_VAR: &str = "CKD_MODELS_DIR";
pub const LOAD_POLICY_VAR: &str = "CKD_LOAD_POLICY";
pub const VALIDATION_VAR: &str = "CKD_VALIDATION";

const DEFAULT_MODELS_DIR: &str = "models";

/// Immutable settings read once at startup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub models_dir: PathBuf,
    pub load_policy: LoadPolicy,
    pub validation: Validation,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            models_dir: PathBuf::from(DEFAULT_MODELS_DIR),
            load_policy: LoadPolicy::default(),
            validation: Validation::default(),
        }
    }
}

impl AppConfig {
    /// Reads the configuration from the process environment.
    ///
    /// # Errors
    /// Returns a `Config` error if a variable holds an unknown value.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Reads the configuration through `lookup`, falling back to defaults for unset keys.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(dir) = lookup(MODELS_DIR_VAR).filter(|d| !d.trim().is_empty()) {
            config.models_dir = PathBuf::from(dir);
        }

        if let Some(policy) = lookup(LOAD_POLICY_VAR) {
            config.load_policy = policy.parse()?;
        }

        if let Some(validation) = lookup(VALIDATION_VAR) {
            config.validation = validation.parse()?;
        }

        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;
    use crate::ClassifierErr;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn unset_variables_use_defaults() {
        let config = AppConfig::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config, AppConfig::default());
        assert_eq!(config.models_dir, PathBuf::from("models"));
        assert_eq!(config.load_policy, LoadPolicy::SkipInvalid);
        assert_eq!(config.validation, Validation::Lenient);
    }

    #[test]
    fn variables_override_defaults() {
        let config = AppConfig::from_lookup(lookup(&[
            (MODELS_DIR_VAR, "/srv/models"),
            (LOAD_POLICY_VAR, "fail_fast"),
            (VALIDATION_VAR, "numeric"),
        ]))
        .unwrap();

        assert_eq!(config.models_dir, PathBuf::from("/srv/models"));
        assert_eq!(config.load_policy, LoadPolicy::FailFast);
        assert_eq!(config.validation, Validation::Numeric);
    }

    #[test]
    fn unknown_values_are_rejected() {
        let err = AppConfig::from_lookup(lookup(&[(LOAD_POLICY_VAR, "retry")])).unwrap_err();
        assert!(matches!(err, ClassifierErr::Config { value, .. } if value == "retry"));
    }
}
