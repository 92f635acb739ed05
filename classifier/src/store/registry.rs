use std::{collections::BTreeMap, fmt};

use crate::Predictor;

/// Loaded predictors keyed by model name, iterated in name order.
#[derive(Default)]
pub struct Registry {
    models: BTreeMap<String, Box<dyn Predictor>>,
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a predictor, returning the one previously stored under `name`.
    pub fn insert<S: Into<String>>(
        &mut self,
        name: S,
        predictor: Box<dyn Predictor>,
    ) -> Option<Box<dyn Predictor>> {
        self.models.insert(name.into(), predictor)
    }

    pub fn get(&self, name: &str) -> Option<&dyn Predictor> {
        self.models.get(name).map(|p| p.as_ref())
    }

    pub fn contains(&self, name: &str) -> bool {
        self.models.contains_key(name)
    }

    /// Returns the model names in ascending order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.models.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.models.len()
    }

    pub fn is_empty(&self) -> bool {
        self.models.is_empty()
    }
}

impl fmt::Debug for Registry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.names()).finish()
    }
}
