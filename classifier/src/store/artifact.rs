use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::{
    ClassifierErr, Label, Predictor, Result,
    arch::{ActFn, Dense, Encoder, Estimator, Forest, Logistic, Node, Pipeline, Sequential, Tree},
    schema,
};

/// A model as stored on disk.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelArtifact {
    pub n_features: usize,
    pub classes: Vec<Label>,
    /// Feature name -> text value -> numeric code.
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub categories: BTreeMap<String, BTreeMap<String, f32>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scaler: Option<ScalerArtifact>,
    #[serde(flatten)]
    pub model: ModelKind,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScalerArtifact {
    pub mean: Vec<f32>,
    pub scale: Vec<f32>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ModelKind {
    Logistic {
        coef: Vec<Vec<f32>>,
        intercept: Vec<f32>,
    },
    Tree {
        nodes: Vec<Node>,
    },
    Forest {
        trees: Vec<Vec<Node>>,
    },
    Sequential {
        layers: Vec<LayerArtifact>,
    },
}

/// A single Dense layer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LayerArtifact {
    pub n: usize,
    pub m: usize,
    pub weights: Vec<f32>,
    pub biases: Vec<f32>,
    #[serde(default)]
    pub act_fn: Option<ActFnKind>,
    #[serde(default = "unit_amp")]
    pub act_amp: f32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActFnKind {
    Sigmoid,
    Relu,
}

fn unit_amp() -> f32 {
    1.0
}

impl ModelArtifact {
    /// Parses an artifact from its JSON text.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Converts the artifact into a ready to use predictor.
    ///
    /// # Errors
    /// Returns `InvalidModel` or `SizeMismatch` if the artifact is internally inconsistent.
    pub fn build(self) -> Result<Box<dyn Predictor>> {
        let ModelArtifact {
            n_features,
            classes,
            categories,
            scaler,
            model,
        } = self;

        let mut encoder = Encoder::new(n_features);
        for (feature, codes) in categories {
            let index = schema::position(&feature).ok_or_else(|| {
                ClassifierErr::InvalidModel(format!("categories for unknown feature {feature}"))
            })?;
            encoder = encoder.with_categories(index, codes)?;
        }

        if let Some(ScalerArtifact { mean, scale }) = scaler {
            encoder = encoder.with_scaler(mean, scale)?;
        }

        let n_classes = classes.len();

        match model {
            ModelKind::Logistic { coef, intercept } => {
                boxed(encoder, classes, Logistic::new(coef, intercept)?)
            }
            ModelKind::Tree { nodes } => {
                boxed(encoder, classes, Tree::new(nodes, n_features, n_classes)?)
            }
            ModelKind::Forest { trees } => {
                let trees = trees
                    .into_iter()
                    .map(|nodes| Tree::new(nodes, n_features, n_classes))
                    .collect::<Result<Vec<_>>>()?;
                boxed(encoder, classes, Forest::new(trees)?)
            }
            ModelKind::Sequential { layers } => {
                let layers = layers
                    .into_iter()
                    .map(LayerArtifact::build)
                    .collect::<Result<Vec<_>>>()?;
                boxed(encoder, classes, Sequential::new(layers)?)
            }
        }
    }
}

impl LayerArtifact {
    fn build(self) -> Result<Dense> {
        let act_fn = self.act_fn.map(|kind| match kind {
            ActFnKind::Sigmoid => ActFn::sigmoid(self.act_amp),
            ActFnKind::Relu => ActFn::relu(),
        });

        Dense::new((self.n, self.m), self.weights, self.biases, act_fn)
    }
}

fn boxed<E>(encoder: Encoder, classes: Vec<Label>, estimator: E) -> Result<Box<dyn Predictor>>
where
    E: Estimator + 'static,
{
    Ok(Box::new(Pipeline::new(encoder, classes, estimator)?))
}
