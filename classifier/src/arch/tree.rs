use ndarray::{ArrayView1, ArrayView2, Axis};
use serde::{Deserialize, Serialize};

use super::{Estimator, argmax_counts};
use crate::{ClassifierErr, Result};

/// A decision tree node, stored in a flat list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Node {
    /// Goes to `left` when `x[feature] <= threshold`, otherwise to `right`.
    Split {
        feature: usize,
        threshold: f32,
        left: usize,
        right: usize,
    },
    Leaf {
        class: usize,
    },
}

#[derive(Debug, Clone)]
pub struct Tree {
    nodes: Vec<Node>,
    n_features: usize,
    n_classes: usize,
}

impl Tree {
    /// Creates a new `Tree` rooted at `nodes[0]`.
    ///
    /// Children must come after their parent so every walk terminates.
    pub fn new(nodes: Vec<Node>, n_features: usize, n_classes: usize) -> Result<Self> {
        if nodes.is_empty() {
            return Err(ClassifierErr::InvalidModel("tree has no nodes".into()));
        }

        let invalid = |i: usize, msg: String| ClassifierErr::InvalidModel(format!("node {i}: {msg}"));

        for (i, node) in nodes.iter().enumerate() {
            match *node {
                Node::Split {
                    feature,
                    left,
                    right,
                    ..
                } => {
                    if feature >= n_features {
                        return Err(invalid(i, format!("feature {feature} out of range")));
                    }

                    for child in [left, right] {
                        if child <= i || child >= nodes.len() {
                            return Err(invalid(i, format!("child {child} out of order")));
                        }
                    }
                }
                Node::Leaf { class } => {
                    if class >= n_classes {
                        return Err(invalid(i, format!("class {class} out of range")));
                    }
                }
            }
        }

        Ok(Self {
            nodes,
            n_features,
            n_classes,
        })
    }

    fn leaf(&self, row: ArrayView1<f32>) -> usize {
        let mut i = 0;

        loop {
            match self.nodes[i] {
                Node::Split {
                    feature,
                    threshold,
                    left,
                    right,
                } => i = if row[feature] <= threshold { left } else { right },
                Node::Leaf { class } => return class,
            }
        }
    }
}

impl Estimator for Tree {
    fn n_features(&self) -> usize {
        self.n_features
    }

    fn n_classes(&self) -> usize {
        self.n_classes
    }

    fn decide(&self, x: ArrayView2<f32>) -> Vec<usize> {
        x.axis_iter(Axis(0)).map(|row| self.leaf(row)).collect()
    }
}

/// Majority vote over several trees. Ties go to the lowest class index.
#[derive(Debug, Clone)]
pub struct Forest {
    trees: Vec<Tree>,
}

impl Forest {
    pub fn new(trees: Vec<Tree>) -> Result<Self> {
        let Some(first) = trees.first() else {
            return Err(ClassifierErr::InvalidModel("forest has no trees".into()));
        };

        let (n_features, n_classes) = (first.n_features, first.n_classes);
        if trees
            .iter()
            .any(|t| t.n_features != n_features || t.n_classes != n_classes)
        {
            return Err(ClassifierErr::InvalidModel(
                "forest trees disagree on their shape".into(),
            ));
        }

        Ok(Self { trees })
    }
}

impl Estimator for Forest {
    fn n_features(&self) -> usize {
        self.trees[0].n_features
    }

    fn n_classes(&self) -> usize {
        self.trees[0].n_classes
    }

    fn decide(&self, x: ArrayView2<f32>) -> Vec<usize> {
        x.axis_iter(Axis(0))
            .map(|row| {
                let mut votes = vec![0; self.n_classes()];
                for tree in &self.trees {
                    votes[tree.leaf(row)] += 1;
                }
                argmax_counts(&votes)
            })
            .collect()
    }
}
