//! Regression tree ensembles (random forest, gradient boosting).
//!
//! Nodes are stored flat, root first. A split sends a row left when
//! `row[feature] <= threshold`. Children always sit after their parent,
//! which validation enforces, so traversal cannot loop.

use serde::{Deserialize, Serialize};

use premia_core::errors::{ModelError, ModelLoadError};
use premia_core::{FeatureVector, IRegressor, FEATURE_COUNT};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TreeNode {
    Split {
        feature: usize,
        threshold: f64,
        left: usize,
        right: usize,
    },
    Leaf {
        value: f64,
    },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RegressionTree {
    pub nodes: Vec<TreeNode>,
}

impl RegressionTree {
    fn validate(&self, tree: usize) -> Result<(), ModelLoadError> {
        let malformed = |reason: String| ModelLoadError::Malformed {
            reason: format!("tree {tree}: {reason}"),
        };

        if self.nodes.is_empty() {
            return Err(malformed("has no nodes".to_string()));
        }
        for (i, node) in self.nodes.iter().enumerate() {
            match *node {
                TreeNode::Split {
                    feature,
                    threshold,
                    left,
                    right,
                } => {
                    if feature >= FEATURE_COUNT {
                        return Err(malformed(format!(
                            "node {i} splits on feature {feature}, only {FEATURE_COUNT} exist"
                        )));
                    }
                    if !threshold.is_finite() {
                        return Err(malformed(format!("node {i} threshold is not finite")));
                    }
                    for child in [left, right] {
                        if child <= i || child >= self.nodes.len() {
                            return Err(malformed(format!(
                                "node {i} has invalid child index {child}"
                            )));
                        }
                    }
                }
                TreeNode::Leaf { value } => {
                    if !value.is_finite() {
                        return Err(malformed(format!("leaf {i} value is not finite")));
                    }
                }
            }
        }
        Ok(())
    }

    /// Walk from the root to a leaf.
    pub fn predict(&self, row: &FeatureVector) -> Result<f64, ModelError> {
        let mut index = 0;
        loop {
            match self.nodes.get(index) {
                Some(TreeNode::Leaf { value }) => return Ok(*value),
                Some(TreeNode::Split {
                    feature,
                    threshold,
                    left,
                    right,
                }) => {
                    index = if row[*feature] <= *threshold {
                        *left
                    } else {
                        *right
                    };
                }
                None => {
                    return Err(ModelError::inference(format!(
                        "tree node {index} does not exist"
                    )))
                }
            }
        }
    }
}

/// How per-tree outputs are combined.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Aggregation {
    /// Average of trees (random forest).
    #[default]
    Mean,
    /// `base_score` plus the sum of trees (gradient boosting).
    Sum,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TreeEnsemble {
    pub feature_names: Vec<String>,
    pub trees: Vec<RegressionTree>,
    #[serde(default)]
    pub aggregation: Aggregation,
    #[serde(default)]
    pub base_score: f64,
}

impl TreeEnsemble {
    pub(crate) fn validate(&self) -> Result<(), ModelLoadError> {
        if self.trees.is_empty() {
            return Err(ModelLoadError::Malformed {
                reason: "tree ensemble has no trees".to_string(),
            });
        }
        if !self.base_score.is_finite() {
            return Err(ModelLoadError::Malformed {
                reason: "base_score is not finite".to_string(),
            });
        }
        self.trees
            .iter()
            .enumerate()
            .try_for_each(|(i, tree)| tree.validate(i))
    }

    fn predict_row(&self, row: &FeatureVector) -> Result<f64, ModelError> {
        let mut total = 0.0;
        for tree in &self.trees {
            total += tree.predict(row)?;
        }
        Ok(match self.aggregation {
            Aggregation::Mean => total / self.trees.len() as f64,
            Aggregation::Sum => self.base_score + total,
        })
    }
}

impl IRegressor for TreeEnsemble {
    fn kind(&self) -> &str {
        "tree_ensemble"
    }

    fn predict_batch(&self, batch: &[FeatureVector]) -> Result<Vec<f64>, ModelError> {
        batch.iter().map(|row| self.predict_row(row)).collect()
    }
}
