use serde::{Deserialize, Serialize};

use crate::Classifier;
use crate::error::ModelError;

/// Marker in `children_left` / `children_right` for a leaf node.
pub const LEAF: i64 = -1;

/// A binary decision tree stored as flat node arrays.
///
/// Node `i` is a leaf when `children_left[i] == LEAF`. Otherwise a row goes
/// to `children_left[i]` when `row[feature[i]] <= threshold[i]` and to
/// `children_right[i]` when not. `value[i]` holds the per-class weight of
/// the training samples that reached node `i`; only leaf values are read.
///
/// Row values are rounded to `f32` before each comparison. The trees were
/// fitted on single-precision inputs and scored that way at export time, so
/// an `f64` comparison can send a row sitting within `f32` rounding of a
/// threshold to the other leaf. Thresholds stay `f64`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DecisionTree {
    pub children_left: Vec<i64>,
    pub children_right: Vec<i64>,
    pub feature: Vec<i64>,
    pub threshold: Vec<f64>,
    pub value: Vec<Vec<f64>>,
}

impl DecisionTree {
    pub fn node_count(&self) -> usize {
        self.children_left.len()
    }

    /// Structural checks run once at load so that traversal cannot fail.
    ///
    /// Children must have a larger index than their parent, which rules out
    /// cycles and bounds every walk by the node count.
    pub fn validate(&self, n_features: usize) -> Result<(), ModelError> {
        let n = self.node_count();
        if n == 0 {
            return Err(ModelError::invalid("random_forest", "tree has no nodes"));
        }
        if self.children_right.len() != n
            || self.feature.len() != n
            || self.threshold.len() != n
            || self.value.len() != n
        {
            return Err(ModelError::invalid(
                "random_forest",
                "tree node arrays differ in length",
            ));
        }

        for i in 0..n {
            let (left, right) = (self.children_left[i], self.children_right[i]);
            if left == LEAF {
                if right != LEAF {
                    return Err(ModelError::invalid(
                        "random_forest",
                        format!("node {i} has only one child"),
                    ));
                }
                let value = &self.value[i];
                if value.len() != 2 {
                    return Err(ModelError::invalid(
                        "random_forest",
                        format!("leaf {i} has {} classes, expected 2", value.len()),
                    ));
                }
                if value.iter().any(|v| !v.is_finite() || *v < 0.0)
                    || value.iter().sum::<f64>() <= 0.0
                {
                    return Err(ModelError::invalid(
                        "random_forest",
                        format!("leaf {i} has no usable class weight"),
                    ));
                }
                continue;
            }

            for child in [left, right] {
                if child <= i as i64 || child >= n as i64 {
                    return Err(ModelError::invalid(
                        "random_forest",
                        format!("node {i} points to invalid child {child}"),
                    ));
                }
            }
            let feature = self.feature[i];
            if feature < 0 || feature >= n_features as i64 {
                return Err(ModelError::invalid(
                    "random_forest",
                    format!("node {i} splits on unknown feature {feature}"),
                ));
            }
            if !self.threshold[i].is_finite() {
                return Err(ModelError::invalid(
                    "random_forest",
                    format!("node {i} has a non-finite threshold"),
                ));
            }
        }
        Ok(())
    }

    /// Positive-class fraction at the leaf this row falls into.
    fn leaf_probability(&self, row: &[f64]) -> f64 {
        let mut node = 0usize;
        while self.children_left[node] != LEAF {
            let feature = self.feature[node] as usize;
            node = if f64::from(row[feature] as f32) <= self.threshold[node] {
                self.children_left[node] as usize
            } else {
                self.children_right[node] as usize
            };
        }
        let value = &self.value[node];
        value[1] / (value[0] + value[1])
    }
}

/// Random forest classifier. The positive-class probability is the mean of
/// the per-tree leaf class fractions.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RandomForest {
    pub n_features: usize,
    pub trees: Vec<DecisionTree>,
}

impl RandomForest {
    pub fn validate(&self) -> Result<(), ModelError> {
        if self.trees.is_empty() {
            return Err(ModelError::invalid("random_forest", "forest has no trees"));
        }
        if self.n_features == 0 {
            return Err(ModelError::invalid("random_forest", "n_features is zero"));
        }
        for (i, tree) in self.trees.iter().enumerate() {
            tree.validate(self.n_features).map_err(|e| match e {
                ModelError::InvalidArtifact { artifact, reason } => ModelError::InvalidArtifact {
                    artifact,
                    reason: format!("tree {i}: {reason}"),
                },
                other => other,
            })?;
        }
        Ok(())
    }
}

impl Classifier for RandomForest {
    fn kind(&self) -> &str {
        "random_forest"
    }

    fn n_features(&self) -> usize {
        self.n_features
    }

    fn predict_positive(&self, features: &[f64]) -> Result<f64, ModelError> {
        if features.len() != self.n_features {
            return Err(ModelError::DimensionMismatch {
                artifact: self.kind().to_string(),
                expected: self.n_features,
                actual: features.len(),
            });
        }
        let total: f64 = self
            .trees
            .iter()
            .map(|tree| tree.leaf_probability(features))
            .sum();
        Ok(total / self.trees.len() as f64)
    }
}
