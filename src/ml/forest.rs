//! Random-forest regressor stored as flat per-tree node arrays.

use serde::{Deserialize, Serialize};

use super::{FEATURE_COUNT, FeatureRow, PredictiveModel};

/// Child index marking a leaf node.
pub const LEAF: i32 = -1;

/// Binary regression tree in parallel-array layout.
///
/// Node `i` is a leaf when `children_left[i] == LEAF`; otherwise rows with
/// `row[feature[i]] <= threshold[i]` route left and all others route right.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegressionTree {
    pub children_left: Vec<i32>,
    pub children_right: Vec<i32>,
    pub feature: Vec<i32>,
    pub threshold: Vec<f64>,
    /// Mean target per node; only leaf values are used for prediction.
    pub value: Vec<f64>,
}

impl RegressionTree {
    /// Number of nodes in the tree.
    pub fn n_nodes(&self) -> usize {
        self.children_left.len()
    }

    /// Validate array lengths and node links.
    ///
    /// Children must point strictly forward, which rules out cycles and
    /// guarantees traversal terminates.
    pub fn validate(&self) -> Result<(), String> {
        let n = self.n_nodes();
        if n == 0 {
            return Err("tree has no nodes".to_string());
        }
        if self.children_right.len() != n
            || self.feature.len() != n
            || self.threshold.len() != n
            || self.value.len() != n
        {
            return Err("node array lengths differ".to_string());
        }
        for node in 0..n {
            let left = self.children_left[node];
            let right = self.children_right[node];
            if left == LEAF {
                if right != LEAF {
                    return Err(format!("node {node} has a right child but no left child"));
                }
                if !self.value[node].is_finite() {
                    return Err(format!("leaf {node} has a non-finite value"));
                }
                continue;
            }
            for child in [left, right] {
                if child <= node as i32 || child as usize >= n {
                    return Err(format!("node {node} links to invalid child {child}"));
                }
            }
            let feature = self.feature[node];
            if feature < 0 || feature as usize >= FEATURE_COUNT {
                return Err(format!("node {node} splits on unknown feature {feature}"));
            }
            if self.threshold[node].is_nan() {
                return Err(format!("node {node} has a NaN threshold"));
            }
        }
        Ok(())
    }

    /// Route a row to its leaf and return the leaf value.
    pub fn predict(&self, row: &FeatureRow) -> f64 {
        let mut node = 0usize;
        loop {
            let left = self.children_left[node];
            if left == LEAF {
                return self.value[node];
            }
            let feature = self.feature[node] as usize;
            node = if row[feature] <= self.threshold[node] {
                left as usize
            } else {
                self.children_right[node] as usize
            };
        }
    }
}

/// Averaging ensemble of regression trees.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ForestRegressorModel {
    /// Model format version.
    pub model_version: i64,
    /// Training-time feature names, in column order.
    pub feature_names: Vec<String>,
    pub trees: Vec<RegressionTree>,
}

impl ForestRegressorModel {
    /// Validate structural invariants of every tree.
    pub fn validate(&self) -> Result<(), String> {
        if self.trees.is_empty() {
            return Err("forest has no trees".to_string());
        }
        for (idx, tree) in self.trees.iter().enumerate() {
            tree.validate().map_err(|err| format!("tree {idx}: {err}"))?;
        }
        Ok(())
    }
}

impl PredictiveModel for ForestRegressorModel {
    fn feature_names(&self) -> &[String] {
        &self.feature_names
    }

    fn predict(&self, row: &FeatureRow) -> f64 {
        let sum: f64 = self.trees.iter().map(|tree| tree.predict(row)).sum();
        sum / self.trees.len() as f64
    }

    fn describe(&self) -> String {
        format!(
            "random forest v{} ({} trees)",
            self.model_version,
            self.trees.len()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stump(feature: i32, threshold: f64, left: f64, right: f64) -> RegressionTree {
        RegressionTree {
            children_left: vec![1, LEAF, LEAF],
            children_right: vec![2, LEAF, LEAF],
            feature: vec![feature, -2, -2],
            threshold: vec![threshold, -2.0, -2.0],
            value: vec![(left + right) / 2.0, left, right],
        }
    }

    fn forest(trees: Vec<RegressionTree>) -> ForestRegressorModel {
        ForestRegressorModel {
            model_version: 1,
            feature_names: vec!["Sleep".into(), "Steps".into(), "Mood".into()],
            trees,
        }
    }

    #[test]
    fn tree_routes_threshold_ties_left() {
        let tree = stump(0, 7.0, 10.0, 90.0);
        assert_eq!(tree.predict(&[6.5, 0.0, 1.0]), 10.0);
        assert_eq!(tree.predict(&[7.0, 0.0, 1.0]), 10.0);
        assert_eq!(tree.predict(&[7.5, 0.0, 1.0]), 90.0);
    }

    #[test]
    fn forest_averages_tree_outputs() {
        let model = forest(vec![stump(0, 7.0, 10.0, 90.0), stump(2, 5.0, 20.0, 60.0)]);
        model.validate().unwrap();
        assert_eq!(model.predict(&[8.0, 0.0, 3.0]), 55.0);
        assert_eq!(model.predict(&[6.0, 0.0, 9.0]), 35.0);
    }

    #[test]
    fn validate_rejects_backward_links() {
        let mut tree = stump(0, 7.0, 10.0, 90.0);
        tree.children_right[0] = 0;
        let err = forest(vec![tree]).validate().unwrap_err();
        assert!(err.contains("tree 0"), "{err}");
    }

    #[test]
    fn validate_rejects_unknown_feature_and_length_mismatch() {
        let mut tree = stump(3, 7.0, 10.0, 90.0);
        assert!(tree.validate().is_err());
        tree.feature[0] = 1;
        tree.value.pop();
        assert!(tree.validate().is_err());
    }

    #[test]
    fn validate_rejects_empty_forest() {
        assert!(forest(Vec::new()).validate().is_err());
    }
}
