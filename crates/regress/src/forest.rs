//! Random-forest regression over flat node arrays.

use nimbus_features::FeatureSchema;
use serde::{Deserialize, Serialize};

use crate::error::RegressError;
use crate::linear::StandardScaler;
use crate::regressor::VariableRegressor;
use crate::variable::{Unit, Variable};

/// One node of a regression tree.
///
/// Split nodes send `x[feature] <= threshold` to `left`, everything else to
/// `right`. Child indices must point past the parent, so every walk ends.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Node {
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

/// A regression tree stored as a flat node array rooted at index 0.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tree {
    pub nodes: Vec<Node>,
}

impl Tree {
    fn check(&self, variable: Variable, tree: usize, n_features: usize) -> Result<(), RegressError> {
        let invalid = |reason: String| RegressError::InvalidModel {
            variable,
            reason: format!("tree {tree}: {reason}"),
        };
        if self.nodes.is_empty() {
            return Err(invalid("no nodes".to_string()));
        }
        let n = self.nodes.len();
        for (i, node) in self.nodes.iter().enumerate() {
            match *node {
                Node::Split {
                    feature,
                    threshold,
                    left,
                    right,
                } => {
                    if feature >= n_features {
                        return Err(invalid(format!(
                            "node {i} splits on feature {feature} of {n_features}"
                        )));
                    }
                    if threshold.is_nan() {
                        return Err(invalid(format!("node {i} has a NaN threshold")));
                    }
                    for child in [left, right] {
                        if child <= i || child >= n {
                            return Err(invalid(format!(
                                "node {i} references invalid child {child}"
                            )));
                        }
                    }
                }
                Node::Leaf { value } => {
                    if !value.is_finite() {
                        return Err(invalid(format!("node {i} has a non-finite leaf")));
                    }
                }
            }
        }
        Ok(())
    }

    fn leaf_value(&self, inputs: &[f64]) -> f64 {
        let mut i = 0;
        loop {
            match self.nodes[i] {
                Node::Leaf { value } => return value,
                Node::Split {
                    feature,
                    threshold,
                    left,
                    right,
                } => {
                    i = if inputs[feature] <= threshold { left } else { right };
                }
            }
        }
    }
}

/// Mean of the leaf values an input reaches across all trees.
#[derive(Debug, Clone)]
pub struct ForestRegressor {
    variable: Variable,
    unit: Unit,
    schema: FeatureSchema,
    scaler: Option<StandardScaler>,
    trees: Vec<Tree>,
}

impl ForestRegressor {
    /// Creates a forest.
    ///
    /// # Errors
    ///
    /// Returns [`RegressError::InvalidModel`] if the forest is empty, a tree
    /// references an out-of-range node or feature, or the scaler does not
    /// match the schema.
    pub fn new(
        variable: Variable,
        unit: Unit,
        schema: FeatureSchema,
        scaler: Option<StandardScaler>,
        trees: Vec<Tree>,
    ) -> Result<Self, RegressError> {
        if trees.is_empty() {
            return Err(RegressError::InvalidModel {
                variable,
                reason: "empty forest".to_string(),
            });
        }
        for (t, tree) in trees.iter().enumerate() {
            tree.check(variable, t, schema.len())?;
        }
        if let Some(s) = &scaler {
            s.check(variable, schema.len())?;
        }
        Ok(Self {
            variable,
            unit,
            schema,
            scaler,
            trees,
        })
    }

    /// Number of trees.
    pub fn n_trees(&self) -> usize {
        self.trees.len()
    }
}

impl VariableRegressor for ForestRegressor {
    fn variable(&self) -> Variable {
        self.variable
    }

    fn unit(&self) -> Unit {
        self.unit
    }

    fn schema(&self) -> &FeatureSchema {
        &self.schema
    }

    fn evaluate(&self, inputs: &[f64]) -> f64 {
        let scaled: Vec<f64> = match &self.scaler {
            Some(s) => inputs
                .iter()
                .enumerate()
                .map(|(i, &x)| s.apply(i, x))
                .collect(),
            None => inputs.to_vec(),
        };
        let total: f64 = self.trees.iter().map(|t| t.leaf_value(&scaled)).sum();
        total / self.trees.len() as f64
    }
}
