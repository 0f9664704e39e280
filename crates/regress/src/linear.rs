//! Standard-scaled linear regression.

use nimbus_features::FeatureSchema;
use serde::{Deserialize, Serialize};

use crate::error::RegressError;
use crate::regressor::VariableRegressor;
use crate::variable::{Unit, Variable};

/// Per-feature standardisation `(x - mean) / scale`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StandardScaler {
    pub mean: Vec<f64>,
    pub scale: Vec<f64>,
}

impl StandardScaler {
    pub(crate) fn check(&self, variable: Variable, n: usize) -> Result<(), RegressError> {
        if self.mean.len() != n || self.scale.len() != n {
            return Err(RegressError::InvalidModel {
                variable,
                reason: format!(
                    "scaler has {} means and {} scales for {n} features",
                    self.mean.len(),
                    self.scale.len()
                ),
            });
        }
        if let Some(i) = self
            .scale
            .iter()
            .position(|s| !s.is_finite() || s.abs() < f64::EPSILON)
        {
            return Err(RegressError::InvalidModel {
                variable,
                reason: format!("scale[{i}] must be finite and non-zero"),
            });
        }
        if self.mean.iter().any(|m| !m.is_finite()) {
            return Err(RegressError::InvalidModel {
                variable,
                reason: "scaler means must be finite".to_string(),
            });
        }
        Ok(())
    }

    #[inline]
    pub(crate) fn apply(&self, i: usize, x: f64) -> f64 {
        (x - self.mean[i]) / self.scale[i]
    }
}

/// `intercept + Σ coef_i · z_i`, where `z` is the (optionally) scaled input.
#[derive(Debug, Clone)]
pub struct LinearRegressor {
    variable: Variable,
    unit: Unit,
    schema: FeatureSchema,
    scaler: Option<StandardScaler>,
    intercept: f64,
    coefficients: Vec<f64>,
}

impl LinearRegressor {
    /// Creates a linear model.
    ///
    /// # Errors
    ///
    /// Returns [`RegressError::InvalidModel`] if the coefficient or scaler
    /// lengths differ from the schema, a scale is zero, or any parameter is
    /// not finite.
    pub fn new(
        variable: Variable,
        unit: Unit,
        schema: FeatureSchema,
        scaler: Option<StandardScaler>,
        intercept: f64,
        coefficients: Vec<f64>,
    ) -> Result<Self, RegressError> {
        let n = schema.len();
        if coefficients.len() != n {
            return Err(RegressError::InvalidModel {
                variable,
                reason: format!("{} coefficients for {n} features", coefficients.len()),
            });
        }
        if !intercept.is_finite() || coefficients.iter().any(|c| !c.is_finite()) {
            return Err(RegressError::InvalidModel {
                variable,
                reason: "coefficients must be finite".to_string(),
            });
        }
        if let Some(s) = &scaler {
            s.check(variable, n)?;
        }
        Ok(Self {
            variable,
            unit,
            schema,
            scaler,
            intercept,
            coefficients,
        })
    }

    /// Identity model on a single feature: returns the feature unchanged.
    pub fn identity(variable: Variable, unit: Unit, feature: &str) -> Result<Self, RegressError> {
        let schema = FeatureSchema::new([feature]).map_err(|e| RegressError::InvalidModel {
            variable,
            reason: e.to_string(),
        })?;
        Self::new(variable, unit, schema, None, 0.0, vec![1.0])
    }

    /// Model intercept.
    pub fn intercept(&self) -> f64 {
        self.intercept
    }

    /// Model coefficients in schema order.
    pub fn coefficients(&self) -> &[f64] {
        &self.coefficients
    }
}

impl VariableRegressor for LinearRegressor {
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
        let mut acc = self.intercept;
        for (i, (&x, &c)) in inputs.iter().zip(&self.coefficients).enumerate() {
            let z = match &self.scaler {
                Some(s) => s.apply(i, x),
                None => x,
            };
            acc += c * z;
        }
        acc
    }
}
