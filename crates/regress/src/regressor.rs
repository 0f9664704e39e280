//! The per-variable regressor abstraction.

use nimbus_features::{FeatureSchema, FeatureVector};
use tracing::error;

use crate::error::RegressError;
use crate::variable::{Unit, Variable};

/// Output of one regressor for one context.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RawPrediction {
    variable: Variable,
    value: f64,
    unit: Unit,
}

impl RawPrediction {
    /// Creates a prediction.
    pub fn new(variable: Variable, value: f64, unit: Unit) -> Self {
        Self {
            variable,
            value,
            unit,
        }
    }

    /// Predicted variable.
    pub fn variable(&self) -> Variable {
        self.variable
    }

    /// Predicted value in [`RawPrediction::unit`].
    pub fn value(&self) -> f64 {
        self.value
    }

    /// Physical unit of the value.
    pub fn unit(&self) -> Unit {
        self.unit
    }
}

/// A trained model mapping a feature vector to one variable.
///
/// Implementors provide [`evaluate`](VariableRegressor::evaluate) over
/// inputs laid out in schema order; [`predict`](VariableRegressor::predict)
/// handles feature extraction.
pub trait VariableRegressor: Send + Sync {
    /// Variable this model predicts.
    fn variable(&self) -> Variable;

    /// Unit of the model output.
    fn unit(&self) -> Unit;

    /// Features the model reads, in input order.
    fn schema(&self) -> &FeatureSchema;

    /// Evaluates the model on inputs ordered by [`VariableRegressor::schema`].
    fn evaluate(&self, inputs: &[f64]) -> f64;

    /// Predicts from a named feature vector.
    ///
    /// # Errors
    ///
    /// Returns [`RegressError::FeatureMismatch`] naming the first schema
    /// feature missing from `features`, or
    /// [`RegressError::NonFiniteOutput`] if the model output is not finite.
    fn predict(&self, features: &FeatureVector) -> Result<RawPrediction, RegressError> {
        let inputs = self.schema().extract(features).map_err(|missing| {
            error!(variable = %self.variable(), feature = missing, "feature mismatch");
            RegressError::FeatureMismatch {
                variable: self.variable(),
                feature: missing.to_string(),
            }
        })?;
        let value = self.evaluate(&inputs);
        if !value.is_finite() {
            return Err(RegressError::NonFiniteOutput {
                variable: self.variable(),
                value,
            });
        }
        Ok(RawPrediction::new(self.variable(), value, self.unit()))
    }
}
