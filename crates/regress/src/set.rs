//! Day/night regressor pairs for every forecast variable.

use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;

use nimbus_features::{Context, FeaturePair};

use crate::error::RegressError;
use crate::regressor::{RawPrediction, VariableRegressor};
use crate::variable::Variable;

#[derive(Clone)]
struct Pair {
    day: Arc<dyn VariableRegressor>,
    night: Arc<dyn VariableRegressor>,
}

/// Exactly one (day, night) regressor pair per [`Variable`].
///
/// # Example
///
/// ```
/// use nimbus_regress::{LinearRegressor, RegressorSet, Unit, Variable};
/// use std::sync::Arc;
///
/// let t = Arc::new(LinearRegressor::identity(Variable::Temperature, Unit::Celsius, "lst").unwrap());
/// let set = RegressorSet::new().with_single(Variable::Temperature, t).unwrap();
/// assert!(set.contains(Variable::Temperature));
/// assert!(set.require_all().is_err());
/// ```
#[derive(Clone, Default)]
pub struct RegressorSet {
    pairs: BTreeMap<Variable, Pair>,
}

impl RegressorSet {
    /// Creates an empty set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Installs separate day and night regressors for `variable`, replacing
    /// any previous pair.
    ///
    /// # Errors
    ///
    /// Returns [`RegressError::VariableMismatch`] if either regressor predicts
    /// a different variable.
    pub fn with_pair(
        mut self,
        variable: Variable,
        day: Arc<dyn VariableRegressor>,
        night: Arc<dyn VariableRegressor>,
    ) -> Result<Self, RegressError> {
        for r in [&day, &night] {
            if r.variable() != variable {
                return Err(RegressError::VariableMismatch {
                    slot: variable,
                    found: r.variable(),
                });
            }
        }
        self.pairs.insert(variable, Pair { day, night });
        Ok(self)
    }

    /// Uses one regressor for both contexts of `variable`.
    pub fn with_single(
        self,
        variable: Variable,
        model: Arc<dyn VariableRegressor>,
    ) -> Result<Self, RegressError> {
        self.with_pair(variable, Arc::clone(&model), model)
    }

    /// Returns `true` if `variable` has a pair.
    pub fn contains(&self, variable: Variable) -> bool {
        self.pairs.contains_key(&variable)
    }

    /// Checks that every [`Variable`] has a pair.
    pub fn require_all(&self) -> Result<(), RegressError> {
        match Variable::ALL.iter().find(|v| !self.pairs.contains_key(*v)) {
            Some(&variable) => Err(RegressError::MissingVariable { variable }),
            None => Ok(()),
        }
    }

    /// Regressor for `variable` in `context`.
    pub fn get(
        &self,
        variable: Variable,
        context: Context,
    ) -> Result<&Arc<dyn VariableRegressor>, RegressError> {
        let pair = self
            .pairs
            .get(&variable)
            .ok_or(RegressError::MissingVariable { variable })?;
        Ok(match context {
            Context::Day => &pair.day,
            Context::Night => &pair.night,
        })
    }

    /// Predicts `variable` for both contexts of `features`.
    pub fn predict_pair(
        &self,
        variable: Variable,
        features: &FeaturePair,
    ) -> Result<(RawPrediction, RawPrediction), RegressError> {
        let day = self.get(variable, Context::Day)?.predict(features.day())?;
        let night = self.get(variable, Context::Night)?.predict(features.night())?;
        Ok((day, night))
    }
}

impl fmt::Debug for RegressorSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RegressorSet")
            .field("variables", &self.pairs.keys().collect::<Vec<_>>())
            .finish()
    }
}
