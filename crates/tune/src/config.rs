//! Configuration for bias re-tuning.

use std::collections::BTreeMap;

use nimbus_regress::Variable;

use crate::error::TuneError;

/// Configuration for [`crate::WeightTuner`].
///
/// # Example
///
/// ```
/// use nimbus_regress::Variable;
/// use nimbus_tune::TunerConfig;
///
/// let config = TunerConfig::new()
///     .with_iterations(5)
///     .with_learning_rate(0.5)
///     .with_dead_band(Variable::Temperature, 0.5)
///     .with_weight(Variable::Precipitation, 3.0);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Clone, Debug)]
pub struct TunerConfig {
    iterations: usize,
    learning_rate: f64,
    dead_bands: BTreeMap<Variable, f64>,
    weights: BTreeMap<Variable, f64>,
    adjust_multiplicative: bool,
    min_group_samples: usize,
    stop_when_worse: bool,
}

impl TunerConfig {
    /// Creates a new configuration with defaults.
    ///
    /// Defaults: `iterations = 3`, `learning_rate = 1.0`,
    /// `adjust_multiplicative = false`, `min_group_samples = 1`,
    /// `stop_when_worse = true`, and per variable:
    ///
    /// | Variable | Dead band | Error weight |
    /// |----------|-----------|--------------|
    /// | temperature | 1.0 °C | 2.0 |
    /// | precipitation | 0.0 mm | 2.0 |
    /// | humidity | 5.0 % | 0.5 |
    /// | cloud cover | 5.0 % | 0.5 |
    /// | wind speed | 1.0 m/s | 1.0 |
    pub fn new() -> Self {
        Self {
            iterations: 3,
            learning_rate: 1.0,
            dead_bands: BTreeMap::from([
                (Variable::Temperature, 1.0),
                (Variable::Precipitation, 0.0),
                (Variable::Humidity, 5.0),
                (Variable::CloudCover, 5.0),
                (Variable::WindSpeed, 1.0),
            ]),
            weights: BTreeMap::from([
                (Variable::Temperature, 2.0),
                (Variable::Precipitation, 2.0),
                (Variable::Humidity, 0.5),
                (Variable::CloudCover, 0.5),
                (Variable::WindSpeed, 1.0),
            ]),
            adjust_multiplicative: false,
            min_group_samples: 1,
            stop_when_worse: true,
        }
    }

    /// Sets the number of update passes.
    pub fn with_iterations(mut self, n: usize) -> Self {
        self.iterations = n;
        self
    }

    /// Sets the fraction of the mean error applied per pass.
    pub fn with_learning_rate(mut self, lr: f64) -> Self {
        self.learning_rate = lr;
        self
    }

    /// Sets the absolute mean error, in the output unit of `variable`, at or
    /// below which its offsets are left alone.
    pub fn with_dead_band(mut self, variable: Variable, v: f64) -> Self {
        self.dead_bands.insert(variable, v);
        self
    }

    /// Sets the weight of `variable`'s MAE in the total error that decides
    /// early stopping.
    pub fn with_weight(mut self, variable: Variable, w: f64) -> Self {
        self.weights.insert(variable, w);
        self
    }

    /// Sets whether multiplicative factors are fitted too.
    pub fn with_adjust_multiplicative(mut self, b: bool) -> Self {
        self.adjust_multiplicative = b;
        self
    }

    /// Sets the minimum number of samples a group needs to be updated.
    pub fn with_min_group_samples(mut self, n: usize) -> Self {
        self.min_group_samples = n;
        self
    }

    /// Sets whether to stop once an iteration makes the error worse.
    pub fn with_stop_when_worse(mut self, b: bool) -> Self {
        self.stop_when_worse = b;
        self
    }

    /// Returns the number of update passes.
    pub fn iterations(&self) -> usize {
        self.iterations
    }

    /// Returns the learning rate.
    pub fn learning_rate(&self) -> f64 {
        self.learning_rate
    }

    /// Returns the dead band of `variable`.
    pub fn dead_band(&self, variable: Variable) -> f64 {
        self.dead_bands.get(&variable).copied().unwrap_or(0.0)
    }

    /// Returns the total-error weight of `variable`.
    pub fn weight(&self, variable: Variable) -> f64 {
        self.weights.get(&variable).copied().unwrap_or(1.0)
    }

    /// Returns whether multiplicative factors are fitted.
    pub fn adjust_multiplicative(&self) -> bool {
        self.adjust_multiplicative
    }

    /// Returns the minimum group size.
    pub fn min_group_samples(&self) -> usize {
        self.min_group_samples
    }

    /// Returns whether tuning stops once the error gets worse.
    pub fn stop_when_worse(&self) -> bool {
        self.stop_when_worse
    }

    /// Validates this configuration.
    ///
    /// Checks that `iterations >= 1`, `learning_rate` is in (0, 1], every
    /// dead band and weight is finite and non-negative, at least one weight
    /// is positive, and `min_group_samples >= 1`.
    pub fn validate(&self) -> Result<(), TuneError> {
        if self.iterations < 1 {
            return Err(TuneError::InvalidConfig {
                reason: format!("iterations must be >= 1, got {}", self.iterations),
            });
        }
        if !self.learning_rate.is_finite()
            || self.learning_rate <= 0.0
            || self.learning_rate > 1.0
        {
            return Err(TuneError::InvalidConfig {
                reason: format!(
                    "learning_rate must be in (0, 1], got {}",
                    self.learning_rate
                ),
            });
        }
        for (variable, &v) in &self.dead_bands {
            if !v.is_finite() || v < 0.0 {
                return Err(TuneError::InvalidConfig {
                    reason: format!("dead band of {variable} must be finite and >= 0, got {v}"),
                });
            }
        }
        for (variable, &w) in &self.weights {
            if !w.is_finite() || w < 0.0 {
                return Err(TuneError::InvalidConfig {
                    reason: format!("weight of {variable} must be finite and >= 0, got {w}"),
                });
            }
        }
        if Variable::ALL.iter().all(|&v| self.weight(v) == 0.0) {
            return Err(TuneError::InvalidConfig {
                reason: "at least one variable weight must be positive".to_string(),
            });
        }
        if self.min_group_samples < 1 {
            return Err(TuneError::InvalidConfig {
                reason: format!(
                    "min_group_samples must be >= 1, got {}",
                    self.min_group_samples
                ),
            });
        }
        Ok(())
    }
}

impl Default for TunerConfig {
    fn default() -> Self {
        Self::new()
    }
}
