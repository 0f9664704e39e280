//! Conversion of raw model units to the units a forecast reports.

use nimbus_regress::{Unit, Variable};

use crate::error::BiasError;

/// Unit each variable is reported in.
pub fn output_unit(variable: Variable) -> Unit {
    match variable {
        Variable::Temperature => Unit::Celsius,
        Variable::Precipitation => Unit::Millimetres,
        Variable::Humidity | Variable::CloudCover => Unit::Percent,
        Variable::WindSpeed => Unit::MetresPerSecond,
    }
}

/// Conversion constants.
///
/// * Kelvin to Celsius: `x - kelvin_offset`.
/// * Vapour pressure (Pa) to relative humidity (%): `x / vapour_pressure_divisor`.
/// * Wind proxy to m/s: `(x - wind_proxy_base) * wind_proxy_scale`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct UnitConversions {
    kelvin_offset: f64,
    vapour_pressure_divisor: f64,
    wind_proxy_base: f64,
    wind_proxy_scale: f64,
}

impl UnitConversions {
    /// Default constants: 273.15, 30.0, 330.0, 0.5.
    pub fn new() -> Self {
        Self {
            kelvin_offset: 273.15,
            vapour_pressure_divisor: 30.0,
            wind_proxy_base: 330.0,
            wind_proxy_scale: 0.5,
        }
    }

    /// Sets the divisor mapping vapour pressure to relative humidity.
    pub fn with_vapour_pressure_divisor(mut self, d: f64) -> Self {
        self.vapour_pressure_divisor = d;
        self
    }

    /// Sets the wind proxy baseline.
    pub fn with_wind_proxy_base(mut self, b: f64) -> Self {
        self.wind_proxy_base = b;
        self
    }

    /// Sets the wind proxy scale.
    pub fn with_wind_proxy_scale(mut self, s: f64) -> Self {
        self.wind_proxy_scale = s;
        self
    }

    /// Returns the vapour pressure divisor.
    pub fn vapour_pressure_divisor(&self) -> f64 {
        self.vapour_pressure_divisor
    }

    /// Returns the wind proxy baseline.
    pub fn wind_proxy_base(&self) -> f64 {
        self.wind_proxy_base
    }

    /// Returns the wind proxy scale.
    pub fn wind_proxy_scale(&self) -> f64 {
        self.wind_proxy_scale
    }

    /// Checks that every constant is finite and the divisor and scale are
    /// positive.
    pub fn validate(&self) -> Result<(), BiasError> {
        if !self.vapour_pressure_divisor.is_finite() || self.vapour_pressure_divisor <= 0.0 {
            return Err(BiasError::InvalidConfig {
                reason: format!(
                    "vapour_pressure_divisor must be finite and > 0, got {}",
                    self.vapour_pressure_divisor
                ),
            });
        }
        if !self.wind_proxy_scale.is_finite() || self.wind_proxy_scale <= 0.0 {
            return Err(BiasError::InvalidConfig {
                reason: format!(
                    "wind_proxy_scale must be finite and > 0, got {}",
                    self.wind_proxy_scale
                ),
            });
        }
        if !self.wind_proxy_base.is_finite() {
            return Err(BiasError::InvalidConfig {
                reason: format!("wind_proxy_base must be finite, got {}", self.wind_proxy_base),
            });
        }
        Ok(())
    }

    /// Converts `value` in `unit` to the output unit of `variable`.
    ///
    /// # Errors
    ///
    /// Returns [`BiasError::IncompatibleUnit`] when no conversion leads from
    /// `unit` to the output unit.
    pub fn to_output(&self, variable: Variable, value: f64, unit: Unit) -> Result<f64, BiasError> {
        let expected = output_unit(variable);
        let (converted, unit_after) = match unit {
            Unit::Kelvin => (value - self.kelvin_offset, Unit::Celsius),
            Unit::Pascal => (value / self.vapour_pressure_divisor, Unit::Percent),
            Unit::WindProxy => (
                (value - self.wind_proxy_base) * self.wind_proxy_scale,
                Unit::MetresPerSecond,
            ),
            other => (value, other),
        };
        if unit_after != expected {
            return Err(BiasError::IncompatibleUnit {
                variable,
                unit,
                expected,
            });
        }
        Ok(converted)
    }
}

impl Default for UnitConversions {
    fn default() -> Self {
        Self::new()
    }
}
