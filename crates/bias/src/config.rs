//! Configuration for bias correction.

use nimbus_calendar::Hour;

use crate::error::BiasError;
use crate::feels_like::FeelsLikeTable;
use crate::units::UnitConversions;

/// Hour-of-day multiplier for precipitation: wetter around dawn and late
/// afternoon convection, drier overnight.
///
/// | Hours | Factor |
/// |-------|--------|
/// | 05–08 | 1.1 |
/// | 15–18 | 1.2 |
/// | 21–23, 00–03 | 0.9 |
/// | otherwise | 1.0 |
pub fn precipitation_diurnal_factor(hour: Hour) -> f64 {
    match hour.get() {
        5..=8 => 1.1,
        15..=18 => 1.2,
        21..=23 | 0..=3 => 0.9,
        _ => 1.0,
    }
}

/// Configuration for [`crate::BiasCorrector`].
///
/// # Example
///
/// ```
/// use nimbus_bias::CorrectionConfig;
///
/// let config = CorrectionConfig::new().with_precipitation_diurnal(false);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Clone, Debug)]
pub struct CorrectionConfig {
    conversions: UnitConversions,
    feels_like: FeelsLikeTable,
    precipitation_diurnal: bool,
}

impl CorrectionConfig {
    /// Creates a new configuration with defaults: default conversions and
    /// feels-like rules, diurnal precipitation profile enabled.
    pub fn new() -> Self {
        Self {
            conversions: UnitConversions::new(),
            feels_like: FeelsLikeTable::new(),
            precipitation_diurnal: true,
        }
    }

    /// Sets the unit conversion constants.
    pub fn with_conversions(mut self, c: UnitConversions) -> Self {
        self.conversions = c;
        self
    }

    /// Sets the feels-like rules.
    pub fn with_feels_like(mut self, t: FeelsLikeTable) -> Self {
        self.feels_like = t;
        self
    }

    /// Enables or disables the precipitation diurnal profile.
    pub fn with_precipitation_diurnal(mut self, b: bool) -> Self {
        self.precipitation_diurnal = b;
        self
    }

    /// Returns the unit conversion constants.
    pub fn conversions(&self) -> &UnitConversions {
        &self.conversions
    }

    /// Returns the feels-like rules.
    pub fn feels_like(&self) -> &FeelsLikeTable {
        &self.feels_like
    }

    /// Returns whether the diurnal precipitation profile is applied.
    pub fn precipitation_diurnal(&self) -> bool {
        self.precipitation_diurnal
    }

    /// Validates the conversions and feels-like rules.
    pub fn validate(&self) -> Result<(), BiasError> {
        self.conversions.validate()?;
        self.feels_like.validate()
    }
}

impl Default for CorrectionConfig {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let cfg = CorrectionConfig::new();
        assert!(cfg.precipitation_diurnal());
        assert_eq!(cfg.conversions().vapour_pressure_divisor(), 30.0);
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn diurnal_profile() {
        let f = |h| precipitation_diurnal_factor(Hour::new(h).unwrap());
        assert_eq!(f(4), 1.0);
        assert_eq!(f(5), 1.1);
        assert_eq!(f(8), 1.1);
        assert_eq!(f(12), 1.0);
        assert_eq!(f(15), 1.2);
        assert_eq!(f(18), 1.2);
        assert_eq!(f(20), 1.0);
        assert_eq!(f(21), 0.9);
        assert_eq!(f(0), 0.9);
        assert_eq!(f(3), 0.9);
    }
}
