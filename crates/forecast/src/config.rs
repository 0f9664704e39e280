//! Configuration for forecast assembly.

use std::collections::HashSet;

use crate::error::ForecastError;

/// Configuration for [`crate::ForecastAssembler`].
#[derive(Clone, Debug)]
pub struct ForecastConfig {
    aggregation_hours: Vec<u8>,
    max_range_days: u32,
}

impl ForecastConfig {
    /// Creates a new configuration. Daily records aggregate all 24 hours
    /// and a range may span at most 365 days.
    pub fn new() -> Self {
        Self {
            aggregation_hours: (0..24).collect(),
            max_range_days: 365,
        }
    }

    /// Sets the hours a daily record aggregates over.
    pub fn with_aggregation_hours(mut self, hours: Vec<u8>) -> Self {
        self.aggregation_hours = hours;
        self
    }

    /// Sets the longest accepted range, counted in days inclusive of both ends.
    pub fn with_max_range_days(mut self, days: u32) -> Self {
        self.max_range_days = days;
        self
    }

    /// Returns the aggregation hours.
    pub fn aggregation_hours(&self) -> &[u8] {
        &self.aggregation_hours
    }

    /// Returns the longest accepted range in days.
    pub fn max_range_days(&self) -> u32 {
        self.max_range_days
    }

    /// Validates this configuration.
    ///
    /// Aggregation hours must be non-empty, unique and within 0..=23, and
    /// `max_range_days` must be at least 1.
    pub fn validate(&self) -> Result<(), ForecastError> {
        if self.max_range_days == 0 {
            return Err(ForecastError::InvalidConfig {
                reason: "max_range_days must be at least 1".to_string(),
            });
        }
        if self.aggregation_hours.is_empty() {
            return Err(ForecastError::InvalidConfig {
                reason: "aggregation_hours must not be empty".to_string(),
            });
        }
        let mut seen = HashSet::new();
        for &h in &self.aggregation_hours {
            if h > 23 {
                return Err(ForecastError::InvalidConfig {
                    reason: format!("aggregation hour {h} is outside 0..=23"),
                });
            }
            if !seen.insert(h) {
                return Err(ForecastError::InvalidConfig {
                    reason: format!("aggregation hour {h} listed twice"),
                });
            }
        }
        Ok(())
    }
}

impl Default for ForecastConfig {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let cfg = ForecastConfig::new();
        assert_eq!(cfg.aggregation_hours().len(), 24);
        assert_eq!(cfg.max_range_days(), 365);
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn max_range_days_must_be_positive() {
        assert!(ForecastConfig::new().with_max_range_days(0).validate().is_err());
        assert!(ForecastConfig::new().with_max_range_days(1).validate().is_ok());
    }

    #[test]
    fn rejects_bad_hours() {
        assert!(ForecastConfig::new().with_aggregation_hours(vec![]).validate().is_err());
        assert!(ForecastConfig::new().with_aggregation_hours(vec![24]).validate().is_err());
        assert!(
            ForecastConfig::new()
                .with_aggregation_hours(vec![6, 6])
                .validate()
                .is_err()
        );
    }
}
