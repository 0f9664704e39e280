//! Apparent temperature from corrected temperature, bucket and cloud cover.

use nimbus_calendar::TimeBucket;
use nimbus_features::Context;

use crate::error::BiasError;

/// Cloud fractions (0..=1) observed in each context; `None` when unknown.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct CloudFractions {
    pub day: Option<f64>,
    pub night: Option<f64>,
}

impl CloudFractions {
    /// Fraction for `context`.
    pub fn get(&self, context: Context) -> Option<f64> {
        match context {
            Context::Day => self.day,
            Context::Night => self.night,
        }
    }
}

/// Feels-like adjustment of one bucket.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FeelsLikeRule {
    /// Constant added to the temperature.
    pub offset: f64,
    /// Multiplies the cloud fraction of `cloud_context`.
    pub cloud_coefficient: f64,
    /// Context whose cloud fraction drives the adjustment.
    pub cloud_context: Context,
}

/// Per-bucket feels-like rules.
///
/// `feels_like = temperature + offset + cloud_coefficient · cloud_fraction`.
/// Daytime clouds block the sun and cool; night clouds trap heat.
#[derive(Debug, Clone, PartialEq)]
pub struct FeelsLikeTable {
    rules: [FeelsLikeRule; 4],
}

impl FeelsLikeTable {
    /// Default rules.
    ///
    /// | Bucket | Offset | Cloud term |
    /// |--------|--------|------------|
    /// | morning | −1.0 | −1.5 × day fraction |
    /// | afternoon | +2.5 | −0.5 × day fraction |
    /// | evening | +0.8 | +1.0 × night fraction |
    /// | night | −1.5 | +1.0 × night fraction |
    pub fn new() -> Self {
        Self {
            rules: [
                FeelsLikeRule {
                    offset: -1.0,
                    cloud_coefficient: -1.5,
                    cloud_context: Context::Day,
                },
                FeelsLikeRule {
                    offset: 2.5,
                    cloud_coefficient: -0.5,
                    cloud_context: Context::Day,
                },
                FeelsLikeRule {
                    offset: 0.8,
                    cloud_coefficient: 1.0,
                    cloud_context: Context::Night,
                },
                FeelsLikeRule {
                    offset: -1.5,
                    cloud_coefficient: 1.0,
                    cloud_context: Context::Night,
                },
            ],
        }
    }

    /// Replaces the rule of one bucket.
    pub fn with_rule(mut self, bucket: TimeBucket, rule: FeelsLikeRule) -> Self {
        self.rules[index(bucket)] = rule;
        self
    }

    /// Rule for `bucket`.
    pub fn rule(&self, bucket: TimeBucket) -> FeelsLikeRule {
        self.rules[index(bucket)]
    }

    /// Checks that every offset and coefficient is finite.
    pub fn validate(&self) -> Result<(), BiasError> {
        for bucket in TimeBucket::ALL {
            let r = self.rule(bucket);
            if !r.offset.is_finite() || !r.cloud_coefficient.is_finite() {
                return Err(BiasError::InvalidConfig {
                    reason: format!("feels-like rule for {bucket} must be finite"),
                });
            }
        }
        Ok(())
    }

    /// Apparent temperature in °C.
    pub fn apply(&self, temperature: f64, bucket: TimeBucket, clouds: &CloudFractions) -> f64 {
        let r = self.rule(bucket);
        let cloud = clouds.get(r.cloud_context).unwrap_or(0.0);
        temperature + r.offset + r.cloud_coefficient * cloud
    }
}

impl Default for FeelsLikeTable {
    fn default() -> Self {
        Self::new()
    }
}

fn index(bucket: TimeBucket) -> usize {
    match bucket {
        TimeBucket::Morning => 0,
        TimeBucket::Afternoon => 1,
        TimeBucket::Evening => 2,
        TimeBucket::Night => 3,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn clouds(day: f64, night: f64) -> CloudFractions {
        CloudFractions {
            day: Some(day),
            night: Some(night),
        }
    }

    #[test]
    fn afternoon_sun_warms() {
        let t = FeelsLikeTable::new();
        assert_relative_eq!(
            t.apply(20.0, TimeBucket::Afternoon, &clouds(0.0, 1.0)),
            22.5,
            epsilon = 1e-12
        );
        assert_relative_eq!(
            t.apply(20.0, TimeBucket::Afternoon, &clouds(1.0, 0.0)),
            22.0,
            epsilon = 1e-12
        );
    }

    #[test]
    fn morning_clouds_cool() {
        let t = FeelsLikeTable::new();
        assert_relative_eq!(
            t.apply(10.0, TimeBucket::Morning, &clouds(0.5, 0.0)),
            10.0 - 1.0 - 0.75,
            epsilon = 1e-12
        );
    }

    #[test]
    fn night_clouds_insulate() {
        let t = FeelsLikeTable::new();
        assert_relative_eq!(
            t.apply(5.0, TimeBucket::Night, &clouds(0.0, 0.8)),
            5.0 - 1.5 + 0.8,
            epsilon = 1e-12
        );
        assert_relative_eq!(
            t.apply(5.0, TimeBucket::Evening, &clouds(1.0, 0.5)),
            5.0 + 0.8 + 0.5,
            epsilon = 1e-12
        );
    }

    #[test]
    fn missing_cloud_contributes_nothing() {
        let t = FeelsLikeTable::new();
        assert_relative_eq!(
            t.apply(5.0, TimeBucket::Evening, &CloudFractions::default()),
            5.8,
            epsilon = 1e-12
        );
    }

    #[test]
    fn custom_rule() {
        let t = FeelsLikeTable::new().with_rule(
            TimeBucket::Night,
            FeelsLikeRule {
                offset: 0.0,
                cloud_coefficient: 0.0,
                cloud_context: Context::Night,
            },
        );
        assert_eq!(t.apply(3.0, TimeBucket::Night, &clouds(1.0, 1.0)), 3.0);
    }
}
