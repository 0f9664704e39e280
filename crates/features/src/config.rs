//! Configuration for feature construction.

use std::collections::HashSet;

use crate::error::FeatureError;
use crate::vector::CALENDAR_FEATURES;

/// A logical feature name that resolves to a different source field in the
/// day and night contexts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContextualField {
    name: String,
    day: String,
    night: String,
}

impl ContextualField {
    /// Binds `name` to the `day` field in the day context and to `night` in
    /// the night context.
    pub fn new(name: impl Into<String>, day: impl Into<String>, night: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            day: day.into(),
            night: night.into(),
        }
    }

    /// Logical feature name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Source field used in the day context.
    pub fn day(&self) -> &str {
        &self.day
    }

    /// Source field used in the night context.
    pub fn night(&self) -> &str {
        &self.night
    }
}

/// Configuration for [`crate::FeatureBuilder`].
///
/// # Example
///
/// ```
/// use nimbus_features::{ContextualField, FeatureConfig};
///
/// let config = FeatureConfig::new()
///     .with_max_gap_days(30)
///     .with_contextual(ContextualField::new("ndvi", "ndvi_am", "ndvi_pm"));
/// assert!(config.validate().is_ok());
/// ```
#[derive(Clone, Debug)]
pub struct FeatureConfig {
    max_gap_days: u32,
    contextual: Vec<ContextualField>,
    clear_sky_feature: String,
    default_clear_sky: f64,
}

impl FeatureConfig {
    /// Creates a new configuration with defaults.
    ///
    /// Defaults: `max_gap_days = 60`, contextual fields
    /// `lst -> lst_day / lst_night` and
    /// `clear_cov -> clear_day_cov / clear_night_cov`,
    /// `clear_sky_feature = "clear_cov"`, `default_clear_sky = 0.5`.
    pub fn new() -> Self {
        Self {
            max_gap_days: 60,
            contextual: vec![
                ContextualField::new("lst", "lst_day", "lst_night"),
                ContextualField::new("clear_cov", "clear_day_cov", "clear_night_cov"),
            ],
            clear_sky_feature: "clear_cov".to_string(),
            default_clear_sky: 0.5,
        }
    }

    /// Sets the largest allowed distance between a requested date and the
    /// source record used for it.
    pub fn with_max_gap_days(mut self, days: u32) -> Self {
        self.max_gap_days = days;
        self
    }

    /// Appends one contextual field binding.
    pub fn with_contextual(mut self, field: ContextualField) -> Self {
        self.contextual.push(field);
        self
    }

    /// Replaces the whole contextual field table.
    pub fn with_contextual_fields(mut self, fields: Vec<ContextualField>) -> Self {
        self.contextual = fields;
        self
    }

    /// Sets the feature holding the clear-sky coverage fraction.
    pub fn with_clear_sky_feature(mut self, name: impl Into<String>) -> Self {
        self.clear_sky_feature = name.into();
        self
    }

    /// Sets the clear-sky coverage assumed when a record lacks the field.
    pub fn with_default_clear_sky(mut self, v: f64) -> Self {
        self.default_clear_sky = v;
        self
    }

    /// Returns the maximum gap in days.
    pub fn max_gap_days(&self) -> u32 {
        self.max_gap_days
    }

    /// Returns the contextual field table.
    pub fn contextual(&self) -> &[ContextualField] {
        &self.contextual
    }

    /// Returns the clear-sky coverage feature name.
    pub fn clear_sky_feature(&self) -> &str {
        &self.clear_sky_feature
    }

    /// Returns the fallback clear-sky coverage.
    pub fn default_clear_sky(&self) -> f64 {
        self.default_clear_sky
    }

    /// Validates this configuration.
    ///
    /// Contextual names and their source fields must be non-empty, logical
    /// names must be unique and must not shadow a calendar feature, and the
    /// clear-sky feature name must be non-empty. The fallback clear-sky
    /// coverage must lie in [0, 1].
    pub fn validate(&self) -> Result<(), FeatureError> {
        let mut seen = HashSet::new();
        for field in &self.contextual {
            if field.name.is_empty() || field.day.is_empty() || field.night.is_empty() {
                return Err(FeatureError::InvalidConfig {
                    reason: format!(
                        "contextual field '{}' has an empty name or source",
                        field.name
                    ),
                });
            }
            if CALENDAR_FEATURES.contains(&field.name.as_str()) {
                return Err(FeatureError::InvalidConfig {
                    reason: format!(
                        "contextual field '{}' shadows a calendar feature",
                        field.name
                    ),
                });
            }
            if !seen.insert(field.name.as_str()) {
                return Err(FeatureError::InvalidConfig {
                    reason: format!("contextual field '{}' is declared twice", field.name),
                });
            }
        }

        if self.clear_sky_feature.is_empty() {
            return Err(FeatureError::InvalidConfig {
                reason: "clear_sky_feature must not be empty".to_string(),
            });
        }
        if !(0.0..=1.0).contains(&self.default_clear_sky) {
            return Err(FeatureError::InvalidConfig {
                reason: format!(
                    "default_clear_sky must be in [0, 1], got {}",
                    self.default_clear_sky
                ),
            });
        }

        Ok(())
    }
}

impl Default for FeatureConfig {
    fn default() -> Self {
        Self::new()
    }
}
