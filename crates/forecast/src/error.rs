//! Error types for the nimbus-forecast crate.

use nimbus_bias::BiasError;
use nimbus_blend::BlendError;
use nimbus_calendar::CalendarDate;
use nimbus_features::FeatureError;
use nimbus_regress::RegressError;

/// Error type for all fallible operations in the nimbus-forecast crate.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ForecastError {
    /// Returned when an hour outside 0..=23 is requested.
    #[error("invalid hour: {hour} (must be 0..=23)")]
    InvalidHour {
        /// The rejected hour.
        hour: u8,
    },

    /// Returned when a range ends before it starts or spans more days than
    /// the configured maximum.
    #[error("invalid range: {start}..={end}")]
    InvalidRange {
        /// First requested day.
        start: CalendarDate,
        /// Last requested day.
        end: CalendarDate,
    },

    /// Feature construction failed (including missing coverage).
    #[error(transparent)]
    Feature(#[from] FeatureError),

    /// A regressor failed.
    #[error(transparent)]
    Regress(#[from] RegressError),

    /// Blending failed.
    #[error(transparent)]
    Blend(#[from] BlendError),

    /// Correction failed.
    #[error(transparent)]
    Bias(#[from] BiasError),

    /// Returned when a configuration parameter is invalid.
    #[error("invalid configuration: {reason}")]
    InvalidConfig {
        /// Description of the problem.
        reason: String,
    },
}

impl ForecastError {
    /// Distance to the nearest record when this is a coverage gap.
    pub fn coverage_gap(&self) -> Option<u64> {
        match self {
            ForecastError::Feature(FeatureError::NoCoverage {
                nearest_gap_days, ..
            }) => Some(*nearest_gap_days),
            _ => None,
        }
    }
}
