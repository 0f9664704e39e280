//! Error types for the nimbus-blend crate.

use nimbus_calendar::TimeBucket;
use nimbus_regress::{Unit, Variable};

/// Error type for all fallible operations in the nimbus-blend crate.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum BlendError {
    /// Returned when an hour outside 0..=23 is requested.
    #[error("invalid hour: {hour} (must be 0..=23)")]
    InvalidHour {
        /// The rejected hour.
        hour: u8,
    },

    /// Returned when the day and night predictions are for different variables.
    #[error("cannot blend {day} (day) with {night} (night)")]
    VariableMismatch {
        /// Variable of the day prediction.
        day: Variable,
        /// Variable of the night prediction.
        night: Variable,
    },

    /// Returned when the day and night predictions carry different units.
    #[error("cannot blend {variable}: day unit {day} differs from night unit {night}")]
    UnitMismatch {
        /// The blended variable.
        variable: Variable,
        /// Unit of the day prediction.
        day: Unit,
        /// Unit of the night prediction.
        night: Unit,
    },

    /// Returned when a weight pair is outside [0, 1] or does not sum to one.
    #[error("invalid {bucket} weights: {reason}")]
    InvalidWeights {
        /// The bucket whose weights are wrong.
        bucket: TimeBucket,
        /// Description of the problem.
        reason: String,
    },
}
