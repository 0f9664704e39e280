//! Error types for the nimbus-bias crate.

use nimbus_calendar::TimeBucket;
use nimbus_regress::{Unit, Variable};

/// Error type for all fallible operations in the nimbus-bias crate.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum BiasError {
    /// Returned when an offset holds a non-finite or non-positive factor.
    #[error("invalid offset for {variable}/{bucket}: {reason}")]
    InvalidOffset {
        /// Variable of the offending offset.
        variable: Variable,
        /// Bucket of the offending offset.
        bucket: TimeBucket,
        /// Description of the problem.
        reason: String,
    },

    /// Returned when a table lists the same (variable, bucket) twice.
    #[error("duplicate offset for {variable}/{bucket}")]
    DuplicateOffset {
        /// Repeated variable.
        variable: Variable,
        /// Repeated bucket.
        bucket: TimeBucket,
    },

    /// Returned when a value cannot be converted to the output unit of its
    /// variable.
    #[error("cannot convert {variable} from {unit} to {expected}")]
    IncompatibleUnit {
        /// Variable being corrected.
        variable: Variable,
        /// Unit the value arrived in.
        unit: Unit,
        /// Output unit of the variable.
        expected: Unit,
    },

    /// Returned when a configuration parameter is invalid.
    #[error("invalid configuration: {reason}")]
    InvalidConfig {
        /// Description of the problem.
        reason: String,
    },
}
