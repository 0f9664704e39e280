//! Error types for the nimbus-tune crate.

use nimbus_bias::BiasError;
use nimbus_forecast::ForecastError;

/// Error type for all fallible operations in the nimbus-tune crate.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum TuneError {
    /// Returned when no validation samples are supplied.
    #[error("validation set is empty")]
    EmptyValidationSet,

    /// Returned when every sample falls on a date without source coverage.
    #[error("no usable validation samples ({skipped} skipped for missing coverage)")]
    NoUsableSamples {
        /// Number of skipped samples.
        skipped: usize,
    },

    /// Returned when a sample holds a non-finite observation.
    #[error("invalid validation sample {index}: {reason}")]
    InvalidSample {
        /// Position of the sample in the input.
        index: usize,
        /// Description of the problem.
        reason: String,
    },

    /// Returned when a configuration parameter is invalid.
    #[error("invalid configuration: {reason}")]
    InvalidConfig {
        /// Description of the problem.
        reason: String,
    },

    /// A forecast failed for a reason other than missing coverage.
    #[error(transparent)]
    Forecast(#[from] ForecastError),

    /// An updated offset was rejected.
    #[error(transparent)]
    Bias(#[from] BiasError),
}
