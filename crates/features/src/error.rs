//! Error types for the nimbus-features crate.

use nimbus_calendar::CalendarDate;

/// Error type for all fallible operations in the nimbus-features crate.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum FeatureError {
    /// Returned when a dataset is constructed without any records.
    #[error("source dataset is empty")]
    EmptyDataset,

    /// Returned when two source records share a date.
    #[error("duplicate source record for {date}")]
    DuplicateDate {
        /// The repeated date.
        date: CalendarDate,
    },

    /// Returned when no source record lies within the allowed gap.
    #[error(
        "no source coverage for {date}: nearest record {nearest_date} is {nearest_gap_days} day(s) away (max {max_gap_days})"
    )]
    NoCoverage {
        /// The requested date.
        date: CalendarDate,
        /// Date of the closest available record.
        nearest_date: CalendarDate,
        /// Distance in days to the closest available record.
        nearest_gap_days: u64,
        /// The configured maximum gap.
        max_gap_days: u32,
    },

    /// Returned when a feature schema is malformed.
    #[error("invalid feature schema: {reason}")]
    InvalidSchema {
        /// Description of the problem.
        reason: String,
    },

    /// Returned when a configuration parameter is invalid.
    #[error("invalid configuration: {reason}")]
    InvalidConfig {
        /// Description of the problem.
        reason: String,
    },
}
