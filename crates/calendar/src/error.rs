//! Error types for the nimbus-calendar crate.

/// Error type for all fallible operations in the nimbus-calendar crate.
///
/// Covers validation of dates, hours and date ranges supplied by callers.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[allow(clippy::enum_variant_names)]
pub enum CalendarError {
    /// Returned when a (year, month, day) triple is not a real calendar date.
    #[error("invalid date: {year:04}-{month:02}-{day:02}")]
    InvalidDate {
        /// The year that was provided.
        year: i32,
        /// The month that was provided.
        month: u32,
        /// The day that was provided.
        day: u32,
    },

    /// Returned when a date string cannot be parsed as `YYYY-MM-DD`.
    #[error("invalid date string {input:?}: {reason}")]
    InvalidDateString {
        /// The string that failed to parse.
        input: String,
        /// Description of the parse failure.
        reason: String,
    },

    /// Returned when an hour of day is outside 0..=23.
    #[error("invalid hour: {hour} (must be 0..=23)")]
    InvalidHour {
        /// The invalid hour that was provided.
        hour: u8,
    },

    /// Returned when a date range ends before it starts.
    #[error("invalid range: end {end} is before start {start}")]
    InvalidRange {
        /// First day of the requested range.
        start: String,
        /// Last day of the requested range.
        end: String,
    },
}
