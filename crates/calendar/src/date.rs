//! Gregorian calendar date with day-of-year helpers.

use std::fmt;
use std::str::FromStr;

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::error::CalendarError;
use crate::season::Season;

/// A date in the proleptic Gregorian calendar.
///
/// Serializes as an ISO `YYYY-MM-DD` string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CalendarDate(NaiveDate);

impl CalendarDate {
    /// Creates a new `CalendarDate` from year, month and day.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::InvalidDate`] if the triple does not name a
    /// real day (e.g. February 29 in a common year).
    pub fn new(year: i32, month: u32, day: u32) -> Result<Self, CalendarError> {
        NaiveDate::from_ymd_opt(year, month, day)
            .map(Self)
            .ok_or(CalendarError::InvalidDate { year, month, day })
    }

    /// Returns the year.
    pub fn year(self) -> i32 {
        self.0.year()
    }

    /// Returns the month (1..=12).
    pub fn month(self) -> u32 {
        self.0.month()
    }

    /// Returns the day within the month (1..=31).
    pub fn day(self) -> u32 {
        self.0.day()
    }

    /// Returns the day of year (1..=366).
    pub fn day_of_year(self) -> u32 {
        self.0.ordinal()
    }

    /// Returns the number of days in this date's year (365 or 366).
    pub fn days_in_year(self) -> u32 {
        if self.0.leap_year() { 366 } else { 365 }
    }

    /// Day of year scaled into `(0, 1]`; December 31 is always 1.0.
    pub fn day_of_year_norm(self) -> f64 {
        f64::from(self.day_of_year()) / f64::from(self.days_in_year())
    }

    /// Returns the meteorological season of this date's month.
    pub fn season(self) -> Season {
        Season::from_month(self.month())
    }

    /// Returns the following day, or `None` at the end of the representable
    /// calendar.
    pub fn succ(self) -> Option<Self> {
        self.0.succ_opt().map(Self)
    }

    /// Signed number of days from `self` to `other` (positive when `other`
    /// is later).
    pub fn days_until(self, other: Self) -> i64 {
        other.0.signed_duration_since(self.0).num_days()
    }

    /// Absolute number of days between two dates.
    pub fn abs_gap(self, other: Self) -> u64 {
        self.days_until(other).unsigned_abs()
    }

    /// Returns the underlying chrono date.
    pub fn as_naive(self) -> NaiveDate {
        self.0
    }
}

impl From<NaiveDate> for CalendarDate {
    fn from(d: NaiveDate) -> Self {
        Self(d)
    }
}

impl FromStr for CalendarDate {
    type Err = CalendarError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d")
            .map(Self)
            .map_err(|e| CalendarError::InvalidDateString {
                input: s.to_string(),
                reason: e.to_string(),
            })
    }
}

impl fmt::Display for CalendarDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format("%Y-%m-%d"))
    }
}
