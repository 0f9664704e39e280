//! Validated hour of day and the four time-of-day buckets.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::CalendarError;

/// Hour of day, guaranteed to be in 0..=23.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Hour(u8);

impl Hour {
    /// Creates a new `Hour`.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::InvalidHour`] if `hour` is 24 or larger.
    pub fn new(hour: u8) -> Result<Self, CalendarError> {
        if hour > 23 {
            return Err(CalendarError::InvalidHour { hour });
        }
        Ok(Self(hour))
    }

    /// Returns the raw hour value.
    pub fn get(self) -> u8 {
        self.0
    }

    /// Returns the time-of-day bucket this hour belongs to.
    pub fn bucket(self) -> TimeBucket {
        TimeBucket::of(self)
    }

    /// Iterates all 24 hours of a day in order.
    pub fn all() -> impl Iterator<Item = Hour> {
        (0..24u8).map(Hour)
    }
}

impl fmt::Display for Hour {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:00", self.0)
    }
}

/// Partition of the 24-hour clock used for day/night blending and bias
/// correction.
///
/// | Hours | Bucket |
/// |-------|--------|
/// | 6..12 | `Morning` |
/// | 12..18 | `Afternoon` |
/// | 18..21 | `Evening` |
/// | 21..24, 0..6 | `Night` |
///
/// A boundary hour belongs to the bucket it opens: 12:00 is afternoon,
/// 6:00 is morning.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TimeBucket {
    Morning,
    Afternoon,
    Evening,
    Night,
}

impl TimeBucket {
    /// All buckets in clock order starting at 06:00.
    pub const ALL: [TimeBucket; 4] = [
        TimeBucket::Morning,
        TimeBucket::Afternoon,
        TimeBucket::Evening,
        TimeBucket::Night,
    ];

    /// Returns the bucket containing `hour`.
    pub fn of(hour: Hour) -> Self {
        match hour.get() {
            6..=11 => TimeBucket::Morning,
            12..=17 => TimeBucket::Afternoon,
            18..=20 => TimeBucket::Evening,
            _ => TimeBucket::Night,
        }
    }

    /// Returns `true` for the buckets lit by the sun (morning, afternoon).
    pub fn is_daytime(self) -> bool {
        matches!(self, TimeBucket::Morning | TimeBucket::Afternoon)
    }

    /// Lower-case label, e.g. `"afternoon"`.
    pub fn name(self) -> &'static str {
        match self {
            TimeBucket::Morning => "morning",
            TimeBucket::Afternoon => "afternoon",
            TimeBucket::Evening => "evening",
            TimeBucket::Night => "night",
        }
    }
}

impl fmt::Display for TimeBucket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
