//! Meteorological seasons.

use std::fmt;

/// Meteorological season (three-month blocks starting in December).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Season {
    Winter,
    Spring,
    Summer,
    Fall,
}

impl Season {
    /// Returns the season of a calendar month.
    ///
    /// Months outside 1..=12 are reduced modulo 12, so callers holding a
    /// validated [`crate::CalendarDate`] never see a surprise.
    pub fn from_month(month: u32) -> Self {
        match Self::index_of_month(month) {
            1 => Season::Winter,
            2 => Season::Spring,
            3 => Season::Summer,
            _ => Season::Fall,
        }
    }

    /// Numeric season feature used by the trained regressors:
    /// winter = 1, spring = 2, summer = 3, fall = 4.
    pub fn index(self) -> u8 {
        match self {
            Season::Winter => 1,
            Season::Spring => 2,
            Season::Summer => 3,
            Season::Fall => 4,
        }
    }

    fn index_of_month(month: u32) -> u32 {
        ((month % 12) + 3) / 3
    }
}

impl fmt::Display for Season {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Season::Winter => "winter",
            Season::Spring => "spring",
            Season::Summer => "summer",
            Season::Fall => "fall",
        };
        f.write_str(s)
    }
}
