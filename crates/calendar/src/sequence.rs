//! Lazy inclusive date ranges.

use crate::date::CalendarDate;
use crate::error::CalendarError;

/// An inclusive, ascending range of calendar days.
///
/// Dates are produced lazily. The range is `Clone`, and [`DateRange::restart`]
/// rewinds it to the first day, so a consumer can walk it more than once.
///
/// # Example
///
/// ```
/// use nimbus_calendar::{CalendarDate, DateRange};
///
/// let start = CalendarDate::new(2024, 12, 30).unwrap();
/// let end = CalendarDate::new(2025, 1, 2).unwrap();
/// let days: Vec<_> = DateRange::new(start, end).unwrap().collect();
/// assert_eq!(days.len(), 4);
/// assert_eq!(days[2], CalendarDate::new(2025, 1, 1).unwrap());
/// ```
#[derive(Debug, Clone)]
pub struct DateRange {
    start: CalendarDate,
    end: CalendarDate,
    next: Option<CalendarDate>,
    remaining: usize,
}

impl DateRange {
    /// Creates the inclusive range `[start, end]`.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::InvalidRange`] if `end` is before `start`.
    pub fn new(start: CalendarDate, end: CalendarDate) -> Result<Self, CalendarError> {
        if end < start {
            return Err(CalendarError::InvalidRange {
                start: start.to_string(),
                end: end.to_string(),
            });
        }
        let n_days = start.days_until(end) as usize + 1;
        Ok(Self {
            start,
            end,
            next: Some(start),
            remaining: n_days,
        })
    }

    /// First day of the range.
    pub fn start(&self) -> CalendarDate {
        self.start
    }

    /// Last day of the range.
    pub fn end(&self) -> CalendarDate {
        self.end
    }

    /// Total number of days in the range, independent of iteration progress.
    pub fn n_days(&self) -> usize {
        self.start.days_until(self.end) as usize + 1
    }

    /// Rewinds the range to its first day.
    pub fn restart(&mut self) {
        self.next = Some(self.start);
        self.remaining = self.n_days();
    }
}

impl Iterator for DateRange {
    type Item = CalendarDate;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let current = self.next?;
        self.remaining -= 1;
        self.next = if self.remaining == 0 {
            None
        } else {
            current.succ()
        };
        Some(current)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl ExactSizeIterator for DateRange {}

impl std::iter::FusedIterator for DateRange {}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(y: i32, m: u32, day: u32) -> CalendarDate {
        CalendarDate::new(y, m, day).unwrap()
    }

    #[test]
    fn single_day() {
        let range = DateRange::new(d(2024, 6, 15), d(2024, 6, 15)).unwrap();
        assert_eq!(range.n_days(), 1);
        let days: Vec<_> = range.collect();
        assert_eq!(days, vec![d(2024, 6, 15)]);
    }

    #[test]
    fn end_before_start() {
        let err = DateRange::new(d(2024, 6, 15), d(2024, 6, 14)).unwrap_err();
        assert!(matches!(err, CalendarError::InvalidRange { .. }));
    }

    #[test]
    fn leap_february() {
        let days: Vec<_> = DateRange::new(d(2024, 2, 27), d(2024, 3, 1))
            .unwrap()
            .collect();
        assert_eq!(
            days,
            vec![d(2024, 2, 27), d(2024, 2, 28), d(2024, 2, 29), d(2024, 3, 1)]
        );
    }

    #[test]
    fn exact_size_tracks_progress() {
        let mut range = DateRange::new(d(2024, 1, 1), d(2024, 1, 7)).unwrap();
        assert_eq!(range.len(), 7);
        range.next();
        range.next();
        assert_eq!(range.len(), 5);
        assert_eq!(range.n_days(), 7);
    }

    #[test]
    fn restart_rewinds() {
        let mut range = DateRange::new(d(2024, 1, 1), d(2024, 1, 3)).unwrap();
        let first: Vec<_> = range.by_ref().collect();
        assert_eq!(range.next(), None);
        range.restart();
        let second: Vec<_> = range.collect();
        assert_eq!(first, second);
    }

    #[test]
    fn clone_is_independent() {
        let mut range = DateRange::new(d(2024, 1, 1), d(2024, 1, 3)).unwrap();
        let copy = range.clone();
        range.next();
        assert_eq!(copy.count(), 3);
        assert_eq!(range.count(), 2);
    }
}
