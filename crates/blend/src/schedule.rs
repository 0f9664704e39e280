//! Day/night weight pairs per time-of-day bucket.

use nimbus_calendar::TimeBucket;

use crate::error::BlendError;

const SUM_TOLERANCE: f64 = 1e-9;

/// Weights applied to the day and night predictions.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BlendWeights {
    day: f64,
    night: f64,
}

impl BlendWeights {
    /// Creates a weight pair. Checked by [`BlendSchedule::validate`].
    pub const fn new(day: f64, night: f64) -> Self {
        Self { day, night }
    }

    /// Weight of the day prediction.
    pub fn day(&self) -> f64 {
        self.day
    }

    /// Weight of the night prediction.
    pub fn night(&self) -> f64 {
        self.night
    }

    fn check(&self, bucket: TimeBucket) -> Result<(), BlendError> {
        for (label, w) in [("day", self.day), ("night", self.night)] {
            if !w.is_finite() || !(0.0..=1.0).contains(&w) {
                return Err(BlendError::InvalidWeights {
                    bucket,
                    reason: format!("{label} weight must be in [0, 1], got {w}"),
                });
            }
        }
        let sum = self.day + self.night;
        if (sum - 1.0).abs() > SUM_TOLERANCE {
            return Err(BlendError::InvalidWeights {
                bucket,
                reason: format!("weights sum to {sum}, expected 1"),
            });
        }
        Ok(())
    }
}

/// Weight table indexed by [`TimeBucket`].
///
/// Defaults:
///
/// | Bucket | Day | Night |
/// |--------|-----|-------|
/// | morning | 0.7 | 0.3 |
/// | afternoon | 1.0 | 0.0 |
/// | evening | 0.4 | 0.6 |
/// | night | 0.0 | 1.0 |
///
/// # Example
///
/// ```
/// use nimbus_blend::{BlendSchedule, BlendWeights};
/// use nimbus_calendar::TimeBucket;
///
/// let schedule = BlendSchedule::new()
///     .with_weights(TimeBucket::Evening, BlendWeights::new(0.5, 0.5));
/// assert!(schedule.validate().is_ok());
/// assert_eq!(schedule.weights(TimeBucket::Evening).day(), 0.5);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct BlendSchedule {
    morning: BlendWeights,
    afternoon: BlendWeights,
    evening: BlendWeights,
    night: BlendWeights,
}

impl BlendSchedule {
    /// Creates the default schedule.
    pub fn new() -> Self {
        Self {
            morning: BlendWeights::new(0.7, 0.3),
            afternoon: BlendWeights::new(1.0, 0.0),
            evening: BlendWeights::new(0.4, 0.6),
            night: BlendWeights::new(0.0, 1.0),
        }
    }

    /// Overrides the weights of one bucket.
    pub fn with_weights(mut self, bucket: TimeBucket, weights: BlendWeights) -> Self {
        *self.slot_mut(bucket) = weights;
        self
    }

    /// Weights for `bucket`.
    pub fn weights(&self, bucket: TimeBucket) -> BlendWeights {
        match bucket {
            TimeBucket::Morning => self.morning,
            TimeBucket::Afternoon => self.afternoon,
            TimeBucket::Evening => self.evening,
            TimeBucket::Night => self.night,
        }
    }

    /// Validates every weight pair: finite, within [0, 1], summing to one.
    pub fn validate(&self) -> Result<(), BlendError> {
        for bucket in TimeBucket::ALL {
            self.weights(bucket).check(bucket)?;
        }
        Ok(())
    }

    fn slot_mut(&mut self, bucket: TimeBucket) -> &mut BlendWeights {
        match bucket {
            TimeBucket::Morning => &mut self.morning,
            TimeBucket::Afternoon => &mut self.afternoon,
            TimeBucket::Evening => &mut self.evening,
            TimeBucket::Night => &mut self.night,
        }
    }
}

impl Default for BlendSchedule {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let s = BlendSchedule::new();
        assert_eq!(s.weights(TimeBucket::Morning), BlendWeights::new(0.7, 0.3));
        assert_eq!(s.weights(TimeBucket::Afternoon), BlendWeights::new(1.0, 0.0));
        assert_eq!(s.weights(TimeBucket::Evening), BlendWeights::new(0.4, 0.6));
        assert_eq!(s.weights(TimeBucket::Night), BlendWeights::new(0.0, 1.0));
        assert!(s.validate().is_ok());
    }

    #[test]
    fn sum_must_be_one() {
        let s = BlendSchedule::new().with_weights(TimeBucket::Night, BlendWeights::new(0.3, 0.3));
        assert!(matches!(
            s.validate(),
            Err(BlendError::InvalidWeights {
                bucket: TimeBucket::Night,
                ..
            })
        ));
    }

    #[test]
    fn tiny_rounding_accepted() {
        let s = BlendSchedule::new()
            .with_weights(TimeBucket::Morning, BlendWeights::new(0.1 + 0.2, 0.7));
        assert!(s.validate().is_ok());
    }

    #[test]
    fn negative_weight_rejected() {
        let s = BlendSchedule::new()
            .with_weights(TimeBucket::Evening, BlendWeights::new(-0.5, 1.5));
        let err = s.validate().unwrap_err();
        assert!(err.to_string().contains("day weight"));
    }

    #[test]
    fn nan_weight_rejected() {
        let s = BlendSchedule::new()
            .with_weights(TimeBucket::Afternoon, BlendWeights::new(f64::NAN, 1.0));
        assert!(s.validate().is_err());
    }
}
