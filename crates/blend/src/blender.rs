//! Blending of day and night predictions for a requested hour.

use nimbus_calendar::{Hour, TimeBucket};
use nimbus_regress::{RawPrediction, Unit, Variable};
use tracing::trace;

use crate::error::BlendError;
use crate::schedule::{BlendSchedule, BlendWeights};

/// A prediction after time-of-day weighting.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BlendedValue {
    variable: Variable,
    value: f64,
    unit: Unit,
    hour: Hour,
    bucket: TimeBucket,
}

impl BlendedValue {
    /// Blended variable.
    pub fn variable(&self) -> Variable {
        self.variable
    }

    /// Weighted value, in [`BlendedValue::unit`].
    pub fn value(&self) -> f64 {
        self.value
    }

    /// Unit shared by both inputs.
    pub fn unit(&self) -> Unit {
        self.unit
    }

    /// Requested hour.
    pub fn hour(&self) -> Hour {
        self.hour
    }

    /// Bucket of the requested hour.
    pub fn bucket(&self) -> TimeBucket {
        self.bucket
    }
}

/// Weights day and night predictions by the bucket of the requested hour.
#[derive(Debug, Clone)]
pub struct TimeOfDayBlender {
    schedule: BlendSchedule,
}

impl TimeOfDayBlender {
    /// Creates a blender after validating `schedule`.
    pub fn new(schedule: BlendSchedule) -> Result<Self, BlendError> {
        schedule.validate()?;
        Ok(Self { schedule })
    }

    /// The active schedule.
    pub fn schedule(&self) -> &BlendSchedule {
        &self.schedule
    }

    /// Weights used for `hour`.
    pub fn weights_for(&self, hour: Hour) -> BlendWeights {
        self.schedule.weights(hour.bucket())
    }

    /// Computes `w_day · day + w_night · night` for `hour`.
    ///
    /// # Errors
    ///
    /// * [`BlendError::InvalidHour`] if `hour` is 24 or larger.
    /// * [`BlendError::VariableMismatch`] if the predictions are for
    ///   different variables.
    /// * [`BlendError::UnitMismatch`] if their units differ.
    pub fn blend(
        &self,
        hour: u8,
        day: &RawPrediction,
        night: &RawPrediction,
    ) -> Result<BlendedValue, BlendError> {
        let hour = Hour::new(hour).map_err(|_| BlendError::InvalidHour { hour })?;
        self.blend_at(hour, day, night)
    }

    /// Like [`TimeOfDayBlender::blend`] for an already validated hour.
    pub fn blend_at(
        &self,
        hour: Hour,
        day: &RawPrediction,
        night: &RawPrediction,
    ) -> Result<BlendedValue, BlendError> {
        if day.variable() != night.variable() {
            return Err(BlendError::VariableMismatch {
                day: day.variable(),
                night: night.variable(),
            });
        }
        if day.unit() != night.unit() {
            return Err(BlendError::UnitMismatch {
                variable: day.variable(),
                day: day.unit(),
                night: night.unit(),
            });
        }

        let bucket = hour.bucket();
        let w = self.schedule.weights(bucket);
        let value = w.day() * day.value() + w.night() * night.value();
        trace!(variable = %day.variable(), %hour, %bucket, value, "blended");

        Ok(BlendedValue {
            variable: day.variable(),
            value,
            unit: day.unit(),
            hour,
            bucket,
        })
    }
}

impl Default for TimeOfDayBlender {
    fn default() -> Self {
        Self {
            schedule: BlendSchedule::new(),
        }
    }
}
