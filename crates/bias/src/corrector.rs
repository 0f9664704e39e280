//! Applies unit conversion, the precipitation profile, bias offsets and
//! physical clamps to blended predictions.

use nimbus_blend::BlendedValue;
use nimbus_calendar::{Hour, TimeBucket};
use nimbus_regress::{Unit, Variable};
use tracing::trace;

use crate::config::{CorrectionConfig, precipitation_diurnal_factor};
use crate::error::BiasError;
use crate::feels_like::CloudFractions;
use crate::table::BiasTable;
use crate::units::output_unit;

/// A blended value after correction, in the output unit of its variable.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CorrectedValue {
    variable: Variable,
    value: f64,
    converted: f64,
    hour: Hour,
    bucket: TimeBucket,
}

impl CorrectedValue {
    /// Corrected variable.
    pub fn variable(&self) -> Variable {
        self.variable
    }

    /// Final value.
    pub fn value(&self) -> f64 {
        self.value
    }

    /// Value after unit conversion and the diurnal profile, before the bias
    /// offset.
    pub fn converted(&self) -> f64 {
        self.converted
    }

    /// Output unit.
    pub fn unit(&self) -> Unit {
        output_unit(self.variable)
    }

    /// Hour the value was blended for.
    pub fn hour(&self) -> Hour {
        self.hour
    }

    /// Bucket whose offset was applied.
    pub fn bucket(&self) -> TimeBucket {
        self.bucket
    }
}

/// Clamps a value to the physical range of its variable.
///
/// Humidity and cloud cover stay within [0, 100]; precipitation and wind
/// speed are non-negative; temperature is unbounded.
pub fn clamp_to_range(variable: Variable, value: f64) -> f64 {
    match variable {
        Variable::Temperature => value,
        Variable::Precipitation | Variable::WindSpeed => value.max(0.0),
        Variable::Humidity | Variable::CloudCover => value.clamp(0.0, 100.0),
    }
}

/// Turns blended predictions into calibrated values.
#[derive(Debug, Clone, Default)]
pub struct BiasCorrector {
    config: CorrectionConfig,
}

impl BiasCorrector {
    /// Creates a corrector after validating `config`.
    pub fn new(config: CorrectionConfig) -> Result<Self, BiasError> {
        config.validate()?;
        Ok(Self { config })
    }

    /// The active configuration.
    pub fn config(&self) -> &CorrectionConfig {
        &self.config
    }

    /// Corrects one blended value against `table`.
    ///
    /// Steps, in order: conversion to the output unit, the precipitation
    /// diurnal factor (when enabled), the (variable, bucket) offset, and the
    /// physical clamp. Offsets therefore act on the same scale the tuner
    /// fits them on.
    pub fn correct(
        &self,
        blended: &BlendedValue,
        table: &BiasTable,
    ) -> Result<CorrectedValue, BiasError> {
        let variable = blended.variable();
        let bucket = blended.bucket();
        let mut converted =
            self.config
                .conversions()
                .to_output(variable, blended.value(), blended.unit())?;
        if variable == Variable::Precipitation && self.config.precipitation_diurnal() {
            converted *= precipitation_diurnal_factor(blended.hour());
        }

        let value = clamp_to_range(variable, table.get(variable, bucket).apply(converted));
        trace!(%variable, %bucket, converted, value, "corrected");

        Ok(CorrectedValue {
            variable,
            value,
            converted,
            hour: blended.hour(),
            bucket,
        })
    }

    /// Apparent temperature for a corrected temperature.
    pub fn feels_like(&self, temperature: f64, bucket: TimeBucket, clouds: &CloudFractions) -> f64 {
        self.config.feels_like().apply(temperature, bucket, clouds)
    }
}
