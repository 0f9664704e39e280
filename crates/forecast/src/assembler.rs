//! Orchestration of lookup, prediction, blending and correction.

use std::collections::BTreeMap;
use std::sync::Arc;

use nimbus_bias::{
    BiasCorrector, BiasTable, CloudFractions, CorrectedValue, SharedBiasTable, description,
    precipitation_probability, summary,
};
use nimbus_blend::TimeOfDayBlender;
use nimbus_calendar::{CalendarDate, DateRange, Hour};
use nimbus_features::{Context, FeatureBuilder, FeaturePair};
use nimbus_regress::{RawPrediction, RegressorSet, Variable};
use tracing::debug;

use crate::config::ForecastConfig;
use crate::daily::DailyForecasts;
use crate::error::ForecastError;
use crate::record::{ForecastRecord, Values};

/// Raw predictions for one requested date, computed from a single lookup.
#[derive(Debug, Clone)]
pub(crate) struct DayInputs {
    pub features: FeaturePair,
    pub raw: BTreeMap<Variable, (RawPrediction, RawPrediction)>,
    pub clouds: CloudFractions,
}

/// Corrected values of all variables for one hour.
#[derive(Debug, Clone)]
pub struct HourlyValues {
    corrected: BTreeMap<Variable, CorrectedValue>,
    feels_like: f64,
    hour: Hour,
}

impl HourlyValues {
    /// Corrected value of `variable`.
    pub fn get(&self, variable: Variable) -> &CorrectedValue {
        // Every variable is filled by `hourly_values`.
        &self.corrected[&variable]
    }

    /// Apparent temperature, °C.
    pub fn feels_like(&self) -> f64 {
        self.feels_like
    }

    /// Requested hour.
    pub fn hour(&self) -> Hour {
        self.hour
    }

    pub(crate) fn values(&self) -> Values {
        let precipitation = self.get(Variable::Precipitation).value();
        Values {
            temperature: self.get(Variable::Temperature).value(),
            feels_like: self.feels_like,
            precipitation,
            precipitation_probability: precipitation_probability(precipitation),
            humidity: self.get(Variable::Humidity).value(),
            cloud_cover: self.get(Variable::CloudCover).value(),
            wind_speed: self.get(Variable::WindSpeed).value(),
        }
    }
}

/// Produces calibrated forecasts for dates and hours.
///
/// Holds the immutable pipeline stages and the shared bias table. Every
/// request takes one table snapshot up front and performs one source lookup
/// per requested day.
#[derive(Debug)]
pub struct ForecastAssembler {
    features: FeatureBuilder,
    regressors: RegressorSet,
    blender: TimeOfDayBlender,
    corrector: BiasCorrector,
    config: ForecastConfig,
    bias: SharedBiasTable,
}

impl ForecastAssembler {
    /// Creates an assembler.
    ///
    /// # Errors
    ///
    /// Returns [`ForecastError::Regress`] if `regressors` lacks a variable
    /// and [`ForecastError::InvalidConfig`] for an invalid `config`.
    pub fn new(
        features: FeatureBuilder,
        regressors: RegressorSet,
        blender: TimeOfDayBlender,
        corrector: BiasCorrector,
        config: ForecastConfig,
        offsets: BiasTable,
    ) -> Result<Self, ForecastError> {
        regressors.require_all()?;
        config.validate()?;
        Ok(Self {
            features,
            regressors,
            blender,
            corrector,
            config,
            bias: SharedBiasTable::new(offsets),
        })
    }

    /// The feature builder.
    pub fn features(&self) -> &FeatureBuilder {
        &self.features
    }

    /// The active configuration.
    pub fn config(&self) -> &ForecastConfig {
        &self.config
    }

    /// Snapshot of the current bias table.
    pub fn offsets(&self) -> Arc<BiasTable> {
        self.bias.snapshot()
    }

    /// Atomically replaces the bias table, returning the previous one.
    pub fn publish_offsets(&self, table: BiasTable) -> Arc<BiasTable> {
        self.bias.publish(table)
    }

    /// Forecast for one date and hour.
    ///
    /// The hour is validated before any lookup or model call. Any failure
    /// aborts the whole request.
    #[tracing::instrument(skip(self))]
    pub fn forecast(&self, date: CalendarDate, hour: u8) -> Result<ForecastRecord, ForecastError> {
        let hour = Hour::new(hour).map_err(|_| ForecastError::InvalidHour { hour })?;
        let table = self.bias.snapshot();
        let inputs = self.prepare(date)?;
        let hourly = self.hourly_values(&inputs, hour, &table)?;
        Ok(self.hourly_record(date, &inputs, &hourly))
    }

    /// Corrected values of every variable for one date and hour against an
    /// explicit table, without publishing anything.
    pub fn evaluate_with(
        &self,
        date: CalendarDate,
        hour: u8,
        table: &BiasTable,
    ) -> Result<HourlyValues, ForecastError> {
        let hour = Hour::new(hour).map_err(|_| ForecastError::InvalidHour { hour })?;
        let inputs = self.prepare(date)?;
        self.hourly_values(&inputs, hour, table)
    }

    /// Lazy daily forecasts for `start..=end`.
    ///
    /// # Errors
    ///
    /// Returns [`ForecastError::InvalidRange`] if `end` precedes `start` or
    /// the range spans more than `max_range_days`; nothing is computed in
    /// that case.
    #[tracing::instrument(skip(self))]
    pub fn forecast_range(
        &self,
        start: CalendarDate,
        end: CalendarDate,
    ) -> Result<DailyForecasts<'_>, ForecastError> {
        let dates =
            DateRange::new(start, end).map_err(|_| ForecastError::InvalidRange { start, end })?;
        let max = self.config.max_range_days() as usize;
        if dates.n_days() > max {
            debug!(days = dates.n_days(), max, "range too long");
            return Err(ForecastError::InvalidRange { start, end });
        }
        debug!(days = dates.len(), "range accepted");
        Ok(DailyForecasts::new(self, dates, self.bias.snapshot()))
    }

    pub(crate) fn prepare(&self, date: CalendarDate) -> Result<DayInputs, ForecastError> {
        let features = self.features.build(date)?;
        let mut raw = BTreeMap::new();
        for variable in Variable::ALL {
            let pair = self.regressors.predict_pair(variable, &features)?;
            raw.insert(variable, pair);
        }
        debug!(%date, source = %features.source_date(), "raw predictions ready");
        let clouds = CloudFractions {
            day: Some(features.cloud_fraction(Context::Day)),
            night: Some(features.cloud_fraction(Context::Night)),
        };
        Ok(DayInputs {
            features,
            raw,
            clouds,
        })
    }

    pub(crate) fn hourly_values(
        &self,
        inputs: &DayInputs,
        hour: Hour,
        table: &BiasTable,
    ) -> Result<HourlyValues, ForecastError> {
        let mut corrected = BTreeMap::new();
        for (&variable, (day, night)) in &inputs.raw {
            let blended = self.blender.blend_at(hour, day, night)?;
            corrected.insert(variable, self.corrector.correct(&blended, table)?);
        }
        let temperature = corrected
            .get(&Variable::Temperature)
            .map(CorrectedValue::value)
            .unwrap_or(f64::NAN);
        let feels_like = self
            .corrector
            .feels_like(temperature, hour.bucket(), &inputs.clouds);
        Ok(HourlyValues {
            corrected,
            feels_like,
            hour,
        })
    }

    fn hourly_record(
        &self,
        date: CalendarDate,
        inputs: &DayInputs,
        hourly: &HourlyValues,
    ) -> ForecastRecord {
        let bucket = hourly.hour.bucket();
        let values = hourly.values();
        ForecastRecord::complete(
            date,
            Some((hourly.hour.get(), bucket)),
            inputs.features.source_date(),
            values,
            description(values.feels_like, bucket.name()),
            summary(values.cloud_cover, values.precipitation_probability),
        )
    }
}
