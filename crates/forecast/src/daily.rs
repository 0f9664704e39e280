//! Lazy per-day aggregation over a date range.

use std::sync::Arc;

use nimbus_bias::{BiasTable, description, summary};
use nimbus_calendar::{CalendarDate, DateRange, Hour};
use nimbus_stats::{finite_max, mean};
use tracing::warn;

use crate::assembler::{ForecastAssembler, HourlyValues};
use crate::error::ForecastError;
use crate::record::{ForecastRecord, Values};

const DAY_LABEL: &str = "day";

/// Daily forecasts for an inclusive date range, computed on demand.
///
/// Yields one item per day in ascending order. A day without source
/// coverage yields an `Ok` record flagged
/// [`Coverage::Missing`](crate::Coverage::Missing); any other failure is
/// yielded as `Err` and iteration continues with the next day.
///
/// The iterator is `Clone` and [`DailyForecasts::restart`] rewinds it. All
/// days use the bias table snapshot taken when the range was requested.
#[derive(Debug, Clone)]
pub struct DailyForecasts<'a> {
    assembler: &'a ForecastAssembler,
    dates: DateRange,
    table: Arc<BiasTable>,
}

impl<'a> DailyForecasts<'a> {
    pub(crate) fn new(
        assembler: &'a ForecastAssembler,
        dates: DateRange,
        table: Arc<BiasTable>,
    ) -> Self {
        Self {
            assembler,
            dates,
            table,
        }
    }

    /// First day of the range.
    pub fn start(&self) -> CalendarDate {
        self.dates.start()
    }

    /// Last day of the range.
    pub fn end(&self) -> CalendarDate {
        self.dates.end()
    }

    /// Rewinds to the first day.
    pub fn restart(&mut self) {
        self.dates.restart();
    }

    fn forecast_day(&self, date: CalendarDate) -> Result<ForecastRecord, ForecastError> {
        let inputs = match self.assembler.prepare(date) {
            Ok(inputs) => inputs,
            Err(e) => {
                if let Some(gap) = e.coverage_gap() {
                    warn!(%date, nearest_gap_days = gap, "no source coverage, day flagged");
                    return Ok(ForecastRecord::missing(date, gap));
                }
                return Err(e);
            }
        };

        let mut hours = Vec::with_capacity(self.assembler.config().aggregation_hours().len());
        for &h in self.assembler.config().aggregation_hours() {
            let hour = Hour::new(h).map_err(|_| ForecastError::InvalidHour { hour: h })?;
            hours.push(self.assembler.hourly_values(&inputs, hour, &self.table)?);
        }

        let values = aggregate(&hours);
        Ok(ForecastRecord::complete(
            date,
            None,
            inputs.features.source_date(),
            values,
            description(values.feels_like, DAY_LABEL),
            summary(values.cloud_cover, values.precipitation_probability),
        ))
    }
}

/// Means for state variables, the sum for precipitation and the peak
/// hourly probability.
fn aggregate(hours: &[HourlyValues]) -> Values {
    let per_hour: Vec<Values> = hours.iter().map(HourlyValues::values).collect();
    let collect = |f: fn(&Values) -> f64| per_hour.iter().map(f).collect::<Vec<f64>>();

    Values {
        temperature: mean(&collect(|v| v.temperature)),
        feels_like: mean(&collect(|v| v.feels_like)),
        precipitation: collect(|v| v.precipitation).iter().sum(),
        precipitation_probability: finite_max(&collect(|v| v.precipitation_probability))
            .unwrap_or(0.0),
        humidity: mean(&collect(|v| v.humidity)),
        cloud_cover: mean(&collect(|v| v.cloud_cover)),
        wind_speed: mean(&collect(|v| v.wind_speed)),
    }
}

impl Iterator for DailyForecasts<'_> {
    type Item = Result<ForecastRecord, ForecastError>;

    fn next(&mut self) -> Option<Self::Item> {
        let date = self.dates.next()?;
        Some(self.forecast_day(date))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.dates.size_hint()
    }
}

impl ExactSizeIterator for DailyForecasts<'_> {}

impl std::iter::FusedIterator for DailyForecasts<'_> {}
