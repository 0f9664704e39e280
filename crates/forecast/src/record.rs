//! The assembled forecast record.

use nimbus_calendar::{CalendarDate, TimeBucket};
use nimbus_regress::Variable;
use serde::{Deserialize, Serialize};

/// Whether a record is backed by source data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum Coverage {
    Complete,
    /// No source record within the allowed gap; values are NaN.
    Missing { nearest_gap_days: u64 },
}

/// Calibrated weather estimate for one hour or one day.
///
/// Daily records have no hour or bucket. Records for uncovered days carry
/// NaN values and empty labels.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForecastRecord {
    date: CalendarDate,
    hour: Option<u8>,
    time_of_day: Option<TimeBucket>,
    source_date: Option<CalendarDate>,
    coverage: Coverage,
    temperature: f64,
    feels_like: f64,
    precipitation: f64,
    precipitation_probability: f64,
    humidity: f64,
    cloud_cover: f64,
    wind_speed: f64,
    description: String,
    summary: String,
}

/// Numeric content of a record.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct Values {
    pub temperature: f64,
    pub feels_like: f64,
    pub precipitation: f64,
    pub precipitation_probability: f64,
    pub humidity: f64,
    pub cloud_cover: f64,
    pub wind_speed: f64,
}

impl ForecastRecord {
    pub(crate) fn complete(
        date: CalendarDate,
        hour: Option<(u8, TimeBucket)>,
        source_date: CalendarDate,
        values: Values,
        description: String,
        summary: String,
    ) -> Self {
        Self {
            date,
            hour: hour.map(|(h, _)| h),
            time_of_day: hour.map(|(_, b)| b),
            source_date: Some(source_date),
            coverage: Coverage::Complete,
            temperature: values.temperature,
            feels_like: values.feels_like,
            precipitation: values.precipitation,
            precipitation_probability: values.precipitation_probability,
            humidity: values.humidity,
            cloud_cover: values.cloud_cover,
            wind_speed: values.wind_speed,
            description,
            summary,
        }
    }

    pub(crate) fn missing(date: CalendarDate, nearest_gap_days: u64) -> Self {
        Self {
            date,
            hour: None,
            time_of_day: None,
            source_date: None,
            coverage: Coverage::Missing { nearest_gap_days },
            temperature: f64::NAN,
            feels_like: f64::NAN,
            precipitation: f64::NAN,
            precipitation_probability: f64::NAN,
            humidity: f64::NAN,
            cloud_cover: f64::NAN,
            wind_speed: f64::NAN,
            description: String::new(),
            summary: String::new(),
        }
    }

    pub fn date(&self) -> CalendarDate {
        self.date
    }

    /// Hour of a single-hour record.
    pub fn hour(&self) -> Option<u8> {
        self.hour
    }

    /// Bucket of a single-hour record.
    pub fn time_of_day(&self) -> Option<TimeBucket> {
        self.time_of_day
    }

    /// Date of the source record used, if any.
    pub fn source_date(&self) -> Option<CalendarDate> {
        self.source_date
    }

    pub fn coverage(&self) -> Coverage {
        self.coverage
    }

    /// `true` unless the record is a coverage-gap placeholder.
    pub fn is_complete(&self) -> bool {
        self.coverage == Coverage::Complete
    }

    /// Air temperature, °C.
    pub fn temperature(&self) -> f64 {
        self.temperature
    }

    /// Apparent temperature, °C.
    pub fn feels_like(&self) -> f64 {
        self.feels_like
    }

    /// Precipitation amount, mm.
    pub fn precipitation(&self) -> f64 {
        self.precipitation
    }

    /// Chance of rain, %.
    pub fn precipitation_probability(&self) -> f64 {
        self.precipitation_probability
    }

    /// Relative humidity, %.
    pub fn humidity(&self) -> f64 {
        self.humidity
    }

    /// Cloud cover, %.
    pub fn cloud_cover(&self) -> f64 {
        self.cloud_cover
    }

    /// Wind speed, m/s.
    pub fn wind_speed(&self) -> f64 {
        self.wind_speed
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn summary(&self) -> &str {
        &self.summary
    }

    /// Value reported for `variable`.
    pub fn value(&self, variable: Variable) -> f64 {
        match variable {
            Variable::Temperature => self.temperature,
            Variable::Precipitation => self.precipitation,
            Variable::Humidity => self.humidity,
            Variable::CloudCover => self.cloud_cover,
            Variable::WindSpeed => self.wind_speed,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_record_is_nan() {
        let r = ForecastRecord::missing(CalendarDate::new(2024, 1, 1).unwrap(), 90);
        assert!(!r.is_complete());
        assert_eq!(r.coverage(), Coverage::Missing { nearest_gap_days: 90 });
        for v in Variable::ALL {
            assert!(r.value(v).is_nan());
        }
        assert!(r.description().is_empty());
        assert_eq!(r.source_date(), None);
    }

    #[test]
    fn coverage_json() {
        let json = serde_json::to_string(&Coverage::Missing { nearest_gap_days: 3 }).unwrap();
        assert_eq!(json, r#"{"status":"missing","nearest_gap_days":3}"#);
        let json = serde_json::to_string(&Coverage::Complete).unwrap();
        assert_eq!(json, r#"{"status":"complete"}"#);
    }
}
