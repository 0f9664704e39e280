//! Forecast record writer.

use std::path::Path;

use nimbus_forecast::ForecastRecord;

use crate::error::IoError;
use crate::json;

/// Writes forecast records as a pretty-printed JSON list.
pub fn write_forecasts(path: &Path, records: &[ForecastRecord]) -> Result<(), IoError> {
    json::write(path, "forecast", records)
}
