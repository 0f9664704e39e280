//! Source dataset reader.

use std::collections::BTreeMap;
use std::path::Path;

use nimbus_calendar::CalendarDate;
use nimbus_features::{SourceDataset, SourceRecord};
use serde::Deserialize;
use tracing::info;

use crate::error::IoError;
use crate::json;

const KIND: &str = "dataset";

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct RecordRow {
    date: CalendarDate,
    #[serde(default)]
    fields: BTreeMap<String, Option<f64>>,
}

/// Reads a source dataset from a JSON array of
/// `{"date": "YYYY-MM-DD", "fields": {"name": value}}` objects.
///
/// `null` field values are treated as missing and dropped.
///
/// # Errors
///
/// * [`IoError::FileNotFound`] if `path` does not exist.
/// * [`IoError::Json`] if the file does not parse.
/// * [`IoError::Invalid`] if the dataset is empty or has duplicate dates.
pub fn read_dataset(path: &Path) -> Result<SourceDataset, IoError> {
    let rows: Vec<RecordRow> = json::read(path, KIND)?;
    let records = rows
        .into_iter()
        .map(|row| {
            let fields = row
                .fields
                .into_iter()
                .filter_map(|(name, value)| value.map(|v| (name, v)));
            SourceRecord::new(row.date, fields)
        })
        .collect();
    let dataset = SourceDataset::new(records).map_err(|e| IoError::invalid(KIND, path, e))?;
    let (first, last) = dataset.span();
    info!(records = dataset.len(), %first, %last, "dataset loaded");
    Ok(dataset)
}
