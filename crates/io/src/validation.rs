//! Validation set reader.

use std::path::Path;

use nimbus_tune::ValidationSample;
use tracing::info;

use crate::error::IoError;
use crate::json;

const KIND: &str = "validation set";

/// Reads ground-truth samples from a JSON list of
/// `{"date", "hour", "variable", "actual"}` objects.
///
/// Content checks (hour range, finite values) are left to the tuner.
pub fn read_validation_set(path: &Path) -> Result<Vec<ValidationSample>, IoError> {
    let samples: Vec<ValidationSample> = json::read(path, KIND)?;
    info!(path = %path.display(), samples = samples.len(), "validation set loaded");
    Ok(samples)
}
