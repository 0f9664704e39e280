//! Bias table persistence.

use std::path::Path;

use nimbus_bias::{BiasOffset, BiasTable};
use tracing::info;

use crate::error::IoError;
use crate::json;

const KIND: &str = "bias table";

/// Reads a bias table from a JSON list of offsets.
///
/// Entries may omit `additive` (0) or `multiplicative` (1). Pairs that are
/// not listed use the identity offset.
pub fn read_bias_table(path: &Path) -> Result<BiasTable, IoError> {
    let offsets: Vec<BiasOffset> = json::read(path, KIND)?;
    let table = BiasTable::from_offsets(offsets).map_err(|e| IoError::invalid(KIND, path, e))?;
    info!(path = %path.display(), entries = table.len(), "bias table loaded");
    Ok(table)
}

/// Writes the explicit entries of `table` as a JSON list.
pub fn write_bias_table(path: &Path, table: &BiasTable) -> Result<(), IoError> {
    let offsets: Vec<&BiasOffset> = table.offsets().collect();
    json::write(path, KIND, &offsets)?;
    info!(path = %path.display(), entries = offsets.len(), "bias table written");
    Ok(())
}
