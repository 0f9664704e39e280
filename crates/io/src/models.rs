//! Model artefact reader.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use nimbus_regress::{ModelFile, RegressorSet, Variable, VariableRegressor};
use tracing::info;

use crate::error::IoError;
use crate::json;

const KIND: &str = "model";

/// Locations of the artefacts for one variable.
///
/// A single `day` file serves both contexts when `night` is `None`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModelPaths {
    pub day: PathBuf,
    pub night: Option<PathBuf>,
}

impl ModelPaths {
    /// One artefact for both contexts.
    pub fn single(path: impl Into<PathBuf>) -> Self {
        Self {
            day: path.into(),
            night: None,
        }
    }

    /// Separate day and night artefacts.
    pub fn pair(day: impl Into<PathBuf>, night: impl Into<PathBuf>) -> Self {
        Self {
            day: day.into(),
            night: Some(night.into()),
        }
    }
}

/// Reads one model artefact and checks it predicts `expected`.
///
/// # Errors
///
/// * [`IoError::FileNotFound`] / [`IoError::Json`] for unreadable files.
/// * [`IoError::Invalid`] if the artefact is inconsistent or declares a
///   different variable.
pub fn read_model(path: &Path, expected: Variable) -> Result<Arc<dyn VariableRegressor>, IoError> {
    let file: ModelFile = json::read(path, KIND)?;
    if file.variable() != expected {
        return Err(IoError::invalid(
            KIND,
            path,
            format!("declares {} but is configured for {expected}", file.variable()),
        ));
    }
    let model = file
        .into_regressor()
        .map_err(|e| IoError::invalid(KIND, path, e))?;
    info!(path = %path.display(), %expected, unit = %model.unit(), "model loaded");
    Ok(model)
}

/// Reads every configured artefact into a [`RegressorSet`].
///
/// Completeness is not checked here; the assembler rejects a set that
/// lacks a variable.
pub fn read_regressors(paths: &BTreeMap<Variable, ModelPaths>) -> Result<RegressorSet, IoError> {
    let mut set = RegressorSet::new();
    for (&variable, p) in paths {
        let day = read_model(&p.day, variable)?;
        let night = match &p.night {
            Some(night) => read_model(night, variable)?,
            None => Arc::clone(&day),
        };
        set = set
            .with_pair(variable, day, night)
            .map_err(|e| IoError::invalid(KIND, &p.day, e))?;
    }
    Ok(set)
}
