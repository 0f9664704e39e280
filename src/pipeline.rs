//! Shared setup: configuration loading and assembler construction.

use std::path::Path;

use anyhow::{Context, Result};
use tracing::info;

use nimbus_bias::{BiasCorrector, BiasTable};
use nimbus_blend::TimeOfDayBlender;
use nimbus_features::FeatureBuilder;
use nimbus_forecast::ForecastAssembler;
use nimbus_io::{read_bias_table, read_dataset, read_regressors};

use crate::config::NimbusConfig;
use crate::convert;

/// Reads and parses the TOML configuration at `path`.
pub fn load_config(path: &Path) -> Result<NimbusConfig> {
    let toml_str = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read config file: {}", path.display()))?;
    toml::from_str(&toml_str).context("failed to parse TOML config")
}

/// Loads every input named by `config` and wires up the assembler.
pub fn build_assembler(config: &NimbusConfig) -> Result<ForecastAssembler> {
    let feature_cfg = convert::build_feature_config(&config.features)?;
    let schedule = convert::build_blend_schedule(&config.blend)?;
    let correction = convert::build_correction_config(&config.correction)?;
    let forecast_cfg = convert::build_forecast_config(&config.forecast)?;
    let model_paths = convert::build_model_paths(&config.models)?;

    let dataset = read_dataset(&config.data.dataset).with_context(|| {
        format!("failed to read dataset: {}", config.data.dataset.display())
    })?;
    let regressors = read_regressors(&model_paths).context("failed to load models")?;
    let offsets = match &config.data.bias_table {
        Some(path) => read_bias_table(path)
            .with_context(|| format!("failed to read bias table: {}", path.display()))?,
        None => {
            info!("no bias table configured, using identity offsets");
            BiasTable::identity()
        }
    };

    let features = FeatureBuilder::new(dataset, feature_cfg)?;
    let assembler = ForecastAssembler::new(
        features,
        regressors,
        TimeOfDayBlender::new(schedule)?,
        BiasCorrector::new(correction)?,
        forecast_cfg,
        offsets,
    )
    .context("failed to assemble forecast pipeline")?;
    Ok(assembler)
}
