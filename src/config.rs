use std::collections::BTreeMap;
use std::path::PathBuf;

use serde::Deserialize;

/// Top-level Nimbus configuration.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct NimbusConfig {
    /// Input and output files.
    pub data: DataToml,

    /// Model artefacts keyed by variable name.
    pub models: BTreeMap<String, ModelToml>,

    /// Feature construction settings.
    #[serde(default)]
    pub features: FeaturesToml,

    /// Day/night blend weights per time-of-day bucket.
    #[serde(default)]
    pub blend: BlendToml,

    /// Unit conversion and post-processing settings.
    #[serde(default)]
    pub correction: CorrectionToml,

    /// Daily aggregation settings.
    #[serde(default)]
    pub forecast: ForecastToml,

    /// Bias re-tuning settings.
    #[serde(default)]
    pub tune: TuneToml,

    /// Log levels used when `RUST_LOG` is unset.
    #[serde(default)]
    pub logging: LoggingToml,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DataToml {
    pub dataset: PathBuf,
    /// Starting offsets; identity offsets when unset.
    #[serde(default)]
    pub bias_table: Option<PathBuf>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ModelToml {
    pub day: PathBuf,
    /// Separate night artefact; the day artefact serves both when unset.
    #[serde(default)]
    pub night: Option<PathBuf>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FeaturesToml {
    #[serde(default = "default_max_gap_days")]
    pub max_gap_days: u32,
    #[serde(default = "default_clear_sky_feature")]
    pub clear_sky_feature: String,
    /// Clear-sky fraction assumed when the clear-sky field is missing.
    #[serde(default = "default_clear_sky")]
    pub default_clear_sky: f64,
    /// Replaces the built-in day/night bindings when set.
    #[serde(default)]
    pub contextual: Option<Vec<ContextualToml>>,
}

impl Default for FeaturesToml {
    fn default() -> Self {
        Self {
            max_gap_days: default_max_gap_days(),
            clear_sky_feature: default_clear_sky_feature(),
            default_clear_sky: default_clear_sky(),
            contextual: None,
        }
    }
}

fn default_max_gap_days() -> u32 {
    60
}
fn default_clear_sky_feature() -> String {
    "clear_cov".to_string()
}
fn default_clear_sky() -> f64 {
    0.5
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ContextualToml {
    pub name: String,
    pub day: String,
    pub night: String,
}

#[derive(Debug, Deserialize, Default)]
#[serde(deny_unknown_fields)]
pub struct BlendToml {
    pub morning: Option<WeightsToml>,
    pub afternoon: Option<WeightsToml>,
    pub evening: Option<WeightsToml>,
    pub night: Option<WeightsToml>,
}

#[derive(Debug, Clone, Copy, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct WeightsToml {
    pub day: f64,
    pub night: f64,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CorrectionToml {
    #[serde(default = "default_true")]
    pub precipitation_diurnal: bool,
    #[serde(default = "default_vapour_pressure_divisor")]
    pub vapour_pressure_divisor: f64,
    #[serde(default = "default_wind_proxy_base")]
    pub wind_proxy_base: f64,
    #[serde(default = "default_wind_proxy_scale")]
    pub wind_proxy_scale: f64,
    /// Per-bucket overrides of the feels-like rules.
    #[serde(default)]
    pub feels_like: BTreeMap<String, FeelsLikeToml>,
}

impl Default for CorrectionToml {
    fn default() -> Self {
        Self {
            precipitation_diurnal: true,
            vapour_pressure_divisor: default_vapour_pressure_divisor(),
            wind_proxy_base: default_wind_proxy_base(),
            wind_proxy_scale: default_wind_proxy_scale(),
            feels_like: BTreeMap::new(),
        }
    }
}

fn default_true() -> bool {
    true
}
fn default_vapour_pressure_divisor() -> f64 {
    30.0
}
fn default_wind_proxy_base() -> f64 {
    330.0
}
fn default_wind_proxy_scale() -> f64 {
    0.5
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FeelsLikeToml {
    pub offset: f64,
    pub cloud_coefficient: f64,
    /// `"day"` or `"night"`.
    pub cloud_context: String,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ForecastToml {
    #[serde(default = "default_aggregation_hours")]
    pub aggregation_hours: Vec<u8>,
    /// Longest accepted range, in days.
    #[serde(default = "default_max_range_days")]
    pub max_range_days: u32,
}

impl Default for ForecastToml {
    fn default() -> Self {
        Self {
            aggregation_hours: default_aggregation_hours(),
            max_range_days: default_max_range_days(),
        }
    }
}

fn default_aggregation_hours() -> Vec<u8> {
    (0..24).collect()
}
fn default_max_range_days() -> u32 {
    365
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TuneToml {
    #[serde(default = "default_iterations")]
    pub iterations: usize,
    #[serde(default = "default_learning_rate")]
    pub learning_rate: f64,
    /// Per-variable dead bands overriding the built-in ones.
    #[serde(default)]
    pub dead_band: BTreeMap<String, f64>,
    /// Per-variable weights of the total error overriding the built-in ones.
    #[serde(default)]
    pub weights: BTreeMap<String, f64>,
    #[serde(default)]
    pub adjust_multiplicative: bool,
    #[serde(default = "default_min_group_samples")]
    pub min_group_samples: usize,
    #[serde(default = "default_true")]
    pub stop_when_worse: bool,
}

impl Default for TuneToml {
    fn default() -> Self {
        Self {
            iterations: default_iterations(),
            learning_rate: default_learning_rate(),
            dead_band: BTreeMap::new(),
            weights: BTreeMap::new(),
            adjust_multiplicative: false,
            min_group_samples: default_min_group_samples(),
            stop_when_worse: true,
        }
    }
}

fn default_iterations() -> usize {
    3
}
fn default_learning_rate() -> f64 {
    1.0
}
fn default_min_group_samples() -> usize {
    1
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LoggingToml {
    /// Level for every nimbus crate when no `-v` flag is given.
    #[serde(default = "default_log_level")]
    pub level: String,
    /// Per-target levels, e.g. `nimbus_tune = "debug"`.
    #[serde(default)]
    pub targets: BTreeMap<String, String>,
    /// Colour the output.
    #[serde(default = "default_true")]
    pub ansi: bool,
}

impl Default for LoggingToml {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            targets: BTreeMap::new(),
            ansi: true,
        }
    }
}

fn default_log_level() -> String {
    "warn".to_string()
}
