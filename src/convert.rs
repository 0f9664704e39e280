//! Pure conversion functions: TOML config structs -> crate API config types.

use std::collections::BTreeMap;

use anyhow::{Context as _, Result, bail};

use crate::config::*;

use nimbus_bias::{CorrectionConfig, FeelsLikeRule, FeelsLikeTable, UnitConversions};
use nimbus_blend::{BlendSchedule, BlendWeights};
use nimbus_calendar::TimeBucket;
use nimbus_features::{Context, ContextualField, FeatureConfig};
use nimbus_forecast::ForecastConfig;
use nimbus_io::ModelPaths;
use nimbus_regress::Variable;
use nimbus_tune::TunerConfig;

/// Parses a variable name such as `"wind_speed"`.
pub fn parse_variable(s: &str) -> Result<Variable> {
    let lower = s.to_lowercase();
    Variable::ALL
        .into_iter()
        .find(|v| v.name() == lower)
        .with_context(|| format!("unknown variable: {s:?}"))
}

/// Parses a time-of-day bucket name such as `"evening"`.
pub fn parse_bucket(s: &str) -> Result<TimeBucket> {
    let lower = s.to_lowercase();
    TimeBucket::ALL
        .into_iter()
        .find(|b| b.name() == lower)
        .with_context(|| format!("unknown time-of-day bucket: {s:?}"))
}

/// Parses `"day"` or `"night"`.
pub fn parse_context(s: &str) -> Result<Context> {
    match s.to_lowercase().as_str() {
        "day" => Ok(Context::Day),
        "night" => Ok(Context::Night),
        other => bail!("unknown context: {other:?}"),
    }
}

/// Builds the per-variable artefact locations from the `[models]` tables.
pub fn build_model_paths(models: &BTreeMap<String, ModelToml>) -> Result<BTreeMap<Variable, ModelPaths>> {
    models
        .iter()
        .map(|(name, m)| {
            let variable = parse_variable(name)?;
            let paths = ModelPaths {
                day: m.day.clone(),
                night: m.night.clone(),
            };
            Ok((variable, paths))
        })
        .collect()
}

/// Builds a [`FeatureConfig`] from the TOML features configuration.
pub fn build_feature_config(features: &FeaturesToml) -> Result<FeatureConfig> {
    let mut cfg = FeatureConfig::new()
        .with_max_gap_days(features.max_gap_days)
        .with_clear_sky_feature(&features.clear_sky_feature)
        .with_default_clear_sky(features.default_clear_sky);
    if let Some(ref fields) = features.contextual {
        cfg = cfg.with_contextual_fields(
            fields
                .iter()
                .map(|f| ContextualField::new(&f.name, &f.day, &f.night))
                .collect(),
        );
    }
    cfg.validate()?;
    Ok(cfg)
}

/// Builds a [`BlendSchedule`], keeping defaults for buckets left unset.
pub fn build_blend_schedule(blend: &BlendToml) -> Result<BlendSchedule> {
    let mut schedule = BlendSchedule::new();
    let overrides = [
        (TimeBucket::Morning, blend.morning),
        (TimeBucket::Afternoon, blend.afternoon),
        (TimeBucket::Evening, blend.evening),
        (TimeBucket::Night, blend.night),
    ];
    for (bucket, weights) in overrides {
        if let Some(w) = weights {
            schedule = schedule.with_weights(bucket, BlendWeights::new(w.day, w.night));
        }
    }
    schedule.validate()?;
    Ok(schedule)
}

/// Builds a [`CorrectionConfig`] from the TOML correction configuration.
pub fn build_correction_config(correction: &CorrectionToml) -> Result<CorrectionConfig> {
    let conversions = UnitConversions::new()
        .with_vapour_pressure_divisor(correction.vapour_pressure_divisor)
        .with_wind_proxy_base(correction.wind_proxy_base)
        .with_wind_proxy_scale(correction.wind_proxy_scale);

    let mut feels_like = FeelsLikeTable::new();
    for (name, rule) in &correction.feels_like {
        let bucket = parse_bucket(name)?;
        feels_like = feels_like.with_rule(
            bucket,
            FeelsLikeRule {
                offset: rule.offset,
                cloud_coefficient: rule.cloud_coefficient,
                cloud_context: parse_context(&rule.cloud_context)?,
            },
        );
    }

    let cfg = CorrectionConfig::new()
        .with_conversions(conversions)
        .with_feels_like(feels_like)
        .with_precipitation_diurnal(correction.precipitation_diurnal);
    cfg.validate()?;
    Ok(cfg)
}

/// Builds a [`ForecastConfig`] from the TOML forecast configuration.
pub fn build_forecast_config(forecast: &ForecastToml) -> Result<ForecastConfig> {
    let cfg = ForecastConfig::new()
        .with_aggregation_hours(forecast.aggregation_hours.clone())
        .with_max_range_days(forecast.max_range_days);
    cfg.validate()?;
    Ok(cfg)
}

/// Builds a [`TunerConfig`], with `iterations` overriding the file value.
///
/// Dead bands and weights named in the file replace the built-in values of
/// those variables only.
pub fn build_tuner_config(tune: &TuneToml, iterations: Option<usize>) -> Result<TunerConfig> {
    let mut cfg = TunerConfig::new()
        .with_iterations(iterations.unwrap_or(tune.iterations))
        .with_learning_rate(tune.learning_rate)
        .with_adjust_multiplicative(tune.adjust_multiplicative)
        .with_min_group_samples(tune.min_group_samples)
        .with_stop_when_worse(tune.stop_when_worse);
    for (name, &band) in &tune.dead_band {
        cfg = cfg.with_dead_band(parse_variable(name)?, band);
    }
    for (name, &weight) in &tune.weights {
        cfg = cfg.with_weight(parse_variable(name)?, weight);
    }
    cfg.validate()?;
    Ok(cfg)
}
