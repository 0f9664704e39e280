use std::str::FromStr;

use anyhow::{Context, Result};
use tracing_subscriber::EnvFilter;
use tracing_subscriber::filter::LevelFilter;

use crate::config::LoggingToml;

/// All workspace crate targets that should receive log output.
const CRATE_TARGETS: &[&str] = &[
    "nimbus",
    "nimbus_bias",
    "nimbus_blend",
    "nimbus_calendar",
    "nimbus_features",
    "nimbus_forecast",
    "nimbus_io",
    "nimbus_regress",
    "nimbus_stats",
    "nimbus_tune",
];

/// Initialize tracing from the `[logging]` section and the CLI verbosity.
///
/// `RUST_LOG` replaces both when set.
pub fn init(verbosity: u8, config: &LoggingToml) -> Result<()> {
    let filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => EnvFilter::try_new(directives(verbosity, config)?)
            .context("invalid [logging] directives")?,
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_ansi(config.ansi)
        .with_writer(std::io::stderr)
        .init();
    Ok(())
}

/// Base level for the nimbus crates.
///
/// Each `-v` raises it one step above the configured level: with the
/// default `warn`, -v gives info, -vv debug and -vvv trace.
fn base_level(verbosity: u8, configured: &str) -> Result<LevelFilter> {
    let configured = parse_level(configured)?;
    let ladder = [
        LevelFilter::OFF,
        LevelFilter::ERROR,
        LevelFilter::WARN,
        LevelFilter::INFO,
        LevelFilter::DEBUG,
        LevelFilter::TRACE,
    ];
    let start = ladder.iter().position(|l| *l == configured).unwrap_or(2);
    let index = (start + verbosity as usize).min(ladder.len() - 1);
    Ok(ladder[index])
}

fn parse_level(s: &str) -> Result<LevelFilter> {
    LevelFilter::from_str(s).with_context(|| format!("unknown log level: {s:?}"))
}

/// Filter directives: every crate target at the base level, then the
/// per-target levels from `[logging.targets]`, which win over the base.
fn directives(verbosity: u8, config: &LoggingToml) -> Result<String> {
    let base = base_level(verbosity, &config.level)?;
    let mut parts: Vec<String> = CRATE_TARGETS
        .iter()
        .filter(|t| !config.targets.contains_key(**t))
        .map(|t| format!("{t}={base}"))
        .collect();
    for (target, level) in &config.targets {
        parts.push(format!("{target}={}", parse_level(level)?));
    }
    Ok(parts.join(","))
}
