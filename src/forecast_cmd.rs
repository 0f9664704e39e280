//! Forecast command: one hourly record.

use anyhow::{Context, Result};
use tracing::info_span;

use nimbus_forecast::{Coverage, ForecastRecord};

use crate::cli::ForecastArgs;
use crate::config::NimbusConfig;
use crate::pipeline;

/// Run a single-hour forecast and print it.
pub fn run(args: ForecastArgs, config: &NimbusConfig) -> Result<()> {
    let _cmd = info_span!("forecast").entered();
    let assembler = pipeline::build_assembler(config)?;

    let record = assembler
        .forecast(args.date, args.hour)
        .with_context(|| format!("no forecast for {} {:02}:00", args.date, args.hour))?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&record)?);
    } else {
        println!("{}", render(&record));
    }
    Ok(())
}

/// One-line human-readable rendering shared with the range command.
pub fn render(r: &ForecastRecord) -> String {
    let when = match (r.hour(), r.time_of_day()) {
        (Some(h), Some(b)) => format!("{} {h:02}:00 {:<9}", r.date(), b.name()),
        _ => format!("{} {:<15}", r.date(), "day"),
    };
    if !r.is_complete() {
        let gap = match r.coverage() {
            Coverage::Missing { nearest_gap_days } => nearest_gap_days,
            Coverage::Complete => 0,
        };
        return format!("{when}  no source data (nearest record {gap} days away)");
    }
    format!(
        "{when}  {:5.1} °C (feels {:5.1})  precip {:4.1} mm ({:3.0}%)  \
         humidity {:3.0}%  cloud {:3.0}%  wind {:4.1} m/s  {}. {}",
        r.temperature(),
        r.feels_like(),
        r.precipitation(),
        r.precipitation_probability(),
        r.humidity(),
        r.cloud_cover(),
        r.wind_speed(),
        r.summary(),
        r.description(),
    )
}
