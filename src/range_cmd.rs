//! Range command: daily aggregates over an inclusive date range.

use anyhow::{Context, Result};
use tracing::{info, info_span, warn};

use nimbus_io::write_forecasts;

use crate::cli::RangeArgs;
use crate::config::NimbusConfig;
use crate::forecast_cmd::render;
use crate::pipeline;

/// Run the daily forecast for every date in the range.
pub fn run(args: RangeArgs, config: &NimbusConfig) -> Result<()> {
    let _cmd = info_span!("range").entered();
    let assembler = pipeline::build_assembler(config)?;

    let records = assembler
        .forecast_range(args.start, args.end)?
        .collect::<Result<Vec<_>, _>>()
        .with_context(|| format!("range {}..={} failed", args.start, args.end))?;

    let missing = records.iter().filter(|r| !r.is_complete()).count();
    if missing > 0 {
        warn!(missing, total = records.len(), "days without source coverage");
    }

    if args.json {
        println!("{}", serde_json::to_string_pretty(&records)?);
    } else {
        for r in &records {
            println!("{}", render(r));
        }
    }

    if let Some(path) = &args.output {
        write_forecasts(path, &records)
            .with_context(|| format!("failed to write forecasts: {}", path.display()))?;
        info!(path = %path.display(), n = records.len(), "forecasts written");
    }
    Ok(())
}
