//! Retune command: fit bias offsets to observations and save them.

use std::path::Path;

use anyhow::{Context, Result};
use tracing::{info, info_span, warn};

use nimbus_io::{read_validation_set, write_bias_table};
use nimbus_tune::retune;

use crate::cli::RetuneArgs;
use crate::config::NimbusConfig;
use crate::convert;
use crate::pipeline;

/// Where the tuned table is written.
#[derive(Debug, PartialEq)]
enum Target<'a> {
    /// The `--output` path.
    Output(&'a Path),
    /// The configured starting table, replaced in place.
    Overwrite(&'a Path),
    /// Nothing to write to; print instead.
    Stdout,
}

fn target<'a>(output: Option<&'a Path>, bias_table: Option<&'a Path>) -> Target<'a> {
    match (output, bias_table) {
        (Some(path), _) => Target::Output(path),
        (None, Some(path)) => Target::Overwrite(path),
        (None, None) => Target::Stdout,
    }
}

/// Run the tuner and persist the tuned table.
pub fn run(args: RetuneArgs, config: &NimbusConfig) -> Result<()> {
    let _cmd = info_span!("retune").entered();
    let tuner_cfg = convert::build_tuner_config(&config.tune, args.iterations)?;
    let assembler = pipeline::build_assembler(config)?;

    let samples = read_validation_set(&args.validation).with_context(|| {
        format!("failed to read validation set: {}", args.validation.display())
    })?;

    let result = retune(&assembler, &samples, &tuner_cfg).context("re-tuning failed")?;

    for report in result.iterations() {
        println!(
            "iteration {:>2}  error {:8.4}  mae {:8.4}  samples {}",
            report.iteration(),
            report.total_error(),
            report.overall_mae(),
            report.samples_used()
        );
    }
    if result.skipped() > 0 {
        println!("skipped {} samples without source coverage", result.skipped());
    }

    let path = match target(args.output.as_deref(), config.data.bias_table.as_deref()) {
        Target::Output(path) => path,
        Target::Overwrite(path) => {
            warn!(
                path = %path.display(),
                "no --output given, replacing the starting bias table"
            );
            path
        }
        Target::Stdout => {
            let offsets: Vec<_> = result.table().offsets().collect();
            println!("{}", serde_json::to_string_pretty(&offsets)?);
            return Ok(());
        }
    };
    write_bias_table(path, result.table())
        .with_context(|| format!("failed to write bias table: {}", path.display()))?;
    info!(path = %path.display(), "tuned bias table saved");
    Ok(())
}
