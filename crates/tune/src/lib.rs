//! # nimbus-tune
//!
//! Re-tunes the bias offset table against ground-truth observations and
//! publishes the result to a running [`ForecastAssembler`].
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | `tuner` | `WeightTuner` iteration loop |
//! | `sample` | `ValidationSample` |
//! | `result` | `TuneResult` and per-iteration reports |
//! | `config` | `TunerConfig` builder |
//! | `error` | Error types |

pub mod config;
pub mod error;
pub mod result;
pub mod sample;
pub mod tuner;

pub use config::TunerConfig;
pub use error::TuneError;
pub use result::{IterationReport, TuneResult};
pub use sample::ValidationSample;
pub use tuner::WeightTuner;

use nimbus_forecast::ForecastAssembler;
use tracing::info;

/// Tunes from the assembler's current offsets and atomically publishes the
/// tuned table. On error the published table is left untouched.
#[tracing::instrument(skip_all)]
pub fn retune(
    assembler: &ForecastAssembler,
    samples: &[ValidationSample],
    config: &TunerConfig,
) -> Result<TuneResult, TuneError> {
    let result = WeightTuner::new(config.clone())?.tune(assembler, samples)?;
    assembler.publish_offsets(result.table().clone());
    info!(
        offsets = result.table().len(),
        skipped = result.skipped(),
        "published tuned offsets"
    );
    Ok(result)
}
