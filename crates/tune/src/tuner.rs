//! Iterative bias-offset updates from validation residuals.

use std::collections::BTreeMap;

use nimbus_bias::BiasTable;
use nimbus_calendar::{CalendarDate, TimeBucket};
use nimbus_forecast::ForecastAssembler;
use nimbus_regress::Variable;
use nimbus_stats::{mean, mean_absolute_error, mean_signed_error, ols_slope};
use tracing::{debug, info};

use crate::config::TunerConfig;
use crate::error::TuneError;
use crate::result::{IterationReport, TuneResult};
use crate::sample::ValidationSample;

/// Residual data of one (variable, bucket) group.
#[derive(Debug, Default)]
struct Group {
    converted: Vec<f64>,
    actual: Vec<f64>,
    corrected: Vec<f64>,
}

/// Outcome of scoring one table against the validation set.
#[derive(Debug)]
struct Evaluation {
    groups: BTreeMap<(Variable, TimeBucket), Group>,
    per_variable: BTreeMap<Variable, (Vec<f64>, Vec<f64>)>,
    used: usize,
    skipped: usize,
}

impl Evaluation {
    fn report(&self, iteration: usize, config: &TunerConfig) -> IterationReport {
        let mut all_actual = Vec::with_capacity(self.used);
        let mut all_pred = Vec::with_capacity(self.used);
        let mut mae = BTreeMap::new();
        let mut total = 0.0;
        for (&variable, (actual, predicted)) in &self.per_variable {
            if let Some(m) = mean_absolute_error(actual, predicted) {
                mae.insert(variable, m);
                total += config.weight(variable) * m;
            }
            all_actual.extend_from_slice(actual);
            all_pred.extend_from_slice(predicted);
        }
        let overall = mean_absolute_error(&all_actual, &all_pred).unwrap_or(f64::NAN);
        IterationReport::new(iteration, mae, overall, total, self.used)
    }
}

/// Re-tunes bias offsets so corrected forecasts match observations.
///
/// Each pass forecasts every distinct (date, hour) of the validation set
/// with the working table, groups residuals `actual - corrected` by
/// (variable, bucket) and moves each group's additive offset by
/// `learning_rate` times its mean residual, unless that mean lies within
/// the variable's dead band. With `adjust_multiplicative`, the residual is
/// regressed on the pre-offset value and both factors move.
///
/// Passes are compared by their weighted total error, so variables in
/// different units contribute on the scale their weights give them.
///
/// # Example
///
/// ```no_run
/// # fn demo(assembler: &nimbus_forecast::ForecastAssembler,
/// #         samples: &[nimbus_tune::ValidationSample]) -> Result<(), nimbus_tune::TuneError> {
/// use nimbus_tune::{TunerConfig, WeightTuner};
///
/// let tuner = WeightTuner::new(TunerConfig::new().with_iterations(2))?;
/// let result = tuner.tune(assembler, samples)?;
/// println!("skipped {} samples", result.skipped());
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct WeightTuner {
    config: TunerConfig,
}

impl WeightTuner {
    /// Creates a tuner after validating `config`.
    pub fn new(config: TunerConfig) -> Result<Self, TuneError> {
        config.validate()?;
        Ok(Self { config })
    }

    /// The active configuration.
    pub fn config(&self) -> &TunerConfig {
        &self.config
    }

    /// Tunes starting from the assembler's current table. Nothing is
    /// published.
    ///
    /// # Errors
    ///
    /// * [`TuneError::EmptyValidationSet`] if `samples` is empty.
    /// * [`TuneError::InvalidSample`] for a non-finite observation.
    /// * [`TuneError::NoUsableSamples`] if every sample lacks coverage.
    /// * [`TuneError::Forecast`] for any other forecast failure, such as an
    ///   invalid hour.
    #[tracing::instrument(skip_all, fields(samples = samples.len()))]
    pub fn tune(
        &self,
        assembler: &ForecastAssembler,
        samples: &[ValidationSample],
    ) -> Result<TuneResult, TuneError> {
        if samples.is_empty() {
            return Err(TuneError::EmptyValidationSet);
        }
        if let Some(index) = samples.iter().position(|s| !s.actual.is_finite()) {
            return Err(TuneError::InvalidSample {
                index,
                reason: format!("actual value {} is not finite", samples[index].actual),
            });
        }

        let by_slot = group_by_slot(samples);
        let mut working = (*assembler.offsets()).clone();
        let mut eval = evaluate(assembler, &by_slot, &working)?;
        if eval.used == 0 {
            return Err(TuneError::NoUsableSamples {
                skipped: eval.skipped,
            });
        }
        let skipped = eval.skipped;

        let baseline = eval.report(0, &self.config);
        info!(
            total_error = baseline.total_error(),
            mae = baseline.overall_mae(),
            used = eval.used,
            skipped,
            "baseline scored"
        );
        let mut best = (baseline.total_error(), working.clone());
        let mut reports = vec![baseline];

        for iteration in 1..=self.config.iterations() {
            working = self.update(working, &eval)?;
            eval = evaluate(assembler, &by_slot, &working)?;
            let report = eval.report(iteration, &self.config);
            let total = report.total_error();
            info!(
                iteration,
                total_error = total,
                mae = report.overall_mae(),
                "iteration scored"
            );
            reports.push(report);

            if total < best.0 {
                best = (total, working.clone());
            } else if self.config.stop_when_worse() && total > best.0 {
                info!(iteration, best = best.0, "error increased, stopping");
                break;
            }
        }

        let table = if self.config.stop_when_worse() {
            best.1
        } else {
            working
        };
        Ok(TuneResult::new(table, reports, skipped))
    }

    fn update(&self, table: BiasTable, eval: &Evaluation) -> Result<BiasTable, TuneError> {
        let lr = self.config.learning_rate();
        let mut table = table;
        for (&(variable, bucket), group) in &eval.groups {
            if group.actual.len() < self.config.min_group_samples() {
                continue;
            }
            let Some(mean_err) = mean_signed_error(&group.actual, &group.corrected) else {
                continue;
            };
            if mean_err.abs() <= self.config.dead_band(variable) {
                continue;
            }

            let mut offset = table.get(variable, bucket);
            let residuals: Vec<f64> = group
                .actual
                .iter()
                .zip(&group.corrected)
                .map(|(a, c)| a - c)
                .collect();
            let slope = if self.config.adjust_multiplicative() {
                ols_slope(&group.converted, &residuals)
                    .filter(|s| offset.multiplicative + lr * s > 0.0)
            } else {
                None
            };

            match slope {
                Some(s) => {
                    offset.multiplicative += lr * s;
                    offset.additive += lr * (mean_err - s * mean(&group.converted));
                }
                None => offset.additive += lr * mean_err,
            }
            debug!(
                %variable,
                %bucket,
                mean_err,
                additive = offset.additive,
                multiplicative = offset.multiplicative,
                "offset updated"
            );
            table = table.with_offset(offset)?;
        }
        Ok(table)
    }
}

type Slots = BTreeMap<(CalendarDate, u8), Vec<ValidationSample>>;

fn group_by_slot(samples: &[ValidationSample]) -> Slots {
    let mut slots: Slots = BTreeMap::new();
    for s in samples {
        slots.entry((s.date, s.hour)).or_default().push(*s);
    }
    slots
}

fn evaluate(
    assembler: &ForecastAssembler,
    slots: &Slots,
    table: &BiasTable,
) -> Result<Evaluation, TuneError> {
    let mut eval = Evaluation {
        groups: BTreeMap::new(),
        per_variable: BTreeMap::new(),
        used: 0,
        skipped: 0,
    };
    for (&(date, hour), samples) in slots {
        let hourly = match assembler.evaluate_with(date, hour, table) {
            Ok(h) => h,
            Err(e) if e.coverage_gap().is_some() => {
                eval.skipped += samples.len();
                continue;
            }
            Err(e) => return Err(e.into()),
        };
        for s in samples {
            let cv = hourly.get(s.variable);
            let group = eval.groups.entry((s.variable, cv.bucket())).or_default();
            group.converted.push(cv.converted());
            group.actual.push(s.actual);
            group.corrected.push(cv.value());

            let (actual, predicted) = eval.per_variable.entry(s.variable).or_default();
            actual.push(s.actual);
            predicted.push(cv.value());
            eval.used += 1;
        }
    }
    Ok(eval)
}
