//! Output types for bias re-tuning.

use std::collections::BTreeMap;

use nimbus_bias::BiasTable;
use nimbus_regress::Variable;

/// Error statistics of one table evaluation.
#[derive(Debug, Clone, PartialEq)]
pub struct IterationReport {
    iteration: usize,
    mae: BTreeMap<Variable, f64>,
    overall_mae: f64,
    total_error: f64,
    samples_used: usize,
}

impl IterationReport {
    pub(crate) fn new(
        iteration: usize,
        mae: BTreeMap<Variable, f64>,
        overall_mae: f64,
        total_error: f64,
        samples_used: usize,
    ) -> Self {
        Self {
            iteration,
            mae,
            overall_mae,
            total_error,
            samples_used,
        }
    }

    /// Pass number; 0 is the starting table.
    pub fn iteration(&self) -> usize {
        self.iteration
    }

    /// Mean absolute error of `variable`, if it had samples.
    pub fn mae(&self, variable: Variable) -> Option<f64> {
        self.mae.get(&variable).copied()
    }

    /// Mean absolute errors per variable.
    pub fn mae_by_variable(&self) -> &BTreeMap<Variable, f64> {
        &self.mae
    }

    /// Mean absolute error pooled over all used samples, mixing units.
    pub fn overall_mae(&self) -> f64 {
        self.overall_mae
    }

    /// Weighted sum of the per-variable MAEs. Drives early stopping.
    pub fn total_error(&self) -> f64 {
        self.total_error
    }

    /// Number of samples scored.
    pub fn samples_used(&self) -> usize {
        self.samples_used
    }
}

/// Result of a tuning run.
#[derive(Debug, Clone)]
pub struct TuneResult {
    table: BiasTable,
    iterations: Vec<IterationReport>,
    skipped: usize,
}

impl TuneResult {
    pub(crate) fn new(table: BiasTable, iterations: Vec<IterationReport>, skipped: usize) -> Self {
        Self {
            table,
            iterations,
            skipped,
        }
    }

    /// The tuned table.
    pub fn table(&self) -> &BiasTable {
        &self.table
    }

    /// Consumes the result, returning the tuned table.
    pub fn into_table(self) -> BiasTable {
        self.table
    }

    /// Reports for the starting table and every completed pass.
    pub fn iterations(&self) -> &[IterationReport] {
        &self.iterations
    }

    /// Samples skipped because their date had no source coverage.
    pub fn skipped(&self) -> usize {
        self.skipped
    }

    /// Report with the lowest total error.
    pub fn best(&self) -> Option<&IterationReport> {
        self.iterations
            .iter()
            .min_by(|a, b| a.total_error.total_cmp(&b.total_error))
    }
}
