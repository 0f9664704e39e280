//! Bias offsets, the immutable offset table, and its shared handle.

use std::collections::BTreeMap;
use std::sync::{Arc, PoisonError, RwLock};

use nimbus_calendar::TimeBucket;
use nimbus_regress::Variable;
use serde::{Deserialize, Serialize};

use crate::error::BiasError;

fn default_multiplicative() -> f64 {
    1.0
}

/// Correction `x · multiplicative + additive` for one (variable, bucket).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BiasOffset {
    pub variable: Variable,
    pub bucket: TimeBucket,
    #[serde(default)]
    pub additive: f64,
    #[serde(default = "default_multiplicative")]
    pub multiplicative: f64,
}

impl BiasOffset {
    /// The offset that leaves values unchanged.
    pub fn identity(variable: Variable, bucket: TimeBucket) -> Self {
        Self {
            variable,
            bucket,
            additive: 0.0,
            multiplicative: 1.0,
        }
    }

    /// Applies the offset to `x`.
    #[inline]
    pub fn apply(&self, x: f64) -> f64 {
        x * self.multiplicative + self.additive
    }

    fn check(&self) -> Result<(), BiasError> {
        let invalid = |reason: String| BiasError::InvalidOffset {
            variable: self.variable,
            bucket: self.bucket,
            reason,
        };
        if !self.additive.is_finite() {
            return Err(invalid(format!("additive must be finite, got {}", self.additive)));
        }
        if !self.multiplicative.is_finite() || self.multiplicative <= 0.0 {
            return Err(invalid(format!(
                "multiplicative must be finite and > 0, got {}",
                self.multiplicative
            )));
        }
        Ok(())
    }
}

/// Complete set of bias offsets. Missing entries behave as identity.
///
/// A table is never edited in place by readers; updates build a new table
/// and publish it through [`SharedBiasTable`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BiasTable {
    offsets: BTreeMap<(Variable, TimeBucket), BiasOffset>,
}

impl BiasTable {
    /// Table with no entries (identity everywhere).
    pub fn identity() -> Self {
        Self::default()
    }

    /// Builds a table from a list of offsets.
    ///
    /// # Errors
    ///
    /// Returns [`BiasError::DuplicateOffset`] if a (variable, bucket) pair
    /// appears twice and [`BiasError::InvalidOffset`] for non-finite values
    /// or a non-positive multiplicative factor.
    pub fn from_offsets(offsets: impl IntoIterator<Item = BiasOffset>) -> Result<Self, BiasError> {
        let mut table = Self::default();
        for offset in offsets {
            offset.check()?;
            let key = (offset.variable, offset.bucket);
            if table.offsets.insert(key, offset).is_some() {
                return Err(BiasError::DuplicateOffset {
                    variable: offset.variable,
                    bucket: offset.bucket,
                });
            }
        }
        Ok(table)
    }

    /// Offset for (variable, bucket), identity when absent.
    pub fn get(&self, variable: Variable, bucket: TimeBucket) -> BiasOffset {
        self.offsets
            .get(&(variable, bucket))
            .copied()
            .unwrap_or_else(|| BiasOffset::identity(variable, bucket))
    }

    /// Returns a copy with one offset replaced.
    pub fn with_offset(mut self, offset: BiasOffset) -> Result<Self, BiasError> {
        offset.check()?;
        self.offsets.insert((offset.variable, offset.bucket), offset);
        Ok(self)
    }

    /// Explicit entries in (variable, bucket) order.
    pub fn offsets(&self) -> impl Iterator<Item = &BiasOffset> {
        self.offsets.values()
    }

    /// Every (variable, bucket) offset, filling gaps with identity.
    pub fn dense(&self) -> Vec<BiasOffset> {
        Variable::ALL
            .iter()
            .flat_map(|&v| TimeBucket::ALL.iter().map(move |&b| (v, b)))
            .map(|(v, b)| self.get(v, b))
            .collect()
    }

    /// Number of explicit entries.
    pub fn len(&self) -> usize {
        self.offsets.len()
    }

    /// Returns `true` if the table has no explicit entries.
    pub fn is_empty(&self) -> bool {
        self.offsets.is_empty()
    }
}

/// Process-wide handle to the current [`BiasTable`].
///
/// Readers take an `Arc` snapshot and drop the lock at once; `publish`
/// swaps the whole table, so a reader never sees a mix of old and new
/// offsets. A poisoned lock is recovered since the guarded value is always
/// a complete table.
#[derive(Debug)]
pub struct SharedBiasTable {
    current: RwLock<Arc<BiasTable>>,
}

impl SharedBiasTable {
    /// Wraps an initial table.
    pub fn new(table: BiasTable) -> Self {
        Self {
            current: RwLock::new(Arc::new(table)),
        }
    }

    /// The table in effect right now.
    pub fn snapshot(&self) -> Arc<BiasTable> {
        let guard = self.current.read().unwrap_or_else(PoisonError::into_inner);
        Arc::clone(&*guard)
    }

    /// Replaces the table, returning the previous one.
    pub fn publish(&self, table: BiasTable) -> Arc<BiasTable> {
        let next = Arc::new(table);
        let mut guard = self.current.write().unwrap_or_else(PoisonError::into_inner);
        std::mem::replace(&mut *guard, next)
    }
}

impl Default for SharedBiasTable {
    fn default() -> Self {
        Self::new(BiasTable::identity())
    }
}
