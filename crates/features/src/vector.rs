//! Named feature vectors and the schemas regressors consume.

use std::collections::{BTreeMap, HashSet};
use std::fmt;

use crate::error::FeatureError;

/// Raw day of year, 1..=366.
pub const DAY_OF_YEAR: &str = "day_of_year";
/// Day of year divided by the length of the year, in (0, 1].
pub const DAY_OF_YEAR_NORM: &str = "day_of_year_norm";
/// Calendar month, 1..=12.
pub const MONTH: &str = "month";
/// Season index, 1..=4 (winter first).
pub const SEASON: &str = "season";

/// Every calendar feature name added to each vector.
pub const CALENDAR_FEATURES: [&str; 4] = [DAY_OF_YEAR, DAY_OF_YEAR_NORM, MONTH, SEASON];

/// Which half of the day a feature vector describes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Context {
    Day,
    Night,
}

impl fmt::Display for Context {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Context::Day => "day",
            Context::Night => "night",
        })
    }
}

/// Mapping from feature name to value.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FeatureVector {
    values: BTreeMap<String, f64>,
}

impl FeatureVector {
    /// Creates an empty vector.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets a feature, replacing any previous value.
    pub fn insert(&mut self, name: impl Into<String>, value: f64) {
        self.values.insert(name.into(), value);
    }

    /// Looks up a feature.
    pub fn get(&self, name: &str) -> Option<f64> {
        self.values.get(name).copied()
    }

    /// Number of features.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Returns `true` if the vector holds no features.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Iterates features in name order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.values.iter().map(|(k, v)| (k.as_str(), *v))
    }
}

impl<S: Into<String>> FromIterator<(S, f64)> for FeatureVector {
    fn from_iter<I: IntoIterator<Item = (S, f64)>>(iter: I) -> Self {
        Self {
            values: iter.into_iter().map(|(k, v)| (k.into(), v)).collect(),
        }
    }
}

/// Ordered list of feature names a regressor reads.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeatureSchema {
    names: Vec<String>,
}

impl FeatureSchema {
    /// Creates a schema.
    ///
    /// # Errors
    ///
    /// Returns [`FeatureError::InvalidSchema`] if `names` is empty, contains
    /// an empty name, or repeats a name.
    pub fn new<S: Into<String>>(names: impl IntoIterator<Item = S>) -> Result<Self, FeatureError> {
        let names: Vec<String> = names.into_iter().map(Into::into).collect();
        if names.is_empty() {
            return Err(FeatureError::InvalidSchema {
                reason: "schema has no features".to_string(),
            });
        }
        let mut seen = HashSet::with_capacity(names.len());
        for name in &names {
            if name.is_empty() {
                return Err(FeatureError::InvalidSchema {
                    reason: "empty feature name".to_string(),
                });
            }
            if !seen.insert(name.as_str()) {
                return Err(FeatureError::InvalidSchema {
                    reason: format!("feature '{name}' listed twice"),
                });
            }
        }
        Ok(Self { names })
    }

    /// Feature names in input order.
    pub fn names(&self) -> &[String] {
        &self.names
    }

    /// Number of features.
    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// Always `false` for a constructed schema.
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Reads every schema feature from `vector` in order.
    ///
    /// Returns the first missing name on failure.
    pub fn extract<'a>(&'a self, vector: &FeatureVector) -> Result<Vec<f64>, &'a str> {
        self.names
            .iter()
            .map(|n| vector.get(n).ok_or(n.as_str()))
            .collect()
    }
}
