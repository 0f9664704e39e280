//! Nearest-record lookup and day/night feature vector construction.

use nimbus_calendar::CalendarDate;
use tracing::debug;

use crate::config::FeatureConfig;
use crate::error::FeatureError;
use crate::record::{SourceDataset, SourceRecord};
use crate::vector::{Context, DAY_OF_YEAR, DAY_OF_YEAR_NORM, FeatureVector, MONTH, SEASON};

/// Day and night feature vectors built from one source record.
#[derive(Debug, Clone, PartialEq)]
pub struct FeaturePair {
    requested: CalendarDate,
    source_date: CalendarDate,
    gap_days: u64,
    day: FeatureVector,
    night: FeatureVector,
    clear_sky_feature: String,
    default_clear_sky: f64,
}

impl FeaturePair {
    /// Date the features were requested for.
    pub fn requested(&self) -> CalendarDate {
        self.requested
    }

    /// Date of the source record the vectors came from.
    pub fn source_date(&self) -> CalendarDate {
        self.source_date
    }

    /// Distance in days between the requested and source dates.
    pub fn gap_days(&self) -> u64 {
        self.gap_days
    }

    /// Day-context vector.
    pub fn day(&self) -> &FeatureVector {
        &self.day
    }

    /// Night-context vector.
    pub fn night(&self) -> &FeatureVector {
        &self.night
    }

    /// Vector for `context`.
    pub fn get(&self, context: Context) -> &FeatureVector {
        match context {
            Context::Day => &self.day,
            Context::Night => &self.night,
        }
    }

    /// Cloud fraction in [0, 1] for `context`, derived as one minus the
    /// clear-sky coverage. A missing coverage field falls back to the
    /// configured default coverage.
    pub fn cloud_fraction(&self, context: Context) -> f64 {
        let clear = self
            .get(context)
            .get(&self.clear_sky_feature)
            .unwrap_or(self.default_clear_sky);
        (1.0 - clear).clamp(0.0, 1.0)
    }
}

/// Builds feature vectors for requested dates from a [`SourceDataset`].
///
/// # Example
///
/// ```
/// use nimbus_calendar::CalendarDate;
/// use nimbus_features::{Context, FeatureBuilder, FeatureConfig, SourceDataset, SourceRecord};
///
/// let date = CalendarDate::new(2024, 7, 1).unwrap();
/// let record = SourceRecord::new(
///     date,
///     [("lst_day".to_string(), 31.0), ("lst_night".to_string(), 18.0)],
/// );
/// let dataset = SourceDataset::new(vec![record]).unwrap();
/// let builder = FeatureBuilder::new(dataset, FeatureConfig::new()).unwrap();
///
/// let pair = builder.build(CalendarDate::new(2024, 7, 3).unwrap()).unwrap();
/// assert_eq!(pair.gap_days(), 2);
/// assert_eq!(pair.get(Context::Day).get("lst"), Some(31.0));
/// assert_eq!(pair.get(Context::Night).get("lst"), Some(18.0));
/// ```
#[derive(Debug, Clone)]
pub struct FeatureBuilder {
    dataset: SourceDataset,
    config: FeatureConfig,
}

impl FeatureBuilder {
    /// Creates a builder after validating `config`.
    pub fn new(dataset: SourceDataset, config: FeatureConfig) -> Result<Self, FeatureError> {
        config.validate()?;
        Ok(Self { dataset, config })
    }

    /// The underlying dataset.
    pub fn dataset(&self) -> &SourceDataset {
        &self.dataset
    }

    /// The active configuration.
    pub fn config(&self) -> &FeatureConfig {
        &self.config
    }

    /// Finds the source record closest to `date`.
    ///
    /// Ties between an earlier and a later record go to the earlier one. A
    /// gap equal to `max_gap_days` is accepted.
    ///
    /// # Errors
    ///
    /// Returns [`FeatureError::NoCoverage`] if the closest record is more
    /// than `max_gap_days` away.
    pub fn nearest(&self, date: CalendarDate) -> Result<(&SourceRecord, u64), FeatureError> {
        let (record, gap) = self.dataset.nearest(date);
        let max_gap = self.config.max_gap_days();
        if gap > u64::from(max_gap) {
            return Err(FeatureError::NoCoverage {
                date,
                nearest_date: record.date(),
                nearest_gap_days: gap,
                max_gap_days: max_gap,
            });
        }
        Ok((record, gap))
    }

    /// Builds day and night vectors for `date` from a single lookup.
    #[tracing::instrument(skip(self), fields(date = %date))]
    pub fn build(&self, date: CalendarDate) -> Result<FeaturePair, FeatureError> {
        let (record, gap_days) = self.nearest(date)?;
        debug!(source = %record.date(), gap_days, "matched source record");

        let day = self.vector_for(record, date, Context::Day);
        let night = self.vector_for(record, date, Context::Night);

        Ok(FeaturePair {
            requested: date,
            source_date: record.date(),
            gap_days,
            day,
            night,
            clear_sky_feature: self.config.clear_sky_feature().to_string(),
            default_clear_sky: self.config.default_clear_sky(),
        })
    }

    fn vector_for(
        &self,
        record: &SourceRecord,
        date: CalendarDate,
        context: Context,
    ) -> FeatureVector {
        let mut v: FeatureVector = record
            .fields()
            .iter()
            .map(|(k, &val)| (k.as_str(), val))
            .collect();

        for field in self.config.contextual() {
            let source = match context {
                Context::Day => field.day(),
                Context::Night => field.night(),
            };
            if let Some(val) = record.get(source) {
                v.insert(field.name(), val);
            }
        }

        v.insert(DAY_OF_YEAR, f64::from(date.day_of_year()));
        v.insert(DAY_OF_YEAR_NORM, date.day_of_year_norm());
        v.insert(MONTH, f64::from(date.month()));
        v.insert(SEASON, f64::from(date.season().index()));
        v
    }
}
