//! Historical source records and the date-sorted dataset that holds them.

use std::collections::BTreeMap;

use nimbus_calendar::CalendarDate;

use crate::error::FeatureError;

/// One historical day of satellite-derived proxy observations.
///
/// Field values that are not finite are dropped at construction, so every
/// stored field is a usable number.
#[derive(Debug, Clone, PartialEq)]
pub struct SourceRecord {
    date: CalendarDate,
    fields: BTreeMap<String, f64>,
}

impl SourceRecord {
    /// Creates a record, discarding NaN and infinite field values.
    pub fn new(date: CalendarDate, fields: impl IntoIterator<Item = (String, f64)>) -> Self {
        let fields = fields
            .into_iter()
            .filter(|(_, v)| v.is_finite())
            .collect();
        Self { date, fields }
    }

    /// Returns the observation date.
    pub fn date(&self) -> CalendarDate {
        self.date
    }

    /// Returns a field value by name.
    pub fn get(&self, name: &str) -> Option<f64> {
        self.fields.get(name).copied()
    }

    /// Returns all fields in name order.
    pub fn fields(&self) -> &BTreeMap<String, f64> {
        &self.fields
    }
}

/// An immutable, date-sorted collection of [`SourceRecord`]s.
///
/// Holds at most one record per date and is never empty.
#[derive(Debug, Clone)]
pub struct SourceDataset {
    records: Vec<SourceRecord>,
}

impl SourceDataset {
    /// Builds a dataset from records in any order.
    ///
    /// # Errors
    ///
    /// Returns [`FeatureError::EmptyDataset`] if `records` is empty and
    /// [`FeatureError::DuplicateDate`] if two records share a date.
    pub fn new(mut records: Vec<SourceRecord>) -> Result<Self, FeatureError> {
        if records.is_empty() {
            return Err(FeatureError::EmptyDataset);
        }
        records.sort_by_key(|r| r.date);
        if let Some(w) = records.windows(2).find(|w| w[0].date == w[1].date) {
            return Err(FeatureError::DuplicateDate { date: w[0].date });
        }
        Ok(Self { records })
    }

    /// Number of records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Always `false`; kept for API symmetry with `len`.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Records in ascending date order.
    pub fn records(&self) -> &[SourceRecord] {
        &self.records
    }

    /// Earliest and latest record dates.
    pub fn span(&self) -> (CalendarDate, CalendarDate) {
        // Non-empty by construction.
        (self.records[0].date, self.records[self.records.len() - 1].date)
    }

    /// Returns the record closest to `date` and its distance in days.
    ///
    /// When an earlier and a later record are equally far away the earlier
    /// one is returned.
    pub fn nearest(&self, date: CalendarDate) -> (&SourceRecord, u64) {
        let idx = self.records.partition_point(|r| r.date < date);
        let later = self.records.get(idx);
        let earlier = idx.checked_sub(1).map(|i| &self.records[i]);

        match (earlier, later) {
            (Some(e), Some(l)) => {
                let ge = e.date.abs_gap(date);
                let gl = l.date.abs_gap(date);
                if ge <= gl { (e, ge) } else { (l, gl) }
            }
            (Some(e), None) => (e, e.date.abs_gap(date)),
            (None, Some(l)) => (l, l.date.abs_gap(date)),
            (None, None) => unreachable!("dataset is never empty"),
        }
    }
}
