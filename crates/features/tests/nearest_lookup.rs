use nimbus_calendar::CalendarDate;
use nimbus_features::{
    Context, ContextualField, FeatureBuilder, FeatureConfig, FeatureError, SourceDataset,
    SourceRecord,
};

fn d(s: &str) -> CalendarDate {
    s.parse().unwrap()
}

fn record(date: &str, lst_day: f64) -> SourceRecord {
    SourceRecord::new(
        d(date),
        [
            ("lst_day".to_string(), lst_day),
            ("lst_night".to_string(), lst_day - 10.0),
        ],
    )
}

fn weekly_builder(max_gap: u32) -> FeatureBuilder {
    let records = vec![
        record("2024-05-15", 25.0),
        record("2024-05-01", 20.0),
        record("2024-05-08", 22.0),
    ];
    let dataset = SourceDataset::new(records).unwrap();
    FeatureBuilder::new(dataset, FeatureConfig::new().with_max_gap_days(max_gap)).unwrap()
}

#[test]
fn equidistant_records_resolve_to_earlier() {
    let records = vec![record("2024-05-15", 25.0), record("2024-05-21", 27.0)];
    let b = FeatureBuilder::new(SourceDataset::new(records).unwrap(), FeatureConfig::new()).unwrap();
    let pair = b.build(d("2024-05-18")).unwrap();
    assert_eq!(pair.source_date(), d("2024-05-15"));
    assert_eq!(pair.gap_days(), 3);
}

#[test]
fn closer_record_wins_on_either_side() {
    let b = weekly_builder(60);
    let (rec, gap) = b.nearest(d("2024-05-11")).unwrap();
    assert_eq!(rec.date(), d("2024-05-08"));
    assert_eq!(gap, 3);
    let (rec, gap) = b.nearest(d("2024-05-12")).unwrap();
    assert_eq!(rec.date(), d("2024-05-15"));
    assert_eq!(gap, 3);
}

#[test]
fn coverage_boundary_is_inclusive() {
    let b = weekly_builder(10);
    assert!(b.build(d("2024-05-25")).is_ok());
    let err = b.build(d("2024-05-26")).unwrap_err();
    match err {
        FeatureError::NoCoverage {
            nearest_gap_days,
            nearest_date,
            ..
        } => {
            assert_eq!(nearest_gap_days, 11);
            assert_eq!(nearest_date, d("2024-05-15"));
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn before_first_record_measured_to_first() {
    let b = weekly_builder(3);
    assert!(b.build(d("2024-04-28")).is_ok());
    assert!(matches!(
        b.build(d("2024-04-27")),
        Err(FeatureError::NoCoverage {
            nearest_gap_days: 4,
            ..
        })
    ));
}

#[test]
fn both_vectors_share_one_record() {
    let b = weekly_builder(60);
    let pair = b.build(d("2024-05-09")).unwrap();
    assert_eq!(pair.day().get("lst"), Some(22.0));
    assert_eq!(pair.night().get("lst"), Some(12.0));
    assert_eq!(pair.get(Context::Day).get("month"), Some(5.0));
}

#[test]
fn custom_contextual_binding() {
    let rec = SourceRecord::new(
        d("2024-01-01"),
        [("evi_am".to_string(), 0.3), ("evi_pm".to_string(), 0.5)],
    );
    let ds = SourceDataset::new(vec![rec]).unwrap();
    let cfg = FeatureConfig::new().with_contextual(ContextualField::new("evi", "evi_am", "evi_pm"));
    let b = FeatureBuilder::new(ds, cfg).unwrap();
    let pair = b.build(d("2024-01-01")).unwrap();
    assert_eq!(pair.day().get("evi"), Some(0.3));
    assert_eq!(pair.night().get("evi"), Some(0.5));
    // Default lst binding has no sources here.
    assert_eq!(pair.day().get("lst"), None);
}
