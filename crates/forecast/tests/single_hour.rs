mod common;

use common::{assembler, assembler_from, assembler_with, d, regressors};
use nimbus_bias::{BiasOffset, BiasTable, CorrectionConfig};
use nimbus_calendar::TimeBucket;
use nimbus_features::{FeatureError, SourceDataset, SourceRecord};
use nimbus_forecast::{Coverage, ForecastConfig, ForecastError};
use nimbus_regress::Variable;

#[test]
fn repeated_requests_are_bit_identical() {
    let a = assembler();
    let first = a.forecast(d("2024-06-10"), 9).unwrap();
    for _ in 0..5 {
        let again = a.forecast(d("2024-06-10"), 9).unwrap();
        for v in Variable::ALL {
            assert_eq!(first.value(v).to_bits(), again.value(v).to_bits());
        }
        assert_eq!(first.feels_like().to_bits(), again.feels_like().to_bits());
        assert_eq!(first.summary(), again.summary());
    }
}

#[test]
fn identity_temperature_at_14_equals_day_lst() {
    let a = assembler();
    let r = a.forecast(d("2024-06-08"), 14).unwrap();
    assert_eq!(r.temperature(), 21.0);
    assert_eq!(r.source_date(), Some(d("2024-06-08")));
    assert_eq!(r.time_of_day(), Some(TimeBucket::Afternoon));
    assert_eq!(r.coverage(), Coverage::Complete);
}

#[test]
fn eleven_and_twelve_use_different_weights() {
    let a = assembler();
    let at11 = a.forecast(d("2024-06-01"), 11).unwrap();
    let at12 = a.forecast(d("2024-06-01"), 12).unwrap();
    assert!((at11.temperature() - (0.7 * 20.0 + 0.3 * 12.0)).abs() < 1e-9);
    assert_eq!(at12.temperature(), 20.0);
}

#[test]
fn boundary_hours_enter_their_bucket() {
    let a = assembler();
    let expected = [
        (6, TimeBucket::Morning),
        (12, TimeBucket::Afternoon),
        (18, TimeBucket::Evening),
        (21, TimeBucket::Night),
    ];
    for (hour, bucket) in expected {
        let r = a.forecast(d("2024-06-01"), hour).unwrap();
        assert_eq!(r.time_of_day(), Some(bucket), "hour {hour}");
    }
}

#[test]
fn out_of_range_stub_values_are_clamped() {
    let a = assembler_with(
        regressors(-2.0, -10.0, 150.0, -1.0),
        CorrectionConfig::new(),
        7,
    );
    let r = a.forecast(d("2024-06-01"), 10).unwrap();
    assert_eq!(r.humidity(), 0.0);
    assert_eq!(r.cloud_cover(), 100.0);
    assert_eq!(r.precipitation(), 0.0);
    assert_eq!(r.wind_speed(), 0.0);
    assert_eq!(r.precipitation_probability(), 0.0);
}

#[test]
fn feels_like_uses_day_cloud_in_afternoon() {
    let a = assembler();
    let r = a.forecast(d("2024-06-08"), 14).unwrap();
    // clear_day_cov 0.6 -> cloud fraction 0.4
    assert!((r.feels_like() - (21.0 + 2.5 - 0.5 * 0.4)).abs() < 1e-9);
    assert_eq!(r.description(), "Comfortable afternoon");
}

#[test]
fn night_feels_like_uses_night_cloud() {
    let a = assembler();
    let r = a.forecast(d("2024-06-08"), 23).unwrap();
    // night lst 13, clear_night_cov 0.2 -> cloud fraction 0.8
    assert!((r.feels_like() - (13.0 - 1.5 + 0.8)).abs() < 1e-9);
}

#[test]
fn missing_clear_sky_falls_back_to_half_coverage() {
    let records = vec![SourceRecord::new(
        d("2024-06-01"),
        [
            ("lst_day".to_string(), 20.0),
            ("lst_night".to_string(), 12.0),
        ],
    )];
    let a = assembler_from(
        SourceDataset::new(records).unwrap(),
        regressors(0.5, 55.0, 30.0, 3.0),
        CorrectionConfig::new(),
        ForecastConfig::new(),
        7,
    );
    let r = a.forecast(d("2024-06-01"), 14).unwrap();
    assert_eq!(r.temperature(), 20.0);
    assert!((r.feels_like() - (20.0 + 2.5 - 0.5 * 0.5)).abs() < 1e-9);

    let night = a.forecast(d("2024-06-01"), 23).unwrap();
    assert!((night.feels_like() - (12.0 - 1.5 + 1.0 * 0.5)).abs() < 1e-9);
}

#[test]
fn coverage_gap_boundary() {
    let a = assembler();
    assert!(a.forecast(d("2024-06-29"), 12).is_ok());
    let err = a.forecast(d("2024-06-30"), 12).unwrap_err();
    assert!(matches!(
        err,
        ForecastError::Feature(FeatureError::NoCoverage {
            nearest_gap_days: 8,
            ..
        })
    ));
}

#[test]
fn invalid_hour_rejected() {
    let a = assembler();
    assert_eq!(
        a.forecast(d("2024-06-01"), 24).unwrap_err(),
        ForecastError::InvalidHour { hour: 24 }
    );
}

#[test]
fn published_offsets_apply_to_later_requests_only() {
    let a = assembler();
    let before = a.offsets();
    let old = a.forecast(d("2024-06-08"), 14).unwrap();

    a.publish_offsets(
        BiasTable::from_offsets([BiasOffset {
            variable: Variable::Temperature,
            bucket: TimeBucket::Afternoon,
            additive: 2.0,
            multiplicative: 1.0,
        }])
        .unwrap(),
    );

    assert!(before.is_empty());
    let new = a.forecast(d("2024-06-08"), 14).unwrap();
    assert_eq!(old.temperature(), 21.0);
    assert_eq!(new.temperature(), 23.0);
    let via_old = a
        .evaluate_with(d("2024-06-08"), 14, &before)
        .unwrap();
    assert_eq!(via_old.get(Variable::Temperature).value(), 21.0);
}

#[test]
fn record_serialises_to_json() {
    let a = assembler();
    let r = a.forecast(d("2024-06-08"), 14).unwrap();
    let json = serde_json::to_value(&r).unwrap();
    assert_eq!(json["date"], "2024-06-08");
    assert_eq!(json["hour"], 14);
    assert_eq!(json["time_of_day"], "afternoon");
    assert_eq!(json["coverage"]["status"], "complete");
}
