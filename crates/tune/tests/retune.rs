mod common;

use approx::assert_relative_eq;
use common::{DATES, assembler, assembler_with, d, day_lst};
use nimbus_bias::CorrectionConfig;
use nimbus_calendar::TimeBucket;
use nimbus_regress::Variable;
use nimbus_tune::{TuneError, TunerConfig, ValidationSample, WeightTuner, retune};

/// Afternoon temperature observations offset from the forecast by `f`.
fn afternoon_samples(f: impl Fn(usize, f64) -> f64) -> Vec<ValidationSample> {
    DATES
        .iter()
        .enumerate()
        .map(|(i, date)| ValidationSample::new(d(date), 14, Variable::Temperature, f(i, day_lst(i))))
        .collect()
}

#[test]
fn uniform_error_becomes_additive_offset() {
    let a = assembler();
    let samples = afternoon_samples(|_, x| x + 5.0);
    let tuner = WeightTuner::new(TunerConfig::new().with_iterations(1)).unwrap();
    let result = tuner.tune(&a, &samples).unwrap();

    let offset = result.table().get(Variable::Temperature, TimeBucket::Afternoon);
    assert_relative_eq!(offset.additive, 5.0, epsilon = 1e-9);
    assert_eq!(offset.multiplicative, 1.0);

    let reports = result.iterations();
    assert_eq!(reports.len(), 2);
    assert_relative_eq!(reports[0].overall_mae(), 5.0, epsilon = 1e-9);
    // Temperature carries weight 2 by default.
    assert_relative_eq!(reports[0].total_error(), 10.0, epsilon = 1e-9);
    assert!(reports[1].total_error() < 1e-9);
    assert_eq!(reports[1].samples_used(), 4);
    assert!(reports[1].mae(Variable::Humidity).is_none());

    // Other groups are not touched.
    let morning = result.table().get(Variable::Temperature, TimeBucket::Morning);
    assert_eq!(morning.additive, 0.0);
}

#[test]
fn tuning_does_not_publish() {
    let a = assembler();
    let samples = afternoon_samples(|_, x| x + 5.0);
    WeightTuner::new(TunerConfig::new())
        .unwrap()
        .tune(&a, &samples)
        .unwrap();
    let r = a.forecast(d("2024-06-08"), 14).unwrap();
    assert_eq!(r.temperature(), 21.0);
}

#[test]
fn retune_publishes_tuned_table() {
    let a = assembler();
    let samples = afternoon_samples(|_, x| x + 5.0);
    retune(&a, &samples, &TunerConfig::new()).unwrap();
    let r = a.forecast(d("2024-06-08"), 14).unwrap();
    assert_relative_eq!(r.temperature(), 26.0, epsilon = 1e-9);
}

#[test]
fn failed_retune_keeps_current_table() {
    let a = assembler();
    let before = a.offsets();
    let err = retune(&a, &[], &TunerConfig::new()).unwrap_err();
    assert!(matches!(err, TuneError::EmptyValidationSet));
    assert_eq!(*a.offsets(), *before);
}

#[test]
fn uncovered_dates_are_skipped_and_counted() {
    let a = assembler();
    let mut samples = afternoon_samples(|_, x| x + 2.0);
    samples.push(ValidationSample::new(
        d("2024-07-20"),
        14,
        Variable::Temperature,
        30.0,
    ));
    samples.push(ValidationSample::new(
        d("2024-07-20"),
        14,
        Variable::Humidity,
        70.0,
    ));
    let result = WeightTuner::new(TunerConfig::new().with_iterations(1))
        .unwrap()
        .tune(&a, &samples)
        .unwrap();
    assert_eq!(result.skipped(), 2);
    assert_eq!(result.iterations()[0].samples_used(), 4);
    let offset = result.table().get(Variable::Temperature, TimeBucket::Afternoon);
    assert_relative_eq!(offset.additive, 2.0, epsilon = 1e-9);
}

#[test]
fn all_uncovered_is_an_error() {
    let a = assembler();
    let samples = vec![
        ValidationSample::new(d("2023-01-01"), 10, Variable::Temperature, 3.0),
        ValidationSample::new(d("2025-01-01"), 10, Variable::Temperature, 3.0),
    ];
    let err = WeightTuner::new(TunerConfig::new())
        .unwrap()
        .tune(&a, &samples)
        .unwrap_err();
    assert!(matches!(err, TuneError::NoUsableSamples { skipped: 2 }));
}

#[test]
fn non_finite_observation_is_rejected() {
    let a = assembler();
    let mut samples = afternoon_samples(|_, x| x);
    samples[2].actual = f64::NAN;
    let err = WeightTuner::new(TunerConfig::new())
        .unwrap()
        .tune(&a, &samples)
        .unwrap_err();
    assert!(matches!(err, TuneError::InvalidSample { index: 2, .. }));
}

#[test]
fn invalid_hour_propagates() {
    let a = assembler();
    let samples = vec![ValidationSample::new(
        d("2024-06-01"),
        24,
        Variable::Temperature,
        20.0,
    )];
    let err = WeightTuner::new(TunerConfig::new())
        .unwrap()
        .tune(&a, &samples)
        .unwrap_err();
    assert!(matches!(err, TuneError::Forecast(_)));
}

#[test]
fn stops_when_error_increases() {
    let a = assembler();
    // One outlier: shifting by the mean residual of 2.5 raises the MAE.
    let samples = afternoon_samples(|i, x| if i == 3 { x + 10.0 } else { x });

    let result = WeightTuner::new(TunerConfig::new().with_iterations(3))
        .unwrap()
        .tune(&a, &samples)
        .unwrap();
    assert_eq!(result.iterations().len(), 2);
    assert!(result.iterations()[1].total_error() > result.iterations()[0].total_error());
    let kept = result.table().get(Variable::Temperature, TimeBucket::Afternoon);
    assert_eq!(kept.additive, 0.0);
    assert_eq!(result.best().unwrap().iteration(), 0);

    let result = WeightTuner::new(
        TunerConfig::new()
            .with_iterations(1)
            .with_stop_when_worse(false),
    )
    .unwrap()
    .tune(&a, &samples)
    .unwrap();
    let moved = result.table().get(Variable::Temperature, TimeBucket::Afternoon);
    assert_relative_eq!(moved.additive, 2.5, epsilon = 1e-9);
}

#[test]
fn dead_band_leaves_small_errors_alone() {
    let a = assembler();
    let samples = afternoon_samples(|_, x| x + 0.4);
    let tight = TunerConfig::new()
        .with_iterations(1)
        .with_dead_band(Variable::Temperature, 0.1);
    let result = WeightTuner::new(tight).unwrap().tune(&a, &samples).unwrap();
    let offset = result.table().get(Variable::Temperature, TimeBucket::Afternoon);
    assert_relative_eq!(offset.additive, 0.4, epsilon = 1e-9);

    let result = WeightTuner::new(TunerConfig::new().with_dead_band(Variable::Temperature, 0.5))
        .unwrap()
        .tune(&a, &samples)
        .unwrap();
    let offset = result.table().get(Variable::Temperature, TimeBucket::Afternoon);
    assert_eq!(offset.additive, 0.0);
}

/// Afternoon temperature `lst + temp_shift` plus humidity observations.
fn mixed_samples(temp_shift: f64, humidity: [f64; 4]) -> Vec<ValidationSample> {
    let mut samples = afternoon_samples(|_, x| x + temp_shift);
    samples.extend(
        DATES
            .iter()
            .zip(humidity)
            .map(|(date, h)| ValidationSample::new(d(date), 14, Variable::Humidity, h)),
    );
    samples
}

#[test]
fn dead_bands_are_per_variable() {
    let a = assembler();
    // Humidity is 4 % off, inside its default 5 % band. Temperature is 2 °C off.
    let samples = mixed_samples(2.0, [64.0; 4]);
    let result = WeightTuner::new(TunerConfig::new().with_iterations(1))
        .unwrap()
        .tune(&a, &samples)
        .unwrap();
    let temperature = result.table().get(Variable::Temperature, TimeBucket::Afternoon);
    assert_relative_eq!(temperature.additive, 2.0, epsilon = 1e-9);
    let humidity = result.table().get(Variable::Humidity, TimeBucket::Afternoon);
    assert_eq!(humidity.additive, 0.0);
}

#[test]
fn weighted_total_decides_when_to_stop() {
    let a = assembler();
    // Before: temperature MAE 2, humidity MAE 10, pooled MAE 6.
    // After one pass: temperature MAE 0, humidity MAE 15, pooled MAE 7.5.
    let samples = mixed_samples(2.0, [60.0, 60.0, 60.0, 100.0]);

    let result = WeightTuner::new(TunerConfig::new().with_iterations(1))
        .unwrap()
        .tune(&a, &samples)
        .unwrap();
    let reports = result.iterations();
    assert_relative_eq!(reports[0].overall_mae(), 6.0, epsilon = 1e-9);
    assert_relative_eq!(reports[1].overall_mae(), 7.5, epsilon = 1e-9);
    assert_relative_eq!(reports[0].total_error(), 9.0, epsilon = 1e-9);
    assert_relative_eq!(reports[1].total_error(), 7.5, epsilon = 1e-9);
    assert_eq!(result.best().unwrap().iteration(), 1);
    let temperature = result.table().get(Variable::Temperature, TimeBucket::Afternoon);
    assert_relative_eq!(temperature.additive, 2.0, epsilon = 1e-9);
    let humidity = result.table().get(Variable::Humidity, TimeBucket::Afternoon);
    assert_relative_eq!(humidity.additive, 10.0, epsilon = 1e-9);

    // Equal weights make the same pass look worse: 12 before, 15 after.
    let equal = TunerConfig::new()
        .with_iterations(3)
        .with_weight(Variable::Temperature, 1.0)
        .with_weight(Variable::Humidity, 1.0);
    let result = WeightTuner::new(equal).unwrap().tune(&a, &samples).unwrap();
    assert_eq!(result.iterations().len(), 2);
    assert_relative_eq!(result.iterations()[1].total_error(), 15.0, epsilon = 1e-9);
    assert!(result.table().is_empty());
}

#[test]
fn precipitation_offset_fits_after_diurnal_profile() {
    let a = assembler_with(CorrectionConfig::new());
    // 1 mm scaled by the 1.2 late-afternoon factor, observed as 2.2 mm.
    let samples: Vec<_> = DATES
        .iter()
        .map(|date| ValidationSample::new(d(date), 16, Variable::Precipitation, 2.2))
        .collect();
    let result = WeightTuner::new(TunerConfig::new().with_iterations(1))
        .unwrap()
        .tune(&a, &samples)
        .unwrap();
    let offset = result.table().get(Variable::Precipitation, TimeBucket::Afternoon);
    assert_relative_eq!(offset.additive, 1.0, epsilon = 1e-9);
    assert!(result.iterations()[1].total_error() < 1e-9);
}

#[test]
fn small_groups_are_not_updated() {
    let a = assembler();
    let samples = afternoon_samples(|_, x| x + 4.0);
    let result = WeightTuner::new(TunerConfig::new().with_min_group_samples(5))
        .unwrap()
        .tune(&a, &samples)
        .unwrap();
    assert!(result.table().is_empty());
}

#[test]
fn fits_multiplicative_factor() {
    let a = assembler();
    let samples = afternoon_samples(|_, x| 1.5 * x);
    let result = WeightTuner::new(
        TunerConfig::new()
            .with_iterations(1)
            .with_adjust_multiplicative(true),
    )
    .unwrap()
    .tune(&a, &samples)
    .unwrap();
    let offset = result.table().get(Variable::Temperature, TimeBucket::Afternoon);
    assert_relative_eq!(offset.multiplicative, 1.5, epsilon = 1e-9);
    assert_relative_eq!(offset.additive, 0.0, epsilon = 1e-9);
    assert!(result.iterations()[1].total_error() < 1e-9);
}

#[test]
fn learning_rate_scales_step() {
    let a = assembler();
    let samples = afternoon_samples(|_, x| x + 4.0);
    let result = WeightTuner::new(
        TunerConfig::new()
            .with_iterations(1)
            .with_learning_rate(0.5),
    )
    .unwrap()
    .tune(&a, &samples)
    .unwrap();
    let offset = result.table().get(Variable::Temperature, TimeBucket::Afternoon);
    assert_relative_eq!(offset.additive, 2.0, epsilon = 1e-9);
}
