//! Statistical helper functions for the Nimbus forecast pipeline.
//!
//! All error metrics use the `actual - predicted` sign convention: a positive
//! signed error means the forecast ran low.

/// Arithmetic mean of a slice. Returns 0.0 if empty.
pub fn mean(data: &[f64]) -> f64 {
    if data.is_empty() {
        return 0.0;
    }
    let sum: f64 = data.iter().sum();
    sum / data.len() as f64
}

/// Mean absolute error between parallel `actual` and `predicted` slices.
///
/// Returns `None` if the slices are empty.
///
/// # Panics
///
/// Panics if the slices differ in length.
pub fn mean_absolute_error(actual: &[f64], predicted: &[f64]) -> Option<f64> {
    assert_eq!(
        actual.len(),
        predicted.len(),
        "mean_absolute_error: length mismatch"
    );
    if actual.is_empty() {
        return None;
    }
    let total: f64 = actual
        .iter()
        .zip(predicted)
        .map(|(a, p)| (a - p).abs())
        .sum();
    Some(total / actual.len() as f64)
}

/// Mean of `actual - predicted` over parallel slices.
///
/// Returns `None` if the slices are empty.
///
/// # Panics
///
/// Panics if the slices differ in length.
pub fn mean_signed_error(actual: &[f64], predicted: &[f64]) -> Option<f64> {
    assert_eq!(
        actual.len(),
        predicted.len(),
        "mean_signed_error: length mismatch"
    );
    if actual.is_empty() {
        return None;
    }
    let total: f64 = actual.iter().zip(predicted).map(|(a, p)| a - p).sum();
    Some(total / actual.len() as f64)
}

/// Ordinary least-squares slope of `y` on `x`.
///
/// Returns `None` with fewer than 2 points or when `x` is (numerically)
/// constant.
///
/// # Panics
///
/// Panics if the slices differ in length.
pub fn ols_slope(x: &[f64], y: &[f64]) -> Option<f64> {
    assert_eq!(x.len(), y.len(), "ols_slope: length mismatch");
    if x.len() < 2 {
        return None;
    }
    let mx = mean(x);
    let my = mean(y);
    let mut sxy = 0.0;
    let mut sxx = 0.0;
    for (&xi, &yi) in x.iter().zip(y) {
        sxy += (xi - mx) * (yi - my);
        sxx += (xi - mx) * (xi - mx);
    }
    if sxx <= 1e-12 {
        return None;
    }
    Some(sxy / sxx)
}

/// Largest finite value, or `None` if there is none.
pub fn finite_max(data: &[f64]) -> Option<f64> {
    data.iter()
        .copied()
        .filter(|v| v.is_finite())
        .fold(None, |acc, v| Some(acc.map_or(v, |m: f64| m.max(v))))
}
