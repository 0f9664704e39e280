//! Precipitation probability and human-readable labels.

/// Probability of rain (%) from an hourly precipitation amount in mm.
///
/// | mm | probability |
/// |----|-------------|
/// | < 0.1 | 0 |
/// | < 1.0 | min(30, 30·p) |
/// | < 2.5 | 30 + min(40, (p − 1)·26.67) |
/// | otherwise | 70 + min(30, (p − 2.5)·6) |
pub fn precipitation_probability(mm: f64) -> f64 {
    let p = if mm < 0.1 {
        0.0
    } else if mm < 1.0 {
        (30.0 * mm).min(30.0)
    } else if mm < 2.5 {
        30.0 + ((mm - 1.0) * 26.67).min(40.0)
    } else {
        70.0 + ((mm - 2.5) * 6.0).min(30.0)
    };
    p.clamp(0.0, 100.0)
}

/// Thermal sensation word for an apparent temperature in °C.
pub fn feel_label(feels_like: f64) -> &'static str {
    match feels_like {
        t if t < 0.0 => "Freezing",
        t if t < 10.0 => "Cold",
        t if t < 20.0 => "Cool",
        t if t < 25.0 => "Comfortable",
        t if t < 30.0 => "Warm",
        _ => "Hot",
    }
}

/// `"<Feel> <period>"`, e.g. `"Warm afternoon"`.
pub fn description(feels_like: f64, period: &str) -> String {
    format!("{} {period}", feel_label(feels_like))
}

/// Sky condition with an optional rain clause.
pub fn summary(cloud_cover: f64, precipitation_probability: f64) -> String {
    let sky = if cloud_cover > 70.0 {
        "Cloudy"
    } else if cloud_cover > 40.0 {
        "Partly cloudy"
    } else {
        "Clear"
    };
    let rain = if precipitation_probability > 50.0 {
        " with rain likely"
    } else if precipitation_probability > 20.0 {
        " with possible light rain"
    } else {
        ""
    };
    format!("{sky}{rain}")
}
