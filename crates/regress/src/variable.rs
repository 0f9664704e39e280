//! Forecast variables and the physical units raw predictions carry.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A forecast variable with its own trained regressor pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Variable {
    Temperature,
    Precipitation,
    Humidity,
    CloudCover,
    WindSpeed,
}

impl Variable {
    /// All variables in output order.
    pub const ALL: [Variable; 5] = [
        Variable::Temperature,
        Variable::Precipitation,
        Variable::Humidity,
        Variable::CloudCover,
        Variable::WindSpeed,
    ];

    /// Lower-case identifier used in files and logs.
    pub fn name(self) -> &'static str {
        match self {
            Variable::Temperature => "temperature",
            Variable::Precipitation => "precipitation",
            Variable::Humidity => "humidity",
            Variable::CloudCover => "cloud_cover",
            Variable::WindSpeed => "wind_speed",
        }
    }
}

impl fmt::Display for Variable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Physical unit of a value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Unit {
    Kelvin,
    Celsius,
    Millimetres,
    /// Vapour pressure.
    Pascal,
    Percent,
    /// Dimensionless index the wind model is trained on.
    WindProxy,
    MetresPerSecond,
}

impl Unit {
    /// Short symbol.
    pub fn symbol(self) -> &'static str {
        match self {
            Unit::Kelvin => "K",
            Unit::Celsius => "°C",
            Unit::Millimetres => "mm",
            Unit::Pascal => "Pa",
            Unit::Percent => "%",
            Unit::WindProxy => "proxy",
            Unit::MetresPerSecond => "m/s",
        }
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}
