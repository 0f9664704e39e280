#![allow(dead_code)]

use std::sync::Arc;

use nimbus_bias::{BiasCorrector, BiasTable, CorrectionConfig};
use nimbus_blend::TimeOfDayBlender;
use nimbus_calendar::CalendarDate;
use nimbus_features::{FeatureBuilder, FeatureConfig, FeatureSchema, SourceDataset, SourceRecord};
use nimbus_forecast::{ForecastAssembler, ForecastConfig};
use nimbus_regress::{LinearRegressor, RegressorSet, Unit, Variable, VariableRegressor};

struct Constant {
    variable: Variable,
    unit: Unit,
    value: f64,
    schema: FeatureSchema,
}

impl VariableRegressor for Constant {
    fn variable(&self) -> Variable {
        self.variable
    }
    fn unit(&self) -> Unit {
        self.unit
    }
    fn schema(&self) -> &FeatureSchema {
        &self.schema
    }
    fn evaluate(&self, _inputs: &[f64]) -> f64 {
        self.value
    }
}

fn constant(variable: Variable, unit: Unit, value: f64) -> Arc<dyn VariableRegressor> {
    Arc::new(Constant {
        variable,
        unit,
        value,
        schema: FeatureSchema::new(["month"]).unwrap(),
    })
}

pub fn d(s: &str) -> CalendarDate {
    s.parse().unwrap()
}

/// Dates with source records; day surface temperature is 20, 21, 22, 23.
pub const DATES: [&str; 4] = ["2024-06-01", "2024-06-08", "2024-06-15", "2024-06-22"];

pub fn day_lst(i: usize) -> f64 {
    20.0 + i as f64
}

pub fn assembler() -> ForecastAssembler {
    assembler_with(CorrectionConfig::new().with_precipitation_diurnal(false))
}

/// Constant humidity 60 %, precipitation 1 mm, cloud 40 % and wind 2 m/s;
/// temperature follows the source surface temperature.
pub fn assembler_with(correction: CorrectionConfig) -> ForecastAssembler {
    let records = DATES
        .iter()
        .enumerate()
        .map(|(i, date)| {
            SourceRecord::new(
                d(date),
                [
                    ("lst_day".to_string(), day_lst(i)),
                    ("lst_night".to_string(), day_lst(i) - 8.0),
                    ("clear_day_cov".to_string(), 0.5),
                    ("clear_night_cov".to_string(), 0.5),
                ],
            )
        })
        .collect();
    let features = FeatureBuilder::new(
        SourceDataset::new(records).unwrap(),
        FeatureConfig::new().with_max_gap_days(3),
    )
    .unwrap();

    let temperature: Arc<dyn VariableRegressor> =
        Arc::new(LinearRegressor::identity(Variable::Temperature, Unit::Celsius, "lst").unwrap());
    let regressors = RegressorSet::new()
        .with_single(Variable::Temperature, temperature)
        .unwrap()
        .with_single(
            Variable::Precipitation,
            constant(Variable::Precipitation, Unit::Millimetres, 1.0),
        )
        .unwrap()
        .with_single(
            Variable::Humidity,
            constant(Variable::Humidity, Unit::Percent, 60.0),
        )
        .unwrap()
        .with_single(
            Variable::CloudCover,
            constant(Variable::CloudCover, Unit::Percent, 40.0),
        )
        .unwrap()
        .with_single(
            Variable::WindSpeed,
            constant(Variable::WindSpeed, Unit::MetresPerSecond, 2.0),
        )
        .unwrap();

    ForecastAssembler::new(
        features,
        regressors,
        TimeOfDayBlender::default(),
        BiasCorrector::new(correction).unwrap(),
        ForecastConfig::new(),
        BiasTable::identity(),
    )
    .unwrap()
}
