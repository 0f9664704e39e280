#![allow(dead_code)]

use std::sync::Arc;

use nimbus_bias::{BiasCorrector, BiasTable, CorrectionConfig};
use nimbus_blend::TimeOfDayBlender;
use nimbus_calendar::CalendarDate;
use nimbus_features::{FeatureBuilder, FeatureConfig, FeatureSchema, SourceDataset, SourceRecord};
use nimbus_forecast::{ForecastAssembler, ForecastConfig};
use nimbus_regress::{LinearRegressor, RegressorSet, Unit, Variable, VariableRegressor};

/// Returns a fixed value whatever the input.
pub struct Constant {
    variable: Variable,
    unit: Unit,
    value: f64,
    schema: FeatureSchema,
}

impl Constant {
    pub fn new(variable: Variable, unit: Unit, value: f64) -> Arc<dyn VariableRegressor> {
        Arc::new(Self {
            variable,
            unit,
            value,
            schema: FeatureSchema::new(["month"]).unwrap(),
        })
    }
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

pub fn d(s: &str) -> CalendarDate {
    s.parse().unwrap()
}

/// Weekly records through June 2024 with day/night surface temperature.
pub fn dataset() -> SourceDataset {
    let records = ["2024-06-01", "2024-06-08", "2024-06-15", "2024-06-22"]
        .iter()
        .enumerate()
        .map(|(i, date)| {
            let lst = 20.0 + i as f64;
            SourceRecord::new(
                d(date),
                [
                    ("lst_day".to_string(), lst),
                    ("lst_night".to_string(), lst - 8.0),
                    ("clear_day_cov".to_string(), 0.6),
                    ("clear_night_cov".to_string(), 0.2),
                ],
            )
        })
        .collect();
    SourceDataset::new(records).unwrap()
}

/// Identity temperature on `lst` in Celsius plus constant models for the rest.
pub fn regressors(precip: f64, humidity: f64, cloud: f64, wind: f64) -> RegressorSet {
    let temperature: Arc<dyn VariableRegressor> =
        Arc::new(LinearRegressor::identity(Variable::Temperature, Unit::Celsius, "lst").unwrap());
    RegressorSet::new()
        .with_single(Variable::Temperature, temperature)
        .unwrap()
        .with_single(
            Variable::Precipitation,
            Constant::new(Variable::Precipitation, Unit::Millimetres, precip),
        )
        .unwrap()
        .with_single(
            Variable::Humidity,
            Constant::new(Variable::Humidity, Unit::Percent, humidity),
        )
        .unwrap()
        .with_single(
            Variable::CloudCover,
            Constant::new(Variable::CloudCover, Unit::Percent, cloud),
        )
        .unwrap()
        .with_single(
            Variable::WindSpeed,
            Constant::new(Variable::WindSpeed, Unit::MetresPerSecond, wind),
        )
        .unwrap()
}

pub fn assembler_with(
    regressors: RegressorSet,
    correction: CorrectionConfig,
    max_gap_days: u32,
) -> ForecastAssembler {
    assembler_from(
        dataset(),
        regressors,
        correction,
        ForecastConfig::new(),
        max_gap_days,
    )
}

pub fn assembler_from(
    dataset: SourceDataset,
    regressors: RegressorSet,
    correction: CorrectionConfig,
    config: ForecastConfig,
    max_gap_days: u32,
) -> ForecastAssembler {
    let features = FeatureBuilder::new(
        dataset,
        FeatureConfig::new().with_max_gap_days(max_gap_days),
    )
    .unwrap();
    ForecastAssembler::new(
        features,
        regressors,
        TimeOfDayBlender::default(),
        BiasCorrector::new(correction).unwrap(),
        config,
        BiasTable::identity(),
    )
    .unwrap()
}

pub fn assembler() -> ForecastAssembler {
    assembler_with(regressors(0.5, 55.0, 30.0, 3.0), CorrectionConfig::new(), 7)
}
