//! # nimbus-forecast
//!
//! Assembles calibrated forecasts from the pipeline stages:
//!
//! ```text
//! forecast(date, hour)
//!   ├─ validate hour
//!   ├─ snapshot bias table
//!   ├─ FeatureBuilder::build(date)           one lookup
//!   ├─ RegressorSet::predict_pair()          day + night, all variables
//!   ├─ TimeOfDayBlender::blend_at()
//!   ├─ BiasCorrector::correct()
//!   └─ feels-like, probability, labels
//! ```
//!
//! [`ForecastAssembler::forecast`] is all-or-nothing.
//! [`ForecastAssembler::forecast_range`] returns a lazy [`DailyForecasts`]
//! iterator that flags uncovered days instead of failing.
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | `assembler` | `ForecastAssembler` and `HourlyValues` |
//! | `daily` | `DailyForecasts` range iterator |
//! | `record` | `ForecastRecord` and `Coverage` |
//! | `config` | `ForecastConfig` builder |
//! | `error` | Error types |

pub mod assembler;
pub mod config;
pub mod daily;
pub mod error;
pub mod record;

pub use assembler::{ForecastAssembler, HourlyValues};
pub use config::ForecastConfig;
pub use daily::DailyForecasts;
pub use error::ForecastError;
pub use record::{Coverage, ForecastRecord};
