//! # nimbus-io
//!
//! JSON persistence for the forecast pipeline: source datasets, trained
//! model artefacts, bias offset tables, validation sets and forecast output.
//! Bridges files into the in-memory types of the domain crates.

mod bias;
mod dataset;
mod error;
mod forecast;
mod json;
mod models;
mod validation;

pub use bias::{read_bias_table, write_bias_table};
pub use dataset::read_dataset;
pub use error::IoError;
pub use forecast::write_forecasts;
pub use models::{ModelPaths, read_model, read_regressors};
pub use validation::read_validation_set;
