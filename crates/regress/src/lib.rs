//! # nimbus-regress
//!
//! Trained per-variable regressors and the day/night sets the forecast
//! pipeline evaluates.
//!
//! Models are opaque behind [`VariableRegressor`]; the crate ships the two
//! model families the training pipeline exports:
//!
//! | Model | Evaluation |
//! |-------|------------|
//! | [`LinearRegressor`] | `intercept + Σ coef·(x − mean)/scale` |
//! | [`ForestRegressor`] | mean leaf value over all trees, `x <= threshold` goes left |
//!
//! Both load from a tagged JSON [`ModelFile`] and are validated on
//! construction, so evaluation never indexes out of bounds.
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | `variable` | `Variable` and `Unit` |
//! | `regressor` | `VariableRegressor` trait and `RawPrediction` |
//! | `linear` | Standard-scaled linear model |
//! | `forest` | Flat-array regression forest |
//! | `model` | JSON model artefacts |
//! | `set` | `RegressorSet` (day/night pair per variable) |
//! | `error` | Error types |

pub mod error;
pub mod forest;
pub mod linear;
pub mod model;
pub mod regressor;
pub mod set;
pub mod variable;

pub use error::RegressError;
pub use forest::{ForestRegressor, Node, Tree};
pub use linear::{LinearRegressor, StandardScaler};
pub use model::ModelFile;
pub use regressor::{RawPrediction, VariableRegressor};
pub use set::RegressorSet;
pub use variable::{Unit, Variable};
