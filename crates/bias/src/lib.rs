//! # nimbus-bias
//!
//! Calibration of blended predictions: unit conversion, the precipitation
//! diurnal profile, per (variable, bucket) bias offsets, physical clamps, feels-like temperature and text labels.
//!
//! ```text
//! BlendedValue
//!   ├─ UnitConversions      K → °C, Pa → %RH, wind proxy → m/s
//!   ├─ diurnal factor       precipitation only
//!   ├─ BiasOffset           x · multiplicative + additive
//!   └─ clamp_to_range()
//! ```
//!
//! Offsets live in an immutable [`BiasTable`]. [`SharedBiasTable`] holds
//! the current table and swaps it as a whole, so each request works from
//! one snapshot.
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | `table` | `BiasOffset`, `BiasTable`, `SharedBiasTable` |
//! | `units` | Output units and `UnitConversions` |
//! | `feels_like` | Per-bucket apparent temperature rules |
//! | `labels` | Precipitation probability, description, summary |
//! | `corrector` | `BiasCorrector` and `CorrectedValue` |
//! | `config` | `CorrectionConfig` and the diurnal profile |
//! | `error` | Error types |

pub mod config;
pub mod corrector;
pub mod error;
pub mod feels_like;
pub mod labels;
pub mod table;
pub mod units;

pub use config::{CorrectionConfig, precipitation_diurnal_factor};
pub use corrector::{BiasCorrector, CorrectedValue, clamp_to_range};
pub use error::BiasError;
pub use feels_like::{CloudFractions, FeelsLikeRule, FeelsLikeTable};
pub use labels::{description, feel_label, precipitation_probability, summary};
pub use table::{BiasOffset, BiasTable, SharedBiasTable};
pub use units::{UnitConversions, output_unit};
