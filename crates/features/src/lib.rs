//! # nimbus-features
//!
//! Turns a requested date into the day and night feature vectors the
//! per-variable regressors consume.
//!
//! Every request performs exactly one nearest-date lookup in the
//! [`SourceDataset`]; both vectors come from that single record, so values
//! are never mixed across source dates.
//!
//! ```text
//! FeatureBuilder::build(date)
//!   ├─ nearest()          binary search, earlier record wins ties
//!   ├─ raw record fields
//!   ├─ contextual fields  lst -> lst_day | lst_night
//!   └─ calendar features  day_of_year, day_of_year_norm, month, season
//! ```
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | `record` | `SourceRecord` and the sorted `SourceDataset` |
//! | `vector` | `FeatureVector`, `FeatureSchema`, `Context` |
//! | `builder` | `FeatureBuilder` and `FeaturePair` |
//! | `config` | `FeatureConfig` builder |
//! | `error` | Error types |

pub mod builder;
pub mod config;
pub mod error;
pub mod record;
pub mod vector;

pub use builder::{FeatureBuilder, FeaturePair};
pub use config::{ContextualField, FeatureConfig};
pub use error::FeatureError;
pub use record::{SourceDataset, SourceRecord};
pub use vector::{CALENDAR_FEATURES, Context, FeatureSchema, FeatureVector};
