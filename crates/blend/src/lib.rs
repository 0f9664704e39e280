//! # nimbus-blend
//!
//! Combines the day-context and night-context predictions of one variable
//! into a single value for a requested hour.
//!
//! The hour selects a [`TimeBucket`](nimbus_calendar::TimeBucket); the
//! bucket selects a [`BlendWeights`] pair from the [`BlendSchedule`]. Both
//! inputs must describe the same variable in the same unit.
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | `schedule` | `BlendWeights` and the per-bucket `BlendSchedule` |
//! | `blender` | `TimeOfDayBlender` and `BlendedValue` |
//! | `error` | Error types |

pub mod blender;
pub mod error;
pub mod schedule;

pub use blender::{BlendedValue, TimeOfDayBlender};
pub use error::BlendError;
pub use schedule::{BlendSchedule, BlendWeights};
