//! # nimbus-calendar
//!
//! Date and time-of-day arithmetic shared by every stage of the forecast
//! pipeline.
//!
//! ## Architecture
//!
//! ```mermaid
//! graph LR
//!     A["CalendarDate"] -->|".season()"| B["Season"]
//!     A -->|".days_until()"| C["signed day gap"]
//!     A -->|"DateRange::new()"| D["DateRange (lazy)"]
//!     E["Hour (0..=23)"] -->|".bucket()"| F["TimeBucket"]
//! ```
//!
//! ## Quick Start
//!
//! ```
//! use nimbus_calendar::{CalendarDate, DateRange, Hour, Season, TimeBucket};
//!
//! let date: CalendarDate = "2024-07-20".parse().unwrap();
//! assert_eq!(date.season(), Season::Summer);
//!
//! let hour = Hour::new(14).unwrap();
//! assert_eq!(hour.bucket(), TimeBucket::Afternoon);
//!
//! let end: CalendarDate = "2024-07-26".parse().unwrap();
//! let week = DateRange::new(date, end).unwrap();
//! assert_eq!(week.len(), 7);
//! ```
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | `date` | Gregorian calendar date with day-of-year helpers |
//! | `hour` | Validated hour of day and time-of-day buckets |
//! | `season` | Meteorological season of a month |
//! | `sequence` | Lazy inclusive date ranges |
//! | `error` | Error types |

mod date;
mod error;
mod hour;
mod season;
mod sequence;

pub use date::CalendarDate;
pub use error::CalendarError;
pub use hour::{Hour, TimeBucket};
pub use season::Season;
pub use sequence::DateRange;
