//! Ground-truth observations used for re-tuning.

use nimbus_calendar::CalendarDate;
use nimbus_regress::Variable;
use serde::{Deserialize, Serialize};

/// One observed value of one variable at a date and hour.
///
/// `actual` is in the output unit of `variable` (°C, mm, %, m/s).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ValidationSample {
    pub date: CalendarDate,
    pub hour: u8,
    pub variable: Variable,
    pub actual: f64,
}

impl ValidationSample {
    pub fn new(date: CalendarDate, hour: u8, variable: Variable, actual: f64) -> Self {
        Self {
            date,
            hour,
            variable,
            actual,
        }
    }
}
