//! Copy plans produced by the period-copy planner.

use chrono::{Duration, NaiveDateTime};
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

use super::{NewShift, Period};

/// A proposed copy of one week's shifts into another week.
///
/// A plan is only a proposal: nothing is stored until the caller applies it
/// to the shift store, which re-checks `store_version` first.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CopyPlan {
    /// The week the shifts are copied from.
    pub source_window: Period,
    /// The first instant of the week the shifts are copied into.
    pub target_week_start: NaiveDateTime,
    /// Seconds added to every copied start and end time.
    pub offset_seconds: i64,
    /// The shifts to create.
    pub shifts: Vec<NewShift>,
    /// The shift store version the plan was computed against.
    pub store_version: u64,
}

impl CopyPlan {
    /// The offset applied to every copied shift.
    pub fn offset(&self) -> Duration {
        Duration::seconds(self.offset_seconds)
    }

    /// The target week as a period, as long as the source window.
    pub fn target_window(&self) -> EngineResult<Period> {
        let length = self.source_window.end - self.source_window.start;
        let end = self
            .target_week_start
            .checked_add_signed(length)
            .ok_or_else(|| EngineError::outside_calendar(self.target_week_start.date()))?;
        Period::new(self.target_week_start, end)
    }

    /// Returns true if there is nothing to copy.
    pub fn is_empty(&self) -> bool {
        self.shifts.is_empty()
    }
}
