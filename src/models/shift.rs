//! Shift model and related types.
//!
//! This module defines the Shift and NewShift structs for representing
//! rostered work intervals.

use chrono::{Duration, NaiveDate, NaiveDateTime, NaiveTime};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};
use crate::scheduling::{TimeSpan, days_covered, hours_between, normalize_overnight};

/// Represents a scheduled work shift for one employee.
///
/// The interval is half-open, `[start_time, end_time)`, and an overnight
/// shift is stored as a single span crossing midnight.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Shift {
    /// Unique identifier for the shift.
    pub id: String,
    /// The employee working the shift.
    pub employee_id: String,
    /// The start time of the shift.
    pub start_time: NaiveDateTime,
    /// The end time of the shift.
    pub end_time: NaiveDateTime,
}

/// A shift that has not been stored yet and so has no identifier.
///
/// Produced by shift forms, copy plans and rotation seeding, and consumed by
/// the shift store's `add` and `add_bulk`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewShift {
    /// The employee working the shift.
    pub employee_id: String,
    /// The start time of the shift.
    pub start_time: NaiveDateTime,
    /// The end time of the shift.
    pub end_time: NaiveDateTime,
}

/// The longest a single shift may run. A form entry with equal start and
/// end clocks normalizes to exactly this.
pub const MAX_SHIFT_HOURS: i64 = 24;

fn check_interval(shift_id: &str, start: NaiveDateTime, end: NaiveDateTime) -> EngineResult<()> {
    if end <= start {
        return Err(EngineError::InvalidShift {
            shift_id: shift_id.to_string(),
            message: format!("end time {} must be after start time {}", end, start),
        });
    }
    if end - start > Duration::hours(MAX_SHIFT_HOURS) {
        return Err(EngineError::InvalidShift {
            shift_id: shift_id.to_string(),
            message: format!(
                "shift from {} to {} is longer than {} hours",
                start, end, MAX_SHIFT_HOURS
            ),
        });
    }
    Ok(())
}

impl Shift {
    /// Calculates the length of the shift in hours.
    ///
    /// # Examples
    ///
    /// ```
    /// use roster_engine::models::Shift;
    /// use chrono::NaiveDateTime;
    /// use rust_decimal::Decimal;
    ///
    /// let shift = Shift {
    ///     id: "shift_001".to_string(),
    ///     employee_id: "emp_001".to_string(),
    ///     start_time: NaiveDateTime::parse_from_str("2024-03-01 23:00:00", "%Y-%m-%d %H:%M:%S").unwrap(),
    ///     end_time: NaiveDateTime::parse_from_str("2024-03-02 07:00:00", "%Y-%m-%d %H:%M:%S").unwrap(),
    /// };
    /// assert_eq!(shift.hours(), Decimal::new(80, 1)); // 8.0 hours
    /// ```
    pub fn hours(&self) -> Decimal {
        hours_between(self.start_time, self.end_time)
    }

    /// The length of the shift.
    pub fn duration(&self) -> Duration {
        self.end_time - self.start_time
    }

    /// The calendar date the shift starts on.
    pub fn start_date(&self) -> NaiveDate {
        self.start_time.date()
    }

    /// Every calendar day the shift touches.
    pub fn days(&self) -> Vec<NaiveDate> {
        days_covered(self)
    }

    /// Checks `end_time > start_time` and the [`MAX_SHIFT_HOURS`] bound.
    pub fn validate(&self) -> EngineResult<()> {
        check_interval(&self.id, self.start_time, self.end_time)
    }
}

impl NewShift {
    /// Builds a shift from a date and two form clock times.
    ///
    /// An end clock at or before the start clock is read as the next morning.
    ///
    /// # Examples
    ///
    /// ```
    /// use roster_engine::models::NewShift;
    /// use chrono::{NaiveDate, NaiveTime};
    ///
    /// let shift = NewShift::from_clock(
    ///     "emp_007",
    ///     NaiveDate::from_ymd_opt(2024, 3, 1).unwrap(),
    ///     NaiveTime::from_hms_opt(23, 0, 0).unwrap(),
    ///     NaiveTime::from_hms_opt(7, 0, 0).unwrap(),
    /// );
    /// assert_eq!(shift.end_time.date(), NaiveDate::from_ymd_opt(2024, 3, 2).unwrap());
    /// ```
    pub fn from_clock(
        employee_id: impl Into<String>,
        date: NaiveDate,
        start_clock: NaiveTime,
        end_clock: NaiveTime,
    ) -> Self {
        let (start_time, end_time) = normalize_overnight(date, start_clock, end_clock);
        Self {
            employee_id: employee_id.into(),
            start_time,
            end_time,
        }
    }

    /// Checks `end_time > start_time` and the [`MAX_SHIFT_HOURS`] bound.
    pub fn validate(&self) -> EngineResult<()> {
        check_interval("new", self.start_time, self.end_time)
    }

    /// Returns a copy moved by `offset`, keeping employee and duration.
    ///
    /// Fails with `InvalidShift` if either end would leave the calendar.
    pub fn shifted_by(&self, offset: Duration) -> EngineResult<Self> {
        let moved = |instant: NaiveDateTime| {
            instant
                .checked_add_signed(offset)
                .ok_or_else(|| EngineError::InvalidShift {
                    shift_id: "new".to_string(),
                    message: format!("{} cannot be moved by {}", instant, offset),
                })
        };
        Ok(Self {
            employee_id: self.employee_id.clone(),
            start_time: moved(self.start_time)?,
            end_time: moved(self.end_time)?,
        })
    }

    /// The length of the planned shift.
    pub fn duration(&self) -> Duration {
        self.end_time - self.start_time
    }

    /// Assigns an identifier, producing a stored shift.
    pub fn into_shift(self, id: String) -> Shift {
        Shift {
            id,
            employee_id: self.employee_id,
            start_time: self.start_time,
            end_time: self.end_time,
        }
    }
}

impl From<&Shift> for NewShift {
    fn from(shift: &Shift) -> Self {
        Self {
            employee_id: shift.employee_id.clone(),
            start_time: shift.start_time,
            end_time: shift.end_time,
        }
    }
}

impl TimeSpan for Shift {
    fn start(&self) -> NaiveDateTime {
        self.start_time
    }

    fn end(&self) -> NaiveDateTime {
        self.end_time
    }
}

impl TimeSpan for NewShift {
    fn start(&self) -> NaiveDateTime {
        self.start_time
    }

    fn end(&self) -> NaiveDateTime {
        self.end_time
    }
}
