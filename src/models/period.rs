//! Reporting and scheduling periods.
//!
//! This module contains the [`Period`] and [`PeriodKind`] types that define
//! the time windows used by day/week views, payroll aggregation and copy
//! planning.

use chrono::{Datelike, Duration, Months, NaiveDate, NaiveDateTime, NaiveTime, Weekday};
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};
use crate::scheduling::{DAYS_PER_WEEK, TimeSpan, day_window, week_start_of};

/// The granularity of a reporting period.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PeriodKind {
    /// A single calendar day.
    Day,
    /// Seven days from the configured week start.
    Week,
    /// A calendar month.
    Month,
    /// A calendar year.
    Year,
}

/// A half-open window of time, `[start, end)`.
///
/// # Example
///
/// ```
/// use roster_engine::models::Period;
/// use chrono::NaiveDate;
///
/// let march = Period::month(2024, 3).unwrap();
/// assert_eq!(march.start.date(), NaiveDate::from_ymd_opt(2024, 3, 1).unwrap());
/// assert_eq!(march.end.date(), NaiveDate::from_ymd_opt(2024, 4, 1).unwrap());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Period {
    /// The first instant of the period (inclusive).
    pub start: NaiveDateTime,
    /// The end of the period (exclusive).
    pub end: NaiveDateTime,
}

fn midnight(date: NaiveDate) -> NaiveDateTime {
    date.and_time(NaiveTime::MIN)
}

impl Period {
    /// Creates a period from explicit bounds.
    ///
    /// Fails with `InvalidPeriod` unless `end > start`.
    pub fn new(start: NaiveDateTime, end: NaiveDateTime) -> EngineResult<Self> {
        if end <= start {
            return Err(EngineError::InvalidPeriod {
                message: format!("end {} must be after start {}", end, start),
            });
        }
        Ok(Self { start, end })
    }

    /// The 24 hours of a calendar day.
    pub fn day(date: NaiveDate) -> EngineResult<Self> {
        let (start, end) = day_window(date)?;
        Ok(Self { start, end })
    }

    /// The seven days starting at `week_start_date` (not re-aligned).
    pub fn week_from(week_start_date: NaiveDate) -> EngineResult<Self> {
        let start = midnight(week_start_date);
        let end = start
            .checked_add_signed(Duration::days(DAYS_PER_WEEK))
            .ok_or_else(|| EngineError::outside_calendar(week_start_date))?;
        Ok(Self { start, end })
    }

    /// The week containing `anchor`, aligned to `week_start`.
    ///
    /// # Example
    ///
    /// ```
    /// use roster_engine::models::Period;
    /// use chrono::{NaiveDate, Weekday};
    ///
    /// let week = Period::week(NaiveDate::from_ymd_opt(2024, 3, 4).unwrap(), Weekday::Sun)?;
    /// assert_eq!(week.start.date(), NaiveDate::from_ymd_opt(2024, 3, 3).unwrap());
    /// assert_eq!(week.end.date(), NaiveDate::from_ymd_opt(2024, 3, 10).unwrap());
    /// # Ok::<(), roster_engine::error::EngineError>(())
    /// ```
    pub fn week(anchor: NaiveDate, week_start: Weekday) -> EngineResult<Self> {
        Self::week_from(week_start_of(anchor, week_start)?)
    }

    /// A calendar month.
    pub fn month(year: i32, month: u32) -> EngineResult<Self> {
        let first = NaiveDate::from_ymd_opt(year, month, 1).ok_or_else(|| {
            EngineError::InvalidPeriod {
                message: format!("no such month: {}-{:02}", year, month),
            }
        })?;
        Self::month_of(first)
    }

    /// The calendar month containing `date`.
    pub fn month_of(date: NaiveDate) -> EngineResult<Self> {
        let first = date.with_day(1).ok_or_else(|| EngineError::outside_calendar(date))?;
        let next = first
            .checked_add_months(Months::new(1))
            .ok_or_else(|| EngineError::outside_calendar(date))?;
        Ok(Self {
            start: midnight(first),
            end: midnight(next),
        })
    }

    /// A calendar year.
    pub fn year(year: i32) -> EngineResult<Self> {
        let first = NaiveDate::from_ymd_opt(year, 1, 1).ok_or_else(|| EngineError::InvalidPeriod {
            message: format!("no such year: {}", year),
        })?;
        Self::year_of(first)
    }

    /// The calendar year containing `date`.
    pub fn year_of(date: NaiveDate) -> EngineResult<Self> {
        let first = date.with_ordinal(1).ok_or_else(|| EngineError::outside_calendar(date))?;
        let next = first
            .checked_add_months(Months::new(12))
            .ok_or_else(|| EngineError::outside_calendar(date))?;
        Ok(Self {
            start: midnight(first),
            end: midnight(next),
        })
    }

    /// The period of the given kind that contains `anchor`.
    ///
    /// Fails with `InvalidPeriod` when the period would extend past the
    /// supported calendar range.
    pub fn containing(kind: PeriodKind, anchor: NaiveDate, week_start: Weekday) -> EngineResult<Self> {
        match kind {
            PeriodKind::Day => Self::day(anchor),
            PeriodKind::Week => Self::week(anchor, week_start),
            PeriodKind::Month => Self::month_of(anchor),
            PeriodKind::Year => Self::year_of(anchor),
        }
    }

    /// Checks if an instant falls within the period (start inclusive, end exclusive).
    pub fn contains(&self, instant: NaiveDateTime) -> bool {
        instant >= self.start && instant < self.end
    }
}

impl TimeSpan for Period {
    fn start(&self) -> NaiveDateTime {
        self.start
    }

    fn end(&self) -> NaiveDateTime {
        self.end
    }
}
