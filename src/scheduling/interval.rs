//! Interval utilities for shift arithmetic.
//!
//! Every time span in the engine is a half-open interval `[start, end)` of
//! local wall-clock timestamps. This module measures, compares and
//! normalizes those spans, including overnight shifts that cross midnight.

use chrono::{Datelike, Duration, NaiveDate, NaiveDateTime, NaiveTime, Weekday};
use rust_decimal::Decimal;

use crate::error::{EngineError, EngineResult};

/// The weekday a scheduling week begins on unless configuration says otherwise.
pub const DEFAULT_WEEK_START: Weekday = Weekday::Sun;

/// Number of seconds in one hour.
pub const SECONDS_PER_HOUR: i64 = 3600;

/// Number of days in a scheduling week.
pub const DAYS_PER_WEEK: i64 = 7;

/// A half-open span of time `[start, end)`.
///
/// Implemented by shifts, planned shifts and periods so the interval
/// functions in this module work on any of them.
pub trait TimeSpan {
    /// The first instant of the span.
    fn start(&self) -> NaiveDateTime;
    /// The first instant after the span.
    fn end(&self) -> NaiveDateTime;
}

impl TimeSpan for (NaiveDateTime, NaiveDateTime) {
    fn start(&self) -> NaiveDateTime {
        self.0
    }

    fn end(&self) -> NaiveDateTime {
        self.1
    }
}

/// Returns the elapsed hours between two timestamps.
///
/// The result is exact to the second: `(end - start)` in seconds divided by 3600.
///
/// # Examples
///
/// ```
/// use roster_engine::scheduling::hours_between;
/// use chrono::NaiveDateTime;
/// use rust_decimal::Decimal;
///
/// let start = NaiveDateTime::parse_from_str("2024-03-01 23:00:00", "%Y-%m-%d %H:%M:%S").unwrap();
/// let end = NaiveDateTime::parse_from_str("2024-03-02 07:00:00", "%Y-%m-%d %H:%M:%S").unwrap();
/// assert_eq!(hours_between(start, end), Decimal::new(8, 0));
/// ```
pub fn hours_between(start: NaiveDateTime, end: NaiveDateTime) -> Decimal {
    seconds_to_hours((end - start).num_seconds())
}

/// Converts a number of seconds into hours.
pub fn seconds_to_hours(seconds: i64) -> Decimal {
    Decimal::from(seconds) / Decimal::from(SECONDS_PER_HOUR)
}

/// Builds a shift interval from a calendar date and two clock times.
///
/// If `end_clock` is at or before `start_clock` the end is placed on the
/// following day, so "23:00-07:00" becomes a single span across midnight.
///
/// # Examples
///
/// ```
/// use roster_engine::scheduling::normalize_overnight;
/// use chrono::{NaiveDate, NaiveTime};
///
/// let date = NaiveDate::from_ymd_opt(2024, 3, 1).unwrap();
/// let (start, end) = normalize_overnight(
///     date,
///     NaiveTime::from_hms_opt(23, 0, 0).unwrap(),
///     NaiveTime::from_hms_opt(7, 0, 0).unwrap(),
/// );
/// assert_eq!(start.date(), date);
/// assert_eq!(end.date(), NaiveDate::from_ymd_opt(2024, 3, 2).unwrap());
/// ```
pub fn normalize_overnight(
    date: NaiveDate,
    start_clock: NaiveTime,
    end_clock: NaiveTime,
) -> (NaiveDateTime, NaiveDateTime) {
    normalize_interval(date.and_time(start_clock), date.and_time(end_clock))
}

/// Advances `end` by whole days until it is after `start`.
///
/// An interval that already satisfies `end > start` is returned unchanged,
/// which makes the normalization idempotent.
pub fn normalize_interval(
    start: NaiveDateTime,
    end: NaiveDateTime,
) -> (NaiveDateTime, NaiveDateTime) {
    if end > start {
        return (start, end);
    }
    let days_behind = (start - end).num_days() + 1;
    (start, end + Duration::days(days_behind))
}

/// Returns true if two spans share at least one instant.
///
/// Spans are half-open: a shift ending at 15:00 does not overlap one
/// starting at 15:00.
pub fn overlaps<A, B>(a: &A, b: &B) -> bool
where
    A: TimeSpan + ?Sized,
    B: TimeSpan + ?Sized,
{
    a.start() < b.end() && b.start() < a.end()
}

/// Returns the length of the overlap between two spans, or zero.
pub fn overlap_duration<A, B>(a: &A, b: &B) -> Duration
where
    A: TimeSpan + ?Sized,
    B: TimeSpan + ?Sized,
{
    if !overlaps(a, b) {
        return Duration::zero();
    }
    a.end().min(b.end()) - a.start().max(b.start())
}

/// Returns the `[00:00, next day 00:00)` window of a calendar date.
///
/// Fails with `InvalidPeriod` for the last representable date.
pub fn day_window(date: NaiveDate) -> EngineResult<(NaiveDateTime, NaiveDateTime)> {
    let next = date.succ_opt().ok_or_else(|| EngineError::outside_calendar(date))?;
    Ok((date.and_time(NaiveTime::MIN), next.and_time(NaiveTime::MIN)))
}

/// Returns true if the span has any instant within the given calendar day.
///
/// An overnight shift is on both its start day and its end day.
pub fn intersects_day<S: TimeSpan + ?Sized>(span: &S, date: NaiveDate) -> bool {
    // start < next midnight  <=>  start falls on or before `date`
    span.start().date() <= date && date.and_time(NaiveTime::MIN) < span.end()
}

/// Lists every calendar day the span intersects, in order.
pub fn days_covered<S: TimeSpan + ?Sized>(span: &S) -> Vec<NaiveDate> {
    let mut days = Vec::new();
    let mut day = Some(span.start().date());
    while let Some(current) = day.filter(|d| d.and_time(NaiveTime::MIN) < span.end()) {
        days.push(current);
        day = current.succ_opt();
    }
    days
}

/// Returns the first day of the week containing `date`.
///
/// # Examples
///
/// ```
/// use roster_engine::scheduling::week_start_of;
/// use chrono::{NaiveDate, Weekday};
///
/// // 2024-03-04 is a Monday; its Sunday-aligned week starts 2024-03-03.
/// let monday = NaiveDate::from_ymd_opt(2024, 3, 4).unwrap();
/// assert_eq!(week_start_of(monday, Weekday::Sun)?, NaiveDate::from_ymd_opt(2024, 3, 3).unwrap());
/// assert_eq!(week_start_of(monday, Weekday::Mon)?, monday);
/// # Ok::<(), roster_engine::error::EngineError>(())
/// ```
pub fn week_start_of(date: NaiveDate, week_start: Weekday) -> EngineResult<NaiveDate> {
    let offset = (date.weekday().num_days_from_monday() + 7 - week_start.num_days_from_monday()) % 7;
    date.checked_sub_signed(Duration::days(i64::from(offset)))
        .ok_or_else(|| EngineError::outside_calendar(date))
}

/// Parses an `HH:MM` clock time as entered on a shift form.
pub fn parse_clock(value: &str) -> EngineResult<NaiveTime> {
    NaiveTime::parse_from_str(value.trim(), "%H:%M").map_err(|e| EngineError::InvalidShift {
        shift_id: "new".to_string(),
        message: format!("invalid clock time '{}': {}", value, e),
    })
}
