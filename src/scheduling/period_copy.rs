//! Period-copy planning.
//!
//! "Copy last month's roster forward": the source is the week containing the
//! date one calendar month before the target anchor, and every shift in it is
//! moved by the exact distance between the two week starts. The planner never
//! writes to the store; it returns a [`CopyPlan`] for the caller to confirm
//! and apply.

use chrono::{Months, NaiveDate, Weekday};
use tracing::info;

use crate::error::{EngineError, EngineResult};
use crate::models::{CopyPlan, NewShift, Period};

use super::shift_store::ShiftStore;

/// The number of months the copy source lies behind the target by default.
pub const DEFAULT_LOOKBACK_MONTHS: u32 = 1;

/// Finds the week that shifts are copied from.
///
/// The target anchor is moved back `lookback_months` calendar months (a day
/// past the end of the shorter month clamps to its last day) and the week
/// containing that date, aligned to `week_start`, is returned.
///
/// # Example
///
/// ```
/// use roster_engine::scheduling::compute_source_window;
/// use chrono::{NaiveDate, Weekday};
///
/// let window = compute_source_window(NaiveDate::from_ymd_opt(2024, 3, 4).unwrap(), Weekday::Sun, 1)?;
/// assert_eq!(window.start.date(), NaiveDate::from_ymd_opt(2024, 2, 4).unwrap());
/// assert_eq!(window.end.date(), NaiveDate::from_ymd_opt(2024, 2, 11).unwrap());
/// # Ok::<(), roster_engine::error::EngineError>(())
/// ```
pub fn compute_source_window(
    target_anchor: NaiveDate,
    week_start: Weekday,
    lookback_months: u32,
) -> EngineResult<Period> {
    if lookback_months == 0 {
        return Err(EngineError::InvalidPeriod {
            message: "copy lookback must be at least one month".to_string(),
        });
    }
    let source_anchor = target_anchor
        .checked_sub_months(Months::new(lookback_months))
        .ok_or(EngineError::DateOutOfRange {
            date: target_anchor,
            months: lookback_months,
        })?;
    Period::week(source_anchor, week_start)
}

/// Plans a copy of the source week's shifts into the target anchor's week.
///
/// Shifts whose start lies in the source window are copied with the same
/// employee and duration, offset by `target_week_start - source_week_start`.
/// Shifts already present in the target week are not deduplicated.
pub fn plan_copy(
    store: &ShiftStore,
    target_anchor: NaiveDate,
    week_start: Weekday,
    lookback_months: u32,
) -> EngineResult<CopyPlan> {
    let source_window = compute_source_window(target_anchor, week_start, lookback_months)?;
    let target_window = Period::week(target_anchor, week_start)?;
    let offset = target_window.start - source_window.start;

    let shifts: Vec<NewShift> = store
        .shifts()
        .iter()
        .filter(|shift| source_window.contains(shift.start_time))
        .map(|shift| NewShift::from(shift).shifted_by(offset))
        .collect::<EngineResult<_>>()?;

    info!(
        source_week_start = %source_window.start,
        target_week_start = %target_window.start,
        offset_days = offset.num_days(),
        shifts = shifts.len(),
        "Copy planned"
    );

    Ok(CopyPlan {
        source_window,
        target_week_start: target_window.start,
        offset_seconds: offset.num_seconds(),
        shifts,
        store_version: store.version(),
    })
}
