//! Schedule views and conflict detection.
//!
//! Day and week views select shifts by intersection, so an overnight shift
//! appears on both days it touches. Leave conflicts and double bookings are
//! reported as advisory flags.

use std::collections::BTreeMap;

use chrono::{NaiveDate, NaiveDateTime};
use tracing::debug;

use crate::error::EngineResult;
use crate::models::{ConflictFlags, LeaveConflict, Period, Shift, ShiftOverlap};

use super::interval::{intersects_day, overlap_duration, overlaps};
use super::leave_registry::LeaveRegistry;

/// Returns every shift with any instant on the given calendar day.
///
/// # Example
///
/// ```
/// use roster_engine::models::Shift;
/// use roster_engine::scheduling::shifts_on_day;
/// use chrono::{NaiveDate, NaiveDateTime};
///
/// let night = Shift {
///     id: "shift_001".to_string(),
///     employee_id: "emp_003".to_string(),
///     start_time: NaiveDateTime::parse_from_str("2024-03-01 23:00:00", "%Y-%m-%d %H:%M:%S").unwrap(),
///     end_time: NaiveDateTime::parse_from_str("2024-03-02 07:00:00", "%Y-%m-%d %H:%M:%S").unwrap(),
/// };
/// let shifts = vec![night];
/// assert_eq!(shifts_on_day(&shifts, NaiveDate::from_ymd_opt(2024, 3, 1).unwrap()).len(), 1);
/// assert_eq!(shifts_on_day(&shifts, NaiveDate::from_ymd_opt(2024, 3, 2).unwrap()).len(), 1);
/// ```
pub fn shifts_on_day(shifts: &[Shift], date: NaiveDate) -> Vec<&Shift> {
    shifts
        .iter()
        .filter(|shift| intersects_day(*shift, date))
        .collect()
}

/// Returns every shift intersecting the seven days beginning at `week_start`.
///
/// The caller chooses the week-start convention; `week_start` is used as given.
pub fn shifts_in_week(shifts: &[Shift], week_start: NaiveDate) -> EngineResult<Vec<&Shift>> {
    let window = Period::week_from(week_start)?;
    Ok(shifts
        .iter()
        .filter(|shift| overlaps(*shift, &window))
        .collect())
}

/// Flags shifts that fall on a day of approved leave for their employee.
///
/// A shift is checked against every calendar day it intersects, so an
/// overnight shift ending on the first morning of leave is flagged. The
/// result has one entry per input shift, in input order.
pub fn flag_leave_conflicts(shifts: &[Shift], registry: &LeaveRegistry) -> ConflictFlags {
    let entries = shifts
        .iter()
        .map(|shift| {
            let mut dates = Vec::new();
            let mut leave_request_ids: Vec<String> = Vec::new();
            for day in shift.days() {
                let mut covering = registry
                    .approved_covering(&shift.employee_id, day)
                    .peekable();
                if covering.peek().is_some() {
                    dates.push(day);
                }
                for request in covering {
                    if !leave_request_ids.contains(&request.id) {
                        leave_request_ids.push(request.id.clone());
                    }
                }
            }
            LeaveConflict {
                shift_id: shift.id.clone(),
                employee_id: shift.employee_id.clone(),
                on_leave: !dates.is_empty(),
                leave_request_ids,
                dates,
            }
        })
        .collect::<Vec<_>>();

    let flags = ConflictFlags::new(entries);
    debug!(
        shifts_checked = shifts.len(),
        flagged = flags.flagged_count(),
        "Leave conflicts evaluated"
    );
    flags
}

/// Finds every pair of shifts of the same employee that overlap.
///
/// Overlap is half-open: back-to-back shifts are not reported. Pairs are
/// ordered by the start of the earlier shift, then by employee.
pub fn detect_overlaps(shifts: &[Shift]) -> Vec<ShiftOverlap> {
    let mut by_employee: BTreeMap<&str, Vec<&Shift>> = BTreeMap::new();
    for shift in shifts {
        by_employee
            .entry(shift.employee_id.as_str())
            .or_default()
            .push(shift);
    }

    let mut found: Vec<(NaiveDateTime, ShiftOverlap)> = Vec::new();
    for (employee_id, mut own) in by_employee {
        own.sort_by(|a, b| a.start_time.cmp(&b.start_time).then_with(|| a.id.cmp(&b.id)));
        for (i, first) in own.iter().enumerate() {
            // Sorted by start: once a later shift starts at or after this one
            // ends, no further shift can overlap it.
            for second in own[i + 1..]
                .iter()
                .take_while(|s| s.start_time < first.end_time)
            {
                if overlaps(*first, *second) {
                    found.push((
                        first.start_time,
                        ShiftOverlap {
                            employee_id: employee_id.to_string(),
                            first_shift_id: first.id.clone(),
                            second_shift_id: second.id.clone(),
                            overlap_minutes: overlap_duration(*first, *second).num_minutes(),
                        },
                    ));
                }
            }
        }
    }

    found.sort_by(|(a_start, a), (b_start, b)| {
        a_start
            .cmp(b_start)
            .then_with(|| a.employee_id.cmp(&b.employee_id))
    });
    found.into_iter().map(|(_, overlap)| overlap).collect()
}
