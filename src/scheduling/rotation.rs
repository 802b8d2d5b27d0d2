//! Default rotation seeding.

use chrono::{Days, NaiveDate};
use tracing::info;

use crate::config::RotationConfig;
use crate::error::{EngineError, EngineResult};
use crate::models::NewShift;

use super::roster::Roster;

/// Generates a starting rotation for every employee on the roster.
///
/// Employees whose position contains the night marker work the night shift
/// every day. Everyone else works one day shift per day, cycling through
/// the configured templates so that staff alternate: the template used by
/// the employee at day-staff index `i` on day `d` is `(d + i) % len`.
///
/// The result is a set of [`NewShift`]s for the caller to add to a store.
/// Fails with `InvalidPeriod` if the rotation, including the morning after
/// its last night, would run past the end of the calendar.
pub fn generate_rotation(
    roster: &Roster,
    start_date: NaiveDate,
    num_days: u32,
    config: &RotationConfig,
) -> EngineResult<Vec<NewShift>> {
    start_date
        .checked_add_days(Days::new(u64::from(num_days) + 1))
        .ok_or_else(|| EngineError::outside_calendar(start_date))?;

    let (night_staff, day_staff): (Vec<_>, Vec<_>) = roster
        .employees()
        .iter()
        .partition(|e| e.position.contains(&config.night_position_marker));

    let mut shifts = Vec::new();
    for (day, date) in start_date.iter_days().take(num_days as usize).enumerate() {

        if !config.day_shifts.is_empty() {
            for (index, employee) in day_staff.iter().enumerate() {
                let template = config.day_shifts[(day + index) % config.day_shifts.len()];
                shifts.push(NewShift::from_clock(
                    employee.id.as_str(),
                    date,
                    template.start,
                    template.end,
                ));
            }
        }

        for employee in &night_staff {
            shifts.push(NewShift::from_clock(
                employee.id.as_str(),
                date,
                config.night_shift.start,
                config.night_shift.end,
            ));
        }
    }

    info!(
        day_staff = day_staff.len(),
        night_staff = night_staff.len(),
        num_days,
        shifts = shifts.len(),
        "Rotation generated"
    );
    Ok(shifts)
}
