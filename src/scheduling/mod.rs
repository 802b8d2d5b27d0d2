//! Shift scheduling, leave reconciliation and period-copy planning.
//!
//! The components are plain owned values. Callers hand in the current
//! snapshot (roster, shifts, leave requests), call operations on it and
//! persist what comes back.

mod aggregation;
mod conflicts;
mod interval;
mod leave_registry;
mod period_copy;
mod roster;
mod rotation;
mod shift_store;

pub use aggregation::aggregate;
pub use conflicts::{detect_overlaps, flag_leave_conflicts, shifts_in_week, shifts_on_day};
pub use interval::{
    DAYS_PER_WEEK, DEFAULT_WEEK_START, SECONDS_PER_HOUR, TimeSpan, day_window, days_covered,
    hours_between, intersects_day, normalize_interval, normalize_overnight, overlap_duration,
    overlaps, parse_clock, seconds_to_hours, week_start_of,
};
pub use leave_registry::LeaveRegistry;
pub use period_copy::{DEFAULT_LOOKBACK_MONTHS, compute_source_window, plan_copy};
pub use roster::Roster;
pub use rotation::generate_rotation;
pub use shift_store::ShiftStore;
