//! Advisory conflict flags.
//!
//! Overlapping shifts and shifts on approved leave are surfaced for a human
//! to resolve; they never block a shift from being stored.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// The leave check for a single shift.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeaveConflict {
    /// The shift that was checked.
    pub shift_id: String,
    /// The employee working the shift.
    pub employee_id: String,
    /// True if any day of the shift falls on approved leave.
    pub on_leave: bool,
    /// Approved leave requests that cover a day of the shift.
    #[serde(default)]
    pub leave_request_ids: Vec<String>,
    /// Days of the shift that fall on approved leave.
    #[serde(default)]
    pub dates: Vec<NaiveDate>,
}

/// Leave conflict flags, one entry per checked shift in input order.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ConflictFlags {
    entries: Vec<LeaveConflict>,
}

impl ConflictFlags {
    /// Wraps a list of per-shift entries.
    pub fn new(entries: Vec<LeaveConflict>) -> Self {
        Self { entries }
    }

    /// Returns true if the shift was flagged as falling on approved leave.
    pub fn is_flagged(&self, shift_id: &str) -> bool {
        self.entries
            .iter()
            .any(|entry| entry.shift_id == shift_id && entry.on_leave)
    }

    /// All entries, flagged or not.
    pub fn entries(&self) -> &[LeaveConflict] {
        &self.entries
    }

    /// Only the entries that conflict with approved leave.
    pub fn flagged(&self) -> impl Iterator<Item = &LeaveConflict> {
        self.entries.iter().filter(|entry| entry.on_leave)
    }

    /// Number of flagged shifts.
    pub fn flagged_count(&self) -> usize {
        self.flagged().count()
    }
}

/// Two shifts of the same employee whose intervals overlap.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShiftOverlap {
    /// The employee double-booked.
    pub employee_id: String,
    /// The earlier-starting shift.
    pub first_shift_id: String,
    /// The later-starting shift.
    pub second_shift_id: String,
    /// Length of the shared time.
    pub overlap_minutes: i64,
}
