//! Leave request model.
//!
//! Time-off requests cover an inclusive range of calendar days and move from
//! `Pending` to a terminal `Approved` or `Denied` status exactly once.

use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

/// The review status of a leave request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LeaveStatus {
    /// Submitted and awaiting a supervisor decision.
    Pending,
    /// Approved; the employee is unavailable on the covered days.
    Approved,
    /// Denied; has no effect on scheduling.
    Denied,
}

impl LeaveStatus {
    /// Returns true for statuses that can no longer change.
    pub fn is_terminal(self) -> bool {
        !matches!(self, LeaveStatus::Pending)
    }
}

impl fmt::Display for LeaveStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LeaveStatus::Pending => write!(f, "Pending"),
            LeaveStatus::Approved => write!(f, "Approved"),
            LeaveStatus::Denied => write!(f, "Denied"),
        }
    }
}

/// A request for time off.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeaveRequest {
    /// Unique identifier for the request.
    pub id: String,
    /// The employee asking for leave.
    pub employee_id: String,
    /// First day of leave (inclusive).
    pub start_date: NaiveDate,
    /// Last day of leave (inclusive).
    pub end_date: NaiveDate,
    /// Free-text reason.
    #[serde(default)]
    pub reason: String,
    /// Review status.
    pub status: LeaveStatus,
}

/// A leave request as submitted, before it has an identifier or status.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewLeaveRequest {
    /// The employee asking for leave.
    pub employee_id: String,
    /// First day of leave (inclusive).
    pub start_date: NaiveDate,
    /// Last day of leave (inclusive).
    pub end_date: NaiveDate,
    /// Free-text reason.
    #[serde(default)]
    pub reason: String,
}

fn check_range(start_date: NaiveDate, end_date: NaiveDate) -> EngineResult<()> {
    if end_date < start_date {
        return Err(EngineError::InvalidLeaveRequest {
            message: format!("end date {} is before start date {}", end_date, start_date),
        });
    }
    Ok(())
}

impl NewLeaveRequest {
    /// Checks that the date range is not reversed.
    pub fn validate(&self) -> EngineResult<()> {
        check_range(self.start_date, self.end_date)
    }
}

impl LeaveRequest {
    /// Checks that the date range is not reversed.
    pub fn validate(&self) -> EngineResult<()> {
        check_range(self.start_date, self.end_date)
    }

    /// Checks if a given date falls within the request.
    ///
    /// The check is inclusive of both start and end dates.
    ///
    /// # Example
    ///
    /// ```
    /// use roster_engine::models::{LeaveRequest, LeaveStatus};
    /// use chrono::NaiveDate;
    ///
    /// let request = LeaveRequest {
    ///     id: "leave_001".to_string(),
    ///     employee_id: "emp_001".to_string(),
    ///     start_date: NaiveDate::from_ymd_opt(2024, 6, 10).unwrap(),
    ///     end_date: NaiveDate::from_ymd_opt(2024, 6, 12).unwrap(),
    ///     reason: "Family visit".to_string(),
    ///     status: LeaveStatus::Approved,
    /// };
    ///
    /// assert!(request.covers(NaiveDate::from_ymd_opt(2024, 6, 12).unwrap()));
    /// assert!(!request.covers(NaiveDate::from_ymd_opt(2024, 6, 13).unwrap()));
    /// ```
    pub fn covers(&self, date: NaiveDate) -> bool {
        date >= self.start_date && date <= self.end_date
    }

    /// Returns true if the request is approved and covers the date.
    pub fn blocks(&self, employee_id: &str, date: NaiveDate) -> bool {
        self.status == LeaveStatus::Approved && self.employee_id == employee_id && self.covers(date)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_date(date_str: &str) -> NaiveDate {
        NaiveDate::parse_from_str(date_str, "%Y-%m-%d").unwrap()
    }

    fn make_request(status: LeaveStatus) -> LeaveRequest {
        LeaveRequest {
            id: "leave_001".to_string(),
            employee_id: "emp_001".to_string(),
            start_date: make_date("2024-06-10"),
            end_date: make_date("2024-06-12"),
            reason: "Family visit".to_string(),
            status,
        }
    }

    #[test]
    fn test_covers_is_inclusive() {
        let request = make_request(LeaveStatus::Approved);
        assert!(request.covers(make_date("2024-06-10")));
        assert!(request.covers(make_date("2024-06-11")));
        assert!(request.covers(make_date("2024-06-12")));
        assert!(!request.covers(make_date("2024-06-09")));
        assert!(!request.covers(make_date("2024-06-13")));
    }

    #[test]
    fn test_only_approved_requests_block() {
        let date = make_date("2024-06-11");
        assert!(make_request(LeaveStatus::Approved).blocks("emp_001", date));
        assert!(!make_request(LeaveStatus::Pending).blocks("emp_001", date));
        assert!(!make_request(LeaveStatus::Denied).blocks("emp_001", date));
        assert!(!make_request(LeaveStatus::Approved).blocks("emp_002", date));
    }

    #[test]
    fn test_terminal_statuses() {
        assert!(!LeaveStatus::Pending.is_terminal());
        assert!(LeaveStatus::Approved.is_terminal());
        assert!(LeaveStatus::Denied.is_terminal());
    }

    #[test]
    fn test_status_serialization() {
        assert_eq!(
            serde_json::to_string(&LeaveStatus::Approved).unwrap(),
            "\"Approved\""
        );
        let status: LeaveStatus = serde_json::from_str("\"Denied\"").unwrap();
        assert_eq!(status, LeaveStatus::Denied);
    }

    #[test]
    fn test_new_request_rejects_reversed_range() {
        let request = NewLeaveRequest {
            employee_id: "emp_001".to_string(),
            start_date: make_date("2024-06-12"),
            end_date: make_date("2024-06-10"),
            reason: String::new(),
        };
        assert!(matches!(
            request.validate(),
            Err(EngineError::InvalidLeaveRequest { .. })
        ));
    }

    #[test]
    fn test_single_day_request_is_valid() {
        let request = NewLeaveRequest {
            employee_id: "emp_001".to_string(),
            start_date: make_date("2024-06-12"),
            end_date: make_date("2024-06-12"),
            reason: "Appointment".to_string(),
        };
        assert!(request.validate().is_ok());
    }
}
