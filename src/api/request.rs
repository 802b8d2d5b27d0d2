//! Request types for the Roster Engine API.
//!
//! The API keeps no state between requests: every body carries the
//! snapshot (shifts, roster, leave requests) the operation runs against.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::models::{
    CopyPlan, Employee, EmployeeSelection, LeaveRequest, LeaveStatus, NewLeaveRequest, PeriodKind,
    Shift,
};

/// Request body for `POST /schedule/day`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DayScheduleRequest {
    /// The shift snapshot.
    pub shifts: Vec<Shift>,
    /// The day to show.
    pub date: NaiveDate,
}

/// Request body for `POST /schedule/week`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeekScheduleRequest {
    /// The shift snapshot.
    pub shifts: Vec<Shift>,
    /// Any date inside the week to show.
    pub week_of: NaiveDate,
}

/// Request body for `POST /conflicts`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConflictRequest {
    /// The shifts to check.
    pub shifts: Vec<Shift>,
    /// The leave snapshot.
    #[serde(default)]
    pub leave_requests: Vec<LeaveRequest>,
}

/// Request body for `POST /payroll`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PayrollRequest {
    /// The roster snapshot.
    pub employees: Vec<Employee>,
    /// The shift snapshot.
    pub shifts: Vec<Shift>,
    /// Report granularity.
    pub period: PeriodKind,
    /// A date inside the reporting period.
    pub anchor: NaiveDate,
    /// Restricts the report to these employees; all when absent.
    #[serde(default)]
    pub employee_ids: Option<Vec<String>>,
}

impl PayrollRequest {
    /// The employee selection the request asks for.
    pub fn selection(&self) -> EmployeeSelection {
        EmployeeSelection::from(self.employee_ids.clone())
    }
}

/// Request body for `POST /copy-plan`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CopyPlanRequest {
    /// The shift snapshot.
    pub shifts: Vec<Shift>,
    /// The version stamp persisted with the snapshot.
    #[serde(default)]
    pub version: u64,
    /// A date inside the week to copy into.
    pub target_anchor: NaiveDate,
}

/// Request body for `POST /copy-plan/apply`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApplyCopyPlanRequest {
    /// The roster snapshot.
    pub employees: Vec<Employee>,
    /// The shift snapshot.
    pub shifts: Vec<Shift>,
    /// The version stamp persisted with the snapshot.
    #[serde(default)]
    pub version: u64,
    /// The confirmed plan.
    pub plan: CopyPlan,
}

/// Request body for `POST /rotation`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RotationRequest {
    /// The roster snapshot.
    pub employees: Vec<Employee>,
    /// The first day to seed.
    pub start_date: NaiveDate,
    /// How many days to seed.
    pub num_days: u32,
}

/// Request body for `POST /leave/request`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LeaveSubmissionRequest {
    /// The leave snapshot.
    #[serde(default)]
    pub leave_requests: Vec<LeaveRequest>,
    /// The request to submit.
    pub request: NewLeaveRequest,
}

/// Request body for `POST /leave/decision`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LeaveDecisionRequest {
    /// The leave snapshot.
    pub leave_requests: Vec<LeaveRequest>,
    /// The request being decided.
    pub request_id: String,
    /// `Approved` or `Denied`.
    pub status: LeaveStatus,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_payroll_request() {
        let json = r#"{
            "employees": [
                {
                    "id": "emp_001",
                    "name": "Alice Johnson",
                    "pay_rate": "25",
                    "position": "Senior Caregiver",
                    "hire_date": "2022-08-15"
                }
            ],
            "shifts": [
                {
                    "id": "shift_001",
                    "employee_id": "emp_001",
                    "start_time": "2024-03-01T08:00:00",
                    "end_time": "2024-03-01T16:00:00"
                }
            ],
            "period": "month",
            "anchor": "2024-03-15"
        }"#;

        let request: PayrollRequest = serde_json::from_str(json).unwrap();
        assert_eq!(request.employees.len(), 1);
        assert_eq!(request.period, PeriodKind::Month);
        assert_eq!(request.selection(), EmployeeSelection::All);
    }

    #[test]
    fn test_payroll_selection_from_ids() {
        let json = r#"{
            "employees": [],
            "shifts": [],
            "period": "week",
            "anchor": "2024-03-15",
            "employee_ids": ["emp_002"]
        }"#;

        let request: PayrollRequest = serde_json::from_str(json).unwrap();
        assert!(request.selection().includes("emp_002"));
        assert!(!request.selection().includes("emp_001"));
    }

    #[test]
    fn test_copy_plan_version_defaults_to_zero() {
        let json = r#"{ "shifts": [], "target_anchor": "2024-03-04" }"#;
        let request: CopyPlanRequest = serde_json::from_str(json).unwrap();
        assert_eq!(request.version, 0);
    }

    #[test]
    fn test_deserialize_leave_decision() {
        let json = r#"{
            "leave_requests": [],
            "request_id": "leave_001",
            "status": "Approved"
        }"#;
        let request: LeaveDecisionRequest = serde_json::from_str(json).unwrap();
        assert_eq!(request.status, LeaveStatus::Approved);
    }
}
