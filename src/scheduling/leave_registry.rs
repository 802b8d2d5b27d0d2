//! Leave registry.
//!
//! Holds time-off requests and answers availability questions. Only
//! approved requests make an employee unavailable.

use chrono::NaiveDate;
use tracing::{debug, info, warn};
use uuid::Uuid;

use crate::error::{EngineError, EngineResult};
use crate::models::{LeaveRequest, LeaveStatus, NewLeaveRequest};

/// The collection of leave requests for a facility.
///
/// # Example
///
/// ```
/// use roster_engine::models::{LeaveStatus, NewLeaveRequest};
/// use roster_engine::scheduling::LeaveRegistry;
/// use chrono::NaiveDate;
///
/// let mut registry = LeaveRegistry::new();
/// let request = registry.submit(NewLeaveRequest {
///     employee_id: "emp_001".to_string(),
///     start_date: NaiveDate::from_ymd_opt(2024, 6, 10).unwrap(),
///     end_date: NaiveDate::from_ymd_opt(2024, 6, 12).unwrap(),
///     reason: "Family visit".to_string(),
/// })?;
/// let day = NaiveDate::from_ymd_opt(2024, 6, 11).unwrap();
/// assert!(!registry.is_on_approved_leave("emp_001", day));
///
/// registry.set_status(&request.id, LeaveStatus::Approved)?;
/// assert!(registry.is_on_approved_leave("emp_001", day));
/// # Ok::<(), roster_engine::error::EngineError>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct LeaveRegistry {
    requests: Vec<LeaveRequest>,
}

impl LeaveRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Wraps requests that are already known to be valid.
    pub fn from_requests(requests: Vec<LeaveRequest>) -> Self {
        Self { requests }
    }

    /// Restores an externally supplied snapshot, rejecting reversed date ranges.
    pub fn from_snapshot(requests: Vec<LeaveRequest>) -> EngineResult<Self> {
        for request in &requests {
            if let Err(err) = request.validate() {
                warn!(request_id = %request.id, error = %err, "Leave snapshot rejected");
                return Err(err);
            }
        }
        Ok(Self { requests })
    }

    /// All requests, in submission order.
    pub fn requests(&self) -> &[LeaveRequest] {
        &self.requests
    }

    /// Consumes the registry, returning the snapshot for persistence.
    pub fn into_requests(self) -> Vec<LeaveRequest> {
        self.requests
    }

    /// Looks up a request by identifier.
    pub fn get(&self, request_id: &str) -> Option<&LeaveRequest> {
        self.requests.iter().find(|r| r.id == request_id)
    }

    /// Records a new request with status `Pending`.
    pub fn submit(&mut self, request: NewLeaveRequest) -> EngineResult<LeaveRequest> {
        request.validate()?;
        let stored = LeaveRequest {
            id: Uuid::new_v4().to_string(),
            employee_id: request.employee_id,
            start_date: request.start_date,
            end_date: request.end_date,
            reason: request.reason,
            status: LeaveStatus::Pending,
        };
        debug!(
            request_id = %stored.id,
            employee_id = %stored.employee_id,
            start_date = %stored.start_date,
            end_date = %stored.end_date,
            "Leave request submitted"
        );
        self.requests.push(stored.clone());
        Ok(stored)
    }

    /// Moves a pending request to `Approved` or `Denied`.
    ///
    /// Any other change, including re-applying a terminal status, fails with
    /// `InvalidTransition`. An unknown identifier fails with
    /// `LeaveRequestNotFound`.
    pub fn set_status(
        &mut self,
        request_id: &str,
        new_status: LeaveStatus,
    ) -> EngineResult<LeaveRequest> {
        let index = self
            .requests
            .iter()
            .position(|r| r.id == request_id)
            .ok_or_else(|| EngineError::LeaveRequestNotFound {
                request_id: request_id.to_string(),
            })?;

        let current = &self.requests[index];
        if current.status.is_terminal() || !new_status.is_terminal() {
            return Err(EngineError::InvalidTransition {
                request_id: request_id.to_string(),
                from: current.status,
                to: new_status,
            });
        }

        let updated = LeaveRequest {
            status: new_status,
            ..current.clone()
        };
        info!(
            request_id = %updated.id,
            employee_id = %updated.employee_id,
            status = %updated.status,
            "Leave request decided"
        );
        self.requests[index] = updated.clone();
        Ok(updated)
    }

    /// Returns true if an approved request of the employee covers `date`.
    pub fn is_on_approved_leave(&self, employee_id: &str, date: NaiveDate) -> bool {
        self.requests.iter().any(|r| r.blocks(employee_id, date))
    }

    /// Approved requests of the employee that cover `date`.
    pub fn approved_covering<'a>(
        &'a self,
        employee_id: &'a str,
        date: NaiveDate,
    ) -> impl Iterator<Item = &'a LeaveRequest> + 'a {
        self.requests
            .iter()
            .filter(move |r| r.blocks(employee_id, date))
    }

    /// Requests still awaiting a decision.
    pub fn pending(&self) -> Vec<&LeaveRequest> {
        self.requests
            .iter()
            .filter(|r| r.status == LeaveStatus::Pending)
            .collect()
    }

    /// Every request made by one employee.
    pub fn requests_for(&self, employee_id: &str) -> Vec<&LeaveRequest> {
        self.requests
            .iter()
            .filter(|r| r.employee_id == employee_id)
            .collect()
    }
}
