//! Error types for the Roster Engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for all error conditions that can occur while scheduling shifts,
//! managing leave and loading configuration.

use chrono::NaiveDate;
use thiserror::Error;

use crate::models::LeaveStatus;

/// The broad category an [`EngineError`] belongs to.
///
/// Callers that only need to decide how to present a failure (for example
/// the HTTP layer choosing a status code) can match on this instead of on
/// every individual variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Malformed input that was rejected rather than coerced.
    Validation,
    /// An update or lookup referenced an identifier that does not exist.
    NotFound,
    /// A leave request status change that is not allowed.
    InvalidTransition,
    /// A mutation was computed against a snapshot that has since changed.
    Conflict,
    /// Configuration could not be loaded.
    Config,
}

/// The main error type for the Roster Engine.
///
/// All fallible operations in the engine return this error type. Overlapping
/// shifts and shifts on approved leave are never errors; they are reported as
/// flags by the conflict engine.
///
/// # Example
///
/// ```
/// use roster_engine::error::EngineError;
///
/// let error = EngineError::ShiftNotFound {
///     shift_id: "shift_404".to_string(),
/// };
/// assert_eq!(error.to_string(), "Shift not found: shift_404");
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// A shift was invalid or contained inconsistent data.
    #[error("Invalid shift '{shift_id}': {message}")]
    InvalidShift {
        /// The ID of the invalid shift (`"new"` for shifts without identity yet).
        shift_id: String,
        /// A description of what made the shift invalid.
        message: String,
    },

    /// A shift referenced an employee that is not on the roster.
    #[error("Unknown employee: {employee_id}")]
    UnknownEmployee {
        /// The employee identifier that could not be resolved.
        employee_id: String,
    },

    /// An employee record was invalid or contained inconsistent data.
    #[error("Invalid employee field '{field}': {message}")]
    InvalidEmployee {
        /// The field that was invalid.
        field: String,
        /// A description of what made the field invalid.
        message: String,
    },

    /// A leave request was invalid.
    #[error("Invalid leave request: {message}")]
    InvalidLeaveRequest {
        /// A description of what made the request invalid.
        message: String,
    },

    /// A reporting or copy period could not be constructed.
    #[error("Invalid period: {message}")]
    InvalidPeriod {
        /// A description of the problem.
        message: String,
    },

    /// No shift with the given identifier exists.
    #[error("Shift not found: {shift_id}")]
    ShiftNotFound {
        /// The identifier that was not found.
        shift_id: String,
    },

    /// No employee with the given identifier exists.
    #[error("Employee not found: {employee_id}")]
    EmployeeNotFound {
        /// The identifier that was not found.
        employee_id: String,
    },

    /// No leave request with the given identifier exists.
    #[error("Leave request not found: {request_id}")]
    LeaveRequestNotFound {
        /// The identifier that was not found.
        request_id: String,
    },

    /// A leave request status change was attempted on a request that is not pending.
    #[error("Invalid transition for leave request '{request_id}': {from} -> {to}")]
    InvalidTransition {
        /// The leave request identifier.
        request_id: String,
        /// The current status of the request.
        from: LeaveStatus,
        /// The requested new status.
        to: LeaveStatus,
    },

    /// A plan was computed against a shift store version that is no longer current.
    #[error("Stale snapshot: plan was computed at version {expected}, store is at version {actual}")]
    StaleSnapshot {
        /// The store version the plan was computed against.
        expected: u64,
        /// The current store version.
        actual: u64,
    },

    /// A date could not be shifted by the requested number of months.
    #[error("Date {date} cannot be shifted back {months} month(s)")]
    DateOutOfRange {
        /// The anchor date.
        date: NaiveDate,
        /// The number of months requested.
        months: u32,
    },
}

impl EngineError {
    /// Returns the broad category of this error.
    ///
    /// # Example
    ///
    /// ```
    /// use roster_engine::error::{EngineError, ErrorKind};
    ///
    /// let error = EngineError::UnknownEmployee { employee_id: "emp_9".to_string() };
    /// assert_eq!(error.kind(), ErrorKind::Validation);
    /// ```
    pub fn kind(&self) -> ErrorKind {
        match self {
            EngineError::ConfigNotFound { .. } | EngineError::ConfigParseError { .. } => {
                ErrorKind::Config
            }
            EngineError::InvalidShift { .. }
            | EngineError::UnknownEmployee { .. }
            | EngineError::InvalidEmployee { .. }
            | EngineError::InvalidLeaveRequest { .. }
            | EngineError::InvalidPeriod { .. }
            | EngineError::DateOutOfRange { .. } => ErrorKind::Validation,
            EngineError::ShiftNotFound { .. }
            | EngineError::EmployeeNotFound { .. }
            | EngineError::LeaveRequestNotFound { .. } => ErrorKind::NotFound,
            EngineError::InvalidTransition { .. } => ErrorKind::InvalidTransition,
            EngineError::StaleSnapshot { .. } => ErrorKind::Conflict,
        }
    }

    /// A period or window that would run past chrono's calendar.
    pub(crate) fn outside_calendar(date: NaiveDate) -> Self {
        EngineError::InvalidPeriod {
            message: format!("date {} is outside the supported calendar range", date),
        }
    }
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_not_found_displays_path() {
        let error = EngineError::ConfigNotFound {
            path: "/missing/scheduler.yaml".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Configuration file not found: /missing/scheduler.yaml"
        );
        assert_eq!(error.kind(), ErrorKind::Config);
    }

    #[test]
    fn test_invalid_shift_displays_id_and_message() {
        let error = EngineError::InvalidShift {
            shift_id: "shift_001".to_string(),
            message: "end time must be after start time".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Invalid shift 'shift_001': end time must be after start time"
        );
        assert_eq!(error.kind(), ErrorKind::Validation);
    }

    #[test]
    fn test_unknown_employee_is_validation() {
        let error = EngineError::UnknownEmployee {
            employee_id: "emp_404".to_string(),
        };
        assert_eq!(error.to_string(), "Unknown employee: emp_404");
        assert_eq!(error.kind(), ErrorKind::Validation);
    }

    #[test]
    fn test_not_found_variants() {
        let shift = EngineError::ShiftNotFound {
            shift_id: "s1".to_string(),
        };
        let employee = EngineError::EmployeeNotFound {
            employee_id: "e1".to_string(),
        };
        let leave = EngineError::LeaveRequestNotFound {
            request_id: "l1".to_string(),
        };
        assert_eq!(shift.kind(), ErrorKind::NotFound);
        assert_eq!(employee.kind(), ErrorKind::NotFound);
        assert_eq!(leave.kind(), ErrorKind::NotFound);
        assert_eq!(leave.to_string(), "Leave request not found: l1");
    }

    #[test]
    fn test_invalid_transition_displays_statuses() {
        let error = EngineError::InvalidTransition {
            request_id: "leave_001".to_string(),
            from: LeaveStatus::Approved,
            to: LeaveStatus::Approved,
        };
        assert_eq!(
            error.to_string(),
            "Invalid transition for leave request 'leave_001': Approved -> Approved"
        );
        assert_eq!(error.kind(), ErrorKind::InvalidTransition);
    }

    #[test]
    fn test_stale_snapshot_is_conflict() {
        let error = EngineError::StaleSnapshot {
            expected: 3,
            actual: 5,
        };
        assert_eq!(
            error.to_string(),
            "Stale snapshot: plan was computed at version 3, store is at version 5"
        );
        assert_eq!(error.kind(), ErrorKind::Conflict);
    }

    #[test]
    fn test_errors_implement_std_error() {
        fn assert_error<T: std::error::Error>() {}
        assert_error::<EngineError>();
    }

    #[test]
    fn test_error_propagation_with_question_mark() {
        fn returns_not_found() -> EngineResult<()> {
            Err(EngineError::ShiftNotFound {
                shift_id: "missing".to_string(),
            })
        }

        fn propagates_error() -> EngineResult<()> {
            returns_not_found()?;
            Ok(())
        }

        assert!(propagates_error().is_err());
    }
}
