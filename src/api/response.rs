//! Response types for the Roster Engine API.
//!
//! This module defines the JSON response bodies, the error response
//! structure and the mapping from engine errors to HTTP status codes.

use axum::{
    Json,
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, ErrorKind};
use crate::models::{
    AggregationReport, ConflictFlags, LeaveRequest, Period, Shift, ShiftOverlap, round_currency,
};

use super::access::{Capability, Role};

/// API error response structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiError {
    /// Error code for programmatic handling.
    pub code: String,
    /// Human-readable error message.
    pub message: String,
    /// Optional details about the error.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl ApiError {
    /// Creates a new API error.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: None,
        }
    }

    /// Creates a new API error with details.
    pub fn with_details(
        code: impl Into<String>,
        message: impl Into<String>,
        details: impl Into<String>,
    ) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: Some(details.into()),
        }
    }

    /// Creates a malformed JSON error response.
    pub fn malformed_json(message: impl Into<String>) -> Self {
        Self::new("MALFORMED_JSON", message)
    }
}

/// API error with HTTP status code.
#[derive(Debug)]
pub struct ApiErrorResponse {
    /// The HTTP status code.
    pub status: StatusCode,
    /// The error body.
    pub error: ApiError,
}

impl ApiErrorResponse {
    /// A request without a recognised acting role.
    pub fn unauthorized(message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::UNAUTHORIZED,
            error: ApiError::with_details(
                "UNAUTHORIZED",
                message,
                "Send x-actor-role: owner, supervisor or employee",
            ),
        }
    }

    /// A role that lacks the capability a route requires.
    pub fn forbidden(role: Role, required: Capability) -> Self {
        Self {
            status: StatusCode::FORBIDDEN,
            error: ApiError::new(
                "FORBIDDEN",
                format!("Role '{}' lacks capability {:?}", role, required),
            ),
        }
    }
}

impl IntoResponse for ApiErrorResponse {
    fn into_response(self) -> Response {
        (self.status, Json(self.error)).into_response()
    }
}

impl From<EngineError> for ApiErrorResponse {
    fn from(error: EngineError) -> Self {
        let (status, details) = match error.kind() {
            ErrorKind::Validation => (
                StatusCode::BAD_REQUEST,
                "The request data was rejected by validation",
            ),
            ErrorKind::NotFound => (
                StatusCode::NOT_FOUND,
                "The referenced record does not exist in the submitted snapshot",
            ),
            ErrorKind::InvalidTransition => (
                StatusCode::CONFLICT,
                "Only pending leave requests can be approved or denied",
            ),
            ErrorKind::Conflict => (
                StatusCode::CONFLICT,
                "The schedule changed since the plan was computed; plan again and confirm",
            ),
            ErrorKind::Config => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "The server configuration could not be loaded",
            ),
        };
        let code = match &error {
            EngineError::ConfigNotFound { .. } | EngineError::ConfigParseError { .. } => {
                "CONFIG_ERROR"
            }
            EngineError::InvalidShift { .. } => "INVALID_SHIFT",
            EngineError::UnknownEmployee { .. } => "UNKNOWN_EMPLOYEE",
            EngineError::InvalidEmployee { .. } => "INVALID_EMPLOYEE",
            EngineError::InvalidLeaveRequest { .. } => "INVALID_LEAVE_REQUEST",
            EngineError::InvalidPeriod { .. } => "INVALID_PERIOD",
            EngineError::DateOutOfRange { .. } => "DATE_OUT_OF_RANGE",
            EngineError::ShiftNotFound { .. } => "SHIFT_NOT_FOUND",
            EngineError::EmployeeNotFound { .. } => "EMPLOYEE_NOT_FOUND",
            EngineError::LeaveRequestNotFound { .. } => "LEAVE_REQUEST_NOT_FOUND",
            EngineError::InvalidTransition { .. } => "INVALID_TRANSITION",
            EngineError::StaleSnapshot { .. } => "STALE_SNAPSHOT",
        };
        ApiErrorResponse {
            status,
            error: ApiError::with_details(code, error.to_string(), details),
        }
    }
}

impl From<JsonRejection> for ApiErrorResponse {
    fn from(rejection: JsonRejection) -> Self {
        let error = match rejection {
            JsonRejection::JsonDataError(err) => {
                let body_text = err.body_text();
                if body_text.contains("missing field") {
                    ApiError::new("VALIDATION_ERROR", body_text)
                } else {
                    ApiError::malformed_json(body_text)
                }
            }
            JsonRejection::JsonSyntaxError(err) => {
                ApiError::malformed_json(format!("Invalid JSON syntax: {}", err))
            }
            JsonRejection::MissingJsonContentType(_) => {
                ApiError::new("MISSING_CONTENT_TYPE", "Content-Type must be application/json")
            }
            _ => ApiError::malformed_json("Failed to parse request body"),
        };
        ApiErrorResponse {
            status: StatusCode::BAD_REQUEST,
            error,
        }
    }
}

/// Response body for `POST /schedule/week`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeekScheduleResponse {
    /// The first day of the week shown.
    pub week_start: NaiveDate,
    /// Shifts intersecting the week.
    pub shifts: Vec<Shift>,
}

/// Response body for `POST /conflicts`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConflictResponse {
    /// One entry per submitted shift.
    pub leave_conflicts: ConflictFlags,
    /// Overlapping shift pairs per employee.
    pub overlaps: Vec<ShiftOverlap>,
}

/// One employee's line in a payroll report, rounded for display.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PayrollLine {
    /// The employee's identifier.
    pub employee_id: String,
    /// The employee's display name.
    pub employee_name: String,
    /// Exact worked time in seconds.
    pub total_seconds: i64,
    /// Rounded hours worked.
    pub total_hours: Decimal,
    /// Rounded pay.
    pub total_pay: Decimal,
}

/// Response body for `POST /payroll`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PayrollResponse {
    /// The reporting window.
    pub period: Period,
    /// Per-employee lines, highest pay first.
    pub results: Vec<PayrollLine>,
    /// Exact worked seconds across all lines.
    pub total_seconds: i64,
    /// Rounded hours across all lines.
    pub total_hours: Decimal,
    /// Rounded pay across all lines.
    pub total_pay: Decimal,
}

impl PayrollResponse {
    /// Rounds a report for presentation.
    pub fn from_report(report: AggregationReport, pay_places: u32, hours_places: u32) -> Self {
        Self {
            period: report.period,
            results: report
                .results
                .iter()
                .map(|r| PayrollLine {
                    employee_id: r.employee_id.clone(),
                    employee_name: r.employee_name.clone(),
                    total_seconds: r.total_seconds,
                    total_hours: r.rounded_hours(hours_places),
                    total_pay: r.rounded_pay(pay_places),
                })
                .collect(),
            total_seconds: report.total_seconds,
            total_hours: round_currency(report.total_hours, hours_places),
            total_pay: round_currency(report.total_pay, pay_places),
        }
    }
}

/// Response body for `POST /copy-plan/apply`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApplyCopyPlanResponse {
    /// The store version after the copy.
    pub version: u64,
    /// The shifts created by the copy.
    pub added: Vec<Shift>,
    /// The full updated shift collection.
    pub shifts: Vec<Shift>,
}

/// Response body for the leave routes.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LeaveResponse {
    /// The request that was created or decided.
    pub updated: LeaveRequest,
    /// The full updated leave collection.
    pub leave_requests: Vec<LeaveRequest>,
}
