//! HTTP request handlers for the Roster Engine API.
//!
//! Every handler authorizes the acting role, parses and validates the
//! snapshot it was sent, then runs one engine operation and returns the
//! result as JSON.

use std::time::Instant;

use axum::{
    Json, Router,
    extract::{State, rejection::JsonRejection},
    http::{HeaderMap, StatusCode},
    response::{IntoResponse, Response},
    routing::post,
};
use serde::Serialize;
use tracing::{info, warn};
use uuid::Uuid;

use crate::error::EngineError;
use crate::models::{NewShift, Period, Shift};
use crate::scheduling::{
    LeaveRegistry, Roster, ShiftStore, aggregate, detect_overlaps, flag_leave_conflicts,
    generate_rotation, plan_copy, shifts_in_week, shifts_on_day, week_start_of,
};

use super::access::{Capability, authorize};
use super::request::{
    ApplyCopyPlanRequest, ConflictRequest, CopyPlanRequest, DayScheduleRequest,
    LeaveDecisionRequest, LeaveSubmissionRequest, PayrollRequest, RotationRequest,
    WeekScheduleRequest,
};
use super::response::{
    ApiErrorResponse, ApplyCopyPlanResponse, ConflictResponse, LeaveResponse, PayrollResponse,
    WeekScheduleResponse,
};
use super::state::AppState;

/// Longest rotation a single request may seed.
pub const MAX_ROTATION_DAYS: u32 = 366;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/schedule/day", post(day_schedule_handler))
        .route("/schedule/week", post(week_schedule_handler))
        .route("/conflicts", post(conflicts_handler))
        .route("/payroll", post(payroll_handler))
        .route("/copy-plan", post(copy_plan_handler))
        .route("/copy-plan/apply", post(apply_copy_plan_handler))
        .route("/rotation", post(rotation_handler))
        .route("/leave/request", post(leave_request_handler))
        .route("/leave/decision", post(leave_decision_handler))
        .with_state(state)
}

/// Authorizes, parses and runs one operation, logging the outcome under a
/// fresh correlation id.
fn respond<Req, Res>(
    operation: &'static str,
    required: Capability,
    headers: &HeaderMap,
    payload: Result<Json<Req>, JsonRejection>,
    run: impl FnOnce(Req) -> Result<Res, ApiErrorResponse>,
) -> Response
where
    Res: Serialize,
{
    let correlation_id = Uuid::new_v4();
    let started = Instant::now();

    let outcome = authorize(headers, required).and_then(|role| {
        let Json(request) = payload?;
        run(request).map(|body| (role, body))
    });

    match outcome {
        Ok((role, body)) => {
            info!(
                correlation_id = %correlation_id,
                operation,
                role = %role,
                duration_us = started.elapsed().as_micros(),
                "Request completed"
            );
            (StatusCode::OK, Json(body)).into_response()
        }
        Err(err) => {
            warn!(
                correlation_id = %correlation_id,
                operation,
                status = err.status.as_u16(),
                code = %err.error.code,
                error = %err.error.message,
                "Request rejected"
            );
            err.into_response()
        }
    }
}

/// Handler for POST /schedule/day.
async fn day_schedule_handler(
    headers: HeaderMap,
    payload: Result<Json<DayScheduleRequest>, JsonRejection>,
) -> Response {
    respond("schedule_day", Capability::ViewSchedule, &headers, payload, |request| {
        ShiftStore::validate_snapshot(&request.shifts)?;
        let shifts: Vec<Shift> = shifts_on_day(&request.shifts, request.date)
            .into_iter()
            .cloned()
            .collect();
        Ok(shifts)
    })
}

/// Handler for POST /schedule/week.
///
/// `week_of` may be any day of the week; it is aligned to the configured
/// week start.
async fn week_schedule_handler(
    State(state): State<AppState>,
    headers: HeaderMap,
    payload: Result<Json<WeekScheduleRequest>, JsonRejection>,
) -> Response {
    respond("schedule_week", Capability::ViewSchedule, &headers, payload, |request| {
        ShiftStore::validate_snapshot(&request.shifts)?;
        let week_start = week_start_of(request.week_of, state.config().week_start())?;
        let shifts = shifts_in_week(&request.shifts, week_start)?
            .into_iter()
            .cloned()
            .collect();
        Ok(WeekScheduleResponse { week_start, shifts })
    })
}

/// Handler for POST /conflicts.
async fn conflicts_handler(
    headers: HeaderMap,
    payload: Result<Json<ConflictRequest>, JsonRejection>,
) -> Response {
    respond("conflicts", Capability::ViewSchedule, &headers, payload, |request| {
        ShiftStore::validate_snapshot(&request.shifts)?;
        let registry = LeaveRegistry::from_snapshot(request.leave_requests)?;
        Ok(ConflictResponse {
            leave_conflicts: flag_leave_conflicts(&request.shifts, &registry),
            overlaps: detect_overlaps(&request.shifts),
        })
    })
}

/// Handler for POST /payroll.
async fn payroll_handler(
    State(state): State<AppState>,
    headers: HeaderMap,
    payload: Result<Json<PayrollRequest>, JsonRejection>,
) -> Response {
    respond("payroll", Capability::ViewPayroll, &headers, payload, |request| {
        let config = state.config();
        let selection = request.selection();
        let period = Period::containing(request.period, request.anchor, config.week_start())?;
        let roster = Roster::from_snapshot(request.employees)?;
        let store = ShiftStore::from_snapshot(request.shifts, 0)?;
        let report = aggregate(store.shifts(), &roster, &selection, &period);
        Ok(PayrollResponse::from_report(
            report,
            config.pay_decimal_places(),
            config.hours_decimal_places(),
        ))
    })
}

/// Handler for POST /copy-plan.
///
/// Computes the plan only; nothing is written until the caller confirms it
/// through `/copy-plan/apply`.
async fn copy_plan_handler(
    State(state): State<AppState>,
    headers: HeaderMap,
    payload: Result<Json<CopyPlanRequest>, JsonRejection>,
) -> Response {
    respond("copy_plan", Capability::ManageSchedule, &headers, payload, |request| {
        let config = state.config();
        let store = ShiftStore::from_snapshot(request.shifts, request.version)?;
        let plan = plan_copy(
            &store,
            request.target_anchor,
            config.week_start(),
            config.lookback_months(),
        )?;
        Ok(plan)
    })
}

/// Handler for POST /copy-plan/apply.
async fn apply_copy_plan_handler(
    headers: HeaderMap,
    payload: Result<Json<ApplyCopyPlanRequest>, JsonRejection>,
) -> Response {
    respond("copy_plan_apply", Capability::ManageSchedule, &headers, payload, |request| {
        let roster = Roster::from_snapshot(request.employees)?;
        let mut store = ShiftStore::from_snapshot(request.shifts, request.version)?;
        let added = store.apply_copy_plan(request.plan, &roster)?;
        Ok(ApplyCopyPlanResponse {
            version: store.version(),
            added,
            shifts: store.into_shifts(),
        })
    })
}

/// Handler for POST /rotation.
async fn rotation_handler(
    State(state): State<AppState>,
    headers: HeaderMap,
    payload: Result<Json<RotationRequest>, JsonRejection>,
) -> Response {
    respond("rotation", Capability::ManageSchedule, &headers, payload, |request| {
        if request.num_days > MAX_ROTATION_DAYS {
            return Err(EngineError::InvalidPeriod {
                message: format!(
                    "rotation of {} days exceeds the limit of {}",
                    request.num_days, MAX_ROTATION_DAYS
                ),
            }
            .into());
        }
        let roster = Roster::from_snapshot(request.employees)?;
        let shifts: Vec<NewShift> = generate_rotation(
            &roster,
            request.start_date,
            request.num_days,
            state.config().rotation(),
        )?;
        Ok(shifts)
    })
}

/// Handler for POST /leave/request.
async fn leave_request_handler(
    headers: HeaderMap,
    payload: Result<Json<LeaveSubmissionRequest>, JsonRejection>,
) -> Response {
    respond("leave_request", Capability::RequestLeave, &headers, payload, |request| {
        let mut registry = LeaveRegistry::from_snapshot(request.leave_requests)?;
        let updated = registry.submit(request.request)?;
        Ok(LeaveResponse {
            updated,
            leave_requests: registry.into_requests(),
        })
    })
}

/// Handler for POST /leave/decision.
async fn leave_decision_handler(
    headers: HeaderMap,
    payload: Result<Json<LeaveDecisionRequest>, JsonRejection>,
) -> Response {
    respond("leave_decision", Capability::ApproveLeave, &headers, payload, |request| {
        let mut registry = LeaveRegistry::from_snapshot(request.leave_requests)?;
        let updated = registry.set_status(&request.request_id, request.status)?;
        Ok(LeaveResponse {
            updated,
            leave_requests: registry.into_requests(),
        })
    })
}
