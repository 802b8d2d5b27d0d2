//! HTTP API module for the Roster Engine.
//!
//! A stateless adapter over the scheduling engine. Each request carries the
//! snapshot it operates on and the acting role; capability checks happen
//! here and nowhere else.

mod access;
mod handlers;
mod request;
mod response;
mod state;

pub use access::{Capability, ROLE_HEADER, Role, authorize};
pub use handlers::{MAX_ROTATION_DAYS, create_router};
pub use request::{
    ApplyCopyPlanRequest, ConflictRequest, CopyPlanRequest, DayScheduleRequest,
    LeaveDecisionRequest, LeaveSubmissionRequest, PayrollRequest, RotationRequest,
    WeekScheduleRequest,
};
pub use response::{
    ApiError, ApiErrorResponse, ApplyCopyPlanResponse, ConflictResponse, LeaveResponse,
    PayrollLine, PayrollResponse, WeekScheduleResponse,
};
pub use state::AppState;
