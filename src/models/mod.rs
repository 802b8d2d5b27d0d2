//! Core data models for the Roster Engine.
//!
//! This module contains all the domain models used throughout the engine.

mod aggregation;
mod conflict;
mod copy_plan;
mod employee;
mod leave_request;
mod period;
mod shift;

pub use aggregation::{AggregationReport, AggregationResult, EmployeeSelection, round_currency};
pub use conflict::{ConflictFlags, LeaveConflict, ShiftOverlap};
pub use copy_plan::CopyPlan;
pub use employee::{Employee, NewEmployee};
pub use leave_request::{LeaveRequest, LeaveStatus, NewLeaveRequest};
pub use period::{Period, PeriodKind};
pub use shift::{MAX_SHIFT_HOURS, NewShift, Shift};
