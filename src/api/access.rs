//! Actor roles and the capabilities they grant.
//!
//! The engine itself never checks permissions. Every route declares the
//! capability it needs and the acting role is read from a request header.

use std::fmt;
use std::str::FromStr;

use axum::http::HeaderMap;
use serde::{Deserialize, Serialize};

use super::response::ApiErrorResponse;

/// Header carrying the acting role.
pub const ROLE_HEADER: &str = "x-actor-role";

/// Something an actor may be allowed to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Capability {
    /// Read day and week schedules and conflict reports.
    ViewSchedule,
    /// Create, copy and seed shifts.
    ManageSchedule,
    /// Read payroll aggregates.
    ViewPayroll,
    /// Approve or deny leave requests.
    ApproveLeave,
    /// Submit leave requests.
    RequestLeave,
}

/// The role an actor acts in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// Facility owner.
    Owner,
    /// Shift supervisor.
    Supervisor,
    /// Rostered employee.
    Employee,
}

const OWNER_CAPABILITIES: &[Capability] = &[
    Capability::ViewSchedule,
    Capability::ManageSchedule,
    Capability::ViewPayroll,
    Capability::ApproveLeave,
    Capability::RequestLeave,
];

const SUPERVISOR_CAPABILITIES: &[Capability] = &[
    Capability::ViewSchedule,
    Capability::ManageSchedule,
    Capability::ApproveLeave,
    Capability::RequestLeave,
];

const EMPLOYEE_CAPABILITIES: &[Capability] =
    &[Capability::ViewSchedule, Capability::RequestLeave];

impl Role {
    /// The capabilities this role grants.
    pub fn capabilities(self) -> &'static [Capability] {
        match self {
            Role::Owner => OWNER_CAPABILITIES,
            Role::Supervisor => SUPERVISOR_CAPABILITIES,
            Role::Employee => EMPLOYEE_CAPABILITIES,
        }
    }

    /// Returns true if the role grants `capability`.
    pub fn can(self, capability: Capability) -> bool {
        self.capabilities().contains(&capability)
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Role::Owner => "owner",
            Role::Supervisor => "supervisor",
            Role::Employee => "employee",
        };
        f.write_str(name)
    }
}

impl FromStr for Role {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "owner" => Ok(Role::Owner),
            "supervisor" => Ok(Role::Supervisor),
            "employee" => Ok(Role::Employee),
            other => Err(format!("unknown role '{}'", other)),
        }
    }
}

/// Resolves the acting role and checks it grants `required`.
///
/// A missing or unrecognised role is `401`; a role without the capability
/// is `403`.
pub fn authorize(headers: &HeaderMap, required: Capability) -> Result<Role, ApiErrorResponse> {
    let value = headers
        .get(ROLE_HEADER)
        .ok_or_else(|| ApiErrorResponse::unauthorized(format!("missing {} header", ROLE_HEADER)))?;
    let role: Role = value
        .to_str()
        .map_err(|_| ApiErrorResponse::unauthorized("role header is not valid text"))?
        .parse()
        .map_err(|message: String| ApiErrorResponse::unauthorized(message))?;

    if !role.can(required) {
        return Err(ApiErrorResponse::forbidden(role, required));
    }
    Ok(role)
}
