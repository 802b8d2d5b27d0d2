//! Employee roster.
//!
//! The directory of employees that shifts and leave requests refer to by
//! identifier. Removing an employee cascades to their shifts.

use tracing::{info, warn};
use uuid::Uuid;

use crate::error::{EngineError, EngineResult};
use crate::models::{Employee, NewEmployee};

use super::shift_store::ShiftStore;

/// The employees of a facility.
#[derive(Debug, Clone, Default)]
pub struct Roster {
    employees: Vec<Employee>,
}

impl Roster {
    /// Creates an empty roster.
    pub fn new() -> Self {
        Self::default()
    }

    /// Wraps employees that are already known to be valid.
    pub fn from_employees(employees: Vec<Employee>) -> Self {
        Self { employees }
    }

    /// Restores an externally supplied snapshot, validating every record.
    pub fn from_snapshot(employees: Vec<Employee>) -> EngineResult<Self> {
        for employee in &employees {
            if let Err(err) = employee.validate() {
                warn!(employee_id = %employee.id, error = %err, "Roster snapshot rejected");
                return Err(err);
            }
        }
        Ok(Self { employees })
    }

    /// All employees, in insertion order.
    pub fn employees(&self) -> &[Employee] {
        &self.employees
    }

    /// Consumes the roster, returning the snapshot for persistence.
    pub fn into_employees(self) -> Vec<Employee> {
        self.employees
    }

    /// Looks up an employee by identifier.
    pub fn get(&self, employee_id: &str) -> Option<&Employee> {
        self.employees.iter().find(|e| e.id == employee_id)
    }

    /// Returns true if the employee is on the roster.
    pub fn contains(&self, employee_id: &str) -> bool {
        self.get(employee_id).is_some()
    }

    /// Validates and adds an employee under a fresh identifier.
    pub fn add(&mut self, employee: NewEmployee) -> EngineResult<Employee> {
        let employee = employee.into_employee(Uuid::new_v4().to_string());
        employee.validate()?;
        info!(employee_id = %employee.id, name = %employee.name, "Employee added");
        self.employees.push(employee.clone());
        Ok(employee)
    }

    /// Replaces the employee with the same identifier.
    pub fn update(&mut self, employee: Employee) -> EngineResult<Employee> {
        employee.validate()?;
        let slot = self
            .employees
            .iter_mut()
            .find(|e| e.id == employee.id)
            .ok_or_else(|| EngineError::EmployeeNotFound {
                employee_id: employee.id.clone(),
            })?;
        *slot = employee.clone();
        info!(employee_id = %employee.id, "Employee updated");
        Ok(employee)
    }

    /// Removes an employee and every shift assigned to them.
    pub fn remove(&mut self, employee_id: &str, shifts: &mut ShiftStore) -> EngineResult<Employee> {
        let index = self
            .employees
            .iter()
            .position(|e| e.id == employee_id)
            .ok_or_else(|| EngineError::EmployeeNotFound {
                employee_id: employee_id.to_string(),
            })?;
        let removed = self.employees.remove(index);
        let cascaded = shifts.delete_all_for_employee(employee_id);
        info!(
            employee_id = %employee_id,
            shifts_removed = cascaded,
            "Employee removed"
        );
        Ok(removed)
    }
}
