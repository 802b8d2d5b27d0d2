//! Employee model.
//!
//! This module defines the Employee struct and the NewEmployee input used
//! when adding someone to the roster.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

/// Represents a member of staff who can be rostered onto shifts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Employee {
    /// Unique identifier for the employee.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Hourly pay rate in dollars.
    pub pay_rate: Decimal,
    /// Position or title (e.g., "Night Shift Caregiver").
    pub position: String,
    /// The date the employee was hired.
    pub hire_date: NaiveDate,
}

/// An employee that has not been assigned an identifier yet.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewEmployee {
    /// Display name.
    pub name: String,
    /// Hourly pay rate in dollars.
    pub pay_rate: Decimal,
    /// Position or title.
    pub position: String,
    /// The date the employee was hired.
    pub hire_date: NaiveDate,
}

impl NewEmployee {
    /// Assigns an identifier, producing a roster record.
    pub fn into_employee(self, id: String) -> Employee {
        Employee {
            id,
            name: self.name,
            pay_rate: self.pay_rate,
            position: self.position,
            hire_date: self.hire_date,
        }
    }
}

impl Employee {
    /// Checks that the record can be stored on the roster.
    ///
    /// Name and position must be non-blank and the pay rate must not be negative.
    ///
    /// # Examples
    ///
    /// ```
    /// use roster_engine::models::Employee;
    /// use chrono::NaiveDate;
    /// use rust_decimal::Decimal;
    ///
    /// let employee = Employee {
    ///     id: "emp_001".to_string(),
    ///     name: "Alice Johnson".to_string(),
    ///     pay_rate: Decimal::new(25, 0),
    ///     position: "Senior Caregiver".to_string(),
    ///     hire_date: NaiveDate::from_ymd_opt(2022, 8, 15).unwrap(),
    /// };
    /// assert!(employee.validate().is_ok());
    /// ```
    pub fn validate(&self) -> EngineResult<()> {
        if self.name.trim().is_empty() {
            return Err(EngineError::InvalidEmployee {
                field: "name".to_string(),
                message: "must not be empty".to_string(),
            });
        }
        if self.position.trim().is_empty() {
            return Err(EngineError::InvalidEmployee {
                field: "position".to_string(),
                message: "must not be empty".to_string(),
            });
        }
        if self.pay_rate < Decimal::ZERO {
            return Err(EngineError::InvalidEmployee {
                field: "pay_rate".to_string(),
                message: format!("must not be negative, got {}", self.pay_rate),
            });
        }
        Ok(())
    }
}
