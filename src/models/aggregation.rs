//! Payroll aggregation results.
//!
//! These types are derived on demand from shifts and the roster and are
//! never persisted or cached across mutations.

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

use super::Period;

/// Which employees an aggregation covers.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EmployeeSelection {
    /// Every employee on the roster.
    #[default]
    All,
    /// Only the listed employee identifiers.
    Only(Vec<String>),
}

impl EmployeeSelection {
    /// Returns true if the employee is part of the selection.
    pub fn includes(&self, employee_id: &str) -> bool {
        match self {
            EmployeeSelection::All => true,
            EmployeeSelection::Only(ids) => ids.iter().any(|id| id == employee_id),
        }
    }
}

impl From<Option<Vec<String>>> for EmployeeSelection {
    fn from(ids: Option<Vec<String>>) -> Self {
        ids.map_or(EmployeeSelection::All, EmployeeSelection::Only)
    }
}

/// Rounds a currency amount for display.
///
/// Intermediate sums are never rounded; only presentation code calls this.
pub fn round_currency(amount: Decimal, decimal_places: u32) -> Decimal {
    amount.round_dp_with_strategy(decimal_places, RoundingStrategy::MidpointAwayFromZero)
}

/// Worked hours and pay for one employee over a period.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AggregationResult {
    /// The employee the totals belong to.
    pub employee_id: String,
    /// The employee's display name.
    pub employee_name: String,
    /// Total worked time in whole seconds, the exact quantity hours and pay
    /// are derived from.
    pub total_seconds: i64,
    /// Total worked hours (unrounded).
    pub total_hours: Decimal,
    /// Total pay, `total_seconds × pay_rate / 3600` (unrounded).
    pub total_pay: Decimal,
}

impl AggregationResult {
    /// Total pay rounded for presentation.
    ///
    /// # Example
    ///
    /// ```
    /// use roster_engine::models::AggregationResult;
    /// use rust_decimal::Decimal;
    ///
    /// let result = AggregationResult {
    ///     employee_id: "emp_001".to_string(),
    ///     employee_name: "Alice Johnson".to_string(),
    ///     total_seconds: 1200,
    ///     total_hours: Decimal::new(1, 0) / Decimal::new(3, 0),
    ///     total_pay: Decimal::new(25, 0) / Decimal::new(3, 0),
    /// };
    /// assert_eq!(result.rounded_pay(2), Decimal::new(833, 2));
    /// ```
    pub fn rounded_pay(&self, decimal_places: u32) -> Decimal {
        round_currency(self.total_pay, decimal_places)
    }

    /// Total hours rounded for presentation.
    pub fn rounded_hours(&self, decimal_places: u32) -> Decimal {
        round_currency(self.total_hours, decimal_places)
    }
}

/// The full payroll report for a period.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AggregationReport {
    /// The window the report covers.
    pub period: Period,
    /// Per-employee totals, highest pay first.
    pub results: Vec<AggregationResult>,
    /// Sum of worked seconds across all results.
    pub total_seconds: i64,
    /// Sum of hours across all results.
    pub total_hours: Decimal,
    /// Sum of pay across all results.
    pub total_pay: Decimal,
}

impl AggregationReport {
    /// Looks up the totals for one employee.
    pub fn for_employee(&self, employee_id: &str) -> Option<&AggregationResult> {
        self.results.iter().find(|r| r.employee_id == employee_id)
    }
}
