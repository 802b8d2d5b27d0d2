//! Worked-hour and payroll aggregation.
//!
//! A shift is attributed entirely to the period containing its start time,
//! so an overnight shift is never split across two reports. Durations are
//! summed as whole seconds and converted to hours and pay once per
//! employee, keeping the sum of disjoint periods equal to the whole.

use std::collections::BTreeMap;

use rust_decimal::Decimal;
use tracing::debug;

use crate::models::{AggregationReport, AggregationResult, EmployeeSelection, Period, Shift};

use super::interval::{SECONDS_PER_HOUR, seconds_to_hours};
use super::roster::Roster;

/// Totals worked hours and pay per employee over a period.
///
/// Only shifts whose start falls in `[period.start, period.end)` and whose
/// employee is both selected and on the roster are counted. Employees with
/// no counted time are left out. Results are ordered by total pay
/// descending, then by name and identifier ascending.
///
/// # Example
///
/// ```
/// use roster_engine::models::{Employee, EmployeeSelection, Period, Shift};
/// use roster_engine::scheduling::{Roster, aggregate};
/// use chrono::{NaiveDate, NaiveDateTime};
/// use rust_decimal::Decimal;
///
/// let roster = Roster::from_employees(vec![Employee {
///     id: "emp_001".to_string(),
///     name: "Charlie Brown".to_string(),
///     pay_rate: Decimal::new(20, 0),
///     position: "Caregiver".to_string(),
///     hire_date: NaiveDate::from_ymd_opt(2021, 11, 1).unwrap(),
/// }]);
/// let shifts = vec![Shift {
///     id: "shift_001".to_string(),
///     employee_id: "emp_001".to_string(),
///     start_time: NaiveDateTime::parse_from_str("2024-03-01 08:00:00", "%Y-%m-%d %H:%M:%S").unwrap(),
///     end_time: NaiveDateTime::parse_from_str("2024-03-01 16:00:00", "%Y-%m-%d %H:%M:%S").unwrap(),
/// }];
///
/// let report = aggregate(&shifts, &roster, &EmployeeSelection::All, &Period::month(2024, 3).unwrap());
/// assert_eq!(report.results[0].total_hours, Decimal::new(8, 0));
/// assert_eq!(report.results[0].rounded_pay(2), Decimal::new(16000, 2));
/// ```
pub fn aggregate(
    shifts: &[Shift],
    roster: &Roster,
    selection: &EmployeeSelection,
    period: &Period,
) -> AggregationReport {
    let mut seconds_by_employee: BTreeMap<&str, i64> = BTreeMap::new();
    for shift in shifts
        .iter()
        .filter(|s| period.contains(s.start_time) && selection.includes(&s.employee_id))
    {
        // Reversed shifts are rejected when a snapshot is restored; one that
        // slips through must not cancel out real worked time.
        let seconds = shift.duration().num_seconds();
        if seconds <= 0 {
            continue;
        }
        *seconds_by_employee
            .entry(shift.employee_id.as_str())
            .or_insert(0) += seconds;
    }

    let seconds_per_hour = Decimal::from(SECONDS_PER_HOUR);
    let mut results: Vec<AggregationResult> = seconds_by_employee
        .into_iter()
        .filter_map(|(employee_id, seconds)| {
            let employee = roster.get(employee_id)?;
            Some(AggregationResult {
                employee_id: employee.id.clone(),
                employee_name: employee.name.clone(),
                total_seconds: seconds,
                total_hours: seconds_to_hours(seconds),
                total_pay: Decimal::from(seconds) * employee.pay_rate / seconds_per_hour,
            })
        })
        .collect();

    results.sort_by(|a, b| {
        b.total_pay
            .cmp(&a.total_pay)
            .then_with(|| a.employee_name.cmp(&b.employee_name))
            .then_with(|| a.employee_id.cmp(&b.employee_id))
    });

    let total_seconds: i64 = results.iter().map(|r| r.total_seconds).sum();
    let total_pay: Decimal = results.iter().map(|r| r.total_pay).sum();
    debug!(
        period_start = %period.start,
        period_end = %period.end,
        employees = results.len(),
        total_seconds,
        "Payroll aggregated"
    );

    AggregationReport {
        period: *period,
        results,
        total_seconds,
        total_hours: seconds_to_hours(total_seconds),
        total_pay,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Employee, PeriodKind, round_currency};
    use chrono::{NaiveDate, NaiveDateTime, Weekday};

    fn make_datetime(date_str: &str, time_str: &str) -> NaiveDateTime {
        NaiveDateTime::parse_from_str(&format!("{} {}", date_str, time_str), "%Y-%m-%d %H:%M:%S")
            .unwrap()
    }

    fn make_date(date_str: &str) -> NaiveDate {
        NaiveDate::parse_from_str(date_str, "%Y-%m-%d").unwrap()
    }

    fn employee(id: &str, name: &str, rate: i64) -> Employee {
        Employee {
            id: id.to_string(),
            name: name.to_string(),
            pay_rate: Decimal::new(rate, 0),
            position: "Caregiver".to_string(),
            hire_date: make_date("2022-01-01"),
        }
    }

    fn shift(id: &str, employee_id: &str, start: (&str, &str), end: (&str, &str)) -> Shift {
        Shift {
            id: id.to_string(),
            employee_id: employee_id.to_string(),
            start_time: make_datetime(start.0, start.1),
            end_time: make_datetime(end.0, end.1),
        }
    }

    fn test_roster() -> Roster {
        Roster::from_employees(vec![
            employee("emp_001", "Alice Johnson", 25),
            employee("emp_002", "Bob Williams", 20),
            employee("emp_003", "Charlie Brown", 20),
        ])
    }

    #[test]
    fn test_single_day_shift_march() {
        let roster = Roster::from_employees(vec![employee("emp_003", "Charlie Brown", 20)]);
        let shifts = vec![shift(
            "s1",
            "emp_003",
            ("2024-03-01", "08:00:00"),
            ("2024-03-01", "16:00:00"),
        )];
        let report = aggregate(
            &shifts,
            &roster,
            &EmployeeSelection::All,
            &Period::month(2024, 3).unwrap(),
        );
        assert_eq!(report.results.len(), 1);
        assert_eq!(report.results[0].total_hours, Decimal::new(8, 0));
        assert_eq!(report.results[0].rounded_pay(2), Decimal::new(16000, 2));
        assert_eq!(report.total_pay, Decimal::new(160, 0));
    }

    #[test]
    fn test_overnight_shift_attributed_to_start_period() {
        let roster = test_roster();
        let shifts = vec![shift(
            "night",
            "emp_003",
            ("2024-03-31", "23:00:00"),
            ("2024-04-01", "07:00:00"),
        )];
        let march = aggregate(
            &shifts,
            &roster,
            &EmployeeSelection::All,
            &Period::month(2024, 3).unwrap(),
        );
        let april = aggregate(
            &shifts,
            &roster,
            &EmployeeSelection::All,
            &Period::month(2024, 4).unwrap(),
        );
        assert_eq!(march.total_hours, Decimal::new(8, 0));
        assert!(april.results.is_empty());
        assert_eq!(april.total_hours, Decimal::ZERO);
    }

    #[test]
    fn test_sorted_by_pay_then_name() {
        let roster = test_roster();
        let shifts = vec![
            shift("a", "emp_001", ("2024-03-01", "08:00:00"), ("2024-03-01", "16:00:00")),
            shift("b", "emp_003", ("2024-03-02", "08:00:00"), ("2024-03-02", "16:00:00")),
            shift("c", "emp_002", ("2024-03-03", "08:00:00"), ("2024-03-03", "16:00:00")),
        ];
        let report = aggregate(
            &shifts,
            &roster,
            &EmployeeSelection::All,
            &Period::month(2024, 3).unwrap(),
        );
        let names: Vec<&str> = report
            .results
            .iter()
            .map(|r| r.employee_name.as_str())
            .collect();
        // Alice earns 200; Bob and Charlie tie on 160 and sort by name.
        assert_eq!(names, vec!["Alice Johnson", "Bob Williams", "Charlie Brown"]);
    }

    #[test]
    fn test_selection_limits_employees() {
        let roster = test_roster();
        let shifts = vec![
            shift("a", "emp_001", ("2024-03-01", "08:00:00"), ("2024-03-01", "16:00:00")),
            shift("b", "emp_002", ("2024-03-01", "08:00:00"), ("2024-03-01", "16:00:00")),
        ];
        let selection = EmployeeSelection::Only(vec!["emp_002".to_string()]);
        let report = aggregate(&shifts, &roster, &selection, &Period::day(make_date("2024-03-01")).unwrap());
        assert_eq!(report.results.len(), 1);
        assert_eq!(report.results[0].employee_id, "emp_002");
        assert_eq!(report.total_pay, Decimal::new(160, 0));
    }

    #[test]
    fn test_unknown_employee_shifts_ignored() {
        let roster = test_roster();
        let shifts = vec![shift(
            "ghost",
            "emp_999",
            ("2024-03-01", "08:00:00"),
            ("2024-03-01", "16:00:00"),
        )];
        let report = aggregate(&shifts, &roster, &EmployeeSelection::All, &Period::year(2024).unwrap());
        assert!(report.results.is_empty());
        assert_eq!(report.total_hours, Decimal::ZERO);
    }

    #[test]
    fn test_hours_summed_across_shifts() {
        let roster = test_roster();
        let shifts = vec![
            shift("a", "emp_001", ("2024-03-04", "07:00:00"), ("2024-03-04", "15:00:00")),
            shift("b", "emp_001", ("2024-03-05", "07:00:00"), ("2024-03-05", "11:30:00")),
        ];
        let period = Period::containing(PeriodKind::Week, make_date("2024-03-05"), Weekday::Sun).unwrap();
        let report = aggregate(&shifts, &roster, &EmployeeSelection::All, &period);
        let alice = report.for_employee("emp_001").unwrap();
        assert_eq!(alice.total_hours, Decimal::new(125, 1));
        assert_eq!(alice.total_pay, Decimal::new(3125, 1));
    }

    #[test]
    fn test_period_end_is_exclusive() {
        let roster = test_roster();
        let shifts = vec![shift(
            "midnight",
            "emp_001",
            ("2024-04-01", "00:00:00"),
            ("2024-04-01", "08:00:00"),
        )];
        let march = aggregate(
            &shifts,
            &roster,
            &EmployeeSelection::All,
            &Period::month(2024, 3).unwrap(),
        );
        assert!(march.results.is_empty());
    }

    #[test]
    fn test_reversed_shift_does_not_cancel_worked_time() {
        let roster = test_roster();
        let shifts = vec![
            shift("ok", "emp_001", ("2024-03-01", "08:00:00"), ("2024-03-01", "16:00:00")),
            shift("bad", "emp_001", ("2024-03-02", "16:00:00"), ("2024-03-02", "08:00:00")),
        ];
        let report = aggregate(
            &shifts,
            &roster,
            &EmployeeSelection::All,
            &Period::month(2024, 3).unwrap(),
        );
        let alice = report.for_employee("emp_001").unwrap();
        assert_eq!(alice.total_seconds, 8 * 3600);
        assert_eq!(alice.total_hours, Decimal::new(8, 0));
    }

    #[test]
    fn test_year_seconds_equal_sum_of_months() {
        let roster = test_roster();
        let shifts = vec![
            shift("jan", "emp_001", ("2024-01-10", "08:00:00"), ("2024-01-10", "08:00:01")),
            shift("feb", "emp_001", ("2024-02-10", "08:00:00"), ("2024-02-10", "08:00:01")),
            shift("mar", "emp_001", ("2024-03-10", "08:00:00"), ("2024-03-10", "08:00:01")),
        ];
        let all = EmployeeSelection::All;
        let year = aggregate(&shifts, &roster, &all, &Period::year(2024).unwrap());
        let months: Vec<AggregationReport> = (1..=12)
            .map(|m| aggregate(&shifts, &roster, &all, &Period::month(2024, m).unwrap()))
            .collect();

        assert_eq!(year.total_seconds, 3);
        assert_eq!(months.iter().map(|r| r.total_seconds).sum::<i64>(), 3);
        let month_pay: Decimal = months.iter().map(|r| r.total_pay).sum();
        assert_eq!(round_currency(year.total_pay, 2), round_currency(month_pay, 2));
        // 3s at $25/h is 1/48 of a dollar
        assert_eq!(round_currency(year.total_pay, 2), Decimal::new(2, 2));
    }
}
