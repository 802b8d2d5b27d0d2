//! Shift store.
//!
//! The authoritative collection of shift records. The store assigns
//! identities, validates structure and keeps a version stamp, but it never
//! checks for overlaps or leave; those are query-time concerns of the
//! conflict engine.

use tracing::{debug, info, warn};
use uuid::Uuid;

use crate::error::{EngineError, EngineResult};
use crate::models::{CopyPlan, NewShift, Shift};

use super::roster::Roster;

/// The collection of stored shifts.
///
/// Every successful mutation increments [`ShiftStore::version`], which lets a
/// caller detect that a plan was computed against an older snapshot.
///
/// # Example
///
/// ```
/// use roster_engine::models::{Employee, NewShift};
/// use roster_engine::scheduling::{Roster, ShiftStore};
/// use chrono::{NaiveDate, NaiveTime};
/// use rust_decimal::Decimal;
///
/// let roster = Roster::from_employees(vec![Employee {
///     id: "emp_001".to_string(),
///     name: "Alice Johnson".to_string(),
///     pay_rate: Decimal::new(25, 0),
///     position: "Senior Caregiver".to_string(),
///     hire_date: NaiveDate::from_ymd_opt(2022, 8, 15).unwrap(),
/// }]);
///
/// let mut store = ShiftStore::new();
/// let shift = store.add(
///     NewShift::from_clock(
///         "emp_001",
///         NaiveDate::from_ymd_opt(2024, 3, 1).unwrap(),
///         NaiveTime::from_hms_opt(8, 0, 0).unwrap(),
///         NaiveTime::from_hms_opt(16, 0, 0).unwrap(),
///     ),
///     &roster,
/// )?;
/// assert_eq!(store.get(&shift.id), Some(&shift));
/// assert_eq!(store.version(), 1);
/// # Ok::<(), roster_engine::error::EngineError>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct ShiftStore {
    shifts: Vec<Shift>,
    version: u64,
}

impl ShiftStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Wraps shifts that were produced by a store and are already valid.
    pub fn from_shifts(shifts: Vec<Shift>) -> Self {
        Self { shifts, version: 0 }
    }

    /// Restores a snapshot persisted together with its version stamp.
    ///
    /// Every record is validated first; a reversed or over-long shift
    /// rejects the whole snapshot.
    pub fn from_snapshot(shifts: Vec<Shift>, version: u64) -> EngineResult<Self> {
        Self::validate_snapshot(&shifts)?;
        Ok(Self { shifts, version })
    }

    /// Checks every shift of an externally supplied snapshot.
    pub fn validate_snapshot(shifts: &[Shift]) -> EngineResult<()> {
        for (index, shift) in shifts.iter().enumerate() {
            if let Err(err) = shift.validate() {
                warn!(snapshot_index = index, snapshot_size = shifts.len(), error = %err, "Shift snapshot rejected");
                return Err(err);
            }
        }
        Ok(())
    }

    /// All stored shifts, in insertion order.
    pub fn shifts(&self) -> &[Shift] {
        &self.shifts
    }

    /// Consumes the store, returning the snapshot for persistence.
    pub fn into_shifts(self) -> Vec<Shift> {
        self.shifts
    }

    /// The number of successful mutations applied to this store.
    pub fn version(&self) -> u64 {
        self.version
    }

    /// Looks up a shift by identifier.
    pub fn get(&self, shift_id: &str) -> Option<&Shift> {
        self.shifts.iter().find(|s| s.id == shift_id)
    }

    /// All shifts of one employee.
    pub fn shifts_for(&self, employee_id: &str) -> Vec<&Shift> {
        self.shifts
            .iter()
            .filter(|s| s.employee_id == employee_id)
            .collect()
    }

    fn check_employee(employee_id: &str, roster: &Roster) -> EngineResult<()> {
        if !roster.contains(employee_id) {
            return Err(EngineError::UnknownEmployee {
                employee_id: employee_id.to_string(),
            });
        }
        Ok(())
    }

    fn validate_new(shift: &NewShift, roster: &Roster) -> EngineResult<()> {
        shift.validate()?;
        Self::check_employee(&shift.employee_id, roster)
    }

    /// Validates and stores a new shift under a fresh identifier.
    ///
    /// Overlapping shifts are accepted; see the conflict engine for detection.
    pub fn add(&mut self, shift: NewShift, roster: &Roster) -> EngineResult<Shift> {
        Self::validate_new(&shift, roster)?;
        let stored = shift.into_shift(Uuid::new_v4().to_string());
        debug!(
            shift_id = %stored.id,
            employee_id = %stored.employee_id,
            start_time = %stored.start_time,
            end_time = %stored.end_time,
            "Shift added"
        );
        self.shifts.push(stored.clone());
        self.version += 1;
        Ok(stored)
    }

    /// Stores a batch of shifts atomically.
    ///
    /// Every shift is validated before any is stored; one invalid shift
    /// rejects the whole batch and leaves the store untouched.
    pub fn add_bulk(&mut self, shifts: Vec<NewShift>, roster: &Roster) -> EngineResult<Vec<Shift>> {
        for (index, shift) in shifts.iter().enumerate() {
            if let Err(err) = Self::validate_new(shift, roster) {
                warn!(batch_index = index, batch_size = shifts.len(), error = %err, "Shift batch rejected");
                return Err(err);
            }
        }
        if shifts.is_empty() {
            return Ok(Vec::new());
        }

        let stored: Vec<Shift> = shifts
            .into_iter()
            .map(|shift| shift.into_shift(Uuid::new_v4().to_string()))
            .collect();
        self.shifts.extend(stored.iter().cloned());
        self.version += 1;
        info!(count = stored.len(), version = self.version, "Shift batch added");
        Ok(stored)
    }

    /// Replaces the stored shift with the same identifier.
    pub fn update(&mut self, shift: Shift, roster: &Roster) -> EngineResult<Shift> {
        shift.validate()?;
        Self::check_employee(&shift.employee_id, roster)?;
        let slot = self
            .shifts
            .iter_mut()
            .find(|s| s.id == shift.id)
            .ok_or_else(|| EngineError::ShiftNotFound {
                shift_id: shift.id.clone(),
            })?;
        *slot = shift.clone();
        self.version += 1;
        debug!(shift_id = %shift.id, "Shift updated");
        Ok(shift)
    }

    /// Removes a shift. Deleting an unknown identifier is a silent no-op.
    ///
    /// Returns true if a shift was removed.
    pub fn delete(&mut self, shift_id: &str) -> bool {
        let before = self.shifts.len();
        self.shifts.retain(|s| s.id != shift_id);
        let removed = self.shifts.len() != before;
        if removed {
            self.version += 1;
            debug!(shift_id = %shift_id, "Shift deleted");
        }
        removed
    }

    /// Removes every shift of an employee, returning how many were removed.
    pub fn delete_all_for_employee(&mut self, employee_id: &str) -> usize {
        let before = self.shifts.len();
        self.shifts.retain(|s| s.employee_id != employee_id);
        let removed = before - self.shifts.len();
        if removed > 0 {
            self.version += 1;
        }
        removed
    }

    /// Applies a copy plan as one atomic batch.
    ///
    /// Fails with `StaleSnapshot` if the store has changed since the plan
    /// was computed, so the caller can re-plan and re-confirm.
    pub fn apply_copy_plan(&mut self, plan: CopyPlan, roster: &Roster) -> EngineResult<Vec<Shift>> {
        if plan.store_version != self.version {
            warn!(
                expected = plan.store_version,
                actual = self.version,
                "Copy plan is stale"
            );
            return Err(EngineError::StaleSnapshot {
                expected: plan.store_version,
                actual: self.version,
            });
        }
        self.add_bulk(plan.shifts, roster)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Employee;
    use chrono::{Duration, NaiveDate, NaiveDateTime, NaiveTime};
    use rust_decimal::Decimal;
    use std::collections::HashSet;

    fn make_date(date_str: &str) -> NaiveDate {
        NaiveDate::parse_from_str(date_str, "%Y-%m-%d").unwrap()
    }

    fn make_datetime(date_str: &str, time_str: &str) -> NaiveDateTime {
        NaiveDateTime::parse_from_str(&format!("{} {}", date_str, time_str), "%Y-%m-%d %H:%M:%S")
            .unwrap()
    }

    fn clock(h: u32) -> NaiveTime {
        NaiveTime::from_hms_opt(h, 0, 0).unwrap()
    }

    fn test_roster() -> Roster {
        Roster::from_employees(vec![
            Employee {
                id: "emp_001".to_string(),
                name: "Alice Johnson".to_string(),
                pay_rate: Decimal::new(25, 0),
                position: "Senior Caregiver".to_string(),
                hire_date: make_date("2022-08-15"),
            },
            Employee {
                id: "emp_002".to_string(),
                name: "Bob Williams".to_string(),
                pay_rate: Decimal::new(22, 0),
                position: "Caregiver".to_string(),
                hire_date: make_date("2023-01-20"),
            },
        ])
    }

    fn day_shift(employee_id: &str, date: &str) -> NewShift {
        NewShift::from_clock(employee_id, make_date(date), clock(7), clock(15))
    }

    #[test]
    fn test_add_assigns_unique_ids() {
        let roster = test_roster();
        let mut store = ShiftStore::new();
        let a = store.add(day_shift("emp_001", "2024-03-01"), &roster).unwrap();
        let b = store.add(day_shift("emp_001", "2024-03-02"), &roster).unwrap();
        assert_ne!(a.id, b.id);
        assert_eq!(store.shifts().len(), 2);
        assert_eq!(store.version(), 2);
    }

    #[test]
    fn test_add_rejects_unknown_employee() {
        let roster = test_roster();
        let mut store = ShiftStore::new();
        let result = store.add(day_shift("emp_999", "2024-03-01"), &roster);
        assert!(matches!(result, Err(EngineError::UnknownEmployee { .. })));
        assert!(store.shifts().is_empty());
        assert_eq!(store.version(), 0);
    }

    #[test]
    fn test_add_rejects_reversed_interval() {
        let roster = test_roster();
        let mut store = ShiftStore::new();
        let shift = NewShift {
            employee_id: "emp_001".to_string(),
            start_time: make_datetime("2024-03-01", "15:00:00"),
            end_time: make_datetime("2024-03-01", "07:00:00"),
        };
        assert!(matches!(
            store.add(shift, &roster),
            Err(EngineError::InvalidShift { .. })
        ));
    }

    #[test]
    fn test_add_accepts_overlapping_shift() {
        let roster = test_roster();
        let mut store = ShiftStore::new();
        store.add(day_shift("emp_001", "2024-03-01"), &roster).unwrap();
        store.add(day_shift("emp_001", "2024-03-01"), &roster).unwrap();
        assert_eq!(store.shifts().len(), 2);
    }

    #[test]
    fn test_add_bulk_is_all_or_nothing() {
        let roster = test_roster();
        let mut store = ShiftStore::new();
        store.add(day_shift("emp_001", "2024-03-01"), &roster).unwrap();

        let result = store.add_bulk(
            vec![
                day_shift("emp_001", "2024-03-02"),
                day_shift("emp_999", "2024-03-03"),
                day_shift("emp_002", "2024-03-04"),
            ],
            &roster,
        );
        assert!(matches!(result, Err(EngineError::UnknownEmployee { .. })));
        assert_eq!(store.shifts().len(), 1);
        assert_eq!(store.version(), 1);
    }

    #[test]
    fn test_add_bulk_stores_all() {
        let roster = test_roster();
        let mut store = ShiftStore::new();
        let stored = store
            .add_bulk(
                vec![
                    day_shift("emp_001", "2024-03-02"),
                    day_shift("emp_002", "2024-03-02"),
                ],
                &roster,
            )
            .unwrap();
        assert_eq!(stored.len(), 2);
        let ids: HashSet<_> = stored.iter().map(|s| s.id.clone()).collect();
        assert_eq!(ids.len(), 2);
        assert_eq!(store.version(), 1);
    }

    #[test]
    fn test_add_bulk_empty_batch_is_noop() {
        let roster = test_roster();
        let mut store = ShiftStore::new();
        assert!(store.add_bulk(vec![], &roster).unwrap().is_empty());
        assert_eq!(store.version(), 0);
    }

    #[test]
    fn test_update_replaces_shift() {
        let roster = test_roster();
        let mut store = ShiftStore::new();
        let mut shift = store.add(day_shift("emp_001", "2024-03-01"), &roster).unwrap();
        shift.end_time = shift.end_time + Duration::hours(1);
        store.update(shift.clone(), &roster).unwrap();
        assert_eq!(store.get(&shift.id).unwrap().end_time, shift.end_time);
    }

    #[test]
    fn test_update_unknown_shift() {
        let roster = test_roster();
        let mut store = ShiftStore::new();
        let shift = day_shift("emp_001", "2024-03-01").into_shift("missing".to_string());
        assert!(matches!(
            store.update(shift, &roster),
            Err(EngineError::ShiftNotFound { .. })
        ));
    }

    #[test]
    fn test_update_rejects_invalid_interval() {
        let roster = test_roster();
        let mut store = ShiftStore::new();
        let mut shift = store.add(day_shift("emp_001", "2024-03-01"), &roster).unwrap();
        shift.end_time = shift.start_time;
        assert!(matches!(
            store.update(shift, &roster),
            Err(EngineError::InvalidShift { .. })
        ));
    }

    #[test]
    fn test_delete_missing_is_silent() {
        let roster = test_roster();
        let mut store = ShiftStore::new();
        let shift = store.add(day_shift("emp_001", "2024-03-01"), &roster).unwrap();
        assert!(!store.delete("missing"));
        assert_eq!(store.version(), 1);
        assert!(store.delete(&shift.id));
        assert!(store.shifts().is_empty());
        assert!(!store.delete(&shift.id));
    }

    #[test]
    fn test_delete_all_for_employee() {
        let roster = test_roster();
        let mut store = ShiftStore::new();
        store
            .add_bulk(
                vec![
                    day_shift("emp_001", "2024-03-01"),
                    day_shift("emp_001", "2024-03-02"),
                    day_shift("emp_002", "2024-03-01"),
                ],
                &roster,
            )
            .unwrap();
        assert_eq!(store.delete_all_for_employee("emp_001"), 2);
        assert_eq!(store.shifts_for("emp_001").len(), 0);
        assert_eq!(store.shifts_for("emp_002").len(), 1);
        assert_eq!(store.delete_all_for_employee("emp_001"), 0);
    }

    #[test]
    fn test_from_snapshot_keeps_version() {
        let store = ShiftStore::from_snapshot(Vec::new(), 7).unwrap();
        assert_eq!(store.version(), 7);
        assert!(store.shifts().is_empty());
    }

    #[test]
    fn test_from_snapshot_rejects_reversed_shift() {
        let snapshot = vec![
            Shift {
                id: "ok".to_string(),
                employee_id: "emp_001".to_string(),
                start_time: make_datetime("2024-03-01", "08:00:00"),
                end_time: make_datetime("2024-03-01", "16:00:00"),
            },
            Shift {
                id: "bad".to_string(),
                employee_id: "emp_001".to_string(),
                start_time: make_datetime("2024-03-02", "16:00:00"),
                end_time: make_datetime("2024-03-02", "08:00:00"),
            },
        ];
        match ShiftStore::from_snapshot(snapshot, 3) {
            Err(EngineError::InvalidShift { shift_id, .. }) => assert_eq!(shift_id, "bad"),
            other => panic!("Expected InvalidShift, got {:?}", other),
        }
    }

    #[test]
    fn test_from_snapshot_rejects_multi_day_shift() {
        let snapshot = vec![Shift {
            id: "century".to_string(),
            employee_id: "emp_001".to_string(),
            start_time: make_datetime("2024-03-01", "08:00:00"),
            end_time: make_datetime("2124-03-01", "08:00:00"),
        }];
        assert!(matches!(
            ShiftStore::validate_snapshot(&snapshot),
            Err(EngineError::InvalidShift { .. })
        ));
    }
}
