//! In-memory record store.
//!
//! Backs the server, tests and benchmarks. Tables sit behind a single
//! [`RwLock`]: queries share the read lock, and writes take the write lock so
//! uniqueness checks and inserts happen atomically.

use std::collections::BTreeMap;
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use chrono::NaiveDate;
use tracing::debug;

use crate::error::{DashboardError, DashboardResult};
use crate::models::{
    AttendanceRecord, AttritionRecord, Employee, EmployeeStatus, LeaveRecord,
};

use super::{EntityKind, RecordFilter, RecordStore, SumField};

#[derive(Debug, Default)]
struct Tables {
    employees: BTreeMap<String, Employee>,
    attendance: BTreeMap<(String, NaiveDate), AttendanceRecord>,
    leaves: Vec<LeaveRecord>,
    attrition: BTreeMap<String, AttritionRecord>,
}

impl Tables {
    fn require_employee(&self, employee_id: &str) -> DashboardResult<()> {
        if self.employees.contains_key(employee_id) {
            Ok(())
        } else {
            Err(DashboardError::employee_not_found(employee_id))
        }
    }

    fn matching_employees<'a>(
        &'a self,
        filter: &'a RecordFilter,
    ) -> impl Iterator<Item = &'a Employee> + 'a {
        self.employees
            .values()
            .filter(move |employee| filter.matches_employee(employee))
    }

    fn matching_attendance<'a>(
        &'a self,
        filter: &'a RecordFilter,
    ) -> impl Iterator<Item = &'a AttendanceRecord> + 'a {
        self.attendance.values().filter(move |record| {
            filter.matches_attendance(record, self.employees.get(&record.employee_id))
        })
    }

    fn matching_leaves<'a>(
        &'a self,
        filter: &'a RecordFilter,
    ) -> impl Iterator<Item = &'a LeaveRecord> + 'a {
        self.leaves
            .iter()
            .filter(move |leave| filter.matches_leave(leave, self.employees.get(&leave.employee_id)))
    }

    fn matching_attrition<'a>(
        &'a self,
        filter: &'a RecordFilter,
    ) -> impl Iterator<Item = &'a AttritionRecord> + 'a {
        self.attrition.values().filter(move |record| {
            filter.matches_attrition(record, self.employees.get(&record.employee_id))
        })
    }
}

/// A thread-safe, create-only record store held in memory.
///
/// Writes enforce the record invariants:
///
/// - employee ids are unique
/// - one attendance row per employee per day
/// - leave `start_date <= end_date` and a positive `duration`
/// - at most one attrition record per employee; recording it marks the
///   employee inactive
///
/// # Example
///
/// ```
/// use hr_dashboard::models::{Employee, EmployeeStatus};
/// use hr_dashboard::store::{InMemoryStore, RecordFilter, RecordStore};
/// use chrono::NaiveDate;
///
/// let store = InMemoryStore::new();
/// store.insert_employee(Employee {
///     id: "FIN-001".to_string(),
///     name: "Meera Nair".to_string(),
///     department: "Finance".to_string(),
///     join_date: NaiveDate::from_ymd_opt(2023, 2, 1).unwrap(),
///     status: EmployeeStatus::Active,
/// })?;
///
/// assert_eq!(store.employees(&RecordFilter::new())?.len(), 1);
/// # Ok::<(), hr_dashboard::error::DashboardError>(())
/// ```
#[derive(Debug, Default)]
pub struct InMemoryStore {
    tables: RwLock<Tables>,
}

impl InMemoryStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    fn read(&self) -> DashboardResult<RwLockReadGuard<'_, Tables>> {
        self.tables.read().map_err(|_| DashboardError::Store {
            message: "record tables lock poisoned".to_string(),
        })
    }

    fn write(&self) -> DashboardResult<RwLockWriteGuard<'_, Tables>> {
        self.tables.write().map_err(|_| DashboardError::Store {
            message: "record tables lock poisoned".to_string(),
        })
    }

    /// Adds an employee. Fails with `Conflict` when the id is taken.
    pub fn insert_employee(&self, employee: Employee) -> DashboardResult<()> {
        let mut tables = self.write()?;
        if tables.employees.contains_key(&employee.id) {
            return Err(DashboardError::Conflict {
                message: format!("employee '{}' already exists", employee.id),
            });
        }
        debug!(employee_id = %employee.id, department = %employee.department, "Inserted employee");
        tables.employees.insert(employee.id.clone(), employee);
        Ok(())
    }

    /// Adds an attendance row. Fails with `Conflict` when the employee
    /// already has a row for that day.
    pub fn record_attendance(&self, record: AttendanceRecord) -> DashboardResult<()> {
        let mut tables = self.write()?;
        tables.require_employee(&record.employee_id)?;
        let key = (record.employee_id.clone(), record.date);
        if tables.attendance.contains_key(&key) {
            return Err(DashboardError::Conflict {
                message: format!(
                    "attendance for '{}' on {} already recorded",
                    record.employee_id, record.date
                ),
            });
        }
        tables.attendance.insert(key, record);
        Ok(())
    }

    /// Adds a leave row. An inverted date range or a zero duration is
    /// rejected rather than stored.
    pub fn record_leave(&self, leave: LeaveRecord) -> DashboardResult<()> {
        if leave.start_date > leave.end_date {
            return Err(DashboardError::validation(
                "start_date",
                "Start date must be before end date",
            ));
        }
        if leave.duration == 0 {
            return Err(DashboardError::validation(
                "duration",
                "Duration must be a positive integer",
            ));
        }
        let mut tables = self.write()?;
        tables.require_employee(&leave.employee_id)?;
        tables.leaves.push(leave);
        Ok(())
    }

    /// Records an employee's exit and marks them inactive. Fails with
    /// `Conflict` when the employee already has an exit on record.
    pub fn record_exit(&self, record: AttritionRecord) -> DashboardResult<()> {
        let mut tables = self.write()?;
        tables.require_employee(&record.employee_id)?;
        if tables.attrition.contains_key(&record.employee_id) {
            return Err(DashboardError::Conflict {
                message: format!("employee '{}' has already exited", record.employee_id),
            });
        }
        if let Some(employee) = tables.employees.get_mut(&record.employee_id) {
            employee.status = EmployeeStatus::Inactive;
        }
        debug!(
            employee_id = %record.employee_id,
            exit_date = %record.exit_date,
            reason = %record.reason,
            "Recorded exit"
        );
        tables.attrition.insert(record.employee_id.clone(), record);
        Ok(())
    }
}

impl RecordStore for InMemoryStore {
    fn employees(&self, filter: &RecordFilter) -> DashboardResult<Vec<Employee>> {
        let tables = self.read()?;
        Ok(tables.matching_employees(filter).cloned().collect())
    }

    fn attendance(&self, filter: &RecordFilter) -> DashboardResult<Vec<AttendanceRecord>> {
        let tables = self.read()?;
        let mut rows: Vec<AttendanceRecord> = tables.matching_attendance(filter).cloned().collect();
        rows.sort_by(|a, b| b.date.cmp(&a.date).then_with(|| a.employee_id.cmp(&b.employee_id)));
        Ok(rows)
    }

    fn leaves(&self, filter: &RecordFilter) -> DashboardResult<Vec<LeaveRecord>> {
        let tables = self.read()?;
        let mut rows: Vec<LeaveRecord> = tables.matching_leaves(filter).cloned().collect();
        rows.sort_by(|a, b| b.start_date.cmp(&a.start_date));
        Ok(rows)
    }

    fn attrition(&self, filter: &RecordFilter) -> DashboardResult<Vec<AttritionRecord>> {
        let tables = self.read()?;
        let mut rows: Vec<AttritionRecord> = tables.matching_attrition(filter).cloned().collect();
        rows.sort_by(|a, b| b.exit_date.cmp(&a.exit_date));
        Ok(rows)
    }

    fn employee(&self, id: &str) -> DashboardResult<Option<Employee>> {
        Ok(self.read()?.employees.get(id).cloned())
    }

    fn count(&self, kind: EntityKind, filter: &RecordFilter) -> DashboardResult<u64> {
        let tables = self.read()?;
        let count = match kind {
            EntityKind::Employee => tables.matching_employees(filter).count(),
            EntityKind::Attendance => tables.matching_attendance(filter).count(),
            EntityKind::Leave => tables.matching_leaves(filter).count(),
            EntityKind::Attrition => tables.matching_attrition(filter).count(),
        };
        Ok(count as u64)
    }

    fn sum(&self, field: SumField, filter: &RecordFilter) -> DashboardResult<u64> {
        let tables = self.read()?;
        match field {
            SumField::LeaveDuration => Ok(tables
                .matching_leaves(filter)
                .map(|leave| u64::from(leave.duration))
                .sum()),
        }
    }
}
