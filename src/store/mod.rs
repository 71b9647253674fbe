//! Record store interface.
//!
//! The KPI engine never touches storage directly. It asks a [`RecordStore`]
//! for rows matching a [`RecordFilter`] and for simple aggregates over them.
//! The aggregate methods have default implementations built on the row
//! queries, so a store only has to implement the four row queries; a
//! database-backed store can override the aggregates with native queries.

mod filter;
mod memory;

use std::collections::{BTreeMap, HashMap};

use crate::error::{DashboardError, DashboardResult};
use crate::models::{AttendanceRecord, AttritionRecord, Employee, LeaveRecord};

pub use filter::RecordFilter;
pub use memory::InMemoryStore;

/// The kinds of record held by the store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntityKind {
    /// Employee master data.
    Employee,
    /// Daily attendance rows.
    Attendance,
    /// Leave rows.
    Leave,
    /// Exit rows.
    Attrition,
}

/// Numeric fields that can be summed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SumField {
    /// The stored `duration` of leave rows.
    LeaveDuration,
}

/// Fields that rows can be grouped by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GroupField {
    /// The (joined) employee's department.
    Department,
    /// Employee status, or attendance status for attendance rows.
    Status,
    /// Leave type of leave rows.
    LeaveType,
    /// Exit reason of attrition rows.
    Reason,
}

/// Read access to employee, attendance, leave and attrition records.
///
/// Implementations must be safe to query from many threads at once.
pub trait RecordStore: Send + Sync {
    /// Employees matching the filter, ordered by id.
    fn employees(&self, filter: &RecordFilter) -> DashboardResult<Vec<Employee>>;

    /// Attendance rows matching the filter, newest first.
    fn attendance(&self, filter: &RecordFilter) -> DashboardResult<Vec<AttendanceRecord>>;

    /// Leave rows matching the filter, newest start date first.
    fn leaves(&self, filter: &RecordFilter) -> DashboardResult<Vec<LeaveRecord>>;

    /// Attrition rows matching the filter, newest exit first.
    fn attrition(&self, filter: &RecordFilter) -> DashboardResult<Vec<AttritionRecord>>;

    /// Looks up a single employee by id.
    fn employee(&self, id: &str) -> DashboardResult<Option<Employee>> {
        let filter = RecordFilter::new().for_employee(id);
        Ok(self.employees(&filter)?.into_iter().next())
    }

    /// Counts rows of `kind` matching the filter.
    fn count(&self, kind: EntityKind, filter: &RecordFilter) -> DashboardResult<u64> {
        let count = match kind {
            EntityKind::Employee => self.employees(filter)?.len(),
            EntityKind::Attendance => self.attendance(filter)?.len(),
            EntityKind::Leave => self.leaves(filter)?.len(),
            EntityKind::Attrition => self.attrition(filter)?.len(),
        };
        Ok(count as u64)
    }

    /// Sums `field` over the rows matching the filter.
    fn sum(&self, field: SumField, filter: &RecordFilter) -> DashboardResult<u64> {
        match field {
            SumField::LeaveDuration => Ok(self
                .leaves(filter)?
                .iter()
                .map(|leave| u64::from(leave.duration))
                .sum()),
        }
    }

    /// Counts rows of `kind` matching the filter, grouped by `field`.
    ///
    /// Keys are wire values (`"half-day"`, `"laid_off"`, department labels)
    /// in lexical order. Groups with no rows are absent.
    fn group_count(
        &self,
        kind: EntityKind,
        filter: &RecordFilter,
        field: GroupField,
    ) -> DashboardResult<BTreeMap<String, u64>> {
        let keys: Vec<String> = match (kind, field) {
            (EntityKind::Employee, GroupField::Department) => self
                .employees(filter)?
                .into_iter()
                .map(|employee| employee.department)
                .collect(),
            (EntityKind::Employee, GroupField::Status) => self
                .employees(filter)?
                .iter()
                .map(|employee| employee.status.to_string())
                .collect(),
            (EntityKind::Attendance, GroupField::Status) => self
                .attendance(filter)?
                .iter()
                .map(|record| record.status.to_string())
                .collect(),
            (EntityKind::Leave, GroupField::LeaveType) => self
                .leaves(filter)?
                .iter()
                .map(|leave| leave.leave_type.to_string())
                .collect(),
            (EntityKind::Attrition, GroupField::Reason) => self
                .attrition(filter)?
                .iter()
                .map(|record| record.reason.to_string())
                .collect(),
            (_, GroupField::Department) => {
                let departments: HashMap<String, String> = self
                    .employees(&RecordFilter::new())?
                    .into_iter()
                    .map(|employee| (employee.id, employee.department))
                    .collect();
                let employee_ids: Vec<String> = match kind {
                    EntityKind::Attendance => self
                        .attendance(filter)?
                        .into_iter()
                        .map(|record| record.employee_id)
                        .collect(),
                    EntityKind::Leave => self
                        .leaves(filter)?
                        .into_iter()
                        .map(|leave| leave.employee_id)
                        .collect(),
                    _ => self
                        .attrition(filter)?
                        .into_iter()
                        .map(|record| record.employee_id)
                        .collect(),
                };
                employee_ids
                    .iter()
                    .filter_map(|id| departments.get(id).cloned())
                    .collect()
            }
            (kind, field) => {
                return Err(DashboardError::Store {
                    message: format!("cannot group {:?} rows by {:?}", kind, field),
                });
            }
        };

        let mut groups = BTreeMap::new();
        for key in keys {
            *groups.entry(key).or_insert(0) += 1;
        }
        Ok(groups)
    }
}
