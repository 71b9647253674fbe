//! Leave KPIs.
//!
//! Only approved leaves count, a leave is in a window when its start date
//! is, and day totals add up the stored `duration` of each leave.

use chrono::NaiveDate;

use crate::error::DashboardResult;
use crate::filter::list_departments;
use crate::models::{
    DateWindow, DepartmentLeaves, DepartmentalLeaves, LeaveRecord, LeaveTotals, LeaveType,
    LeaveTypeCount,
};
use crate::store::{EntityKind, GroupField, RecordFilter};

use super::{KpiContext, average, department_index};

/// Days leave KPIs look back when no start date is given.
pub const DEFAULT_WINDOW_DAYS: i64 = 365;

fn approved_in(window: DateWindow) -> RecordFilter {
    RecordFilter::new().within(window).approved_only()
}

fn totals(total_leaves: u64, total_days: u64) -> LeaveTotals {
    LeaveTotals {
        total_leaves,
        total_days,
        average_duration: average(total_days, total_leaves),
    }
}

/// Summarises leave rows that have already been selected.
///
/// The rows are expected to be approved; approval is not re-checked.
pub fn summarize_leaves(leaves: &[LeaveRecord]) -> LeaveTotals {
    let total_days = leaves.iter().map(|leave| u64::from(leave.duration)).sum();
    totals(leaves.len() as u64, total_days)
}

/// Approved leave counts per leave type, most frequent first.
///
/// Types with no leaves are left out. Ties keep the lexical order of the
/// type's wire name.
pub fn leave_distribution(
    ctx: &KpiContext<'_>,
    start: Option<NaiveDate>,
    end: Option<NaiveDate>,
) -> DashboardResult<Vec<LeaveTypeCount>> {
    let window = DateWindow::resolve(start, end, DEFAULT_WINDOW_DAYS, ctx.today())?;
    let groups = ctx
        .store()
        .group_count(EntityKind::Leave, &approved_in(window), GroupField::LeaveType)?;

    let mut distribution = groups
        .into_iter()
        .map(|(leave_type, count)| -> DashboardResult<LeaveTypeCount> {
            Ok(LeaveTypeCount {
                leave_type: leave_type.parse::<LeaveType>()?,
                count,
            })
        })
        .collect::<DashboardResult<Vec<_>>>()?;
    distribution.sort_by(|a, b| b.count.cmp(&a.count));
    Ok(distribution)
}

/// Approved leave totals over a window, organisation-wide or for one employee.
///
/// # Example
///
/// ```
/// use hr_dashboard::analytics::{self, KpiContext};
/// use hr_dashboard::models::{Employee, EmployeeStatus, LeaveRecord, LeaveType};
/// use hr_dashboard::store::InMemoryStore;
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
///
/// let day = |d| NaiveDate::from_ymd_opt(2024, 3, d).unwrap();
/// let store = InMemoryStore::new();
/// store.insert_employee(Employee {
///     id: "MKT-001".into(),
///     name: "Kavya Reddy".into(),
///     department: "Marketing".into(),
///     join_date: day(1),
///     status: EmployeeStatus::Active,
/// })?;
/// for (start, duration) in [(4, 2), (11, 3), (20, 1)] {
///     store.record_leave(LeaveRecord {
///         employee_id: "MKT-001".into(),
///         leave_type: LeaveType::Casual,
///         start_date: day(start),
///         end_date: day(start + duration - 1),
///         duration,
///         reason: None,
///         approved: true,
///     })?;
/// }
///
/// let ctx = KpiContext::new(&store, day(31));
/// let totals = analytics::total_leaves(&ctx, None, None, None)?;
/// assert_eq!(totals.total_leaves, 3);
/// assert_eq!(totals.total_days, 6);
/// assert_eq!(totals.average_duration, Decimal::new(2, 0));
/// # Ok::<(), hr_dashboard::error::DashboardError>(())
/// ```
pub fn total_leaves(
    ctx: &KpiContext<'_>,
    employee_id: Option<&str>,
    start: Option<NaiveDate>,
    end: Option<NaiveDate>,
) -> DashboardResult<LeaveTotals> {
    let window = DateWindow::resolve(start, end, DEFAULT_WINDOW_DAYS, ctx.today())?;
    let mut filter = approved_in(window);
    if let Some(employee_id) = employee_id {
        filter = filter.for_employee(employee_id);
    }
    Ok(summarize_leaves(&ctx.store().leaves(&filter)?))
}

/// Approved leave counts and day totals per department.
///
/// Departments are those with at least one active employee; the leaves of
/// inactive employees in those departments still count.
pub fn departmental_leaves(
    ctx: &KpiContext<'_>,
    start: Option<NaiveDate>,
    end: Option<NaiveDate>,
) -> DashboardResult<DepartmentalLeaves> {
    let window = DateWindow::resolve(start, end, DEFAULT_WINDOW_DAYS, ctx.today())?;
    let store = ctx.store();
    let departments = department_index(store, &RecordFilter::new())?;

    let mut result: DepartmentalLeaves = list_departments(store)?
        .iter()
        .map(|department| (department.to_string(), DepartmentLeaves::default()))
        .collect();
    for leave in store.leaves(&approved_in(window))? {
        if let Some(totals) = departments
            .get(&leave.employee_id)
            .and_then(|department| result.get_mut(department))
        {
            totals.total_leaves += 1;
            totals.total_days += u64::from(leave.duration);
        }
    }
    Ok(result)
}
