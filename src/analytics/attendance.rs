//! Attendance KPIs.
//!
//! A row counts as present when its status is present or half-day. The
//! attendance percentage is present rows over all rows in the window.

use std::collections::BTreeMap;

use chrono::NaiveDate;

use crate::error::DashboardResult;
use crate::models::{
    AttendanceRecord, AttendanceStatus, AttendanceSummary, DateWindow, DepartmentAttendance,
    DepartmentalAttendance, EmployeeStatus,
};
use crate::store::{EntityKind, GroupField, RecordFilter};

use super::{KpiContext, department_index, percentage};

/// Days attendance KPIs look back when no start date is given.
pub const DEFAULT_WINDOW_DAYS: i64 = 30;

fn summary(total: u64, present: u64) -> AttendanceSummary {
    if total == 0 {
        return AttendanceSummary::default();
    }
    AttendanceSummary {
        attendance_percentage: percentage(present, total),
        total_days: total,
        present_days: present,
        absent_days: total - present,
    }
}

/// Summarises attendance rows that have already been selected.
///
/// # Example
///
/// ```
/// use hr_dashboard::analytics::summarize_attendance;
/// use hr_dashboard::models::{AttendanceRecord, AttendanceStatus};
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
///
/// let day = NaiveDate::from_ymd_opt(2024, 1, 2).unwrap();
/// let rows = vec![
///     AttendanceRecord { employee_id: "A".into(), date: day, status: AttendanceStatus::Present },
///     AttendanceRecord { employee_id: "B".into(), date: day, status: AttendanceStatus::Absent },
/// ];
///
/// let summary = summarize_attendance(&rows);
/// assert_eq!(summary.attendance_percentage, Decimal::new(50, 0));
/// assert_eq!(summary.absent_days, 1);
/// ```
pub fn summarize_attendance(records: &[AttendanceRecord]) -> AttendanceSummary {
    let present = records
        .iter()
        .filter(|record| record.status.counts_as_present())
        .count() as u64;
    summary(records.len() as u64, present)
}

/// Attendance percentage over a window, organisation-wide or for one employee.
///
/// Missing bounds default to the last [`DEFAULT_WINDOW_DAYS`] days up to
/// today. A window without rows yields an all-zero summary. Present and
/// total counts come from one grouped read, so they always agree.
///
/// # Arguments
///
/// * `ctx` - Store and reference date
/// * `employee_id` - Restrict to one employee; the id is not checked here
/// * `start` / `end` - Inclusive window bounds
pub fn attendance_percentage(
    ctx: &KpiContext<'_>,
    employee_id: Option<&str>,
    start: Option<NaiveDate>,
    end: Option<NaiveDate>,
) -> DashboardResult<AttendanceSummary> {
    let window = DateWindow::resolve(start, end, DEFAULT_WINDOW_DAYS, ctx.today())?;
    let mut filter = RecordFilter::new().within(window);
    if let Some(employee_id) = employee_id {
        filter = filter.for_employee(employee_id);
    }

    let groups = ctx
        .store()
        .group_count(EntityKind::Attendance, &filter, GroupField::Status)?;
    let mut total = 0;
    let mut present = 0;
    for (status, count) in groups {
        total += count;
        if status.parse::<AttendanceStatus>()?.counts_as_present() {
            present += count;
        }
    }
    Ok(summary(total, present))
}

/// Attendance per department, over the active employees of each department.
///
/// Every department with an active employee appears, including those with
/// no rows in the window, which report zeros. Rows are read once and
/// grouped here.
pub fn departmental_attendance(
    ctx: &KpiContext<'_>,
    start: Option<NaiveDate>,
    end: Option<NaiveDate>,
) -> DashboardResult<DepartmentalAttendance> {
    let window = DateWindow::resolve(start, end, DEFAULT_WINDOW_DAYS, ctx.today())?;
    let store = ctx.store();
    let active = RecordFilter::new().with_employee_status(EmployeeStatus::Active);
    let departments = department_index(store, &active)?;

    // (rows, present rows) per department
    let mut tallies: BTreeMap<&str, (u64, u64)> = departments
        .values()
        .map(|department| (department.as_str(), (0, 0)))
        .collect();
    for record in store.attendance(&active.within(window))? {
        let Some(department) = departments.get(&record.employee_id) else {
            continue;
        };
        let tally = tallies.entry(department.as_str()).or_default();
        tally.0 += 1;
        if record.status.counts_as_present() {
            tally.1 += 1;
        }
    }

    Ok(tallies
        .into_iter()
        .map(|(department, (total, present))| {
            let summary = summary(total, present);
            (
                department.to_string(),
                DepartmentAttendance {
                    percentage: summary.attendance_percentage,
                    count: summary.total_days,
                    present: summary.present_days,
                },
            )
        })
        .collect())
}
