//! Employee KPIs and the dashboard summary.

use chrono::NaiveDate;
use tracing::debug;

use crate::error::DashboardResult;
use crate::models::{DepartmentHeadcount, EmployeeStatus, SummaryKpis};
use crate::store::{EntityKind, GroupField, RecordFilter};

use super::{KpiContext, attendance_percentage, attrition_rate, total_leaves};

/// Number of employees, optionally with one status only.
pub fn total_employees(
    ctx: &KpiContext<'_>,
    status: Option<EmployeeStatus>,
) -> DashboardResult<u64> {
    let mut filter = RecordFilter::new();
    if let Some(status) = status {
        filter = filter.with_employee_status(status);
    }
    ctx.store().count(EntityKind::Employee, &filter)
}

/// Active headcount per department, largest first.
pub fn employees_by_department(ctx: &KpiContext<'_>) -> DashboardResult<Vec<DepartmentHeadcount>> {
    let groups = ctx.store().group_count(
        EntityKind::Employee,
        &RecordFilter::new().with_employee_status(EmployeeStatus::Active),
        GroupField::Department,
    )?;

    let mut headcounts: Vec<DepartmentHeadcount> = groups
        .into_iter()
        .map(|(department, count)| DepartmentHeadcount { department, count })
        .collect();
    headcounts.sort_by(|a, b| b.count.cmp(&a.count));
    Ok(headcounts)
}

/// The dashboard's headline KPIs.
///
/// Omitted bounds are resolved by each component on its own terms, so
/// with no dates attendance covers 30 days while leaves and attrition
/// cover 365.
pub fn summary_kpis(
    ctx: &KpiContext<'_>,
    start: Option<NaiveDate>,
    end: Option<NaiveDate>,
) -> DashboardResult<SummaryKpis> {
    let summary = SummaryKpis {
        total_employees: total_employees(ctx, Some(EmployeeStatus::Active))?,
        attendance: attendance_percentage(ctx, None, start, end)?,
        leaves: total_leaves(ctx, None, start, end)?,
        attrition: attrition_rate(ctx, start, end)?,
    };
    debug!(
        total_employees = summary.total_employees,
        attendance = %summary.attendance.attendance_percentage,
        attrition = %summary.attrition.attrition_rate,
        "Computed summary KPIs"
    );
    Ok(summary)
}
