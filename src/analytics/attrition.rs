//! Attrition KPIs.
//!
//! An exit is in a window when its exit date is. The organisation-wide rate
//! divides by the context's [`HeadcountProvider`](super::HeadcountProvider),
//! which is the current active headcount unless replaced.
//!
//! The departmental breakdown differs from the other departmental KPIs: it
//! covers every department that has ever had an employee and divides by the
//! department's all-time headcount, active or not.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use tracing::debug;

use crate::error::DashboardResult;
use crate::models::{
    AttritionReason, AttritionSummary, DateWindow, DepartmentAttrition, DepartmentalAttrition,
    ReasonCount,
};
use crate::store::{EntityKind, GroupField, RecordFilter};

use super::{KpiContext, department_index, percentage};

/// Days attrition KPIs look back when no start date is given.
pub const DEFAULT_WINDOW_DAYS: i64 = 365;

/// Separations in the window as a percentage of headcount.
///
/// When the headcount is zero the whole summary is zero, including
/// `separated_count`.
///
/// # Example
///
/// ```
/// use hr_dashboard::analytics::{self, KpiContext};
/// use hr_dashboard::store::InMemoryStore;
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
///
/// let store = InMemoryStore::new();
/// let ctx = KpiContext::new(&store, NaiveDate::from_ymd_opt(2024, 12, 31).unwrap());
///
/// let summary = analytics::attrition_rate(&ctx, None, None)?;
/// assert_eq!(summary.attrition_rate, Decimal::ZERO);
/// assert_eq!(summary.employee_count, 0);
/// # Ok::<(), hr_dashboard::error::DashboardError>(())
/// ```
pub fn attrition_rate(
    ctx: &KpiContext<'_>,
    start: Option<NaiveDate>,
    end: Option<NaiveDate>,
) -> DashboardResult<AttritionSummary> {
    let window = DateWindow::resolve(start, end, DEFAULT_WINDOW_DAYS, ctx.today())?;
    let store = ctx.store();

    let separated = store.count(EntityKind::Attrition, &RecordFilter::new().within(window))?;
    let headcount = ctx.headcount().headcount(store, &window)?;
    debug!(
        separated,
        headcount,
        start = %window.start(),
        end = %window.end(),
        "Computed attrition inputs"
    );

    if headcount == 0 {
        return Ok(AttritionSummary::default());
    }
    Ok(AttritionSummary {
        attrition_rate: percentage(separated, headcount),
        separated_count: separated,
        employee_count: headcount,
    })
}

/// Exits per reason, most frequent first.
pub fn attrition_by_reason(
    ctx: &KpiContext<'_>,
    start: Option<NaiveDate>,
    end: Option<NaiveDate>,
) -> DashboardResult<Vec<ReasonCount>> {
    let window = DateWindow::resolve(start, end, DEFAULT_WINDOW_DAYS, ctx.today())?;
    let groups = ctx.store().group_count(
        EntityKind::Attrition,
        &RecordFilter::new().within(window),
        GroupField::Reason,
    )?;

    let mut reasons = groups
        .into_iter()
        .map(|(reason, count)| -> DashboardResult<ReasonCount> {
            Ok(ReasonCount {
                reason: reason.parse::<AttritionReason>()?,
                count,
            })
        })
        .collect::<DashboardResult<Vec<_>>>()?;
    reasons.sort_by(|a, b| b.count.cmp(&a.count));
    Ok(reasons)
}

/// Attrition per department against each department's all-time headcount.
///
/// Employees and exits are each read once and grouped here.
pub fn departmental_attrition(
    ctx: &KpiContext<'_>,
    start: Option<NaiveDate>,
    end: Option<NaiveDate>,
) -> DashboardResult<DepartmentalAttrition> {
    let window = DateWindow::resolve(start, end, DEFAULT_WINDOW_DAYS, ctx.today())?;
    let store = ctx.store();
    let departments = department_index(store, &RecordFilter::new())?;

    // (all-time headcount, exits in window) per department
    let mut tallies: BTreeMap<&str, (u64, u64)> = BTreeMap::new();
    for department in departments.values() {
        tallies.entry(department.as_str()).or_default().0 += 1;
    }
    for record in store.attrition(&RecordFilter::new().within(window))? {
        if let Some(tally) = departments
            .get(&record.employee_id)
            .and_then(|department| tallies.get_mut(department.as_str()))
        {
            tally.1 += 1;
        }
    }

    Ok(tallies
        .into_iter()
        .map(|(department, (employees, exits))| {
            let stats = if employees == 0 {
                DepartmentAttrition::default()
            } else {
                DepartmentAttrition {
                    attrition_rate: percentage(exits, employees),
                    count: exits,
                }
            };
            (department.to_string(), stats)
        })
        .collect())
}
