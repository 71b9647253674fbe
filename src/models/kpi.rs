//! KPI result models.
//!
//! These structs are the only contract presentation code may depend on.
//! Their field names are the fixed keys of the dashboard's JSON output;
//! departmental breakdowns are maps keyed by department label.

use std::collections::BTreeMap;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::{AttritionReason, LeaveType};

/// Organisation-wide or per-employee attendance summary.
///
/// `present_days` counts present and half-day rows.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct AttendanceSummary {
    /// Present rows as a percentage of all rows, rounded to 2 dp.
    pub attendance_percentage: Decimal,
    /// Number of attendance rows in the window.
    pub total_days: u64,
    /// Rows marked present or half-day.
    pub present_days: u64,
    /// Rows marked absent.
    pub absent_days: u64,
}

/// Attendance for one department.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct DepartmentAttendance {
    /// Present rows as a percentage of all rows, rounded to 2 dp.
    pub percentage: Decimal,
    /// Number of attendance rows in the window.
    pub count: u64,
    /// Rows marked present or half-day.
    pub present: u64,
}

/// Departmental attendance keyed by department label.
pub type DepartmentalAttendance = BTreeMap<String, DepartmentAttendance>;

/// Number of approved leaves of one type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeaveTypeCount {
    /// The leave type.
    pub leave_type: LeaveType,
    /// Approved leave rows of this type.
    pub count: u64,
}

/// Approved leave totals.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct LeaveTotals {
    /// Number of approved leave rows.
    pub total_leaves: u64,
    /// Sum of the stored `duration` of those rows.
    pub total_days: u64,
    /// `total_days / total_leaves` rounded to 2 dp, or 0 without leaves.
    pub average_duration: Decimal,
}

/// Leave totals for one department.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct DepartmentLeaves {
    /// Number of approved leave rows.
    pub total_leaves: u64,
    /// Sum of the stored `duration` of those rows.
    pub total_days: u64,
}

/// Departmental leave totals keyed by department label.
pub type DepartmentalLeaves = BTreeMap<String, DepartmentLeaves>;

/// Organisation-wide attrition.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct AttritionSummary {
    /// Separations as a percentage of the headcount, rounded to 2 dp.
    pub attrition_rate: Decimal,
    /// Attrition rows in the window.
    pub separated_count: u64,
    /// The headcount used as denominator.
    pub employee_count: u64,
}

/// Number of exits for one reason.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReasonCount {
    /// The exit reason.
    pub reason: AttritionReason,
    /// Attrition rows with this reason.
    pub count: u64,
}

/// Attrition for one department.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct DepartmentAttrition {
    /// Exits as a percentage of the department's all-time headcount.
    pub attrition_rate: Decimal,
    /// Attrition rows in the window for the department.
    pub count: u64,
}

/// Departmental attrition keyed by department label.
pub type DepartmentalAttrition = BTreeMap<String, DepartmentAttrition>;

/// Active headcount of one department.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DepartmentHeadcount {
    /// Department label.
    pub department: String,
    /// Active employees in the department.
    pub count: u64,
}

/// The dashboard's headline tiles.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SummaryKpis {
    /// Active employees.
    pub total_employees: u64,
    /// Attendance over the attendance window.
    pub attendance: AttendanceSummary,
    /// Leave totals over the leave window.
    pub leaves: LeaveTotals,
    /// Attrition over the attrition window.
    pub attrition: AttritionSummary,
}

/// KPIs computed from a Dashboard Filter's own record subsets.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScopedKpis {
    /// Department the figures are restricted to, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub department: Option<String>,
    /// Active employees in scope.
    pub headcount: u64,
    /// Attendance in scope.
    pub attendance: AttendanceSummary,
    /// Approved leaves in scope.
    pub leaves: LeaveTotals,
    /// Exits in scope.
    pub separations: u64,
}
