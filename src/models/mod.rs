//! Core data models for the HR dashboard.
//!
//! This module contains the stored record types and the KPI result shapes
//! produced by the analytics layer.

mod attendance;
mod attrition;
mod employee;
mod kpi;
mod leave;
mod window;

pub use attendance::{AttendanceRecord, AttendanceStatus};
pub use attrition::{AttritionReason, AttritionRecord};
pub use employee::{Employee, EmployeeStatus};
pub use kpi::{
    AttendanceSummary, AttritionSummary, DepartmentAttendance, DepartmentAttrition,
    DepartmentHeadcount, DepartmentLeaves, DepartmentalAttendance, DepartmentalAttrition,
    DepartmentalLeaves, LeaveTotals, LeaveTypeCount, ReasonCount, ScopedKpis, SummaryKpis,
};
pub use leave::{LeaveRecord, LeaveType};
pub use window::DateWindow;
