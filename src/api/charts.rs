//! Chart series for the dashboard's bar and pie charts.

use rust_decimal::Decimal;

use crate::config::Thresholds;
use crate::models::{DepartmentalAttendance, DepartmentalAttrition, LeaveTypeCount};

use super::response::{ChartPoint, ChartResponse};

/// Good attendance bar.
pub const ATTENDANCE_GOOD: &str = "#22c55e";
/// Good attrition bar.
pub const ATTRITION_GOOD: &str = "#10b981";
/// Warning bar.
pub const WARNING: &str = "#f59e0b";
/// Poor bar.
pub const POOR: &str = "#ef4444";
/// Pie slice colours, used in order.
pub const LEAVE_PALETTE: [&str; 5] = ["#3b82f6", "#8b5cf6", "#ec4899", "#f59e0b", "#10b981"];

fn attendance_color(percentage: Decimal, thresholds: &Thresholds) -> &'static str {
    if percentage >= thresholds.good {
        ATTENDANCE_GOOD
    } else if percentage >= thresholds.warning {
        WARNING
    } else {
        POOR
    }
}

fn attrition_color(rate: Decimal, thresholds: &Thresholds) -> &'static str {
    if rate <= thresholds.good {
        ATTRITION_GOOD
    } else if rate <= thresholds.warning {
        WARNING
    } else {
        POOR
    }
}

fn in_scope(label: &str, department: Option<&str>) -> bool {
    department.is_none_or(|department| department == label)
}

/// Departmental attendance bars, optionally narrowed to one department.
pub fn attendance_chart(
    attendance: &DepartmentalAttendance,
    department: Option<&str>,
    thresholds: &Thresholds,
) -> ChartResponse {
    let series = attendance
        .iter()
        .filter(|(label, _)| in_scope(label, department))
        .map(|(label, stats)| ChartPoint {
            label: label.clone(),
            value: stats.percentage,
            color: attendance_color(stats.percentage, thresholds).to_string(),
        })
        .collect();
    ChartResponse::new(series)
}

/// Leave distribution slices with human-readable labels.
pub fn leave_chart(distribution: &[LeaveTypeCount]) -> ChartResponse {
    let series = distribution
        .iter()
        .zip(LEAVE_PALETTE.iter().cycle())
        .map(|(entry, color)| ChartPoint {
            label: entry.leave_type.label().to_string(),
            value: Decimal::from(entry.count),
            color: (*color).to_string(),
        })
        .collect();
    ChartResponse::new(series)
}

/// Departmental attrition bars, optionally narrowed to one department.
pub fn attrition_chart(
    attrition: &DepartmentalAttrition,
    department: Option<&str>,
    thresholds: &Thresholds,
) -> ChartResponse {
    let series = attrition
        .iter()
        .filter(|(label, _)| in_scope(label, department))
        .map(|(label, stats)| ChartPoint {
            label: label.clone(),
            value: stats.attrition_rate,
            color: attrition_color(stats.attrition_rate, thresholds).to_string(),
        })
        .collect();
    ChartResponse::new(series)
}
