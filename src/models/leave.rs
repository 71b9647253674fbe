//! Leave records.
//!
//! A leave's `duration` is stored independently of its dates. Day totals are
//! always taken from `duration`, never from `end_date - start_date`.

use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::DashboardError;

/// The kind of leave taken.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LeaveType {
    /// Sick leave.
    Sick,
    /// Annual leave.
    Annual,
    /// Casual leave.
    Casual,
    /// Unpaid leave.
    Unpaid,
    /// Maternity leave.
    Maternity,
}

impl LeaveType {
    /// All leave types in declaration order.
    pub const ALL: [LeaveType; 5] = [
        LeaveType::Sick,
        LeaveType::Annual,
        LeaveType::Casual,
        LeaveType::Unpaid,
        LeaveType::Maternity,
    ];

    /// Returns the wire value of the leave type.
    pub fn as_str(&self) -> &'static str {
        match self {
            LeaveType::Sick => "sick",
            LeaveType::Annual => "annual",
            LeaveType::Casual => "casual",
            LeaveType::Unpaid => "unpaid",
            LeaveType::Maternity => "maternity",
        }
    }

    /// Returns the chart label of the leave type.
    pub fn label(&self) -> &'static str {
        match self {
            LeaveType::Sick => "Sick Leave",
            LeaveType::Annual => "Annual Leave",
            LeaveType::Casual => "Casual Leave",
            LeaveType::Unpaid => "Unpaid Leave",
            LeaveType::Maternity => "Maternity Leave",
        }
    }
}

impl fmt::Display for LeaveType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LeaveType {
    type Err = DashboardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        LeaveType::ALL
            .into_iter()
            .find(|leave_type| leave_type.as_str() == s)
            .ok_or_else(|| {
                DashboardError::validation(
                    "leave_type",
                    "Leave type must be one of: sick, annual, casual, unpaid, maternity",
                )
            })
    }
}

/// One leave request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeaveRecord {
    /// The employee taking leave.
    pub employee_id: String,
    /// The kind of leave.
    pub leave_type: LeaveType,
    /// First day of leave (inclusive).
    pub start_date: NaiveDate,
    /// Last day of leave (inclusive). Never before `start_date`.
    pub end_date: NaiveDate,
    /// Length of the leave in days.
    pub duration: u32,
    /// Optional free-text reason.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
    /// Only approved leaves count towards leave KPIs.
    #[serde(default)]
    pub approved: bool,
}
