//! Attrition (employee exit) records.

use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::DashboardError;

/// Why an employee left.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AttritionReason {
    /// Voluntary resignation.
    Voluntary,
    /// Termination.
    Terminated,
    /// Retirement.
    Retired,
    /// Lay off.
    LaidOff,
    /// Anything else.
    Other,
}

impl AttritionReason {
    /// All exit reasons in declaration order.
    pub const ALL: [AttritionReason; 5] = [
        AttritionReason::Voluntary,
        AttritionReason::Terminated,
        AttritionReason::Retired,
        AttritionReason::LaidOff,
        AttritionReason::Other,
    ];

    /// Returns the wire value of the reason.
    pub fn as_str(&self) -> &'static str {
        match self {
            AttritionReason::Voluntary => "voluntary",
            AttritionReason::Terminated => "terminated",
            AttritionReason::Retired => "retired",
            AttritionReason::LaidOff => "laid_off",
            AttritionReason::Other => "other",
        }
    }

    /// Returns the human-readable label of the reason.
    pub fn label(&self) -> &'static str {
        match self {
            AttritionReason::Voluntary => "Voluntary Resignation",
            AttritionReason::Terminated => "Termination",
            AttritionReason::Retired => "Retirement",
            AttritionReason::LaidOff => "Lay Off",
            AttritionReason::Other => "Other",
        }
    }
}

impl fmt::Display for AttritionReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AttritionReason {
    type Err = DashboardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        AttritionReason::ALL
            .into_iter()
            .find(|reason| reason.as_str() == s)
            .ok_or_else(|| {
                DashboardError::validation(
                    "reason",
                    "Reason must be one of: voluntary, terminated, retired, laid_off, other",
                )
            })
    }
}

/// An employee's exit. At most one exists per employee.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttritionRecord {
    /// The employee who left.
    pub employee_id: String,
    /// Last day of employment.
    pub exit_date: NaiveDate,
    /// Why the employee left.
    pub reason: AttritionReason,
    /// Optional free-text details.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}
