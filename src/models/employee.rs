//! Employee model and related types.
//!
//! This module defines the Employee struct and EmployeeStatus enum
//! for representing employee master data.

use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::DashboardError;

/// Represents the employment status of an employee.
///
/// An employee flips from `Active` to `Inactive` exactly once, when an
/// attrition record is created for them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EmployeeStatus {
    /// Currently employed.
    #[default]
    Active,
    /// No longer employed.
    Inactive,
}

impl EmployeeStatus {
    /// Returns the wire value of the status.
    pub fn as_str(&self) -> &'static str {
        match self {
            EmployeeStatus::Active => "active",
            EmployeeStatus::Inactive => "inactive",
        }
    }
}

impl fmt::Display for EmployeeStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EmployeeStatus {
    type Err = DashboardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "active" => Ok(EmployeeStatus::Active),
            "inactive" => Ok(EmployeeStatus::Inactive),
            other => Err(DashboardError::validation(
                "status",
                format!("Status must be one of: active, inactive (got '{}')", other),
            )),
        }
    }
}

/// Represents an employee in the master data.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Employee {
    /// Unique, immutable identifier for the employee (e.g. "ENG-001").
    pub id: String,
    /// Full name.
    pub name: String,
    /// Free-text department label.
    pub department: String,
    /// The date the employee joined.
    pub join_date: NaiveDate,
    /// Current employment status.
    #[serde(default)]
    pub status: EmployeeStatus,
}

impl Employee {
    /// Returns true if the employee is currently active.
    ///
    /// # Examples
    ///
    /// ```
    /// use hr_dashboard::models::{Employee, EmployeeStatus};
    /// use chrono::NaiveDate;
    ///
    /// let employee = Employee {
    ///     id: "ENG-001".to_string(),
    ///     name: "Ananya Sharma".to_string(),
    ///     department: "Engineering".to_string(),
    ///     join_date: NaiveDate::from_ymd_opt(2022, 4, 1).unwrap(),
    ///     status: EmployeeStatus::Active,
    /// };
    /// assert!(employee.is_active());
    /// ```
    pub fn is_active(&self) -> bool {
        self.status == EmployeeStatus::Active
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_test_employee(status: EmployeeStatus) -> Employee {
        Employee {
            id: "ENG-001".to_string(),
            name: "Ananya Sharma".to_string(),
            department: "Engineering".to_string(),
            join_date: NaiveDate::from_ymd_opt(2022, 4, 1).unwrap(),
            status,
        }
    }

    #[test]
    fn test_deserialize_employee() {
        let json = r#"{
            "id": "ENG-001",
            "name": "Ananya Sharma",
            "department": "Engineering",
            "join_date": "2022-04-01",
            "status": "inactive"
        }"#;

        let employee: Employee = serde_json::from_str(json).unwrap();
        assert_eq!(employee.id, "ENG-001");
        assert_eq!(employee.department, "Engineering");
        assert_eq!(
            employee.join_date,
            NaiveDate::from_ymd_opt(2022, 4, 1).unwrap()
        );
        assert_eq!(employee.status, EmployeeStatus::Inactive);
    }

    #[test]
    fn test_status_defaults_to_active() {
        let json = r#"{
            "id": "HR-002",
            "name": "Raj Patel",
            "department": "HR",
            "join_date": "2021-01-15"
        }"#;

        let employee: Employee = serde_json::from_str(json).unwrap();
        assert!(employee.is_active());
    }

    #[test]
    fn test_is_active_returns_false_for_inactive() {
        let employee = create_test_employee(EmployeeStatus::Inactive);
        assert!(!employee.is_active());
    }

    #[test]
    fn test_status_from_str() {
        assert_eq!(
            "active".parse::<EmployeeStatus>().unwrap(),
            EmployeeStatus::Active
        );
        assert_eq!(
            "inactive".parse::<EmployeeStatus>().unwrap(),
            EmployeeStatus::Inactive
        );
        let err = "retired".parse::<EmployeeStatus>().unwrap_err();
        assert!(matches!(err, DashboardError::Validation { .. }));
    }

    #[test]
    fn test_status_serialization() {
        assert_eq!(
            serde_json::to_string(&EmployeeStatus::Active).unwrap(),
            "\"active\""
        );
        assert_eq!(EmployeeStatus::Inactive.to_string(), "inactive");
    }
}
