//! Configuration types for the HR dashboard.
//!
//! This module contains the strongly-typed structures deserialized from
//! the YAML files of a configuration directory: the dashboard settings and
//! the dataset files that seed the record store.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Deserialize;

use crate::models::{AttendanceRecord, AttritionRecord, Employee, LeaveRecord};
use crate::validation::MAX_RANGE_DAYS;

/// Settings from `dashboard.yaml`.
///
/// Every section is optional; missing values take their defaults.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct DashboardSettings {
    /// Date default windows end on. The current date when absent.
    pub today: Option<NaiveDate>,
    /// HTTP listener.
    pub server: ServerSettings,
    /// Query validation limits.
    pub validation: ValidationSettings,
    /// Chart colouring.
    pub charts: ChartSettings,
}

/// HTTP listener settings.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct ServerSettings {
    /// Interface to bind.
    pub host: String,
    /// Port to bind.
    pub port: u16,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 3000,
        }
    }
}

/// Query validation limits.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct ValidationSettings {
    /// Longest accepted span between `start_date` and `end_date`, in days.
    pub max_range_days: i64,
}

impl Default for ValidationSettings {
    fn default() -> Self {
        Self {
            max_range_days: MAX_RANGE_DAYS,
        }
    }
}

/// Colour bands for a chart.
///
/// For attendance a value is good at or above `good` and a warning at or
/// above `warning`. For attrition, where lower is better, the comparisons
/// flip to at or below.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Thresholds {
    /// Boundary of the good band.
    pub good: Decimal,
    /// Boundary of the warning band.
    pub warning: Decimal,
}

/// Chart colouring settings.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct ChartSettings {
    /// Attendance percentage bands.
    pub attendance: Thresholds,
    /// Attrition rate bands.
    pub attrition: Thresholds,
}

impl Default for ChartSettings {
    fn default() -> Self {
        Self {
            attendance: Thresholds {
                good: Decimal::new(80, 0),
                warning: Decimal::new(70, 0),
            },
            attrition: Thresholds {
                good: Decimal::new(5, 0),
                warning: Decimal::new(10, 0),
            },
        }
    }
}

/// `employees.yaml`.
#[derive(Debug, Clone, Deserialize)]
pub struct EmployeesFile {
    /// Employee master data.
    pub employees: Vec<Employee>,
}

/// `attendance.yaml`.
#[derive(Debug, Clone, Deserialize)]
pub struct AttendanceFile {
    /// Daily attendance rows.
    #[serde(default)]
    pub attendance: Vec<AttendanceRecord>,
}

/// `leaves.yaml`.
#[derive(Debug, Clone, Deserialize)]
pub struct LeavesFile {
    /// Leave rows.
    #[serde(default)]
    pub leaves: Vec<LeaveRecord>,
}

/// `attrition.yaml`.
#[derive(Debug, Clone, Deserialize)]
pub struct AttritionFile {
    /// Exit rows.
    #[serde(default)]
    pub attrition: Vec<AttritionRecord>,
}

/// The rows of a configuration directory, before validation.
#[derive(Debug, Clone, Default)]
pub struct Dataset {
    /// Employee master data.
    pub employees: Vec<Employee>,
    /// Attendance rows.
    pub attendance: Vec<AttendanceRecord>,
    /// Leave rows.
    pub leaves: Vec<LeaveRecord>,
    /// Exit rows.
    pub attrition: Vec<AttritionRecord>,
}
