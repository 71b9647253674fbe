//! Daily attendance records.

use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::DashboardError;

/// The attendance outcome for one employee on one day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AttendanceStatus {
    /// Present for the full day.
    Present,
    /// Absent for the day.
    Absent,
    /// Present for part of the day. Counts as present in attendance KPIs.
    #[serde(rename = "half-day")]
    HalfDay,
}

impl AttendanceStatus {
    /// All attendance statuses in declaration order.
    pub const ALL: [AttendanceStatus; 3] = [
        AttendanceStatus::Present,
        AttendanceStatus::Absent,
        AttendanceStatus::HalfDay,
    ];

    /// Returns the wire value of the status.
    pub fn as_str(&self) -> &'static str {
        match self {
            AttendanceStatus::Present => "present",
            AttendanceStatus::Absent => "absent",
            AttendanceStatus::HalfDay => "half-day",
        }
    }

    /// Returns the human-readable label of the status.
    pub fn label(&self) -> &'static str {
        match self {
            AttendanceStatus::Present => "Present",
            AttendanceStatus::Absent => "Absent",
            AttendanceStatus::HalfDay => "Half-Day",
        }
    }

    /// Returns true when the status counts towards attendance.
    pub fn counts_as_present(&self) -> bool {
        matches!(self, AttendanceStatus::Present | AttendanceStatus::HalfDay)
    }
}

impl fmt::Display for AttendanceStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AttendanceStatus {
    type Err = DashboardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        AttendanceStatus::ALL
            .into_iter()
            .find(|status| status.as_str() == s)
            .ok_or_else(|| {
                DashboardError::validation(
                    "status",
                    "Status must be one of: present, absent, half-day",
                )
            })
    }
}

/// One attendance row. `(employee_id, date)` is unique in the store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttendanceRecord {
    /// The employee this row belongs to.
    pub employee_id: String,
    /// The calendar day.
    pub date: NaiveDate,
    /// The attendance outcome.
    pub status: AttendanceStatus,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_half_day_uses_hyphenated_wire_name() {
        assert_eq!(
            serde_json::to_string(&AttendanceStatus::HalfDay).unwrap(),
            "\"half-day\""
        );
        let status: AttendanceStatus = serde_json::from_str("\"half-day\"").unwrap();
        assert_eq!(status, AttendanceStatus::HalfDay);
    }

    #[test]
    fn test_counts_as_present() {
        assert!(AttendanceStatus::Present.counts_as_present());
        assert!(AttendanceStatus::HalfDay.counts_as_present());
        assert!(!AttendanceStatus::Absent.counts_as_present());
    }

    #[test]
    fn test_from_str_rejects_unknown_status() {
        assert_eq!(
            "half-day".parse::<AttendanceStatus>().unwrap(),
            AttendanceStatus::HalfDay
        );
        assert!(matches!(
            "late".parse::<AttendanceStatus>(),
            Err(DashboardError::Validation { .. })
        ));
    }

    #[test]
    fn test_deserialize_attendance_record() {
        let json = r#"{"employee_id": "ENG-001", "date": "2024-01-15", "status": "absent"}"#;
        let record: AttendanceRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.employee_id, "ENG-001");
        assert_eq!(record.date, NaiveDate::from_ymd_opt(2024, 1, 15).unwrap());
        assert_eq!(record.status, AttendanceStatus::Absent);
    }
}
