//! Store-seeding helpers shared by the aggregator tests.

use chrono::{Duration, NaiveDate};

use crate::models::{
    AttendanceRecord, AttendanceStatus, AttritionReason, AttritionRecord, Employee,
    EmployeeStatus, LeaveRecord, LeaveType,
};
use crate::store::InMemoryStore;

pub(crate) fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

pub(crate) fn hire(store: &InMemoryStore, id: &str, department: &str) {
    store
        .insert_employee(Employee {
            id: id.to_string(),
            name: format!("Employee {}", id),
            department: department.to_string(),
            join_date: date(2020, 1, 1),
            status: EmployeeStatus::Active,
        })
        .unwrap();
}

pub(crate) fn attend(store: &InMemoryStore, id: &str, day: NaiveDate, status: AttendanceStatus) {
    store
        .record_attendance(AttendanceRecord {
            employee_id: id.to_string(),
            date: day,
            status,
        })
        .unwrap();
}

pub(crate) fn take_leave(
    store: &InMemoryStore,
    id: &str,
    leave_type: LeaveType,
    start: NaiveDate,
    duration: u32,
    approved: bool,
) {
    store
        .record_leave(LeaveRecord {
            employee_id: id.to_string(),
            leave_type,
            start_date: start,
            end_date: start + Duration::days(i64::from(duration) - 1),
            duration,
            reason: None,
            approved,
        })
        .unwrap();
}

pub(crate) fn exit(store: &InMemoryStore, id: &str, day: NaiveDate, reason: AttritionReason) {
    store
        .record_exit(AttritionRecord {
            employee_id: id.to_string(),
            exit_date: day,
            reason,
            details: None,
        })
        .unwrap();
}
