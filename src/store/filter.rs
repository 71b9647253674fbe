//! Record filter criteria.

use crate::models::{
    AttendanceRecord, AttendanceStatus, AttritionReason, AttritionRecord, DateWindow, Employee,
    EmployeeStatus, LeaveRecord, LeaveType,
};

/// Criteria for selecting records from a [`RecordStore`](super::RecordStore).
///
/// Every criterion is optional; an empty filter selects everything. The
/// date window applies to the natural date of each record kind:
///
/// | kind       | field        |
/// |------------|--------------|
/// | employee   | `join_date`  |
/// | attendance | `date`       |
/// | leave      | `start_date` |
/// | attrition  | `exit_date`  |
///
/// `department` and `employee_status` are checked against the joined
/// employee for attendance, leave and attrition rows.
///
/// # Example
///
/// ```
/// use hr_dashboard::models::{DateWindow, EmployeeStatus};
/// use hr_dashboard::store::RecordFilter;
/// use chrono::NaiveDate;
///
/// let window = DateWindow::new(
///     NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
///     NaiveDate::from_ymd_opt(2024, 1, 31).unwrap(),
/// )
/// .unwrap();
///
/// let filter = RecordFilter::new()
///     .within(window)
///     .in_department("Engineering")
///     .with_employee_status(EmployeeStatus::Active);
/// assert_eq!(filter.department.as_deref(), Some("Engineering"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecordFilter {
    /// Inclusive date range on the record's natural date.
    pub window: Option<DateWindow>,
    /// Department of the (joined) employee.
    pub department: Option<String>,
    /// Employee id.
    pub employee_id: Option<String>,
    /// Status of the (joined) employee.
    pub employee_status: Option<EmployeeStatus>,
    /// Accepted attendance statuses.
    pub attendance_statuses: Option<Vec<AttendanceStatus>>,
    /// Leave type.
    pub leave_type: Option<LeaveType>,
    /// Leave approval flag.
    pub approved: Option<bool>,
    /// Exit reason.
    pub reason: Option<AttritionReason>,
}

impl RecordFilter {
    /// Creates a filter that matches everything.
    pub fn new() -> Self {
        Self::default()
    }

    /// Restricts to records dated inside `window`.
    pub fn within(mut self, window: DateWindow) -> Self {
        self.window = Some(window);
        self
    }

    /// Restricts to records of employees in `department`.
    pub fn in_department(mut self, department: impl Into<String>) -> Self {
        self.department = Some(department.into());
        self
    }

    /// Restricts to one employee.
    pub fn for_employee(mut self, employee_id: impl Into<String>) -> Self {
        self.employee_id = Some(employee_id.into());
        self
    }

    /// Restricts to records of employees with `status`.
    pub fn with_employee_status(mut self, status: EmployeeStatus) -> Self {
        self.employee_status = Some(status);
        self
    }

    /// Restricts attendance rows to the given statuses.
    pub fn with_attendance_statuses(mut self, statuses: &[AttendanceStatus]) -> Self {
        self.attendance_statuses = Some(statuses.to_vec());
        self
    }

    /// Restricts leave rows to one type.
    pub fn of_leave_type(mut self, leave_type: LeaveType) -> Self {
        self.leave_type = Some(leave_type);
        self
    }

    /// Restricts leave rows to approved ones.
    pub fn approved_only(mut self) -> Self {
        self.approved = Some(true);
        self
    }

    /// Restricts attrition rows to one reason.
    pub fn with_reason(mut self, reason: AttritionReason) -> Self {
        self.reason = Some(reason);
        self
    }

    fn date_matches(&self, date: chrono::NaiveDate) -> bool {
        self.window.is_none_or(|window| window.contains(date))
    }

    fn employee_id_matches(&self, employee_id: &str) -> bool {
        self.employee_id.as_deref().is_none_or(|id| id == employee_id)
    }

    /// Checks department and status against the joined employee. A row
    /// whose employee is unknown only matches when neither is requested.
    fn joined_employee_matches(&self, employee: Option<&Employee>) -> bool {
        if self.department.is_none() && self.employee_status.is_none() {
            return true;
        }
        let Some(employee) = employee else {
            return false;
        };
        self.department
            .as_deref()
            .is_none_or(|department| employee.department == department)
            && self
                .employee_status
                .is_none_or(|status| employee.status == status)
    }

    /// Returns true when `employee` satisfies the filter.
    pub fn matches_employee(&self, employee: &Employee) -> bool {
        self.employee_id_matches(&employee.id)
            && self.date_matches(employee.join_date)
            && self.joined_employee_matches(Some(employee))
    }

    /// Returns true when an attendance row, joined to its employee, satisfies the filter.
    pub fn matches_attendance(&self, record: &AttendanceRecord, employee: Option<&Employee>) -> bool {
        self.employee_id_matches(&record.employee_id)
            && self.date_matches(record.date)
            && self
                .attendance_statuses
                .as_ref()
                .is_none_or(|statuses| statuses.contains(&record.status))
            && self.joined_employee_matches(employee)
    }

    /// Returns true when a leave row, joined to its employee, satisfies the filter.
    pub fn matches_leave(&self, leave: &LeaveRecord, employee: Option<&Employee>) -> bool {
        self.employee_id_matches(&leave.employee_id)
            && self.date_matches(leave.start_date)
            && self.leave_type.is_none_or(|leave_type| leave.leave_type == leave_type)
            && self.approved.is_none_or(|approved| leave.approved == approved)
            && self.joined_employee_matches(employee)
    }

    /// Returns true when an attrition row, joined to its employee, satisfies the filter.
    pub fn matches_attrition(&self, record: &AttritionRecord, employee: Option<&Employee>) -> bool {
        self.employee_id_matches(&record.employee_id)
            && self.date_matches(record.exit_date)
            && self.reason.is_none_or(|reason| record.reason == reason)
            && self.joined_employee_matches(employee)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn engineer(status: EmployeeStatus) -> Employee {
        Employee {
            id: "ENG-001".to_string(),
            name: "Priya Kumar".to_string(),
            department: "Engineering".to_string(),
            join_date: date(2021, 6, 1),
            status,
        }
    }

    #[test]
    fn test_empty_filter_matches_everything() {
        let filter = RecordFilter::new();
        let record = AttendanceRecord {
            employee_id: "ORPHAN".to_string(),
            date: date(2024, 1, 1),
            status: AttendanceStatus::Absent,
        };
        assert!(filter.matches_employee(&engineer(EmployeeStatus::Inactive)));
        assert!(filter.matches_attendance(&record, None));
    }

    #[test]
    fn test_department_requires_joined_employee() {
        let filter = RecordFilter::new().in_department("Engineering");
        let record = AttendanceRecord {
            employee_id: "ENG-001".to_string(),
            date: date(2024, 1, 1),
            status: AttendanceStatus::Present,
        };
        let employee = engineer(EmployeeStatus::Active);
        assert!(filter.matches_attendance(&record, Some(&employee)));
        assert!(!filter.matches_attendance(&record, None));

        let filter = RecordFilter::new().in_department("Sales");
        assert!(!filter.matches_attendance(&record, Some(&employee)));
    }

    #[test]
    fn test_employee_status_checks_joined_employee() {
        let filter = RecordFilter::new().with_employee_status(EmployeeStatus::Active);
        assert!(filter.matches_employee(&engineer(EmployeeStatus::Active)));
        assert!(!filter.matches_employee(&engineer(EmployeeStatus::Inactive)));
    }

    #[test]
    fn test_window_applies_to_leave_start_date() {
        let window = DateWindow::new(date(2024, 1, 1), date(2024, 1, 31)).unwrap();
        let filter = RecordFilter::new().within(window).approved_only();
        let mut leave = LeaveRecord {
            employee_id: "ENG-001".to_string(),
            leave_type: LeaveType::Annual,
            start_date: date(2024, 1, 30),
            end_date: date(2024, 2, 5),
            duration: 5,
            reason: None,
            approved: true,
        };
        assert!(filter.matches_leave(&leave, None));

        leave.approved = false;
        assert!(!filter.matches_leave(&leave, None));

        leave.approved = true;
        leave.start_date = date(2024, 2, 1);
        assert!(!filter.matches_leave(&leave, None));
    }

    #[test]
    fn test_attendance_status_set() {
        let filter = RecordFilter::new()
            .with_attendance_statuses(&[AttendanceStatus::Present, AttendanceStatus::HalfDay]);
        let mut record = AttendanceRecord {
            employee_id: "ENG-001".to_string(),
            date: date(2024, 1, 1),
            status: AttendanceStatus::HalfDay,
        };
        assert!(filter.matches_attendance(&record, None));
        record.status = AttendanceStatus::Absent;
        assert!(!filter.matches_attendance(&record, None));
    }

    #[test]
    fn test_reason_filter() {
        let filter = RecordFilter::new().with_reason(AttritionReason::Retired);
        let record = AttritionRecord {
            employee_id: "ENG-001".to_string(),
            exit_date: date(2024, 3, 1),
            reason: AttritionReason::Voluntary,
            details: None,
        };
        assert!(!filter.matches_attrition(&record, None));
    }
}
