//! Boundary validation.
//!
//! Query parameters and incoming records are checked here, before they
//! reach the store or the aggregators. Query validators stop at the first
//! problem. Record validators collect every problem and report them in one
//! [`DashboardError::Validation`], joined with `"; "`.

use chrono::{Duration, NaiveDate};

use crate::error::{DashboardError, DashboardResult};
use crate::filter::{Department, DepartmentSet};
use crate::models::{AttendanceRecord, AttritionRecord, DateWindow, Employee, LeaveRecord};

/// Longest accepted query window, in days between start and end.
pub const MAX_RANGE_DAYS: i64 = 1825;

/// Longest employee name, in characters.
pub const MAX_NAME_LENGTH: usize = 100;

/// Longest single leave, in days.
pub const MAX_LEAVE_DAYS: u32 = 365;

/// Date format accepted on the wire.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Parses a `YYYY-MM-DD` date.
pub fn parse_date(field: &str, value: &str) -> DashboardResult<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), DATE_FORMAT).map_err(|_| {
        DashboardError::validation(field, format!("'{}' is not a YYYY-MM-DD date", value))
    })
}

/// Parses optional window bounds.
///
/// Empty strings count as absent. Ordering and span are only checked when
/// both bounds are given, and a span of more than `max_range_days` days is
/// rejected.
///
/// # Example
///
/// ```
/// use hr_dashboard::validation::{MAX_RANGE_DAYS, validate_date_range};
///
/// let (start, end) = validate_date_range(Some("2024-01-01"), None, MAX_RANGE_DAYS)?;
/// assert!(start.is_some());
/// assert!(end.is_none());
///
/// assert!(validate_date_range(Some("2024-02-01"), Some("2024-01-01"), MAX_RANGE_DAYS).is_err());
/// # Ok::<(), hr_dashboard::error::DashboardError>(())
/// ```
pub fn validate_date_range(
    start: Option<&str>,
    end: Option<&str>,
    max_range_days: i64,
) -> DashboardResult<(Option<NaiveDate>, Option<NaiveDate>)> {
    let start = non_empty(start)
        .map(|value| parse_date("start_date", value))
        .transpose()?;
    let end = non_empty(end)
        .map(|value| parse_date("end_date", value))
        .transpose()?;

    if let (Some(start), Some(end)) = (start, end) {
        if start > end {
            return Err(DashboardError::validation(
                "start_date",
                "start date must not be after end date",
            ));
        }
        if (end - start).num_days() > max_range_days {
            return Err(DashboardError::validation(
                "end_date",
                format!("date range cannot exceed {} days", max_range_days),
            ));
        }
    }
    Ok((start, end))
}

/// Checks the window an aggregator will resolve from optional bounds.
///
/// Missing bounds are filled the way [`DateWindow::resolve`] fills them: the
/// start `default_days` before `today`, the end at `today`. A lone bound on
/// the wrong side of the default is reported against the bound the caller
/// gave, and so is a resolved span of more than `max_range_days` days.
///
/// # Example
///
/// ```
/// use hr_dashboard::validation::{MAX_RANGE_DAYS, validate_window};
/// use chrono::NaiveDate;
///
/// let today = NaiveDate::from_ymd_opt(2024, 6, 30).unwrap();
/// let end = NaiveDate::from_ymd_opt(2024, 1, 31);
///
/// assert!(validate_window(None, end, 365, today, MAX_RANGE_DAYS).is_ok());
/// assert!(validate_window(None, end, 30, today, MAX_RANGE_DAYS).is_err());
/// ```
pub fn validate_window(
    start: Option<NaiveDate>,
    end: Option<NaiveDate>,
    default_days: i64,
    today: NaiveDate,
    max_range_days: i64,
) -> DashboardResult<DateWindow> {
    let field = match (start, end) {
        (None, Some(_)) => "end_date",
        _ => "start_date",
    };
    let resolved_start = start.unwrap_or(today - Duration::days(default_days));
    let resolved_end = end.unwrap_or(today);

    if resolved_start > resolved_end {
        return Err(DashboardError::validation(
            field,
            format!(
                "window would start on {} and end on {}; start date must not be after end date",
                resolved_start, resolved_end
            ),
        ));
    }
    if (resolved_end - resolved_start).num_days() > max_range_days {
        let field = if end.is_some() { "end_date" } else { "start_date" };
        return Err(DashboardError::validation(
            field,
            format!("date range cannot exceed {} days", max_range_days),
        ));
    }
    DateWindow::new(resolved_start, resolved_end)
}

/// Resolves an optional department parameter against the known departments.
pub fn validate_department(
    department: Option<&str>,
    departments: &DepartmentSet,
) -> DashboardResult<Option<Department>> {
    non_empty(department)
        .map(|label| departments.validate(label))
        .transpose()
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|value| !value.trim().is_empty())
}

/// Problems found in one record.
#[derive(Debug, Default)]
struct Problems(Vec<String>);

impl Problems {
    fn check(&mut self, ok: bool, message: impl Into<String>) {
        if !ok {
            self.0.push(message.into());
        }
    }

    fn into_result(self, record: &str) -> DashboardResult<()> {
        if self.0.is_empty() {
            Ok(())
        } else {
            Err(DashboardError::validation(record, self.0.join("; ")))
        }
    }
}

fn is_valid_employee_id(id: &str) -> bool {
    !id.is_empty()
        && id
            .chars()
            .all(|c| c.is_ascii_uppercase() || c.is_ascii_digit() || c == '-')
}

/// Checks an employee before it is stored.
pub fn validate_employee(employee: &Employee, today: NaiveDate) -> DashboardResult<()> {
    let mut problems = Problems::default();
    if employee.id.trim().is_empty() {
        problems.check(false, "employee id is required");
    } else {
        problems.check(
            is_valid_employee_id(&employee.id),
            "employee id must contain only uppercase letters, digits and hyphens",
        );
    }
    if employee.name.trim().is_empty() {
        problems.check(false, "employee name is required");
    } else {
        problems.check(
            employee.name.chars().count() <= MAX_NAME_LENGTH,
            format!("employee name must be at most {} characters", MAX_NAME_LENGTH),
        );
    }
    problems.check(
        !employee.department.trim().is_empty(),
        "department is required",
    );
    problems.check(
        employee.join_date <= today,
        "join date cannot be in the future",
    );
    problems.into_result("employee")
}

/// Checks an attendance row before it is stored.
pub fn validate_attendance(record: &AttendanceRecord, today: NaiveDate) -> DashboardResult<()> {
    let mut problems = Problems::default();
    problems.check(
        !record.employee_id.trim().is_empty(),
        "employee id is required",
    );
    problems.check(
        record.date <= today,
        "attendance date cannot be in the future",
    );
    problems.into_result("attendance")
}

/// Checks a leave before it is stored.
pub fn validate_leave(leave: &LeaveRecord, today: NaiveDate) -> DashboardResult<()> {
    let mut problems = Problems::default();
    problems.check(
        !leave.employee_id.trim().is_empty(),
        "employee id is required",
    );
    problems.check(
        leave.start_date <= leave.end_date,
        "start date must not be after end date",
    );
    problems.check(
        leave.start_date <= today,
        "leave start date cannot be in the future",
    );
    problems.check(leave.duration > 0, "duration must be a positive number of days");
    problems.check(
        leave.duration <= MAX_LEAVE_DAYS,
        format!("leave duration cannot exceed {} days", MAX_LEAVE_DAYS),
    );
    problems.into_result("leave")
}

/// Checks an exit before it is stored.
pub fn validate_attrition(record: &AttritionRecord, today: NaiveDate) -> DashboardResult<()> {
    let mut problems = Problems::default();
    problems.check(
        !record.employee_id.trim().is_empty(),
        "employee id is required",
    );
    problems.check(record.exit_date <= today, "exit date cannot be in the future");
    problems.into_result("attrition")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{AttendanceStatus, AttritionReason, EmployeeStatus, LeaveType};

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn today() -> NaiveDate {
        date(2024, 6, 30)
    }

    fn message(err: DashboardError) -> String {
        match err {
            DashboardError::Validation { message, .. } => message,
            other => panic!("expected validation error, got {:?}", other),
        }
    }

    #[test]
    fn test_parse_date() {
        assert_eq!(parse_date("start_date", "2024-02-29").unwrap(), date(2024, 2, 29));
        assert!(parse_date("start_date", "2023-02-29").is_err());
        assert!(parse_date("start_date", "29/02/2024").is_err());
    }

    #[test]
    fn test_date_range_bounds_are_independent() {
        assert_eq!(
            validate_date_range(None, None, MAX_RANGE_DAYS).unwrap(),
            (None, None)
        );
        assert_eq!(
            validate_date_range(Some(""), Some("2024-01-31"), MAX_RANGE_DAYS).unwrap(),
            (None, Some(date(2024, 1, 31)))
        );
    }

    #[test]
    fn test_date_range_rejects_bad_input() {
        let err = validate_date_range(Some("2024-13-01"), None, MAX_RANGE_DAYS).unwrap_err();
        assert!(matches!(err, DashboardError::Validation { ref field, .. } if field == "start_date"));

        assert!(validate_date_range(Some("2024-03-01"), Some("2024-02-01"), MAX_RANGE_DAYS).is_err());
    }

    #[test]
    fn test_date_range_span_limit() {
        // 2019-01-01 to 2023-12-31 is 1825 days apart.
        assert!(validate_date_range(Some("2019-01-01"), Some("2023-12-31"), MAX_RANGE_DAYS).is_ok());
        assert!(validate_date_range(Some("2019-01-01"), Some("2024-01-01"), MAX_RANGE_DAYS).is_err());
        assert!(validate_date_range(Some("2024-01-01"), Some("2024-01-10"), 5).is_err());
    }

    #[test]
    fn test_window_with_lone_end_before_default_start() {
        // 2024-01-31 is before 2024-05-31, the 30-day default start.
        let err = validate_window(None, Some(date(2024, 1, 31)), 30, today(), MAX_RANGE_DAYS)
            .unwrap_err();
        assert!(matches!(err, DashboardError::Validation { ref field, .. } if field == "end_date"));

        let window =
            validate_window(None, Some(date(2024, 1, 31)), 365, today(), MAX_RANGE_DAYS).unwrap();
        assert_eq!(window.start(), date(2023, 7, 1));
        assert_eq!(window.end(), date(2024, 1, 31));
    }

    #[test]
    fn test_window_with_lone_future_start() {
        let err = validate_window(Some(date(2024, 7, 15)), None, 30, today(), MAX_RANGE_DAYS)
            .unwrap_err();
        assert!(matches!(err, DashboardError::Validation { ref field, .. } if field == "start_date"));
    }

    #[test]
    fn test_window_span_applies_to_resolved_bounds() {
        let err = validate_window(Some(date(1990, 1, 1)), None, 30, today(), MAX_RANGE_DAYS)
            .unwrap_err();
        assert!(matches!(err, DashboardError::Validation { ref field, .. } if field == "start_date"));
        assert!(message(err).contains("1825"));

        let window = validate_window(None, None, 365, today(), MAX_RANGE_DAYS).unwrap();
        assert_eq!(window.days(), 366);
    }

    #[test]
    fn test_validate_department() {
        let departments: DepartmentSet = vec!["Sales".to_string()].into_iter().collect();
        assert_eq!(validate_department(None, &departments).unwrap(), None);
        assert_eq!(validate_department(Some(" "), &departments).unwrap(), None);
        assert_eq!(
            validate_department(Some("Sales"), &departments).unwrap(),
            Some(Department::new("Sales"))
        );
        assert!(validate_department(Some("Marketing"), &departments).is_err());
    }

    #[test]
    fn test_valid_employee() {
        let employee = Employee {
            id: "ENG-001".to_string(),
            name: "Ananya Iyer".to_string(),
            department: "Engineering".to_string(),
            join_date: date(2022, 4, 1),
            status: EmployeeStatus::Active,
        };
        assert!(validate_employee(&employee, today()).is_ok());
    }

    #[test]
    fn test_employee_problems_are_collected() {
        let employee = Employee {
            id: "eng_1".to_string(),
            name: "x".repeat(101),
            department: String::new(),
            join_date: date(2024, 7, 1),
            status: EmployeeStatus::Active,
        };

        let err = validate_employee(&employee, today()).unwrap_err();
        let message = message(err);
        assert!(message.contains("uppercase"));
        assert!(message.contains("at most 100"));
        assert!(message.contains("department is required"));
        assert!(message.contains("join date"));
    }

    #[test]
    fn test_attendance_in_future_is_rejected() {
        let record = AttendanceRecord {
            employee_id: "ENG-001".to_string(),
            date: date(2024, 7, 1),
            status: AttendanceStatus::Present,
        };
        assert!(validate_attendance(&record, today()).is_err());
        assert!(validate_attendance(&record, date(2024, 7, 1)).is_ok());
    }

    #[test]
    fn test_leave_checks() {
        let mut leave = LeaveRecord {
            employee_id: "ENG-001".to_string(),
            leave_type: LeaveType::Maternity,
            start_date: date(2024, 1, 1),
            end_date: date(2024, 6, 1),
            duration: 120,
            reason: None,
            approved: true,
        };
        assert!(validate_leave(&leave, today()).is_ok());

        leave.duration = 400;
        leave.end_date = date(2023, 12, 1);
        let message = message(validate_leave(&leave, today()).unwrap_err());
        assert!(message.contains("after end date"));
        assert!(message.contains("365"));

        leave.duration = 0;
        assert!(message_of_leave(&leave).contains("positive"));
    }

    fn message_of_leave(leave: &LeaveRecord) -> String {
        message(validate_leave(leave, today()).unwrap_err())
    }

    #[test]
    fn test_attrition_in_future_is_rejected() {
        let record = AttritionRecord {
            employee_id: "ENG-001".to_string(),
            exit_date: date(2024, 8, 1),
            reason: AttritionReason::Voluntary,
            details: None,
        };
        let err = validate_attrition(&record, today()).unwrap_err();
        assert!(matches!(err, DashboardError::Validation { ref field, .. } if field == "attrition"));
    }
}
