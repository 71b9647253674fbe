//! Dashboard filtering.
//!
//! A [`DashboardFilter`] pairs an optional department with a date window and
//! turns them into the record subsets the dashboard tiles are built from.
//! It is resolved once, when constructed, so every accessor sees the same
//! window no matter when it is called.

mod departments;

use chrono::NaiveDate;
use serde::Serialize;
use tracing::debug;

use crate::analytics::{summarize_attendance, summarize_leaves};
use crate::error::DashboardResult;
use crate::models::{
    AttendanceRecord, AttritionRecord, DateWindow, Employee, EmployeeStatus, LeaveRecord,
    ScopedKpis,
};
use crate::store::{RecordFilter, RecordStore};

pub use departments::{Department, DepartmentSet, list_departments};

/// Days the dashboard filter looks back when no start date is given.
pub const DEFAULT_WINDOW_DAYS: i64 = 30;

/// A department and date window applied to the dashboard.
///
/// # Example
///
/// ```
/// use hr_dashboard::filter::{Department, DashboardFilter};
/// use chrono::NaiveDate;
///
/// let today = NaiveDate::from_ymd_opt(2024, 3, 31).unwrap();
/// let filter = DashboardFilter::new(Some(Department::new("Sales")), None, None, today)?;
///
/// assert_eq!(filter.window().start(), NaiveDate::from_ymd_opt(2024, 3, 1).unwrap());
/// assert_eq!(filter.window().end(), today);
/// # Ok::<(), hr_dashboard::error::DashboardError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DashboardFilter {
    department: Option<Department>,
    window: DateWindow,
}

impl DashboardFilter {
    /// Resolves the window and builds the filter.
    ///
    /// A missing start defaults to [`DEFAULT_WINDOW_DAYS`] before the end,
    /// and a missing end defaults to `today`.
    pub fn new(
        department: Option<Department>,
        start: Option<NaiveDate>,
        end: Option<NaiveDate>,
        today: NaiveDate,
    ) -> DashboardResult<Self> {
        let window = DateWindow::resolve(start, end, DEFAULT_WINDOW_DAYS, today)?;
        Ok(Self { department, window })
    }

    /// The department restriction, if any.
    pub fn department(&self) -> Option<&Department> {
        self.department.as_ref()
    }

    /// The resolved window.
    pub fn window(&self) -> DateWindow {
        self.window
    }

    fn scoped(&self, filter: RecordFilter) -> RecordFilter {
        match &self.department {
            Some(department) => filter.in_department(department.as_str()),
            None => filter,
        }
    }

    /// Store criteria for [`employees`](Self::employees).
    ///
    /// The window is not applied: employees are selected by status only.
    pub fn employee_filter(&self) -> RecordFilter {
        self.scoped(RecordFilter::new().with_employee_status(EmployeeStatus::Active))
    }

    /// Store criteria for [`attendance`](Self::attendance).
    pub fn attendance_filter(&self) -> RecordFilter {
        self.scoped(RecordFilter::new().within(self.window))
    }

    /// Store criteria for [`leaves`](Self::leaves).
    pub fn leave_filter(&self) -> RecordFilter {
        self.scoped(RecordFilter::new().within(self.window).approved_only())
    }

    /// Store criteria for [`attrition`](Self::attrition).
    pub fn attrition_filter(&self) -> RecordFilter {
        self.scoped(RecordFilter::new().within(self.window))
    }

    /// Active employees in scope.
    pub fn employees(&self, store: &dyn RecordStore) -> DashboardResult<Vec<Employee>> {
        store.employees(&self.employee_filter())
    }

    /// Attendance rows dated inside the window.
    pub fn attendance(&self, store: &dyn RecordStore) -> DashboardResult<Vec<AttendanceRecord>> {
        store.attendance(&self.attendance_filter())
    }

    /// Approved leaves starting inside the window.
    pub fn leaves(&self, store: &dyn RecordStore) -> DashboardResult<Vec<LeaveRecord>> {
        store.leaves(&self.leave_filter())
    }

    /// Exits dated inside the window.
    pub fn attrition(&self, store: &dyn RecordStore) -> DashboardResult<Vec<AttritionRecord>> {
        store.attrition(&self.attrition_filter())
    }

    /// Headcount, attendance, leave and exit figures for the filtered subsets.
    pub fn scoped_kpis(&self, store: &dyn RecordStore) -> DashboardResult<ScopedKpis> {
        let headcount = self.employees(store)?.len() as u64;
        let attendance = summarize_attendance(&self.attendance(store)?);
        let leaves = summarize_leaves(&self.leaves(store)?);
        let separations = self.attrition(store)?.len() as u64;
        debug!(
            department = self.department.as_ref().map(Department::as_str),
            start = %self.window.start(),
            end = %self.window.end(),
            headcount,
            "Computed scoped KPIs"
        );

        Ok(ScopedKpis {
            department: self.department.as_ref().map(Department::to_string),
            headcount,
            attendance,
            leaves,
            separations,
        })
    }
}
