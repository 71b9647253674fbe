//! HTTP API module for the HR dashboard.
//!
//! This module serves the dashboard KPIs and chart series as JSON.

mod charts;
mod handlers;
mod request;
mod response;
mod state;

pub use charts::{attendance_chart, attrition_chart, leave_chart};
pub use handlers::create_router;
pub use request::{DateRangeQuery, KpiQuery};
pub use response::{
    ApiError, ApiErrorResponse, ChartPoint, ChartResponse, DashboardResponse,
    EmployeeAttendanceResponse, EmployeeLeavesResponse, FilterEcho,
};
pub use state::AppState;
