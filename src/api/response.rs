//! Response types for the HR dashboard API.
//!
//! This module defines the JSON bodies returned by the handlers and the
//! mapping from [`DashboardError`] to HTTP errors.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::DashboardError;
use crate::filter::{DashboardFilter, DepartmentSet};
use crate::models::{AttendanceSummary, LeaveTotals, ScopedKpis, SummaryKpis};

/// API error response structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiError {
    /// Error code for programmatic handling.
    pub code: String,
    /// Human-readable error message.
    pub message: String,
    /// Optional details about the error.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl ApiError {
    /// Creates a new API error.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: None,
        }
    }

    /// Creates a new API error with details.
    pub fn with_details(
        code: impl Into<String>,
        message: impl Into<String>,
        details: impl Into<String>,
    ) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: Some(details.into()),
        }
    }

    /// Creates a validation error response.
    pub fn validation_error(message: impl Into<String>) -> Self {
        Self::new("VALIDATION_ERROR", message)
    }
}

/// API error with HTTP status code.
#[derive(Debug)]
pub struct ApiErrorResponse {
    /// The HTTP status code.
    pub status: StatusCode,
    /// The error body.
    pub error: ApiError,
}

impl IntoResponse for ApiErrorResponse {
    fn into_response(self) -> Response {
        (self.status, Json(self.error)).into_response()
    }
}

impl From<DashboardError> for ApiErrorResponse {
    fn from(error: DashboardError) -> Self {
        let message = error.to_string();
        match error {
            DashboardError::Validation { field, .. } => ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error: ApiError::with_details(
                    "VALIDATION_ERROR",
                    message,
                    format!("Check the '{}' parameter", field),
                ),
            },
            DashboardError::NotFound { .. } => ApiErrorResponse {
                status: StatusCode::NOT_FOUND,
                error: ApiError::new("NOT_FOUND", message),
            },
            DashboardError::Conflict { .. } => ApiErrorResponse {
                status: StatusCode::CONFLICT,
                error: ApiError::new("CONFLICT", message),
            },
            DashboardError::InvariantViolation { .. } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details(
                    "INTERNAL_ERROR",
                    "KPI computation failed",
                    message,
                ),
            },
            DashboardError::Store { .. } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details("STORE_ERROR", "Record store failure", message),
            },
            DashboardError::ConfigNotFound { .. } | DashboardError::ConfigParseError { .. } => {
                ApiErrorResponse {
                    status: StatusCode::INTERNAL_SERVER_ERROR,
                    error: ApiError::with_details("CONFIG_ERROR", "Configuration error", message),
                }
            }
        }
    }
}

/// Body of `GET /api/dashboard`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DashboardResponse {
    /// Organisation-wide headline KPIs.
    pub kpis: SummaryKpis,
    /// Departments of active employees.
    pub departments: Vec<String>,
    /// The filter as resolved.
    pub filter: FilterEcho,
    /// Figures for the selected department, when one was given.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scoped: Option<ScopedKpis>,
}

/// The resolved dashboard filter, echoed back to the caller.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FilterEcho {
    /// Selected department.
    pub department: Option<String>,
    /// Window start.
    pub start_date: chrono::NaiveDate,
    /// Window end.
    pub end_date: chrono::NaiveDate,
}

impl FilterEcho {
    /// Echo of a resolved filter.
    pub fn from_filter(filter: &DashboardFilter) -> Self {
        Self {
            department: filter.department().map(ToString::to_string),
            start_date: filter.window().start(),
            end_date: filter.window().end(),
        }
    }
}

/// Labels of a department set, in order.
pub fn department_labels(departments: &DepartmentSet) -> Vec<String> {
    departments.iter().map(ToString::to_string).collect()
}

/// One bar or slice of a chart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartPoint {
    /// Category label.
    pub label: String,
    /// Plotted value.
    pub value: Decimal,
    /// Fill colour, `#rrggbb`.
    pub color: String,
}

/// Body of the chart endpoints.
///
/// `success` is false when there is nothing to plot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartResponse {
    /// Whether the series has any points.
    pub success: bool,
    /// Category labels, in plotting order.
    pub data: Vec<String>,
    /// The plotted points.
    pub series: Vec<ChartPoint>,
}

impl ChartResponse {
    /// Wraps a series.
    pub fn new(series: Vec<ChartPoint>) -> Self {
        Self {
            success: !series.is_empty(),
            data: series.iter().map(|point| point.label.clone()).collect(),
            series,
        }
    }
}

/// Body of `GET /api/employees/{id}/attendance`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmployeeAttendanceResponse {
    /// Employee id.
    pub employee_id: String,
    /// Attendance over the window.
    #[serde(flatten)]
    pub attendance: AttendanceSummary,
}

/// Body of `GET /api/employees/{id}/leaves`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmployeeLeavesResponse {
    /// Employee id.
    pub employee_id: String,
    /// Approved leave totals over the window.
    #[serde(flatten)]
    pub leaves: LeaveTotals,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_error_serialization() {
        let error = ApiError::new("TEST_ERROR", "Test message");
        let json = serde_json::to_string(&error).unwrap();
        assert!(json.contains("\"code\":\"TEST_ERROR\""));
        assert!(json.contains("\"message\":\"Test message\""));
        assert!(!json.contains("details")); // Should be skipped when None
    }

    #[test]
    fn test_validation_error_is_bad_request() {
        let api_error: ApiErrorResponse =
            DashboardError::validation("start_date", "not a date").into();
        assert_eq!(api_error.status, StatusCode::BAD_REQUEST);
        assert_eq!(api_error.error.code, "VALIDATION_ERROR");
        assert!(api_error.error.message.contains("start_date"));
    }

    #[test]
    fn test_status_mapping() {
        let cases = [
            (DashboardError::employee_not_found("X-1"), StatusCode::NOT_FOUND, "NOT_FOUND"),
            (
                DashboardError::Conflict {
                    message: "duplicate".to_string(),
                },
                StatusCode::CONFLICT,
                "CONFLICT",
            ),
            (
                DashboardError::InvariantViolation {
                    message: "inverted window".to_string(),
                },
                StatusCode::INTERNAL_SERVER_ERROR,
                "INTERNAL_ERROR",
            ),
            (
                DashboardError::Store {
                    message: "poisoned".to_string(),
                },
                StatusCode::INTERNAL_SERVER_ERROR,
                "STORE_ERROR",
            ),
        ];
        for (error, status, code) in cases {
            let api_error: ApiErrorResponse = error.into();
            assert_eq!(api_error.status, status);
            assert_eq!(api_error.error.code, code);
        }
    }

    #[test]
    fn test_empty_chart_is_unsuccessful() {
        let chart = ChartResponse::new(Vec::new());
        assert!(!chart.success);
        assert!(chart.data.is_empty());
    }
}
