//! HTTP request handlers for the HR dashboard API.
//!
//! This module contains the handler functions for all API endpoints.

use std::time::Instant;

use axum::{
    Json, Router,
    extract::{Path, Query, State, rejection::QueryRejection},
    http::{StatusCode, header},
    response::{IntoResponse, Response},
    routing::get,
};
use serde::Serialize;
use tracing::{error, info, warn};
use uuid::Uuid;

use crate::analytics::{
    KpiContext, attendance, attendance_percentage, attrition, departmental_attendance,
    departmental_attrition, leave, leave_distribution, summary_kpis, total_leaves,
};
use crate::error::{DashboardError, DashboardResult};
use crate::filter::{self, DashboardFilter, list_departments};
use crate::validation::validate_department;

use super::charts::{attendance_chart, attrition_chart, leave_chart};
use super::request::{DateRangeQuery, KpiQuery};
use super::response::{
    ApiError, ApiErrorResponse, ChartResponse, DashboardResponse, EmployeeAttendanceResponse,
    EmployeeLeavesResponse, FilterEcho, department_labels,
};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health_handler))
        .route("/api/dashboard", get(dashboard_handler))
        .route("/api/attendance-chart", get(attendance_chart_handler))
        .route("/api/leave-chart", get(leave_chart_handler))
        .route("/api/attrition-chart", get(attrition_chart_handler))
        .route(
            "/api/employees/:id/attendance",
            get(employee_attendance_handler),
        )
        .route("/api/employees/:id/leaves", get(employee_leaves_handler))
        .with_state(state)
}

async fn health_handler() -> &'static str {
    "OK"
}

/// Unwraps query parameters, turning an extractor rejection into a 400.
fn query_params<T>(
    correlation_id: Uuid,
    query: Result<Query<T>, QueryRejection>,
) -> Result<T, Response> {
    match query {
        Ok(Query(params)) => Ok(params),
        Err(rejection) => {
            let body_text = rejection.body_text();
            warn!(
                correlation_id = %correlation_id,
                error = %body_text,
                "Query string rejected"
            );
            Err((
                StatusCode::BAD_REQUEST,
                [(header::CONTENT_TYPE, "application/json")],
                Json(ApiError::validation_error(body_text)),
            )
                .into_response())
        }
    }
}

/// Renders a handler result, logging its outcome.
fn respond<T: Serialize>(
    correlation_id: Uuid,
    endpoint: &'static str,
    started: Instant,
    result: DashboardResult<T>,
) -> Response {
    match result {
        Ok(body) => {
            info!(
                correlation_id = %correlation_id,
                endpoint,
                duration_us = started.elapsed().as_micros() as u64,
                "Request completed successfully"
            );
            (
                StatusCode::OK,
                [(header::CONTENT_TYPE, "application/json")],
                Json(body),
            )
                .into_response()
        }
        Err(err) => {
            match &err {
                DashboardError::InvariantViolation { .. } | DashboardError::Store { .. } => {
                    error!(correlation_id = %correlation_id, endpoint, error = %err, "Request failed");
                }
                _ => {
                    warn!(correlation_id = %correlation_id, endpoint, error = %err, "Request rejected");
                }
            }
            let api_error: ApiErrorResponse = err.into();
            (
                api_error.status,
                [(header::CONTENT_TYPE, "application/json")],
                Json(api_error.error),
            )
                .into_response()
        }
    }
}

fn max_range_days(state: &AppState) -> i64 {
    state.settings().validation.max_range_days
}

/// Handler for GET /api/dashboard.
///
/// Returns the organisation-wide KPIs, the department list, the resolved
/// filter and, when a department is selected, that department's figures.
async fn dashboard_handler(
    State(state): State<AppState>,
    query: Result<Query<KpiQuery>, QueryRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    let started = Instant::now();
    let query = match query_params(correlation_id, query) {
        Ok(query) => query,
        Err(response) => return response,
    };
    info!(
        correlation_id = %correlation_id,
        department = ?query.department(),
        start_date = ?query.start_date,
        end_date = ?query.end_date,
        "Processing dashboard request"
    );

    respond(correlation_id, "dashboard", started, dashboard(&state, &query))
}

fn dashboard(state: &AppState, query: &KpiQuery) -> DashboardResult<DashboardResponse> {
    let store = state.store();
    let today = state.today();
    let (start, end) = query.bounds(
        today,
        &[
            filter::DEFAULT_WINDOW_DAYS,
            attendance::DEFAULT_WINDOW_DAYS,
            leave::DEFAULT_WINDOW_DAYS,
            attrition::DEFAULT_WINDOW_DAYS,
        ],
        max_range_days(state),
    )?;
    let departments = list_departments(store)?;
    let department = validate_department(query.department(), &departments)?;

    let filter = DashboardFilter::new(department, start, end, today)?;
    let ctx = KpiContext::new(store, today);
    let kpis = summary_kpis(&ctx, start, end)?;
    let scoped = match filter.department() {
        Some(_) => Some(filter.scoped_kpis(store)?),
        None => None,
    };

    Ok(DashboardResponse {
        kpis,
        departments: department_labels(&departments),
        filter: FilterEcho::from_filter(&filter),
        scoped,
    })
}

/// Handler for GET /api/attendance-chart.
async fn attendance_chart_handler(
    State(state): State<AppState>,
    query: Result<Query<KpiQuery>, QueryRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    let started = Instant::now();
    let query = match query_params(correlation_id, query) {
        Ok(query) => query,
        Err(response) => return response,
    };

    let result = attendance_series(&state, &query);
    respond(correlation_id, "attendance-chart", started, result)
}

fn attendance_series(state: &AppState, query: &KpiQuery) -> DashboardResult<ChartResponse> {
    let (start, end) = query.bounds(
        state.today(),
        &[attendance::DEFAULT_WINDOW_DAYS],
        max_range_days(state),
    )?;
    let ctx = KpiContext::new(state.store(), state.today());
    let attendance = departmental_attendance(&ctx, start, end)?;
    Ok(attendance_chart(
        &attendance,
        query.department(),
        &state.settings().charts.attendance,
    ))
}

/// Handler for GET /api/leave-chart.
async fn leave_chart_handler(
    State(state): State<AppState>,
    query: Result<Query<DateRangeQuery>, QueryRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    let started = Instant::now();
    let query = match query_params(correlation_id, query) {
        Ok(query) => query,
        Err(response) => return response,
    };

    let result = leave_series(&state, &query);
    respond(correlation_id, "leave-chart", started, result)
}

fn leave_series(state: &AppState, query: &DateRangeQuery) -> DashboardResult<ChartResponse> {
    let (start, end) = query.bounds(
        state.today(),
        leave::DEFAULT_WINDOW_DAYS,
        max_range_days(state),
    )?;
    let ctx = KpiContext::new(state.store(), state.today());
    Ok(leave_chart(&leave_distribution(&ctx, start, end)?))
}

/// Handler for GET /api/attrition-chart.
async fn attrition_chart_handler(
    State(state): State<AppState>,
    query: Result<Query<KpiQuery>, QueryRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    let started = Instant::now();
    let query = match query_params(correlation_id, query) {
        Ok(query) => query,
        Err(response) => return response,
    };

    let result = attrition_series(&state, &query);
    respond(correlation_id, "attrition-chart", started, result)
}

fn attrition_series(state: &AppState, query: &KpiQuery) -> DashboardResult<ChartResponse> {
    let (start, end) = query.bounds(
        state.today(),
        &[attrition::DEFAULT_WINDOW_DAYS],
        max_range_days(state),
    )?;
    let ctx = KpiContext::new(state.store(), state.today());
    let attrition = departmental_attrition(&ctx, start, end)?;
    Ok(attrition_chart(
        &attrition,
        query.department(),
        &state.settings().charts.attrition,
    ))
}

/// Fails with NotFound unless the employee exists.
fn require_employee(state: &AppState, id: &str) -> DashboardResult<()> {
    match state.store().employee(id)? {
        Some(_) => Ok(()),
        None => Err(DashboardError::employee_not_found(id)),
    }
}

/// Handler for GET /api/employees/:id/attendance.
async fn employee_attendance_handler(
    State(state): State<AppState>,
    Path(employee_id): Path<String>,
    query: Result<Query<DateRangeQuery>, QueryRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    let started = Instant::now();
    let query = match query_params(correlation_id, query) {
        Ok(query) => query,
        Err(response) => return response,
    };
    info!(
        correlation_id = %correlation_id,
        employee_id = %employee_id,
        "Processing employee attendance request"
    );

    let result = employee_attendance(&state, employee_id, &query);
    respond(correlation_id, "employee-attendance", started, result)
}

fn employee_attendance(
    state: &AppState,
    employee_id: String,
    query: &DateRangeQuery,
) -> DashboardResult<EmployeeAttendanceResponse> {
    let (start, end) = query.bounds(
        state.today(),
        attendance::DEFAULT_WINDOW_DAYS,
        max_range_days(state),
    )?;
    require_employee(state, &employee_id)?;
    let ctx = KpiContext::new(state.store(), state.today());
    let attendance = attendance_percentage(&ctx, Some(&employee_id), start, end)?;
    Ok(EmployeeAttendanceResponse {
        employee_id,
        attendance,
    })
}

/// Handler for GET /api/employees/:id/leaves.
async fn employee_leaves_handler(
    State(state): State<AppState>,
    Path(employee_id): Path<String>,
    query: Result<Query<DateRangeQuery>, QueryRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    let started = Instant::now();
    let query = match query_params(correlation_id, query) {
        Ok(query) => query,
        Err(response) => return response,
    };
    info!(
        correlation_id = %correlation_id,
        employee_id = %employee_id,
        "Processing employee leave request"
    );

    let result = employee_leaves(&state, employee_id, &query);
    respond(correlation_id, "employee-leaves", started, result)
}

fn employee_leaves(
    state: &AppState,
    employee_id: String,
    query: &DateRangeQuery,
) -> DashboardResult<EmployeeLeavesResponse> {
    let (start, end) = query.bounds(
        state.today(),
        leave::DEFAULT_WINDOW_DAYS,
        max_range_days(state),
    )?;
    require_employee(state, &employee_id)?;
    let ctx = KpiContext::new(state.store(), state.today());
    let leaves = total_leaves(&ctx, Some(&employee_id), start, end)?;
    Ok(EmployeeLeavesResponse {
        employee_id,
        leaves,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DashboardSettings;
    use crate::models::{
        AttendanceRecord, AttendanceStatus, AttritionReason, AttritionRecord, Employee,
        EmployeeStatus,
    };
    use crate::store::InMemoryStore;
    use axum::body::Body;
    use axum::http::Request;
    use chrono::NaiveDate;
    use std::sync::Arc;
    use tower::ServiceExt;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn test_state() -> AppState {
        let store = InMemoryStore::new();
        for (id, department) in [("ENG-1", "Engineering"), ("SAL-1", "Sales"), ("SAL-2", "Sales")] {
            store
                .insert_employee(Employee {
                    id: id.to_string(),
                    name: id.to_string(),
                    department: department.to_string(),
                    join_date: date(2020, 1, 1),
                    status: EmployeeStatus::Active,
                })
                .unwrap();
        }
        store
            .record_attendance(AttendanceRecord {
                employee_id: "ENG-1".to_string(),
                date: date(2024, 6, 10),
                status: AttendanceStatus::Present,
            })
            .unwrap();
        store
            .record_exit(AttritionRecord {
                employee_id: "SAL-2".to_string(),
                exit_date: date(2024, 3, 1),
                reason: AttritionReason::Voluntary,
                details: None,
            })
            .unwrap();

        let settings = DashboardSettings {
            today: Some(date(2024, 6, 30)),
            ..DashboardSettings::default()
        };
        AppState::new(Arc::new(store), settings)
    }

    async fn get(uri: &str) -> (StatusCode, serde_json::Value) {
        let app = create_router(test_state());
        let response = app
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let json = serde_json::from_slice(&body).unwrap_or(serde_json::Value::Null);
        (status, json)
    }

    #[tokio::test]
    async fn test_health() {
        let app = create_router(test_state());
        let response = app
            .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_dashboard_without_department() {
        let (status, json) = get("/api/dashboard").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["kpis"]["total_employees"], 2);
        assert_eq!(json["departments"], serde_json::json!(["Engineering", "Sales"]));
        assert_eq!(json["filter"]["start_date"], "2024-05-31");
        assert!(json.get("scoped").is_none());
    }

    #[tokio::test]
    async fn test_dashboard_with_department_adds_scoped_kpis() {
        let (status, json) = get("/api/dashboard?department=Engineering").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["scoped"]["department"], "Engineering");
        assert_eq!(json["scoped"]["headcount"], 1);
        assert_eq!(json["scoped"]["attendance"]["total_days"], 1);
    }

    #[tokio::test]
    async fn test_unknown_department_is_rejected() {
        let (status, json) = get("/api/dashboard?department=Legal").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(json["code"], "VALIDATION_ERROR");
    }

    #[tokio::test]
    async fn test_employee_not_found() {
        let (status, json) = get("/api/employees/NOPE/attendance").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(json["code"], "NOT_FOUND");
    }
}
