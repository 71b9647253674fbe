//! Performance benchmarks for the HR dashboard.
//!
//! This benchmark suite measures KPI aggregation over the in-memory store
//! and the cost of a full dashboard request through the router:
//! - Summary KPIs over a 30-day window
//! - Departmental breakdowns
//! - Dashboard request end to end
//! - Scaling with headcount
//!
//! Run with: `cargo bench`
//! HTML reports are generated in `target/criterion/`

use std::sync::Arc;

use axum::{body::Body, http::Request};
use chrono::{Duration, NaiveDate};
use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use tower::ServiceExt;

use hr_dashboard::analytics::{
    KpiContext, departmental_attendance, departmental_attrition, departmental_leaves,
    summary_kpis,
};
use hr_dashboard::api::{AppState, create_router};
use hr_dashboard::config::DashboardSettings;
use hr_dashboard::models::{
    AttendanceRecord, AttendanceStatus, AttritionReason, AttritionRecord, Employee,
    EmployeeStatus, LeaveRecord, LeaveType,
};
use hr_dashboard::store::InMemoryStore;

const DEPARTMENTS: [&str; 6] = ["Engineering", "Sales", "HR", "Finance", "Marketing", "Operations"];

fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 6, 30).unwrap()
}

/// Builds a store with `headcount` employees, 60 days of attendance each,
/// a leave every fifth employee and an exit every twentieth.
fn create_store(headcount: usize) -> InMemoryStore {
    let store = InMemoryStore::new();
    let first_day = today() - Duration::days(59);

    for i in 0..headcount {
        let id = format!("EMP-{:05}", i);
        store
            .insert_employee(Employee {
                id: id.clone(),
                name: format!("Employee {}", i),
                department: DEPARTMENTS[i % DEPARTMENTS.len()].to_string(),
                join_date: NaiveDate::from_ymd_opt(2020, 1, 1).unwrap(),
                status: EmployeeStatus::Active,
            })
            .unwrap();

        for day in 0..60 {
            let status = match (i + day) % 10 {
                0 => AttendanceStatus::Absent,
                1 => AttendanceStatus::HalfDay,
                _ => AttendanceStatus::Present,
            };
            store
                .record_attendance(AttendanceRecord {
                    employee_id: id.clone(),
                    date: first_day + Duration::days(day as i64),
                    status,
                })
                .unwrap();
        }

        if i % 5 == 0 {
            let start = today() - Duration::days((i % 300) as i64 + 5);
            store
                .record_leave(LeaveRecord {
                    employee_id: id.clone(),
                    leave_type: LeaveType::ALL[i % LeaveType::ALL.len()],
                    start_date: start,
                    end_date: start + Duration::days(2),
                    duration: 3,
                    reason: None,
                    approved: i % 3 != 0,
                })
                .unwrap();
        }
    }

    for i in (0..headcount).step_by(20) {
        store
            .record_exit(AttritionRecord {
                employee_id: format!("EMP-{:05}", i),
                exit_date: today() - Duration::days((i % 200) as i64),
                reason: AttritionReason::ALL[i % AttritionReason::ALL.len()],
                details: None,
            })
            .unwrap();
    }

    store
}

/// Benchmark: Summary KPIs for 200 employees.
fn bench_summary_kpis(c: &mut Criterion) {
    let store = create_store(200);
    let ctx = KpiContext::new(&store, today());

    c.bench_function("summary_kpis_200", |b| {
        b.iter(|| black_box(summary_kpis(&ctx, None, None).unwrap()))
    });
}

/// Benchmark: The three departmental breakdowns for 200 employees.
fn bench_departmental(c: &mut Criterion) {
    let store = create_store(200);
    let ctx = KpiContext::new(&store, today());

    let mut group = c.benchmark_group("departmental");
    group.bench_function("attendance", |b| {
        b.iter(|| black_box(departmental_attendance(&ctx, None, None).unwrap()))
    });
    group.bench_function("leaves", |b| {
        b.iter(|| black_box(departmental_leaves(&ctx, None, None).unwrap()))
    });
    group.bench_function("attrition", |b| {
        b.iter(|| black_box(departmental_attrition(&ctx, None, None).unwrap()))
    });
    group.finish();
}

/// Benchmark: GET /api/dashboard with a department selected.
fn bench_dashboard_request(c: &mut Criterion) {
    let rt = tokio::runtime::Runtime::new().unwrap();
    let settings = DashboardSettings {
        today: Some(today()),
        ..DashboardSettings::default()
    };
    let state = AppState::new(Arc::new(create_store(200)), settings);
    let router = create_router(state);

    c.bench_function("dashboard_request", |b| {
        b.to_async(&rt).iter(|| async {
            let router = router.clone();
            let response = router
                .oneshot(
                    Request::builder()
                        .uri("/api/dashboard?department=Engineering")
                        .body(Body::empty())
                        .unwrap(),
                )
                .await
                .unwrap();
            black_box(response)
        })
    });
}

/// Benchmark: Summary KPIs at increasing headcounts.
fn bench_scaling(c: &mut Criterion) {
    let mut group = c.benchmark_group("scaling");
    // Larger stores take a while to aggregate
    group.sample_size(10);

    for headcount in [50, 200, 800].iter() {
        let store = create_store(*headcount);
        let ctx = KpiContext::new(&store, today());

        group.throughput(Throughput::Elements(*headcount as u64));
        group.bench_with_input(
            BenchmarkId::new("employees", headcount),
            headcount,
            |b, _| b.iter(|| black_box(summary_kpis(&ctx, None, None).unwrap())),
        );
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_summary_kpis,
    bench_departmental,
    bench_dashboard_request,
    bench_scaling,
);
criterion_main!(benches);
