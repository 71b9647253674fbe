//! KPI aggregation for the HR dashboard.
//!
//! This module contains the attendance, leave, attrition and employee
//! aggregators. Each is a read-only function of its arguments and the
//! current contents of a [`RecordStore`]; none keeps state between calls.
//!
//! Omitted window bounds are resolved per component. Attendance looks back
//! [`attendance::DEFAULT_WINDOW_DAYS`] (30) days, while leave and attrition
//! look back [`leave::DEFAULT_WINDOW_DAYS`] and
//! [`attrition::DEFAULT_WINDOW_DAYS`] (365) days.
//!
//! # Example
//!
//! ```
//! use hr_dashboard::analytics::{self, KpiContext};
//! use hr_dashboard::store::InMemoryStore;
//! use chrono::NaiveDate;
//!
//! let store = InMemoryStore::new();
//! let ctx = KpiContext::new(&store, NaiveDate::from_ymd_opt(2024, 6, 30).unwrap());
//!
//! let summary = analytics::attendance_percentage(&ctx, None, None, None)?;
//! assert_eq!(summary.total_days, 0);
//! # Ok::<(), hr_dashboard::error::DashboardError>(())
//! ```

pub mod attendance;
pub mod attrition;
pub mod employee;
#[cfg(test)]
mod fixtures;
mod headcount;
pub mod leave;
mod ratio;

use std::collections::HashMap;

use chrono::NaiveDate;

use crate::error::DashboardResult;
use crate::store::{RecordFilter, RecordStore};

pub use attendance::{attendance_percentage, departmental_attendance, summarize_attendance};
pub use attrition::{attrition_by_reason, attrition_rate, departmental_attrition};
pub use employee::{employees_by_department, summary_kpis, total_employees};
pub use headcount::{ActiveHeadcount, HeadcountProvider};
pub use leave::{departmental_leaves, leave_distribution, summarize_leaves, total_leaves};
pub use ratio::{RATIO_DECIMAL_PLACES, average, percentage};

/// Everything an aggregator reads besides its own arguments.
#[derive(Clone, Copy)]
pub struct KpiContext<'a> {
    store: &'a dyn RecordStore,
    today: NaiveDate,
    headcount: &'a dyn HeadcountProvider,
}

impl<'a> KpiContext<'a> {
    /// Creates a context over `store`, resolving default windows against
    /// `today` and measuring attrition against [`ActiveHeadcount`].
    pub fn new(store: &'a dyn RecordStore, today: NaiveDate) -> Self {
        Self {
            store,
            today,
            headcount: &ActiveHeadcount,
        }
    }

    /// Replaces the attrition headcount provider.
    pub fn with_headcount(mut self, headcount: &'a dyn HeadcountProvider) -> Self {
        self.headcount = headcount;
        self
    }

    /// The record store being aggregated.
    pub fn store(&self) -> &'a dyn RecordStore {
        self.store
    }

    /// The date default windows end on.
    pub fn today(&self) -> NaiveDate {
        self.today
    }

    /// The attrition headcount provider.
    pub fn headcount(&self) -> &'a dyn HeadcountProvider {
        self.headcount
    }
}

impl std::fmt::Debug for KpiContext<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("KpiContext")
            .field("today", &self.today)
            .finish_non_exhaustive()
    }
}

/// Department of every employee matching `filter`, keyed by employee id.
///
/// Event rows carry only an employee id; departmental breakdowns read the
/// rows once and look each one up here.
fn department_index(
    store: &dyn RecordStore,
    filter: &RecordFilter,
) -> DashboardResult<HashMap<String, String>> {
    Ok(store
        .employees(filter)?
        .into_iter()
        .map(|employee| (employee.id, employee.department))
        .collect())
}
