//! Headcount providers for the attrition rate denominator.
//!
//! The attrition rate is "separations in the window divided by headcount".
//! Headcount is pluggable so that a point-in-time implementation can replace
//! the current-active snapshot without touching the rate formula.

use crate::error::DashboardResult;
use crate::models::{DateWindow, EmployeeStatus};
use crate::store::{EntityKind, RecordFilter, RecordStore};

/// Supplies the headcount an attrition rate is measured against.
pub trait HeadcountProvider: Send + Sync {
    /// Returns the headcount to use for separations within `window`.
    fn headcount(&self, store: &dyn RecordStore, window: &DateWindow) -> DashboardResult<u64>;
}

/// Uses the number of currently active employees, whatever the window.
///
/// This is a snapshot stand-in, not the average headcount over the window.
#[derive(Debug, Clone, Copy, Default)]
pub struct ActiveHeadcount;

impl HeadcountProvider for ActiveHeadcount {
    fn headcount(&self, store: &dyn RecordStore, _window: &DateWindow) -> DashboardResult<u64> {
        store.count(
            EntityKind::Employee,
            &RecordFilter::new().with_employee_status(EmployeeStatus::Active),
        )
    }
}
