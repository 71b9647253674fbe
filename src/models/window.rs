//! Date window model.
//!
//! This module contains the [`DateWindow`] type, the inclusive
//! `[start, end]` range that scopes every KPI query.

use chrono::{Duration, NaiveDate};
use serde::Serialize;

use crate::error::{DashboardError, DashboardResult};

/// An inclusive date range.
///
/// A window is only ever built through [`DateWindow::new`] or
/// [`DateWindow::resolve`], both of which refuse `start > end`.
///
/// # Example
///
/// ```
/// use hr_dashboard::models::DateWindow;
/// use chrono::NaiveDate;
///
/// let window = DateWindow::new(
///     NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
///     NaiveDate::from_ymd_opt(2024, 1, 31).unwrap(),
/// )
/// .unwrap();
///
/// assert!(window.contains(NaiveDate::from_ymd_opt(2024, 1, 15).unwrap()));
/// assert_eq!(window.days(), 31);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct DateWindow {
    start: NaiveDate,
    end: NaiveDate,
}

impl DateWindow {
    /// Creates a window, failing when `start` is after `end`.
    ///
    /// An inverted window reaching this point means boundary validation was
    /// skipped, so the failure is an invariant violation rather than a
    /// validation error.
    pub fn new(start: NaiveDate, end: NaiveDate) -> DashboardResult<Self> {
        if start > end {
            return Err(DashboardError::InvariantViolation {
                message: format!("window start {} is after end {}", start, end),
            });
        }
        Ok(Self { start, end })
    }

    /// Resolves optional bounds against a default look-back.
    ///
    /// A missing `start` becomes `today - default_days`; a missing `end`
    /// becomes `today`.
    ///
    /// # Example
    ///
    /// ```
    /// use hr_dashboard::models::DateWindow;
    /// use chrono::NaiveDate;
    ///
    /// let today = NaiveDate::from_ymd_opt(2024, 3, 31).unwrap();
    /// let window = DateWindow::resolve(None, None, 30, today).unwrap();
    ///
    /// assert_eq!(window.start(), NaiveDate::from_ymd_opt(2024, 3, 1).unwrap());
    /// assert_eq!(window.end(), today);
    /// ```
    pub fn resolve(
        start: Option<NaiveDate>,
        end: Option<NaiveDate>,
        default_days: i64,
        today: NaiveDate,
    ) -> DashboardResult<Self> {
        let start = start.unwrap_or(today - Duration::days(default_days));
        let end = end.unwrap_or(today);
        Self::new(start, end)
    }

    /// First day of the window (inclusive).
    pub fn start(&self) -> NaiveDate {
        self.start
    }

    /// Last day of the window (inclusive).
    pub fn end(&self) -> NaiveDate {
        self.end
    }

    /// Checks if a given date falls within this window, inclusive of both ends.
    pub fn contains(&self, date: NaiveDate) -> bool {
        date >= self.start && date <= self.end
    }

    /// Number of calendar days covered, counting both ends.
    pub fn days(&self) -> i64 {
        (self.end - self.start).num_days() + 1
    }
}
