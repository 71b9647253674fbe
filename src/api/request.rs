//! Query parameters accepted by the HR dashboard API.
//!
//! Dates arrive as raw strings so that malformed values are reported as
//! validation errors rather than extractor rejections.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::DashboardResult;
use crate::validation::{validate_date_range, validate_window};

/// Parsed window bounds, before any default look-back is applied.
pub type DateBounds = (Option<NaiveDate>, Option<NaiveDate>);

/// Parses the bounds, then checks the window each default look-back in
/// `default_windows` would resolve them to.
fn checked_bounds(
    start: Option<&str>,
    end: Option<&str>,
    today: NaiveDate,
    default_windows: &[i64],
    max_range_days: i64,
) -> DashboardResult<DateBounds> {
    let (start, end) = validate_date_range(start, end, max_range_days)?;
    for &default_days in default_windows {
        validate_window(start, end, default_days, today, max_range_days)?;
    }
    Ok((start, end))
}

/// `?department=&start_date=&end_date=`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct KpiQuery {
    /// Department label; empty or absent means every department.
    #[serde(default)]
    pub department: Option<String>,
    /// Window start, `YYYY-MM-DD`.
    #[serde(default)]
    pub start_date: Option<String>,
    /// Window end, `YYYY-MM-DD`.
    #[serde(default)]
    pub end_date: Option<String>,
}

impl KpiQuery {
    /// Parses and checks the date bounds as given.
    pub fn dates(&self, max_range_days: i64) -> DashboardResult<DateBounds> {
        validate_date_range(
            self.start_date.as_deref(),
            self.end_date.as_deref(),
            max_range_days,
        )
    }

    /// Parses the date bounds and checks every window they resolve to.
    ///
    /// `default_windows` lists the look-backs of the aggregators the request
    /// will run. A lone bound that inverts any of them is a validation error.
    pub fn bounds(
        &self,
        today: NaiveDate,
        default_windows: &[i64],
        max_range_days: i64,
    ) -> DashboardResult<DateBounds> {
        checked_bounds(
            self.start_date.as_deref(),
            self.end_date.as_deref(),
            today,
            default_windows,
            max_range_days,
        )
    }

    /// The department parameter, with blank values treated as absent.
    pub fn department(&self) -> Option<&str> {
        self.department
            .as_deref()
            .filter(|department| !department.trim().is_empty())
    }
}

/// `?start_date=&end_date=`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DateRangeQuery {
    /// Window start, `YYYY-MM-DD`.
    #[serde(default)]
    pub start_date: Option<String>,
    /// Window end, `YYYY-MM-DD`.
    #[serde(default)]
    pub end_date: Option<String>,
}

impl DateRangeQuery {
    /// Parses and checks the date bounds as given.
    pub fn dates(&self, max_range_days: i64) -> DashboardResult<DateBounds> {
        validate_date_range(
            self.start_date.as_deref(),
            self.end_date.as_deref(),
            max_range_days,
        )
    }

    /// Parses the date bounds and checks the window `default_days` resolves
    /// them to.
    pub fn bounds(
        &self,
        today: NaiveDate,
        default_days: i64,
        max_range_days: i64,
    ) -> DashboardResult<DateBounds> {
        checked_bounds(
            self.start_date.as_deref(),
            self.end_date.as_deref(),
            today,
            &[default_days],
            max_range_days,
        )
    }
}
