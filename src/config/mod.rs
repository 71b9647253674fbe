//! Configuration loading for the HR dashboard.
//!
//! This module loads the dashboard settings and the seed dataset from a
//! directory of YAML files, and turns the dataset into a validated
//! [`InMemoryStore`](crate::store::InMemoryStore).
//!
//! # Example
//!
//! ```no_run
//! use hr_dashboard::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./config/sample").unwrap();
//! println!("Loaded {} employees", config.dataset().employees.len());
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{
    AttendanceFile, AttritionFile, ChartSettings, DashboardSettings, Dataset, EmployeesFile,
    LeavesFile, ServerSettings, Thresholds, ValidationSettings,
};
