//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading dashboard
//! settings and seed data from YAML files.

use std::fs;
use std::path::Path;

use chrono::NaiveDate;
use tracing::{info, warn};

use crate::error::{DashboardError, DashboardResult};
use crate::store::InMemoryStore;
use crate::validation::{
    validate_attendance, validate_attrition, validate_employee, validate_leave,
};

use super::types::{
    AttendanceFile, AttritionFile, DashboardSettings, Dataset, EmployeesFile, LeavesFile,
};

/// Loads dashboard settings and the dataset of a configuration directory.
///
/// # Directory Structure
///
/// ```text
/// config/sample/
/// ├── dashboard.yaml   # Server, validation and chart settings
/// ├── employees.yaml   # Employee master data
/// ├── attendance.yaml  # Daily attendance rows
/// ├── leaves.yaml      # Leave rows
/// └── attrition.yaml   # Exit rows
/// ```
///
/// `dashboard.yaml` and `employees.yaml` are required. The event files may
/// be left out, which is the same as an empty list.
///
/// # Example
///
/// ```no_run
/// use hr_dashboard::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/sample")?;
/// let store = loader.build_store()?;
/// println!("Listening on port {}", loader.settings().server.port);
/// # Ok::<(), hr_dashboard::error::DashboardError>(())
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    settings: DashboardSettings,
    dataset: Dataset,
}

impl ConfigLoader {
    /// Loads configuration from the specified directory.
    ///
    /// # Returns
    ///
    /// Returns a `ConfigLoader` on success, or an error if:
    /// - A required file is missing ([`DashboardError::ConfigNotFound`])
    /// - A file contains invalid YAML or unknown enum values
    ///   ([`DashboardError::ConfigParseError`])
    pub fn load<P: AsRef<Path>>(path: P) -> DashboardResult<Self> {
        let path = path.as_ref();

        let settings = Self::load_yaml::<DashboardSettings>(&path.join("dashboard.yaml"))?;
        let employees = Self::load_yaml::<EmployeesFile>(&path.join("employees.yaml"))?;
        let attendance =
            Self::load_optional_yaml::<AttendanceFile>(&path.join("attendance.yaml"))?
                .map(|file| file.attendance)
                .unwrap_or_default();
        let leaves = Self::load_optional_yaml::<LeavesFile>(&path.join("leaves.yaml"))?
            .map(|file| file.leaves)
            .unwrap_or_default();
        let attrition = Self::load_optional_yaml::<AttritionFile>(&path.join("attrition.yaml"))?
            .map(|file| file.attrition)
            .unwrap_or_default();

        let dataset = Dataset {
            employees: employees.employees,
            attendance,
            leaves,
            attrition,
        };
        info!(
            path = %path.display(),
            employees = dataset.employees.len(),
            attendance = dataset.attendance.len(),
            leaves = dataset.leaves.len(),
            attrition = dataset.attrition.len(),
            "Loaded dashboard configuration"
        );

        Ok(Self { settings, dataset })
    }

    /// Loads and parses a YAML file.
    fn load_yaml<T: serde::de::DeserializeOwned>(path: &Path) -> DashboardResult<T> {
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| DashboardError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        serde_yaml::from_str(&content).map_err(|e| DashboardError::ConfigParseError {
            path: path_str,
            message: e.to_string(),
        })
    }

    fn load_optional_yaml<T: serde::de::DeserializeOwned>(
        path: &Path,
    ) -> DashboardResult<Option<T>> {
        if !path.exists() {
            warn!(path = %path.display(), "Dataset file not found, treating as empty");
            return Ok(None);
        }
        Self::load_yaml(path).map(Some)
    }

    /// The dashboard settings.
    pub fn settings(&self) -> &DashboardSettings {
        &self.settings
    }

    /// The loaded rows, before validation.
    pub fn dataset(&self) -> &Dataset {
        &self.dataset
    }

    /// The date default windows end on: the configured `today`, or `fallback`.
    pub fn today_or(&self, fallback: NaiveDate) -> NaiveDate {
        self.settings.today.unwrap_or(fallback)
    }

    /// Validates every row and loads them into a new store.
    ///
    /// Rows are checked against the configured `today` when there is one,
    /// otherwise the current local date. Employees go in first and exits
    /// last, so an employee's events always find it. The first invalid or
    /// conflicting row aborts the load.
    pub fn build_store(&self) -> DashboardResult<InMemoryStore> {
        let today = self.today_or(chrono::Local::now().date_naive());
        let store = InMemoryStore::new();

        for employee in &self.dataset.employees {
            validate_employee(employee, today)?;
            store.insert_employee(employee.clone())?;
        }
        for record in &self.dataset.attendance {
            validate_attendance(record, today)?;
            store.record_attendance(record.clone())?;
        }
        for leave in &self.dataset.leaves {
            validate_leave(leave, today)?;
            store.record_leave(leave.clone())?;
        }
        for record in &self.dataset.attrition {
            validate_attrition(record, today)?;
            store.record_exit(record.clone())?;
        }

        Ok(store)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::EmployeeStatus;
    use crate::store::{EntityKind, RecordFilter, RecordStore};
    use std::path::PathBuf;

    fn config_path() -> &'static str {
        "./config/sample"
    }

    /// A scratch configuration directory under the system temp dir.
    fn scratch_dir(name: &str, files: &[(&str, &str)]) -> PathBuf {
        let dir = std::env::temp_dir().join(format!(
            "hr-dashboard-{}-{}",
            name,
            uuid::Uuid::new_v4()
        ));
        fs::create_dir_all(&dir).unwrap();
        for (file, content) in files {
            fs::write(dir.join(file), content).unwrap();
        }
        dir
    }

    const ONE_EMPLOYEE: &str = r#"
employees:
  - id: ENG-001
    name: Ananya Iyer
    department: Engineering
    join_date: 2021-04-12
"#;

    #[test]
    fn test_load_sample_configuration() {
        let result = ConfigLoader::load(config_path());
        assert!(result.is_ok(), "Failed to load config: {:?}", result.err());

        let loader = result.unwrap();
        assert!(!loader.dataset().employees.is_empty());
        assert!(loader.settings().today.is_some());
    }

    #[test]
    fn test_sample_store_builds() {
        let loader = ConfigLoader::load(config_path()).unwrap();
        let store = loader.build_store().unwrap();

        let employees = store
            .count(EntityKind::Employee, &RecordFilter::new())
            .unwrap();
        assert_eq!(employees as usize, loader.dataset().employees.len());

        // Every exit flips its employee to inactive.
        let inactive = store
            .count(
                EntityKind::Employee,
                &RecordFilter::new().with_employee_status(EmployeeStatus::Inactive),
            )
            .unwrap();
        assert!(inactive as usize >= loader.dataset().attrition.len());
    }

    #[test]
    fn test_load_missing_directory_returns_error() {
        let result = ConfigLoader::load("/nonexistent/path");

        match result {
            Err(DashboardError::ConfigNotFound { path }) => {
                assert!(path.contains("dashboard.yaml"));
            }
            other => panic!("Expected ConfigNotFound error, got {:?}", other),
        }
    }

    #[test]
    fn test_event_files_are_optional() {
        let dir = scratch_dir(
            "optional",
            &[("dashboard.yaml", "{}"), ("employees.yaml", ONE_EMPLOYEE)],
        );

        let loader = ConfigLoader::load(&dir).unwrap();
        assert_eq!(loader.dataset().employees.len(), 1);
        assert!(loader.dataset().attendance.is_empty());
        assert_eq!(loader.settings().server.port, 3000);

        fs::remove_dir_all(dir).unwrap();
    }

    #[test]
    fn test_unknown_enum_value_is_parse_error() {
        let dir = scratch_dir(
            "bad-status",
            &[
                ("dashboard.yaml", "{}"),
                ("employees.yaml", ONE_EMPLOYEE),
                (
                    "attendance.yaml",
                    "attendance:\n  - employee_id: ENG-001\n    date: 2024-01-02\n    status: late\n",
                ),
            ],
        );

        let result = ConfigLoader::load(&dir);
        assert!(matches!(result, Err(DashboardError::ConfigParseError { .. })));

        fs::remove_dir_all(dir).unwrap();
    }

    #[test]
    fn test_invalid_row_aborts_store_build() {
        let dir = scratch_dir(
            "bad-leave",
            &[
                ("dashboard.yaml", "today: 2024-06-30\n"),
                ("employees.yaml", ONE_EMPLOYEE),
                (
                    "leaves.yaml",
                    r#"
leaves:
  - employee_id: ENG-001
    leave_type: annual
    start_date: 2024-05-10
    end_date: 2024-05-01
    duration: 3
    approved: true
"#,
                ),
            ],
        );

        let loader = ConfigLoader::load(&dir).unwrap();
        let result = loader.build_store();
        assert!(matches!(result, Err(DashboardError::Validation { .. })));

        fs::remove_dir_all(dir).unwrap();
    }

    #[test]
    fn test_event_for_unknown_employee_aborts_store_build() {
        let dir = scratch_dir(
            "orphan",
            &[
                ("dashboard.yaml", "today: 2024-06-30\n"),
                ("employees.yaml", ONE_EMPLOYEE),
                (
                    "attrition.yaml",
                    "attrition:\n  - employee_id: ENG-404\n    exit_date: 2024-03-01\n    reason: other\n",
                ),
            ],
        );

        let loader = ConfigLoader::load(&dir).unwrap();
        assert!(matches!(
            loader.build_store(),
            Err(DashboardError::NotFound { .. })
        ));

        fs::remove_dir_all(dir).unwrap();
    }
}
