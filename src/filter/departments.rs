//! Department labels and the set of known departments.

use std::borrow::Borrow;
use std::collections::BTreeSet;
use std::fmt;

use serde::Serialize;

use crate::error::{DashboardError, DashboardResult};
use crate::models::EmployeeStatus;
use crate::store::{RecordFilter, RecordStore};

/// A department label taken from employee master data.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct Department(String);

impl Department {
    /// Wraps a label without checking it against any store.
    pub fn new(label: impl Into<String>) -> Self {
        Self(label.into())
    }

    /// The label.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Department {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<String> for Department {
    fn from(label: String) -> Self {
        Self(label)
    }
}

impl Borrow<str> for Department {
    fn borrow(&self) -> &str {
        &self.0
    }
}

/// Distinct departments found in the store, in lexical order.
///
/// This is the set a department query parameter is validated against.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct DepartmentSet {
    departments: BTreeSet<Department>,
}

impl DepartmentSet {
    /// Collects the departments of employees with `status`, or of every
    /// employee when `status` is `None`.
    pub fn from_store(
        store: &dyn RecordStore,
        status: Option<EmployeeStatus>,
    ) -> DashboardResult<Self> {
        let mut filter = RecordFilter::new();
        if let Some(status) = status {
            filter = filter.with_employee_status(status);
        }
        Ok(store
            .employees(&filter)?
            .into_iter()
            .map(|employee| employee.department)
            .collect())
    }

    /// Departments in lexical order.
    pub fn iter(&self) -> impl Iterator<Item = &Department> {
        self.departments.iter()
    }

    /// Whether `label` is a known department. Matching is exact.
    pub fn contains(&self, label: &str) -> bool {
        self.departments.contains(label)
    }

    /// Resolves `label` to a known department.
    pub fn validate(&self, label: &str) -> DashboardResult<Department> {
        self.departments.get(label).cloned().ok_or_else(|| {
            DashboardError::validation("department", format!("unknown department '{}'", label))
        })
    }

    /// Number of departments.
    pub fn len(&self) -> usize {
        self.departments.len()
    }

    /// Whether there are no departments.
    pub fn is_empty(&self) -> bool {
        self.departments.is_empty()
    }
}

impl FromIterator<String> for DepartmentSet {
    fn from_iter<I: IntoIterator<Item = String>>(iter: I) -> Self {
        Self {
            departments: iter.into_iter().map(Department::from).collect(),
        }
    }
}

/// Distinct departments of active employees.
pub fn list_departments(store: &dyn RecordStore) -> DashboardResult<DepartmentSet> {
    DepartmentSet::from_store(store, Some(EmployeeStatus::Active))
}
