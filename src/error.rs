//! Error types for the HR dashboard.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for every failure the KPI engine, the record store and the HTTP boundary
//! can report.

use thiserror::Error;

/// The main error type for the HR dashboard.
///
/// Zero denominators are never reported through this type: every ratio
/// defines a zero-valued result instead.
///
/// # Example
///
/// ```
/// use hr_dashboard::error::DashboardError;
///
/// let error = DashboardError::NotFound {
///     entity: "employee".to_string(),
///     id: "EMP-404".to_string(),
/// };
/// assert_eq!(error.to_string(), "employee not found: EMP-404");
/// ```
#[derive(Debug, Error)]
pub enum DashboardError {
    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// Caller input was rejected before any aggregation ran.
    #[error("Invalid {field}: {message}")]
    Validation {
        /// The parameter or record field that was invalid.
        field: String,
        /// A description of what made the value invalid.
        message: String,
    },

    /// A referenced record does not exist.
    #[error("{entity} not found: {id}")]
    NotFound {
        /// The kind of record that was looked up.
        entity: String,
        /// The identifier that was not found.
        id: String,
    },

    /// A write would break a uniqueness invariant.
    #[error("Conflict: {message}")]
    Conflict {
        /// A description of the conflicting record.
        message: String,
    },

    /// An internal invariant was broken, such as an inverted date window
    /// reaching an aggregator.
    #[error("Invariant violated: {message}")]
    InvariantViolation {
        /// A description of the broken invariant.
        message: String,
    },

    /// The record store failed to serve a query.
    #[error("Record store error: {message}")]
    Store {
        /// A description of the store failure.
        message: String,
    },
}

impl DashboardError {
    /// Shorthand for a [`DashboardError::Validation`].
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Validation {
            field: field.into(),
            message: message.into(),
        }
    }

    /// Shorthand for an unknown employee id.
    pub fn employee_not_found(id: impl Into<String>) -> Self {
        Self::NotFound {
            entity: "employee".to_string(),
            id: id.into(),
        }
    }
}

/// A type alias for Results that return DashboardError.
pub type DashboardResult<T> = Result<T, DashboardError>;
