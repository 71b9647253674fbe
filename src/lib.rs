//! HR reporting dashboard.
//!
//! This crate stores employee master data with daily attendance, leave and
//! attrition records, and computes the dashboard KPIs over them: attendance
//! percentage, leave totals and attrition rate, organisation-wide or per
//! department, over a date window.

#![warn(missing_docs)]

pub mod analytics;
pub mod api;
pub mod config;
pub mod error;
pub mod filter;
pub mod models;
pub mod store;
pub mod validation;
