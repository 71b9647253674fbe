//! Application state for the HR dashboard API.
//!
//! This module defines the shared application state that is available
//! to all request handlers.

use std::sync::Arc;

use chrono::NaiveDate;

use crate::config::{ConfigLoader, DashboardSettings};
use crate::error::DashboardResult;
use crate::store::RecordStore;

/// Shared application state.
///
/// Holds the record store and the dashboard settings. Cloning is cheap:
/// both live behind an [`Arc`], and concurrent requests read the store in
/// parallel.
#[derive(Clone)]
pub struct AppState {
    store: Arc<dyn RecordStore>,
    settings: Arc<DashboardSettings>,
}

impl AppState {
    /// Creates a new application state over `store`.
    pub fn new(store: Arc<dyn RecordStore>, settings: DashboardSettings) -> Self {
        Self {
            store,
            settings: Arc::new(settings),
        }
    }

    /// Builds the store described by a loaded configuration directory.
    pub fn from_config(config: &ConfigLoader) -> DashboardResult<Self> {
        let store = config.build_store()?;
        Ok(Self::new(Arc::new(store), config.settings().clone()))
    }

    /// Returns the record store.
    pub fn store(&self) -> &dyn RecordStore {
        self.store.as_ref()
    }

    /// Returns the dashboard settings.
    pub fn settings(&self) -> &DashboardSettings {
        &self.settings
    }

    /// The date default windows end on.
    pub fn today(&self) -> NaiveDate {
        self.settings
            .today
            .unwrap_or_else(|| chrono::Local::now().date_naive())
    }
}

impl std::fmt::Debug for AppState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppState")
            .field("settings", &self.settings)
            .finish_non_exhaustive()
    }
}
