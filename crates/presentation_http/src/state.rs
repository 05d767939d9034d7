//! Application state shared across handlers

use std::sync::Arc;

use application::StationService;

/// Shared application state
#[derive(Debug, Clone)]
pub struct AppState {
    /// Station service merging SMHI observations
    pub station_service: Arc<StationService>,
}

impl AppState {
    /// Create state around a station service
    pub fn new(station_service: StationService) -> Self {
        Self {
            station_service: Arc::new(station_service),
        }
    }
}
