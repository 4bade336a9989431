//! Application state for the web layer.

use std::sync::Arc;

use crate::catalog::Catalog;
use crate::planner::{PlannerConfig, TripPlanner};

/// Shared application state.
///
/// Both parts are read-only after start-up.
#[derive(Clone)]
pub struct AppState {
    /// Destination, hotel, transport and guide catalog
    pub catalog: Arc<Catalog>,

    /// Planner configuration
    pub config: Arc<PlannerConfig>,
}

impl AppState {
    /// Create a new app state.
    pub fn new(catalog: Catalog, config: PlannerConfig) -> Self {
        Self {
            catalog: Arc::new(catalog),
            config: Arc::new(config),
        }
    }

    /// Planner borrowing this state.
    pub fn planner(&self) -> TripPlanner<'_> {
        TripPlanner::new(&self.catalog, &self.config)
    }
}
