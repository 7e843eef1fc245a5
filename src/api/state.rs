//! Application State
//!
//! Shared state accessible by all API handlers.
//! Wrapped in Arc for thread-safe sharing across async tasks.

use std::sync::Arc;
use std::time::Instant;

pub use crate::config::ApiConfig;
use crate::sales::{filter, generate, GeneratorParams, RegionSelection, SalesDataset, SalesResult};

/// Shared application state for all handlers
#[derive(Clone)]
pub struct AppState {
    /// Dataset generated once at startup, read-only afterwards
    pub dataset: Arc<SalesDataset>,
    /// API configuration
    pub config: Arc<ApiConfig>,
    /// Server start time for uptime tracking
    pub start_time: Instant,
}

impl AppState {
    /// Create a new AppState around an existing dataset
    pub fn new(dataset: SalesDataset, config: ApiConfig) -> Self {
        Self {
            dataset: Arc::new(dataset),
            config: Arc::new(config),
            start_time: Instant::now(),
        }
    }

    /// Generate the dataset and wrap it in a new AppState
    pub fn generate(params: &GeneratorParams, config: ApiConfig) -> SalesResult<Self> {
        Ok(Self::new(generate(params)?, config))
    }

    /// Rows matching the selection, in dataset order
    pub fn filtered(&self, selection: &RegionSelection) -> SalesDataset {
        filter(&self.dataset, selection)
    }

    /// Get server uptime in seconds
    pub fn uptime_seconds(&self) -> u64 {
        self.start_time.elapsed().as_secs()
    }
}
