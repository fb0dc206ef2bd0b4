//! Application state shared across all handlers.

use std::{sync::Arc, time::Instant};

use crate::config::Config;
use crate::services::ItemService;

/// Application state shared across handlers.
#[derive(Clone)]
pub struct AppState {
    /// Application configuration
    pub config: Config,
    /// Item business logic, injected so tests can swap in a stub
    pub item_service: Arc<dyn ItemService>,
    /// Reported as uptime by the health endpoint
    pub started_at: Instant,
}

impl AppState {
    pub fn new(config: Config, item_service: Arc<dyn ItemService>) -> Self {
        Self {
            config,
            item_service,
            started_at: Instant::now(),
        }
    }
}
