//! Server shared state
//!
//! Holds configuration for the HTTP server.

use crate::config::Config;
use std::sync::Arc;
use tokio::sync::RwLock;

/// Shared state for the HTTP server
pub struct AppState {
    /// Configuration
    pub config: Arc<RwLock<Config>>,
}

impl AppState {
    /// Create new application state
    pub fn new(config: Config) -> Self {
        Self {
            config: Arc::new(RwLock::new(config)),
        }
    }

    /// The geocoding endpoint requests should go to
    pub async fn geocode_endpoint(&self) -> String {
        self.config.read().await.geocode.endpoint.clone()
    }
}
