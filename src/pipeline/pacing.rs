//! Request pacing for the geocoding loop
//!
//! Nominatim's fair-use policy asks for at most one request per second,
//! so the pipeline pauses before every lookup. The policy is a trait so
//! tests can swap in a pacer that does not sleep.

use crate::constants::pacing::GEOCODE_DELAY_MS;
use std::time::Duration;

/// Pacing policy applied before each geocoding request
pub trait Pacer: Send + Sync {
    /// Wait for the policy's interval
    fn pause(&self) -> impl std::future::Future<Output = ()> + Send;
}

/// Sleeps a fixed interval before every lookup
#[derive(Debug, Clone)]
pub struct FixedDelay {
    delay: Duration,
}

impl FixedDelay {
    /// Create a pacer with a specific interval
    pub fn new(delay: Duration) -> Self {
        Self { delay }
    }
}

impl Default for FixedDelay {
    fn default() -> Self {
        Self::new(Duration::from_millis(GEOCODE_DELAY_MS))
    }
}

impl Pacer for FixedDelay {
    async fn pause(&self) {
        tokio::time::sleep(self.delay).await;
    }
}

/// Pacer that never waits, for tests and local Nominatim instances
#[derive(Debug, Clone, Copy, Default)]
pub struct NoDelay;

impl Pacer for NoDelay {
    async fn pause(&self) {}
}
