//! Centralized constants for the geocenter crate
//!
//! This module consolidates constants that are used across multiple modules
//! to avoid duplication and ensure consistency.

/// Geographic constants
pub mod geo {
    /// Mean Earth radius in meters (WGS84 approximation)
    pub const EARTH_RADIUS_METERS: f64 = 6_371_000.0;
}

/// External API endpoints
pub mod api {
    /// OpenStreetMap Nominatim geocoding API
    pub const NOMINATIM_URL: &str = "https://nominatim.openstreetmap.org";

    /// Zoom level sent with reverse lookups (neighbourhood precision)
    pub const REVERSE_ZOOM: u8 = 14;
}

/// Request pacing
pub mod pacing {
    /// Delay before each geocoding request in milliseconds.
    ///
    /// Nominatim's usage policy asks for at most one request per second,
    /// so the batch pipeline pauses this long before every lookup.
    pub const GEOCODE_DELAY_MS: u64 = 1000;

    /// Per-request timeout in seconds. A timed-out lookup is treated as a
    /// recoverable failure for that address, never retried.
    pub const REQUEST_TIMEOUT_SECS: u64 = 10;
}
