//! Error types for geocenter

use thiserror::Error;

/// Main error type for geocenter operations
///
/// The two run-fatal variants carry their message verbatim so callers see
/// exactly the text the pipeline produced ("Please enter at least two
/// locations", "Could not geocode enough valid addresses...").
#[derive(Error, Debug)]
pub enum Error {
    /// Fewer than two usable addresses were supplied. Fatal before any lookup.
    #[error("{0}")]
    InvalidInput(String),

    /// Fewer than two addresses survived geocoding. Fatal, no center computed.
    #[error("{0}")]
    NotEnoughResults(String),

    #[error("Geo error: {0}")]
    Geo(String),

    #[error("Invalid coordinates: {0}")]
    InvalidCoordinates(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Server error: {0}")]
    Server(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias for geocenter operations
pub type Result<T> = std::result::Result<T, Error>;
