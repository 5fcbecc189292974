//! geocenter: find the geographic center of a set of addresses
//!
//! A library and CLI tool that resolves free-text location names through
//! OpenStreetMap Nominatim, computes the spherical centroid of the batch,
//! and reverse-geocodes that center into a human-readable address.
//!
//! ## Features
//!
//! - Sequential rate-limited geocoding (1 request/second, per Nominatim's
//!   usage policy) with per-address failure skipping
//! - Optional city context to disambiguate queries and flag results that
//!   look out of place
//! - Spherical centroid (unit-sphere Cartesian mean), correct across the
//!   antimeridian and at high latitude
//! - HTTP API + CLI interface with pluggable output formats
//!
//! ## Quick Start
//!
//! ```no_run
//! use geocenter::geo::nominatim::NominatimBackend;
//! use geocenter::pipeline::pacing::FixedDelay;
//! use geocenter::pipeline::CenterFinder;
//!
//! # #[tokio::main]
//! # async fn main() -> geocenter::Result<()> {
//! let finder = CenterFinder::new(NominatimBackend::new(), FixedDelay::default());
//!
//! let outcome = finder
//!     .run("Connaught Place\nLajpat Nagar\nKarol Bagh", Some("Delhi, India"))
//!     .await?;
//!
//! println!(
//!     "Center: {} ({:.6}, {:.6})",
//!     outcome.center.label.as_deref().unwrap_or("?"),
//!     outcome.center.coords.lat,
//!     outcome.center.coords.lng,
//! );
//! # Ok(())
//! # }
//! ```

pub mod cli;
pub mod config;
pub mod constants;
pub mod coord;
pub mod error;
pub mod format;
pub mod geo;
pub mod pipeline;
pub mod server;

// Re-export commonly used types
pub use config::Config;
pub use coord::centroid::CenterPoint;
pub use coord::Coordinates;
pub use error::{Error, Result};
pub use geo::ResolvedLocation;
pub use pipeline::{CenterFinder, CenterOutcome};
