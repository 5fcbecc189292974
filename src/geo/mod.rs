//! Geocoding module
//!
//! Resolves free-text location names to coordinates and coordinates back
//! to place names through a pluggable backend.

pub mod nominatim;

use crate::coord::Coordinates;
use crate::error::Result;
use serde::{Deserialize, Serialize};

/// Structured address breakdown returned by the geocoding service
///
/// Every field is optional; Nominatim fills whichever apply to the match.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AddressDetails {
    pub city: Option<String>,
    pub town: Option<String>,
    pub county: Option<String>,
    pub state: Option<String>,
}

impl AddressDetails {
    /// The most specific locality field present
    ///
    /// Prefers city, then town, then county, then state.
    pub fn locality(&self) -> Option<&str> {
        self.city
            .as_deref()
            .or(self.town.as_deref())
            .or(self.county.as_deref())
            .or(self.state.as_deref())
    }
}

/// The best match returned by the geocoding service for one query
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeocodedPlace {
    /// Resolved coordinates
    pub coords: Coordinates,
    /// Canonical display string
    pub display_name: String,
    /// Structured breakdown, when the service provided one
    pub details: Option<AddressDetails>,
}

/// A successfully resolved input address
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResolvedLocation {
    /// The address as the user typed it (trimmed)
    pub address: String,
    /// Canonical display string from the service
    pub display_name: String,
    #[serde(flatten)]
    pub coords: Coordinates,
    /// Structured breakdown, kept for the city-context filter
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<AddressDetails>,
}

impl ResolvedLocation {
    /// Pair the address as typed with the place the service resolved it to
    pub fn from_place(address: &str, place: GeocodedPlace) -> Self {
        Self {
            address: address.trim().to_string(),
            display_name: place.display_name,
            coords: place.coords,
            details: place.details,
        }
    }
}

/// Trait for geocoding backends
pub trait GeoBackend: Send + Sync {
    /// Geocode a query string to coordinates
    ///
    /// Returns the best match for the query, or None if nothing was found
    fn geocode(
        &self,
        query: &str,
    ) -> impl std::future::Future<Output = Result<Option<GeocodedPlace>>> + Send;

    /// Reverse geocode coordinates to a display name
    fn reverse_geocode(
        &self,
        coords: Coordinates,
    ) -> impl std::future::Future<Output = Result<Option<String>>> + Send;
}

/// Build the query sent to the geocoding service
///
/// When a city context is given and the address does not already mention
/// it (case-insensitive), the context is appended after a comma to steer
/// the service toward the right locality.
pub fn compose_query(address: &str, city_context: Option<&str>) -> String {
    let address = address.trim();

    match city_context {
        Some(context)
            if !address.to_lowercase().contains(&context.to_lowercase()) =>
        {
            format!("{}, {}", address, context)
        }
        _ => address.to_string(),
    }
}

/// Get the default geocoding backend for an endpoint
pub fn get_geocoder(endpoint: &str) -> nominatim::NominatimBackend {
    nominatim::NominatimBackend::with_base_url(endpoint)
}
