//! Nominatim geocoding backend (OpenStreetMap)
//!
//! Uses the free Nominatim API for geocoding and reverse geocoding.
//! Rate limit: 1 request per second (the pipeline's pacer enforces this;
//! the User-Agent header is required by the usage policy).

use crate::constants::api::{NOMINATIM_URL, REVERSE_ZOOM};
use crate::constants::pacing::REQUEST_TIMEOUT_SECS;
use crate::coord::Coordinates;
use crate::error::{Error, Result};
use crate::geo::{AddressDetails, GeoBackend, GeocodedPlace};
use serde::Deserialize;
use std::time::Duration;

const USER_AGENT: &str = "geocenter/0.1.0";

/// Nominatim geocoding backend
#[derive(Debug, Clone)]
pub struct NominatimBackend {
    client: reqwest::Client,
    base_url: String,
}

/// Nominatim search response item
#[derive(Debug, Deserialize)]
struct SearchResult {
    lat: String,
    lon: String,
    display_name: String,
    #[serde(default)]
    address: Option<AddressFields>,
}

/// Structured address fields requested via `addressdetails=1`
#[derive(Debug, Deserialize)]
struct AddressFields {
    city: Option<String>,
    town: Option<String>,
    county: Option<String>,
    state: Option<String>,
}

/// Nominatim reverse response
#[derive(Debug, Deserialize)]
struct ReverseResult {
    display_name: String,
}

impl NominatimBackend {
    /// Create a backend against the public Nominatim instance
    pub fn new() -> Self {
        Self::with_base_url(NOMINATIM_URL)
    }

    /// Create a backend against a specific Nominatim instance
    pub fn with_base_url(base_url: &str) -> Self {
        let client = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()
            .expect("Failed to build HTTP client");

        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Parse lat/lng strings to coordinates
    ///
    /// Nominatim returns coordinates as strings.
    fn parse_coords(lat: &str, lng: &str) -> Result<Coordinates> {
        let lat: f64 = lat
            .parse()
            .map_err(|_| Error::Geo(format!("Invalid latitude: {}", lat)))?;
        let lng: f64 = lng
            .parse()
            .map_err(|_| Error::Geo(format!("Invalid longitude: {}", lng)))?;
        Ok(Coordinates::new(lat, lng))
    }
}

impl Default for NominatimBackend {
    fn default() -> Self {
        Self::new()
    }
}

impl From<AddressFields> for AddressDetails {
    fn from(fields: AddressFields) -> Self {
        Self {
            city: fields.city,
            town: fields.town,
            county: fields.county,
            state: fields.state,
        }
    }
}

impl GeoBackend for NominatimBackend {
    async fn geocode(&self, query: &str) -> Result<Option<GeocodedPlace>> {
        let url = format!(
            "{}/search?format=json&q={}&limit=1&addressdetails=1",
            self.base_url,
            urlencoding::encode(query)
        );

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| Error::Geo(format!("Nominatim request failed: {}", e)))?;

        if !response.status().is_success() {
            return Err(Error::Geo(format!(
                "Nominatim returned status: {}",
                response.status()
            )));
        }

        let results: Vec<SearchResult> = response
            .json()
            .await
            .map_err(|e| Error::Geo(format!("Failed to parse Nominatim response: {}", e)))?;

        if let Some(result) = results.into_iter().next() {
            let coords = Self::parse_coords(&result.lat, &result.lon)?;
            Ok(Some(GeocodedPlace {
                coords,
                display_name: result.display_name,
                details: result.address.map(AddressDetails::from),
            }))
        } else {
            Ok(None)
        }
    }

    async fn reverse_geocode(&self, coords: Coordinates) -> Result<Option<String>> {
        let url = format!(
            "{}/reverse?format=json&lat={}&lon={}&zoom={}",
            self.base_url, coords.lat, coords.lng, REVERSE_ZOOM
        );

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| Error::Geo(format!("Nominatim request failed: {}", e)))?;

        if !response.status().is_success() {
            if response.status() == reqwest::StatusCode::NOT_FOUND {
                return Ok(None);
            }
            return Err(Error::Geo(format!(
                "Nominatim returned status: {}",
                response.status()
            )));
        }

        let result: ReverseResult = response
            .json()
            .await
            .map_err(|e| Error::Geo(format!("Failed to parse Nominatim response: {}", e)))?;

        Ok(Some(result.display_name))
    }
}
