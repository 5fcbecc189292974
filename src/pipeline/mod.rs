//! Batch orchestration pipeline
//!
//! Takes one blob of raw text, resolves each address through the
//! geocoding backend under the pacing policy, filters the batch against
//! the optional city context, computes the spherical centroid, and
//! reverse-geocodes the result into a labeled center.
//!
//! The orchestrator is generic over the backend and the pacer, so tests
//! run the full pipeline with scripted doubles and no sleeps.

pub mod city;
pub mod pacing;
pub mod parse;

use crate::coord::centroid::{compute_center, CenterPoint};
use crate::error::{Error, Result};
use crate::geo::{compose_query, GeoBackend, ResolvedLocation};
use pacing::Pacer;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

/// Fallback label when the reverse lookup cannot name the center
pub const UNKNOWN_LOCATION: &str = "Unknown location";

/// Phases of one center-finding run
///
/// A run moves through these in order; `Failed` is reachable only from
/// `Parsing` and `Geocoding`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Phase {
    Idle,
    Parsing,
    Geocoding,
    Filtering,
    Centroiding,
    ReverseGeocoding,
    Done,
    Failed,
}

/// A plottable marker for the rendering collaborator
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Marker {
    pub lat: f64,
    pub lng: f64,
    pub label: String,
}

/// The published result of one run
///
/// A new run produces a fresh outcome; outcomes are never merged.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CenterOutcome {
    /// Successfully resolved locations, in input order minus failures
    pub locations: Vec<ResolvedLocation>,
    /// Advisory city-mismatch warnings
    pub warnings: Vec<String>,
    /// The labeled center of the batch
    pub center: CenterPoint,
}

impl CenterOutcome {
    /// One marker per resolved location, in order
    pub fn markers(&self) -> Vec<Marker> {
        self.locations
            .iter()
            .map(|location| Marker {
                lat: location.coords.lat,
                lng: location.coords.lng,
                label: location.display_name.clone(),
            })
            .collect()
    }

    /// The distinguished marker for the center
    pub fn center_marker(&self) -> Marker {
        Marker {
            lat: self.center.coords.lat,
            lng: self.center.coords.lng,
            label: self
                .center
                .label
                .clone()
                .unwrap_or_else(|| "Center Location".to_string()),
        }
    }
}

/// Runs the full find-center pipeline over an injected backend and pacer
///
/// Stateless and reusable; each call to [`run`](Self::run) is one
/// independent run. Callers should not start a second run for the same
/// consumer while one is in flight.
pub struct CenterFinder<G, P> {
    backend: G,
    pacer: P,
}

impl<G: GeoBackend, P: Pacer> CenterFinder<G, P> {
    pub fn new(backend: G, pacer: P) -> Self {
        Self { backend, pacer }
    }

    /// Resolve, filter, and center one batch of addresses
    ///
    /// # Errors
    /// - [`Error::InvalidInput`] if fewer than two addresses parse —
    ///   surfaced before any network call.
    /// - [`Error::NotEnoughResults`] if fewer than two addresses survive
    ///   geocoding. Individual failures are logged and skipped, never
    ///   retried.
    pub async fn run(
        &self,
        input: &str,
        city_context: Option<&str>,
    ) -> Result<CenterOutcome> {
        // Blank context behaves like no context at all.
        let city_context = city_context.map(str::trim).filter(|c| !c.is_empty());

        info!(phase = ?Phase::Parsing, "parsing input");
        let addresses = parse::parse_addresses(input);
        if addresses.len() < 2 {
            return Err(Error::InvalidInput(
                "Please enter at least two locations".to_string(),
            ));
        }

        info!(phase = ?Phase::Geocoding, count = addresses.len(), "resolving addresses");
        let mut locations: Vec<ResolvedLocation> = Vec::new();
        for address in &addresses {
            self.pacer.pause().await;

            let query = compose_query(address, city_context);
            match self.backend.geocode(&query).await {
                Ok(Some(place)) => {
                    debug!(address = %address, display_name = %place.display_name, "resolved");
                    locations.push(ResolvedLocation::from_place(address, place));
                }
                Ok(None) => {
                    warn!(address = %address, "no results found, skipping");
                }
                Err(e) => {
                    warn!(address = %address, error = %e, "geocoding failed, skipping");
                }
            }
        }
        if locations.len() < 2 {
            return Err(Error::NotEnoughResults(
                "Could not geocode enough valid addresses. Please check your input."
                    .to_string(),
            ));
        }

        info!(phase = ?Phase::Filtering, resolved = locations.len(), "checking city context");
        let warnings = match city_context {
            Some(context) => city::collect_warnings(&locations, context),
            None => Vec::new(),
        };

        info!(phase = ?Phase::Centroiding, "computing center");
        let mut center = compute_center(&locations, city_context).ok_or_else(|| {
            // Unreachable: the batch has at least two locations here.
            Error::NotEnoughResults(
                "Could not geocode enough valid addresses. Please check your input."
                    .to_string(),
            )
        })?;

        info!(phase = ?Phase::ReverseGeocoding, lat = center.coords.lat, lng = center.coords.lng, "labeling center");
        center.label = Some(match self.backend.reverse_geocode(center.coords).await {
            Ok(Some(name)) => name,
            Ok(None) => UNKNOWN_LOCATION.to_string(),
            Err(e) => {
                warn!(error = %e, "reverse geocoding failed, using fallback label");
                UNKNOWN_LOCATION.to_string()
            }
        });

        info!(
            phase = ?Phase::Done,
            resolved = locations.len(),
            warnings = warnings.len(),
            "run complete"
        );
        Ok(CenterOutcome {
            locations,
            warnings,
            center,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coord::Coordinates;
    use crate::geo::{AddressDetails, GeocodedPlace};
    use approx::assert_relative_eq;
    use std::collections::HashMap;
    use std::sync::atomic::{AtomicUsize, Ordering};

    /// Backend double scripted per query string
    #[derive(Default)]
    struct ScriptedBackend {
        places: HashMap<String, GeocodedPlace>,
        failing_queries: Vec<String>,
        reverse_label: Option<String>,
        reverse_fails: bool,
    }

    impl ScriptedBackend {
        fn with_place(mut self, query: &str, lat: f64, lng: f64, display_name: &str) -> Self {
            self.places.insert(
                query.to_string(),
                GeocodedPlace {
                    coords: Coordinates::new(lat, lng),
                    display_name: display_name.to_string(),
                    details: Some(AddressDetails {
                        city: display_name
                            .split(", ")
                            .nth(1)
                            .map(String::from),
                        ..Default::default()
                    }),
                },
            );
            self
        }

        fn with_failing_query(mut self, query: &str) -> Self {
            self.failing_queries.push(query.to_string());
            self
        }

        fn with_reverse_label(mut self, label: &str) -> Self {
            self.reverse_label = Some(label.to_string());
            self
        }

        fn with_broken_reverse(mut self) -> Self {
            self.reverse_fails = true;
            self
        }
    }

    impl GeoBackend for ScriptedBackend {
        async fn geocode(&self, query: &str) -> crate::error::Result<Option<GeocodedPlace>> {
            if self.failing_queries.iter().any(|q| q == query) {
                return Err(Error::Geo("connection reset".to_string()));
            }
            Ok(self.places.get(query).cloned())
        }

        async fn reverse_geocode(
            &self,
            _coords: Coordinates,
        ) -> crate::error::Result<Option<String>> {
            if self.reverse_fails {
                return Err(Error::Geo("connection reset".to_string()));
            }
            Ok(self.reverse_label.clone())
        }
    }

    /// Pacer double that counts pauses instead of sleeping
    #[derive(Default)]
    struct CountingPacer {
        pauses: AtomicUsize,
    }

    impl Pacer for &CountingPacer {
        async fn pause(&self) {
            self.pauses.fetch_add(1, Ordering::SeqCst);
        }
    }

    fn delhi_backend() -> ScriptedBackend {
        ScriptedBackend::default()
            .with_place("Connaught Place", 28.6315, 77.2167, "Connaught Place, New Delhi, Delhi, India")
            .with_place("Lajpat Nagar", 28.5677, 77.2433, "Lajpat Nagar, New Delhi, Delhi, India")
            .with_place("Karol Bagh", 28.6519, 77.1909, "Karol Bagh, New Delhi, Delhi, India")
            .with_reverse_label("Central Delhi, Delhi, India")
    }

    #[tokio::test]
    async fn test_happy_path() {
        let pacer = CountingPacer::default();
        let finder = CenterFinder::new(delhi_backend(), &pacer);

        let outcome = finder
            .run("Connaught Place, Lajpat Nagar\nKarol Bagh", None)
            .await
            .unwrap();

        assert_eq!(outcome.locations.len(), 3);
        assert_eq!(outcome.locations[0].address, "Connaught Place");
        assert_eq!(outcome.locations[2].address, "Karol Bagh");
        assert!(outcome.warnings.is_empty());
        assert_eq!(
            outcome.center.label.as_deref(),
            Some("Central Delhi, Delhi, India")
        );
        assert!(outcome.center.coords.validate().is_ok());
        // One pause per address, including before the first lookup.
        assert_eq!(pacer.pauses.load(Ordering::SeqCst), 3);
    }

    #[tokio::test]
    async fn test_too_few_addresses_fails_before_any_lookup() {
        let pacer = CountingPacer::default();
        let finder = CenterFinder::new(delhi_backend(), &pacer);

        for input in ["", "   ", "Connaught Place"] {
            let err = finder.run(input, None).await.unwrap_err();
            match err {
                Error::InvalidInput(msg) => {
                    assert_eq!(msg, "Please enter at least two locations")
                }
                other => panic!("unexpected error: {:?}", other),
            }
        }

        assert_eq!(pacer.pauses.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_failures_are_skipped_not_fatal() {
        let backend = delhi_backend().with_failing_query("Lajpat Nagar");
        let pacer = CountingPacer::default();
        let finder = CenterFinder::new(backend, &pacer);

        let outcome = finder
            .run("Connaught Place\nLajpat Nagar\nKarol Bagh\nNowhere At All", None)
            .await
            .unwrap();

        // One error, one zero-result miss; both skipped in place.
        assert_eq!(outcome.locations.len(), 2);
        assert_eq!(outcome.locations[0].address, "Connaught Place");
        assert_eq!(outcome.locations[1].address, "Karol Bagh");
        // Failed lookups were still paced.
        assert_eq!(pacer.pauses.load(Ordering::SeqCst), 4);
    }

    #[tokio::test]
    async fn test_one_survivor_is_not_enough() {
        let backend = ScriptedBackend::default()
            .with_place("Connaught Place", 28.6315, 77.2167, "Connaught Place, New Delhi, Delhi, India");
        let finder = CenterFinder::new(backend, pacing::NoDelay);

        let err = finder
            .run("Connaught Place\nNowhere\nNowhere Else", None)
            .await
            .unwrap_err();

        match err {
            Error::NotEnoughResults(msg) => assert_eq!(
                msg,
                "Could not geocode enough valid addresses. Please check your input."
            ),
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_city_context_reaches_the_query() {
        // The backend only knows the composed queries, so resolution
        // succeeding proves the context was appended.
        let backend = ScriptedBackend::default()
            .with_place("Connaught Place, Delhi, India", 28.6315, 77.2167, "Connaught Place, New Delhi, Delhi, India")
            .with_place("Karol Bagh, Delhi, India", 28.6519, 77.1909, "Karol Bagh, New Delhi, Delhi, India")
            .with_reverse_label("Central Delhi, Delhi, India");
        let finder = CenterFinder::new(backend, pacing::NoDelay);

        let outcome = finder
            .run("Connaught Place\nKarol Bagh", Some("Delhi, India"))
            .await
            .unwrap();

        assert_eq!(outcome.locations.len(), 2);
        // The published address is still what the user typed.
        assert_eq!(outcome.locations[0].address, "Connaught Place");
    }

    #[tokio::test]
    async fn test_blank_city_context_is_ignored() {
        let finder = CenterFinder::new(delhi_backend(), pacing::NoDelay);

        let outcome = finder
            .run("Connaught Place\nKarol Bagh", Some("  "))
            .await
            .unwrap();

        assert_eq!(outcome.locations.len(), 2);
        assert!(outcome.warnings.is_empty());
    }

    #[tokio::test]
    async fn test_mismatch_warns_but_keeps_location() {
        let backend = ScriptedBackend::default()
            .with_place("Main Street, Delhi, India", 39.80, -89.65, "Main Street, Springfield, Illinois, USA")
            .with_place("Connaught Place, Delhi, India", 28.6315, 77.2167, "Connaught Place, New Delhi, Delhi, India")
            .with_reverse_label("Somewhere in between");
        let finder = CenterFinder::new(backend, pacing::NoDelay);

        let outcome = finder
            .run("Main Street\nConnaught Place", Some("Delhi, India"))
            .await
            .unwrap();

        assert_eq!(outcome.locations.len(), 2);
        assert_eq!(outcome.warnings.len(), 1);
        assert!(outcome.warnings[0].contains("\"Main Street\""));
    }

    #[tokio::test]
    async fn test_reverse_failure_uses_fallback_label() {
        let backend = delhi_backend().with_broken_reverse();
        let finder = CenterFinder::new(backend, pacing::NoDelay);

        let outcome = finder
            .run("Connaught Place\nKarol Bagh", None)
            .await
            .unwrap();

        assert_eq!(outcome.center.label.as_deref(), Some(UNKNOWN_LOCATION));
    }

    #[tokio::test]
    async fn test_reverse_no_result_uses_fallback_label() {
        let mut backend = delhi_backend();
        backend.reverse_label = None;
        let finder = CenterFinder::new(backend, pacing::NoDelay);

        let outcome = finder
            .run("Connaught Place\nKarol Bagh", None)
            .await
            .unwrap();

        assert_eq!(outcome.center.label.as_deref(), Some("Unknown location"));
    }

    #[tokio::test]
    async fn test_center_is_spherical_mean_of_pair() {
        let finder = CenterFinder::new(delhi_backend(), pacing::NoDelay);

        let outcome = finder
            .run("Connaught Place\nLajpat Nagar", None)
            .await
            .unwrap();

        let expected = crate::coord::centroid::spherical_centroid(&[
            Coordinates::new(28.6315, 77.2167),
            Coordinates::new(28.5677, 77.2433),
        ])
        .unwrap();

        assert_relative_eq!(outcome.center.coords.lat, expected.lat, epsilon = 1e-9);
        assert_relative_eq!(outcome.center.coords.lng, expected.lng, epsilon = 1e-9);
    }

    #[tokio::test]
    async fn test_markers_mirror_the_outcome() {
        let finder = CenterFinder::new(delhi_backend(), pacing::NoDelay);

        let outcome = finder
            .run("Connaught Place\nLajpat Nagar\nKarol Bagh", None)
            .await
            .unwrap();

        let markers = outcome.markers();
        assert_eq!(markers.len(), 3);
        assert_eq!(markers[0].label, "Connaught Place, New Delhi, Delhi, India");
        assert_relative_eq!(markers[0].lat, 28.6315);

        let center_marker = outcome.center_marker();
        assert_eq!(center_marker.label, "Central Delhi, Delhi, India");
        assert_relative_eq!(center_marker.lat, outcome.center.coords.lat);
    }
}
