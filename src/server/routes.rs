//! HTTP API routes
//!
//! Defines all REST API endpoints for the server.

use crate::coord::centroid::CenterPoint;
use crate::error::Error;
use crate::format::available_formats;
use crate::geo::nominatim::NominatimBackend;
use crate::geo::ResolvedLocation;
use crate::pipeline::pacing::FixedDelay;
use crate::pipeline::{CenterFinder, Marker};
use crate::server::state::AppState;

use axum::{
    extract::State,
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tower_http::services::ServeDir;

/// Create the API router
pub fn create_router(state: Arc<AppState>) -> Router {
    // Determine static files path
    // Try relative to cwd first, then fallback to the executable's directory
    let static_path = if std::path::Path::new("static").exists() {
        "static".to_string()
    } else if let Ok(exe_path) = std::env::current_exe() {
        if let Some(exe_dir) = exe_path.parent() {
            let path = exe_dir.join("static");
            if path.exists() {
                path.to_string_lossy().to_string()
            } else {
                "static".to_string()
            }
        } else {
            "static".to_string()
        }
    } else {
        "static".to_string()
    };

    Router::new()
        .route("/api/center", post(center_handler))
        .route("/api/status", get(status_handler))
        .route("/api/formats", get(formats_handler))
        .nest_service(
            "/",
            ServeDir::new(&static_path).append_index_html_on_directories(true),
        )
        .with_state(state)
}

/// Center request body
#[derive(Debug, Deserialize)]
pub struct CenterRequest {
    /// Raw address text, comma or newline separated
    pub locations: String,
    /// Optional disambiguating city context, e.g. "Delhi, India"
    #[serde(default)]
    pub city_context: Option<String>,
}

/// Center response body
///
/// `markers` and `center_marker` carry everything the map frontend needs
/// to plot bounds-fitted markers plus one highlighted marker.
#[derive(Debug, Serialize, Deserialize)]
pub struct CenterResponse {
    pub locations: Vec<ResolvedLocation>,
    pub warnings: Vec<String>,
    pub center: CenterPoint,
    pub markers: Vec<Marker>,
    pub center_marker: Marker,
}

/// API error response
#[derive(Debug, Serialize, Deserialize)]
pub struct ApiError {
    pub error: String,
    pub code: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> axum::response::Response {
        (StatusCode::BAD_REQUEST, Json(self)).into_response()
    }
}

impl From<Error> for ApiError {
    fn from(err: Error) -> Self {
        let code = match &err {
            Error::InvalidInput(_) => "INVALID_INPUT",
            Error::NotEnoughResults(_) => "NOT_ENOUGH_RESULTS",
            Error::Geo(_) => "GEO_ERROR",
            Error::InvalidCoordinates(_) => "INVALID_COORDINATES",
            Error::Config(_) => "CONFIG_ERROR",
            _ => "INTERNAL_ERROR",
        };
        ApiError {
            error: err.to_string(),
            code: code.to_string(),
        }
    }
}

/// Find the center of a batch of addresses
///
/// POST /api/center
async fn center_handler(
    State(state): State<Arc<AppState>>,
    Json(req): Json<CenterRequest>,
) -> Result<Json<CenterResponse>, ApiError> {
    let endpoint = state.geocode_endpoint().await;
    let finder = CenterFinder::new(
        NominatimBackend::with_base_url(&endpoint),
        FixedDelay::default(),
    );

    let outcome = finder
        .run(&req.locations, req.city_context.as_deref())
        .await
        .map_err(ApiError::from)?;

    let markers = outcome.markers();
    let center_marker = outcome.center_marker();

    Ok(Json(CenterResponse {
        locations: outcome.locations,
        warnings: outcome.warnings,
        center: outcome.center,
        markers,
        center_marker,
    }))
}

/// Status response
#[derive(Debug, Serialize, Deserialize)]
pub struct StatusResponse {
    /// Server is running
    pub running: bool,
    /// Server version
    pub version: String,
    /// Geocoding endpoint in use
    pub endpoint: String,
}

/// Server status endpoint
///
/// GET /api/status
async fn status_handler(State(state): State<Arc<AppState>>) -> Json<StatusResponse> {
    Json(StatusResponse {
        running: true,
        version: env!("CARGO_PKG_VERSION").to_string(),
        endpoint: state.geocode_endpoint().await,
    })
}

/// Formats list response
#[derive(Debug, Serialize, Deserialize)]
pub struct FormatsResponse {
    pub formats: Vec<FormatInfo>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct FormatInfo {
    pub name: String,
    pub description: String,
}

/// List available output formats
///
/// GET /api/formats
async fn formats_handler() -> Json<FormatsResponse> {
    let formats = available_formats()
        .into_iter()
        .map(|f| FormatInfo {
            name: f.name,
            description: f.description,
        })
        .collect();

    Json(FormatsResponse { formats })
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use http_body_util::BodyExt;
    use tower::ServiceExt;

    fn create_test_state() -> Arc<AppState> {
        Arc::new(AppState::new(crate::config::Config::default()))
    }

    #[tokio::test]
    async fn test_status_endpoint() {
        let state = create_test_state();
        let app = create_router(state);

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/api/status")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);

        let body = response.into_body().collect().await.unwrap().to_bytes();
        let status: StatusResponse = serde_json::from_slice(&body).unwrap();

        assert!(status.running);
        assert_eq!(status.endpoint, "https://nominatim.openstreetmap.org");
    }

    #[tokio::test]
    async fn test_formats_endpoint() {
        let state = create_test_state();
        let app = create_router(state);

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/api/formats")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);

        let body = response.into_body().collect().await.unwrap().to_bytes();
        let formats: FormatsResponse = serde_json::from_slice(&body).unwrap();

        assert_eq!(formats.formats.len(), 4);
    }

    #[tokio::test]
    async fn test_center_rejects_empty_input() {
        // Parsing fails before any geocoding request is issued, so this
        // exercises the handler without touching the network.
        let state = create_test_state();
        let app = create_router(state);

        let request_body = serde_json::json!({ "locations": "" });

        let response = app
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/api/center")
                    .header("Content-Type", "application/json")
                    .body(Body::from(request_body.to_string()))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let body = response.into_body().collect().await.unwrap().to_bytes();
        let err: ApiError = serde_json::from_slice(&body).unwrap();

        assert_eq!(err.code, "INVALID_INPUT");
        assert_eq!(err.error, "Please enter at least two locations");
    }

    #[tokio::test]
    async fn test_center_rejects_single_address() {
        let state = create_test_state();
        let app = create_router(state);

        let request_body = serde_json::json!({
            "locations": "Connaught Place",
            "city_context": "Delhi, India"
        });

        let response = app
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/api/center")
                    .header("Content-Type", "application/json")
                    .body(Body::from(request_body.to_string()))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let body = response.into_body().collect().await.unwrap().to_bytes();
        let err: ApiError = serde_json::from_slice(&body).unwrap();

        assert_eq!(err.code, "INVALID_INPUT");
    }
}
