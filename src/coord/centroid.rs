//! Spherical centroid computation
//!
//! Averaging latitudes and longitudes directly goes wrong near the poles
//! and across the antimeridian. Instead, each point is projected onto the
//! unit sphere, the Cartesian vectors are averaged, and the mean vector is
//! converted back to latitude and longitude.

use crate::coord::Coordinates;
use crate::geo::ResolvedLocation;
use serde::{Deserialize, Serialize};
use std::f64::consts::PI;

/// A computed center point, optionally labeled with a place name
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CenterPoint {
    #[serde(flatten)]
    pub coords: Coordinates,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
}

/// Compute the spherical centroid of a set of points
///
/// Each point is converted to a unit vector, the vectors are averaged,
/// and the mean is mapped back to geographic coordinates. The result does
/// not depend on the order of the input points.
///
/// # Returns
/// `None` if `points` is empty
pub fn spherical_centroid(points: &[Coordinates]) -> Option<Coordinates> {
    if points.is_empty() {
        return None;
    }

    let mut x = 0.0;
    let mut y = 0.0;
    let mut z = 0.0;

    for point in points {
        let lat = point.lat * PI / 180.0;
        let lng = point.lng * PI / 180.0;

        x += lat.cos() * lng.cos();
        y += lat.cos() * lng.sin();
        z += lat.sin();
    }

    let count = points.len() as f64;
    x /= count;
    y /= count;
    z /= count;

    let lng = y.atan2(x);
    let hyp = (x * x + y * y).sqrt();
    let lat = z.atan2(hyp);

    Some(Coordinates::new(lat * 180.0 / PI, lng * 180.0 / PI))
}

/// Compute the center of a set of resolved locations
///
/// When a city context is given and more than two locations are present,
/// the centroid prefers the subset whose display names mention the
/// context. The subset is only used if it still contains at least two
/// locations; otherwise every location contributes.
///
/// # Returns
/// An unlabeled center point, or `None` if `locations` is empty
pub fn compute_center(
    locations: &[ResolvedLocation],
    city_context: Option<&str>,
) -> Option<CenterPoint> {
    let points: Vec<Coordinates> = match city_context {
        Some(context) if locations.len() > 2 => {
            let needle = context.to_lowercase();
            let matching: Vec<Coordinates> = locations
                .iter()
                .filter(|loc| loc.display_name.to_lowercase().contains(&needle))
                .map(|loc| loc.coords)
                .collect();

            if matching.len() >= 2 {
                matching
            } else {
                locations.iter().map(|loc| loc.coords).collect()
            }
        }
        _ => locations.iter().map(|loc| loc.coords).collect(),
    };

    spherical_centroid(&points).map(|coords| CenterPoint {
        coords,
        label: None,
    })
}
