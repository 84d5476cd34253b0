//! GraphHopper `/route` response decoder.
//!
//! Requires `points_encoded=false`, so `paths[0].points` is a GeoJSON
//! `LineString` with `[lon, lat]` pairs.  `time` is in milliseconds.
//! GraphHopper instructions use their own sign codes rather than OSRM
//! maneuvers, so the decoded route carries no legs and compiles from
//! geometry.

use log::debug;
use serde::Deserialize;

use nav_core::{GeoPoint, RouteInput};

use crate::{Provider, ProviderError, ProviderResult, ProviderRoute};

#[derive(Deserialize)]
struct GraphHopperResponse {
    message: Option<String>,
    #[serde(default)]
    paths:   Vec<GraphHopperPath>,
}

#[derive(Deserialize)]
struct GraphHopperPath {
    distance: Option<f64>,
    /// Milliseconds.
    time:     Option<f64>,
    points:   GraphHopperPoints,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum GraphHopperPoints {
    GeoJson { coordinates: Vec<[f64; 2]> },
    Encoded(String),
}

/// Decode a GraphHopper route response body.
///
/// # Errors
///
/// - [`ProviderError::NoRoute`] if `paths` is missing or empty.
/// - [`ProviderError::Parse`] for encoded points.
/// - [`ProviderError::Json`] for malformed JSON.
pub fn decode_graphhopper(json: &str) -> ProviderResult<ProviderRoute> {
    let response: GraphHopperResponse = serde_json::from_str(json)?;

    let Some(path) = response.paths.into_iter().next() else {
        let detail = response.message.unwrap_or_else(|| "response has no paths".into());
        return Err(ProviderError::NoRoute(format!("GraphHopper: {detail}")));
    };

    let coordinates: Vec<GeoPoint> = match path.points {
        GraphHopperPoints::GeoJson { coordinates } => coordinates
            .into_iter()
            .map(|[lon, lat]| GeoPoint::new(lat, lon))
            .collect(),
        GraphHopperPoints::Encoded(_) => {
            return Err(ProviderError::Parse(
                "encoded points are not supported; request points_encoded=false".into(),
            ));
        }
    };

    debug!("decoded GraphHopper path: {} coordinates", coordinates.len());

    Ok(ProviderRoute::new(
        RouteInput::from_coordinates(coordinates),
        path.distance,
        path.time.map(|ms| ms / 1000.0),
        Provider::GraphHopper,
    ))
}
