//! OSRM / Mapbox Directions response decoder.
//!
//! # Expected shape
//!
//! Request with `overview=full&geometries=geojson&steps=true`:
//!
//! ```json
//! {
//!   "code": "Ok",
//!   "routes": [{
//!     "distance": 1234.5,
//!     "duration": 180.2,
//!     "geometry": { "type": "LineString", "coordinates": [[lon, lat], ...] },
//!     "legs": [{ "steps": [{
//!       "distance": 120.0,
//!       "maneuver": { "type": "turn", "modifier": "right",
//!                     "bearing_before": 0, "bearing_after": 90 }
//!     }] }]
//!   }]
//! }
//! ```
//!
//! Only `routes[0]` is used.  GeoJSON coordinates are `[lon, lat]`; they are
//! swapped into `[lat, lon]` on the way in.  Encoded-polyline geometry is
//! rejected with a parse error.

use log::debug;
use serde::Deserialize;

use nav_core::{GeoPoint, Maneuver, RouteInput, RouteLeg, RouteStep};

use crate::{Provider, ProviderError, ProviderResult, ProviderRoute};

// ── Response records ──────────────────────────────────────────────────────────

#[derive(Deserialize)]
struct OsrmResponse {
    code:    Option<String>,
    message: Option<String>,
    #[serde(default)]
    routes:  Vec<OsrmRoute>,
}

#[derive(Deserialize)]
struct OsrmRoute {
    distance: Option<f64>,
    duration: Option<f64>,
    geometry: OsrmGeometry,
    #[serde(default)]
    legs:     Vec<OsrmLeg>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum OsrmGeometry {
    GeoJson { coordinates: Vec<[f64; 2]> },
    Encoded(String),
}

#[derive(Deserialize)]
struct OsrmLeg {
    #[serde(default)]
    steps: Vec<OsrmStep>,
}

#[derive(Deserialize)]
struct OsrmStep {
    #[serde(default)]
    distance: f64,
    /// A step without a maneuver counts as plain forward travel.
    #[serde(default)]
    maneuver: OsrmManeuver,
}

#[derive(Deserialize, Default)]
struct OsrmManeuver {
    #[serde(rename = "type", default)]
    kind:           String,
    modifier:       Option<String>,
    bearing_before: Option<f64>,
    bearing_after:  Option<f64>,
}

impl From<OsrmManeuver> for Maneuver {
    fn from(m: OsrmManeuver) -> Self {
        Maneuver {
            kind:           m.kind,
            modifier:       m.modifier,
            bearing_before: m.bearing_before,
            bearing_after:  m.bearing_after,
        }
    }
}

// ── Public API ────────────────────────────────────────────────────────────────

/// Decode an OSRM or Mapbox Directions response body.
///
/// # Errors
///
/// - [`ProviderError::NoRoute`] if `code` is present and not `"Ok"`, or if
///   `routes` is empty.
/// - [`ProviderError::Parse`] for encoded-polyline geometry.
/// - [`ProviderError::Json`] for malformed JSON.
pub fn decode_osrm(json: &str) -> ProviderResult<ProviderRoute> {
    let response: OsrmResponse = serde_json::from_str(json)?;

    if let Some(code) = response.code.as_deref() {
        if code != "Ok" {
            let detail = response.message.as_deref().unwrap_or("no message");
            return Err(ProviderError::NoRoute(format!("OSRM code {code}: {detail}")));
        }
    }

    let Some(route) = response.routes.into_iter().next() else {
        return Err(ProviderError::NoRoute("OSRM response has no routes".into()));
    };

    let coordinates: Vec<GeoPoint> = match route.geometry {
        OsrmGeometry::GeoJson { coordinates } => coordinates
            .into_iter()
            .map(|[lon, lat]| GeoPoint::new(lat, lon))
            .collect(),
        OsrmGeometry::Encoded(_) => {
            return Err(ProviderError::Parse(
                "encoded polyline geometry is not supported; request geometries=geojson".into(),
            ));
        }
    };

    let legs: Vec<RouteLeg> = route
        .legs
        .into_iter()
        .map(|leg| {
            RouteLeg::new(
                leg.steps
                    .into_iter()
                    .map(|s| RouteStep::new(s.distance, s.maneuver.into()))
                    .collect(),
            )
        })
        .collect();

    debug!(
        "decoded OSRM route: {} coordinates, {} leg(s), {} step(s)",
        coordinates.len(),
        legs.len(),
        legs.iter().map(|l| l.steps.len()).sum::<usize>(),
    );

    Ok(ProviderRoute::new(
        RouteInput::from_coordinates(coordinates).with_legs(legs),
        route.distance,
        route.duration,
        Provider::Osrm,
    ))
}
