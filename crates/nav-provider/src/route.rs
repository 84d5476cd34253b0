//! `Provider` selector and the decoded `ProviderRoute`.

use std::fmt;
use std::io::Read;
use std::str::FromStr;

use nav_core::RouteInput;

use crate::{ProviderError, ProviderResult};

// ── Provider ──────────────────────────────────────────────────────────────────

/// Which response format a JSON document follows.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
pub enum Provider {
    /// OSRM `route/v1` responses.  Mapbox Directions uses the same shape.
    #[default]
    Osrm,
    /// GraphHopper `/route` responses with `points_encoded=false`.
    GraphHopper,
}

impl Provider {
    pub fn as_str(self) -> &'static str {
        match self {
            Provider::Osrm        => "osrm",
            Provider::GraphHopper => "graphhopper",
        }
    }

    /// Decode a response body in this provider's format.
    pub fn decode(self, json: &str) -> ProviderResult<ProviderRoute> {
        match self {
            Provider::Osrm        => crate::decode_osrm(json),
            Provider::GraphHopper => crate::decode_graphhopper(json),
        }
    }

    /// Like [`decode`](Self::decode) but accepts any `Read` source.
    pub fn decode_reader<R: Read>(self, mut reader: R) -> ProviderResult<ProviderRoute> {
        let mut json = String::new();
        reader.read_to_string(&mut json)?;
        self.decode(&json)
    }
}

impl fmt::Display for Provider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Provider {
    type Err = ProviderError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "osrm" | "mapbox"                => Ok(Provider::Osrm),
            "graphhopper" | "graph-hopper"   => Ok(Provider::GraphHopper),
            other => Err(ProviderError::Parse(format!("unknown provider {other:?}"))),
        }
    }
}

// ── ProviderRoute ─────────────────────────────────────────────────────────────

/// A decoded provider response: the compiler input plus the provider's own
/// route totals.
#[derive(Clone, Debug, PartialEq)]
pub struct ProviderRoute {
    /// Coordinates in `[lat, lon]` order, plus legs when the provider sent any.
    pub route:      RouteInput,
    /// Provider-reported length in metres (polyline length if absent).
    pub distance_m: f64,
    /// Provider-reported travel time in seconds (0 if absent).
    pub duration_s: f64,
    pub provider:   Provider,
}

impl ProviderRoute {
    /// Fill in the distance from the polyline when the provider omitted it.
    pub(crate) fn new(
        route: RouteInput,
        distance_m: Option<f64>,
        duration_s: Option<f64>,
        provider: Provider,
    ) -> Self {
        let distance_m = distance_m.unwrap_or_else(|| route.path_length_km() * 1000.0);
        Self {
            route,
            distance_m,
            duration_s: duration_s.unwrap_or(0.0),
            provider,
        }
    }
}
