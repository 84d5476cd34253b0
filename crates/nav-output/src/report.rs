//! `RouteReport`: one compiled route together with its display totals.

use nav_core::{CommandSequence, GeoPoint};

/// What every writer and the text summary consume.
#[derive(Clone, Debug, PartialEq, Default)]
pub struct RouteReport {
    /// Route polyline in `[lat, lon]` order.
    pub coordinates: Vec<GeoPoint>,
    pub commands:    CommandSequence,
    /// Total route length in metres, as reported by the provider.
    pub distance_m:  f64,
    /// Total travel time in seconds, as reported by the provider.
    pub duration_s:  f64,
}

impl RouteReport {
    pub fn new(
        coordinates: Vec<GeoPoint>,
        commands: CommandSequence,
        distance_m: f64,
        duration_s: f64,
    ) -> Self {
        Self { coordinates, commands, distance_m, duration_s }
    }
}
