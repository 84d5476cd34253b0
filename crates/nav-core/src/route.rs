//! Route model handed to the compiler by a routing-provider adapter.
//!
//! A route is a polyline of [`GeoPoint`]s plus, optionally, the provider's
//! segmentation of that polyline into legs (between waypoints) and steps
//! (between maneuvers).  The compiler never mutates a `RouteInput`.

use crate::GeoPoint;

// ── ManeuverType ──────────────────────────────────────────────────────────────

/// Classified form of a provider's maneuver type tag.
///
/// Tags are matched case-insensitively and with `' '`, `'-'` and `'_'`
/// treated alike, so `"end of road"`, `"end-of-road"` and `"End_Of_Road"` all
/// map to [`ManeuverType::EndOfRoad`].
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[non_exhaustive]
pub enum ManeuverType {
    Depart,
    Arrive,
    /// Any tag containing `uturn` (e.g. `"uturn"`, `"u-turn"`).
    UTurn,
    Turn,
    Rotary,
    Roundabout,
    EndOfRoad,
    Fork,
    Merge,
    Ramp,
    OnRamp,
    OffRamp,
    /// `continue`, `new name`, `notification`, unknown tags, …
    Other,
}

impl ManeuverType {
    /// Classify a raw provider tag.
    pub fn from_tag(tag: &str) -> Self {
        let key: String = tag
            .trim()
            .chars()
            .filter_map(|c| match c {
                ' ' | '-' | '_' => None,
                c => Some(c.to_ascii_lowercase()),
            })
            .collect();

        if key.contains("uturn") {
            return ManeuverType::UTurn;
        }
        match key.as_str() {
            "depart"     => ManeuverType::Depart,
            "arrive"     => ManeuverType::Arrive,
            "turn"       => ManeuverType::Turn,
            "rotary"     => ManeuverType::Rotary,
            "roundabout" => ManeuverType::Roundabout,
            "endofroad"  => ManeuverType::EndOfRoad,
            "fork"       => ManeuverType::Fork,
            "merge"      => ManeuverType::Merge,
            "ramp"       => ManeuverType::Ramp,
            "onramp"     => ManeuverType::OnRamp,
            "offramp"    => ManeuverType::OffRamp,
            _            => ManeuverType::Other,
        }
    }

    /// `true` for maneuvers that may be emitted as a left/right turn when
    /// their bearing change is large enough.
    #[inline]
    pub fn is_turn_like(self) -> bool {
        matches!(
            self,
            ManeuverType::Turn
                | ManeuverType::Rotary
                | ManeuverType::Roundabout
                | ManeuverType::EndOfRoad
                | ManeuverType::Fork
                | ManeuverType::Merge
                | ManeuverType::Ramp
                | ManeuverType::OnRamp
                | ManeuverType::OffRamp
        )
    }

    /// `true` for `depart` / `arrive`, which only ever contribute distance.
    #[inline]
    pub fn is_terminal(self) -> bool {
        matches!(self, ManeuverType::Depart | ManeuverType::Arrive)
    }
}

// ── Maneuver / RouteStep / RouteLeg ───────────────────────────────────────────

/// The driving action a provider attached to one step.
#[derive(Clone, Debug, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Maneuver {
    /// Raw type tag, e.g. `"turn"`, `"roundabout"`, `"depart"`.
    #[cfg_attr(feature = "serde", serde(rename = "type", default))]
    pub kind: String,
    /// Direction hint, e.g. `"left"`, `"slight right"`, `"straight"`.
    #[cfg_attr(feature = "serde", serde(default))]
    pub modifier: Option<String>,
    /// Heading before the maneuver, degrees clockwise from north.
    #[cfg_attr(feature = "serde", serde(default))]
    pub bearing_before: Option<f64>,
    /// Heading after the maneuver, degrees clockwise from north.
    #[cfg_attr(feature = "serde", serde(default))]
    pub bearing_after: Option<f64>,
}

impl Maneuver {
    pub fn new(kind: impl Into<String>) -> Self {
        Self { kind: kind.into(), ..Self::default() }
    }

    pub fn with_modifier(mut self, modifier: impl Into<String>) -> Self {
        self.modifier = Some(modifier.into());
        self
    }

    pub fn with_bearings(mut self, before: f64, after: f64) -> Self {
        self.bearing_before = Some(before);
        self.bearing_after = Some(after);
        self
    }

    #[inline]
    pub fn maneuver_type(&self) -> ManeuverType {
        ManeuverType::from_tag(&self.kind)
    }

    /// Signed heading change `bearing_after − bearing_before`, folded into
    /// `(-180, 180]`.  `None` unless both bearings are present.
    pub fn turn_angle_deg(&self) -> Option<f64> {
        match (self.bearing_before, self.bearing_after) {
            (Some(before), Some(after)) => Some(crate::normalize_angle_deg(after - before)),
            _ => None,
        }
    }

    /// `true` if the modifier mentions `needle` (case-insensitive).
    pub fn modifier_mentions(&self, needle: &str) -> bool {
        self.modifier
            .as_deref()
            .is_some_and(|m| m.to_ascii_lowercase().contains(needle))
    }
}

/// One provider step: a maneuver followed by a stretch of road.
#[derive(Clone, Debug, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RouteStep {
    /// Length of the step in metres.
    #[cfg_attr(feature = "serde", serde(default))]
    pub distance: f64,
    #[cfg_attr(feature = "serde", serde(default))]
    pub maneuver: Maneuver,
}

impl RouteStep {
    pub fn new(distance_m: f64, maneuver: Maneuver) -> Self {
        Self { distance: distance_m, maneuver }
    }

    #[inline]
    pub fn distance_km(&self) -> f64 {
        self.distance / 1000.0
    }
}

/// Steps between two consecutive waypoints.
#[derive(Clone, Debug, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RouteLeg {
    #[cfg_attr(feature = "serde", serde(default))]
    pub steps: Vec<RouteStep>,
}

impl RouteLeg {
    pub fn new(steps: Vec<RouteStep>) -> Self {
        Self { steps }
    }
}

// ── RouteInput ────────────────────────────────────────────────────────────────

/// Everything the compiler reads: the polyline and the optional legs.
///
/// An empty `legs` vector means "no provider metadata"; the compiler then goes
/// straight to geometry analysis.
#[derive(Clone, Debug, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RouteInput {
    pub coordinates: Vec<GeoPoint>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub legs: Vec<RouteLeg>,
}

impl RouteInput {
    /// A geometry-only route.
    pub fn from_coordinates(coordinates: Vec<GeoPoint>) -> Self {
        Self { coordinates, legs: Vec::new() }
    }

    pub fn with_legs(mut self, legs: Vec<RouteLeg>) -> Self {
        self.legs = legs;
        self
    }

    #[inline]
    pub fn has_metadata(&self) -> bool {
        !self.legs.is_empty()
    }

    /// Iterate over every step of every leg, in route order.
    pub fn steps(&self) -> impl Iterator<Item = &RouteStep> {
        self.legs.iter().flat_map(|leg| leg.steps.iter())
    }

    /// Haversine length of the polyline in kilometres.
    pub fn path_length_km(&self) -> f64 {
        self.coordinates
            .windows(2)
            .map(|w| crate::distance_km(w[0], w[1]))
            .sum()
    }
}
