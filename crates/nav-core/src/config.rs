//! Compiler thresholds.
//!
//! All four numbers used to live as literals inside the classification code.
//! They are grouped here so an application can tune them (typically loaded
//! from a JSON file with the `serde` feature) without touching the algorithm.

use crate::{CoreError, CoreResult};

/// Tunable thresholds shared by both extractors.
///
/// Comparison rules (fixed, see the extractor docs):
///
/// | Test              | Rule                                       |
/// |-------------------|--------------------------------------------|
/// | turn              | `abs(angle) > threshold_angle_deg`         |
/// | U-turn            | `abs(angle) > u_turn_angle_deg`            |
/// | negligible step   | `distance < min_distance_km`               |
/// | turn test allowed | `accumulated >= min_segment_distance_km`   |
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct CompilerConfig {
    /// Minimum heading change for a maneuver to count as a turn.  Default: 20°.
    pub threshold_angle_deg: f64,

    /// Heading change above which a turn becomes a U-turn.  Default: 150°.
    pub u_turn_angle_deg: f64,

    /// Commands and steps shorter than this are negligible.  Default: 1 m.
    pub min_distance_km: f64,

    /// Geometry analysis only tests for a turn once this much distance has
    /// accumulated since the previous turn.  Default: 10 m.
    pub min_segment_distance_km: f64,
}

impl CompilerConfig {
    pub const DEFAULT_THRESHOLD_ANGLE_DEG: f64 = 20.0;
    pub const DEFAULT_U_TURN_ANGLE_DEG: f64 = 150.0;
    pub const DEFAULT_MIN_DISTANCE_KM: f64 = 0.001;
    pub const DEFAULT_MIN_SEGMENT_DISTANCE_KM: f64 = 0.01;

    /// Reject configurations the extractors cannot interpret.
    pub fn validate(&self) -> CoreResult<()> {
        let fields = [
            ("threshold_angle_deg", self.threshold_angle_deg),
            ("u_turn_angle_deg", self.u_turn_angle_deg),
            ("min_distance_km", self.min_distance_km),
            ("min_segment_distance_km", self.min_segment_distance_km),
        ];
        for (name, value) in fields {
            if !value.is_finite() || value < 0.0 {
                return Err(CoreError::Config(format!(
                    "{name} must be a finite non-negative number, got {value}"
                )));
            }
        }
        if self.u_turn_angle_deg < self.threshold_angle_deg {
            return Err(CoreError::Config(format!(
                "u_turn_angle_deg ({}) is below threshold_angle_deg ({})",
                self.u_turn_angle_deg, self.threshold_angle_deg
            )));
        }
        if self.u_turn_angle_deg > 180.0 {
            return Err(CoreError::Config(format!(
                "u_turn_angle_deg ({}) exceeds 180",
                self.u_turn_angle_deg
            )));
        }
        Ok(())
    }

    /// `true` if a heading change of `angle_deg` is large enough to be a turn.
    #[inline]
    pub fn is_turn_angle(&self, angle_deg: f64) -> bool {
        angle_deg.abs() > self.threshold_angle_deg
    }

    /// `true` if a heading change of `angle_deg` is a U-turn.
    #[inline]
    pub fn is_u_turn_angle(&self, angle_deg: f64) -> bool {
        angle_deg.abs() > self.u_turn_angle_deg
    }
}

impl Default for CompilerConfig {
    fn default() -> Self {
        Self {
            threshold_angle_deg:     Self::DEFAULT_THRESHOLD_ANGLE_DEG,
            u_turn_angle_deg:        Self::DEFAULT_U_TURN_ANGLE_DEG,
            min_distance_km:         Self::DEFAULT_MIN_DISTANCE_KM,
            min_segment_distance_km: Self::DEFAULT_MIN_SEGMENT_DISTANCE_KM,
        }
    }
}
