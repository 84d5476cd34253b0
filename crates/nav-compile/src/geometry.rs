//! Geometry-driven extraction from the polyline alone.
//!
//! Used when a route carries no provider metadata, or when the metadata
//! yields nothing.  A `(prev, curr, next)` window slides along the
//! coordinates; at each interior vertex the heading change
//!
//!   angle = normalize(bearing(curr, next) − bearing(prev, curr))
//!
//! decides whether the vertex is a turn.  The segment `prev → curr` leading
//! into a turn vertex becomes the turn command's distance.
//!
//! Bearings over very short hops are noise, so no turn test happens until at
//! least `min_segment_distance_km` has been travelled since the previous
//! turn.

use log::trace;

use nav_core::{
    Command, CommandKind, CommandSequence, CompilerConfig, RouteInput, distance_km,
    initial_bearing_deg, normalize_angle_deg,
};

use crate::{Assembler, CommandExtractor};

/// Derives commands from the bearing changes along the coordinate polyline.
///
/// Never returns an empty sequence for two or more coordinates: an
/// essentially straight route yields one `Forward` spanning start to end.
#[derive(Copy, Clone, Debug, Default)]
pub struct GeometryExtractor;

impl CommandExtractor for GeometryExtractor {
    fn name(&self) -> &'static str {
        "geometry"
    }

    fn extract(&self, route: &RouteInput, config: &CompilerConfig) -> CommandSequence {
        let points = route.coordinates.as_slice();
        let (first, last) = match points {
            [] | [_] => return CommandSequence::empty(),
            [a, b] => return CommandSequence::new(vec![Command::forward(distance_km(*a, *b))]),
            [first, .., last] => (*first, *last),
        };

        // Repeated vertices have no heading of their own and would hide the
        // turn at the vertex they duplicate.
        let mut points = points.to_vec();
        points.dedup();
        if points.len() < 3 {
            return CommandSequence::new(vec![Command::forward(distance_km(first, last))]);
        }

        let mut asm = Assembler::new(config);
        let mut since_turn_km = 0.0;

        for (i, window) in points.windows(3).enumerate() {
            let (prev, curr, next) = (window[0], window[1], window[2]);
            let segment_km = distance_km(prev, curr);
            since_turn_km += segment_km;

            if since_turn_km < config.min_segment_distance_km {
                asm.advance(segment_km);
                continue;
            }

            let angle_deg = normalize_angle_deg(
                initial_bearing_deg(curr, next) - initial_bearing_deg(prev, curr),
            );

            if config.is_turn_angle(angle_deg) {
                let right = angle_deg > 0.0;
                let kind = if config.is_u_turn_angle(angle_deg) {
                    CommandKind::u_turn(right)
                } else {
                    CommandKind::turn(right)
                };
                if asm.turn(kind, segment_km, angle_deg) {
                    trace!("vertex {}: {kind} {angle_deg:.1}°", i + 1);
                    since_turn_km = 0.0;
                    continue;
                }
            }

            asm.advance(segment_km);
        }

        asm.advance(distance_km(points[points.len() - 2], last));

        let commands = asm.finish();
        if commands.is_empty() {
            CommandSequence::new(vec![Command::forward(distance_km(first, last))])
        } else {
            commands
        }
    }
}
