//! Metadata-driven extraction from provider steps.
//!
//! When a routing provider returns legs and steps, each step already names
//! its maneuver and usually the heading before and after it.  That is a far
//! better signal than re-deriving turns from polyline bearings, so this
//! extractor runs first.
//!
//! # Step classification
//!
//! Steps are visited in leg order.  Each step shorter than `min_distance_km`
//! is skipped outright.  The rest are classified in this order:
//!
//! | Condition                                             | Result                  |
//! |-------------------------------------------------------|-------------------------|
//! | type `depart` / `arrive`                              | forward travel          |
//! | type is a U-turn, or `abs(angle) > u_turn`            | U-turn                  |
//! | turn-like type, bearings present, `abs(angle) > threshold`   | left/right turn  |
//! | turn-like type, bearings absent, modifier says left/right    | left/right turn (angle 0) |
//! | anything else                                         | forward travel          |
//!
//! Direction for U-turns and measured turns: right if the angle is positive
//! or the modifier mentions "right", otherwise left.

use log::trace;

use nav_core::{CommandKind, CommandSequence, CompilerConfig, Maneuver, ManeuverType, RouteInput};

use crate::{Assembler, CommandExtractor};

/// What a single step contributes to the sequence.
#[derive(Copy, Clone, Debug, PartialEq)]
pub(crate) enum StepAction {
    Forward,
    Maneuver { kind: CommandKind, angle_deg: f64 },
}

/// Extracts commands from provider step/maneuver metadata.
///
/// Returns an empty sequence for routes without legs, or when every step is
/// negligible, so the compiler falls through to geometry analysis.
#[derive(Copy, Clone, Debug, Default)]
pub struct MetadataExtractor;

impl CommandExtractor for MetadataExtractor {
    fn name(&self) -> &'static str {
        "metadata"
    }

    fn extract(&self, route: &RouteInput, config: &CompilerConfig) -> CommandSequence {
        if !route.has_metadata() {
            return CommandSequence::empty();
        }

        let mut asm = Assembler::new(config);

        for (index, step) in route.steps().enumerate() {
            let distance_km = step.distance_km();
            if distance_km < config.min_distance_km {
                trace!("step {index}: {distance_km} km is negligible, skipped");
                continue;
            }

            match classify_step(&step.maneuver, config) {
                StepAction::Forward => asm.advance(distance_km),
                StepAction::Maneuver { kind, angle_deg } => {
                    trace!("step {index}: {kind} {angle_deg:.1}° over {distance_km} km");
                    asm.turn(kind, distance_km, angle_deg);
                }
            }
        }

        asm.finish()
    }
}

pub(crate) fn classify_step(maneuver: &Maneuver, config: &CompilerConfig) -> StepAction {
    let ty = maneuver.maneuver_type();
    if ty.is_terminal() {
        return StepAction::Forward;
    }

    let measured = maneuver.turn_angle_deg();
    let angle_deg = measured.unwrap_or(0.0);
    let right = angle_deg > 0.0 || maneuver.modifier_mentions("right");

    if ty == ManeuverType::UTurn || config.is_u_turn_angle(angle_deg) {
        return StepAction::Maneuver { kind: CommandKind::u_turn(right), angle_deg };
    }

    if !ty.is_turn_like() {
        return StepAction::Forward;
    }

    match measured {
        Some(angle_deg) if config.is_turn_angle(angle_deg) => {
            StepAction::Maneuver { kind: CommandKind::turn(right), angle_deg }
        }
        // Bearings present but the heading barely changes: keep going.
        Some(_) => StepAction::Forward,
        None if maneuver.modifier_mentions("right") => {
            StepAction::Maneuver { kind: CommandKind::RightTurn, angle_deg: 0.0 }
        }
        None if maneuver.modifier_mentions("left") => {
            StepAction::Maneuver { kind: CommandKind::LeftTurn, angle_deg: 0.0 }
        }
        None => StepAction::Forward,
    }
}
