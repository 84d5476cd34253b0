//! Navigation commands and the sequence type the compiler produces.

use std::ops::Deref;

use crate::{CoreError, CoreResult};

// ── CommandKind ───────────────────────────────────────────────────────────────

/// The discrete action a command asks the driver (or vehicle) to perform.
///
/// Sign convention for the accompanying angle: positive = right, negative =
/// left.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum CommandKind {
    Forward,
    /// Reverse-direction travel.  Neither extractor emits it today; a
    /// classifier that treats a heading reversal near 180° as backing up
    /// rather than a U-turn would produce this kind.
    Backward,
    LeftTurn,
    RightTurn,
    LeftUTurn,
    RightUTurn,
}

impl CommandKind {
    /// Wire name, as used in JSON output and the flattened type array.
    pub fn as_str(self) -> &'static str {
        match self {
            CommandKind::Forward    => "forward",
            CommandKind::Backward   => "backward",
            CommandKind::LeftTurn   => "left_turn",
            CommandKind::RightTurn  => "right_turn",
            CommandKind::LeftUTurn  => "left_u_turn",
            CommandKind::RightUTurn => "right_u_turn",
        }
    }

    /// `true` for the four kinds that carry a meaningful angle.
    #[inline]
    pub fn is_turn(self) -> bool {
        !matches!(self, CommandKind::Forward | CommandKind::Backward)
    }

    #[inline]
    pub fn is_u_turn(self) -> bool {
        matches!(self, CommandKind::LeftUTurn | CommandKind::RightUTurn)
    }

    /// Turn kind for the given direction.
    #[inline]
    pub fn turn(right: bool) -> Self {
        if right { CommandKind::RightTurn } else { CommandKind::LeftTurn }
    }

    /// U-turn kind for the given direction.
    #[inline]
    pub fn u_turn(right: bool) -> Self {
        if right { CommandKind::RightUTurn } else { CommandKind::LeftUTurn }
    }
}

impl std::fmt::Display for CommandKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for CommandKind {
    type Err = CoreError;

    fn from_str(s: &str) -> CoreResult<Self> {
        match s.trim() {
            "forward"      => Ok(CommandKind::Forward),
            "backward"     => Ok(CommandKind::Backward),
            "left_turn"    => Ok(CommandKind::LeftTurn),
            "right_turn"   => Ok(CommandKind::RightTurn),
            "left_u_turn"  => Ok(CommandKind::LeftUTurn),
            "right_u_turn" => Ok(CommandKind::RightUTurn),
            other => Err(CoreError::Parse(format!("unknown command type {other:?}"))),
        }
    }
}

// ── Command ───────────────────────────────────────────────────────────────────

/// One navigation command.
///
/// With the `serde` feature this serializes as
/// `{ "type": "...", "distance": km, "angle": degrees }`.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Command {
    #[cfg_attr(feature = "serde", serde(rename = "type"))]
    pub kind: CommandKind,
    /// Distance covered by this command, kilometres.
    #[cfg_attr(feature = "serde", serde(rename = "distance"))]
    pub distance_km: f64,
    /// Signed heading change in `(-180, 180]`; 0 for forward/backward.
    #[cfg_attr(feature = "serde", serde(rename = "angle"))]
    pub angle_deg: f64,
}

impl Command {
    #[inline]
    pub fn forward(distance_km: f64) -> Self {
        Self { kind: CommandKind::Forward, distance_km, angle_deg: 0.0 }
    }

    #[inline]
    pub fn new(kind: CommandKind, distance_km: f64, angle_deg: f64) -> Self {
        Self { kind, distance_km, angle_deg }
    }
}

// ── CommandSequence ───────────────────────────────────────────────────────────

/// The ordered, read-only output of one compile call.
///
/// Built once by the compiler's assembler and never mutated afterwards.
/// Dereferences to `[Command]` for iteration and indexing.
#[derive(Clone, Debug, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct CommandSequence(Vec<Command>);

impl CommandSequence {
    /// Wrap an already assembled list.
    ///
    /// The caller is responsible for the sequence invariants; see
    /// [`check_invariants`][Self::check_invariants].
    pub fn new(commands: Vec<Command>) -> Self {
        Self(commands)
    }

    pub fn empty() -> Self {
        Self(Vec::new())
    }

    pub fn as_slice(&self) -> &[Command] {
        &self.0
    }

    pub fn into_vec(self) -> Vec<Command> {
        self.0
    }

    /// Sum of all command distances, kilometres.
    pub fn total_distance_km(&self) -> f64 {
        self.0.iter().map(|c| c.distance_km).sum()
    }

    /// Flattened projection onto the wire type names, e.g.
    /// `["forward", "right_turn", "forward"]`.
    pub fn type_names(&self) -> Vec<&'static str> {
        self.0.iter().map(|c| c.kind.as_str()).collect()
    }

    /// Number of turn and U-turn commands.
    pub fn turn_count(&self) -> usize {
        self.0.iter().filter(|c| c.kind.is_turn()).count()
    }

    /// Verify the structural invariants every compiler output must satisfy:
    /// no two adjacent `Forward` entries, turn angles inside `(-180, 180]`,
    /// and zero angle on forward/backward entries.
    pub fn check_invariants(&self) -> CoreResult<()> {
        for (i, pair) in self.0.windows(2).enumerate() {
            if pair[0].kind == CommandKind::Forward && pair[1].kind == CommandKind::Forward {
                return Err(CoreError::Invariant(format!(
                    "adjacent forward commands at {i} and {}",
                    i + 1
                )));
            }
        }
        for (i, cmd) in self.0.iter().enumerate() {
            if !(cmd.angle_deg > -180.0 && cmd.angle_deg <= 180.0) {
                return Err(CoreError::Invariant(format!(
                    "command {i} angle {} outside (-180, 180]",
                    cmd.angle_deg
                )));
            }
            if !cmd.kind.is_turn() && cmd.angle_deg != 0.0 {
                return Err(CoreError::Invariant(format!(
                    "{} command {i} carries non-zero angle {}",
                    cmd.kind, cmd.angle_deg
                )));
            }
            if cmd.distance_km < 0.0 {
                return Err(CoreError::Invariant(format!(
                    "command {i} has negative distance {}",
                    cmd.distance_km
                )));
            }
        }
        Ok(())
    }

    /// Verify minimum-distance gating: every entry with a non-zero distance
    /// covers at least `min_km`.
    ///
    /// A sequence made of a single `Forward` is exempt, since a short straight
    /// route still yields one command.
    pub fn check_min_distance(&self, min_km: f64) -> CoreResult<()> {
        if let [only] = self.0.as_slice() {
            if only.kind == CommandKind::Forward {
                return Ok(());
            }
        }
        for (i, cmd) in self.0.iter().enumerate() {
            if cmd.distance_km != 0.0 && !(cmd.distance_km >= min_km) {
                return Err(CoreError::Invariant(format!(
                    "{} command {i} covers {} km, below the {min_km} km minimum",
                    cmd.kind, cmd.distance_km
                )));
            }
        }
        Ok(())
    }
}

impl Deref for CommandSequence {
    type Target = [Command];

    fn deref(&self) -> &[Command] {
        &self.0
    }
}

impl From<Vec<Command>> for CommandSequence {
    fn from(commands: Vec<Command>) -> Self {
        Self(commands)
    }
}

impl IntoIterator for CommandSequence {
    type Item = Command;
    type IntoIter = std::vec::IntoIter<Command>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a CommandSequence {
    type Item = &'a Command;
    type IntoIter = std::slice::Iter<'a, Command>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
