//! Shared command-assembly policy.
//!
//! Extractors never push into a `Vec<Command>` directly.  They report forward
//! travel with [`Assembler::advance`] and maneuvers with [`Assembler::turn`];
//! the assembler decides what is actually emitted:
//!
//! - Forward travel accumulates into one pending run.  A run is flushed only
//!   when a maneuver is emitted or the route ends, so two `Forward` entries are
//!   never adjacent.
//! - A run is flushed before a maneuver only if it is strictly longer than
//!   `min_distance_km`.  A remainder of at most `min_distance_km` is not
//!   emitted ahead of the maneuver: it is carried past it and merges into the
//!   forward run that follows.  Its distance is therefore reported after the
//!   maneuver rather than before it, displaced by at most one minimum
//!   distance.  If no further travel brings the run up to `min_distance_km`
//!   before the route ends, the remainder is dropped.
//! - At the end of the route the remainder is flushed if it is at least
//!   `min_distance_km`.
//! - A maneuver shorter than `min_distance_km` is rejected; the caller decides
//!   what to do with its distance.

use nav_core::{Command, CommandKind, CommandSequence, CompilerConfig, normalize_angle_deg};

/// Incremental builder for one [`CommandSequence`].
pub struct Assembler<'c> {
    config:     &'c CompilerConfig,
    commands:   Vec<Command>,
    forward_km: f64,
}

impl<'c> Assembler<'c> {
    pub fn new(config: &'c CompilerConfig) -> Self {
        Self {
            config,
            commands:   Vec::new(),
            forward_km: 0.0,
        }
    }

    /// Add straight-line travel to the pending forward run.
    #[inline]
    pub fn advance(&mut self, distance_km: f64) {
        self.forward_km += distance_km;
    }

    /// Distance accumulated since the last flush.
    #[inline]
    pub fn pending_forward_km(&self) -> f64 {
        self.forward_km
    }

    /// Number of commands emitted so far (excluding the pending run).
    #[inline]
    pub fn emitted(&self) -> usize {
        self.commands.len()
    }

    /// Emit a maneuver covering `distance_km`, flushing the pending run first.
    ///
    /// A pending run of at most `min_distance_km` stays pending, so it ends up
    /// in the forward run after this maneuver.  Returns `false` (and emits
    /// nothing) if the maneuver is shorter than `min_distance_km`.
    pub fn turn(&mut self, kind: CommandKind, distance_km: f64, angle_deg: f64) -> bool {
        // Written as a negated `>=` so a NaN distance is rejected too.
        if !(distance_km >= self.config.min_distance_km) {
            return false;
        }
        if self.forward_km > self.config.min_distance_km {
            let run = std::mem::take(&mut self.forward_km);
            self.push_forward(run);
        }
        let angle_deg = if kind.is_turn() { normalize_angle_deg(angle_deg) } else { 0.0 };
        self.commands.push(Command::new(kind, distance_km, angle_deg));
        true
    }

    /// Flush the final run and hand back the finished sequence.
    pub fn finish(mut self) -> CommandSequence {
        if self.forward_km >= self.config.min_distance_km {
            let run = self.forward_km;
            self.push_forward(run);
        }
        CommandSequence::new(self.commands)
    }

    fn push_forward(&mut self, distance_km: f64) {
        match self.commands.last_mut() {
            Some(last) if last.kind == CommandKind::Forward => last.distance_km += distance_km,
            _ => self.commands.push(Command::forward(distance_km)),
        }
    }
}
