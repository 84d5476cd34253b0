//! The `CommandExtractor` trait: one strategy for producing commands.

use nav_core::{CommandSequence, CompilerConfig, RouteInput};

/// Pluggable command-extraction strategy.
///
/// [`RouteCompiler`][crate::RouteCompiler] holds an ordered chain of
/// extractors and returns the first non-empty result.  An empty sequence
/// means "this strategy has nothing to say about the route", not an error.
///
/// The default chain is [`MetadataExtractor`][crate::MetadataExtractor]
/// followed by [`GeometryExtractor`][crate::GeometryExtractor].
///
/// # Thread safety
///
/// Implementations must be `Send + Sync` so one compiler can serve many
/// routes in parallel (`compile_batch` with the `parallel` feature).
pub trait CommandExtractor: Send + Sync {
    /// Short name used in log output.
    fn name(&self) -> &'static str;

    /// Produce commands for `route`.  Must be a pure function of its inputs.
    fn extract(&self, route: &RouteInput, config: &CompilerConfig) -> CommandSequence;
}
