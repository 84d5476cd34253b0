//! `RouteCompiler`: runs the extractor chain and applies the fallbacks.

use log::debug;

use nav_core::{Command, CommandSequence, CompilerConfig, RouteInput, distance_km};

use crate::{CommandExtractor, CompileError, CompileResult, GeometryExtractor, MetadataExtractor};

// ── RouteCompiler ─────────────────────────────────────────────────────────────

/// Compiles routes into command sequences.
///
/// Holds a validated [`CompilerConfig`] and an ordered chain of
/// [`CommandExtractor`]s.  Compilation is a pure function of the route: the
/// compiler keeps no per-call state, so one instance can be shared freely
/// across threads.
///
/// # Example
///
/// ```rust,ignore
/// let compiler = RouteCompiler::builder()
///     .config(CompilerConfig { threshold_angle_deg: 30.0, ..Default::default() })
///     .build()?;
/// let commands = compiler.compile(&route);
/// println!("{:?}", commands.type_names());
/// ```
pub struct RouteCompiler {
    config:     CompilerConfig,
    extractors: Vec<Box<dyn CommandExtractor>>,
}

impl RouteCompiler {
    /// Default thresholds and the metadata → geometry chain.
    pub fn new() -> Self {
        Self {
            config:     CompilerConfig::default(),
            extractors: default_chain(),
        }
    }

    /// Custom thresholds with the default chain.
    pub fn with_config(config: CompilerConfig) -> CompileResult<Self> {
        RouteCompilerBuilder::new().config(config).build()
    }

    pub fn builder() -> RouteCompilerBuilder {
        RouteCompilerBuilder::new()
    }

    pub fn config(&self) -> &CompilerConfig {
        &self.config
    }

    /// Names of the extractors in the order they are tried.
    pub fn extractor_names(&self) -> Vec<&'static str> {
        self.extractors.iter().map(|e| e.name()).collect()
    }

    /// Compile one route.
    ///
    /// Returns an empty sequence only when the route has fewer than two
    /// coordinates.  Otherwise the first non-empty extractor result wins; if
    /// every extractor comes back empty, a single `Forward` spanning the
    /// endpoints is returned.
    pub fn compile(&self, route: &RouteInput) -> CommandSequence {
        let points = route.coordinates.as_slice();
        let (first, last) = match points {
            [first, .., last] => (*first, *last),
            _ => {
                debug!("route has {} coordinate(s); nothing to compile", points.len());
                return CommandSequence::empty();
            }
        };

        for extractor in &self.extractors {
            let commands = extractor.extract(route, &self.config);
            if !commands.is_empty() {
                debug!(
                    "{} extractor produced {} command(s) for {} coordinates",
                    extractor.name(),
                    commands.len(),
                    points.len(),
                );
                return commands;
            }
            debug!("{} extractor produced no commands; trying next", extractor.name());
        }

        debug!("all extractors empty; emitting a single forward command");
        CommandSequence::new(vec![Command::forward(distance_km(first, last))])
    }

    /// Compile many independent routes, preserving input order.
    ///
    /// With the `parallel` feature the routes are spread over Rayon's thread
    /// pool.  Output is identical either way.
    pub fn compile_batch(&self, routes: &[RouteInput]) -> Vec<CommandSequence> {
        #[cfg(not(feature = "parallel"))]
        {
            routes.iter().map(|r| self.compile(r)).collect()
        }

        #[cfg(feature = "parallel")]
        {
            use rayon::prelude::*;

            routes.par_iter().map(|r| self.compile(r)).collect()
        }
    }
}

impl Default for RouteCompiler {
    fn default() -> Self {
        Self::new()
    }
}

/// Compile `route` with the default thresholds and extractor chain.
pub fn compile_route(route: &RouteInput) -> CommandSequence {
    RouteCompiler::new().compile(route)
}

fn default_chain() -> Vec<Box<dyn CommandExtractor>> {
    vec![Box::new(MetadataExtractor), Box::new(GeometryExtractor)]
}

// ── RouteCompilerBuilder ──────────────────────────────────────────────────────

/// Fluent builder for [`RouteCompiler`].
///
/// | Method          | Default                                  |
/// |-----------------|------------------------------------------|
/// | `.config(c)`    | `CompilerConfig::default()`              |
/// | `.extractor(e)` | metadata → geometry chain                |
///
/// Calling `.extractor` at least once replaces the default chain with the
/// extractors supplied, tried in the order they were added.
#[derive(Default)]
pub struct RouteCompilerBuilder {
    config:     Option<CompilerConfig>,
    extractors: Vec<Box<dyn CommandExtractor>>,
}

impl RouteCompilerBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn config(mut self, config: CompilerConfig) -> Self {
        self.config = Some(config);
        self
    }

    pub fn extractor<E: CommandExtractor + 'static>(mut self, extractor: E) -> Self {
        self.extractors.push(Box::new(extractor));
        self
    }

    /// Validate the configuration and return a ready compiler.
    pub fn build(self) -> CompileResult<RouteCompiler> {
        let config = self.config.unwrap_or_default();
        config.validate().map_err(CompileError::Config)?;

        let extractors = if self.extractors.is_empty() {
            default_chain()
        } else {
            self.extractors
        };

        Ok(RouteCompiler { config, extractors })
    }
}
