//! `nav-compile`: turns a route into an ordered list of navigation commands.
//!
//! # Pipeline
//!
//! ```text
//! RouteInput ──► RouteCompiler::compile
//!                  │  < 2 coordinates → empty sequence
//!                  ├─ MetadataExtractor   (provider steps / maneuvers)
//!                  │     non-empty → done
//!                  ├─ GeometryExtractor   (polyline bearings)
//!                  │     non-empty → done
//!                  └─ single Forward spanning the endpoints
//! ```
//!
//! Both extractors feed the same [`Assembler`], which owns the forward-run
//! merging and minimum-distance policy, so their outputs obey one contract.
//!
//! # Crate layout
//!
//! | Module        | Contents                                              |
//! |---------------|-------------------------------------------------------|
//! | [`assembler`] | `Assembler`: forward-run merging and distance gating |
//! | [`extractor`] | `CommandExtractor` trait                              |
//! | [`metadata`]  | `MetadataExtractor`                                   |
//! | [`geometry`]  | `GeometryExtractor`                                   |
//! | [`compiler`]  | `RouteCompiler`, `RouteCompilerBuilder`, `compile_route` |
//! | [`error`]     | `CompileError`, `CompileResult<T>`                    |
//!
//! # Cargo features
//!
//! | Feature    | Effect                                                  |
//! |------------|---------------------------------------------------------|
//! | `parallel` | `compile_batch` runs on Rayon's thread pool.            |

pub mod assembler;
pub mod compiler;
pub mod error;
pub mod extractor;
pub mod geometry;
pub mod metadata;


pub use assembler::Assembler;
pub use compiler::{RouteCompiler, RouteCompilerBuilder, compile_route};
pub use error::{CompileError, CompileResult};
pub use extractor::CommandExtractor;
pub use geometry::GeometryExtractor;
pub use metadata::MetadataExtractor;
