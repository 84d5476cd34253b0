//! `nav-core`: foundational types for the `rust_navcmd` route compiler.
//!
//! This crate is a dependency of every other `nav-*` crate.  It has no
//! `nav-*` dependencies and only `thiserror` plus optional `serde`.
//!
//! # What lives here
//!
//! | Module      | Contents                                                   |
//! |-------------|------------------------------------------------------------|
//! | [`geo`]     | `GeoPoint`, haversine distance, initial bearing, angle fold |
//! | [`route`]   | `RouteInput`, `RouteLeg`, `RouteStep`, `Maneuver`, `ManeuverType` |
//! | [`command`] | `CommandKind`, `Command`, `CommandSequence`                 |
//! | [`config`]  | `CompilerConfig` (turn / U-turn / distance thresholds)      |
//! | [`error`]   | `CoreError`, `CoreResult`                                   |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.        |
//!
//! With `serde`, a `Command` serializes as `{type, distance, angle}` and a
//! `GeoPoint` as a `[lat, lon]` pair.

pub mod command;
pub mod config;
pub mod error;
pub mod geo;
pub mod route;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use command::{Command, CommandKind, CommandSequence};
pub use config::CompilerConfig;
pub use error::{CoreError, CoreResult};
pub use geo::{GeoPoint, distance_km, initial_bearing_deg, normalize_angle_deg};
pub use route::{Maneuver, ManeuverType, RouteInput, RouteLeg, RouteStep};
