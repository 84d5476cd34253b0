//! `nav-provider`: turns routing-provider responses into [`RouteInput`]s.
//!
//! The compiler never talks to a routing service.  This crate decodes the
//! JSON a service already returned and normalises it: coordinates become
//! `[lat, lon]`, steps become [`nav_core::RouteStep`]s, totals are kept for
//! display.
//!
//! | Module          | Contents                                           |
//! |-----------------|----------------------------------------------------|
//! | [`osrm`]        | `decode_osrm` (OSRM `route/v1`, Mapbox Directions) |
//! | [`graphhopper`] | `decode_graphhopper` (geometry only)               |
//! | [`location`]    | `parse_location` for `"lat,lon"` strings           |
//! | [`route`]       | `Provider`, `ProviderRoute`                        |
//! | [`error`]       | `ProviderError`, `ProviderResult<T>`               |
//!
//! [`RouteInput`]: nav_core::RouteInput

pub mod error;
pub mod graphhopper;
pub mod location;
pub mod osrm;
pub mod route;


pub use error::{ProviderError, ProviderResult};
pub use graphhopper::decode_graphhopper;
pub use location::parse_location;
pub use osrm::decode_osrm;
pub use route::{Provider, ProviderRoute};
