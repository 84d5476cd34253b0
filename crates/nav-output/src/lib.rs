//! `nav-output`: writers and text rendering for compiled routes.
//!
//! Two file backends share the [`CommandWriter`] trait:
//!
//! | Backend        | File created   | Contents                                |
//! |----------------|----------------|-----------------------------------------|
//! | [`CsvWriter`]  | `commands.csv` | one row per command                     |
//! | [`JsonWriter`] | `routes.json`  | one object per route, front-end shape   |
//!
//! [`summary`] renders a [`RouteReport`] for a terminal.
//!
//! # Usage
//!
//! ```rust,ignore
//! use nav_output::{CommandWriter, CsvWriter, RouteReport};
//!
//! let mut writer = CsvWriter::new(Path::new("./out"))?;
//! writer.write_route(0, &RouteReport::new(coords, commands, 1200.0, 95.0))?;
//! writer.finish()?;
//! ```

pub mod csv;
pub mod error;
pub mod json;
pub mod report;
pub mod row;
pub mod summary;
pub mod writer;

#[cfg(test)]
mod tests;

pub use csv::CsvWriter;
pub use error::{OutputError, OutputResult};
pub use json::JsonWriter;
pub use report::RouteReport;
pub use row::CommandRow;
pub use summary::{command_label, format_command_distance, format_duration, format_route_distance, render_text};
pub use writer::CommandWriter;
