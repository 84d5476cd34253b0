//! JSON output backend.
//!
//! Creates `routes.json`: one array holding every route in the shape a
//! routing front-end expects.
//!
//! ```json
//! [{
//!   "route_id": 0,
//!   "coordinates": [[52.0, 13.0], [52.001, 13.0]],
//!   "commands": [{ "type": "forward", "distance": 0.111, "angle": 0.0 }],
//!   "command_types": ["forward"],
//!   "distance": 111.2,
//!   "duration": 12.0
//! }]
//! ```
//!
//! A JSON array cannot be appended to, so routes are buffered in memory and
//! the file is written on [`finish`](CommandWriter::finish).

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use serde::Serialize;

use nav_core::{CommandSequence, GeoPoint};

use crate::writer::CommandWriter;
use crate::{OutputError, OutputResult, RouteReport};

#[derive(Serialize)]
struct RouteRecord {
    route_id:      u32,
    coordinates:   Vec<GeoPoint>,
    commands:      CommandSequence,
    command_types: Vec<&'static str>,
    distance:      f64,
    duration:      f64,
}

/// Collects routes and writes them as one pretty-printed JSON array.
pub struct JsonWriter {
    path:     PathBuf,
    records:  Vec<RouteRecord>,
    finished: bool,
}

impl JsonWriter {
    /// Prepare to write `routes.json` in `dir`.
    ///
    /// The file is created up front so a bad directory fails here rather
    /// than at `finish`.
    pub fn new(dir: &Path) -> OutputResult<Self> {
        let path = dir.join("routes.json");
        File::create(&path)?;
        Ok(Self { path, records: Vec::new(), finished: false })
    }
}

impl CommandWriter for JsonWriter {
    fn write_route(&mut self, route_id: u32, report: &RouteReport) -> OutputResult<()> {
        if self.finished {
            return Err(OutputError::Finished);
        }
        self.records.push(RouteRecord {
            route_id,
            coordinates:   report.coordinates.clone(),
            command_types: report.commands.type_names(),
            commands:      report.commands.clone(),
            distance:      report.distance_m,
            duration:      report.duration_s,
        });
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        let mut out = BufWriter::new(File::create(&self.path)?);
        serde_json::to_writer_pretty(&mut out, &self.records)?;
        out.write_all(b"\n")?;
        out.flush()?;
        self.records.clear();
        Ok(())
    }
}
