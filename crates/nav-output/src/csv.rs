//! CSV output backend.
//!
//! Creates `commands.csv` in the configured output directory, one row per
//! command:
//!
//! ```csv
//! route_id,index,type,distance_km,angle_deg
//! 0,0,forward,0.1112,0
//! 0,1,right_turn,0.1112,90
//! ```

use std::fs::File;
use std::path::Path;

use csv::Writer;

use crate::writer::CommandWriter;
use crate::{CommandRow, OutputError, OutputResult, RouteReport};

/// Writes every command of every route to one CSV file.
pub struct CsvWriter {
    commands: Writer<File>,
    finished: bool,
}

impl CsvWriter {
    /// Open (or create) `commands.csv` in `dir` and write the header row.
    pub fn new(dir: &Path) -> OutputResult<Self> {
        let mut commands = Writer::from_path(dir.join("commands.csv"))?;
        commands.write_record(["route_id", "index", "type", "distance_km", "angle_deg"])?;

        Ok(Self { commands, finished: false })
    }
}

impl CommandWriter for CsvWriter {
    fn write_route(&mut self, route_id: u32, report: &RouteReport) -> OutputResult<()> {
        if self.finished {
            return Err(OutputError::Finished);
        }
        for row in CommandRow::from_report(route_id, report) {
            self.commands.write_record(&[
                row.route_id.to_string(),
                row.index.to_string(),
                row.kind.as_str().to_string(),
                row.distance_km.to_string(),
                row.angle_deg.to_string(),
            ])?;
        }
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.commands.flush()?;
        Ok(())
    }
}
