//! Flat per-command rows written by the CSV backend.

use nav_core::CommandKind;

use crate::RouteReport;

/// One command of one route.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CommandRow {
    pub route_id:    u32,
    /// Position of the command within its route, starting at 0.
    pub index:       u32,
    pub kind:        CommandKind,
    pub distance_km: f64,
    pub angle_deg:   f64,
}

impl CommandRow {
    /// Flatten a report into rows, in command order.
    pub fn from_report(route_id: u32, report: &RouteReport) -> Vec<CommandRow> {
        report
            .commands
            .iter()
            .enumerate()
            .map(|(i, c)| CommandRow {
                route_id,
                index:       i as u32,
                kind:        c.kind,
                distance_km: c.distance_km,
                angle_deg:   c.angle_deg,
            })
            .collect()
    }
}
