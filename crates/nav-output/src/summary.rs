//! Human-readable labels and the plain-text route summary.

use std::fmt::Write;

use nav_core::{Command, CommandKind};

use crate::RouteReport;

/// Display label for a command kind, e.g. `"Right U-Turn"`.
pub fn command_label(kind: CommandKind) -> &'static str {
    match kind {
        CommandKind::Forward    => "Forward",
        CommandKind::Backward   => "Backward",
        CommandKind::LeftTurn   => "Left Turn",
        CommandKind::RightTurn  => "Right Turn",
        CommandKind::LeftUTurn  => "Left U-Turn",
        CommandKind::RightUTurn => "Right U-Turn",
    }
}

/// Command distance: whole metres below 100 m, otherwise km to 2 places.
pub fn format_command_distance(km: f64) -> String {
    if km < 0.1 {
        format!("{} m", (km * 1000.0).round())
    } else {
        format!("{km:.2} km")
    }
}

/// Route length from metres: whole metres below 1 km, otherwise km to 2 places.
pub fn format_route_distance(meters: f64) -> String {
    if meters < 1000.0 {
        format!("{} m", meters.round())
    } else {
        format!("{:.2} km", meters / 1000.0)
    }
}

/// `"Xh Ym"` when at least an hour, otherwise `"Ym"`.  Seconds are truncated.
pub fn format_duration(seconds: f64) -> String {
    let total = seconds.max(0.0) as u64;
    let hours = total / 3600;
    let minutes = (total % 3600) / 60;
    if hours > 0 {
        format!("{hours}h {minutes}m")
    } else {
        format!("{minutes}m")
    }
}

/// One numbered line per command, e.g. `" 2. Right Turn  0.11 km  90.0°"`.
fn command_line(out: &mut String, number: usize, width: usize, cmd: &Command) {
    let _ = write!(
        out,
        "{number:>width$}. {:<12} {:>9}",
        command_label(cmd.kind),
        format_command_distance(cmd.distance_km),
    );
    if cmd.angle_deg != 0.0 {
        let _ = write!(out, "  {:.1}°", cmd.angle_deg.abs());
    }
    out.push('\n');
}

/// Multi-line text summary: totals, the numbered command list, and the
/// flattened type array.
pub fn render_text(report: &RouteReport) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "Distance: {}   Duration: {}",
        format_route_distance(report.distance_m),
        format_duration(report.duration_s),
    );

    if report.commands.is_empty() {
        out.push_str("No commands generated\n");
        return out;
    }

    let width = report.commands.len().to_string().len();
    for (i, cmd) in report.commands.iter().enumerate() {
        command_line(&mut out, i + 1, width, cmd);
    }

    let types = report.commands.type_names().join("\", \"");
    let _ = writeln!(out, "Commands: [\"{types}\"]");
    out
}
