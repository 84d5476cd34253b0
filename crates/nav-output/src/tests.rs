//! Integration tests for nav-output.

use nav_core::{Command, CommandKind, CommandSequence, GeoPoint};

use crate::RouteReport;

fn sample_report() -> RouteReport {
    RouteReport::new(
        vec![GeoPoint::new(52.0, 13.0), GeoPoint::new(52.001, 13.0), GeoPoint::new(52.001, 13.001)],
        CommandSequence::new(vec![
            Command::forward(0.1),
            Command::new(CommandKind::RightTurn, 0.2, 90.0),
            Command::forward(0.05),
        ]),
        350.0,
        42.5,
    )
}

// ── CSV ───────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod csv_tests {
    use tempfile::TempDir;

    use super::sample_report;
    use crate::csv::CsvWriter;
    use crate::writer::CommandWriter;
    use crate::{OutputError, RouteReport};

    fn tmp() -> TempDir {
        tempfile::tempdir().expect("create temp dir")
    }

    #[test]
    fn csv_file_created_with_header() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.finish().unwrap();

        let mut rdr = csv::Reader::from_path(dir.path().join("commands.csv")).unwrap();
        let headers: Vec<_> = rdr.headers().unwrap().iter().map(str::to_owned).collect();
        assert_eq!(headers, ["route_id", "index", "type", "distance_km", "angle_deg"]);
        assert_eq!(rdr.records().count(), 0);
    }

    #[test]
    fn csv_rows_follow_command_order() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.write_route(7, &sample_report()).unwrap();
        w.write_route(8, &RouteReport::default()).unwrap();
        w.finish().unwrap();

        let mut rdr = csv::Reader::from_path(dir.path().join("commands.csv")).unwrap();
        let rows: Vec<_> = rdr.records().map(|r| r.unwrap()).collect();
        assert_eq!(rows.len(), 3);
        assert_eq!(&rows[0][0], "7");
        assert_eq!(&rows[1][1], "1");
        assert_eq!(&rows[1][2], "right_turn");
        assert_eq!(rows[1][3].parse::<f64>().unwrap(), 0.2);
        assert_eq!(rows[1][4].parse::<f64>().unwrap(), 90.0);
        assert_eq!(&rows[2][2], "forward");
        assert_eq!(rows[2][4].parse::<f64>().unwrap(), 0.0);
    }

    #[test]
    fn finish_is_idempotent_and_closes() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.finish().unwrap();
        w.finish().unwrap();
        assert!(matches!(w.write_route(0, &sample_report()), Err(OutputError::Finished)));
    }
}

// ── JSON ──────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod json_tests {
    use serde_json::{Value, json};

    use super::sample_report;
    use crate::json::JsonWriter;
    use crate::writer::CommandWriter;
    use crate::OutputError;

    fn read(dir: &std::path::Path) -> Value {
        let text = std::fs::read_to_string(dir.join("routes.json")).unwrap();
        serde_json::from_str(&text).unwrap()
    }

    #[test]
    fn empty_writer_produces_empty_array() {
        let dir = tempfile::tempdir().unwrap();
        let mut w = JsonWriter::new(dir.path()).unwrap();
        assert!(dir.path().join("routes.json").exists());
        w.finish().unwrap();
        assert_eq!(read(dir.path()), json!([]));
    }

    #[test]
    fn route_object_shape() {
        let dir = tempfile::tempdir().unwrap();
        let mut w = JsonWriter::new(dir.path()).unwrap();
        w.write_route(3, &sample_report()).unwrap();
        w.finish().unwrap();

        let doc = read(dir.path());
        let route = &doc[0];
        assert_eq!(route["route_id"], json!(3));
        assert_eq!(route["coordinates"][0], json!([52.0, 13.0]));
        assert_eq!(route["command_types"], json!(["forward", "right_turn", "forward"]));
        assert_eq!(route["commands"][1], json!({ "type": "right_turn", "distance": 0.2, "angle": 90.0 }));
        assert_eq!(route["distance"], json!(350.0));
        assert_eq!(route["duration"], json!(42.5));
    }

    #[test]
    fn routes_keep_write_order() {
        let dir = tempfile::tempdir().unwrap();
        let mut w = JsonWriter::new(dir.path()).unwrap();
        for id in [5, 1, 9] {
            w.write_route(id, &sample_report()).unwrap();
        }
        w.finish().unwrap();
        w.finish().unwrap();

        let ids: Vec<_> = read(dir.path())
            .as_array()
            .unwrap()
            .iter()
            .map(|r| r["route_id"].as_u64().unwrap())
            .collect();
        assert_eq!(ids, [5, 1, 9]);
        assert!(matches!(w.write_route(0, &sample_report()), Err(OutputError::Finished)));
    }

    #[test]
    fn missing_directory_fails_up_front() {
        let dir = tempfile::tempdir().unwrap();
        assert!(JsonWriter::new(&dir.path().join("absent")).is_err());
    }
}

// ── Rows ──────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod row_tests {
    use nav_core::CommandKind;

    use super::sample_report;
    use crate::CommandRow;

    #[test]
    fn rows_are_indexed_from_zero() {
        let rows = CommandRow::from_report(2, &sample_report());
        assert_eq!(rows.len(), 3);
        assert!(rows.iter().all(|r| r.route_id == 2));
        assert_eq!(rows.iter().map(|r| r.index).collect::<Vec<_>>(), [0, 1, 2]);
        assert_eq!(rows[1].kind, CommandKind::RightTurn);
    }
}

// ── Summary ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod summary_tests {
    use nav_core::CommandKind;

    use super::sample_report;
    use crate::summary::*;
    use crate::RouteReport;

    #[test]
    fn labels() {
        assert_eq!(command_label(CommandKind::Forward), "Forward");
        assert_eq!(command_label(CommandKind::LeftTurn), "Left Turn");
        assert_eq!(command_label(CommandKind::RightUTurn), "Right U-Turn");
    }

    #[test]
    fn command_distance_switches_units_at_100_m() {
        assert_eq!(format_command_distance(0.05), "50 m");
        assert_eq!(format_command_distance(0.0994), "99 m");
        assert_eq!(format_command_distance(0.1), "0.10 km");
        assert_eq!(format_command_distance(111.19), "111.19 km");
    }

    #[test]
    fn route_distance_switches_units_at_1_km() {
        assert_eq!(format_route_distance(999.4), "999 m");
        assert_eq!(format_route_distance(1000.0), "1.00 km");
        assert_eq!(format_route_distance(1234.0), "1.23 km");
    }

    #[test]
    fn durations() {
        assert_eq!(format_duration(59.0), "0m");
        assert_eq!(format_duration(600.0), "10m");
        assert_eq!(format_duration(3725.0), "1h 2m");
        assert_eq!(format_duration(-5.0), "0m");
    }

    #[test]
    fn text_summary_lists_every_command() {
        let text = render_text(&sample_report());
        assert!(text.starts_with("Distance: 350 m   Duration: 0m\n"));
        assert!(text.contains("1. Forward"));
        assert!(text.contains("2. Right Turn"));
        assert!(text.contains("0.20 km  90.0°"));
        assert!(text.contains("50 m"));
        assert!(text.ends_with("Commands: [\"forward\", \"right_turn\", \"forward\"]\n"));
        assert_eq!(text.lines().count(), 5);
    }

    #[test]
    fn text_summary_for_empty_route() {
        let text = render_text(&RouteReport::default());
        assert!(text.contains("No commands generated"));
        assert!(!text.contains("Commands:"));
    }
}

// ── End to end ────────────────────────────────────────────────────────────────

#[cfg(test)]
mod compiled_route_tests {
    use nav_core::{GeoPoint, RouteInput};

    use crate::writer::CommandWriter;
    use crate::{CsvWriter, RouteReport};

    #[test]
    fn compiled_geometry_route_writes_one_row_per_command() {
        let coords = vec![
            GeoPoint::new(0.0, 0.0),
            GeoPoint::new(0.001, 0.0),
            GeoPoint::new(0.002, 0.0),
            GeoPoint::new(0.002, 0.001),
        ];
        let route = RouteInput::from_coordinates(coords.clone());
        let commands = nav_compile::compile_route(&route);
        let report = RouteReport::new(coords, commands, route.path_length_km() * 1000.0, 0.0);

        let dir = tempfile::tempdir().unwrap();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.write_route(0, &report).unwrap();
        w.finish().unwrap();

        let mut rdr = csv::Reader::from_path(dir.path().join("commands.csv")).unwrap();
        let types: Vec<String> = rdr.records().map(|r| r.unwrap()[2].to_owned()).collect();
        assert_eq!(types, ["forward", "right_turn", "forward"]);
    }
}
