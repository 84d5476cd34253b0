//! navcmd: compile routing-provider responses into navigation commands.
//!
//! Reads one or more OSRM / Mapbox / GraphHopper JSON responses, or a bare
//! polyline given as repeated `--point lat,lon` arguments, compiles each route
//! into a command sequence, and prints a text summary.  With `--out DIR` the
//! results are also written to `DIR/commands.csv` and `DIR/routes.json`.
//!
//! ```text
//! navcmd route.json
//! navcmd --provider graphhopper gh.json --out ./out
//! navcmd --point 52.5200,13.4050 --point 52.5210,13.4050 --point 52.5210,13.4070
//! RUST_LOG=debug navcmd --config thresholds.json route.json
//! ```

use std::fs::File;
use std::io::{self, BufReader};
use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::{Context, Result, bail};
use clap::Parser;
use log::{info, warn};

use nav_compile::RouteCompiler;
use nav_core::{CompilerConfig, RouteInput};
use nav_output::{CommandWriter, CsvWriter, JsonWriter, RouteReport, render_text};
use nav_provider::{Provider, parse_location};

#[derive(Parser)]
#[command(name = "navcmd", version)]
#[command(about = "Compile routing-provider responses into navigation commands")]
struct Cli {
    /// Provider response files ("-" reads stdin)
    #[arg(required_unless_present = "points", conflicts_with = "points")]
    responses: Vec<PathBuf>,

    /// Response format: osrm (also Mapbox) or graphhopper
    #[arg(short, long, default_value = "osrm")]
    provider: Provider,

    /// Route vertex as "lat,lon"; repeat once per vertex
    #[arg(long = "point", value_name = "LAT,LON")]
    points: Vec<String>,

    /// JSON file with compiler thresholds; missing fields keep their defaults
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Directory to write commands.csv and routes.json into
    #[arg(short, long)]
    out: Option<PathBuf>,
}

/// A route ready to compile, with the totals to display next to it.
struct LoadedRoute {
    input:      RouteInput,
    distance_m: f64,
    duration_s: f64,
}

fn main() -> Result<()> {
    env_logger::Builder::from_default_env()
        .target(env_logger::Target::Stderr)
        .init();

    let cli = Cli::parse();

    let compiler = match &cli.config {
        Some(path) => RouteCompiler::with_config(load_config(path)?)
            .with_context(|| format!("config {}", path.display()))?,
        None => RouteCompiler::new(),
    };

    let loaded = if cli.points.is_empty() {
        cli.responses
            .iter()
            .map(|path| load_response(path, cli.provider))
            .collect::<Result<Vec<_>>>()?
    } else {
        vec![route_from_points(&cli.points)?]
    };

    // ── Compile ───────────────────────────────────────────────────────────────
    let t0 = Instant::now();
    let (inputs, totals): (Vec<RouteInput>, Vec<(f64, f64)>) = loaded
        .into_iter()
        .map(|r| (r.input, (r.distance_m, r.duration_s)))
        .unzip();
    let compiled = compiler.compile_batch(&inputs);
    info!("compiled {} route(s) in {:.2?}", inputs.len(), t0.elapsed());

    let reports: Vec<RouteReport> = inputs
        .into_iter()
        .zip(totals)
        .zip(compiled)
        .map(|((input, (distance_m, duration_s)), commands)| {
            RouteReport::new(input.coordinates, commands, distance_m, duration_s)
        })
        .collect();

    // ── Report ────────────────────────────────────────────────────────────────
    for (id, report) in reports.iter().enumerate() {
        if reports.len() > 1 {
            println!("── Route {id} ──");
        }
        if report.commands.is_empty() {
            warn!("route {id} has fewer than two coordinates");
        }
        print!("{}", render_text(report));
    }

    if let Some(dir) = &cli.out {
        write_outputs(dir, &reports)?;
    }

    Ok(())
}

fn load_config(path: &Path) -> Result<CompilerConfig> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("reading {}", path.display()))?;
    let config: CompilerConfig = serde_json::from_str(&text)
        .with_context(|| format!("parsing {}", path.display()))?;
    info!("loaded compiler config from {}: {config:?}", path.display());
    Ok(config)
}

fn load_response(path: &Path, provider: Provider) -> Result<LoadedRoute> {
    let result = if path == Path::new("-") {
        provider.decode_reader(io::stdin().lock())
    } else {
        let file = File::open(path).with_context(|| format!("opening {}", path.display()))?;
        provider.decode_reader(BufReader::new(file))
    };
    let decoded = result
        .with_context(|| format!("decoding {} as a {provider} response", path.display()))?;

    Ok(LoadedRoute {
        input:      decoded.route,
        distance_m: decoded.distance_m,
        duration_s: decoded.duration_s,
    })
}

fn route_from_points(points: &[String]) -> Result<LoadedRoute> {
    let mut coordinates = Vec::with_capacity(points.len());
    for s in points {
        match parse_location(s)? {
            Some(p) => coordinates.push(p),
            None => bail!("{s:?} is not a \"lat,lon\" pair; addresses must be geocoded first"),
        }
    }
    if coordinates.len() < 2 {
        bail!("a route needs at least two --point values");
    }

    let input = RouteInput::from_coordinates(coordinates);
    Ok(LoadedRoute {
        distance_m: input.path_length_km() * 1000.0,
        duration_s: 0.0,
        input,
    })
}

fn write_outputs(dir: &Path, reports: &[RouteReport]) -> Result<()> {
    std::fs::create_dir_all(dir).with_context(|| format!("creating {}", dir.display()))?;

    let mut writers: Vec<Box<dyn CommandWriter>> = vec![
        Box::new(CsvWriter::new(dir)?),
        Box::new(JsonWriter::new(dir)?),
    ];
    for writer in &mut writers {
        for (id, report) in reports.iter().enumerate() {
            writer.write_route(id as u32, report)?;
        }
        writer.finish()?;
    }

    info!("wrote commands.csv and routes.json to {}", dir.display());
    Ok(())
}
