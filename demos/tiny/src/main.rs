//! tiny — smallest end-to-end demo for the waymark road-map engine.
//!
//! Loads a nine-intersection fixture of downtown Berkeley from CSV, then
//! answers one query of each kind and prints the answers as JSON.
//!
//! ```text
//! cargo run -p tiny -- [DATA_DIR] [START_LON START_LAT DEST_LON DEST_LAT]
//! RUST_LOG=debug cargo run -p tiny
//! ```

use std::path::PathBuf;
use std::time::Instant;

use anyhow::{Context, Result, bail};
use serde_json::json;
use tracing::info;
use tracing_subscriber::EnvFilter;

use wm_route::load_map_dir;

// ── Defaults ──────────────────────────────────────────────────────────────────

/// Near Center St & Milvia St.
const START: (f64, f64) = (-122.26905, 37.87002);
/// Near Shattuck Ave & Berkeley Way.
const DEST: (f64, f64) = (-122.26702, 37.87198);

const PREFIX: &str = "to";
const EXACT: &str = "top dog";

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let data_dir = args
        .first()
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("data"));
    let ((start_lon, start_lat), (dest_lon, dest_lat)) = match &args[..] {
        [] | [_] => (START, DEST),
        [_, a, b, c, d] => (
            (parse_coord(a)?, parse_coord(b)?),
            (parse_coord(c)?, parse_coord(d)?),
        ),
        _ => bail!("usage: tiny [DATA_DIR] [START_LON START_LAT DEST_LON DEST_LAT]"),
    };

    println!("=== tiny — waymark road-map demo ===");

    let t0 = Instant::now();
    let map = load_map_dir(&data_dir)
        .with_context(|| format!("loading map from {}", data_dir.display()))?;
    info!(
        vertices = map.graph().vertex_count(),
        elapsed_ms = t0.elapsed().as_secs_f64() * 1_000.0,
        "map ready"
    );

    let route = map.shortest_path(start_lon, start_lat, dest_lon, dest_lat)?;
    let steps = map.directions(&route.vertices)?;
    let text: Vec<String> = steps.iter().map(ToString::to_string).collect();

    let report = json!({
        "route": route,
        "directions": steps,
        "narration": text,
        "prefix_search": { "query": PREFIX, "results": map.prefix_search(PREFIX) },
        "exact_search": { "query": EXACT, "results": map.exact_search(EXACT) },
    });
    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}

fn parse_coord(s: &str) -> Result<f64> {
    s.parse::<f64>().with_context(|| format!("invalid coordinate {s:?}"))
}
