//! CSV map loader.
//!
//! Reads a map that has already been extracted into three flat tables.  This
//! is a fixture format for demos and tests, not a raw map-data parser.
//!
//! # CSV format
//!
//! `vertices.csv` — road intersections and way nodes:
//!
//! ```csv
//! id,lat,lon
//! 1,37.8700,-122.2700
//! 2,37.8710,-122.2700
//! ```
//!
//! `ways.csv` — `refs` is a space-separated list of vertex ids; an empty
//! `name` means the way is unnamed:
//!
//! ```csv
//! id,refs,highway,name
//! 10,1 2,residential,Shattuck Ave
//! ```
//!
//! `places.csv` — named points; they are added as vertices and indexed:
//!
//! ```csv
//! id,lat,lon,name
//! 3,37.8705,-122.2701,Top Dog
//! ```
//!
//! Tables are applied vertices → places → ways, so ways may reference places.

use std::io::Read;
use std::path::Path;

use serde::Deserialize;
use tracing::debug;

use wm_core::{EdgeId, VertexId};
use wm_graph::WayRecord;

use crate::map::{RoadMap, RoadMapBuilder};
use crate::{LoadError, LoadResult};

// ── CSV records ───────────────────────────────────────────────────────────────

#[derive(Deserialize)]
struct VertexRow {
    id:  u64,
    lat: f64,
    lon: f64,
}

#[derive(Deserialize)]
struct WayRow {
    id:      u64,
    refs:    String,
    highway: String,
    name:    String,
}

#[derive(Deserialize)]
struct PlaceRow {
    id:   u64,
    lat:  f64,
    lon:  f64,
    name: String,
}

// ── Public API ────────────────────────────────────────────────────────────────

/// Load `vertices.csv`, `ways.csv`, and `places.csv` from `dir` and build
/// the map with default options.
pub fn load_map_dir(dir: &Path) -> LoadResult<RoadMap> {
    let open = |name: &str| std::fs::File::open(dir.join(name)).map_err(LoadError::Io);
    load_map_readers(open("vertices.csv")?, open("ways.csv")?, open("places.csv")?)
}

/// Like [`load_map_dir`] but accepts any `Read` sources.
///
/// Useful for testing (pass a `std::io::Cursor`).
pub fn load_map_readers<V: Read, W: Read, P: Read>(
    vertices: V,
    ways: W,
    places: P,
) -> LoadResult<RoadMap> {
    let mut builder = RoadMapBuilder::new();
    populate(&mut builder, vertices, ways, places)?;
    Ok(builder.build())
}

/// Feed the three tables into an existing builder.
pub fn populate<V: Read, W: Read, P: Read>(
    builder: &mut RoadMapBuilder,
    vertices: V,
    ways: W,
    places: P,
) -> LoadResult<()> {
    let mut n_vertices = 0usize;
    for row in csv::Reader::from_reader(vertices).deserialize::<VertexRow>() {
        let row = row.map_err(|e| LoadError::Parse(e.to_string()))?;
        builder.add_vertex(VertexId(row.id), row.lat, row.lon);
        n_vertices += 1;
    }

    let mut n_places = 0usize;
    for row in csv::Reader::from_reader(places).deserialize::<PlaceRow>() {
        let row = row.map_err(|e| LoadError::Parse(e.to_string()))?;
        builder.add_place(VertexId(row.id), row.lat, row.lon, &row.name);
        n_places += 1;
    }

    let mut n_ways = 0usize;
    for row in csv::Reader::from_reader(ways).deserialize::<WayRow>() {
        let row = row.map_err(|e| LoadError::Parse(e.to_string()))?;
        builder.add_way(&parse_way(row)?)?;
        n_ways += 1;
    }

    debug!(vertices = n_vertices, places = n_places, ways = n_ways, "loaded map tables");
    Ok(())
}

// ── Helpers ───────────────────────────────────────────────────────────────────

fn parse_way(row: WayRow) -> LoadResult<WayRecord> {
    let refs = row
        .refs
        .split_whitespace()
        .map(|r| {
            r.parse::<u64>().map(VertexId).map_err(|_| {
                LoadError::Parse(format!("way {}: invalid vertex ref {r:?}", row.id))
            })
        })
        .collect::<LoadResult<Vec<_>>>()?;

    let mut way = WayRecord::new(EdgeId(row.id), refs);
    if !row.highway.trim().is_empty() {
        way = way.tag("highway", row.highway.trim());
    }
    if !row.name.trim().is_empty() {
        way = way.tag("name", row.name.trim());
    }
    Ok(way)
}
