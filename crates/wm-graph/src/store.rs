//! In-memory road graph.
//!
//! # Data layout
//!
//! [`GraphStore`] owns every [`Vertex`] in a `BTreeMap` keyed by
//! [`VertexId`], so iteration (and therefore every linear scan and every
//! tie-break that depends on scan order) runs in ascending id order.
//!
//! Each vertex keeps a `neighbor id → Arc<Edge>` map.  Linking `a` and `b`
//! stores clones of one `Arc` in both maps, so adjacency is symmetric and
//! both directions share a single [`Edge`] record:
//!
//! ```text
//! a.neighbors[b] ──┐
//!                  ├──▶ Edge { id, refs, attrs, valid }
//! b.neighbors[a] ──┘
//! ```
//!
//! # Lifecycle
//!
//! Ingestion adds vertices and edges in any order, then calls
//! [`GraphStore::prune`] exactly once.  Pruning moves every degree-zero vertex
//! into a detached *places* table: such vertices are gone from the graph but
//! can still be resolved by id through [`GraphStore::place`], which exact
//! place-name lookup relies on.

use std::collections::BTreeMap;
use std::collections::btree_map::Entry;
use std::sync::Arc;

use tracing::{debug, trace};

use wm_core::{EdgeId, GeoPoint, VertexId, WmError, WmResult};

/// Attribute key holding a display name on vertices and edges.
pub const NAME_ATTR: &str = "name";

// ── Edge ──────────────────────────────────────────────────────────────────────

/// A road segment (or a whole way) shared by the two vertices it links.
#[derive(Debug, Clone, PartialEq)]
pub struct Edge {
    pub id: EdgeId,
    /// Vertex ids of the original way polyline, in way order.
    pub refs: Vec<VertexId>,
    attrs: BTreeMap<String, String>,
    valid: bool,
}

impl Edge {
    /// A new edge with no refs, no attributes, and the validity flag unset.
    pub fn new(id: EdgeId) -> Self {
        Self { id, refs: Vec::new(), attrs: BTreeMap::new(), valid: false }
    }

    /// Mark the edge usable for routing.  Unmarked edges are never linked.
    pub fn mark_valid(&mut self) {
        self.valid = true;
    }

    pub fn is_valid(&self) -> bool {
        self.valid
    }

    pub fn set_attr(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.attrs.insert(key.into(), value.into());
    }

    pub fn attr(&self, key: &str) -> Option<&str> {
        self.attrs.get(key).map(String::as_str)
    }

    /// The road name, if the way carried one.
    pub fn name(&self) -> Option<&str> {
        self.attr(NAME_ATTR)
    }
}

// ── Vertex ────────────────────────────────────────────────────────────────────

/// A road intersection, endpoint, or named place.
#[derive(Debug, Clone)]
pub struct Vertex {
    pub id: VertexId,
    pub pos: GeoPoint,
    neighbors: BTreeMap<VertexId, Arc<Edge>>,
    attrs: BTreeMap<String, String>,
}

impl Vertex {
    fn new(id: VertexId, pos: GeoPoint) -> Self {
        Self { id, pos, neighbors: BTreeMap::new(), attrs: BTreeMap::new() }
    }

    #[inline]
    pub fn degree(&self) -> usize {
        self.neighbors.len()
    }

    /// Neighbour ids with the shared edge to each, in ascending id order.
    pub fn neighbors(&self) -> impl Iterator<Item = (VertexId, &Arc<Edge>)> + '_ {
        self.neighbors.iter().map(|(&id, e)| (id, e))
    }

    pub fn attr(&self, key: &str) -> Option<&str> {
        self.attrs.get(key).map(String::as_str)
    }

    pub fn name(&self) -> Option<&str> {
        self.attr(NAME_ATTR)
    }
}

// ── GraphStore ────────────────────────────────────────────────────────────────

/// Undirected road graph keyed by map-data vertex id.
#[derive(Debug, Default)]
pub struct GraphStore {
    vertices: BTreeMap<VertexId, Vertex>,
    /// Degree-zero vertices removed by `prune`, kept for place lookup.
    places: BTreeMap<VertexId, Vertex>,
    pruned: bool,
}

impl GraphStore {
    pub fn new() -> Self {
        Self::default()
    }

    // ── Ingestion ─────────────────────────────────────────────────────────

    /// Insert a vertex.  Re-adding an existing id replaces its position and
    /// keeps its adjacency and attributes.
    pub fn add_vertex(&mut self, id: VertexId, lat: f64, lon: f64) {
        self.upsert_vertex(id, lat, lon);
    }

    /// [`add_vertex`](Self::add_vertex), then attach one attribute.
    pub fn add_vertex_with_attr(
        &mut self,
        id: VertexId,
        lat: f64,
        lon: f64,
        key: impl Into<String>,
        value: impl Into<String>,
    ) {
        self.upsert_vertex(id, lat, lon).attrs.insert(key.into(), value.into());
    }

    fn upsert_vertex(&mut self, id: VertexId, lat: f64, lon: f64) -> &mut Vertex {
        let pos = GeoPoint::new(lat, lon);
        let vertex = self.vertices.entry(id).or_insert_with(|| Vertex::new(id, pos));
        vertex.pos = pos;
        vertex
    }

    /// Attach a string attribute (e.g. `name`) to a vertex.
    pub fn set_vertex_attr(
        &mut self,
        id: VertexId,
        key: impl Into<String>,
        value: impl Into<String>,
    ) -> WmResult<()> {
        let vertex = self.vertices.get_mut(&id).ok_or(WmError::NotFound(id))?;
        vertex.attrs.insert(key.into(), value.into());
        Ok(())
    }

    /// Attach `key` only if the vertex exists and has no value for it yet.
    /// Returns whether the attribute was written.
    pub fn set_vertex_attr_if_absent(
        &mut self,
        id: VertexId,
        key: impl Into<String>,
        value: impl Into<String>,
    ) -> bool {
        let Some(vertex) = self.vertices.get_mut(&id) else {
            return false;
        };
        match vertex.attrs.entry(key.into()) {
            Entry::Vacant(slot) => {
                slot.insert(value.into());
                true
            }
            Entry::Occupied(_) => false,
        }
    }

    /// Link `a` and `b` through `edge`, shared by both neighbour maps.
    ///
    /// Returns `Ok(false)` without touching adjacency when the edge's
    /// validity flag is unset.
    ///
    /// # Errors
    ///
    /// [`WmError::InvalidReference`] if either vertex was never added.
    pub fn add_edge(
        &mut self,
        a: VertexId,
        b: VertexId,
        edge: impl Into<Arc<Edge>>,
    ) -> WmResult<bool> {
        for id in [a, b] {
            if !self.vertices.contains_key(&id) {
                return Err(WmError::InvalidReference(id));
            }
        }
        let edge = edge.into();
        if !edge.is_valid() {
            trace!(edge = %edge.id, "skipping edge without validity flag");
            return Ok(false);
        }
        if let Some(v) = self.vertices.get_mut(&a) {
            v.neighbors.insert(b, Arc::clone(&edge));
        }
        if let Some(v) = self.vertices.get_mut(&b) {
            v.neighbors.insert(a, edge);
        }
        Ok(true)
    }

    /// Remove every vertex with no neighbours.
    ///
    /// Runs once; later calls are no-ops returning 0, so vertices added after
    /// the first call are never pruned.  Returns the number of vertices moved
    /// to the places table.
    pub fn prune(&mut self) -> usize {
        if self.pruned {
            return 0;
        }
        self.pruned = true;

        let isolated: Vec<VertexId> = self
            .vertices
            .values()
            .filter(|v| v.neighbors.is_empty())
            .map(|v| v.id)
            .collect();
        for id in &isolated {
            if let Some(v) = self.vertices.remove(id) {
                self.places.insert(*id, v);
            }
        }
        debug!(
            removed = isolated.len(),
            retained = self.vertices.len(),
            "pruned degree-zero vertices"
        );
        isolated.len()
    }

    /// `true` once [`prune`](Self::prune) has run.
    pub fn is_pruned(&self) -> bool {
        self.pruned
    }

    // ── Dimensions ────────────────────────────────────────────────────────

    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Number of linked vertex pairs (each undirected link counted once).
    pub fn edge_count(&self) -> usize {
        let ends: usize = self.vertices.values().map(Vertex::degree).sum();
        let loops = self.vertices.values().filter(|v| v.neighbors.contains_key(&v.id)).count();
        (ends + loops) / 2
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    // ── Lookup ────────────────────────────────────────────────────────────

    pub fn contains(&self, id: VertexId) -> bool {
        self.vertices.contains_key(&id)
    }

    pub fn vertex(&self, id: VertexId) -> WmResult<&Vertex> {
        self.vertices.get(&id).ok_or(WmError::NotFound(id))
    }

    /// Resolve a vertex whether it is still in the graph or was pruned.
    pub fn place(&self, id: VertexId) -> Option<&Vertex> {
        self.vertices.get(&id).or_else(|| self.places.get(&id))
    }

    /// All retained vertex ids in ascending order.
    pub fn vertex_ids(&self) -> impl Iterator<Item = VertexId> + '_ {
        self.vertices.keys().copied()
    }

    /// All retained vertices in ascending id order.
    pub fn vertices(&self) -> impl Iterator<Item = &Vertex> + '_ {
        self.vertices.values()
    }

    /// Ids of every vertex adjacent to `id`.
    pub fn neighbors(&self, id: VertexId) -> WmResult<impl Iterator<Item = VertexId> + '_> {
        Ok(self.vertex(id)?.neighbors.keys().copied())
    }

    /// The edge shared by two adjacent vertices.
    pub fn edge_between(&self, from: VertexId, to: VertexId) -> WmResult<&Arc<Edge>> {
        self.vertex(to)?;
        self.vertex(from)?
            .neighbors
            .get(&to)
            .ok_or(WmError::NotAdjacent { from, to })
    }

    pub fn position(&self, id: VertexId) -> WmResult<GeoPoint> {
        self.vertex(id).map(|v| v.pos)
    }

    pub fn latitude(&self, id: VertexId) -> WmResult<f64> {
        self.position(id).map(|p| p.lat)
    }

    pub fn longitude(&self, id: VertexId) -> WmResult<f64> {
        self.position(id).map(|p| p.lon)
    }

    // ── Geometry ──────────────────────────────────────────────────────────

    /// Great-circle distance in miles between two vertices.
    pub fn distance(&self, v: VertexId, w: VertexId) -> WmResult<f64> {
        Ok(self.position(v)?.distance_miles(self.position(w)?))
    }

    /// Initial bearing in degrees from `v` toward `w`.
    pub fn bearing(&self, v: VertexId, w: VertexId) -> WmResult<f64> {
        Ok(self.position(v)?.bearing_deg(self.position(w)?))
    }
}
