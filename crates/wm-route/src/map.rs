//! Query facade: build once, then answer nearest/route/directions/name queries.
//!
//! [`RoadMapBuilder`] is the ingestion side.  [`RoadMapBuilder::build`]
//! consumes it, runs the single prune pass, and returns an immutable
//! [`RoadMap`].  Because the builder is moved into `build`, no query can ever
//! see a half-built graph, and the finished map is `Send + Sync` for sharing
//! across query threads without locks.

use std::sync::Arc;

use tracing::{debug, info};

use wm_core::{VertexId, WmResult};
use wm_graph::{
    Edge, GraphStore, LinearScan, NAME_ATTR, NearestVertex, SphereIndex, WayRecord,
};
use wm_names::NameIndex;

use crate::directions::{NavigationStep, directions};
use crate::router::{AStarRouter, Route, Router};
use crate::RouteResult;

/// How [`RoadMap::nearest_vertex`] searches.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum NearestStrategy {
    /// Scan every vertex.
    Linear,
    /// R-tree over unit-sphere positions.
    #[default]
    SphereIndex,
}

/// A named place returned by [`RoadMap::exact_search`].
#[derive(Debug, Clone, PartialEq)]
#[derive(serde::Serialize, serde::Deserialize)]
pub struct Location {
    pub id: VertexId,
    pub lat: f64,
    pub lon: f64,
    pub name: String,
}

// ── RoadMapBuilder ────────────────────────────────────────────────────────────

/// Collects vertices, edges, and names, then [`build`](Self::build)s a
/// [`RoadMap`].
///
/// # Example
///
/// ```
/// use wm_core::{EdgeId, VertexId};
/// use wm_graph::WayRecord;
/// use wm_route::RoadMapBuilder;
///
/// let mut b = RoadMapBuilder::new();
/// b.add_vertex(VertexId(1), 37.870, -122.270);
/// b.add_vertex(VertexId(2), 37.871, -122.270);
/// b.add_way(
///     &WayRecord::new(EdgeId(10), vec![VertexId(1), VertexId(2)])
///         .tag("highway", "residential")
///         .tag("name", "Shattuck Ave"),
/// )
/// .unwrap();
/// b.add_place(VertexId(3), 37.8705, -122.2701, "Top Dog");
/// let map = b.build();
///
/// assert_eq!(map.graph().vertex_count(), 2); // the place is pruned
/// assert_eq!(map.exact_search("top dog").len(), 1);
/// ```
pub struct RoadMapBuilder {
    graph:   GraphStore,
    names:   NameIndex,
    nearest: NearestStrategy,
    router:  Box<dyn Router>,
}

impl RoadMapBuilder {
    pub fn new() -> Self {
        Self {
            graph:   GraphStore::new(),
            names:   NameIndex::new(),
            nearest: NearestStrategy::default(),
            router:  Box::new(AStarRouter),
        }
    }

    /// Choose the nearest-vertex search.  Default: [`NearestStrategy::SphereIndex`].
    pub fn nearest(mut self, strategy: NearestStrategy) -> Self {
        self.nearest = strategy;
        self
    }

    /// Replace the routing algorithm.  Default: [`AStarRouter`].
    pub fn router(mut self, router: impl Router + 'static) -> Self {
        self.router = Box::new(router);
        self
    }

    pub fn add_vertex(&mut self, id: VertexId, lat: f64, lon: f64) {
        self.graph.add_vertex(id, lat, lon);
    }

    pub fn set_vertex_attr(
        &mut self,
        id: VertexId,
        key: impl Into<String>,
        value: impl Into<String>,
    ) -> WmResult<()> {
        self.graph.set_vertex_attr(id, key, value)
    }

    /// See [`GraphStore::add_edge`].
    pub fn add_edge(&mut self, a: VertexId, b: VertexId, edge: impl Into<Arc<Edge>>) -> WmResult<bool> {
        self.graph.add_edge(a, b, edge)
    }

    /// See [`GraphStore::add_way`].
    pub fn add_way(&mut self, way: &WayRecord) -> WmResult<usize> {
        self.graph.add_way(way)
    }

    /// Add a named vertex and index its name.
    ///
    /// Places not on any road are pruned from the graph at build time but
    /// stay resolvable through [`RoadMap::exact_search`].
    pub fn add_place(&mut self, id: VertexId, lat: f64, lon: f64, name: &str) {
        self.graph.add_vertex_with_attr(id, lat, lon, NAME_ATTR, name);
        self.names.insert(name, id);
    }

    /// Index `display` as a name of an existing vertex.  A vertex without a
    /// `name` attribute takes `display` as its name, so exact search reports
    /// the indexed spelling.
    pub fn insert_name(&mut self, display: &str, id: VertexId) {
        self.graph.set_vertex_attr_if_absent(id, NAME_ATTR, display);
        self.names.insert(display, id);
    }

    pub fn graph(&self) -> &GraphStore {
        &self.graph
    }

    /// Prune isolated vertices, build the nearest-vertex locator, and freeze
    /// the map.
    pub fn build(mut self) -> RoadMap {
        let pruned = self.graph.prune();
        let locator: Box<dyn NearestVertex> = match self.nearest {
            NearestStrategy::Linear      => Box::new(LinearScan),
            NearestStrategy::SphereIndex => Box::new(SphereIndex::build(&self.graph)),
        };
        info!(
            vertices = self.graph.vertex_count(),
            edges = self.graph.edge_count(),
            pruned,
            names = self.names.len(),
            "road map built"
        );
        RoadMap {
            graph: self.graph,
            names: self.names,
            locator,
            router: self.router,
        }
    }
}

impl Default for RoadMapBuilder {
    fn default() -> Self {
        Self::new()
    }
}

// ── RoadMap ───────────────────────────────────────────────────────────────────

/// Immutable, query-ready road map.
pub struct RoadMap {
    graph:   GraphStore,
    names:   NameIndex,
    locator: Box<dyn NearestVertex>,
    router:  Box<dyn Router>,
}

impl RoadMap {
    pub fn builder() -> RoadMapBuilder {
        RoadMapBuilder::new()
    }

    pub fn graph(&self) -> &GraphStore {
        &self.graph
    }

    pub fn names(&self) -> &NameIndex {
        &self.names
    }

    /// Vertex closest to `(lon, lat)`.
    pub fn nearest_vertex(&self, lon: f64, lat: f64) -> WmResult<VertexId> {
        self.locator.closest(&self.graph, lon, lat)
    }

    /// Shortest route between the vertices nearest the two coordinates.
    ///
    /// # Errors
    ///
    /// [`RouteError::NoPath`](crate::RouteError::NoPath) when the snapped
    /// vertices are not connected.
    pub fn shortest_path(
        &self,
        start_lon: f64,
        start_lat: f64,
        dest_lon: f64,
        dest_lat: f64,
    ) -> RouteResult<Route> {
        let start = self.nearest_vertex(start_lon, start_lat)?;
        let dest = self.nearest_vertex(dest_lon, dest_lat)?;
        debug!(%start, %dest, "snapped route endpoints");
        self.router.route(&self.graph, start, dest)
    }

    /// Turn-by-turn steps for a vertex path.
    pub fn directions(&self, path: &[VertexId]) -> WmResult<Vec<NavigationStep>> {
        directions(&self.graph, path)
    }

    /// Display names starting with `text`, ignoring case and punctuation.
    pub fn prefix_search(&self, text: &str) -> Vec<String> {
        self.names.prefix_search(text)
    }

    /// Every place whose normalized name equals the normalized `text`.
    pub fn exact_search(&self, text: &str) -> Vec<Location> {
        self.names
            .exact_lookup(text)
            .iter()
            .filter_map(|&id| {
                let Some(vertex) = self.graph.place(id) else {
                    debug!(%id, "name refers to unknown vertex");
                    return None;
                };
                Some(Location {
                    id,
                    lat: vertex.pos.lat,
                    lon: vertex.pos.lon,
                    name: vertex.name().unwrap_or(text).to_owned(),
                })
            })
            .collect()
    }
}
