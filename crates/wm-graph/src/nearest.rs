//! Nearest-vertex search.
//!
//! Two interchangeable locators implement [`NearestVertex`]:
//!
//! | Locator         | Cost per query | Notes                                |
//! |-----------------|----------------|--------------------------------------|
//! | [`LinearScan`]  | O(V)           | Baseline; no setup                   |
//! | [`SphereIndex`] | O(log V)       | `rstar` R-tree, built after pruning  |
//!
//! Both return the exact great-circle nearest vertex and break ties toward
//! the smallest [`VertexId`].

use rstar::{PointDistance, RTree, RTreeObject, AABB};

use wm_core::{GeoPoint, VertexId, WmError, WmResult};

use crate::store::GraphStore;

/// Resolves an arbitrary coordinate to the closest graph vertex.
///
/// Implementations must be `Send + Sync` so a built map can be shared across
/// query threads.
pub trait NearestVertex: Send + Sync {
    /// Id of the retained vertex closest to `(lon, lat)`.
    ///
    /// # Errors
    ///
    /// [`WmError::NoVertices`] if the graph is empty.
    fn closest(&self, graph: &GraphStore, lon: f64, lat: f64) -> WmResult<VertexId>;
}

// ── LinearScan ────────────────────────────────────────────────────────────────

/// Scans every vertex in ascending id order.  Strict `<` keeps the first
/// minimum, i.e. the smallest id among equidistant vertices.
#[derive(Debug, Clone, Copy, Default)]
pub struct LinearScan;

impl NearestVertex for LinearScan {
    fn closest(&self, graph: &GraphStore, lon: f64, lat: f64) -> WmResult<VertexId> {
        let target = GeoPoint::from_lon_lat(lon, lat);
        let mut best: Option<(VertexId, f64)> = None;
        for v in graph.vertices() {
            let d = v.pos.distance_miles(target);
            if best.is_none_or(|(_, bd)| d < bd) {
                best = Some((v.id, d));
            }
        }
        best.map(|(id, _)| id).ok_or(WmError::NoVertices)
    }
}

// ── SphereIndex ───────────────────────────────────────────────────────────────

/// Relative widening of the candidate radius around the best chord.
const CHORD_SLACK: f64 = 1e-9;

/// Entry stored in the R-tree: the vertex's unit-sphere position, plus its
/// lat/lon for the final haversine ranking.
#[derive(Clone)]
struct SphereEntry {
    point: [f64; 3],
    pos: GeoPoint,
    id: VertexId,
}

impl RTreeObject for SphereEntry {
    type Envelope = AABB<[f64; 3]>;
    fn envelope(&self) -> Self::Envelope {
        AABB::from_point(self.point)
    }
}

impl PointDistance for SphereEntry {
    /// Squared chord length.  Monotone in great-circle distance up to
    /// rounding, so it is only used to gather candidates.
    fn distance_2(&self, point: &[f64; 3]) -> f64 {
        let dx = self.point[0] - point[0];
        let dy = self.point[1] - point[1];
        let dz = self.point[2] - point[2];
        dx * dx + dy * dy + dz * dz
    }
}

/// R-tree over unit-sphere positions of every retained vertex.
///
/// The index is a snapshot: build it from the pruned graph it will be
/// queried against.
pub struct SphereIndex {
    tree: RTree<SphereEntry>,
}

impl SphereIndex {
    /// Bulk-load the index from `graph`'s retained vertices.
    pub fn build(graph: &GraphStore) -> Self {
        let entries: Vec<SphereEntry> = graph
            .vertices()
            .map(|v| SphereEntry { point: v.pos.unit_vector(), pos: v.pos, id: v.id })
            .collect();
        Self { tree: RTree::bulk_load(entries) }
    }

    pub fn len(&self) -> usize {
        self.tree.size()
    }

    pub fn is_empty(&self) -> bool {
        self.tree.size() == 0
    }
}

impl NearestVertex for SphereIndex {
    fn closest(&self, _graph: &GraphStore, lon: f64, lat: f64) -> WmResult<VertexId> {
        let target = GeoPoint::from_lon_lat(lon, lat);
        let query = target.unit_vector();
        let mut hits = self.tree.nearest_neighbor_iter_with_distance_2(&query);
        let (first, best_d2) = hits.next().ok_or(WmError::NoVertices)?;

        // Chord and haversine round differently, so every entry within a
        // hair of the best chord is re-ranked by haversine, then by id.
        let slack = best_d2 * (1.0 + CHORD_SLACK) + f64::EPSILON;
        let mut best = (first.pos.distance_miles(target), first.id);
        for (entry, _) in hits.take_while(|&(_, d2)| d2 <= slack) {
            let d = entry.pos.distance_miles(target);
            if d < best.0 || (d == best.0 && entry.id < best.1) {
                best = (d, entry.id);
            }
        }
        Ok(best.1)
    }
}
