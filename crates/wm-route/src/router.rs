//! Routing trait, A* router, and Dijkstra reference router.
//!
//! # Pluggability
//!
//! The query facade calls routing through the [`Router`] trait, so callers
//! can swap in another search (bidirectional, contraction hierarchies)
//! without touching the rest of the map.  [`AStarRouter`] is the default;
//! [`DijkstraRouter`] runs the same loop with a zero heuristic and serves as
//! the optimality reference in tests.
//!
//! # Cost units
//!
//! Edge cost is the great-circle distance in miles between the two linked
//! vertices.  The A* heuristic is the great-circle distance to the
//! destination, which never exceeds the remaining road distance, so A*
//! returns a shortest path.

use std::cmp::Ordering;
use std::collections::BinaryHeap;

use rustc_hash::{FxHashMap, FxHashSet};
use tracing::debug;

use wm_core::{GeoPoint, VertexId};
use wm_graph::GraphStore;

use crate::{RouteError, RouteResult};

// ── Route ─────────────────────────────────────────────────────────────────────

/// The result of a routing query: vertices from start to destination and the
/// total road distance.
#[derive(Debug, Clone, PartialEq)]
#[derive(serde::Serialize, serde::Deserialize)]
pub struct Route {
    /// Vertices to visit in order, both endpoints included.
    pub vertices: Vec<VertexId>,
    /// Sum of edge distances in miles.
    pub total_miles: f64,
}

impl Route {
    /// `true` if the start and destination are the same vertex.
    pub fn is_trivial(&self) -> bool {
        self.vertices.len() == 1
    }

    pub fn start(&self) -> Option<VertexId> {
        self.vertices.first().copied()
    }

    pub fn destination(&self) -> Option<VertexId> {
        self.vertices.last().copied()
    }
}

// ── Router trait ──────────────────────────────────────────────────────────────

/// Pluggable shortest-path search.
///
/// # Thread safety
///
/// Implementations must be `Send + Sync` so a built map can serve queries
/// from several threads.  All per-query state lives inside `route`.
pub trait Router: Send + Sync {
    /// Compute a route from `from` to `to`.
    ///
    /// `from == to` yields a single-vertex route rather than an error.
    ///
    /// # Errors
    ///
    /// [`RouteError::NoPath`] if the destination is unreachable,
    /// [`RouteError::Graph`] if either endpoint is not in the graph.
    fn route(&self, graph: &GraphStore, from: VertexId, to: VertexId) -> RouteResult<Route>;
}

/// A* over great-circle edge costs with a great-circle heuristic.
#[derive(Debug, Clone, Copy, Default)]
pub struct AStarRouter;

impl Router for AStarRouter {
    fn route(&self, graph: &GraphStore, from: VertexId, to: VertexId) -> RouteResult<Route> {
        let goal = graph.position(to)?;
        search(graph, from, to, |p| p.distance_miles(goal))
    }
}

/// Uninformed Dijkstra search, equivalent to A* with `h = 0`.
#[derive(Debug, Clone, Copy, Default)]
pub struct DijkstraRouter;

impl Router for DijkstraRouter {
    fn route(&self, graph: &GraphStore, from: VertexId, to: VertexId) -> RouteResult<Route> {
        graph.position(to)?;
        search(graph, from, to, |_| 0.0)
    }
}

// ── Search internals ──────────────────────────────────────────────────────────

/// Open-set entry.  Ordered so `BinaryHeap` (a max-heap) pops the lowest
/// priority first, and among equal priorities the earliest push first.
struct QueueEntry {
    priority: f64,
    seq: u64,
    vertex: VertexId,
}

impl PartialEq for QueueEntry {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for QueueEntry {}

impl PartialOrd for QueueEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for QueueEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .priority
            .total_cmp(&self.priority)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

fn search(
    graph: &GraphStore,
    from: VertexId,
    to: VertexId,
    heuristic: impl Fn(GeoPoint) -> f64,
) -> RouteResult<Route> {
    let start_pos = graph.position(from)?;
    if from == to {
        return Ok(Route { vertices: vec![from], total_miles: 0.0 });
    }

    // g[v] = best known distance from `from`; absent means infinite.
    let mut g: FxHashMap<VertexId, f64> = FxHashMap::default();
    let mut prev: FxHashMap<VertexId, VertexId> = FxHashMap::default();
    let mut visited: FxHashSet<VertexId> = FxHashSet::default();
    let mut open = BinaryHeap::new();
    let mut seq = 0u64;

    g.insert(from, 0.0);
    open.push(QueueEntry { priority: heuristic(start_pos), seq, vertex: from });

    while let Some(QueueEntry { vertex, .. }) = open.pop() {
        if visited.contains(&vertex) {
            continue;
        }
        if vertex == to {
            let route = reconstruct(&prev, &g, from, to)?;
            debug!(
                %from, %to,
                expanded = visited.len(),
                miles = route.total_miles,
                "route found"
            );
            return Ok(route);
        }
        visited.insert(vertex);

        let here = graph.vertex(vertex)?;
        let g_here = g.get(&vertex).copied().unwrap_or(f64::INFINITY);

        for (neighbor, _edge) in here.neighbors() {
            if visited.contains(&neighbor) {
                continue;
            }
            let there = graph.position(neighbor)?;
            let candidate = g_here + here.pos.distance_miles(there);

            // Strict improvement only: the first of several equal-cost
            // predecessors is kept.
            if g.get(&neighbor).is_none_or(|&best| candidate < best) {
                g.insert(neighbor, candidate);
                prev.insert(neighbor, vertex);
                seq += 1;
                open.push(QueueEntry {
                    priority: candidate + heuristic(there),
                    seq,
                    vertex: neighbor,
                });
            }
        }
    }

    debug!(%from, %to, expanded = visited.len(), "no path");
    Err(RouteError::NoPath { from, to })
}

/// Follow predecessors from `to` back to `from`.
///
/// Every link must be present; a gap or a loop is reported as
/// [`RouteError::BrokenChain`] instead of yielding a partial path.
pub(crate) fn reconstruct(
    prev: &FxHashMap<VertexId, VertexId>,
    g: &FxHashMap<VertexId, f64>,
    from: VertexId,
    to: VertexId,
) -> RouteResult<Route> {
    let mut vertices = vec![to];
    let mut cur = to;
    while cur != from {
        if vertices.len() > prev.len() {
            return Err(RouteError::BrokenChain { at: cur });
        }
        cur = *prev.get(&cur).ok_or(RouteError::BrokenChain { at: cur })?;
        vertices.push(cur);
    }
    vertices.reverse();

    let total_miles = g.get(&to).copied().ok_or(RouteError::BrokenChain { at: to })?;
    Ok(Route { vertices, total_miles })
}
