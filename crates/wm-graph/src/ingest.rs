//! Way ingestion — turns raw map ways into linked graph edges.
//!
//! The streaming map parser lives outside this crate.  It reports each way as
//! a [`WayRecord`] (its node refs and tags) and hands it to
//! [`GraphStore::add_way`], after adding every referenced vertex.
//!
//! # What is linked
//!
//! Only ways whose `highway` tag is a routable road class (see
//! [`is_routable_highway`]) produce a valid edge.  Every consecutive pair of
//! refs is linked with the *same* shared [`Edge`], so all segments of one way
//! carry the way's id and name.

use std::collections::BTreeMap;
use std::sync::Arc;

use tracing::trace;

use wm_core::{EdgeId, VertexId, WmError, WmResult};

use crate::store::{Edge, GraphStore, NAME_ATTR};

/// `highway` values that mark a way as part of the road network.
pub const ROUTABLE_HIGHWAYS: [&str; 13] = [
    "motorway",
    "trunk",
    "primary",
    "secondary",
    "tertiary",
    "unclassified",
    "residential",
    "living_street",
    "motorway_link",
    "trunk_link",
    "primary_link",
    "secondary_link",
    "tertiary_link",
];

/// Return `true` if a `highway=<value>` way should be routable.
pub fn is_routable_highway(value: &str) -> bool {
    ROUTABLE_HIGHWAYS.contains(&value)
}

// ── WayRecord ─────────────────────────────────────────────────────────────────

/// A way as reported by the map parser.
#[derive(Debug, Clone)]
pub struct WayRecord {
    pub id: EdgeId,
    pub refs: Vec<VertexId>,
    pub tags: BTreeMap<String, String>,
}

impl WayRecord {
    pub fn new(id: EdgeId, refs: Vec<VertexId>) -> Self {
        Self { id, refs, tags: BTreeMap::new() }
    }

    /// Builder-style tag insertion.
    pub fn tag(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.tags.insert(key.into(), value.into());
        self
    }

    pub fn tag_value(&self, key: &str) -> Option<&str> {
        self.tags.get(key).map(String::as_str)
    }
}

impl Edge {
    /// Build the shared edge for a way.
    ///
    /// The validity flag is set only for routable `highway` classes; the
    /// way's `name` tag becomes the edge's road name.
    pub fn from_way(way: &WayRecord) -> Edge {
        let mut edge = Edge::new(way.id);
        edge.refs = way.refs.clone();
        for (k, v) in &way.tags {
            edge.set_attr(k.as_str(), v.as_str());
        }
        if way.tag_value("highway").is_some_and(is_routable_highway) {
            edge.mark_valid();
        }
        edge
    }
}

impl GraphStore {
    /// Link every consecutive pair of `way.refs` with one shared edge.
    ///
    /// Returns the number of segments linked; 0 for non-routable ways.
    ///
    /// # Errors
    ///
    /// [`WmError::InvalidReference`] if any ref names a vertex that was never
    /// added.  Refs are checked before anything is linked, so a failing way
    /// leaves the graph untouched.
    pub fn add_way(&mut self, way: &WayRecord) -> WmResult<usize> {
        if let Some(&missing) = way.refs.iter().find(|&&id| !self.contains(id)) {
            return Err(WmError::InvalidReference(missing));
        }

        let edge = Arc::new(Edge::from_way(way));
        if !edge.is_valid() {
            trace!(way = %way.id, "way is not a routable road");
            return Ok(0);
        }

        let mut linked = 0;
        for pair in way.refs.windows(2) {
            if self.add_edge(pair[0], pair[1], Arc::clone(&edge))? {
                linked += 1;
            }
        }
        trace!(
            way = %way.id,
            name = edge.attr(NAME_ATTR).unwrap_or(""),
            linked,
            "linked way"
        );
        Ok(linked)
    }
}
