//! `wm-graph` — road graph store, way ingestion, and nearest-vertex search.
//!
//! # Crate layout
//!
//! | Module      | Contents                                                    |
//! |-------------|-------------------------------------------------------------|
//! | [`store`]   | `GraphStore`, `Vertex`, `Edge`                              |
//! | [`ingest`]  | `WayRecord`, `GraphStore::add_way`, highway validity        |
//! | [`nearest`] | `NearestVertex` trait, `LinearScan`, `SphereIndex`          |
//!
//! Errors are the shared [`WmError`] from `wm-core`.
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                       |
//! |---------|--------------------------------------------------------------|
//! | `serde` | Propagates `Serialize`/`Deserialize` to `wm-core` types.     |

pub mod ingest;
pub mod nearest;
pub mod store;


pub use ingest::{ROUTABLE_HIGHWAYS, WayRecord, is_routable_highway};
pub use nearest::{LinearScan, NearestVertex, SphereIndex};
pub use store::{Edge, GraphStore, NAME_ATTR, Vertex};
pub use wm_core::{WmError, WmResult};
