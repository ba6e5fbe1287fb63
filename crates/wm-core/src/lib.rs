//! `wm-core` — foundational types for the `waymark` road-map engine.
//!
//! This crate is a dependency of every other `wm-*` crate.  It has no `wm-*`
//! dependencies and only `thiserror` (plus optional `serde`) externally.
//!
//! # What lives here
//!
//! | Module    | Contents                                                  |
//! |-----------|-----------------------------------------------------------|
//! | [`ids`]   | `VertexId`, `EdgeId`                                      |
//! | [`geo`]   | `GeoPoint`, haversine distance in miles, initial bearing  |
//! | [`error`] | `WmError`, `WmResult`                                     |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public value types.  |

pub mod error;
pub mod geo;
pub mod ids;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use error::{WmError, WmResult};
pub use geo::{EARTH_RADIUS_MILES, GeoPoint};
pub use ids::{EdgeId, VertexId};
