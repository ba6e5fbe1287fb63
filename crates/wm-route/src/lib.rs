//! `wm-route` — shortest paths, turn-by-turn directions, and the query facade.
//!
//! # Crate layout
//!
//! | Module         | Contents                                                  |
//! |----------------|-----------------------------------------------------------|
//! | [`router`]     | `Router` trait, `Route`, `AStarRouter`, `DijkstraRouter`  |
//! | [`directions`] | `Direction`, `NavigationStep`, `classify`, `directions`   |
//! | [`map`]        | `RoadMapBuilder`, `RoadMap`, `Location`                   |
//! | [`loader`]     | `load_map_dir`, `load_map_readers` (CSV fixtures)         |
//! | [`error`]      | `RouteError`, `LoadError`, result aliases                 |
//!
//! `Route`, `NavigationStep`, and `Location` always derive
//! `Serialize`/`Deserialize`; `serde` is already required by the loader.

pub mod directions;
pub mod error;
pub mod loader;
pub mod map;
pub mod router;


pub use directions::{
    Direction, NavigationStep, ParseStepError, UnknownTurnCode, classify, directions,
};
pub use error::{LoadError, LoadResult, RouteError, RouteResult};
pub use loader::{load_map_dir, load_map_readers};
pub use map::{Location, NearestStrategy, RoadMap, RoadMapBuilder};
pub use router::{AStarRouter, DijkstraRouter, Route, Router};
