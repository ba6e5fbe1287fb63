//! Graph-level error type.
//!
//! Higher crates (`wm-route`) define their own error enums and wrap
//! `WmError` as one `#[from]` variant.

use thiserror::Error;

use crate::VertexId;

/// Errors produced by graph accessors and the nearest-vertex locators.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum WmError {
    #[error("vertex {0} not found")]
    NotFound(VertexId),

    #[error("edge references unknown vertex {0}")]
    InvalidReference(VertexId),

    #[error("vertices {from} and {to} are not adjacent")]
    NotAdjacent { from: VertexId, to: VertexId },

    #[error("graph has no vertices")]
    NoVertices,
}

/// Shorthand result type for all `wm-*` crates.
pub type WmResult<T> = Result<T, WmError>;
