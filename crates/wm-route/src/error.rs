//! Routing and loading error types.

use thiserror::Error;

use wm_core::{VertexId, WmError};

/// Errors produced by the pathfinders and the query facade.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum RouteError {
    #[error("no path from {from} to {to}")]
    NoPath { from: VertexId, to: VertexId },

    /// The predecessor chain stopped short of the start vertex.  Returned
    /// instead of a truncated path.
    #[error("predecessor chain broken at {at}")]
    BrokenChain { at: VertexId },

    #[error(transparent)]
    Graph(#[from] WmError),
}

pub type RouteResult<T> = Result<T, RouteError>;

/// Errors produced by the CSV map loader.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("map parse error: {0}")]
    Parse(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Graph(#[from] WmError),
}

pub type LoadResult<T> = Result<T, LoadError>;
