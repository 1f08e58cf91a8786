//! Error types for graph mutation and traversal.
//!
//! Every failure is reported before the graph is touched, so an `Err` always
//! leaves the container exactly as it was.

use core::fmt;

use thiserror::Error;

/// Which end of an edge an error refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Endpoint {
    /// The source vertex of the edge.
    Origin,
    /// The target vertex of the edge.
    Destination,
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Endpoint::Origin => "origin",
            Endpoint::Destination => "destination",
        })
    }
}

/// The error type for graph operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GraphError {
    /// A required argument was absent or did not denote a vertex of this graph.
    #[error("invalid argument `{name}`: {reason}")]
    InvalidArgument {
        /// Name of the offending parameter.
        name: &'static str,
        /// Human readable cause.
        reason: String,
    },

    /// A value lookup found no vertex whose payload equals the requested value.
    #[error("{endpoint} vertex not found")]
    VertexNotFound {
        /// The endpoint that failed to resolve.
        endpoint: Endpoint,
    },

    /// A vertex index does not belong to this graph's arena.
    #[error("{endpoint} vertex index {index} out of bounds for graph with {len} vertices")]
    VertexOutOfBounds {
        /// The endpoint carrying the bad index.
        endpoint: Endpoint,
        /// The rejected index.
        index: usize,
        /// Number of vertices in the graph.
        len: usize,
    },
}

impl GraphError {
    /// Returns the edge endpoint this error concerns, if any.
    pub fn endpoint(&self) -> Option<Endpoint> {
        match self {
            GraphError::InvalidArgument { .. } => None,
            GraphError::VertexNotFound { endpoint } | GraphError::VertexOutOfBounds { endpoint, .. } => {
                Some(*endpoint)
            }
        }
    }
}

/// Convenience alias for graph results.
pub type GraphResult<T> = Result<T, GraphError>;
