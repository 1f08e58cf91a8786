//! Directed edges.

#[cfg(feature = "serde")]
use serde::Serialize;

use super::id::VertexIdx;

/// A directed edge carrying a caller-supplied payload.
///
/// Edges are created only through [`Graph::add_edge`](super::Graph::add_edge)
/// and live in the outgoing list of their origin vertex. Both endpoints are
/// stored as arena indices of the owning graph, so an edge never borrows or
/// owns a vertex.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct Edge<E> {
    info: E,
    origin: VertexIdx,
    destination: VertexIdx,
}

impl<E> Edge<E> {
    #[inline]
    pub(crate) fn new(origin: VertexIdx, destination: VertexIdx, info: E) -> Self {
        Self {
            info,
            origin,
            destination,
        }
    }

    /// Returns the edge payload.
    #[inline]
    pub fn info(&self) -> &E {
        &self.info
    }

    /// Returns the edge payload mutably.
    ///
    /// Reached through [`Graph::edge_info_mut`](super::Graph::edge_info_mut).
    #[inline]
    pub(crate) fn info_mut(&mut self) -> &mut E {
        &mut self.info
    }

    /// Index of the source vertex.
    #[inline(always)]
    pub fn origin(&self) -> VertexIdx {
        self.origin
    }

    /// Index of the target vertex.
    #[inline(always)]
    pub fn destination(&self) -> VertexIdx {
        self.destination
    }

    /// Returns `true` if the edge starts and ends at the same vertex.
    #[inline]
    pub fn is_loop(&self) -> bool {
        self.origin == self.destination
    }
}
