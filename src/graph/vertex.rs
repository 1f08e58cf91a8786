//! Vertices and their outgoing edge lists.

#[cfg(feature = "serde")]
use serde::Serialize;

use super::edge::Edge;
use super::id::VertexId;

/// A graph vertex: a payload plus the edges leaving it.
///
/// Identity is the [`VertexId`] assigned at construction; two vertices are
/// equal iff their ids are equal, regardless of payload. `Vertex` is not
/// `Clone`: each id belongs to exactly one vertex.
#[derive(Debug)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct Vertex<V, E> {
    id: VertexId,
    info: V,
    edges: Vec<Edge<E>>,
}

impl<V, E> Vertex<V, E> {
    /// Creates a detached vertex with a fresh identifier and no edges.
    ///
    /// Register it with [`Graph::insert_vertex`](super::Graph::insert_vertex).
    pub fn new(info: V) -> Self {
        Self {
            id: VertexId::fresh(),
            info,
            edges: Vec::new(),
        }
    }

    /// Returns the vertex identifier.
    #[inline(always)]
    pub fn id(&self) -> VertexId {
        self.id
    }

    /// Returns the vertex payload.
    #[inline]
    pub fn info(&self) -> &V {
        &self.info
    }

    /// Returns the vertex payload mutably.
    #[inline]
    pub fn info_mut(&mut self) -> &mut V {
        &mut self.info
    }

    /// Outgoing edges in creation order.
    #[inline]
    pub fn edges(&self) -> &[Edge<E>] {
        &self.edges
    }

    /// Number of outgoing edges.
    #[inline]
    pub fn out_degree(&self) -> usize {
        self.edges.len()
    }

    /// Consumes the vertex and returns its payload.
    pub fn into_info(self) -> V {
        self.info
    }

    #[inline]
    pub(crate) fn edge_mut(&mut self, position: usize) -> Option<&mut Edge<E>> {
        self.edges.get_mut(position)
    }

    #[inline]
    pub(crate) fn push_edge(&mut self, edge: Edge<E>) -> &Edge<E> {
        self.edges.push(edge);
        // Just pushed.
        &self.edges[self.edges.len() - 1]
    }
}

impl<V, E> PartialEq for Vertex<V, E> {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl<V, E> Eq for Vertex<V, E> {}

impl<V, E> core::hash::Hash for Vertex<V, E> {
    fn hash<H: core::hash::Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::id::VertexIdx;

    #[test]
    fn test_equality_is_identity() {
        let a: Vertex<i32, ()> = Vertex::new(1);
        let b: Vertex<i32, ()> = Vertex::new(1);
        assert_ne!(a, b);
        assert_eq!(a, a);
        assert_ne!(a.id(), b.id());
    }

    #[test]
    fn test_new_vertex_has_no_edges() {
        let mut v: Vertex<&str, u8> = Vertex::new("a");
        assert_eq!(v.out_degree(), 0);
        assert!(v.edges().is_empty());

        let e = v.push_edge(Edge::new(VertexIdx::new(0), VertexIdx::new(0), 9));
        assert_eq!(*e.info(), 9);
        assert_eq!(v.out_degree(), 1);

        *v.info_mut() = "b";
        assert_eq!(v.into_info(), "b");
    }
}
