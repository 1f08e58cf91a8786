//! Depth-first traversal with an explicit stack.
//!
//! The traversal never recurses, so graph depth does not consume call stack.
//! Vertices are marked visited when popped, not when pushed: a vertex reached
//! through several incoming edges may sit on the stack more than once and the
//! extra copies are discarded. Children are pushed in outgoing-edge order and
//! therefore expanded in reverse of that order.
//!
//! All traversal state (stack and [`VisitedSet`]) belongs to the traversal, so
//! any number of traversals may run over the same `&Graph` at once.

use tracing::debug;

use super::access::VisitedSet;
use super::adjacency::Graph;
use super::id::VertexIdx;
use super::vertex::Vertex;
use crate::error::{GraphError, GraphResult};

/// An iterator yielding vertex indices in depth-first order.
///
/// Created by [`Graph::dfs`].
pub struct Dfs<'g, V, E> {
    graph: &'g Graph<V, E>,
    visited: VisitedSet,
    stack: Vec<VertexIdx>,
}

impl<'g, V, E> Dfs<'g, V, E> {
    fn new(graph: &'g Graph<V, E>, start: VertexIdx) -> Self {
        let mut stack = Vec::with_capacity(graph.vertex_count().min(64));
        stack.push(start);
        Self {
            graph,
            visited: VisitedSet::new(graph.vertex_count()),
            stack,
        }
    }

    /// Vertices visited so far.
    pub fn visited(&self) -> &VisitedSet {
        &self.visited
    }

    /// Consumes the iterator and returns the vertices it visited.
    pub fn into_visited(self) -> VisitedSet {
        self.visited
    }
}

impl<'g, V, E> Iterator for Dfs<'g, V, E> {
    type Item = VertexIdx;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(u) = self.stack.pop() {
            if !self.visited.try_visit(u) {
                continue;
            }
            self.stack.extend(self.graph.neighbors(u));
            return Some(u);
        }
        None
    }
}

impl<V, E> Graph<V, E> {
    /// Returns a depth-first iterator over the vertices reachable from `start`.
    ///
    /// # Errors
    /// Returns [`GraphError::InvalidArgument`] if `start` is not a vertex of
    /// this graph.
    pub fn dfs(&self, start: VertexIdx) -> GraphResult<Dfs<'_, V, E>> {
        if self.vertex(start).is_none() {
            return Err(GraphError::InvalidArgument {
                name: "start",
                reason: format!(
                    "vertex index {} out of bounds for graph with {} vertices",
                    start.index(),
                    self.vertex_count()
                ),
            });
        }
        Ok(Dfs::new(self, start))
    }

    /// Depth-first traversal from `start`, calling `visit` exactly once for
    /// every reachable vertex in visitation order.
    ///
    /// Returns the set of visited vertices; every vertex not reachable from
    /// `start` is reported unvisited.
    ///
    /// # Errors
    /// Returns [`GraphError::InvalidArgument`] if `start` is not a vertex of
    /// this graph. `visit` is not called in that case.
    pub fn dft<F>(&self, start: VertexIdx, mut visit: F) -> GraphResult<VisitedSet>
    where
        F: FnMut(VertexIdx, &Vertex<V, E>),
    {
        let mut dfs = self.dfs(start)?;
        debug!(start = start.index(), vertex_count = self.vertex_count(), "dft started");

        for idx in dfs.by_ref() {
            // Indices on the stack all come from this graph's edges.
            if let Some(vertex) = self.vertex(idx) {
                visit(idx, vertex);
            }
        }

        let visited = dfs.into_visited();
        debug!(start = start.index(), visited = visited.count(), "dft finished");
        Ok(visited)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn payload_order(graph: &Graph<i32, ()>, start: VertexIdx) -> Vec<i32> {
        let mut order = Vec::new();
        graph.dft(start, |_, v| order.push(*v.info())).unwrap();
        order
    }

    #[test]
    fn test_dft_lifo_order() {
        let mut g = Graph::new();
        let a = g.add_vertex(1);
        let b = g.add_vertex(2);
        let c = g.add_vertex(3);
        g.add_edge(a, b, ()).unwrap();
        g.add_edge(a, c, ()).unwrap();
        g.add_edge(b, c, ()).unwrap();

        // C is pushed after B, so it pops first.
        assert_eq!(payload_order(&g, a), vec![1, 3, 2]);
    }

    #[test]
    fn test_dfs_iterator_matches_dft() {
        let mut g = Graph::new();
        let v: Vec<_> = (0..6).map(|i| g.add_vertex(i)).collect();
        // 0 -> 1,2 ; 1 -> 3 ; 2 -> 3,4 ; 4 -> 0 ; 5 isolated
        for (u, w) in [(0, 1), (0, 2), (1, 3), (2, 3), (2, 4), (4, 0)] {
            g.add_edge(v[u], v[w], ()).unwrap();
        }

        let from_iter: Vec<i32> = g
            .dfs(v[0])
            .unwrap()
            .map(|i| *g.vertex(i).unwrap().info())
            .collect();
        assert_eq!(from_iter, vec![0, 2, 4, 3, 1]);
        assert_eq!(payload_order(&g, v[0]), from_iter);
    }

    #[test]
    fn test_dfs_rejects_foreign_start() {
        let g: Graph<i32, ()> = Graph::new();
        let err = g.dfs(VertexIdx::new(0)).err().unwrap();
        assert!(matches!(err, GraphError::InvalidArgument { name: "start", .. }));

        let mut called = false;
        assert!(g.dft(VertexIdx::new(0), |_, _| called = true).is_err());
        assert!(!called);
    }

    #[test]
    fn test_visited_tracks_progress() {
        let mut g: Graph<i32, ()> = Graph::new();
        let a = g.add_vertex(0);
        let b = g.add_vertex(1);
        g.add_edge(a, b, ()).unwrap();

        let mut dfs = g.dfs(a).unwrap();
        assert_eq!(dfs.visited().count(), 0);
        assert_eq!(dfs.next(), Some(a));
        assert!(dfs.visited().is_visited(a));
        assert!(!dfs.visited().is_visited(b));
        assert_eq!(dfs.next(), Some(b));
        assert_eq!(dfs.next(), None);
        assert_eq!(dfs.into_visited().count(), 2);
    }

    #[test]
    fn test_nested_traversals_are_independent() {
        let mut g: Graph<i32, ()> = Graph::new();
        let a = g.add_vertex(0);
        let b = g.add_vertex(1);
        g.add_edge(a, b, ()).unwrap();
        g.add_edge(b, a, ()).unwrap();

        let mut inner_counts = Vec::new();
        g.dft(a, |idx, _| {
            let inner = g.dft(idx, |_, _| {}).unwrap();
            inner_counts.push(inner.count());
        })
        .unwrap();
        assert_eq!(inner_counts, vec![2, 2]);
    }
}
