//! A generic adjacency-list directed graph.
//!
//! Vertices live in a single arena (`Vec`) owned by the graph; each vertex owns
//! the list of edges leaving it. Edges name their endpoints by arena index, so
//! the structure holds no internal references and no reference cycles.
//!
//! ### Performance Characteristics
//! | Operation | Complexity | Notes |
//! |-----------|------------|-------|
//! | `add_vertex` / `insert_vertex` | \(O(1)\) amortized | Appends to the arena and id index |
//! | `add_edge` | \(O(1)\) amortized | Appends to the origin's outgoing list |
//! | `add_edge_by_value` | \(O(n)\) | Linear payload scan per endpoint |
//! | `find_first` / `contains` | \(O(n)\) | Linear payload scan |
//! | `contains_vertex` / `contains_id` | \(O(1)\) | Hash lookup on the id index |
//! | `vertex_count` / `edge_count` | \(O(1)\) | |

use std::collections::HashMap;

#[cfg(feature = "serde")]
use serde::Serialize;
use tracing::{debug, trace};

use super::edge::Edge;
use super::id::{VertexId, VertexIdx};
use super::vertex::Vertex;
use crate::error::{Endpoint, GraphError, GraphResult};

/// A directed graph with vertex payloads `V` and edge payloads `E`.
///
/// The graph exclusively owns every vertex and, through their outgoing lists,
/// every edge. Nothing is ever removed: indices handed out by
/// [`add_vertex`](Self::add_vertex) stay valid for the graph's lifetime and
/// `vertex_count`/`edge_count` only grow.
#[derive(Debug)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct Graph<V, E> {
    vertices: Vec<Vertex<V, E>>,
    /// Lock-step mirror of `vertices` keyed by identity.
    #[cfg_attr(feature = "serde", serde(skip))]
    index: HashMap<VertexId, VertexIdx>,
    edge_count: usize,
}

impl<V, E> Graph<V, E> {
    /// Creates an empty graph.
    pub fn new() -> Self {
        Self {
            vertices: Vec::new(),
            index: HashMap::new(),
            edge_count: 0,
        }
    }

    /// Creates an empty graph with room for `vertices` vertices.
    pub fn with_capacity(vertices: usize) -> Self {
        Self {
            vertices: Vec::with_capacity(vertices),
            index: HashMap::with_capacity(vertices),
            edge_count: 0,
        }
    }

    /// Registers a pre-built vertex and returns its index.
    ///
    /// Vertices obtain their identifier from [`Vertex::new`], which never
    /// repeats one, and start with no edges, so registration cannot fail.
    pub fn insert_vertex(&mut self, vertex: Vertex<V, E>) -> VertexIdx {
        let idx = VertexIdx::new(self.vertices.len());
        let id = vertex.id();
        debug_assert!(vertex.edges().is_empty(), "vertex {id} carries edges from elsewhere");
        let previous = self.index.insert(id, idx);
        debug_assert!(previous.is_none(), "vertex {id} registered twice");
        self.vertices.push(vertex);
        trace!(idx = idx.index(), %id, "vertex added");
        idx
    }

    /// Wraps `info` in a new vertex with a fresh identifier and registers it.
    pub fn add_vertex(&mut self, info: V) -> VertexIdx {
        self.insert_vertex(Vertex::new(info))
    }

    /// Adds a directed edge `origin -> destination` carrying `info`.
    ///
    /// The edge is appended to the origin's outgoing list and returned.
    ///
    /// # Errors
    /// Returns [`GraphError::VertexOutOfBounds`] naming the endpoint if either
    /// index does not belong to this graph. The graph is unchanged on error.
    pub fn add_edge(
        &mut self,
        origin: VertexIdx,
        destination: VertexIdx,
        info: E,
    ) -> GraphResult<&Edge<E>> {
        self.check_bounds(origin, Endpoint::Origin)?;
        self.check_bounds(destination, Endpoint::Destination)?;

        self.edge_count += 1;
        trace!(
            origin = origin.index(),
            destination = destination.index(),
            edge_count = self.edge_count,
            "edge added"
        );
        let edge = Edge::new(origin, destination, info);
        Ok(self.vertices[origin.index()].push_edge(edge))
    }

    /// Adds an edge between the first vertices whose payloads equal `origin`
    /// and `destination`.
    ///
    /// Each endpoint is resolved by a linear scan over all vertices, so this
    /// costs \(O(n)\) per call. Prefer [`add_edge`](Self::add_edge) with stored
    /// indices when building large graphs.
    ///
    /// # Errors
    /// Returns [`GraphError::VertexNotFound`] with [`Endpoint::Origin`] if no
    /// payload equals `origin`, otherwise with [`Endpoint::Destination`] if no
    /// payload equals `destination`.
    pub fn add_edge_by_value<Q>(&mut self, origin: &Q, destination: &Q, info: E) -> GraphResult<&Edge<E>>
    where
        Q: ?Sized,
        V: PartialEq<Q>,
    {
        let from = self.resolve(origin, Endpoint::Origin)?;
        let to = self.resolve(destination, Endpoint::Destination)?;
        self.add_edge(from, to, info)
    }

    /// Returns the first vertex, in insertion order, whose payload satisfies `predicate`.
    pub fn find_first<P>(&self, mut predicate: P) -> Option<&Vertex<V, E>>
    where
        P: FnMut(&V) -> bool,
    {
        self.vertices.iter().find(|v| predicate(v.info()))
    }

    /// Like [`find_first`](Self::find_first) but returns the vertex index.
    pub fn position<P>(&self, mut predicate: P) -> Option<VertexIdx>
    where
        P: FnMut(&V) -> bool,
    {
        self.vertices
            .iter()
            .position(|v| predicate(v.info()))
            .map(VertexIdx::new)
    }

    /// Returns `true` if some vertex payload equals `value`. \(O(n)\).
    pub fn contains<Q>(&self, value: &Q) -> bool
    where
        Q: ?Sized,
        V: PartialEq<Q>,
    {
        self.vertices.iter().any(|v| v.info() == value)
    }

    /// Returns `true` if `vertex` (by identity) belongs to this graph.
    pub fn contains_vertex(&self, vertex: &Vertex<V, E>) -> bool {
        self.contains_id(vertex.id())
    }

    /// Returns `true` if a vertex with identifier `id` belongs to this graph.
    #[inline]
    pub fn contains_id(&self, id: VertexId) -> bool {
        self.index.contains_key(&id)
    }

    /// Returns the arena index of the vertex with identifier `id`.
    #[inline]
    pub fn index_of(&self, id: VertexId) -> Option<VertexIdx> {
        self.index.get(&id).copied()
    }

    /// Returns the vertex at `idx`.
    #[inline]
    pub fn vertex(&self, idx: VertexIdx) -> Option<&Vertex<V, E>> {
        self.vertices.get(idx.index())
    }

    /// Returns the payload of the vertex at `idx` mutably.
    ///
    /// Vertices themselves are never handed out mutably: identity and edge
    /// lists stay under the graph's control.
    #[inline]
    pub fn info_mut(&mut self, idx: VertexIdx) -> Option<&mut V> {
        self.vertices.get_mut(idx.index()).map(Vertex::info_mut)
    }

    /// Returns the payload of the `position`-th edge leaving `origin` mutably.
    ///
    /// Positions follow edge creation order, as in [`Vertex::edges`].
    pub fn edge_info_mut(&mut self, origin: VertexIdx, position: usize) -> Option<&mut E> {
        self.vertices
            .get_mut(origin.index())?
            .edge_mut(position)
            .map(Edge::info_mut)
    }

    /// Number of vertices.
    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.index.len()
    }

    /// Number of edges ever added.
    #[inline]
    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    /// Returns `true` if the graph has no vertices.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// All vertices in insertion order.
    #[inline]
    pub fn vertices(&self) -> &[Vertex<V, E>] {
        &self.vertices
    }

    /// Iterates vertices in insertion order.
    ///
    /// The iterator borrows the graph, so no vertex or edge can be added
    /// while it is alive.
    pub fn iter(&self) -> core::slice::Iter<'_, Vertex<V, E>> {
        self.vertices.iter()
    }

    /// Iterates every edge, grouped by origin in vertex insertion order and
    /// in creation order within each origin.
    pub fn edges(&self) -> impl Iterator<Item = &Edge<E>> + '_ {
        self.vertices.iter().flat_map(Vertex::edges)
    }

    /// Destinations of the edges leaving `idx`, in edge creation order.
    ///
    /// Yields nothing if `idx` is not a vertex of this graph.
    pub fn neighbors(&self, idx: VertexIdx) -> impl Iterator<Item = VertexIdx> + '_ {
        self.vertex(idx)
            .map(|v| v.edges().iter().map(Edge::destination))
            .into_iter()
            .flatten()
    }

    fn check_bounds(&self, idx: VertexIdx, endpoint: Endpoint) -> GraphResult<()> {
        if idx.index() < self.vertices.len() {
            Ok(())
        } else {
            Err(GraphError::VertexOutOfBounds {
                endpoint,
                index: idx.index(),
                len: self.vertices.len(),
            })
        }
    }

    fn resolve<Q>(&self, value: &Q, endpoint: Endpoint) -> GraphResult<VertexIdx>
    where
        Q: ?Sized,
        V: PartialEq<Q>,
    {
        self.position(|info| info == value).ok_or_else(|| {
            debug!(%endpoint, "value lookup found no vertex");
            GraphError::VertexNotFound { endpoint }
        })
    }
}

impl<V, E> Default for Graph<V, E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a, V, E> IntoIterator for &'a Graph<V, E> {
    type Item = &'a Vertex<V, E>;
    type IntoIter = core::slice::Iter<'a, Vertex<V, E>>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
