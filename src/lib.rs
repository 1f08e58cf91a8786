//! # `ugraph` - Generic Adjacency-List Graph
//!
//! An in-memory directed graph over caller-defined vertex payloads `V` and
//! edge payloads `E`, with membership queries and a depth-first traversal
//! driven by a visitor callback.
//!
//! ## Storage Model
//!
//! - **Vertex arena**: the [`Graph`] owns every [`Vertex`] in a single vector,
//!   in insertion order. Vertices are addressed by [`VertexIdx`].
//! - **Adjacency lists**: each vertex owns its outgoing [`Edge`]s in creation
//!   order. Edges name both endpoints by index, never by reference.
//! - **Identity**: every vertex carries a process-unique [`VertexId`]; vertex
//!   equality is identity, never payload equality.
//! - **Append-only**: nothing is removed, so indices stay valid and the vertex
//!   and edge counts only grow.
//!
//! ## Traversal
//!
//! [`Graph::dft`] walks the subgraph reachable from a start vertex with an
//! explicit stack and reports each vertex exactly once. Visited state is
//! owned by the call and returned as a [`VisitedSet`], so traversals only need
//! `&Graph` and never interfere with one another.
//!
//! ## Example
//!
//! ```rust
//! use ugraph::Graph;
//!
//! let mut graph: Graph<i32, &str> = Graph::new();
//! let a = graph.add_vertex(1);
//! let b = graph.add_vertex(2);
//! let c = graph.add_vertex(3);
//!
//! graph.add_edge(a, b, "a->b").unwrap();
//! graph.add_edge(a, c, "a->c").unwrap();
//! graph.add_edge_by_value(&2, &3, "b->c").unwrap();
//!
//! let mut order = Vec::new();
//! graph.dft(a, |_, v| order.push(*v.info())).unwrap();
//!
//! // Children expand in reverse edge order.
//! assert_eq!(order, vec![1, 3, 2]);
//! assert_eq!(graph.edge_count(), 3);
//! ```

#![warn(missing_docs, clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

pub mod error;
pub mod graph;

pub use error::{Endpoint, GraphError, GraphResult};
pub use graph::{Dfs, Edge, Graph, Vertex, VertexId, VertexIdx, VisitedSet};

// Compile-time assertions for memory layout.
const _: () = {
    use core::mem;

    // Handles are transparent wrappers over their raw integers.
    assert!(mem::size_of::<VertexId>() == mem::size_of::<u64>());
    assert!(mem::size_of::<VertexIdx>() == mem::size_of::<usize>());

    // A unit-payload edge is exactly its two endpoint indices.
    assert!(mem::size_of::<Edge<()>>() == 2 * mem::size_of::<usize>());
};
