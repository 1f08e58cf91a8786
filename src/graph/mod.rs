//! Generic adjacency-list graph and its traversal.
//!
//! - `id`: vertex identity ([`VertexId`]) and arena slots ([`VertexIdx`])
//! - `vertex` / `edge`: the stored entities
//! - `adjacency`: the [`Graph`] container
//! - `traversal`: explicit-stack depth-first traversal
//! - `access`: traversal-local scratch state

pub mod access;
pub mod adjacency;
pub mod edge;
pub mod id;
pub mod traversal;
pub mod vertex;

pub use access::VisitedSet;
pub use adjacency::Graph;
pub use edge::Edge;
pub use id::{VertexId, VertexIdx};
pub use traversal::Dfs;
pub use vertex::Vertex;
