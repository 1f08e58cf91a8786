//! Vertex identity and arena addressing.
//!
//! Two distinct handles exist:
//! - [`VertexId`]: process-unique identity minted once per vertex. Equality of
//!   vertices is defined by it.
//! - [`VertexIdx`]: dense position of a vertex inside one graph's arena. Edges
//!   and traversals address vertices by index so no references cross the arena.

use core::fmt;
use core::sync::atomic::{AtomicU64, Ordering};

#[cfg(feature = "serde")]
use serde::Serialize;

/// Next identifier to hand out. Zero is never issued.
static NEXT_VERTEX_ID: AtomicU64 = AtomicU64::new(1);

/// Process-unique vertex identifier.
///
/// Identifiers are allocated from a global counter, never reused, and never
/// derived from the vertex payload.
#[repr(transparent)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct VertexId(u64);

impl VertexId {
    /// Allocates a new identifier distinct from every identifier issued before it.
    pub(crate) fn fresh() -> Self {
        // Uniqueness only needs atomicity of the increment, not ordering with other memory.
        Self(NEXT_VERTEX_ID.fetch_add(1, Ordering::Relaxed))
    }

    /// Returns the raw identifier value.
    #[inline(always)]
    pub fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for VertexId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "v{}", self.0)
    }
}

/// Position of a vertex in a graph's vertex arena.
///
/// Indices are issued by the graph on insertion and stay valid for that
/// graph's lifetime, since vertices are never removed.
#[repr(transparent)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct VertexIdx(usize);

impl VertexIdx {
    /// Wraps a raw arena slot.
    ///
    /// Graph operations check indices against their own arena, so an index
    /// that was never issued is rejected rather than dereferenced.
    #[inline(always)]
    pub fn new(idx: usize) -> Self {
        Self(idx)
    }

    /// Returns the arena slot as a plain `usize`.
    #[inline(always)]
    pub fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for VertexIdx {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_fresh_ids_are_unique() {
        let ids: HashSet<VertexId> = (0..1000).map(|_| VertexId::fresh()).collect();
        assert_eq!(ids.len(), 1000);
        assert!(!ids.contains(&VertexId(0)));
    }

    #[test]
    fn test_fresh_ids_unique_across_threads() {
        let handles: Vec<_> = (0..4)
            .map(|_| std::thread::spawn(|| (0..256).map(|_| VertexId::fresh()).collect::<Vec<_>>()))
            .collect();

        let mut all = HashSet::new();
        for h in handles {
            for id in h.join().unwrap() {
                assert!(all.insert(id), "duplicate id {id}");
            }
        }
        assert_eq!(all.len(), 4 * 256);
    }

    #[test]
    fn test_display() {
        assert_eq!(VertexIdx::new(3).to_string(), "#3");
        assert_eq!(VertexId(42).to_string(), "v42");
    }
}
