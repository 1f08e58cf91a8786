//! Traversal-local visited state.
//!
//! A `VisitedSet` is created by each traversal and owned by it, so visit
//! marks never live on the vertices themselves and two traversals of the same
//! graph cannot observe each other's progress.

use crate::graph::id::VertexIdx;

/// Dense per-vertex visited flags, indexed by arena slot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VisitedSet {
    flags: Vec<bool>,
    count: usize,
}

impl VisitedSet {
    /// Creates a set covering `len` vertices, all unvisited.
    pub(crate) fn new(len: usize) -> Self {
        Self {
            flags: vec![false; len],
            count: 0,
        }
    }

    /// Number of vertices covered by the set.
    #[inline(always)]
    pub fn len(&self) -> usize {
        self.flags.len()
    }

    /// Returns `true` if the set covers no vertices.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.flags.is_empty()
    }

    /// Number of vertices marked visited.
    #[inline]
    pub fn count(&self) -> usize {
        self.count
    }

    /// Returns `true` if `idx` was visited. Indices outside the set were not.
    #[inline]
    pub fn is_visited(&self, idx: VertexIdx) -> bool {
        self.flags.get(idx.index()).copied().unwrap_or(false)
    }

    /// Marks `idx` visited. Returns `true` iff it was not visited before.
    #[inline]
    pub(crate) fn try_visit(&mut self, idx: VertexIdx) -> bool {
        match self.flags.get_mut(idx.index()) {
            Some(flag) if !*flag => {
                *flag = true;
                self.count += 1;
                true
            }
            _ => false,
        }
    }

    /// Iterates visited indices in ascending order.
    pub fn iter(&self) -> impl Iterator<Item = VertexIdx> + '_ {
        self.flags
            .iter()
            .enumerate()
            .filter_map(|(i, &v)| v.then_some(VertexIdx::new(i)))
    }
}
