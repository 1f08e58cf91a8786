//! Scratch state shared by graph traversals.

pub mod visited;

pub use visited::VisitedSet;
