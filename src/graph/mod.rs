//! Identifier-labelled graphs and the algorithms that walk them.
//!
//! Graph code is organized into categories:
//! - `basic`: vertex/edge values, the adjacency-list store, the view trait
//! - `algorithms`: traversals, component labeling, DAG algorithms

pub mod algorithms;
pub mod basic;
pub(crate) mod access;

// Re-export commonly used types from submodules
pub use algorithms::{Components, Strategy, Traversal};
pub use basic::{AdjacencyView, DiGraph, Directed, Edge, EdgeType, Graph, UnGraph, Undirected, Vertex, Weight};
