//! # `pathgraph` - Identifier-Labelled Graphs
//!
//! A small in-memory graph toolkit for callers that model discrete named
//! entities (packages, tasks, services) and need to ask structural questions
//! about them: what is reachable from here, along which path, which entities
//! form connected groups, and in which order can a dependency DAG be
//! processed.
//!
//! ## Key Features
//!
//! - **Directed and undirected graphs**: one store, [`Graph<Ty>`], with the
//!   direction fixed at the type level ([`DiGraph`], [`UnGraph`])
//! - **Traversal-owned state**: every DFS/BFS returns a [`Traversal`] value
//!   holding its own visited set and predecessor table
//! - **Compile-time algorithm applicability**: component labeling only exists
//!   for undirected graphs, cycle detection and topological sorting only for
//!   directed ones
//! - **No unbounded recursion**: production traversals use explicit stacks
//!
//! ## Architecture
//!
//! ### Core Abstractions
//!
//! 1. **Store** (`Graph<Ty>`):
//!    - Identifiers interned to dense indices in insertion order
//!    - Adjacency lists in edge-insertion order
//!    - Per-vertex edge index for weight lookups
//!
//! 2. **View** (`AdjacencyView`):
//!    - Read-only capability every algorithm is written against
//!    - Carries the direction as an associated type
//!
//! 3. **Algorithms** ([`graph::algorithms`]):
//!    - Free functions over any `AdjacencyView`
//!    - Convenience methods on `Graph` delegate to them
//!
//! ### Determinism
//!
//! Every algorithm iterates vertices in insertion order and neighbors in
//! edge-insertion order, so results are reproducible run to run.
//!
//! ## Example
//!
//! ```rust
//! use pathgraph::{DiGraph, Edge, GraphError};
//!
//! let graph = DiGraph::from_edges([
//!     Edge::new("A", "B", 1),
//!     Edge::new("A", "C", 1),
//!     Edge::new("B", "D", 1),
//!     Edge::new("D", "E", 1),
//! ]);
//!
//! let from_a = graph.dfs("A").unwrap();
//! assert_eq!(from_a.path_to("E"), vec!["A", "B", "D", "E"]);
//! assert!(from_a.path_to("missing").is_empty());
//!
//! let order = graph.topological_sort().unwrap();
//! assert_eq!(order.first(), Some(&"A"));
//!
//! assert_eq!(graph.path("A", "Z"), Err(GraphError::vertex_not_found("Z")));
//! ```
//!
//! ## Feature Flags
//!
//! - `tracing`: emit `tracing` spans and events from graph construction and
//!   the algorithms. Off by default.

#![warn(missing_docs, clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

pub mod error;
pub mod graph;
mod trace;

pub use error::{GraphError, GraphResult};
pub use graph::algorithms::{bfs, dfs, dfs_recursive, find_cycle, is_cyclic, label_components, topological_sort, traverse};
pub use graph::{
    AdjacencyView, Components, DiGraph, Directed, Edge, EdgeType, Graph, Strategy, Traversal, UnGraph, Undirected,
    Vertex, Weight,
};

// Compile-time assertions for memory layout
const _: () = {
    use core::mem;

    // Direction markers are ZSTs, so `Graph<Directed>` and `Graph<Undirected>`
    // have identical layouts.
    assert!(mem::size_of::<Directed>() == 0);
    assert!(mem::size_of::<Undirected>() == 0);
    assert!(mem::size_of::<Graph<Directed>>() == mem::size_of::<Graph<Undirected>>());
};
