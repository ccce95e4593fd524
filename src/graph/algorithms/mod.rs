//! Graph algorithms written against [`AdjacencyView`](crate::graph::basic::AdjacencyView).
//!
//! - `traversal`: DFS (iterative and recursive) and BFS with path reconstruction
//! - `components`: connected-component labeling (undirected graphs)
//! - `dag`: cycle detection and topological ordering (directed graphs)
//!
//! Each function owns its traversal state for the duration of the call, so
//! any number of calls may run against the same borrowed graph.

pub mod components;
pub mod dag;
pub mod traversal;

pub use components::{label_components, Components};
pub use dag::{find_cycle, is_cyclic, topological_sort};
pub use traversal::{bfs, dfs, dfs_recursive, traverse, Strategy, Traversal};
