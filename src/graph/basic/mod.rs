//! Basic graph building blocks.
//!
//! This module contains the vertex/edge values, the adjacency-list store and
//! the read-only view trait the algorithms are written against.

pub mod adjacency_graph;
pub mod edge_type;
pub mod entity;
pub mod view;

pub use adjacency_graph::{DiGraph, Graph, UnGraph};
pub use edge_type::{Directed, EdgeType, Undirected};
pub use entity::{Edge, Vertex, Weight};
pub use view::AdjacencyView;
