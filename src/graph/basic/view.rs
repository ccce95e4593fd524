//! Read-only adjacency access shared by all graph algorithms.
//!
//! Algorithms in [`crate::graph::algorithms`] are free functions over this
//! trait rather than methods on a particular store. Vertices are addressed by
//! dense indices `0..vertex_count()` in insertion order; identifiers are only
//! resolved at the API boundary.

use super::edge_type::EdgeType;

/// Read-only view of a graph's vertex set and adjacency lists.
pub trait AdjacencyView {
    /// Directionality of the edges.
    type Direction: EdgeType;

    /// Number of vertices. Valid indices are `0..vertex_count()`.
    fn vertex_count(&self) -> usize;

    /// Neighbor indices of `vertex` in edge-insertion order.
    ///
    /// # Panics
    /// Panics if `vertex` is out of bounds.
    fn neighbor_indices(&self, vertex: usize) -> &[usize];

    /// Resolves an identifier to its vertex index.
    fn index_of(&self, id: &str) -> Option<usize>;

    /// Returns the identifier stored at `vertex`.
    ///
    /// # Panics
    /// Panics if `vertex` is out of bounds.
    fn id_of(&self, vertex: usize) -> &str;
}
