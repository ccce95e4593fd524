//! Error types for graph queries.
//!
//! Only genuine caller mistakes are errors here. Outcomes that are part of
//! normal graph semantics stay in-band: a duplicate insertion is a `false`
//! return and an unreachable target is an empty path.

use thiserror::Error;

/// Result type for graph operations.
pub type GraphResult<T> = Result<T, GraphError>;

/// Errors produced by graph queries and algorithms.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum GraphError {
    /// A query referenced a vertex identifier the graph has never seen.
    #[error("vertex not found: {id}")]
    VertexNotFound {
        /// The unknown identifier.
        id: String,
    },

    /// Both endpoints exist but no edge connects them.
    #[error("no edge from '{from}' to '{to}'")]
    EdgeNotFound {
        /// Source identifier.
        from: String,
        /// Target identifier.
        to: String,
    },

    /// A topological order was requested for a graph containing a cycle.
    #[error("cycle detected: {}", .cycle.join(" -> "))]
    CycleDetected {
        /// The vertices of the cycle in edge direction, first == last.
        cycle: Vec<String>,
    },
}

impl GraphError {
    /// Creates a vertex-not-found error.
    pub fn vertex_not_found(id: impl Into<String>) -> Self {
        Self::VertexNotFound { id: id.into() }
    }

    /// Creates an edge-not-found error.
    pub fn edge_not_found(from: impl Into<String>, to: impl Into<String>) -> Self {
        Self::EdgeNotFound {
            from: from.into(),
            to: to.into(),
        }
    }

    /// Creates a cycle error from the vertices along the cycle.
    pub fn cycle<I, S>(cycle: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::CycleDetected {
            cycle: cycle.into_iter().map(Into::into).collect(),
        }
    }

    /// Returns `true` if this error reports a cycle.
    pub fn is_cycle(&self) -> bool {
        matches!(self, Self::CycleDetected { .. })
    }
}
