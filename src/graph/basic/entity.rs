//! Vertex and edge values.

use core::fmt;

/// Edge weight. Stored with every edge; no traversal interprets it.
pub type Weight = i64;

/// A vertex identified by an opaque string.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Vertex {
    id: String,
}

impl Vertex {
    /// Creates a vertex with the given identifier.
    pub fn new(id: impl Into<String>) -> Self {
        Self { id: id.into() }
    }

    /// Returns the identifier.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Consumes the vertex, returning its identifier.
    pub fn into_id(self) -> String {
        self.id
    }
}

impl From<&str> for Vertex {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl From<String> for Vertex {
    fn from(id: String) -> Self {
        Self { id }
    }
}

impl fmt::Display for Vertex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.id)
    }
}

/// A weighted edge between two vertex identifiers.
///
/// In a directed graph the edge runs `from -> to`. In an undirected graph the
/// same value describes a bidirectional connection and is indexed under both
/// endpoints.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Edge {
    from: String,
    to: String,
    weight: Weight,
}

impl Edge {
    /// Creates an edge `from -> to` carrying `weight`.
    pub fn new(from: impl Into<String>, to: impl Into<String>, weight: Weight) -> Self {
        Self {
            from: from.into(),
            to: to.into(),
            weight,
        }
    }

    /// Source identifier.
    pub fn from(&self) -> &str {
        &self.from
    }

    /// Target identifier.
    pub fn to(&self) -> &str {
        &self.to
    }

    /// Stored weight.
    pub fn weight(&self) -> Weight {
        self.weight
    }

    /// Returns `(from, to)`.
    pub fn endpoints(&self) -> (&str, &str) {
        (&self.from, &self.to)
    }

    pub(crate) fn set_weight(&mut self, weight: Weight) {
        self.weight = weight;
    }
}

impl fmt::Display for Edge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {} : ({})", self.from, self.to, self.weight)
    }
}
