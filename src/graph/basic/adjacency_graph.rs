//! A dynamic adjacency-list graph keyed by string identifiers.
//!
//! This representation prioritizes **incremental construction**:
//! - identifiers are interned to dense indices in insertion order
//! - adjacency lists are `Vec<usize>` in edge-insertion order
//! - each edge is stored once and indexed under its endpoint(s)
//!
//! Traversal state is never stored here; algorithms borrow the graph through
//! [`AdjacencyView`] and own their own visited sets.

use core::marker::PhantomData;
use std::collections::HashMap;

use super::edge_type::{Directed, EdgeType, Undirected};
use super::entity::{Edge, Vertex, Weight};
use super::view::AdjacencyView;
use crate::error::{GraphError, GraphResult};
use crate::trace::trace_event;

/// A directed graph.
pub type DiGraph = Graph<Directed>;

/// An undirected graph.
pub type UnGraph = Graph<Undirected>;

/// An adjacency-list graph over identifier-labelled vertices and weighted edges.
///
/// Vertices are created by [`add_vertex`](Self::add_vertex) or implicitly as
/// edge endpoints, and are only ever removed all at once by
/// [`clear`](Self::clear).
///
/// Adding an edge whose endpoint pair already exists (ordered pair when
/// directed, unordered when undirected) replaces the stored weight and
/// nothing else: no parallel adjacency entry is created and
/// [`edge_count`](Self::edge_count) is unchanged.
///
/// ### Performance Characteristics
/// | Operation | Complexity | Notes |
/// |-----------|------------|-------|
/// | `add_vertex` | \(O(1)\) amortized | One hash insert |
/// | `add_edge` | \(O(1)\) amortized | Hash lookups, one or two `Vec::push` |
/// | `vertex_count` / `edge_count` | \(O(1)\) | Stored counters |
/// | `neighbors` | \(O(1)\) + iteration | Slice of the adjacency list |
/// | `edge` | \(O(1)\) | Per-vertex edge index |
pub struct Graph<Ty: EdgeType = Directed> {
    vertices: Vec<Vertex>,
    index: HashMap<String, usize>,
    adjacency: Vec<Vec<usize>>,
    edges: Vec<Edge>,
    /// Per vertex: neighbor index -> slot in `edges`.
    edge_index: Vec<HashMap<usize, usize>>,
    _direction: PhantomData<Ty>,
}

impl<Ty: EdgeType> Graph<Ty> {
    /// Creates an empty graph.
    pub fn new() -> Self {
        Self::with_capacity(0, 0)
    }

    /// Creates an empty graph with room for `vertices` vertices and `edges` edges.
    pub fn with_capacity(vertices: usize, edges: usize) -> Self {
        Self {
            vertices: Vec::with_capacity(vertices),
            index: HashMap::with_capacity(vertices),
            adjacency: Vec::with_capacity(vertices),
            edges: Vec::with_capacity(edges),
            edge_index: Vec::with_capacity(vertices),
            _direction: PhantomData,
        }
    }

    /// Creates a graph holding the given vertices and no edges.
    ///
    /// Repeated identifiers are ignored after their first occurrence.
    pub fn from_vertices<I, V>(vertices: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<Vertex>,
    {
        let mut graph = Self::new();
        for vertex in vertices {
            graph.insert_vertex(vertex.into());
        }
        graph
    }

    /// Creates a graph from a list of edges, creating endpoints as needed.
    pub fn from_edges<I>(edges: I) -> Self
    where
        I: IntoIterator<Item = Edge>,
    {
        let mut graph = Self::new();
        graph.extend(edges);
        graph
    }

    /// Returns `true` for directed graphs.
    pub fn is_directed(&self) -> bool {
        Ty::is_directed()
    }

    /// Adds a vertex if absent.
    ///
    /// Returns `true` if the vertex was newly inserted, `false` if the
    /// identifier already existed (the graph is left unchanged).
    pub fn add_vertex(&mut self, id: impl Into<String>) -> bool {
        self.insert_vertex(Vertex::new(id))
    }

    /// Adds an already-built [`Vertex`]. See [`add_vertex`](Self::add_vertex).
    pub fn insert_vertex(&mut self, vertex: Vertex) -> bool {
        if self.index.contains_key(vertex.id()) {
            trace_event!(debug, id = vertex.id(), "vertex already exists");
            return false;
        }
        self.push_vertex(vertex);
        true
    }

    /// Adds the edge `from -> to` with `weight`, creating missing endpoints.
    ///
    /// For undirected graphs the edge is traversable in both directions but
    /// counts once. Returns `false` if the endpoint pair was already
    /// connected, in which case only the stored weight is updated.
    pub fn add_edge(&mut self, from: impl Into<String>, to: impl Into<String>, weight: Weight) -> bool {
        self.insert_edge(Edge::new(from, to, weight))
    }

    /// Adds an already-built [`Edge`]. See [`add_edge`](Self::add_edge).
    pub fn insert_edge(&mut self, edge: Edge) -> bool {
        let u = self.ensure_vertex(edge.from());
        let v = self.ensure_vertex(edge.to());

        if let Some(&slot) = self.edge_index[u].get(&v) {
            trace_event!(debug, %edge, "edge already exists, updating weight");
            self.edges[slot].set_weight(edge.weight());
            return false;
        }

        let slot = self.edges.len();
        self.edges.push(edge);

        self.adjacency[u].push(v);
        self.edge_index[u].insert(v, slot);
        if !Ty::is_directed() && u != v {
            self.adjacency[v].push(u);
            self.edge_index[v].insert(u, slot);
        }
        true
    }

    /// Number of vertices.
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Number of edges (one per connected endpoint pair, regardless of direction).
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Returns `true` if the graph has no vertices.
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Returns `true` if a vertex with this identifier exists.
    pub fn contains_vertex(&self, id: &str) -> bool {
        self.index.contains_key(id)
    }

    /// Returns `true` if `from` has `to` as a neighbor.
    pub fn contains_edge(&self, from: &str, to: &str) -> bool {
        match (self.index.get(from), self.index.get(to)) {
            (Some(&u), Some(&v)) => self.edge_index[u].contains_key(&v),
            _ => false,
        }
    }

    /// Vertices in insertion order.
    pub fn vertices(&self) -> impl ExactSizeIterator<Item = &Vertex> + '_ {
        self.vertices.iter()
    }

    /// Edges in insertion order.
    pub fn edges(&self) -> impl ExactSizeIterator<Item = &Edge> + '_ {
        self.edges.iter()
    }

    /// Neighbors of `id` in edge-insertion order.
    pub fn neighbors<'a>(&'a self, id: &str) -> GraphResult<impl ExactSizeIterator<Item = &'a str> + 'a> {
        let u = self.require(id)?;
        Ok(self.adjacency[u].iter().map(move |&v| self.vertices[v].id()))
    }

    /// Number of adjacency entries of `id`.
    pub fn out_degree(&self, id: &str) -> GraphResult<usize> {
        let u = self.require(id)?;
        Ok(self.adjacency[u].len())
    }

    /// Looks up the edge stored between `from` and `to`.
    ///
    /// For undirected graphs either endpoint order finds the same edge.
    pub fn edge(&self, from: &str, to: &str) -> GraphResult<&Edge> {
        let u = self.require(from)?;
        let v = self.require(to)?;
        self.edge_index[u]
            .get(&v)
            .map(|&slot| &self.edges[slot])
            .ok_or_else(|| GraphError::edge_not_found(from, to))
    }

    /// Removes every vertex and edge.
    pub fn clear(&mut self) {
        self.vertices.clear();
        self.index.clear();
        self.adjacency.clear();
        self.edges.clear();
        self.edge_index.clear();
    }

    /// Resolves `id`, failing with [`GraphError::VertexNotFound`].
    pub(crate) fn require(&self, id: &str) -> GraphResult<usize> {
        self.index.get(id).copied().ok_or_else(|| {
            trace_event!(debug, id, "unknown vertex");
            GraphError::vertex_not_found(id)
        })
    }

    fn ensure_vertex(&mut self, id: &str) -> usize {
        match self.index.get(id) {
            Some(&idx) => idx,
            None => self.push_vertex(Vertex::new(id)),
        }
    }

    fn push_vertex(&mut self, vertex: Vertex) -> usize {
        let idx = self.vertices.len();
        self.index.insert(vertex.id().to_owned(), idx);
        self.vertices.push(vertex);
        self.adjacency.push(Vec::new());
        self.edge_index.push(HashMap::new());
        idx
    }

    /// Checks the structural invariants of the store.
    ///
    /// 1. Every adjacency entry and edge-index key names a known vertex
    /// 2. Adjacency lists and edge indexes agree entry for entry
    /// 3. Every stored edge is indexed under its endpoints
    pub fn validate_invariants(&self) -> bool {
        let n = self.vertices.len();
        if self.index.len() != n || self.adjacency.len() != n || self.edge_index.len() != n {
            return false;
        }
        for (u, nbrs) in self.adjacency.iter().enumerate() {
            if nbrs.len() != self.edge_index[u].len() {
                return false;
            }
            if nbrs.iter().any(|&v| v >= n || !self.edge_index[u].contains_key(&v)) {
                return false;
            }
        }
        self.edges.iter().all(|edge| {
            let (Some(&u), Some(&v)) = (self.index.get(edge.from()), self.index.get(edge.to())) else {
                return false;
            };
            self.edge_index[u].contains_key(&v) && (Ty::is_directed() || self.edge_index[v].contains_key(&u))
        })
    }
}

impl<Ty: EdgeType> Default for Graph<Ty> {
    fn default() -> Self {
        Self::new()
    }
}

impl<Ty: EdgeType> Clone for Graph<Ty> {
    fn clone(&self) -> Self {
        Self {
            vertices: self.vertices.clone(),
            index: self.index.clone(),
            adjacency: self.adjacency.clone(),
            edges: self.edges.clone(),
            edge_index: self.edge_index.clone(),
            _direction: PhantomData,
        }
    }
}

impl<Ty: EdgeType> core::fmt::Debug for Graph<Ty> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Graph")
            .field("directed", &Ty::is_directed())
            .field("vertices", &self.vertices)
            .field("edges", &self.edges)
            .finish()
    }
}

impl<Ty: EdgeType> Extend<Edge> for Graph<Ty> {
    fn extend<I: IntoIterator<Item = Edge>>(&mut self, iter: I) {
        for edge in iter {
            self.insert_edge(edge);
        }
    }
}

impl<Ty: EdgeType> FromIterator<Edge> for Graph<Ty> {
    fn from_iter<I: IntoIterator<Item = Edge>>(iter: I) -> Self {
        Self::from_edges(iter)
    }
}

impl<Ty: EdgeType> AdjacencyView for Graph<Ty> {
    type Direction = Ty;

    fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    fn neighbor_indices(&self, vertex: usize) -> &[usize] {
        &self.adjacency[vertex]
    }

    fn index_of(&self, id: &str) -> Option<usize> {
        self.index.get(id).copied()
    }

    fn id_of(&self, vertex: usize) -> &str {
        self.vertices[vertex].id()
    }
}
