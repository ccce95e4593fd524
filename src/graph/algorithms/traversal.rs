//! Depth-first and breadth-first traversals with path reconstruction.
//!
//! Every traversal call owns its state: the visited set, the predecessor
//! table and the discovery order live in the returned [`Traversal`], never on
//! the graph. Two traversals over the same graph are independent values, and
//! there is no "most recent traversal" to go stale.
//!
//! The predecessor table maps each reached vertex to the vertex it was first
//! reached from; the root maps to itself. Paths are rebuilt by walking that
//! table back to the root.

use core::fmt;
use std::collections::VecDeque;

use crate::error::{GraphError, GraphResult};
use crate::graph::access::marks::VisitedFlags;
use crate::graph::basic::{AdjacencyView, EdgeType, Graph};
use crate::trace::trace_event;

/// Traversal order used to explore the graph.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Strategy {
    /// Depth-first with an explicit stack. Safe for arbitrarily deep graphs.
    #[default]
    DepthFirst,
    /// Depth-first by recursion. Same visit order and predecessors as
    /// [`Strategy::DepthFirst`], but call depth grows with path length.
    DepthFirstRecursive,
    /// Breadth-first. Reconstructed paths use the fewest edges.
    BreadthFirst,
}

/// The result of one traversal rooted at a single vertex.
pub struct Traversal<'g, G: ?Sized> {
    graph: &'g G,
    root: usize,
    strategy: Strategy,
    visited: VisitedFlags,
    /// Meaningful only for visited vertices.
    predecessors: Vec<usize>,
    order: Vec<usize>,
}

impl<'g, G: AdjacencyView + ?Sized> Traversal<'g, G> {
    fn start(graph: &'g G, root: usize, strategy: Strategy) -> Self {
        let n = graph.vertex_count();
        let mut visited = VisitedFlags::new(n);
        visited.try_visit(root);
        let mut predecessors = vec![usize::MAX; n];
        predecessors[root] = root;
        let mut order = Vec::with_capacity(n);
        order.push(root);

        Self {
            graph,
            root,
            strategy,
            visited,
            predecessors,
            order,
        }
    }

    fn discover(&mut self, vertex: usize, from: usize) {
        self.predecessors[vertex] = from;
        self.order.push(vertex);
    }

    /// Identifier of the root vertex.
    pub fn root(&self) -> &'g str {
        self.graph.id_of(self.root)
    }

    /// Strategy that produced this traversal.
    pub fn strategy(&self) -> Strategy {
        self.strategy
    }

    /// Number of vertices reached, including the root.
    pub fn visited_count(&self) -> usize {
        self.visited.count()
    }

    /// Reached vertices in discovery order, starting with the root.
    pub fn order(&self) -> impl ExactSizeIterator<Item = &'g str> + '_ {
        let graph = self.graph;
        self.order.iter().map(move |&v| graph.id_of(v))
    }

    /// Returns `true` if `to` was reached from the root.
    ///
    /// Identifiers unknown to the graph were never reached.
    pub fn path_exists(&self, to: &str) -> bool {
        self.reached(to).is_some()
    }

    /// Vertex from which `id` was first reached.
    ///
    /// The root is its own predecessor. `None` if `id` was not reached.
    pub fn predecessor(&self, id: &str) -> Option<&'g str> {
        self.reached(id)
            .map(|v| self.graph.id_of(self.predecessors[v]))
    }

    /// Reconstructs the path from the root to `to`.
    ///
    /// The first element is the root and the last is `to`; consecutive
    /// elements are adjacent. Returns an empty vector if `to` was not reached.
    pub fn path_to(&self, to: &str) -> Vec<&'g str> {
        let Some(mut current) = self.reached(to) else {
            return Vec::new();
        };

        let mut path = vec![self.graph.id_of(current)];
        while self.predecessors[current] != current {
            current = self.predecessors[current];
            path.push(self.graph.id_of(current));
            debug_assert!(path.len() <= self.visited.count(), "predecessor chain loops");
        }
        path.reverse();
        path
    }

    fn reached(&self, id: &str) -> Option<usize> {
        self.graph
            .index_of(id)
            .filter(|&v| self.visited.is_visited(v))
    }
}

impl<G: AdjacencyView + ?Sized> fmt::Debug for Traversal<'_, G> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Traversal")
            .field("root", &self.root())
            .field("strategy", &self.strategy)
            .field("order", &self.order().collect::<Vec<_>>())
            .finish()
    }
}

fn resolve_root<G: AdjacencyView + ?Sized>(graph: &G, root: &str) -> GraphResult<usize> {
    graph.index_of(root).ok_or_else(|| {
        trace_event!(debug, root, "traversal root not found");
        GraphError::vertex_not_found(root)
    })
}

/// Runs a traversal from `root` using `strategy`.
pub fn traverse<'g, G>(graph: &'g G, root: &str, strategy: Strategy) -> GraphResult<Traversal<'g, G>>
where
    G: AdjacencyView + ?Sized,
{
    match strategy {
        Strategy::DepthFirst => dfs(graph, root),
        Strategy::DepthFirstRecursive => dfs_recursive(graph, root),
        Strategy::BreadthFirst => bfs(graph, root),
    }
}

/// Depth-first traversal with an explicit stack.
///
/// Neighbors are pushed in reverse adjacency order together with the vertex
/// they were pushed from, and marked only when popped. This reproduces the
/// recursive visit order and predecessor table exactly, without recursion.
#[cfg_attr(feature = "tracing", tracing::instrument(level = "debug", skip(graph)))]
pub fn dfs<'g, G>(graph: &'g G, root: &str) -> GraphResult<Traversal<'g, G>>
where
    G: AdjacencyView + ?Sized,
{
    let root = resolve_root(graph, root)?;
    let mut traversal = Traversal::start(graph, root, Strategy::DepthFirst);

    // (vertex, pushed-from)
    let mut stack: Vec<(usize, usize)> = graph
        .neighbor_indices(root)
        .iter()
        .rev()
        .map(|&v| (v, root))
        .collect();

    while let Some((u, from)) = stack.pop() {
        if !traversal.visited.try_visit(u) {
            continue;
        }
        traversal.discover(u, from);
        for &v in graph.neighbor_indices(u).iter().rev() {
            if !traversal.visited.is_visited(v) {
                stack.push((v, u));
            }
        }
    }

    trace_event!(trace, visited = traversal.visited_count(), "dfs complete");
    Ok(traversal)
}

/// Depth-first traversal by recursion.
///
/// Reference form of [`dfs`]; recursion depth equals the longest explored
/// path, so prefer [`dfs`] for deep graphs.
#[cfg_attr(feature = "tracing", tracing::instrument(level = "debug", skip(graph)))]
pub fn dfs_recursive<'g, G>(graph: &'g G, root: &str) -> GraphResult<Traversal<'g, G>>
where
    G: AdjacencyView + ?Sized,
{
    fn visit<G: AdjacencyView + ?Sized>(traversal: &mut Traversal<'_, G>, u: usize) {
        let graph = traversal.graph;
        for &v in graph.neighbor_indices(u) {
            if traversal.visited.try_visit(v) {
                traversal.discover(v, u);
                visit(traversal, v);
            }
        }
    }

    let root = resolve_root(graph, root)?;
    let mut traversal = Traversal::start(graph, root, Strategy::DepthFirstRecursive);
    visit(&mut traversal, root);

    trace_event!(trace, visited = traversal.visited_count(), "recursive dfs complete");
    Ok(traversal)
}

/// Breadth-first traversal.
///
/// Vertices are marked when enqueued, so each predecessor is fixed at the
/// shallowest discovery and every reconstructed path has the minimum number
/// of edges.
#[cfg_attr(feature = "tracing", tracing::instrument(level = "debug", skip(graph)))]
pub fn bfs<'g, G>(graph: &'g G, root: &str) -> GraphResult<Traversal<'g, G>>
where
    G: AdjacencyView + ?Sized,
{
    let root = resolve_root(graph, root)?;
    let mut traversal = Traversal::start(graph, root, Strategy::BreadthFirst);

    let mut queue = VecDeque::new();
    queue.push_back(root);

    while let Some(u) = queue.pop_front() {
        for &v in graph.neighbor_indices(u) {
            if traversal.visited.try_visit(v) {
                traversal.discover(v, u);
                queue.push_back(v);
            }
        }
    }

    trace_event!(trace, visited = traversal.visited_count(), "bfs complete");
    Ok(traversal)
}

impl<Ty: EdgeType> Graph<Ty> {
    /// Depth-first traversal from `root`. See [`dfs`].
    pub fn dfs(&self, root: &str) -> GraphResult<Traversal<'_, Self>> {
        dfs(self, root)
    }

    /// Recursive depth-first traversal from `root`. See [`dfs_recursive`].
    pub fn dfs_recursive(&self, root: &str) -> GraphResult<Traversal<'_, Self>> {
        dfs_recursive(self, root)
    }

    /// Breadth-first traversal from `root`. See [`bfs`].
    pub fn bfs(&self, root: &str) -> GraphResult<Traversal<'_, Self>> {
        bfs(self, root)
    }

    /// Traversal from `root` with an explicit [`Strategy`].
    pub fn traverse(&self, root: &str, strategy: Strategy) -> GraphResult<Traversal<'_, Self>> {
        traverse(self, root, strategy)
    }

    /// Returns `true` if a path leads from `from` to `to`.
    ///
    /// Runs a fresh depth-first traversal rooted at `from`. Both endpoints
    /// must exist.
    pub fn path_exists(&self, from: &str, to: &str) -> GraphResult<bool> {
        self.require(to)?;
        Ok(self.dfs(from)?.path_exists(to))
    }

    /// Path from `from` to `to` found by depth-first traversal.
    ///
    /// Returns an empty vector when `to` is unreachable. Both endpoints must
    /// exist.
    pub fn path<'a>(&'a self, from: &str, to: &str) -> GraphResult<Vec<&'a str>> {
        self.require(to)?;
        Ok(self.dfs(from)?.path_to(to))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::basic::{DiGraph, Edge, UnGraph};

    fn scenario_graph() -> DiGraph {
        DiGraph::from_edges([
            Edge::new("A", "B", 1),
            Edge::new("A", "C", 1),
            Edge::new("B", "D", 1),
            Edge::new("D", "E", 1),
        ])
    }

    #[test]
    fn dfs_reconstructs_path() {
        let graph = scenario_graph();
        let t = graph.dfs("A").unwrap();

        assert_eq!(t.root(), "A");
        assert_eq!(t.path_to("E"), vec!["A", "B", "D", "E"]);
        assert_eq!(t.path_to("A"), vec!["A"]);
        assert!(t.path_exists("C"));
        assert!(!t.path_exists("F"));
        assert!(t.path_to("F").is_empty());
        assert_eq!(t.visited_count(), 5);
    }

    #[test]
    fn bfs_matches_dfs_on_single_path() {
        let graph = scenario_graph();
        let t = graph.bfs("A").unwrap();
        assert_eq!(t.strategy(), Strategy::BreadthFirst);
        assert_eq!(t.path_to("E"), vec!["A", "B", "D", "E"]);
        assert_eq!(t.order().collect::<Vec<_>>(), vec!["A", "B", "C", "D", "E"]);
    }

    #[test]
    fn directed_reachability_respects_direction() {
        let graph = scenario_graph();
        let t = graph.dfs("B").unwrap();
        assert!(t.path_exists("E"));
        assert!(!t.path_exists("A"));
        assert!(!t.path_exists("C"));
        assert!(t.path_to("C").is_empty());
        assert_eq!(t.predecessor("B"), Some("B"));
        assert_eq!(t.predecessor("D"), Some("B"));
        assert_eq!(t.predecessor("A"), None);
    }

    #[test]
    fn bfs_finds_fewest_edges() {
        // A -> B -> C -> D and a shortcut A -> D added last.
        let mut graph = DiGraph::new();
        graph.add_edge("A", "B", 1);
        graph.add_edge("B", "C", 1);
        graph.add_edge("C", "D", 1);
        graph.add_edge("A", "D", 1);

        assert_eq!(graph.dfs("A").unwrap().path_to("D"), vec!["A", "B", "C", "D"]);
        assert_eq!(graph.bfs("A").unwrap().path_to("D"), vec!["A", "D"]);
    }

    #[test]
    fn iterative_and_recursive_dfs_agree() {
        let mut graph = UnGraph::new();
        for (u, v) in [("A", "B"), ("A", "C"), ("B", "C"), ("C", "D"), ("B", "E"), ("E", "D"), ("F", "A")] {
            graph.add_edge(u, v, 1);
        }

        let iterative = graph.dfs("A").unwrap();
        let recursive = graph.dfs_recursive("A").unwrap();

        assert_eq!(
            iterative.order().collect::<Vec<_>>(),
            recursive.order().collect::<Vec<_>>()
        );
        for v in ["A", "B", "C", "D", "E", "F"] {
            assert_eq!(iterative.predecessor(v), recursive.predecessor(v), "vertex {v}");
            assert_eq!(iterative.path_to(v), recursive.path_to(v), "vertex {v}");
        }
    }

    #[test]
    fn traversals_are_independent() {
        let graph = scenario_graph();
        let from_a = graph.dfs("A").unwrap();
        let from_d = graph.bfs("D").unwrap();

        // The second traversal does not disturb the first.
        assert_eq!(from_a.path_to("E"), vec!["A", "B", "D", "E"]);
        assert_eq!(from_d.path_to("E"), vec!["D", "E"]);
        assert!(from_d.path_to("B").is_empty());
    }

    #[test]
    fn unknown_root_is_an_error() {
        let graph = scenario_graph();
        for strategy in [Strategy::DepthFirst, Strategy::DepthFirstRecursive, Strategy::BreadthFirst] {
            let err = graph.traverse("Z", strategy).unwrap_err();
            assert_eq!(err, GraphError::vertex_not_found("Z"));
        }
    }

    #[test]
    fn graph_level_queries() {
        let graph = scenario_graph();

        assert_eq!(graph.path("A", "E").unwrap(), vec!["A", "B", "D", "E"]);
        assert!(graph.path("C", "E").unwrap().is_empty());
        assert!(graph.path_exists("B", "E").unwrap());
        assert!(!graph.path_exists("E", "B").unwrap());

        assert_eq!(graph.path("B", "F"), Err(GraphError::vertex_not_found("F")));
        assert_eq!(graph.path_exists("F", "B"), Err(GraphError::vertex_not_found("F")));
    }

    #[test]
    fn isolated_root_reaches_only_itself() {
        let mut graph = DiGraph::new();
        graph.add_vertex("solo");
        graph.add_edge("A", "B", 1);

        let t = graph.bfs("solo").unwrap();
        assert_eq!(t.visited_count(), 1);
        assert_eq!(t.path_to("solo"), vec!["solo"]);
        assert!(!t.path_exists("A"));
    }

    #[test]
    fn deep_chain_does_not_need_recursion() {
        let n = 50_000;
        let graph: DiGraph = (0..n - 1)
            .map(|i| Edge::new(i.to_string(), (i + 1).to_string(), 1))
            .collect();

        let t = graph.dfs("0").unwrap();
        assert_eq!(t.visited_count(), n);
        assert_eq!(t.path_to(&(n - 1).to_string()).len(), n);
    }
}
