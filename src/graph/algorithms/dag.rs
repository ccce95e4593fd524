//! Cycle detection and topological ordering for directed graphs.
//!
//! Both algorithms run the same explicit-stack depth-first search over
//! three-state vertex marks. A vertex is `Processing` while it is on the
//! stack and `Visited` once all of its descendants are finished; an edge into
//! a `Processing` vertex is a back-edge and proves a cycle.
//!
//! Topological sorting is done in two passes:
//! 1. postorder DFS over the *reversed* graph. A vertex finishes only after
//!    everything that can reach it, so the postorder already lists every
//!    vertex after all of its ancestors. Back-edges found here abort the sort.
//! 2. forward DFS seeded in that postorder, emitting vertices in preorder. A
//!    vertex is entered only once all of its in-neighbors have been emitted,
//!    which keeps chains of the original graph together in the output while
//!    preserving `u` before `v` for every edge `u -> v`, across any number of
//!    disconnected subgraphs.

use crate::error::{GraphError, GraphResult};
use crate::graph::access::marks::{VertexMarks, VisitState, VisitedFlags};
use crate::graph::basic::{AdjacencyView, DiGraph, Directed};
use crate::trace::trace_event;

/// Postorder DFS over all `n` vertices, seeded in index order.
///
/// Returns the finishing order, or the first cycle found as a closed vertex
/// sequence (`first == last`) following the edges given by `neighbors`.
fn postorder<'a, F>(n: usize, neighbors: F) -> Result<Vec<usize>, Vec<usize>>
where
    F: Fn(usize) -> &'a [usize],
{
    let mut marks = VertexMarks::new(n);
    let mut order = Vec::with_capacity(n);
    // (vertex, index of the next neighbor to examine)
    let mut stack: Vec<(usize, usize)> = Vec::new();

    for seed in 0..n {
        if marks.state(seed) != VisitState::Unvisited {
            continue;
        }
        marks.enter(seed);
        stack.push((seed, 0));

        while let Some(frame) = stack.last_mut() {
            let (u, next) = *frame;
            let Some(&v) = neighbors(u).get(next) else {
                marks.finish(u);
                order.push(u);
                stack.pop();
                continue;
            };
            frame.1 += 1;

            match marks.state(v) {
                VisitState::Unvisited => {
                    marks.enter(v);
                    stack.push((v, 0));
                }
                VisitState::Processing => {
                    // Back-edge u -> v: the stack from v up to u is the cycle.
                    let mut cycle: Vec<usize> = stack
                        .iter()
                        .map(|&(w, _)| w)
                        .skip_while(|&w| w != v)
                        .collect();
                    cycle.push(v);
                    return Err(cycle);
                }
                VisitState::Visited => {}
            }
        }
    }

    Ok(order)
}

/// Finds a cycle in a directed graph.
///
/// Returns the identifiers along the first cycle found, in edge direction
/// and closed (`first == last`); a self-loop on `a` yields `[a, a]`.
/// Returns `None` if the graph is acyclic.
#[cfg_attr(feature = "tracing", tracing::instrument(level = "debug", skip(graph)))]
pub fn find_cycle<G>(graph: &G) -> Option<Vec<&str>>
where
    G: AdjacencyView<Direction = Directed> + ?Sized,
{
    let cycle = postorder(graph.vertex_count(), |u| graph.neighbor_indices(u)).err()?;
    let cycle: Vec<&str> = cycle.into_iter().map(|v| graph.id_of(v)).collect();
    trace_event!(debug, ?cycle, "cycle found");
    Some(cycle)
}

/// Returns `true` if the directed graph contains a cycle.
pub fn is_cyclic<G>(graph: &G) -> bool
where
    G: AdjacencyView<Direction = Directed> + ?Sized,
{
    find_cycle(graph).is_some()
}

/// Computes a topological order of a directed graph.
///
/// For every edge `u -> v`, `u` precedes `v` in the result, and every vertex
/// appears exactly once. An empty graph yields an empty order.
///
/// # Errors
/// Returns [`GraphError::CycleDetected`] carrying the offending cycle if the
/// graph is not acyclic.
#[cfg_attr(feature = "tracing", tracing::instrument(level = "debug", skip(graph)))]
pub fn topological_sort<G>(graph: &G) -> GraphResult<Vec<&str>>
where
    G: AdjacencyView<Direction = Directed> + ?Sized,
{
    let n = graph.vertex_count();

    let mut reverse = vec![Vec::new(); n];
    for u in 0..n {
        for &v in graph.neighbor_indices(u) {
            reverse[v].push(u);
        }
    }

    let seeds = match postorder(n, |u| reverse[u].as_slice()) {
        Ok(seeds) => seeds,
        Err(mut cycle) => {
            // Found against reversed edges; flip it back to edge direction.
            cycle.reverse();
            let err = GraphError::cycle(cycle.into_iter().map(|v| graph.id_of(v)));
            trace_event!(debug, %err, "topological sort aborted");
            return Err(err);
        }
    };
    trace_event!(trace, vertices = n, "reverse postorder computed");

    // In-neighbors not yet emitted.
    let mut pending: Vec<usize> = reverse.iter().map(Vec::len).collect();
    let mut emitted = VisitedFlags::new(n);
    let mut order = Vec::with_capacity(n);
    let mut stack = Vec::new();

    for &seed in &seeds {
        if emitted.is_visited(seed) {
            continue;
        }
        debug_assert_eq!(pending[seed], 0, "seed reached before its in-neighbors");
        stack.push(seed);

        while let Some(u) = stack.pop() {
            emitted.try_visit(u);
            order.push(graph.id_of(u));
            for &v in graph.neighbor_indices(u).iter().rev() {
                pending[v] -= 1;
                if pending[v] == 0 {
                    stack.push(v);
                }
            }
        }
    }

    debug_assert_eq!(order.len(), n);
    Ok(order)
}

impl DiGraph {
    /// Finds a cycle. See [`find_cycle`].
    pub fn find_cycle(&self) -> Option<Vec<&str>> {
        find_cycle(self)
    }

    /// Returns `true` if the graph contains a cycle. See [`is_cyclic`].
    pub fn is_cyclic(&self) -> bool {
        is_cyclic(self)
    }

    /// Topological order of the graph. See [`topological_sort`].
    ///
    /// # Errors
    /// Returns [`GraphError::CycleDetected`] if the graph has a cycle.
    pub fn topological_sort(&self) -> GraphResult<Vec<&str>> {
        topological_sort(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::basic::Edge;

    fn assert_topological(graph: &DiGraph, order: &[&str]) {
        assert_eq!(order.len(), graph.vertex_count());
        let pos = |id: &str| order.iter().position(|&v| v == id).unwrap();
        for edge in graph.edges() {
            assert!(pos(edge.from()) < pos(edge.to()), "{edge} goes backwards in {order:?}");
        }
    }

    fn weighted_dag() -> DiGraph {
        DiGraph::from_edges([
            Edge::new("E", "F", 1),
            Edge::new("F", "G", 3),
            Edge::new("E", "H", 7),
            Edge::new("H", "G", 5),
            Edge::new("H", "K", 4),
            Edge::new("K", "L", 3),
        ])
    }

    #[test]
    fn sorts_dag_respecting_every_edge() {
        let graph = weighted_dag();
        assert!(!graph.is_cyclic());

        let order = graph.topological_sort().unwrap();
        assert_topological(&graph, &order);
        assert_eq!(order, vec!["E", "F", "H", "G", "K", "L"]);
    }

    #[test]
    fn three_cycle_is_reported() {
        let graph = DiGraph::from_edges([
            Edge::new("C1", "C2", 1),
            Edge::new("C2", "C3", 1),
            Edge::new("C3", "C1", 1),
        ]);

        assert!(graph.is_cyclic());
        assert_eq!(graph.find_cycle(), Some(vec!["C1", "C2", "C3", "C1"]));

        let err = graph.topological_sort().unwrap_err();
        assert!(err.is_cycle());
        let GraphError::CycleDetected { cycle } = err else {
            panic!("expected a cycle error");
        };
        assert_eq!(cycle.first(), cycle.last());
        assert_eq!(cycle.len(), 4);
        for pair in cycle.windows(2) {
            assert!(graph.contains_edge(&pair[0], &pair[1]), "{pair:?} is not an edge");
        }
    }

    #[test]
    fn cycle_behind_acyclic_prefix() {
        // A -> B -> C -> D -> B
        let graph = DiGraph::from_edges([
            Edge::new("A", "B", 1),
            Edge::new("B", "C", 1),
            Edge::new("C", "D", 1),
            Edge::new("D", "B", 1),
        ]);

        assert_eq!(graph.find_cycle(), Some(vec!["B", "C", "D", "B"]));
        assert!(graph.topological_sort().is_err());
    }

    #[test]
    fn self_loop_is_a_cycle() {
        let mut graph = DiGraph::new();
        graph.add_edge("A", "A", 1);

        assert_eq!(graph.find_cycle(), Some(vec!["A", "A"]));
        assert_eq!(
            graph.topological_sort(),
            Err(GraphError::cycle(["A", "A"]))
        );
    }

    #[test]
    fn trivial_graphs_are_distinct_from_cyclic_ones() {
        let empty = DiGraph::new();
        assert!(!empty.is_cyclic());
        assert_eq!(empty.topological_sort(), Ok(vec![]));

        let single = DiGraph::from_vertices(["solo"]);
        assert!(!single.is_cyclic());
        assert_eq!(single.topological_sort(), Ok(vec!["solo"]));
    }

    #[test]
    fn disconnected_subgraphs_all_sorted() {
        let mut graph = DiGraph::new();
        // Inserted so that sinks are seen before their sources.
        graph.add_vertex("z");
        graph.add_vertex("island");
        graph.add_edge("y", "z", 1);
        graph.add_edge("x", "y", 1);
        graph.add_edge("c", "b", 1);
        graph.add_edge("b", "a", 1);
        graph.add_edge("x", "b", 1);

        assert!(!graph.is_cyclic());
        let order = graph.topological_sort().unwrap();
        assert_topological(&graph, &order);
        assert!(order.contains(&"island"));
    }

    #[test]
    fn diamond_keeps_join_after_both_branches() {
        let graph = DiGraph::from_edges([
            Edge::new("0", "1", 1),
            Edge::new("0", "2", 1),
            Edge::new("1", "3", 1),
            Edge::new("2", "3", 1),
        ]);

        let order = graph.topological_sort().unwrap();
        assert_eq!(order[0], "0");
        assert_eq!(order[3], "3");
        assert_topological(&graph, &order);
    }

    #[test]
    fn postorder_reports_closed_cycle() {
        let adjacency: Vec<Vec<usize>> = vec![vec![1], vec![2], vec![1]];
        let cycle = postorder(3, |u| adjacency[u].as_slice()).unwrap_err();
        assert_eq!(cycle, vec![1, 2, 1]);

        let acyclic: Vec<Vec<usize>> = vec![vec![1, 2], vec![2], vec![]];
        assert_eq!(postorder(3, |u| acyclic[u].as_slice()), Ok(vec![2, 1, 0]));
    }
}
