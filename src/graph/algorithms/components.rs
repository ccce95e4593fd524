//! Connected-component labeling for undirected graphs.

use std::collections::HashMap;

use crate::graph::access::marks::VisitedFlags;
use crate::graph::basic::{AdjacencyView, Undirected, UnGraph};
use crate::trace::trace_event;

/// Component labels for every vertex of an undirected graph.
///
/// Labels are dense, starting at `0`, and assigned in vertex insertion order:
/// the component containing the first-inserted vertex is `0`, the next
/// component discovered is `1`, and so on. Two vertices share a label iff an
/// undirected path connects them.
pub struct Components<'g, G: ?Sized> {
    graph: &'g G,
    labels: Vec<usize>,
    count: usize,
}

impl<'g, G: AdjacencyView + ?Sized> Components<'g, G> {
    /// Number of components.
    pub fn count(&self) -> usize {
        self.count
    }

    /// Label of `id`, or `None` for an unknown identifier.
    pub fn label(&self, id: &str) -> Option<usize> {
        self.graph.index_of(id).map(|v| self.labels[v])
    }

    /// Returns `true` if both vertices exist and lie in the same component.
    pub fn connected(&self, a: &str, b: &str) -> bool {
        match (self.label(a), self.label(b)) {
            (Some(la), Some(lb)) => la == lb,
            _ => false,
        }
    }

    /// Vertices carrying `label`, in insertion order.
    pub fn members(&self, label: usize) -> Vec<&'g str> {
        let graph = self.graph;
        self.labels
            .iter()
            .enumerate()
            .filter(|&(_, &l)| l == label)
            .map(|(v, _)| graph.id_of(v))
            .collect()
    }

    /// All components, indexed by label.
    pub fn groups(&self) -> Vec<Vec<&'g str>> {
        let mut groups = vec![Vec::new(); self.count];
        for (v, &label) in self.labels.iter().enumerate() {
            groups[label].push(self.graph.id_of(v));
        }
        groups
    }

    /// `(identifier, label)` pairs in insertion order.
    pub fn iter(&self) -> impl ExactSizeIterator<Item = (&'g str, usize)> + '_ {
        let graph = self.graph;
        self.labels
            .iter()
            .enumerate()
            .map(move |(v, &label)| (graph.id_of(v), label))
    }

    /// The identifier -> label mapping.
    pub fn to_map(&self) -> HashMap<&'g str, usize> {
        self.iter().collect()
    }
}

/// Labels the connected components of an undirected graph.
///
/// Walks the vertices in insertion order; each vertex not yet labelled seeds
/// an explicit-stack depth-first search that gives every reachable vertex a
/// fresh label. Isolated vertices form singleton components.
#[cfg_attr(feature = "tracing", tracing::instrument(level = "debug", skip(graph)))]
pub fn label_components<G>(graph: &G) -> Components<'_, G>
where
    G: AdjacencyView<Direction = Undirected> + ?Sized,
{
    let n = graph.vertex_count();
    let mut visited = VisitedFlags::new(n);
    let mut labels = vec![0usize; n];
    let mut count = 0usize;
    let mut stack = Vec::new();

    for seed in 0..n {
        if !visited.try_visit(seed) {
            continue;
        }
        labels[seed] = count;
        stack.push(seed);

        while let Some(u) = stack.pop() {
            for &v in graph.neighbor_indices(u) {
                if visited.try_visit(v) {
                    labels[v] = count;
                    stack.push(v);
                }
            }
        }
        count += 1;
    }

    trace_event!(debug, vertices = n, components = count, "labelled components");
    Components { graph, labels, count }
}

impl UnGraph {
    /// Labels connected components. See [`label_components`].
    pub fn label_components(&self) -> Components<'_, Self> {
        label_components(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::basic::Edge;

    fn two_triangles_and_an_island() -> UnGraph {
        let mut graph = UnGraph::from_edges([
            Edge::new("A", "B", 1),
            Edge::new("B", "C", 1),
            Edge::new("C", "A", 1),
            Edge::new("D", "E", 1),
            Edge::new("E", "F", 1),
            Edge::new("F", "D", 1),
            Edge::new("F", "G", 1),
        ]);
        graph.add_vertex("H");
        graph
    }

    #[test]
    fn groups_vertices_by_connectivity() {
        let graph = two_triangles_and_an_island();
        let components = graph.label_components();

        assert_eq!(components.count(), 3);
        assert_eq!(components.to_map().len(), 8);

        let abc = components.label("A").unwrap();
        let defg = components.label("D").unwrap();
        let h = components.label("H").unwrap();
        assert_ne!(abc, defg);
        assert_ne!(abc, h);
        assert_ne!(defg, h);

        for v in ["B", "C"] {
            assert_eq!(components.label(v), Some(abc));
        }
        for v in ["E", "F", "G"] {
            assert_eq!(components.label(v), Some(defg));
        }
    }

    #[test]
    fn labels_follow_insertion_order() {
        let graph = two_triangles_and_an_island();
        let components = graph.label_components();

        assert_eq!(components.label("A"), Some(0));
        assert_eq!(components.label("D"), Some(1));
        assert_eq!(components.label("H"), Some(2));
        assert_eq!(components.members(1), vec!["D", "E", "F", "G"]);
        assert_eq!(
            components.groups(),
            vec![vec!["A", "B", "C"], vec!["D", "E", "F", "G"], vec!["H"]]
        );
    }

    #[test]
    fn connected_and_unknown_vertices() {
        let graph = two_triangles_and_an_island();
        let components = graph.label_components();

        assert!(components.connected("A", "C"));
        assert!(components.connected("G", "D"));
        assert!(!components.connected("A", "G"));
        assert!(!components.connected("A", "missing"));
        assert_eq!(components.label("missing"), None);
    }

    #[test]
    fn empty_and_edgeless_graphs() {
        let empty = UnGraph::new();
        assert_eq!(empty.label_components().count(), 0);

        let islands = UnGraph::from_vertices(["x", "y", "z"]);
        let components = islands.label_components();
        assert_eq!(components.count(), 3);
        assert_eq!(
            components.iter().collect::<Vec<_>>(),
            vec![("x", 0), ("y", 1), ("z", 2)]
        );
    }
}
