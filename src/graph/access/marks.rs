//! Per-call vertex state for traversals.
//!
//! This provides two internal implementations:
//! - `VisitedFlags`: a plain reached/not-reached flag per vertex (DFS, BFS, components)
//! - `VertexMarks`: the three-state {unvisited, processing, visited} machine used by
//!   the DAG algorithms to detect back-edges
//!
//! Both are created fresh by each algorithm call and dropped when it returns.

/// A per-vertex visited flag vector.
pub(crate) struct VisitedFlags {
    flags: Vec<bool>,
    count: usize,
}

impl VisitedFlags {
    pub(crate) fn new(len: usize) -> Self {
        Self {
            flags: vec![false; len],
            count: 0,
        }
    }

    /// Number of vertices marked so far.
    #[inline]
    pub(crate) fn count(&self) -> usize {
        self.count
    }

    #[inline]
    pub(crate) fn is_visited(&self, idx: usize) -> bool {
        self.flags[idx]
    }

    /// Returns `true` iff this call observed the vertex as not-yet-visited and marks it visited.
    #[inline]
    pub(crate) fn try_visit(&mut self, idx: usize) -> bool {
        if self.flags[idx] {
            return false;
        }
        self.flags[idx] = true;
        self.count += 1;
        true
    }
}

/// Exploration state of a single vertex.
///
/// Transitions are monotonic: `Unvisited -> Processing -> Visited`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum VisitState {
    Unvisited,
    /// On the current exploration path.
    Processing,
    /// Fully explored, including all descendants.
    Visited,
}

/// Three-state marks for back-edge detection.
pub(crate) struct VertexMarks {
    states: Vec<VisitState>,
}

impl VertexMarks {
    pub(crate) fn new(len: usize) -> Self {
        Self {
            states: vec![VisitState::Unvisited; len],
        }
    }

    #[inline]
    pub(crate) fn state(&self, idx: usize) -> VisitState {
        self.states[idx]
    }

    /// `Unvisited -> Processing`.
    #[inline]
    pub(crate) fn enter(&mut self, idx: usize) {
        debug_assert_eq!(self.states[idx], VisitState::Unvisited);
        self.states[idx] = VisitState::Processing;
    }

    /// `Processing -> Visited`.
    #[inline]
    pub(crate) fn finish(&mut self, idx: usize) {
        debug_assert_eq!(self.states[idx], VisitState::Processing);
        self.states[idx] = VisitState::Visited;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn visited_flags_count_first_visits_only() {
        let mut flags = VisitedFlags::new(3);
        assert!(flags.try_visit(1));
        assert!(!flags.try_visit(1));
        assert!(flags.is_visited(1));
        assert!(!flags.is_visited(0));
        assert_eq!(flags.count(), 1);
    }

    #[test]
    fn marks_walk_the_state_machine() {
        let mut marks = VertexMarks::new(2);
        assert_eq!(marks.state(0), VisitState::Unvisited);
        marks.enter(0);
        assert_eq!(marks.state(0), VisitState::Processing);
        marks.finish(0);
        assert_eq!(marks.state(0), VisitState::Visited);
        assert_eq!(marks.state(1), VisitState::Unvisited);
    }
}
