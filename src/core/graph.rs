use crate::core::models::Schedule;
use std::cmp::Ordering;
use std::collections::{BinaryHeap, HashMap, HashSet};

/// Frontier entry for the min-heap (BinaryHeap is a max-heap by default,
/// so comparisons are reversed). Ordered by identifier bytes; the interned
/// id never breaks a tie because identifiers are unique, it only keeps the
/// ordering total for Eq.
#[derive(Debug, PartialEq, Eq)]
struct FrontierEntry<'a> {
    name: &'a str,
    id: usize,
}

impl Ord for FrontierEntry<'_> {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .name
            .cmp(self.name)
            .then_with(|| other.id.cmp(&self.id))
    }
}

impl PartialOrd for FrontierEntry<'_> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Dependency graph over interned task identifiers.
///
/// Identifiers are interned to dense indices the first time they appear, in
/// either role, so every index is registered in `dependents` and `in_degree`
/// before any edge touches it. Duplicate edges are dropped at insertion:
/// in-degree counts distinct prerequisites only.
#[derive(Debug, Default)]
pub struct TaskGraph {
    names: Vec<String>,
    index: HashMap<String, usize>,
    dependents: Vec<Vec<usize>>,
    in_degree: Vec<usize>,
    edges: HashSet<(usize, usize)>,
}

impl TaskGraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of distinct tasks registered so far.
    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    fn intern(&mut self, name: &str) -> usize {
        if let Some(&id) = self.index.get(name) {
            return id;
        }
        let id = self.names.len();
        self.names.push(name.to_string());
        self.index.insert(name.to_string(), id);
        self.dependents.push(Vec::new());
        self.in_degree.push(0);
        id
    }

    /// Record that `task` cannot be scheduled before `prerequisite`.
    ///
    /// Registers both identifiers. The edge is added only if this exact
    /// (prerequisite, task) pair has not been seen before; a repeated
    /// declaration must not inflate the dependent's in-degree.
    pub fn add_dependency(&mut self, task: &str, prerequisite: &str) {
        let dependent = self.intern(task);
        let prereq = self.intern(prerequisite);
        if self.edges.insert((prereq, dependent)) {
            self.dependents[prereq].push(dependent);
            self.in_degree[dependent] += 1;
        }
    }

    /// Kahn's algorithm with a lexicographic tie-break.
    ///
    /// The frontier is a min-heap keyed by identifier, so each extraction
    /// takes the globally smallest eligible task, not merely the smallest of
    /// the batch freed in the current round. Works on a cloned in-degree
    /// vector; the graph itself is left untouched and can be sorted again.
    ///
    /// Returns the full order if every task was scheduled, `Schedule::Cycle`
    /// if a cycle blocks the remainder.
    pub fn toposort(&self) -> Schedule {
        let mut in_degree = self.in_degree.clone();

        let mut frontier = BinaryHeap::new();
        for (id, &degree) in in_degree.iter().enumerate() {
            if degree == 0 {
                frontier.push(FrontierEntry {
                    name: &self.names[id],
                    id,
                });
            }
        }

        let mut order = Vec::with_capacity(self.len());
        while let Some(entry) = frontier.pop() {
            order.push(entry.name.to_string());
            for &dependent in &self.dependents[entry.id] {
                in_degree[dependent] -= 1;
                if in_degree[dependent] == 0 {
                    frontier.push(FrontierEntry {
                        name: &self.names[dependent],
                        id: dependent,
                    });
                }
            }
        }

        if order.len() == self.len() {
            Schedule::Order { tasks: order }
        } else {
            Schedule::Cycle
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn graph_of(pairs: &[(&str, &str)]) -> TaskGraph {
        let mut graph = TaskGraph::new();
        for &(task, prereq) in pairs {
            graph.add_dependency(task, prereq);
        }
        graph
    }

    fn order_of(graph: &TaskGraph) -> Vec<String> {
        match graph.toposort() {
            Schedule::Order { tasks } => tasks,
            Schedule::Cycle => panic!("expected a full order, got a cycle"),
        }
    }

    #[test]
    fn test_linear_chain() {
        // C depends on B, B depends on A
        let graph = graph_of(&[("C", "B"), ("B", "A")]);
        assert_eq!(order_of(&graph), ["A", "B", "C"]);
    }

    #[test]
    fn test_diamond_tiebreak() {
        // B and C both depend on A, D depends on both
        let graph = graph_of(&[("B", "A"), ("C", "A"), ("D", "B"), ("D", "C")]);
        assert_eq!(order_of(&graph), ["A", "B", "C", "D"]);
    }

    #[test]
    fn test_frontier_is_global_not_batch() {
        // A and M start eligible; finishing A frees B, which must be
        // extracted before the older frontier member M.
        let graph = graph_of(&[("B", "A"), ("Z", "M")]);
        assert_eq!(order_of(&graph), ["A", "B", "M", "Z"]);
    }

    #[test]
    fn test_lexicographically_smallest_extension() {
        // Only constraint: D before B. Smallest valid order is A, C, D, B.
        let mut graph = graph_of(&[("B", "D")]);
        graph.add_dependency("B", "A");
        graph.add_dependency("C", "A");
        assert_eq!(order_of(&graph), ["A", "C", "D", "B"]);
    }

    #[test]
    fn test_duplicate_edge_counts_once() {
        let graph = graph_of(&[("B", "A"), ("B", "A")]);
        assert_eq!(graph.len(), 2);
        assert_eq!(order_of(&graph), ["A", "B"]);
    }

    #[test]
    fn test_two_task_cycle() {
        let graph = graph_of(&[("A", "B"), ("B", "A")]);
        assert_eq!(graph.toposort(), Schedule::Cycle);
    }

    #[test]
    fn test_self_dependency_is_a_cycle() {
        let graph = graph_of(&[("A", "A")]);
        assert_eq!(graph.toposort(), Schedule::Cycle);
    }

    #[test]
    fn test_cycle_with_reachable_prefix() {
        // A is free, but B and C deadlock each other: no full order exists.
        let graph = graph_of(&[("B", "A"), ("B", "C"), ("C", "B")]);
        assert_eq!(graph.toposort(), Schedule::Cycle);
    }

    #[test]
    fn test_disconnected_components_interleave() {
        // Two unrelated chains; zero in-degree tasks surface in byte order.
        let graph = graph_of(&[("B", "A"), ("D", "C")]);
        assert_eq!(order_of(&graph), ["A", "B", "C", "D"]);
    }

    #[test]
    fn test_empty_graph() {
        let graph = TaskGraph::new();
        assert_eq!(graph.toposort(), Schedule::Order { tasks: vec![] });
    }

    #[test]
    fn test_byte_order_not_natural_order() {
        // "Z" (0x5a) sorts before "a" (0x61), and "10" before "9".
        let graph = graph_of(&[("a", "Z"), ("9", "10")]);
        assert_eq!(order_of(&graph), ["10", "9", "Z", "a"]);
    }

    #[test]
    fn test_sort_is_repeatable() {
        let graph = graph_of(&[("C", "A"), ("B", "A")]);
        assert_eq!(graph.toposort(), graph.toposort());
    }
}
