use super::AdjacencyList;
use crate::{graph::Graph, types::VId};
use std::collections::{BTreeSet, VecDeque};

/// Partitions the vertices into connected components.
///
/// Components are discovered by breadth-first search from each unvisited vertex in
/// ascending order, so they are listed by their smallest vertex.
pub fn connected_components(adj: &AdjacencyList) -> Vec<BTreeSet<VId>> {
    let mut visited = BTreeSet::new();
    let mut components = vec![];
    for start in adj.vertices() {
        if visited.insert(start) {
            let mut component = BTreeSet::new();
            let mut queue = VecDeque::from(vec![start]);
            while let Some(u) = queue.pop_front() {
                component.insert(u);
                for &v in adj.neighbors(u) {
                    if visited.insert(v) {
                        queue.push_back(v);
                    }
                }
            }
            components.push(component);
        }
    }
    components
}

/// Whether `graph` has at most one component; the empty graph is connected.
pub fn is_connected(graph: &Graph) -> bool {
    connected_components(&AdjacencyList::of(graph)).len() <= 1
}

/// Whether `graph` is connected with exactly `p - 1` edges.
pub fn is_tree(graph: &Graph) -> bool {
    GraphProperties::of(graph).is_tree()
}

/// The structural facts most theorems start from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GraphProperties {
    num_vertices: usize,
    num_edges: usize,
    components: Vec<BTreeSet<VId>>,
}

impl GraphProperties {
    pub fn of(graph: &Graph) -> Self {
        Self {
            num_vertices: graph.num_vertices(),
            num_edges: graph.num_edges(),
            components: connected_components(&AdjacencyList::of(graph)),
        }
    }

    pub fn num_vertices(&self) -> usize {
        self.num_vertices
    }

    pub fn num_edges(&self) -> usize {
        self.num_edges
    }

    pub fn components(&self) -> &[BTreeSet<VId>] {
        &self.components
    }

    pub fn is_connected(&self) -> bool {
        self.components.len() <= 1
    }

    pub fn is_tree(&self) -> bool {
        self.is_connected() && self.num_edges + 1 == self.num_vertices
    }
}
