use crate::{
    graph::{Edge, Graph},
    types::VId,
};
use std::collections::BTreeMap;

/// The adjacency lists of a graph snapshot.
///
/// Built on demand from a [`Graph`](../graph/struct.Graph.html) and never updated
/// afterwards. Neighbor lists are in ascending order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdjacencyList {
    neighbors: BTreeMap<VId, Vec<VId>>,
}

impl AdjacencyList {
    pub fn of(graph: &Graph) -> Self {
        let mut neighbors: BTreeMap<_, _> = graph.vertices().map(|v| (v, vec![])).collect();
        for edge in graph.edges() {
            let (u, v) = edge.endpoints();
            neighbors.get_mut(&u).unwrap().push(v);
            neighbors.get_mut(&v).unwrap().push(u);
        }
        for list in neighbors.values_mut() {
            list.sort_unstable();
        }
        Self { neighbors }
    }

    /// The adjacency lists of the complement: every pair without an edge in `graph`.
    pub fn complement_of(graph: &Graph) -> Self {
        let neighbors = graph
            .vertices()
            .map(|u| {
                let list = graph
                    .vertices()
                    .filter(|&v| v != u && !graph.has_edge(u, v))
                    .collect();
                (u, list)
            })
            .collect();
        Self { neighbors }
    }

    /// A copy with `edge` taken out; the vertex set is unchanged.
    pub fn without_edge(&self, edge: Edge) -> Self {
        let mut neighbors = self.neighbors.clone();
        let (u, v) = edge.endpoints();
        if let Some(list) = neighbors.get_mut(&u) {
            list.retain(|&w| w != v);
        }
        if let Some(list) = neighbors.get_mut(&v) {
            list.retain(|&w| w != u);
        }
        Self { neighbors }
    }

    /// Returns the vertices in ascending order.
    pub fn vertices(&self) -> impl ExactSizeIterator<Item = VId> + Clone + '_ {
        self.neighbors.keys().copied()
    }

    pub fn num_vertices(&self) -> usize {
        self.neighbors.len()
    }

    pub fn num_edges(&self) -> usize {
        self.neighbors.values().map(Vec::len).sum::<usize>() / 2
    }

    /// Returns the neighbors of `vid`; an unknown vertex has none.
    pub fn neighbors(&self, vid: VId) -> &[VId] {
        self.neighbors.get(&vid).map_or(&[], Vec::as_slice)
    }

    pub fn degree(&self, vid: VId) -> usize {
        self.neighbors(vid).len()
    }

    pub fn is_adjacent(&self, u: VId, v: VId) -> bool {
        self.neighbors(u).binary_search(&v).is_ok()
    }
}
