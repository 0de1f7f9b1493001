use crate::{graph::Graph, types::VId};
use std::collections::BTreeMap;

/// Returns the degree of every vertex.
pub fn degrees(graph: &Graph) -> BTreeMap<VId, usize> {
    let mut degrees: BTreeMap<_, _> = graph.vertices().map(|v| (v, 0)).collect();
    for edge in graph.edges() {
        *degrees.get_mut(&edge.u()).unwrap() += 1;
        *degrees.get_mut(&edge.v()).unwrap() += 1;
    }
    degrees
}

/// Returns the minimum degree, or `None` for the graph without vertices.
pub fn min_degree(graph: &Graph) -> Option<usize> {
    degrees(graph).values().copied().min()
}

/// Returns the vertices of odd degree in ascending order.
pub fn odd_degree_vertices(graph: &Graph) -> Vec<VId> {
    degrees(graph)
        .into_iter()
        .filter(|&(_, degree)| degree % 2 == 1)
        .map(|(v, _)| v)
        .collect()
}
