use crate::{
    graph::Graph,
    query::{connected_components, AdjacencyList},
    types::VId,
};
use std::collections::BTreeMap;

/// Finds an Eulerian circuit with Hierholzer's algorithm.
///
/// Returns `None` unless the graph has a vertex, is connected and every degree is
/// even. The circuit starts and ends at vertex 1 and lists `q + 1` vertices.
pub fn find_eulerian_circuit(graph: &Graph) -> Option<Vec<VId>> {
    let adj = AdjacencyList::of(graph);
    let start = adj.vertices().next()?;
    if connected_components(&adj).len() > 1 || adj.vertices().any(|v| adj.degree(v) % 2 == 1) {
        return None;
    }
    Some(hierholzer(&adj, start))
}

fn hierholzer(adj: &AdjacencyList, start: VId) -> Vec<VId> {
    let mut unused: BTreeMap<VId, Vec<VId>> = adj
        .vertices()
        .map(|v| (v, adj.neighbors(v).to_vec()))
        .collect();
    let mut stack = vec![start];
    let mut circuit = Vec::with_capacity(adj.num_edges() + 1);
    while let Some(&u) = stack.last() {
        match unused.get_mut(&u).and_then(Vec::pop) {
            Some(v) => {
                // consume the same edge from the other side
                let back = unused.get_mut(&v).unwrap();
                let pos = back.iter().position(|&w| w == u).unwrap();
                back.remove(pos);
                stack.push(v);
            }
            None => circuit.extend(stack.pop()),
        }
    }
    circuit.reverse();
    circuit
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::Edge;
    use std::collections::BTreeSet;

    fn assert_circuit(graph: &Graph, circuit: &[VId]) {
        assert_eq!(circuit.len(), graph.num_edges() + 1);
        assert_eq!(circuit.first(), circuit.last());
        let used: BTreeSet<_> = circuit
            .windows(2)
            .map(|pair| Edge::new(pair[0], pair[1]))
            .collect();
        assert_eq!(used, graph.edges().collect());
    }

    #[test]
    fn test_square() {
        let graph = Graph::from_edges(4, vec![(1, 2), (2, 3), (3, 4), (4, 1)]).unwrap();
        let circuit = find_eulerian_circuit(&graph).unwrap();
        assert_eq!(circuit, [1, 4, 3, 2, 1]);
        assert_circuit(&graph, &circuit);
    }

    #[test]
    fn test_bowtie() {
        let graph =
            Graph::from_edges(5, vec![(1, 2), (2, 3), (3, 1), (3, 4), (4, 5), (5, 3)]).unwrap();
        let circuit = find_eulerian_circuit(&graph).unwrap();
        assert_circuit(&graph, &circuit);
    }

    #[test]
    fn test_not_eulerian() {
        let path = Graph::from_edges(3, vec![(1, 2), (2, 3)]).unwrap();
        assert_eq!(find_eulerian_circuit(&path), None);
        let two_triangles =
            Graph::from_edges(6, vec![(1, 2), (2, 3), (3, 1), (4, 5), (5, 6), (6, 4)]).unwrap();
        assert_eq!(find_eulerian_circuit(&two_triangles), None);
        assert_eq!(find_eulerian_circuit(&Graph::new()), None);
    }

    #[test]
    fn test_single_vertex() {
        let graph = Graph::with_vertices(1).unwrap();
        assert_eq!(find_eulerian_circuit(&graph), Some(vec![1]));
    }
}
