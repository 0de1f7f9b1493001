use crate::{
    graph::{Edge, Graph},
    query::is_tree,
    types::VId,
};
use std::collections::{BTreeMap, BTreeSet};

/// The leaves stripped in one round, with the edges that went with them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LeafRound {
    leaves: Vec<VId>,
    edges: Vec<Edge>,
}

impl LeafRound {
    pub fn leaves(&self) -> &[VId] {
        &self.leaves
    }

    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }
}

/// The full reduction of a tree to its center.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TreeCenter {
    rounds: Vec<LeafRound>,
    center: Vec<VId>,
}

impl TreeCenter {
    /// The rounds in the order they happen.
    pub fn rounds(&self) -> &[LeafRound] {
        &self.rounds
    }

    /// One vertex, or two adjacent vertices.
    pub fn center(&self) -> &[VId] {
        &self.center
    }
}

/// Strips all leaves of a tree at once, round after round, until at most two
/// vertices remain.
///
/// Returns `None` if `graph` is not a tree. A tree with one or two vertices is its
/// own center and needs no rounds.
pub fn reduce_to_center(graph: &Graph) -> Option<TreeCenter> {
    if !is_tree(graph) {
        return None;
    }
    let mut vertices: BTreeSet<VId> = graph.vertices().collect();
    let mut edges: BTreeSet<Edge> = graph.edges().collect();
    let mut rounds = vec![];
    while vertices.len() > 2 {
        let mut degrees: BTreeMap<VId, usize> = vertices.iter().map(|&v| (v, 0)).collect();
        for edge in &edges {
            *degrees.get_mut(&edge.u()).unwrap() += 1;
            *degrees.get_mut(&edge.v()).unwrap() += 1;
        }
        let leaves: Vec<VId> = degrees
            .into_iter()
            .filter(|&(_, degree)| degree == 1)
            .map(|(v, _)| v)
            .collect();
        debug_assert!(!leaves.is_empty(), "a tree with 3+ vertices has leaves");
        if leaves.is_empty() {
            break;
        }
        let removed: Vec<Edge> = edges
            .iter()
            .filter(|edge| leaves.iter().any(|&leaf| edge.contains(leaf)))
            .copied()
            .collect();
        for leaf in &leaves {
            vertices.remove(leaf);
        }
        for edge in &removed {
            edges.remove(edge);
        }
        rounds.push(LeafRound {
            leaves,
            edges: removed,
        });
    }
    Some(TreeCenter {
        rounds,
        center: vertices.into_iter().collect(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_path() {
        let graph = Graph::from_edges(5, vec![(1, 2), (2, 3), (3, 4), (4, 5)]).unwrap();
        let result = reduce_to_center(&graph).unwrap();
        assert_eq!(result.center(), [3]);
        assert_eq!(
            result
                .rounds()
                .iter()
                .map(|round| round.leaves().to_vec())
                .collect::<Vec<_>>(),
            [vec![1, 5], vec![2, 4]]
        );
        assert_eq!(result.rounds()[0].edges(), [Edge::new(1, 2), Edge::new(4, 5)]);
    }

    #[test]
    fn test_bicentral() {
        let graph =
            Graph::from_edges(7, vec![(1, 2), (2, 3), (3, 4), (4, 5), (5, 6), (2, 7)]).unwrap();
        let result = reduce_to_center(&graph).unwrap();
        assert_eq!(result.rounds().len(), 2);
        assert_eq!(result.rounds()[0].leaves(), [1, 6, 7]);
        assert_eq!(result.rounds()[1].leaves(), [2, 5]);
        assert_eq!(result.center(), [3, 4]);
    }

    #[test]
    fn test_star() {
        let graph = Graph::from_edges(5, vec![(1, 2), (1, 3), (1, 4), (1, 5)]).unwrap();
        let result = reduce_to_center(&graph).unwrap();
        assert_eq!(result.rounds().len(), 1);
        assert_eq!(result.center(), [1]);
    }

    #[test]
    fn test_small() {
        let edge = Graph::from_edges(2, vec![(1, 2)]).unwrap();
        let result = reduce_to_center(&edge).unwrap();
        assert!(result.rounds().is_empty());
        assert_eq!(result.center(), [1, 2]);
        assert_eq!(reduce_to_center(&Graph::with_vertices(1).unwrap()).unwrap().center(), [1]);
    }

    #[test]
    fn test_not_tree() {
        let triangle = Graph::from_edges(3, vec![(1, 2), (2, 3), (3, 1)]).unwrap();
        assert_eq!(reduce_to_center(&triangle), None);
        assert_eq!(reduce_to_center(&Graph::new()), None);
    }
}
