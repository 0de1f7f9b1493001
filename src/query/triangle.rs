use super::AdjacencyList;
use crate::types::VId;
use itertools::Itertools;

/// Finds a triangle by scanning all vertex triples.
///
/// Triples are enumerated in ascending lexicographic order `(i, j, k)` with
/// `i < j < k`, and the first triangle found is returned.
pub fn find_triangle(adj: &AdjacencyList) -> Option<[VId; 3]> {
    adj.vertices()
        .tuple_combinations()
        .find(|&(u, v, w)| adj.is_adjacent(u, v) && adj.is_adjacent(u, w) && adj.is_adjacent(v, w))
        .map(|(u, v, w)| [u, v, w])
}
