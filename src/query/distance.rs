use super::AdjacencyList;
use crate::types::VId;
use derive_more::Display;
use std::collections::{BTreeMap, VecDeque};

/// A shortest-path length; unreachable pairs are infinitely far apart.
///
/// Every finite distance orders before `Infinite`.
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Distance {
    #[display(fmt = "{}", _0)]
    Finite(usize),
    #[display(fmt = "∞")]
    Infinite,
}

impl Distance {
    pub fn is_finite(&self) -> bool {
        matches!(self, Distance::Finite(_))
    }
}

/// Breadth-first distances from `start` to every vertex it reaches.
pub fn bfs_distances(adj: &AdjacencyList, start: VId) -> BTreeMap<VId, usize> {
    let mut distances = BTreeMap::new();
    distances.insert(start, 0);
    let mut queue = VecDeque::from(vec![start]);
    while let Some(u) = queue.pop_front() {
        let next = distances[&u] + 1;
        for &v in adj.neighbors(u) {
            distances.entry(v).or_insert_with(|| {
                queue.push_back(v);
                next
            });
        }
    }
    distances
}

/// The largest eccentricity over all vertices.
///
/// Returns `Infinite` as soon as some vertex cannot reach another; graphs with fewer
/// than two vertices have diameter 0.
pub fn diameter(adj: &AdjacencyList) -> Distance {
    let mut diameter = 0;
    for start in adj.vertices() {
        let distances = bfs_distances(adj, start);
        if distances.len() < adj.num_vertices() {
            return Distance::Infinite;
        }
        diameter = diameter.max(distances.values().copied().max().unwrap_or(0));
    }
    Distance::Finite(diameter)
}

/// A shortest path from `start` to `end`, both included.
///
/// Among paths of minimal length the one found first by breadth-first search (with
/// neighbors in ascending order) is returned.
pub fn shortest_path(adj: &AdjacencyList, start: VId, end: VId) -> Option<Vec<VId>> {
    let mut parents = BTreeMap::new();
    parents.insert(start, start);
    let mut queue = VecDeque::from(vec![start]);
    while let Some(u) = queue.pop_front() {
        if u == end {
            let mut path = vec![end];
            let mut v = end;
            while v != start {
                v = parents[&v];
                path.push(v);
            }
            path.reverse();
            return Some(path);
        }
        for &v in adj.neighbors(u) {
            if !parents.contains_key(&v) {
                parents.insert(v, u);
                queue.push_back(v);
            }
        }
    }
    None
}
