use super::AdjacencyList;
use crate::{graph::Edge, types::VId};
use derive_more::Display;
use std::collections::{BTreeMap, VecDeque};

/// One of the two color classes.
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Side {
    #[display(fmt = "1")]
    One,
    #[display(fmt = "2")]
    Two,
}

impl Side {
    pub fn opposite(self) -> Self {
        match self {
            Side::One => Side::Two,
            Side::Two => Side::One,
        }
    }
}

/// The outcome of a breadth-first 2-coloring.
///
/// When the coloring fails, `conflict` is the first edge found with both endpoints in
/// the same class, which proves an odd cycle; `coloring` then holds the partial
/// coloring at that moment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Bipartition {
    coloring: BTreeMap<VId, Side>,
    conflict: Option<Edge>,
}

impl Bipartition {
    pub fn is_bipartite(&self) -> bool {
        self.conflict.is_none()
    }

    pub fn coloring(&self) -> &BTreeMap<VId, Side> {
        &self.coloring
    }

    pub fn side(&self, vid: VId) -> Option<Side> {
        self.coloring.get(&vid).copied()
    }

    pub fn conflict(&self) -> Option<Edge> {
        self.conflict
    }
}

/// 2-colors every component, starting each one from its smallest vertex on
/// [`Side::One`](enum.Side.html).
pub fn bipartition(adj: &AdjacencyList) -> Bipartition {
    let mut coloring = BTreeMap::new();
    for start in adj.vertices() {
        if coloring.contains_key(&start) {
            continue;
        }
        coloring.insert(start, Side::One);
        let mut queue = VecDeque::from(vec![start]);
        while let Some(u) = queue.pop_front() {
            let side = coloring[&u];
            for &v in adj.neighbors(u) {
                match coloring.get(&v).copied() {
                    None => {
                        coloring.insert(v, side.opposite());
                        queue.push_back(v);
                    }
                    Some(other) if other == side => {
                        return Bipartition {
                            coloring,
                            conflict: Some(Edge::new(u, v)),
                        };
                    }
                    Some(_) => {}
                }
            }
        }
    }
    Bipartition {
        coloring,
        conflict: None,
    }
}
