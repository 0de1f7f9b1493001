use super::{Edge, Err, Result};
use crate::types::{VId, MAX_VERTICES};
use std::{collections::BTreeSet, ops::RangeInclusive};

/// A simple undirected graph on the vertices `1..=p`.
///
/// Every edge's endpoints exist, there are no self-loops and at most one edge joins
/// any pair of vertices. Mutators keep these invariants and report violations
/// through [`Err`](enum.Err.html) instead of changing the graph.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Graph {
    // `None` displays as the vertex id.
    labels: Vec<Option<String>>,
    edges: BTreeSet<Edge>,
}

impl Graph {
    /// Create a new empty graph.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an edgeless graph with `num_vertices` vertices.
    pub fn with_vertices(num_vertices: usize) -> Result<Self> {
        let mut graph = Self::new();
        graph.set_vertex_count(num_vertices)?;
        Ok(graph)
    }

    /// Create a graph from an edge list.
    ///
    /// Unlike [`add_edge`](#method.add_edge), a repeated pair is an error here.
    pub fn from_edges<I>(num_vertices: usize, edges: I) -> Result<Self>
    where
        I: IntoIterator<Item = (VId, VId)>,
    {
        let mut graph = Self::with_vertices(num_vertices)?;
        for (u, v) in edges {
            if !graph.add_edge(u, v)? {
                return Err(Err::DuplicateEdge(Edge::new(u, v)));
            }
        }
        Ok(graph)
    }

    pub fn num_vertices(&self) -> usize {
        self.labels.len()
    }

    pub fn num_edges(&self) -> usize {
        self.edges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    pub fn vertices(&self) -> RangeInclusive<VId> {
        1..=self.num_vertices()
    }

    pub fn contains_vertex(&self, vid: VId) -> bool {
        vid >= 1 && vid <= self.num_vertices()
    }

    /// Returns the edges in ascending order.
    pub fn edges(&self) -> impl Iterator<Item = Edge> + '_ {
        self.edges.iter().copied()
    }

    pub fn has_edge(&self, u: VId, v: VId) -> bool {
        u != v && self.edges.contains(&Edge::new(u, v))
    }

    pub fn incident_edges(&self, vid: VId) -> impl Iterator<Item = Edge> + '_ {
        self.edges().filter(move |edge| edge.contains(vid))
    }

    pub fn label(&self, vid: VId) -> Option<String> {
        if self.contains_vertex(vid) {
            Some(
                self.labels[vid - 1]
                    .clone()
                    .unwrap_or_else(|| vid.to_string()),
            )
        } else {
            None
        }
    }

    /// Sets the display label of `vid`; a blank label restores the default.
    pub fn set_label(&mut self, vid: VId, label: &str) -> Result<()> {
        self.check_vertex(vid)?;
        let label = label.trim();
        self.labels[vid - 1] = if label.is_empty() {
            None
        } else {
            Some(String::from(label))
        };
        Ok(())
    }

    /// Replaces the graph with an edgeless graph on `num_vertices` vertices.
    pub fn set_vertex_count(&mut self, num_vertices: usize) -> Result<()> {
        if num_vertices > MAX_VERTICES {
            return Err(Err::TooManyVertices(num_vertices));
        }
        self.labels = vec![None; num_vertices];
        self.edges.clear();
        Ok(())
    }

    pub fn clear(&mut self) {
        self.labels.clear();
        self.edges.clear();
    }

    /// Appends a vertex and returns its id.
    pub fn add_vertex(&mut self) -> Result<VId> {
        if self.num_vertices() == MAX_VERTICES {
            return Err(Err::TooManyVertices(MAX_VERTICES + 1));
        }
        self.labels.push(None);
        Ok(self.num_vertices())
    }

    /// Removes `vid` with its incident edges.
    ///
    /// Every vertex above `vid` moves down by one so that the ids stay dense;
    /// custom labels move with their vertex.
    pub fn remove_vertex(&mut self, vid: VId) -> Result<()> {
        self.check_vertex(vid)?;
        let shift = |w: VId| if w > vid { w - 1 } else { w };
        self.edges = self
            .edges
            .iter()
            .filter(|edge| !edge.contains(vid))
            .map(|edge| Edge::new(shift(edge.u()), shift(edge.v())))
            .collect();
        self.labels.remove(vid - 1);
        Ok(())
    }

    /// Adds the edge `u-v`; returns `false` if it was already present.
    pub fn add_edge(&mut self, u: VId, v: VId) -> Result<bool> {
        self.check_pair(u, v)?;
        Ok(self.edges.insert(Edge::new(u, v)))
    }

    /// Removes the edge `u-v`; returns `false` if it was absent.
    pub fn remove_edge(&mut self, u: VId, v: VId) -> Result<bool> {
        self.check_pair(u, v)?;
        Ok(self.edges.remove(&Edge::new(u, v)))
    }
}

// private methods
impl Graph {
    fn check_vertex(&self, vid: VId) -> Result<()> {
        if self.contains_vertex(vid) {
            Ok(())
        } else {
            Err(Err::UnknownVertex(vid))
        }
    }

    fn check_pair(&self, u: VId, v: VId) -> Result<()> {
        self.check_vertex(u)?;
        self.check_vertex(v)?;
        if u == v {
            Err(Err::SelfLoop(u))
        } else {
            Ok(())
        }
    }
}
