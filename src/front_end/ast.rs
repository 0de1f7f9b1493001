use crate::types::VId;

/// A parsed graph description, not yet checked against the graph invariants.
#[derive(Debug, PartialEq, Default)]
pub struct Ast {
    num_vertices: usize,
    edges: Vec<(VId, VId)>,
}

impl Ast {
    pub fn new(num_vertices: usize, edges: Vec<(VId, VId)>) -> Self {
        Self {
            num_vertices,
            edges,
        }
    }

    pub fn set_num_vertices(&mut self, num_vertices: usize) {
        self.num_vertices = num_vertices;
    }

    pub fn set_edges(&mut self, edges: Vec<(VId, VId)>) {
        self.edges = edges;
    }

    pub fn num_vertices(&self) -> usize {
        self.num_vertices
    }

    /// Edges in the order they were written, orientation preserved.
    pub fn edges(&self) -> &[(VId, VId)] {
        &self.edges
    }
}
