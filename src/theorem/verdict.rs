use super::TheoremId;
use crate::{
    circuit::{LeafRound, TreeCenter},
    graph::Edge,
    query::{Bipartition, Distance, GraphProperties},
    types::VId,
};
use derive_more::Display;
use std::collections::{BTreeMap, BTreeSet};

/// Why a theorem says nothing about the current graph.
#[derive(Debug, Display, Clone, PartialEq, Eq)]
pub enum Reason {
    #[display(fmt = "the graph is empty")]
    EmptyGraph,
    #[display(fmt = "requires exactly {} vertices", _0)]
    VertexCount(usize),
    #[display(fmt = "requires at least {} vertices", _0)]
    TooFewVertices(usize),
    #[display(fmt = "a graph with {} vertices cannot be self-complementary", _0)]
    CannotBeSelfComplementary(usize),
    #[display(fmt = "requires diam(G) >= 3")]
    SmallDiameter,
    #[display(fmt = "requires a minimum degree above (p-1)/2")]
    LowMinDegree,
    #[display(fmt = "requires a tree")]
    NotATree,
    #[display(fmt = "vertex {} does not exist", _0)]
    UnknownVertex(VId),
    #[display(fmt = "{} is not an edge", _0)]
    NotAnEdge(Edge),
}

#[derive(Debug, Display, Clone, PartialEq, Eq)]
pub enum Outcome {
    #[display(fmt = "holds")]
    Holds,
    #[display(fmt = "does not hold")]
    DoesNotHold,
    #[display(fmt = "inapplicable: {}", _0)]
    Inapplicable(Reason),
}

/// The two subtrees left after cutting one edge of a tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TreeSplit {
    removed: Edge,
    components: [BTreeSet<VId>; 2],
}

impl TreeSplit {
    pub fn new(removed: Edge, left: BTreeSet<VId>, right: BTreeSet<VId>) -> Self {
        Self {
            removed,
            components: [left, right],
        }
    }

    pub fn removed(&self) -> Edge {
        self.removed
    }

    pub fn components(&self) -> &[BTreeSet<VId>; 2] {
        &self.components
    }

    /// The sizes `(m, n)` of both subtrees.
    pub fn sizes(&self) -> (usize, usize) {
        (self.components[0].len(), self.components[1].len())
    }

    /// `(m - 1) + (n - 1) + 1`: the edges of both subtrees plus the removed one.
    pub fn edge_total(&self) -> usize {
        let (m, n) = self.sizes();
        m + n - 1
    }
}

/// Facts backing a verdict.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Evidence {
    None,
    Degrees {
        degrees: BTreeMap<VId, usize>,
        odd: Vec<VId>,
    },
    Bipartition(Bipartition),
    Triangle {
        triangle: [VId; 3],
        in_complement: bool,
    },
    Order {
        p: usize,
    },
    Diameters {
        graph: Distance,
        complement: Distance,
    },
    Diameter(Distance),
    MinDegree {
        p: usize,
        min_degree: usize,
        connected: bool,
    },
    UniquePath {
        properties: GraphProperties,
        path: Option<Vec<VId>>,
    },
    TreeEdges {
        properties: GraphProperties,
        split: Option<TreeSplit>,
    },
    Center(TreeCenter),
    Eulerian {
        odd: Vec<VId>,
        connected: bool,
        circuit: Option<Vec<VId>>,
    },
}

/// One step of an animated proof.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Step {
    RemoveLeaves(LeafRound),
    Traverse { from: VId, to: VId },
}

/// Vertices and edges a renderer should emphasize.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Witness {
    pub vertices: Vec<VId>,
    pub edges: Vec<Edge>,
}

/// The result of evaluating one theorem against one graph.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Verdict {
    theorem: TheoremId,
    outcome: Outcome,
    evidence: Evidence,
    steps: Vec<Step>,
}

impl Verdict {
    pub fn new(theorem: TheoremId, outcome: Outcome, evidence: Evidence) -> Self {
        Self {
            theorem,
            outcome,
            evidence,
            steps: vec![],
        }
    }

    pub fn with_steps(mut self, steps: Vec<Step>) -> Self {
        self.steps = steps;
        self
    }

    pub fn theorem(&self) -> TheoremId {
        self.theorem
    }

    pub fn outcome(&self) -> &Outcome {
        &self.outcome
    }

    pub fn evidence(&self) -> &Evidence {
        &self.evidence
    }

    pub fn steps(&self) -> &[Step] {
        &self.steps
    }

    pub fn holds(&self) -> bool {
        self.outcome == Outcome::Holds
    }

    /// The concrete vertices and edges substantiating the verdict.
    pub fn witness(&self) -> Witness {
        match &self.evidence {
            Evidence::Degrees { odd, .. } => Witness {
                vertices: odd.clone(),
                edges: vec![],
            },
            Evidence::Bipartition(bipartition) => match bipartition.conflict() {
                Some(edge) => Witness {
                    vertices: vec![edge.u(), edge.v()],
                    edges: vec![edge],
                },
                None => Witness::default(),
            },
            &Evidence::Triangle {
                triangle: [u, v, w],
                in_complement,
            } => Witness {
                vertices: vec![u, v, w],
                // complement edges are not drawn
                edges: if in_complement {
                    vec![]
                } else {
                    vec![Edge::new(u, v), Edge::new(u, w), Edge::new(v, w)]
                },
            },
            Evidence::UniquePath {
                path: Some(path), ..
            } => path_witness(path),
            Evidence::TreeEdges {
                split: Some(split), ..
            } => Witness {
                vertices: vec![],
                edges: vec![split.removed()],
            },
            Evidence::Center(center) => Witness {
                vertices: center.center().to_vec(),
                edges: vec![],
            },
            Evidence::Eulerian {
                circuit: Some(circuit),
                ..
            } => path_witness(circuit),
            Evidence::Eulerian { odd, .. } => Witness {
                vertices: odd.clone(),
                edges: vec![],
            },
            _ => Witness::default(),
        }
    }
}

fn path_witness(path: &[VId]) -> Witness {
    let mut vertices = path.to_vec();
    vertices.sort_unstable();
    vertices.dedup();
    Witness {
        vertices,
        edges: path
            .windows(2)
            .map(|pair| Edge::new(pair[0], pair[1]))
            .collect(),
    }
}

/// The user's interactive picks: two vertices for a path, one edge to cut.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Selection {
    vertices: Option<(VId, VId)>,
    edge: Option<Edge>,
}

impl Selection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn vertices(mut self, u: VId, v: VId) -> Self {
        self.vertices = Some((u, v));
        self
    }

    pub fn edge(mut self, edge: Edge) -> Self {
        self.edge = Some(edge);
        self
    }

    pub fn clear_vertices(&mut self) {
        self.vertices = None;
    }

    pub fn selected_vertices(&self) -> Option<(VId, VId)> {
        self.vertices
    }

    pub fn selected_edge(&self) -> Option<Edge> {
        self.edge
    }
}
