//! Plain-text explanations of verdicts.

use super::{Evidence, Outcome, Step, Verdict};
use itertools::Itertools;
use std::fmt;

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Step::RemoveLeaves(round) => write!(
                f,
                "remove {} leaf node(s): {}",
                round.leaves().len(),
                round.leaves().iter().join(", ")
            ),
            Step::Traverse { from, to } => write!(f, "{} -> {}", from, to),
        }
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{} ({}): {}", self.theorem().title(), self.theorem(), self.outcome())?;
        match self.evidence() {
            Evidence::None => {}
            Evidence::Degrees { degrees, odd } => {
                writeln!(
                    f,
                    "degrees: {}",
                    degrees.iter().map(|(v, d)| format!("{}:{}", v, d)).join(" ")
                )?;
                writeln!(f, "nodes with an odd degree: {} [{}]", odd.len(), odd.iter().join(", "))?;
            }
            Evidence::Bipartition(bipartition) => match bipartition.conflict() {
                None => writeln!(
                    f,
                    "groups: {}",
                    bipartition
                        .coloring()
                        .iter()
                        .map(|(v, side)| format!("{}:{}", v, side))
                        .join(" ")
                )?,
                Some(edge) => writeln!(
                    f,
                    "nodes {} and {} are adjacent but forced into the same group, so an odd cycle exists",
                    edge.u(),
                    edge.v()
                )?,
            },
            Evidence::Triangle {
                triangle,
                in_complement,
            } => writeln!(
                f,
                "nodes {} form a triangle in {}",
                triangle.iter().join(", "),
                if *in_complement { "G'" } else { "G" }
            )?,
            Evidence::Order { p } => writeln!(f, "p = {}, p mod 4 = {}", p, p % 4)?,
            Evidence::Diameters { graph, complement } => {
                writeln!(f, "diam(G) = {}, diam(G') = {}", graph, complement)?
            }
            Evidence::Diameter(diameter) => writeln!(f, "diam(G) = {}", diameter)?,
            Evidence::MinDegree {
                p,
                min_degree,
                connected,
            } => {
                let connectivity = if *connected { "connected" } else { "disconnected" };
                if *p < 2 {
                    writeln!(f, "{}", connectivity)?;
                } else {
                    writeln!(
                        f,
                        "min degree = {}, (p-1)/2 = {}, {}",
                        min_degree,
                        (*p as f64 - 1.0) / 2.0,
                        connectivity
                    )?;
                }
            }
            Evidence::UniquePath { properties, path } => {
                writeln!(
                    f,
                    "p = {}, q = {}, components = {}",
                    properties.num_vertices(),
                    properties.num_edges(),
                    properties.components().len()
                )?;
                if !properties.is_connected() {
                    writeln!(f, "the graph is disconnected")?;
                } else if !properties.is_tree() {
                    writeln!(f, "the graph contains a cycle")?;
                }
                if let Some(path) = path {
                    writeln!(f, "path: {}", path.iter().join(" -> "))?;
                }
            }
            Evidence::TreeEdges { properties, split } => {
                writeln!(
                    f,
                    "p = {}, q = {}, p - 1 = {}",
                    properties.num_vertices(),
                    properties.num_edges(),
                    properties.num_vertices().saturating_sub(1)
                )?;
                if let Some(split) = split {
                    let (m, n) = split.sizes();
                    writeln!(
                        f,
                        "removing {} leaves subtrees {{{}}} and {{{}}}",
                        split.removed(),
                        split.components()[0].iter().join(", "),
                        split.components()[1].iter().join(", ")
                    )?;
                    writeln!(
                        f,
                        "({} - 1) + ({} - 1) + 1 = {}",
                        m,
                        n,
                        split.edge_total()
                    )?;
                }
            }
            Evidence::Center(center) => {
                writeln!(f, "center: {}", center.center().iter().join(", "))?
            }
            Evidence::Eulerian {
                odd,
                connected,
                circuit,
            } => match circuit {
                Some(circuit) => writeln!(f, "circuit: {}", circuit.iter().join(" -> "))?,
                None if !connected => writeln!(f, "the graph must be connected")?,
                None => writeln!(
                    f,
                    "all vertices must have an even degree; odd: {}",
                    odd.iter().join(", ")
                )?,
            },
        }
        if self.outcome() != &Outcome::Holds {
            return Ok(());
        }
        for (i, step) in self.steps().iter().enumerate() {
            writeln!(f, "step {}: {}", i + 1, step)?;
        }
        Ok(())
    }
}
