use super::{Graph, Result};
use log::debug;
use rand::Rng;

/// The probability that the unconstrained generator includes a given pair.
pub const EDGE_PROBABILITY: f64 = 0.4;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RandomMode {
    /// Every pair is an edge independently with probability
    /// [`EDGE_PROBABILITY`](constant.EDGE_PROBABILITY.html).
    Unconstrained,
    /// A uniform random recursive tree: vertex `i` joins a uniformly chosen vertex
    /// among `1..i`.
    Tree,
}

/// Generates a random graph on `num_vertices` vertices.
pub fn random_graph<R>(rng: &mut R, num_vertices: usize, mode: RandomMode) -> Result<Graph>
where
    R: Rng + ?Sized,
{
    let mut graph = Graph::with_vertices(num_vertices)?;
    match mode {
        RandomMode::Unconstrained => {
            for u in 1..=num_vertices {
                for v in u + 1..=num_vertices {
                    if rng.random_bool(EDGE_PROBABILITY) {
                        graph.add_edge(u, v)?;
                    }
                }
            }
        }
        RandomMode::Tree => {
            for v in 2..=num_vertices {
                graph.add_edge(v, rng.random_range(1..v))?;
            }
        }
    }
    debug!("random {:?} graph: {}", mode, graph);
    Ok(graph)
}
