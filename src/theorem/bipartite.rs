use super::{Evidence, Outcome, TheoremId, Verdict};
use crate::{
    graph::Graph,
    query::{bipartition, AdjacencyList},
};

/// A graph is bipartite iff it has no odd cycle; a failed 2-coloring names the edge
/// closing one.
pub fn bipartite(graph: &Graph) -> Verdict {
    let bipartition = bipartition(&AdjacencyList::of(graph));
    let outcome = if bipartition.is_bipartite() {
        Outcome::Holds
    } else {
        Outcome::DoesNotHold
    };
    Verdict::new(TheoremId::Bipartite, outcome, Evidence::Bipartition(bipartition))
}
