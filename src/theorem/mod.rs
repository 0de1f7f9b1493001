//! Theorem evaluators.
//!
//! Each theorem is decided by a pure function of a graph snapshot (and, for the
//! interactive tree theorems, the user's selection). Evaluators never fail: a graph
//! outside a theorem's hypothesis yields an inapplicable [`Verdict`] with a reason.

pub use id::{TheoremId, UnknownTheorem};
pub use verdict::{Evidence, Outcome, Reason, Selection, Step, TreeSplit, Verdict, Witness};

mod bipartite;
mod complement;
mod degree;
mod eulerian;
mod explain;
mod id;
mod ramsey;
mod tree;
mod verdict;

use crate::graph::Graph;
use log::{debug, error};

/// Evaluates `theorem` against `graph` with nothing selected.
pub fn evaluate(theorem: TheoremId, graph: &Graph) -> Verdict {
    evaluate_with(theorem, graph, &Selection::new())
}

pub fn evaluate_with(theorem: TheoremId, graph: &Graph, selection: &Selection) -> Verdict {
    let verdict = match theorem {
        TheoremId::OddDegree => degree::odd_degree(graph),
        TheoremId::Bipartite => bipartite::bipartite(graph),
        TheoremId::RamseyR33 => ramsey::ramsey_r33(graph),
        TheoremId::SelfComplementary => complement::self_complementary(graph),
        TheoremId::Diameter => complement::diameter(graph),
        TheoremId::ScDiameter => complement::sc_diameter(graph),
        TheoremId::GOrComplementConnected => complement::g_or_complement_connected(graph),
        TheoremId::MinDegreeConnect => degree::min_degree_connect(graph),
        TheoremId::UniquePath => tree::unique_path(graph, selection),
        TheoremId::TreeEdges => tree::tree_edges(graph, selection),
        TheoremId::TreeCenter => tree::tree_center(graph),
        TheoremId::Eulerian => eulerian::eulerian(graph),
    };
    debug!(
        "{} on `{}`: {} ({} steps)",
        theorem,
        graph,
        verdict.outcome(),
        verdict.steps().len()
    );
    verdict
}

/// The outcome of a computation that contradicts a proven theorem.
///
/// Panics in debug builds.
fn contradiction(theorem: TheoremId, fact: &str) -> Outcome {
    error!("{} contradicted: {}", theorem, fact);
    if cfg!(debug_assertions) {
        panic!("{} contradicted: {}", theorem, fact);
    }
    Outcome::DoesNotHold
}

/// Applies the common "at least two vertices" hypothesis.
fn require_vertices(graph: &Graph, count: usize) -> Option<Outcome> {
    if graph.num_vertices() < count {
        Some(Outcome::Inapplicable(Reason::TooFewVertices(count)))
    } else {
        None
    }
}
