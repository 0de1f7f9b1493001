use super::{contradiction, Evidence, Outcome, Reason, TheoremId, Verdict};
use crate::{
    graph::Graph,
    query::{find_triangle, AdjacencyList},
};

const RAMSEY_ORDER: usize = 6;

/// Any graph on six vertices has a triangle, or its complement has one.
pub fn ramsey_r33(graph: &Graph) -> Verdict {
    let p = graph.num_vertices();
    if p != RAMSEY_ORDER {
        return Verdict::new(
            TheoremId::RamseyR33,
            Outcome::Inapplicable(Reason::VertexCount(RAMSEY_ORDER)),
            Evidence::Order { p },
        );
    }
    let found = find_triangle(&AdjacencyList::of(graph))
        .map(|triangle| (triangle, false))
        .or_else(|| {
            find_triangle(&AdjacencyList::complement_of(graph)).map(|triangle| (triangle, true))
        });
    match found {
        Some((triangle, in_complement)) => Verdict::new(
            TheoremId::RamseyR33,
            Outcome::Holds,
            Evidence::Triangle {
                triangle,
                in_complement,
            },
        ),
        None => Verdict::new(
            TheoremId::RamseyR33,
            contradiction(TheoremId::RamseyR33, "no triangle in G or its complement"),
            Evidence::None,
        ),
    }
}
