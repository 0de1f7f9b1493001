use super::{contradiction, require_vertices, Evidence, Outcome, Reason, TheoremId, Verdict};
use crate::{
    graph::Graph,
    query::{self, degrees, odd_degree_vertices},
};

/// Every graph has an even number of vertices of odd degree.
pub fn odd_degree(graph: &Graph) -> Verdict {
    let degrees = degrees(graph);
    let odd = odd_degree_vertices(graph);
    let outcome = if odd.len() % 2 == 0 {
        Outcome::Holds
    } else {
        contradiction(TheoremId::OddDegree, "odd number of odd-degree vertices")
    };
    Verdict::new(TheoremId::OddDegree, outcome, Evidence::Degrees { degrees, odd })
}

/// A graph on `p` vertices with minimum degree above `(p - 1) / 2` is connected.
pub fn min_degree_connect(graph: &Graph) -> Verdict {
    let p = graph.num_vertices();
    let min_degree = query::min_degree(graph).unwrap_or(0);
    let connected = query::is_connected(graph);
    let evidence = Evidence::MinDegree {
        p,
        min_degree,
        connected,
    };
    let outcome = if let Some(outcome) = require_vertices(graph, 2) {
        outcome
    } else if 2 * min_degree <= p - 1 {
        Outcome::Inapplicable(Reason::LowMinDegree)
    } else if connected {
        Outcome::Holds
    } else {
        contradiction(TheoremId::MinDegreeConnect, "high minimum degree but disconnected")
    };
    Verdict::new(TheoremId::MinDegreeConnect, outcome, evidence)
}
