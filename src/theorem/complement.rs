//! Theorems relating a graph to its complement.

use super::{contradiction, require_vertices, Evidence, Outcome, Reason, TheoremId, Verdict};
use crate::{
    graph::Graph,
    query::{self, AdjacencyList, Distance},
};

/// Whether `p` vertices admit a self-complementary graph: `p(p - 1) / 2` must be even.
fn admits_self_complement(p: usize) -> bool {
    p % 4 == 0 || p % 4 == 1
}

fn diameters(graph: &Graph) -> (Distance, Distance) {
    (
        query::diameter(&AdjacencyList::of(graph)),
        query::diameter(&AdjacencyList::complement_of(graph)),
    )
}

pub fn self_complementary(graph: &Graph) -> Verdict {
    let p = graph.num_vertices();
    let outcome = require_vertices(graph, 2).unwrap_or_else(|| {
        if admits_self_complement(p) {
            Outcome::Holds
        } else {
            Outcome::DoesNotHold
        }
    });
    Verdict::new(TheoremId::SelfComplementary, outcome, Evidence::Order { p })
}

/// If `diam(G) >= 3` then `diam(G') <= 3`.
pub fn diameter(graph: &Graph) -> Verdict {
    let (diameter, complement) = diameters(graph);
    let evidence = Evidence::Diameters {
        graph: diameter,
        complement,
    };
    let outcome = if let Some(outcome) = require_vertices(graph, 2) {
        outcome
    } else if diameter < Distance::Finite(3) {
        Outcome::Inapplicable(Reason::SmallDiameter)
    } else if complement <= Distance::Finite(3) {
        Outcome::Holds
    } else {
        contradiction(TheoremId::Diameter, "diam(G) >= 3 and diam(G') > 3")
    };
    Verdict::new(TheoremId::Diameter, outcome, evidence)
}

/// A self-complementary graph has diameter 2 or 3.
pub fn sc_diameter(graph: &Graph) -> Verdict {
    let p = graph.num_vertices();
    let diameter = query::diameter(&AdjacencyList::of(graph));
    let outcome = if let Some(outcome) = require_vertices(graph, 2) {
        outcome
    } else if !admits_self_complement(p) {
        Outcome::Inapplicable(Reason::CannotBeSelfComplementary(p))
    } else if diameter == Distance::Finite(2) || diameter == Distance::Finite(3) {
        Outcome::Holds
    } else {
        Outcome::DoesNotHold
    };
    Verdict::new(TheoremId::ScDiameter, outcome, Evidence::Diameter(diameter))
}

/// A graph or its complement is connected.
pub fn g_or_complement_connected(graph: &Graph) -> Verdict {
    let (diameter, complement) = diameters(graph);
    let outcome = require_vertices(graph, 2).unwrap_or_else(|| {
        if diameter.is_finite() || complement.is_finite() {
            Outcome::Holds
        } else {
            contradiction(
                TheoremId::GOrComplementConnected,
                "both G and G' are disconnected",
            )
        }
    });
    Verdict::new(
        TheoremId::GOrComplementConnected,
        outcome,
        Evidence::Diameters {
            graph: diameter,
            complement,
        },
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_path(p: usize) -> Graph {
        Graph::from_edges(p, (1..p).map(|v| (v, v + 1))).unwrap()
    }

    #[test]
    fn test_self_complementary() {
        let expected = vec![
            (2, Outcome::DoesNotHold),
            (3, Outcome::DoesNotHold),
            (4, Outcome::Holds),
            (5, Outcome::Holds),
            (6, Outcome::DoesNotHold),
            (8, Outcome::Holds),
        ];
        for (p, outcome) in expected {
            let graph = Graph::with_vertices(p).unwrap();
            assert_eq!(self_complementary(&graph).outcome(), &outcome, "p = {}", p);
        }
    }

    #[test]
    fn test_diameter() {
        // P4 is self-complementary with diameter 3
        let verdict = diameter(&create_path(4));
        assert!(verdict.holds());
        assert_eq!(
            verdict.evidence(),
            &Evidence::Diameters {
                graph: Distance::Finite(3),
                complement: Distance::Finite(3)
            }
        );

        let disconnected = Graph::from_edges(4, vec![(1, 2)]).unwrap();
        let verdict = diameter(&disconnected);
        assert!(verdict.holds());
        assert_eq!(
            verdict.evidence(),
            &Evidence::Diameters {
                graph: Distance::Infinite,
                complement: Distance::Finite(2)
            }
        );

        let triangle = Graph::from_edges(3, vec![(1, 2), (2, 3), (3, 1)]).unwrap();
        assert_eq!(
            diameter(&triangle).outcome(),
            &Outcome::Inapplicable(Reason::SmallDiameter)
        );
    }

    #[test]
    fn test_sc_diameter() {
        assert!(sc_diameter(&create_path(4)).holds());
        assert_eq!(
            sc_diameter(&create_path(5)).outcome(),
            &Outcome::DoesNotHold
        );
        assert_eq!(
            sc_diameter(&create_path(3)).outcome(),
            &Outcome::Inapplicable(Reason::CannotBeSelfComplementary(3))
        );
    }

    #[test]
    fn test_g_or_complement_connected() {
        let edgeless = Graph::with_vertices(5).unwrap();
        let verdict = g_or_complement_connected(&edgeless);
        assert!(verdict.holds());
        assert_eq!(
            verdict.evidence(),
            &Evidence::Diameters {
                graph: Distance::Infinite,
                complement: Distance::Finite(1)
            }
        );
        assert!(g_or_complement_connected(&create_path(6)).holds());
    }
}
