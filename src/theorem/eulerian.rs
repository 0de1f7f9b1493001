use super::{Evidence, Outcome, Reason, Step, TheoremId, Verdict};
use crate::{
    circuit::find_eulerian_circuit,
    graph::Graph,
    query::{is_connected, odd_degree_vertices},
};

/// A connected graph has an Eulerian circuit iff every degree is even.
pub fn eulerian(graph: &Graph) -> Verdict {
    let odd = odd_degree_vertices(graph);
    let connected = is_connected(graph);
    if graph.is_empty() {
        return Verdict::new(
            TheoremId::Eulerian,
            Outcome::Inapplicable(Reason::EmptyGraph),
            Evidence::Eulerian {
                odd,
                connected,
                circuit: None,
            },
        );
    }
    let circuit = find_eulerian_circuit(graph);
    let steps = circuit
        .iter()
        .flat_map(|circuit| circuit.windows(2))
        .map(|pair| Step::Traverse {
            from: pair[0],
            to: pair[1],
        })
        .collect();
    let outcome = if circuit.is_some() {
        Outcome::Holds
    } else {
        Outcome::DoesNotHold
    };
    Verdict::new(
        TheoremId::Eulerian,
        outcome,
        Evidence::Eulerian {
            odd,
            connected,
            circuit,
        },
    )
    .with_steps(steps)
}
