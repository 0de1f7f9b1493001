use gtheorems::{
    front_end::compile,
    graph::{Edge, Graph},
    query::{self, AdjacencyList, Distance, Side},
    session::Session,
    theorem::{evaluate, evaluate_with, Evidence, Outcome, Reason, Selection, Step, TheoremId},
};

const SQUARE: &str = "4: 1-2, 2-3, 3-4, 4-1";

fn assert_circuit(graph: &Graph, circuit: &[usize]) {
    assert_eq!(circuit.first(), circuit.last());
    let mut used: Vec<_> = circuit
        .windows(2)
        .map(|pair| Edge::new(pair[0], pair[1]))
        .collect();
    used.sort();
    assert_eq!(used, graph.edges().collect::<Vec<_>>());
}

#[test]
fn test_square() {
    let graph = compile(SQUARE).unwrap();
    let adj = AdjacencyList::of(&graph);
    assert!(query::degrees(&graph).values().all(|&degree| degree == 2));
    assert!(!query::is_tree(&graph));
    assert!(query::is_connected(&graph));
    assert_eq!(query::diameter(&adj), Distance::Finite(2));
    assert_eq!(
        query::bipartition(&adj).coloring(),
        &vec![(1, Side::One), (2, Side::Two), (3, Side::One), (4, Side::Two)]
            .into_iter()
            .collect()
    );

    let verdict = evaluate(TheoremId::Eulerian, &graph);
    assert!(verdict.holds());
    match verdict.evidence() {
        Evidence::Eulerian {
            circuit: Some(circuit),
            ..
        } => assert_circuit(&graph, circuit),
        evidence => panic!("unexpected evidence {:?}", evidence),
    }
    assert_eq!(verdict.steps().len(), 4);
    assert!(evaluate(TheoremId::Bipartite, &graph).holds());
    assert_eq!(
        evaluate(TheoremId::TreeEdges, &graph).outcome(),
        &Outcome::DoesNotHold
    );
}

#[test]
fn test_ramsey_empty_six() {
    let graph = compile("6:").unwrap();
    assert_eq!(query::find_triangle(&AdjacencyList::of(&graph)), None);
    let verdict = evaluate(TheoremId::RamseyR33, &graph);
    assert!(verdict.holds());
    match verdict.evidence() {
        Evidence::Triangle {
            triangle: [u, v, w],
            in_complement,
        } => {
            assert!(*in_complement);
            assert!(!graph.has_edge(*u, *v) && !graph.has_edge(*u, *w) && !graph.has_edge(*v, *w));
        }
        evidence => panic!("unexpected evidence {:?}", evidence),
    }
}

#[test]
fn test_path_split() {
    let graph = compile("3: 1-2 2-3").unwrap();
    assert!(query::is_tree(&graph));
    let verdict = evaluate_with(
        TheoremId::TreeEdges,
        &graph,
        &Selection::new().edge(Edge::new(1, 2)),
    );
    assert!(verdict.holds());
    match verdict.evidence() {
        Evidence::TreeEdges {
            split: Some(split), ..
        } => {
            assert_eq!(split.sizes(), (1, 2));
            assert_eq!(split.edge_total(), graph.num_vertices() - 1);
        }
        evidence => panic!("unexpected evidence {:?}", evidence),
    }
}

#[test]
fn test_single_vertex() {
    let graph = compile("1").unwrap();
    assert_eq!(query::diameter(&AdjacencyList::of(&graph)), Distance::Finite(0));
    assert!(query::is_tree(&graph));
    for &theorem in &[
        TheoremId::SelfComplementary,
        TheoremId::Diameter,
        TheoremId::ScDiameter,
        TheoremId::GOrComplementConnected,
        TheoremId::MinDegreeConnect,
    ] {
        assert_eq!(
            evaluate(theorem, &graph).outcome(),
            &Outcome::Inapplicable(Reason::TooFewVertices(2))
        );
    }
    for &theorem in TheoremId::ALL.iter() {
        evaluate(theorem, &graph).to_string();
    }
}

#[test]
fn test_session_tree_center() {
    let mut session = Session::with_seed(42);
    session.set_vertex_count(7);
    for &(u, v) in &[(1, 2), (2, 3), (3, 4), (4, 5), (5, 6), (2, 7)] {
        assert_eq!(session.toggle_edge(u, v, true), Ok(true));
    }
    session.select_theorem(TheoremId::TreeCenter);
    let mut playback = session.playback();
    let mut rounds = vec![];
    while let Some(step) = playback.advance(&session) {
        match step {
            Step::RemoveLeaves(round) => rounds.push(round.leaves().to_vec()),
            step => panic!("unexpected step {:?}", step),
        }
    }
    assert_eq!(rounds, [vec![1, 6, 7], vec![2, 5]]);
    assert_eq!(session.evaluate().witness().vertices, [3, 4]);
}

#[test]
fn test_session_reset_and_stale_playback() {
    let mut session = Session::with_seed(5);
    session.set_vertex_count(3);
    session.add_edge(1, 2).unwrap();
    session.add_edge(2, 3).unwrap();
    session.add_edge(3, 1).unwrap();
    session.select_theorem(TheoremId::Eulerian);
    let mut playback = session.playback();
    assert!(playback.advance(&session).is_some());

    assert!(!session.set_vertex_count_input("20"));
    assert!(session.graph().is_empty());
    assert_eq!(playback.advance(&session), None);
    assert_eq!(
        session.evaluate().outcome(),
        &Outcome::Inapplicable(Reason::EmptyGraph)
    );
}

#[test]
fn test_description_round_trip() {
    for description in &["0:", "5:", "4: 1-2 1-4 2-3 3-4", "15: 1-15 7-8"] {
        let graph = compile(description).unwrap();
        assert_eq!(&graph.to_string(), description);
    }
    assert!(compile("16:").is_err());
    assert!(compile("3: 1-2 2-1").is_err());
}
