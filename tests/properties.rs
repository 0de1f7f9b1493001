use gtheorems::{
    circuit::{find_eulerian_circuit, reduce_to_center},
    graph::{random_graph, Edge, Graph, RandomMode},
    query::{self, AdjacencyList},
    theorem::{evaluate, TheoremId},
};
use proptest::prelude::*;
use rand::{rngs::StdRng, SeedableRng};

prop_compose! {
    fn any_graph()(num_vertices in 0usize..=15)
        (
            keep in prop::collection::vec(any::<bool>(), num_vertices * num_vertices.saturating_sub(1) / 2),
            num_vertices in Just(num_vertices),
        ) -> Graph
    {
        let pairs = (1..=num_vertices).flat_map(|u| (u + 1..=num_vertices).map(move |v| (u, v)));
        Graph::from_edges(
            num_vertices,
            pairs.zip(keep).filter(|&(_, keep)| keep).map(|(pair, _)| pair),
        )
        .unwrap()
    }
}

prop_compose! {
    fn random_tree()(num_vertices in 0usize..=15, seed in any::<u64>()) -> Graph {
        random_graph(&mut StdRng::seed_from_u64(seed), num_vertices, RandomMode::Tree).unwrap()
    }
}

proptest! {
    #[test]
    fn prop_odd_degree_count_is_even(graph in any_graph()) {
        let degrees = query::degrees(&graph);
        prop_assert_eq!(degrees.values().sum::<usize>(), 2 * graph.num_edges());
        prop_assert_eq!(query::odd_degree_vertices(&graph).len() % 2, 0);
    }

    #[test]
    fn prop_bipartition_round_trip(graph in any_graph()) {
        let bipartition = query::bipartition(&AdjacencyList::of(&graph));
        match bipartition.conflict() {
            None => {
                for edge in graph.edges() {
                    prop_assert_ne!(bipartition.side(edge.u()), bipartition.side(edge.v()));
                }
            }
            Some(edge) => {
                prop_assert!(graph.has_edge(edge.u(), edge.v()));
                prop_assert!(bipartition.side(edge.u()).is_some());
                prop_assert_eq!(bipartition.side(edge.u()), bipartition.side(edge.v()));
            }
        }
    }

    #[test]
    fn prop_tree_iff_connected_with_p_minus_1_edges(graph in any_graph()) {
        prop_assert_eq!(
            query::is_tree(&graph),
            query::is_connected(&graph) && graph.num_edges() + 1 == graph.num_vertices()
        );
    }

    #[test]
    fn prop_tree_mode_yields_trees(tree in random_tree()) {
        prop_assert_eq!(query::is_tree(&tree), tree.num_vertices() > 0);
        if let Some(center) = reduce_to_center(&tree) {
            match center.center() {
                [_] => {}
                [u, v] => {
                    prop_assert!(tree.has_edge(*u, *v));
                }
                other => {
                    prop_assert!(false, "center {:?}", other);
                }
            }
        }
    }

    #[test]
    fn prop_eulerian_circuit(graph in any_graph()) {
        let all_even = query::odd_degree_vertices(&graph).is_empty();
        let eulerian = !graph.is_empty() && query::is_connected(&graph) && all_even;
        match find_eulerian_circuit(&graph) {
            Some(circuit) => {
                prop_assert!(eulerian);
                prop_assert_eq!(circuit.first(), circuit.last());
                let mut used: Vec<_> = circuit
                    .windows(2)
                    .map(|pair| Edge::new(pair[0], pair[1]))
                    .collect();
                used.sort();
                prop_assert_eq!(used, graph.edges().collect::<Vec<_>>());
            }
            None => {
                prop_assert!(!eulerian);
            }
        }
    }

    #[test]
    fn prop_no_theorem_is_contradicted(graph in any_graph()) {
        for &theorem in TheoremId::ALL.iter() {
            let verdict = evaluate(theorem, &graph);
            prop_assert_eq!(verdict.theorem(), theorem);
            prop_assert!(!verdict.to_string().is_empty());
        }
    }
}
