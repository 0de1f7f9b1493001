use super::{contradiction, Evidence, Outcome, Reason, Selection, Step, TheoremId, TreeSplit, Verdict};
use crate::{
    circuit::reduce_to_center,
    graph::Graph,
    query::{connected_components, shortest_path, AdjacencyList, GraphProperties},
};

/// Any two vertices of a tree are joined by exactly one path.
///
/// With two selected vertices the path between them is the witness.
pub fn unique_path(graph: &Graph, selection: &Selection) -> Verdict {
    let properties = GraphProperties::of(graph);
    if graph.is_empty() {
        return Verdict::new(
            TheoremId::UniquePath,
            Outcome::Inapplicable(Reason::EmptyGraph),
            Evidence::UniquePath {
                properties,
                path: None,
            },
        );
    }
    if !properties.is_tree() {
        return Verdict::new(
            TheoremId::UniquePath,
            Outcome::DoesNotHold,
            Evidence::UniquePath {
                properties,
                path: None,
            },
        );
    }
    let (outcome, path) = match selection.selected_vertices() {
        Some((u, _)) if !graph.contains_vertex(u) => {
            (Outcome::Inapplicable(Reason::UnknownVertex(u)), None)
        }
        Some((_, v)) if !graph.contains_vertex(v) => {
            (Outcome::Inapplicable(Reason::UnknownVertex(v)), None)
        }
        Some((u, v)) => match shortest_path(&AdjacencyList::of(graph), u, v) {
            Some(path) => (Outcome::Holds, Some(path)),
            None => (
                contradiction(TheoremId::UniquePath, "no path between two vertices of a tree"),
                None,
            ),
        },
        None => (Outcome::Holds, None),
    };
    Verdict::new(
        TheoremId::UniquePath,
        outcome,
        Evidence::UniquePath { properties, path },
    )
}

/// A tree on `p` vertices has `p - 1` edges.
///
/// With a selected edge the inductive step is shown: cutting it leaves two subtrees
/// of `m` and `n` vertices, and `(m - 1) + (n - 1) + 1 = p - 1`.
pub fn tree_edges(graph: &Graph, selection: &Selection) -> Verdict {
    let properties = GraphProperties::of(graph);
    let p = properties.num_vertices();
    let verdict = |outcome, split| {
        Verdict::new(
            TheoremId::TreeEdges,
            outcome,
            Evidence::TreeEdges {
                properties: properties.clone(),
                split,
            },
        )
    };
    if graph.is_empty() {
        return verdict(Outcome::Inapplicable(Reason::EmptyGraph), None);
    }
    if !properties.is_tree() {
        return verdict(Outcome::DoesNotHold, None);
    }
    let edge = match selection.selected_edge() {
        Some(edge) => edge,
        None => return verdict(Outcome::Holds, None),
    };
    if let Some(unknown) = [edge.u(), edge.v()]
        .iter()
        .copied()
        .find(|&vid| !graph.contains_vertex(vid))
    {
        return verdict(Outcome::Inapplicable(Reason::UnknownVertex(unknown)), None);
    }
    if !graph.has_edge(edge.u(), edge.v()) {
        return verdict(Outcome::Inapplicable(Reason::NotAnEdge(edge)), None);
    }

    let cut = AdjacencyList::of(graph).without_edge(edge);
    let mut components = connected_components(&cut).into_iter();
    match (components.next(), components.next(), components.next()) {
        (Some(left), Some(right), None) => {
            let split = TreeSplit::new(edge, left, right);
            let outcome = if split.edge_total() == p - 1 {
                Outcome::Holds
            } else {
                contradiction(TheoremId::TreeEdges, "subtree edge counts do not add up")
            };
            verdict(outcome, Some(split))
        }
        _ => verdict(
            contradiction(TheoremId::TreeEdges, "cutting a tree edge must leave two components"),
            None,
        ),
    }
}

/// The center of a tree is one vertex or two adjacent ones, found by stripping all
/// leaves round after round.
pub fn tree_center(graph: &Graph) -> Verdict {
    let center = match reduce_to_center(graph) {
        Some(center) => center,
        None => {
            return Verdict::new(
                TheoremId::TreeCenter,
                Outcome::Inapplicable(Reason::NotATree),
                Evidence::None,
            )
        }
    };
    let outcome = match *center.center() {
        [_] => Outcome::Holds,
        [u, v] if graph.has_edge(u, v) => Outcome::Holds,
        _ => contradiction(TheoremId::TreeCenter, "center is not one or two adjacent vertices"),
    };
    let steps = center
        .rounds()
        .iter()
        .cloned()
        .map(Step::RemoveLeaves)
        .collect();
    Verdict::new(TheoremId::TreeCenter, outcome, Evidence::Center(center)).with_steps(steps)
}
