use super::Ast;
use crate::{
    graph::{Err, Graph, Result},
    types::MAX_VERTICES,
};

/// Builds the graph an [`Ast`](struct.Ast.html) describes.
///
/// Fails on more than `MAX_VERTICES` vertices, endpoints outside `1..=p`,
/// self-loops and pairs listed twice in either orientation.
pub fn check(ast: &Ast) -> Result<Graph> {
    if ast.num_vertices() > MAX_VERTICES {
        return Err(Err::TooManyVertices(ast.num_vertices()));
    }
    Graph::from_edges(ast.num_vertices(), ast.edges().iter().copied())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{front_end::parse, graph::Edge};

    #[test]
    fn test_check() {
        let graph = check(&parse("3: 1-2 3-2").unwrap()).unwrap();
        assert_eq!(graph.num_vertices(), 3);
        assert_eq!(
            graph.edges().collect::<Vec<_>>(),
            [Edge::new(1, 2), Edge::new(2, 3)]
        );
    }

    #[test]
    fn test_check_error() {
        assert_eq!(
            check(&parse("16:").unwrap()),
            Err(Err::TooManyVertices(16))
        );
        assert_eq!(
            check(&parse("3: 1-4").unwrap()),
            Err(Err::UnknownVertex(4))
        );
        assert_eq!(
            check(&parse("3: 0-1").unwrap()),
            Err(Err::UnknownVertex(0))
        );
        assert_eq!(check(&parse("3: 2-2").unwrap()), Err(Err::SelfLoop(2)));
        assert_eq!(
            check(&parse("3: 1-2 2-1").unwrap()),
            Err(Err::DuplicateEdge(Edge::new(1, 2)))
        );
    }
}
