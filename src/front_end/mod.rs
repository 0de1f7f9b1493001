//! The graph description format: `<p>: <u>-<v> <u>-<v> ...`.
//!
//! Edges may be separated by whitespace or commas and the edge list may be empty,
//! so `6:` and `6` both describe six isolated vertices. A graph's `Display` writes
//! the same format back, without custom vertex labels.

pub use ast::Ast;
pub use checker::check;
pub use parser::{edge_parse, parse};

pub(crate) use parser::GraphRule;

pub mod error;

mod ast;
mod checker;
mod parser;

use crate::graph::Graph;

/// Parses and checks a description in one go.
pub fn compile(input: &str) -> std::result::Result<Graph, error::Err> {
    let ast = parse(input)?;
    Ok(check(&ast)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph;

    #[test]
    fn test_compile() {
        let graph = compile("4: 1-2, 2-3, 3-4, 4-1").unwrap();
        assert_eq!(graph.num_edges(), 4);
        assert_eq!(graph.to_string(), "4: 1-2 1-4 2-3 3-4");
        assert_eq!(compile(&graph.to_string()), Ok(graph));
    }

    #[test]
    fn test_compile_error() {
        assert!(matches!(compile("4: 1-"), Err(error::Err::Parse(_))));
        assert_eq!(
            compile("2: 1-3"),
            Err(error::Err::Graph(graph::Err::UnknownVertex(3)))
        );
    }
}
