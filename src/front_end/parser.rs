use super::{error::Result, Ast};
use crate::{graph::Edge, types::VId};
use itertools::Itertools;
use pest::Parser;
use pest_derive::Parser;

pub type GraphRule = Rule;

#[derive(Parser)]
#[grammar = "front_end/grammar.pest"]
struct GraphParser;

/// Parses a description such as `4: 1-2, 2-3, 3-4, 4-1`.
pub fn parse(input: &str) -> Result<Ast> {
    let mut ast = Ast::default();
    for pair in GraphParser::parse(Rule::graph, input)? {
        match pair.as_rule() {
            Rule::count => {
                ast.set_num_vertices(parse_int(pair.into_inner().next().unwrap())?);
            }
            Rule::edges => {
                ast.set_edges(parse_edges(pair)?);
            }
            Rule::EOI => {}
            _ => unreachable!(),
        }
    }
    Ok(ast)
}

/// Parses a single edge such as `2-3`; the endpoints are not checked.
pub fn edge_parse(input: &str) -> Result<Edge> {
    let pair = GraphParser::parse(Rule::one_edge, input)?.next().unwrap();
    let span = pair.as_span();
    let (u, v) = parse_edge(pair)?;
    if u == v {
        return Err(custom_error("self-loop", span));
    }
    Ok(Edge::new(u, v))
}

fn custom_error(message: &str, span: pest::Span) -> pest::error::Error<GraphRule> {
    pest::error::Error::new_from_span(
        pest::error::ErrorVariant::CustomError {
            message: String::from(message),
        },
        span,
    )
}

fn parse_int(pair: pest::iterators::Pair<Rule>) -> Result<usize> {
    pair.as_str()
        .parse()
        .map_err(|_| custom_error("number out of range", pair.as_span()))
}

fn parse_edge(pair: pest::iterators::Pair<Rule>) -> Result<(VId, VId)> {
    let mut pairs = pair.into_inner();
    Ok((
        parse_int(pairs.next().unwrap())?,
        parse_int(pairs.next().unwrap())?,
    ))
}

fn parse_edges(pair: pest::iterators::Pair<Rule>) -> Result<Vec<(VId, VId)>> {
    let mut edges = vec![];
    for (u, v) in pair.into_inner().flat_map(|edge| edge.into_inner()).tuples() {
        match (u.as_rule(), v.as_rule()) {
            (Rule::int, Rule::int) => edges.push((parse_int(u)?, parse_int(v)?)),
            _ => unreachable!(),
        }
    }
    Ok(edges)
}
