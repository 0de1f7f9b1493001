//! Error management.

use super::GraphRule;
use crate::graph;
use derive_more::Display;

pub type Result<T> = std::result::Result<T, pest::error::Error<GraphRule>>;

/// Why a description could not be turned into a graph.
#[derive(Debug, Display, PartialEq)]
pub enum Err {
    #[display(fmt = "{}", _0)]
    Parse(pest::error::Error<GraphRule>),
    #[display(fmt = "{}", _0)]
    Graph(graph::Err),
}

impl std::error::Error for Err {}

impl From<pest::error::Error<GraphRule>> for Err {
    fn from(error: pest::error::Error<GraphRule>) -> Self {
        Err::Parse(error)
    }
}

impl From<graph::Err> for Err {
    fn from(error: graph::Err) -> Self {
        Err::Graph(error)
    }
}
