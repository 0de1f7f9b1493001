//! Error management.

use super::Edge;
use crate::types::{VId, MAX_VERTICES};
use derive_more::Display;

#[derive(Debug, Display, Clone, PartialEq, Eq)]
pub enum Err {
    #[display(fmt = "{} vertices exceed the limit of {}", _0, MAX_VERTICES)]
    TooManyVertices(usize),
    #[display(fmt = "vertex {} does not exist", _0)]
    UnknownVertex(VId),
    #[display(fmt = "self-loop on vertex {}", _0)]
    SelfLoop(VId),
    #[display(fmt = "duplicate edge {}", _0)]
    DuplicateEdge(Edge),
}

impl std::error::Error for Err {}

pub type Result<T> = std::result::Result<T, Err>;
