//! The graph store.

pub use display::AdjacencyMatrix;
pub use edge::Edge;
pub use error::{Err, Result};
pub use graph::Graph;
pub use random::{random_graph, RandomMode, EDGE_PROBABILITY};

mod display;
mod edge;
mod error;
mod graph;
mod random;
