//! Various types shared by the graph store and the analyses.

/// The vertex id type.
///
/// Vertex ids are dense: a graph with `p` vertices uses exactly `1..=p`.
pub type VId = usize;

/// The largest number of vertices a graph may hold.
pub const MAX_VERTICES: usize = 15;
