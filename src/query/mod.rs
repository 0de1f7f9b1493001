//! Structural queries over a graph snapshot.
//!
//! Everything here is a pure function of its arguments: adjacency lists are built
//! from a [`Graph`](../graph/struct.Graph.html) on demand and nothing is cached
//! between calls.

pub use adjacency::AdjacencyList;
pub use bipartite::{bipartition, Bipartition, Side};
pub use components::{connected_components, is_connected, is_tree, GraphProperties};
pub use degree::{degrees, min_degree, odd_degree_vertices};
pub use distance::{bfs_distances, diameter, shortest_path, Distance};
pub use triangle::find_triangle;

mod adjacency;
mod bipartite;
mod components;
mod degree;
mod distance;
mod triangle;
