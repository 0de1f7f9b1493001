//! Elementary graph theory theorems on small undirected graphs.

pub mod circuit;
pub mod front_end;
pub mod graph;
pub mod query;
pub mod session;
pub mod theorem;
pub mod types;
