//! Constructors of ordered vertex sequences: Eulerian circuits and tree-center
//! reductions.

pub use center::{reduce_to_center, LeafRound, TreeCenter};
pub use eulerian::find_eulerian_circuit;

mod center;
mod eulerian;
