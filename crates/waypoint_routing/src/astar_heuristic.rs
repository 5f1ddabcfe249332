use crate::graph::{SpatialGraph, Weight};

pub trait AStarHeuristic {
    /// Lower bound of the remaining cost from `node` to `goal`.
    /// `Weight::MAX` means no estimate is available.
    fn estimate(&self, graph: &SpatialGraph, node: usize, goal: usize) -> Weight;
}
