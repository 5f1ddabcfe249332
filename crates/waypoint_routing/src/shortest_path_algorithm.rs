use crate::{error::RoutingError, graph::SpatialGraph, routing_path::RoutingPath};

#[derive(Default, Clone, Copy, Debug)]
pub struct ShortestPathOptions {
    pub include_debug_info: Option<bool>,

    /// Upper bound on expanded nodes, for graphs that may be malformed.
    pub max_iterations: Option<usize>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ShortestPathDebugInfo {
    /// Names of the expanded nodes, in expansion order.
    pub visited_nodes: Vec<String>,
}

#[derive(Debug, Clone)]
pub struct ShortestPathResult {
    /// `None` when the frontier was exhausted without reaching the goal.
    pub path: Option<RoutingPath>,
    pub debug: Option<ShortestPathDebugInfo>,
}

pub trait ShortestPathAlgorithm {
    fn calc_path(
        &mut self,
        graph: &SpatialGraph,
        start: &str,
        end: &str,
        options: Option<ShortestPathOptions>,
    ) -> Result<ShortestPathResult, RoutingError>;
}
