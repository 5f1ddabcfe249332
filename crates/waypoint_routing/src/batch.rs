use rayon::prelude::*;
use tracing::debug;

use crate::{
    astar::AStar,
    error::RoutingError,
    graph::SpatialGraph,
    routing_path::RoutingPath,
    shortest_path_algorithm::{ShortestPathAlgorithm, ShortestPathOptions},
};

/// Runs independent A* searches over a shared graph in parallel.
///
/// Each worker reuses a single `AStar`. Results are returned in query order.
pub fn find_paths<S>(
    graph: &SpatialGraph,
    queries: &[(S, S)],
    options: Option<ShortestPathOptions>,
) -> Vec<Result<Option<RoutingPath>, RoutingError>>
where
    S: AsRef<str> + Sync,
{
    debug!(queries = queries.len(), "find_paths: starting batch");

    queries
        .par_iter()
        .map_init(
            || AStar::new(graph),
            |astar, (start, goal)| {
                astar
                    .calc_path(graph, start.as_ref(), goal.as_ref(), options)
                    .map(|result| result.path)
            },
        )
        .collect()
}
