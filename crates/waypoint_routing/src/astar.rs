use crate::astar_heuristic::AStarHeuristic;
use crate::constants::{
    DEFAULT_HEAP_CAPACITY, HEURISTIC_TOLERANCE, INVALID_NODE, WEIGHT_ROUNDING_ERROR_KM,
};
use crate::error::RoutingError;
use crate::graph::{SpatialGraph, Weight};
use crate::routing_path::{RoutingPath, RoutingPathLeg};
use crate::shortest_path_algorithm::{
    ShortestPathAlgorithm, ShortestPathDebugInfo, ShortestPathOptions, ShortestPathResult,
};
use crate::stopwatch::Stopwatch;
use fxhash::FxHashMap;
use std::cmp::Ordering;
use std::collections::BinaryHeap;
use tracing::debug;

/// https://en.wikipedia.org/wiki/A*_search_algorithm

#[derive(Eq, PartialEq, Copy, Clone, Debug)]
struct HeapItem {
    node_id: usize,

    /// g_score is the current cheapest weight from start to node "node_id"
    g_score: Weight,

    /// f_score = g_score + h_score, with h_score being the heuristic value from node_id to the end
    f_score: Weight,
}

impl PartialOrd for HeapItem {
    fn partial_cmp(&self, other: &HeapItem) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for HeapItem {
    fn cmp(&self, other: &Self) -> Ordering {
        // Flip weight to make this a min-heap
        other
            .f_score
            .cmp(&self.f_score)
            .then_with(|| other.g_score.cmp(&self.g_score))
            .then_with(|| other.node_id.cmp(&self.node_id))
    }
}

struct NodeData {
    weight: Weight,
    parent: usize,
}

/// Straight-line distance to the goal, scaled to stay below rounded weights.
///
/// A road of unrounded length `d` weighs at least `d - 0.005` km. With `w` the
/// lightest road, every road therefore weighs at least `d * w / (w + 0.005)`,
/// so scaling by that factor keeps the estimate admissible and consistent.
///
/// A node whose distance cannot be computed gets an infinite estimate: it is
/// only reached through exact road costs and never prioritized.
pub struct HaversineHeuristic;

impl AStarHeuristic for HaversineHeuristic {
    fn estimate(&self, graph: &SpatialGraph, node: usize, goal: usize) -> Weight {
        let Some(km) = graph.straight_line_km(node, goal) else {
            return Weight::MAX;
        };

        let Some(lightest) = graph.lightest_edge() else {
            return Weight::ZERO;
        };

        let lightest = lightest.value();
        let factor =
            lightest / (lightest + WEIGHT_ROUNDING_ERROR_KM) * (1.0 - HEURISTIC_TOLERANCE);

        Weight::from(km * factor)
    }
}

pub struct AStar<H: AStarHeuristic> {
    heap: BinaryHeap<HeapItem>,
    data: FxHashMap<usize, NodeData>,

    debug_visited_nodes: Option<Vec<usize>>,

    heuristic: H,
}

impl<H: AStarHeuristic> AStar<H> {
    pub fn with_heuristic(graph: &SpatialGraph, heuristic: H) -> AStar<H> {
        let mut data = FxHashMap::default();
        data.reserve(graph.node_count());
        let heap: BinaryHeap<HeapItem> = BinaryHeap::with_capacity(DEFAULT_HEAP_CAPACITY);
        AStar {
            data,
            debug_visited_nodes: None,
            heap,
            heuristic,
        }
    }

    fn init(&mut self, graph: &SpatialGraph, start: usize, end: usize) {
        self.heap.clear();
        self.data.clear();
        self.debug_visited_nodes = None;

        let h_score = self.heuristic.estimate(graph, start, end);
        self.heap.push(HeapItem {
            node_id: start,
            g_score: Weight::ZERO,
            f_score: h_score,
        });
        self.update_node_data(start, Weight::ZERO, INVALID_NODE)
    }

    fn update_node_data(&mut self, node: usize, weight: Weight, parent: usize) {
        self.data.insert(node, NodeData { weight, parent });
    }

    #[inline(always)]
    fn current_shortest_weight(&self, node: usize) -> Weight {
        self.data.get(&node).map_or(Weight::MAX, |data| data.weight)
    }

    fn build_path(&self, graph: &SpatialGraph, end: usize) -> RoutingPath {
        let mut legs: Vec<RoutingPathLeg> = Vec::with_capacity(32);

        let mut node = end;

        while let Some(node_data) = self.data.get(&node) {
            if node_data.parent == INVALID_NODE {
                break;
            }

            let parent = node_data.parent;
            let distance = node_data.weight - self.current_shortest_weight(parent);

            legs.push(RoutingPathLeg::new(
                graph.node_name(parent).to_string(),
                graph.node_name(node).to_string(),
                distance,
            ));
            node = parent;
        }

        legs.reverse();

        RoutingPath::new(graph.node_name(node).to_string(), legs)
    }

    fn add_visited_node(&mut self, node: usize) {
        let debug_visited_nodes = self.debug_visited_nodes.get_or_insert_with(Vec::new);
        debug_visited_nodes.push(node);
    }

    fn debug_info(&self, graph: &SpatialGraph) -> ShortestPathDebugInfo {
        ShortestPathDebugInfo {
            visited_nodes: self
                .debug_visited_nodes
                .as_deref()
                .unwrap_or_default()
                .iter()
                .map(|node_id| graph.node_name(*node_id).to_string())
                .collect(),
        }
    }
}

impl<H: AStarHeuristic> ShortestPathAlgorithm for AStar<H> {
    fn calc_path(
        &mut self,
        graph: &SpatialGraph,
        start: &str,
        end: &str,
        options: Option<ShortestPathOptions>,
    ) -> Result<ShortestPathResult, RoutingError> {
        let stopwatch = Stopwatch::new("astar/calc_path");

        let start = graph
            .node_id(start)
            .ok_or_else(|| RoutingError::UnknownNode(start.to_string()))?;
        let end = graph
            .node_id(end)
            .ok_or_else(|| RoutingError::UnknownNode(end.to_string()))?;

        let options = options.unwrap_or_default();
        let include_debug_info = options.include_debug_info.unwrap_or(false);

        self.init(graph, start, end);

        let mut iterations = 0;
        let mut found = false;

        while let Some(HeapItem {
            node_id, g_score, ..
        }) = self.heap.pop()
        {
            // A cheaper entry for this node was pushed after this one, skip
            if g_score > self.current_shortest_weight(node_id) {
                continue;
            }

            iterations += 1;
            if options
                .max_iterations
                .is_some_and(|max_iterations| iterations > max_iterations)
            {
                debug!(iterations, "AStar: iteration limit reached");
                return Err(RoutingError::IterationLimitExceeded(iterations - 1));
            }

            if include_debug_info {
                self.add_visited_node(node_id);
            }

            if node_id == end {
                found = true;
                break;
            }

            for edge in graph.node_edges(node_id) {
                let adj_node = edge.adj_node();
                let next_weight = g_score.saturating_add(edge.weight());

                // Only strict improvements are relaxed
                if next_weight < self.current_shortest_weight(adj_node) {
                    self.update_node_data(adj_node, next_weight, node_id);
                    let h_score = self.heuristic.estimate(graph, adj_node, end);

                    self.heap.push(HeapItem {
                        g_score: next_weight,
                        f_score: next_weight.saturating_add(h_score),
                        node_id: adj_node,
                    });
                }
            }
        }

        debug!(iterations, found, "AStar: search finished");
        stopwatch.report(iterations);

        Ok(ShortestPathResult {
            path: found.then(|| self.build_path(graph, end)),
            debug: include_debug_info.then(|| self.debug_info(graph)),
        })
    }
}

impl AStar<HaversineHeuristic> {
    pub fn new(graph: &SpatialGraph) -> AStar<HaversineHeuristic> {
        Self::with_heuristic(graph, HaversineHeuristic)
    }
}
