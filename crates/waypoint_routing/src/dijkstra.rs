use crate::constants::{DEFAULT_HEAP_CAPACITY, INVALID_NODE};
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

#[derive(Eq, PartialEq, Copy, Clone, Debug)]
struct HeapItem {
    node_id: usize,
    weight: Weight,
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
            .weight
            .cmp(&self.weight)
            .then_with(|| other.node_id.cmp(&self.node_id))
    }
}

struct NodeData {
    weight: Weight,
    settled: bool,
    parent: usize,
}

impl NodeData {
    fn new() -> Self {
        NodeData {
            settled: false,
            weight: Weight::MAX,
            parent: INVALID_NODE,
        }
    }
}

/// Uninformed search over the same graph, settling nodes in order of their
/// distance from the start.
pub struct Dijkstra {
    heap: BinaryHeap<HeapItem>,
    data: FxHashMap<usize, NodeData>,
    debug_visited_nodes: Vec<usize>,
}

impl Dijkstra {
    pub fn new(graph: &SpatialGraph) -> Self {
        let mut data = FxHashMap::default();
        data.reserve(graph.node_count());
        let heap: BinaryHeap<HeapItem> = BinaryHeap::with_capacity(DEFAULT_HEAP_CAPACITY);
        Dijkstra {
            heap,
            data,
            debug_visited_nodes: Vec::new(),
        }
    }

    fn init(&mut self, start: usize) {
        self.heap.clear();
        self.data.clear();
        self.debug_visited_nodes.clear();

        self.heap.push(HeapItem {
            node_id: start,
            weight: Weight::ZERO,
        });
        self.update_node_data(start, Weight::ZERO, INVALID_NODE)
    }

    fn update_node_data(&mut self, node: usize, weight: Weight, parent: usize) {
        let data = self.data.entry(node).or_insert_with(NodeData::new);
        data.weight = weight;
        data.settled = false;
        data.parent = parent;
    }

    #[inline(always)]
    fn set_settled(&mut self, node: usize) {
        self.data.entry(node).or_insert_with(NodeData::new).settled = true
    }

    #[inline(always)]
    fn is_settled(&self, node: usize) -> bool {
        self.data.get(&node).is_some_and(|data| data.settled)
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
            legs.push(RoutingPathLeg::new(
                graph.node_name(parent).to_string(),
                graph.node_name(node).to_string(),
                node_data.weight - self.current_shortest_weight(parent),
            ));
            node = parent;
        }

        legs.reverse();

        RoutingPath::new(graph.node_name(node).to_string(), legs)
    }
}

impl ShortestPathAlgorithm for Dijkstra {
    fn calc_path(
        &mut self,
        graph: &SpatialGraph,
        start: &str,
        end: &str,
        options: Option<ShortestPathOptions>,
    ) -> Result<ShortestPathResult, RoutingError> {
        let stopwatch = Stopwatch::new("dijkstra/calc_path");

        let start = graph
            .node_id(start)
            .ok_or_else(|| RoutingError::UnknownNode(start.to_string()))?;
        let end = graph
            .node_id(end)
            .ok_or_else(|| RoutingError::UnknownNode(end.to_string()))?;

        let options = options.unwrap_or_default();
        let include_debug_info = options.include_debug_info.unwrap_or(false);

        self.init(start);

        let mut iterations = 0;
        let mut nodes_visited = 0;

        while let Some(HeapItem { node_id, weight }) = self.heap.pop() {
            // Node is already settled, skip
            if self.is_settled(node_id) {
                continue;
            }

            // The weight is bigger than the current shortest weight, skip
            if weight > self.current_shortest_weight(node_id) {
                continue;
            }

            iterations += 1;
            if options
                .max_iterations
                .is_some_and(|max_iterations| iterations > max_iterations)
            {
                return Err(RoutingError::IterationLimitExceeded(iterations - 1));
            }

            if include_debug_info {
                self.debug_visited_nodes.push(node_id);
            }

            self.set_settled(node_id);
            if node_id == end {
                break;
            }

            for edge in graph.node_edges(node_id) {
                let adj_node = edge.adj_node();

                if self.is_settled(adj_node) {
                    continue;
                }

                nodes_visited += 1;

                let next_weight = weight.saturating_add(edge.weight());

                if next_weight < self.current_shortest_weight(adj_node) {
                    self.update_node_data(adj_node, next_weight, node_id);
                    self.heap.push(HeapItem {
                        weight: next_weight,
                        node_id: adj_node,
                    });
                }
            }
        }

        debug!(iterations, nodes_visited, "Dijkstra: search finished");
        stopwatch.report(iterations);

        let path = self
            .is_settled(end)
            .then(|| self.build_path(graph, end));

        let debug = include_debug_info.then(|| ShortestPathDebugInfo {
            visited_nodes: self
                .debug_visited_nodes
                .iter()
                .map(|node| graph.node_name(*node).to_string())
                .collect(),
        });

        Ok(ShortestPathResult { path, debug })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{distance::kilometers, test_graph_utils::test_graph};

    #[test]
    fn shortest_path_on_line() {
        let graph = test_graph::create_line_graph();
        let mut dijkstra = Dijkstra::new(&graph);

        let path = dijkstra
            .calc_path(&graph, "C", "A", None)
            .unwrap()
            .path
            .unwrap();

        assert_eq!(path.nodes(), ["C", "B", "A"]);
        assert_eq!(path.distance(), kilometers!(222.4));
    }

    #[test]
    fn unknown_start() {
        let graph = test_graph::create_line_graph();
        let mut dijkstra = Dijkstra::new(&graph);

        assert_eq!(
            dijkstra.calc_path(&graph, "Z", "A", None).unwrap_err(),
            RoutingError::UnknownNode("Z".to_string())
        );
    }

    #[test]
    fn legs_follow_the_path() {
        let graph = test_graph::create_romania_graph();
        let mut dijkstra = Dijkstra::new(&graph);

        let path = dijkstra
            .calc_path(&graph, "Oradea", "Neamt", None)
            .unwrap()
            .path
            .unwrap();

        assert_eq!(path.start(), "Oradea");
        assert_eq!(path.end(), "Neamt");

        for (leg, nodes) in path.legs().iter().zip(path.nodes().windows(2)) {
            assert_eq!(leg.from(), nodes[0]);
            assert_eq!(leg.to(), nodes[1]);
            assert_eq!(Some(leg.distance()), graph.distance(leg.from(), leg.to()));
        }
    }
}
