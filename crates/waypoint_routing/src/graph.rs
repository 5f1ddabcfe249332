use fxhash::FxHashMap;
use tracing::{debug, warn};

use crate::{
    astar::AStar,
    constants::WEIGHT_DECIMALS,
    distance::{Distance, Kilometers},
    error::{GraphError, RoutingError},
    geopoint::GeoPoint,
    routing_path::RoutingPath,
    shortest_path_algorithm::ShortestPathAlgorithm,
};

pub type Weight = Distance<Kilometers>;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct GraphEdge {
    adj_node: usize,
    weight: Weight,
}

impl GraphEdge {
    pub fn adj_node(&self) -> usize {
        self.adj_node
    }

    pub fn weight(&self) -> Weight {
        self.weight
    }
}

/// Named locations connected by undirected roads weighted with their
/// great-circle distance.
///
/// Nodes get dense ids in insertion order and adjacency lists keep insertion
/// order, so iteration and search results are reproducible.
#[derive(Default, Clone, Debug)]
pub struct SpatialGraph {
    names: Vec<String>,
    coordinates: Vec<GeoPoint>,
    index: FxHashMap<String, usize>,
    adjacency_list: Vec<Vec<GraphEdge>>,

    /// Never above the lightest stored road weight.
    lightest_edge: Option<Weight>,
}

fn great_circle_km(from: &GeoPoint, to: &GeoPoint) -> Option<f64> {
    if !from.is_finite() || !to.is_finite() {
        return None;
    }

    let km = from.haversine_distance(to).value() / 1000.0;
    km.is_finite().then_some(km)
}

impl SpatialGraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores the coordinate of `name`, overwriting any previous one.
    ///
    /// When a known node moves, the weights of its roads are recomputed from
    /// the new coordinate on both sides.
    pub fn add_node(&mut self, name: impl Into<String>, coordinate: GeoPoint) -> usize {
        let name = name.into();

        if let Some(&node) = self.index.get(&name) {
            debug!(%name, ?coordinate, "SpatialGraph: overwriting node coordinate");
            self.coordinates[node] = coordinate;
            self.refresh_edge_weights(node);
            return node;
        }

        let node = self.names.len();
        debug!(%name, node, ?coordinate, "SpatialGraph: adding node");
        self.index.insert(name.clone(), node);
        self.names.push(name);
        self.coordinates.push(coordinate);
        self.adjacency_list.push(Vec::new());
        node
    }

    fn refresh_edge_weights(&mut self, node: usize) {
        let adj_nodes = self.adjacency_list[node]
            .iter()
            .map(|edge| edge.adj_node)
            .collect::<Vec<_>>();

        for adj_node in adj_nodes {
            match self.node_distance(node, adj_node) {
                Some(weight) => {
                    self.set_edge_weight(node, adj_node, weight);
                    self.set_edge_weight(adj_node, node, weight);
                }
                None => {
                    warn!(
                        from = self.names[node].as_str(),
                        to = self.names[adj_node].as_str(),
                        "SpatialGraph: dropping road without a computable distance"
                    );
                    self.remove_edge_entry(node, adj_node);
                    self.remove_edge_entry(adj_node, node);
                }
            }
        }
    }

    fn remove_edge_entry(&mut self, node: usize, adj_node: usize) {
        self.adjacency_list[node].retain(|edge| edge.adj_node != adj_node);
    }

    /// Great-circle distance between two named nodes, rounded to 2 decimals
    /// of a kilometer. `None` when either node is unknown.
    pub fn distance(&self, from: &str, to: &str) -> Option<Weight> {
        let from = self.node_id(from)?;
        let to = self.node_id(to)?;
        self.node_distance(from, to)
    }

    pub fn node_distance(&self, from: usize, to: usize) -> Option<Weight> {
        let km = self.straight_line_km(from, to)?;
        Some(Weight::from(km).round(WEIGHT_DECIMALS))
    }

    /// Unrounded great-circle distance in kilometers.
    pub fn straight_line_km(&self, from: usize, to: usize) -> Option<f64> {
        great_circle_km(self.coordinates.get(from)?, self.coordinates.get(to)?)
    }

    /// A lower bound on every road weight, `None` before the first road.
    pub fn lightest_edge(&self) -> Option<Weight> {
        self.lightest_edge
    }

    /// Connects two existing nodes in both directions.
    ///
    /// Adding an existing road again updates its weight in place. Nothing is
    /// stored when the call fails.
    pub fn add_edge(&mut self, from: &str, to: &str) -> Result<Weight, GraphError> {
        let from_node = self
            .node_id(from)
            .ok_or_else(|| GraphError::UnknownNode(from.to_string()))?;
        let to_node = self
            .node_id(to)
            .ok_or_else(|| GraphError::UnknownNode(to.to_string()))?;

        let malformed = || GraphError::MalformedEdge {
            from: from.to_string(),
            to: to.to_string(),
        };

        if from_node == to_node {
            return Err(malformed());
        }

        let weight = self.node_distance(from_node, to_node).ok_or_else(malformed)?;

        self.set_edge_weight(from_node, to_node, weight);
        self.set_edge_weight(to_node, from_node, weight);

        debug!(from, to, %weight, "SpatialGraph: adding edge");

        Ok(weight)
    }

    fn set_edge_weight(&mut self, node: usize, adj_node: usize, weight: Weight) {
        self.lightest_edge = Some(
            self.lightest_edge
                .map_or(weight, |lightest| lightest.min(weight)),
        );

        let edges = &mut self.adjacency_list[node];
        match edges.iter_mut().find(|edge| edge.adj_node == adj_node) {
            Some(edge) => edge.weight = weight,
            None => edges.push(GraphEdge { adj_node, weight }),
        }
    }

    /// Roads leaving `name` in insertion order. Empty for unknown or isolated
    /// nodes.
    pub fn neighbors<'a>(
        &'a self,
        name: &str,
    ) -> impl Iterator<Item = (&'a str, Weight)> + use<'a> {
        let edges = self
            .node_id(name)
            .map(|node| self.node_edges(node))
            .unwrap_or_default();

        edges
            .iter()
            .map(move |edge| (self.names[edge.adj_node].as_str(), edge.weight))
    }

    pub fn node_edges(&self, node: usize) -> &[GraphEdge] {
        &self.adjacency_list[node]
    }

    pub fn node_id(&self, name: &str) -> Option<usize> {
        self.index.get(name).copied()
    }

    pub fn node_name(&self, node: usize) -> &str {
        &self.names[node]
    }

    pub fn node_geometry(&self, node: usize) -> &GeoPoint {
        &self.coordinates[node]
    }

    pub fn contains(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    pub fn coordinate(&self, name: &str) -> Option<&GeoPoint> {
        self.node_id(name).map(|node| &self.coordinates[node])
    }

    pub fn node_count(&self) -> usize {
        self.names.len()
    }

    pub fn edge_count(&self) -> usize {
        self.adjacency_list.iter().map(Vec::len).sum::<usize>() / 2
    }

    /// Every location with its coordinate, in insertion order.
    pub fn locations(&self) -> impl Iterator<Item = (&str, &GeoPoint)> {
        self.names
            .iter()
            .map(String::as_str)
            .zip(self.coordinates.iter())
    }

    /// Every road once, as `(from, to, weight)` with `from` added before `to`.
    pub fn edges(&self) -> impl Iterator<Item = (&str, &str, Weight)> {
        self.adjacency_list
            .iter()
            .enumerate()
            .flat_map(move |(node, edges)| {
                edges
                    .iter()
                    .filter(move |edge| node < edge.adj_node)
                    .map(move |edge| {
                        (
                            self.names[node].as_str(),
                            self.names[edge.adj_node].as_str(),
                            edge.weight,
                        )
                    })
            })
    }

    /// Lowest-cost path between two locations using A* with the great-circle
    /// heuristic. `Ok(None)` when the locations are not connected.
    pub fn find_path(&self, start: &str, goal: &str) -> Result<Option<RoutingPath>, RoutingError> {
        let mut astar = AStar::new(self);
        let result = astar.calc_path(self, start, goal, None)?;
        Ok(result.path)
    }
}
