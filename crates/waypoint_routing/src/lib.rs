pub mod astar;
pub mod astar_heuristic;
pub mod batch;
mod constants;
pub mod dijkstra;
pub mod distance;
pub mod error;
pub mod geopoint;
pub mod graph;
pub mod routing_path;
pub mod shortest_path_algorithm;
pub mod stopwatch;

#[cfg(test)]
pub(crate) mod test_graph_utils;

pub use astar::AStar;
pub use dijkstra::Dijkstra;
pub use distance::{Distance, Kilometers, Meters};
pub use error::{GraphError, RoutingError};
pub use geopoint::GeoPoint;
pub use graph::{SpatialGraph, Weight};
pub use routing_path::RoutingPath;
pub use shortest_path_algorithm::{ShortestPathAlgorithm, ShortestPathOptions, ShortestPathResult};
