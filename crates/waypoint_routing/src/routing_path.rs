use serde::Serialize;

use crate::graph::Weight;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RoutingPathLeg {
    from: String,
    to: String,
    distance: Weight,
}

impl RoutingPathLeg {
    pub fn new(from: String, to: String, distance: Weight) -> RoutingPathLeg {
        RoutingPathLeg { from, to, distance }
    }

    pub fn from(&self) -> &str {
        &self.from
    }

    pub fn to(&self) -> &str {
        &self.to
    }

    pub fn distance(&self) -> Weight {
        self.distance
    }
}

/// Ordered locations from start to goal, both included, with the road
/// taken between each consecutive pair.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RoutingPath {
    nodes: Vec<String>,
    legs: Vec<RoutingPathLeg>,
    distance: Weight,
}

impl RoutingPath {
    pub fn new(start: String, legs: Vec<RoutingPathLeg>) -> RoutingPath {
        let mut nodes = Vec::with_capacity(legs.len() + 1);
        nodes.push(start);
        nodes.extend(legs.iter().map(|leg| leg.to.clone()));

        let distance = legs.iter().map(|leg| leg.distance()).sum();

        RoutingPath {
            nodes,
            legs,
            distance,
        }
    }

    pub fn nodes(&self) -> &[String] {
        &self.nodes
    }

    pub fn legs(&self) -> &[RoutingPathLeg] {
        &self.legs
    }

    pub fn distance(&self) -> Weight {
        self.distance
    }

    pub fn start(&self) -> &str {
        &self.nodes[0]
    }

    pub fn end(&self) -> &str {
        &self.nodes[self.nodes.len() - 1]
    }

    pub fn is_trivial(&self) -> bool {
        self.legs.is_empty() && self.distance == Weight::ZERO
    }
}
