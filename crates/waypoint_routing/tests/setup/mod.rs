use rand::{Rng, SeedableRng, rngs::StdRng};
use waypoint_routing::{GeoPoint, SpatialGraph};

pub fn create_graph(locations: &[(&str, f64, f64)], roads: &[(&str, &str)]) -> SpatialGraph {
    let mut graph = SpatialGraph::new();

    for &(name, lat, lng) in locations {
        graph.add_node(name, GeoPoint::new(lat, lng));
    }

    for &(from, to) in roads {
        graph.add_edge(from, to).unwrap();
    }

    graph
}

pub fn node_name(prefix: &str, index: usize) -> String {
    format!("{prefix}{index}")
}

/// Scatters `nodes` locations over a 4x4 degree box and connects each of them
/// to `degree` random others.
pub fn create_random_graph(seed: u64, prefix: &str, nodes: usize, degree: usize) -> SpatialGraph {
    let mut graph = SpatialGraph::new();
    add_random_component(&mut graph, &mut StdRng::seed_from_u64(seed), prefix, nodes, degree);
    graph
}

pub fn add_random_component(
    graph: &mut SpatialGraph,
    rng: &mut StdRng,
    prefix: &str,
    nodes: usize,
    degree: usize,
) {
    for i in 0..nodes {
        let lat = rng.random_range(10.0..14.0);
        let lng = rng.random_range(76.0..80.0);
        graph.add_node(node_name(prefix, i), GeoPoint::new(lat, lng));
    }

    for i in 0..nodes {
        for _ in 0..degree {
            let j = rng.random_range(0..nodes);
            if i != j {
                graph
                    .add_edge(&node_name(prefix, i), &node_name(prefix, j))
                    .unwrap();
            }
        }
    }
}

pub fn node_names(graph: &SpatialGraph) -> Vec<String> {
    graph
        .locations()
        .map(|(name, _)| name.to_string())
        .collect()
}

/// Locations along the equator 0.0005 to 0.003 degrees apart, chained in
/// order and joined by `chords` random shortcuts. Roads are a few hundred
/// meters long, so weight rounding matters.
pub fn create_short_road_graph(seed: u64, nodes: usize, chords: usize) -> SpatialGraph {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut graph = SpatialGraph::new();

    let mut lng = 0.0;
    for i in 0..nodes {
        graph.add_node(node_name("N", i), GeoPoint::new(0.0, lng));
        lng += rng.random_range(0.0005..0.003);
    }

    for i in 1..nodes {
        graph
            .add_edge(&node_name("N", i - 1), &node_name("N", i))
            .unwrap();
    }

    for _ in 0..chords {
        let from = rng.random_range(0..nodes);
        let to = rng.random_range(0..nodes);
        if from != to {
            graph
                .add_edge(&node_name("N", from), &node_name("N", to))
                .unwrap();
        }
    }

    graph
}
