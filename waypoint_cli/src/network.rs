use std::{fs::File, io::BufReader, path::Path};

use serde::Deserialize;
use tracing::{info, warn};
use waypoint_geocoding::{
    LocationQuery, LocationResolver,
    populate::{PopulateReport, add_locations},
};
use waypoint_routing::{GeoPoint, SpatialGraph};

/// A location is either a name to resolve or a name with fixed coordinates.
#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(untagged)]
pub enum NetworkLocation {
    Named(String),
    Fixed { name: String, lat: f64, lng: f64 },
}

impl NetworkLocation {
    pub fn name(&self) -> &str {
        match self {
            NetworkLocation::Named(name) => name,
            NetworkLocation::Fixed { name, .. } => name,
        }
    }
}

#[derive(Deserialize, Debug)]
pub struct NetworkFile {
    /// Appended to every named lookup, e.g. "Tamil Nadu, India".
    #[serde(default)]
    pub region: Option<String>,
    pub locations: Vec<NetworkLocation>,
    #[serde(default)]
    pub roads: Vec<(String, String)>,
}

impl NetworkFile {
    pub fn from_file(path: &Path) -> Result<Self, anyhow::Error> {
        let file = File::open(path)?;
        let network = serde_json::from_reader(BufReader::new(file))?;
        Ok(network)
    }

    fn queries(&self) -> Vec<LocationQuery> {
        self.locations
            .iter()
            .filter_map(|location| match location {
                NetworkLocation::Named(name) => Some(match &self.region {
                    Some(region) => LocationQuery::with_region(name.as_str(), region.as_str()),
                    None => LocationQuery::new(name.as_str()),
                }),
                NetworkLocation::Fixed { .. } => None,
            })
            .collect()
    }
}

#[derive(Debug, Default)]
pub struct NetworkSummary {
    pub unresolved: Vec<String>,
    pub skipped_roads: Vec<(String, String)>,
}

/// Fixed locations are added as given, named ones through `resolver`.
/// Locations that cannot be resolved and roads that cannot be added are
/// skipped and listed in the summary.
pub async fn build_graph<R: LocationResolver>(
    network: &NetworkFile,
    resolver: &R,
) -> (SpatialGraph, NetworkSummary) {
    let mut graph = SpatialGraph::new();

    for location in &network.locations {
        if let NetworkLocation::Fixed { name, lat, lng } = location {
            graph.add_node(name.as_str(), GeoPoint::new(*lat, *lng));
        }
    }

    let PopulateReport { failed, .. } =
        add_locations(&mut graph, resolver, &network.queries()).await;

    let mut summary = NetworkSummary {
        unresolved: failed.into_iter().map(|(name, _)| name).collect(),
        ..Default::default()
    };

    for (from, to) in &network.roads {
        if let Err(error) = graph.add_edge(from, to) {
            warn!(%from, %to, %error, "Skipping road");
            summary.skipped_roads.push((from.clone(), to.clone()));
        }
    }

    info!(
        nodes = graph.node_count(),
        edges = graph.edge_count(),
        "Network loaded"
    );

    (graph, summary)
}
