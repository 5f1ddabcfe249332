use fxhash::FxHashSet;
use tracing::{debug, warn};
use waypoint_routing::{GeoPoint, SpatialGraph};

use crate::{
    error::ResolveError,
    location_resolver::{LocationQuery, LocationResolver},
};

/// Resolves `query` and adds it to the graph under its name.
///
/// A place the resolver does not know is reported as
/// `ResolveError::UnresolvedLocation` and the graph is left untouched.
pub async fn add_location<R: LocationResolver>(
    graph: &mut SpatialGraph,
    resolver: &R,
    query: &LocationQuery,
) -> Result<GeoPoint, ResolveError> {
    match resolver.resolve(query).await? {
        Some(coordinate) => {
            graph.add_node(query.name.clone(), coordinate);
            Ok(coordinate)
        }
        None => Err(ResolveError::UnresolvedLocation(query.name.clone())),
    }
}

#[derive(Debug, Default)]
pub struct PopulateReport {
    pub added: Vec<String>,
    pub failed: Vec<(String, ResolveError)>,
}

impl PopulateReport {
    pub fn is_complete(&self) -> bool {
        self.failed.is_empty()
    }
}

/// Resolves each distinct name once, in order. Failures are collected and do
/// not stop the remaining lookups.
pub async fn add_locations<'a, R, I>(
    graph: &mut SpatialGraph,
    resolver: &R,
    queries: I,
) -> PopulateReport
where
    R: LocationResolver,
    I: IntoIterator<Item = &'a LocationQuery>,
{
    let mut report = PopulateReport::default();
    let mut seen: FxHashSet<&str> = FxHashSet::default();

    for query in queries {
        if !seen.insert(query.name.as_str()) {
            continue;
        }

        match add_location(graph, resolver, query).await {
            Ok(coordinate) => {
                debug!(%query, ?coordinate, "add_locations: resolved");
                report.added.push(query.name.clone());
            }
            Err(error) => {
                warn!(%query, %error, "add_locations: skipping location");
                report.failed.push((query.name.clone(), error));
            }
        }
    }

    report
}
