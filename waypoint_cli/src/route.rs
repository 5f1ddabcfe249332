use std::path::PathBuf;

use anyhow::bail;
use clap::{Args, ValueEnum};
use serde::Serialize;
use tracing::{info, warn};
use waypoint_geocoding::{
    cache::{CachedResolver, cache_folder_from_env},
    gazetteer::GazetteerResolver,
    nominatim::{NominatimParams, NominatimResolver},
};
use waypoint_routing::{
    AStar, Dijkstra, RoutingPath, ShortestPathAlgorithm, ShortestPathOptions, ShortestPathResult,
    SpatialGraph, shortest_path_algorithm::ShortestPathDebugInfo,
};

use crate::{
    network::{NetworkFile, NetworkSummary, build_graph},
    render::render_network,
};

#[derive(Clone, Copy, Debug, Default, ValueEnum)]
pub enum ResolverKind {
    /// Built-in table of Tamil Nadu cities, no network access
    #[default]
    Gazetteer,
    /// OpenStreetMap Nominatim search API
    Nominatim,
}

#[derive(Clone, Copy, Debug, Default, ValueEnum)]
pub enum AlgorithmKind {
    #[default]
    #[value(name = "astar")]
    AStar,
    Dijkstra,
}

#[derive(Args)]
pub struct RouteArgs {
    /// JSON file listing locations and roads
    #[arg(short, long)]
    network: PathBuf,

    #[arg(short, long)]
    from: String,

    #[arg(short, long)]
    to: String,

    #[arg(long, value_enum, default_value_t = ResolverKind::Gazetteer)]
    resolver: ResolverKind,

    #[arg(long, value_enum, default_value_t = AlgorithmKind::AStar)]
    algorithm: AlgorithmKind,

    /// Abort the search after expanding this many locations
    #[arg(long)]
    max_iterations: Option<usize>,

    /// Write the network and the path as GeoJSON to this file
    #[arg(long)]
    geojson: Option<PathBuf>,

    /// Print the result as JSON
    #[arg(long)]
    json: bool,
}

#[derive(Serialize)]
struct RouteOutput<'a> {
    from: &'a str,
    to: &'a str,
    path: Option<&'a RoutingPath>,
    visited_nodes: Option<&'a [String]>,
}

async fn load_graph(
    network: &NetworkFile,
    resolver: ResolverKind,
) -> Result<(SpatialGraph, NetworkSummary), anyhow::Error> {
    let loaded = match resolver {
        ResolverKind::Gazetteer => build_graph(network, &GazetteerResolver::tamil_nadu()).await,
        ResolverKind::Nominatim => {
            let nominatim = NominatimResolver::new(NominatimParams::from_env())?;

            match cache_folder_from_env() {
                Some(folder) => {
                    info!("Caching geocoding results in {:?}", folder);
                    build_graph(network, &CachedResolver::new(nominatim, folder)?).await
                }
                None => build_graph(network, &nominatim).await,
            }
        }
    };

    Ok(loaded)
}

fn ensure_routable(
    graph: &SpatialGraph,
    network: &NetworkFile,
    summary: &NetworkSummary,
    name: &str,
) -> Result<(), anyhow::Error> {
    if graph.contains(name) {
        return Ok(());
    }

    if summary.unresolved.iter().any(|unresolved| unresolved == name) {
        bail!("Location {name} could not be resolved");
    }

    if !network.locations.iter().any(|location| location.name() == name) {
        bail!("Location {name} is not part of the network");
    }

    Ok(())
}

fn visited_summary(debug_info: &ShortestPathDebugInfo) -> String {
    format!(
        "Visited {} locations: {}",
        debug_info.visited_nodes.len(),
        debug_info.visited_nodes.join(", ")
    )
}

pub async fn run(args: RouteArgs, include_debug_info: bool) -> Result<(), anyhow::Error> {
    info!("Loading network {:?}", args.network);
    let network = NetworkFile::from_file(&args.network)?;
    let (graph, summary) = load_graph(&network, args.resolver).await?;

    if !summary.unresolved.is_empty() {
        warn!("Unresolved locations: {}", summary.unresolved.join(", "));
    }

    ensure_routable(&graph, &network, &summary, &args.from)?;
    ensure_routable(&graph, &network, &summary, &args.to)?;

    let options = ShortestPathOptions {
        include_debug_info: Some(include_debug_info),
        max_iterations: args.max_iterations,
    };

    let ShortestPathResult {
        path,
        debug: debug_info,
    } = match args.algorithm {
        AlgorithmKind::AStar => {
            AStar::new(&graph).calc_path(&graph, &args.from, &args.to, Some(options))?
        }
        AlgorithmKind::Dijkstra => {
            Dijkstra::new(&graph).calc_path(&graph, &args.from, &args.to, Some(options))?
        }
    };

    if args.json {
        let output = RouteOutput {
            from: &args.from,
            to: &args.to,
            path: path.as_ref(),
            visited_nodes: debug_info
                .as_ref()
                .map(|debug_info| debug_info.visited_nodes.as_slice()),
        };
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else {
        match &path {
            Some(path) => {
                println!("{}", path.nodes().join(" → "));
                println!("Total distance: {}", path.distance());
            }
            None => println!("No path found from {} to {}", args.from, args.to),
        }

        if let Some(debug_info) = &debug_info {
            info!("{}", visited_summary(debug_info));
        }
    }

    if let Some(out) = args.geojson {
        if let Some(parent) = out.parent() {
            std::fs::create_dir_all(parent)?;
        }

        std::fs::write(&out, render_network(&graph, path.as_ref()).to_string())?;
        info!("GeoJSON written to {:?}", out);
    }

    Ok(())
}
