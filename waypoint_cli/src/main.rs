use clap::{Parser, Subcommand};
use mimalloc::MiMalloc;
use waypoint_geocoding::gazetteer::{GazetteerResolver, TAMIL_NADU_REGION};

use crate::route::RouteArgs;

mod network;
mod render;
mod route;

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

#[derive(Parser)]
#[clap(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    #[arg(short, long, global = true)]
    debug: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Find the shortest path between two locations of a road network
    #[command(visible_alias = "r")]
    Route {
        #[command(flatten)]
        args: RouteArgs,
    },
    /// List the locations known to the built-in gazetteer
    Cities,
}

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    tracing_subscriber::fmt()
        .with_max_level(if cli.debug {
            tracing::Level::DEBUG
        } else {
            tracing::Level::INFO
        })
        .init();

    match cli.command {
        Some(Commands::Route { args }) => route::run(args, cli.debug).await?,
        Some(Commands::Cities) => {
            println!("{TAMIL_NADU_REGION}");
            for (name, coordinate) in GazetteerResolver::tamil_nadu().entries() {
                println!("  {name:<16} {:>8.4} {:>8.4}", coordinate.lat, coordinate.lng);
            }
        }
        None => {}
    }

    Ok(())
}
