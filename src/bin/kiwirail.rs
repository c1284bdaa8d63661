//! CLI entry point for the `kiwirail` command-line tool.

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};

use kiwirail::cli::commands::{self, TripLimit};
use kiwirail::config::{load_config, resolve_graph_source, RailConfig};
use kiwirail::engine::canonical_queries;
use kiwirail::format::parse_route;
use kiwirail::types::{RailError, RailResult, Town};

#[derive(Parser)]
#[command(
    name = "kiwirail",
    about = "kiwirail CLI — route queries over a one-way rail network"
)]
struct Cli {
    /// Output format: "text" or "json" (default from config, else text)
    #[arg(long)]
    format: Option<String>,

    /// Enable debug logging
    #[arg(long)]
    verbose: bool,

    /// Path to a TOML config file
    #[arg(long)]
    config: Option<PathBuf>,

    /// Inline edge list, e.g. "AB5, BC4, CD8"
    #[arg(long)]
    graph: Option<String>,

    /// Path to a file holding the edge list
    #[arg(long)]
    graph_file: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List the towns and routes of the network
    Info,
    /// Distance along an exact route, e.g. A-B-C
    Distance {
        /// Towns in order, dash separated
        route: String,
    },
    /// Count the trips between two towns
    Trips {
        /// Starting town
        from: String,
        /// Destination town
        to: String,
        /// Count trips with at most this many stops
        #[arg(long, conflicts_with_all = ["exact_stops", "below"])]
        max_stops: Option<usize>,
        /// Count trips with exactly this many stops
        #[arg(long, conflicts_with = "below")]
        exact_stops: Option<usize>,
        /// Count trips with a distance strictly below this value
        #[arg(long, allow_negative_numbers = true)]
        below: Option<i64>,
        /// Also list every trip
        #[arg(long)]
        list: bool,
    },
    /// Length of the shortest route between two towns
    Shortest {
        /// Starting town
        from: String,
        /// Destination town
        to: String,
        /// Also print the route itself
        #[arg(long)]
        route: bool,
    },
    /// Answer the configured queries, or the ten canonical ones
    Report,
}

fn main() {
    let cli = Cli::parse();

    let result = run(cli);

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        let code = match &e {
            RailError::Io(_) => 1,
            RailError::Parse { .. } | RailError::Config(_) => 2,
            RailError::SelfLoop(_)
            | RailError::DuplicateEdge { .. }
            | RailError::InvalidWeight { .. }
            | RailError::EmptyTownLabel => 3,
        };
        process::exit(code);
    }
}

fn run(cli: Cli) -> RailResult<()> {
    let config = match &cli.config {
        Some(path) => load_config(path)?,
        None => RailConfig::default(),
    };

    init_logging(cli.verbose, &config.log_level);

    let format = cli.format.as_deref().unwrap_or(&config.format);
    let json = match format {
        "json" => true,
        "text" => false,
        other => {
            return Err(RailError::Config(format!(
                "Unknown output format {other:?}, expected \"text\" or \"json\""
            )))
        }
    };

    let source = resolve_graph_source(cli.graph.as_deref(), cli.graph_file.as_deref(), &config);
    log::debug!("Loading graph from {:?}", source);
    let graph = source.load()?;

    match cli.command {
        Commands::Info => commands::cmd_info(&graph, json),
        Commands::Distance { route } => {
            let towns = parse_route(&route)?;
            commands::cmd_distance(&graph, &towns, json)
        }
        Commands::Trips {
            from,
            to,
            max_stops,
            exact_stops,
            below,
            list,
        } => {
            let limit = match (max_stops, exact_stops, below) {
                (Some(n), _, _) => TripLimit::MaxStops(n),
                (_, Some(n), _) => TripLimit::ExactStops(n),
                (_, _, Some(d)) => TripLimit::DistanceBelow(d),
                _ => {
                    return Err(RailError::Config(
                        "trips needs one of --max-stops, --exact-stops or --below".to_string(),
                    ))
                }
            };
            commands::cmd_trips(&graph, &Town::from(from), &Town::from(to), limit, list, json)
        }
        Commands::Shortest { from, to, route } => {
            commands::cmd_shortest(&graph, &Town::from(from), &Town::from(to), route, json)
        }
        Commands::Report => {
            let queries = if config.queries.is_empty() {
                canonical_queries()
            } else {
                config.queries.clone()
            };
            commands::cmd_report(&graph, &queries, json)
        }
    }
}

/// RUST_LOG wins; otherwise --verbose means debug, else the configured level.
fn init_logging(verbose: bool, level: &str) {
    let default = if verbose { "debug" } else { level };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default))
        .format_target(false)
        .init();
}
