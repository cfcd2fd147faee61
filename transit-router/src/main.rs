use std::io::{self, BufRead};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use tracing_subscriber::EnvFilter;

use transit_router::domain::RoutingError;
use transit_router::loader::{self, DuplicateNamePolicy, LoaderConfig, NetworkDocument};
use transit_router::planner::{Algorithm, HeuristicKind, PlannerConfig, TransitRouter};
use transit_router::present::{RouteView, render_routes};

#[derive(Parser, Debug)]
#[command(
    name = "transit-router",
    version,
    about = "Fastest routes between stops of a transit network"
)]
struct Cli {
    /// GTFS stops.txt
    #[arg(long, default_value = "transit_data/stops.txt")]
    stops: PathBuf,

    /// GTFS stop_times.txt
    #[arg(long, default_value = "transit_data/stop_times.txt")]
    stop_times: PathBuf,

    /// Load a JSON network document instead of a GTFS feed.
    #[arg(long)]
    network: Option<PathBuf>,

    /// Origin stop name (one-shot mode; requires --to).
    #[arg(long, requires = "to")]
    from: Option<String>,

    /// Destination stop name (one-shot mode; requires --from).
    #[arg(long, requires = "from")]
    to: Option<String>,

    #[arg(long, value_enum, default_value_t = AlgorithmChoice::Both)]
    algorithm: AlgorithmChoice,

    /// A* estimate: zero or geographic
    #[arg(long, default_value_t = HeuristicKind::Zero)]
    heuristic: HeuristicKind,

    /// Keep platforms as separate stops instead of folding them into stations.
    #[arg(long)]
    no_fold_platforms: bool,

    /// Fail if two stops share a name instead of merging them.
    #[arg(long)]
    reject_duplicate_names: bool,

    /// Print every stop with its outgoing travel times before routing.
    #[arg(long)]
    dump_routes: bool,

    /// Emit routes as JSON on stdout.
    #[arg(long)]
    json: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum AlgorithmChoice {
    Dijkstra,
    Astar,
    Both,
}

impl AlgorithmChoice {
    fn algorithms(self) -> &'static [Algorithm] {
        match self {
            AlgorithmChoice::Dijkstra => &[Algorithm::Dijkstra],
            AlgorithmChoice::Astar => &[Algorithm::AStar],
            AlgorithmChoice::Both => &[Algorithm::AStar, Algorithm::Dijkstra],
        }
    }
}

impl Cli {
    fn duplicate_names(&self) -> DuplicateNamePolicy {
        if self.reject_duplicate_names {
            DuplicateNamePolicy::Reject
        } else {
            DuplicateNamePolicy::Merge
        }
    }

    fn loader_config(&self) -> LoaderConfig {
        LoaderConfig::new(&self.stops, &self.stop_times)
            .with_fold_platforms(!self.no_fold_platforms)
            .with_duplicate_names(self.duplicate_names())
    }

    fn planner_config(&self) -> PlannerConfig {
        PlannerConfig::new(self.heuristic)
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing();

    let router = load(&cli)?;

    if cli.dump_routes {
        for line in render_routes(&router) {
            println!("{line}");
        }
        println!();
    }

    let algorithms = cli.algorithm.algorithms();
    match (&cli.from, &cli.to) {
        (Some(from), Some(to)) => {
            let views = one_shot(&router, from, to, algorithms)?;
            print_views(&views, cli.json)
        }
        _ => interactive(&router, algorithms, cli.json),
    }
}

/// Logs go to stderr so stdout carries only the report.
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn load(cli: &Cli) -> Result<TransitRouter> {
    let planner = cli.planner_config();

    match &cli.network {
        Some(path) => {
            let doc = NetworkDocument::from_path(path)
                .with_context(|| format!("failed to read network from {}", path.display()))?;
            loader::load_network(&doc, cli.duplicate_names(), planner)
                .with_context(|| format!("failed to load network from {}", path.display()))
        }
        None => {
            let config = cli.loader_config();
            loader::load_gtfs(&config, planner).with_context(|| {
                format!(
                    "failed to load GTFS feed from {} and {}",
                    config.stops_path.display(),
                    config.stop_times_path.display()
                )
            })
        }
    }
}

fn route(
    router: &TransitRouter,
    from: &str,
    to: &str,
    algorithms: &[Algorithm],
) -> Result<Vec<RouteView>, RoutingError> {
    algorithms
        .iter()
        .map(|&algorithm| {
            router
                .find_shortest_path(from, to, algorithm)
                .map(|result| RouteView::from_result(router, &result))
        })
        .collect()
}

fn one_shot(
    router: &TransitRouter,
    from: &str,
    to: &str,
    algorithms: &[Algorithm],
) -> Result<Vec<RouteView>> {
    route(router, from, to, algorithms)
        .with_context(|| format!("routing from {from:?} to {to:?} failed"))
}

fn print_views(views: &[RouteView], json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(views)?);
    } else {
        for view in views {
            println!("{view}");
            println!();
        }
    }
    Ok(())
}

fn interactive(router: &TransitRouter, algorithms: &[Algorithm], json: bool) -> Result<()> {
    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    println!("Welcome to the transit router!");
    println!();

    loop {
        let Some(origin) = prompt_stop(router, &mut lines, "Enter your current location:")? else {
            break;
        };
        let Some(destination) = prompt_stop(router, &mut lines, "Enter your destination:")? else {
            break;
        };

        println!();
        match route(router, &origin, &destination, algorithms) {
            Ok(views) => print_views(&views, json)?,
            Err(err) => {
                println!("ERROR: {err}");
                println!();
            }
        }

        println!("Exit application? (y to exit, any other character to find new route)");
        match lines.next().transpose().context("failed to read from stdin")? {
            Some(answer) if answer.trim() != "y" => continue,
            _ => break,
        }
    }

    println!("Exiting application...");
    Ok(())
}

/// Prompt until the user names a known stop. `None` on end of input.
fn prompt_stop(
    router: &TransitRouter,
    lines: &mut impl Iterator<Item = io::Result<String>>,
    prompt: &str,
) -> Result<Option<String>> {
    loop {
        println!("{prompt}");
        let Some(line) = lines.next().transpose().context("failed to read from stdin")? else {
            return Ok(None);
        };
        let name = line.trim();
        if router.stop_exists(name) {
            return Ok(Some(name.to_string()));
        }
        println!("ERROR: This stop does not exist.");
    }
}
