use clap::Parser;
use cellpath::{
    config::SearchConfig,
    grid::{Connectivity, DistanceMetric, GridMap},
    search::{EventLog, NoObserver, SearchEngineName, SearchResult, Verbosity},
};
use std::{path::PathBuf, process::ExitCode};
use tracing::{error, info};

#[derive(Parser)]
#[command(version)]
/// Find a path between the `S` and `T` cells of a character map.
struct Cli {
    #[arg(help = "The map file ('.' walkable, '#' blocked, 'S' start, 'T' target)")]
    map: PathBuf,
    #[arg(help = "A TOML config file", short = 'f', long = "config", id = "CONFIG")]
    config: Option<PathBuf>,
    #[arg(
        value_enum,
        help = "The search engine to use",
        short = 'e',
        long = "engine",
        id = "ENGINE"
    )]
    engine: Option<SearchEngineName>,
    #[arg(
        value_enum,
        help = "Which neighbouring cells are reachable in one move",
        short = 'n',
        long = "connectivity",
        id = "CONNECTIVITY"
    )]
    connectivity: Option<Connectivity>,
    #[arg(
        value_enum,
        help = "The distance between two cells",
        short = 'm',
        long = "metric",
        id = "METRIC"
    )]
    metric: Option<DistanceMetric>,
    #[arg(
        help = "Write every search event to this file as JSON",
        long = "events",
        id = "EVENTS"
    )]
    events: Option<PathBuf>,
    #[arg(
        value_enum,
        help = "The verbosity level",
        short = 'v',
        long = "verbosity",
        id = "VERBOSITY"
    )]
    verbosity: Option<Verbosity>,
    #[arg(help = "Whether to use coloured output", short = 'c', long = "colour")]
    colour: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => match SearchConfig::from_path(path) {
            Ok(config) => config,
            Err(e) => {
                eprintln!("{e}");
                return ExitCode::FAILURE;
            }
        },
        None => SearchConfig::default(),
    };
    config.engine = cli.engine.unwrap_or(config.engine);
    config.connectivity = cli.connectivity.unwrap_or(config.connectivity);
    config.metric = cli.metric.unwrap_or(config.metric);
    config.verbosity = cli.verbosity.unwrap_or(config.verbosity);

    tracing_subscriber::fmt()
        .with_env_filter(config.verbosity.env_filter())
        .with_ansi(cli.colour)
        .with_line_number(true)
        .with_writer(std::io::stderr)
        .compact()
        .init();

    match run(&cli, &config) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::from(2),
        Err(e) => {
            error!("{e}");
            ExitCode::FAILURE
        }
    }
}

/// Returns whether a path was found.
fn run(cli: &Cli, config: &SearchConfig) -> Result<bool, Box<dyn std::error::Error>> {
    let text = std::fs::read_to_string(&cli.map)?;
    let map: GridMap = text.parse()?;
    let map = map
        .with_connectivity(config.connectivity)
        .with_metric(config.metric);
    let start = map.start().ok_or("the map has no start cell 'S'")?;
    let target = map.target().ok_or("the map has no target cell 'T'")?;
    info!(
        width = map.width(),
        height = map.height(),
        connectivity = ?map.connectivity(),
        metric = ?map.metric(),
        "loaded map"
    );

    let depth = config.max_reconstruction_depth;
    let result = match &cli.events {
        Some(events_path) => {
            let mut log = EventLog::new();
            let result = config.engine.search(&map, start, target, depth, &mut log)?;
            std::fs::write(events_path, serde_json::to_string_pretty(&log)?)?;
            info!(events = log.len(), "wrote search events");
            result
        }
        None => config.engine.search(&map, start, target, depth, NoObserver)?,
    };

    match result {
        SearchResult::Success(path) => {
            println!("{}", map.render_path(&path));
            println!("Path length: {}", path.len());
            println!("Path cost: {}", path.cost());
            Ok(true)
        }
        SearchResult::NoPath => {
            println!("No path found");
            Ok(false)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn write_map(dir: &tempfile::TempDir, text: &str) -> PathBuf {
        let path = dir.path().join("map.txt");
        fs::write(&path, text).unwrap();
        path
    }

    #[test]
    fn events_written_only_when_requested() {
        let dir = tempfile::tempdir().unwrap();
        let map = write_map(&dir, "S..\n.#.\n..T\n");
        let events = dir.path().join("events.json");

        let cli = Cli::parse_from(["cellpath", map.to_str().unwrap()]);
        assert!(run(&cli, &SearchConfig::default()).unwrap());
        assert!(!events.exists());

        let cli = Cli::parse_from([
            "cellpath",
            map.to_str().unwrap(),
            "--events",
            events.to_str().unwrap(),
        ]);
        assert!(run(&cli, &SearchConfig::default()).unwrap());
        let logged: serde_json::Value =
            serde_json::from_str(&fs::read_to_string(&events).unwrap()).unwrap();
        assert!(!logged.as_array().unwrap().is_empty());
    }

    #[test]
    fn enclosed_target_reports_no_path() {
        let dir = tempfile::tempdir().unwrap();
        let map = write_map(&dir, "S.#.\n..#T\n");
        let cli = Cli::parse_from(["cellpath", map.to_str().unwrap()]);
        assert!(!run(&cli, &SearchConfig::default()).unwrap());
    }
}
