use clap::Parser;
use escapegrid::search::{
    grid::{EscapeGrid, Position},
    search_engines::{SearchEngineName, SearchResult},
    validate, Verbosity,
};
use itertools::Itertools;
use std::path::PathBuf;
use strum::IntoEnumIterator;
use tracing::info;

#[derive(Parser)]
#[command(version)]
/// Solve an escape-grid map: find a path from the start cell to the goal cell
/// with the chosen search engine.
struct Cli {
    #[arg(help = "The map file ('.' free, '#' wall, 'S' start, 'G' goal)")]
    map: PathBuf,
    #[arg(
        value_enum,
        help = "The search engine to use",
        short = 'e',
        long = "engine",
        id = "ENGINE",
        default_value_t = SearchEngineName::Astar
    )]
    search_engine_name: SearchEngineName,
    #[arg(
        help = "Run every search engine in sequence instead of a single one",
        long = "all",
        conflicts_with = "ENGINE"
    )]
    all: bool,
    #[arg(help = "Print solutions as JSON", long = "json")]
    json: bool,
    #[arg(
        value_enum,
        help = "The verbosity level",
        short = 'v',
        long = "verbosity",
        id = "VERBOSITY",
        default_value_t = Verbosity::Normal
    )]
    verbosity: Verbosity,
    #[arg(help = "Whether to use coloured output", short = 'c', long = "colour")]
    colour: bool,
}

fn main() {
    let cli = Cli::parse();

    let level: tracing::Level = cli.verbosity.into();
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_ansi(cli.colour)
        .with_writer(std::io::stderr)
        .compact()
        .init();

    let map_text =
        std::fs::read_to_string(&cli.map).expect("Failed to read map file, does it exist?");
    let problem = match EscapeGrid::from_map(&map_text) {
        Ok(problem) => problem,
        Err(err) => {
            eprintln!("Invalid map: {err}");
            std::process::exit(2);
        }
    };

    if cli.all {
        for engine in SearchEngineName::iter() {
            solve(engine, &problem, cli.json);
        }
    } else {
        solve(cli.search_engine_name, &problem, cli.json);
    }
}

fn solve(engine: SearchEngineName, problem: &EscapeGrid, json: bool) {
    info!(%engine, "running search");
    let (result, _statistics) = engine.search(problem);

    match result {
        SearchResult::Success(path) => {
            if let Err(err) = validate(&path, problem) {
                panic!("{engine} returned an invalid path: {err}");
            }
            info!(%engine, cost = path.cost().into_inner(), "path is valid");
            if json {
                let report = serde_json::json!({
                    "engine": engine.to_string(),
                    "cost": path.cost().into_inner(),
                    "length": path.len(),
                    "states": path.states(),
                });
                println!("{report}");
            } else {
                println!(
                    "{engine}: cost {} | {}",
                    path.cost(),
                    path.states().iter().map(Position::to_string).join(" -> ")
                );
            }
        }
        SearchResult::Unsolvable => {
            if json {
                println!(
                    "{}",
                    serde_json::json!({ "engine": engine.to_string(), "solvable": false })
                );
            } else {
                println!("{engine}: no solution found!");
            }
        }
    }
}
