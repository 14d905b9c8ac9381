use std::process::ExitCode;

use metro_planner::network::seed::demo_network;
use metro_planner::planner::{PathResult, Planner, SearchConfig};
use tracing::warn;
use tracing_subscriber::EnvFilter;

/// Environment variable overriding the transfer penalty (minutes).
const TRANSFER_PENALTY_VAR: &str = "METRO_TRANSFER_PENALTY";

fn search_config() -> SearchConfig {
    match std::env::var(TRANSFER_PENALTY_VAR) {
        Ok(raw) => match raw.trim().parse() {
            Ok(mins) => SearchConfig::new(mins),
            Err(e) => {
                warn!(value = %raw, error = %e, "Ignoring invalid {TRANSFER_PENALTY_VAR}");
                SearchConfig::default()
            }
        },
        Err(_) => SearchConfig::default(),
    }
}

fn main() -> Result<ExitCode, Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let graph = demo_network()?;
    let config = search_config();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let [source, dest] = args.as_slice() else {
        eprintln!("Usage: metro-planner <SOURCE> <DEST>");
        eprintln!();
        eprintln!("Stops:");
        let mut stops: Vec<_> = graph.stops().collect();
        stops.sort_by(|a, b| a.id.cmp(&b.id));
        for stop in stops {
            eprintln!("  {:<4} {}", stop.id, stop.name);
        }
        eprintln!();
        eprintln!("Lines:");
        for route in graph.routes() {
            let path: Vec<_> = route.stops.iter().map(|s| s.as_str()).collect();
            eprintln!("  {:<4} {:<10} {}", route.id, route.color, path.join(" - "));
        }
        return Ok(ExitCode::from(2));
    };

    let result = PathResult::from(Planner::new(&graph, &config).find(source, dest));
    println!("{}", serde_json::to_string_pretty(&result)?);

    Ok(ExitCode::SUCCESS)
}
