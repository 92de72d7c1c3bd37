use std::process::ExitCode;

use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use subway_path::config::Config;
use subway_path::network::{Network, PathResponse};

const USAGE: &str = "usage: subway-path [NETWORK_FILE] SOURCE TARGET";

fn main() -> ExitCode {
    let mut config = Config::from_env();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(&config.log_filter))
        .with_writer(std::io::stderr)
        .init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let (source, target) = match args.as_slice() {
        [file, source, target] => {
            config = config.with_network_path(file);
            (source, target)
        }
        [source, target] => (source, target),
        _ => {
            eprintln!("{USAGE}");
            return ExitCode::from(2);
        }
    };

    match run(&config, source, target) {
        Ok(response) => match serde_json::to_string_pretty(&response) {
            Ok(json) => {
                println!("{json}");
                ExitCode::SUCCESS
            }
            Err(e) => {
                error!(error = %e, "failed to serialize response");
                ExitCode::FAILURE
            }
        },
        Err(e) => {
            // Every failure is reported the same way: the query was bad.
            error!(error = %e, "bad request");
            ExitCode::FAILURE
        }
    }
}

fn run(
    config: &Config,
    source: &str,
    target: &str,
) -> Result<PathResponse, Box<dyn std::error::Error>> {
    let network = Network::load(config.require_network_path()?)?;

    let source = network.resolve(source)?;
    let target = network.resolve(target)?;
    info!(source = %source, target = %target, "finding shortest path");

    let path = network.find_path(source.id(), target.id())?;
    Ok(PathResponse::from(&path))
}
