use std::io;
use std::process::ExitCode;

use tracing_subscriber::EnvFilter;

use cricket_cli::{Console, ConsoleConfig};

fn main() -> ExitCode {
    // stdout carries the game transcript; diagnostics go to stderr
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let config = ConsoleConfig::load();
    tracing::debug!(?config, "Darts cricket starting");

    let console = Console::new(io::stdin().lock(), io::stdout().lock(), config);
    match console.run() {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("Console I/O failed: {e}");
            ExitCode::FAILURE
        },
    }
}
