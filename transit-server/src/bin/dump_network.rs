//! Write the built-in network to a JSON snapshot.
//!
//! Usage: `dump_network [PATH]` (defaults to `network.json`).

use std::path::PathBuf;
use std::process::ExitCode;

use tracing::{error, info};

use transit_server::logging::init_logger;
use transit_server::network::seed;

fn main() -> ExitCode {
    init_logger();

    let path = std::env::args_os()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("network.json"));

    let network = seed::mumbai_network();
    match network.save_snapshot(&path) {
        Ok(()) => {
            info!(
                path = %path.display(),
                stations = network.len(),
                connections = network.connection_count(),
                "wrote network snapshot"
            );
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!(path = %path.display(), "failed to write snapshot: {e}");
            ExitCode::FAILURE
        }
    }
}
