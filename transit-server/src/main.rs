use std::process::ExitCode;

use tracing::{error, info};

use transit_server::config::ServerConfig;
use transit_server::logging::init_logger;
use transit_server::network::{Network, seed};
use transit_server::web::{AppState, create_router};

#[tokio::main]
async fn main() -> ExitCode {
    init_logger();

    let config = match ServerConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            error!("invalid configuration: {e}");
            return ExitCode::FAILURE;
        }
    };

    // Load the network from a snapshot if one is configured
    let network = match &config.network_path {
        Some(path) => match Network::load_snapshot(path) {
            Ok(network) => {
                info!(path = %path.display(), "loaded network snapshot");
                network
            }
            Err(e) => {
                error!(path = %path.display(), "failed to load network snapshot: {e}");
                return ExitCode::FAILURE;
            }
        },
        None => seed::mumbai_network(),
    };
    info!(
        stations = network.len(),
        connections = network.connection_count(),
        "network ready"
    );

    let state = AppState::new(network, config.search.clone());
    let app = create_router(state);

    let listener = match tokio::net::TcpListener::bind(config.bind_addr).await {
        Ok(listener) => listener,
        Err(e) => {
            error!(addr = %config.bind_addr, "failed to bind: {e}");
            return ExitCode::FAILURE;
        }
    };

    info!(addr = %config.bind_addr, "transit route server listening");
    info!("  GET /health                         - Health check");
    info!("  GET /api/stations?q=&limit=         - List stations");
    info!("  GET /api/stations/:name/neighbors   - Direct neighbours");
    info!("  GET /api/route?from=&to=            - Quickest route");

    let served = axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await;
    if let Err(e) = served {
        error!("server error: {e}");
        return ExitCode::FAILURE;
    }

    info!("shut down");
    ExitCode::SUCCESS
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        error!("failed to listen for ctrl-c: {e}");
        std::future::pending::<()>().await;
    }
}
