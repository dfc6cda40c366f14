//! `wc-server`: serves the benefit API over HTTP.
//!
//! Usage: `wc-server [CONFIG_PATH]`. The configuration defaults to
//! `config/server.yaml`; log verbosity follows `RUST_LOG` (default `info`).

use std::process;

use tokio::net::TcpListener;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use workers_comp_engine::api::{AppState, create_router};
use workers_comp_engine::config::ConfigLoader;
use workers_comp_engine::tables::rate_table;

const DEFAULT_CONFIG_PATH: &str = "config/server.yaml";

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config_path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| DEFAULT_CONFIG_PATH.to_string());

    let loader = match ConfigLoader::load(&config_path) {
        Ok(loader) => loader,
        Err(e) => {
            error!(path = %config_path, error = %e, "Failed to load configuration");
            process::exit(1);
        }
    };

    let bind_address = loader.server().bind_address.clone();
    let listener = match TcpListener::bind(&bind_address).await {
        Ok(listener) => listener,
        Err(e) => {
            error!(address = %bind_address, error = %e, "Failed to bind listener");
            process::exit(1);
        }
    };

    info!(
        address = %bind_address,
        jurisdictions = rate_table().len(),
        default_jurisdiction = %loader.calculator().default_jurisdiction,
        "Benefit engine listening"
    );

    let router = create_router(AppState::new(loader));
    if let Err(e) = axum::serve(listener, router).await {
        error!(error = %e, "Server terminated");
        process::exit(1);
    }
}
