//! shift-converter HTTP server.
//!
//! Loads the YAML configuration, then serves the conversion API.

use std::path::PathBuf;

use clap::Parser;
use tracing::{error, info};

use shift_converter::api::{create_router, AppState};
use shift_converter::config::ConfigLoader;

/// Command line arguments.
#[derive(Debug, Parser)]
#[command(name = "shift-converter", version, about)]
struct Args {
    /// Path to the YAML configuration file.
    #[arg(long, env = "SHIFT_CONVERTER_CONFIG", default_value = "./config/converter.yaml")]
    config: PathBuf,

    /// Override the configured bind address.
    #[arg(long, env = "SHIFT_CONVERTER_BIND")]
    bind: Option<String>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    info!("Starting shift-converter v{}", env!("CARGO_PKG_VERSION"));

    let args = Args::parse();
    let loader = match ConfigLoader::load(&args.config) {
        Ok(loader) => loader,
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            return Err(e.into());
        }
    };
    info!("Configuration loaded from {}", args.config.display());

    let bind_address = args
        .bind
        .unwrap_or_else(|| loader.config().server.bind_address.clone());

    let state = AppState::new(loader)?;
    let app = create_router(state);

    let listener = tokio::net::TcpListener::bind(&bind_address).await?;
    info!("shift-converter listening on http://{}", bind_address);

    axum::serve(listener, app).await?;

    Ok(())
}
