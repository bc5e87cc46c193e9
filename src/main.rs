use std::path::PathBuf;
use std::sync::Arc;

use clap::Parser;
use tracing::info;

use podfacts::{app, config::Config, AppState, EnvironmentSnapshot, JokeClient};

#[derive(Parser)]
#[command(name = "podfacts")]
#[command(about = "HTTP service exposing host, environment and system facts for container smoke tests")]
struct Cli {
    /// Path to configuration file
    #[arg(short, long, default_value = "/etc/podfacts/config.toml")]
    config: PathBuf,

    /// Port to listen on
    #[arg(short, long)]
    port: Option<u16>,

    /// Enable debug logging
    #[arg(short, long)]
    debug: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Initialize tracing
    let subscriber = tracing_subscriber::fmt()
        .with_max_level(if cli.debug {
            tracing::Level::DEBUG
        } else {
            tracing::Level::INFO
        })
        .finish();

    tracing::subscriber::set_global_default(subscriber).expect("Failed to set tracing subscriber");

    info!("Starting podfacts");

    // Load configuration
    let config = Config::load(&cli.config).await?;
    info!("Configuration loaded from {:?}", cli.config);

    // Override port if provided via CLI
    let port = cli.port.unwrap_or(config.server.port);
    let bind_addr = format!("{}:{}", config.server.host, port);

    info!("Server will bind to: {}", bind_addr);

    // Create application state
    let state = AppState {
        jokes: JokeClient::new(&config.upstream)?,
        env: EnvironmentSnapshot::from_process(),
        config: Arc::new(config),
    };

    // Build the router
    let app = app(state);

    info!("Starting HTTP server on {}", bind_addr);
    let listener = tokio::net::TcpListener::bind(&bind_addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
