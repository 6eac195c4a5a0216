//! app-server binary.
//!
//! Wires the lifecycle controller to a demo application router. The
//! router here stands in for whatever application the server hosts;
//! the lifecycle machinery never depends on its contents.

use std::path::PathBuf;
use std::time::Duration;

use axum::routing::get;
use axum::Router;
use clap::Parser;
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use app_server::config::{load_config, ServerConfig};
use app_server::http::Server;
use app_server::lifecycle::Shutdown;

#[derive(Parser, Debug)]
#[command(name = "app-server", about = "HTTP application server")]
struct Args {
    /// Path to a TOML configuration file.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Override the bind address from the config.
    #[arg(long)]
    bind: Option<String>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing subscriber
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "app_server=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let args = Args::parse();

    let mut config = match &args.config {
        Some(path) => load_config(path)?,
        None => ServerConfig::default(),
    };
    if let Some(bind) = args.bind {
        config.bind_address = bind;
    }

    tracing::info!(
        bind_address = %config.bind_address,
        header_read_timeout_secs = config.header_read_timeout_secs,
        shutdown_grace_secs = config.shutdown_grace_secs,
        "configuration loaded"
    );

    let app = Router::new()
        .route("/healthz", get(|| async { "ok" }))
        .layer(TimeoutLayer::new(Duration::from_secs(30)))
        .layer(TraceLayer::new_for_http());

    let shutdown = Shutdown::new();
    let server = Server::new(config);
    server.start(shutdown.subscribe(), app).await?;

    tracing::info!("shutdown complete");
    Ok(())
}
