use anyhow::Context;
use clap::Parser;
use dotenvy::dotenv;
use fournil::router::init_router;
use fournil::state::AppState;
use fournil_config::ServerConfig;
use fournil_observability::{init_metrics, init_tracing, metrics_app};
use tracing::info;

#[derive(Debug, Parser)]
#[command(name = "fournil", version, about = "Fournil back office server")]
struct Args {
    /// Interface to bind, overrides HOST
    #[arg(long)]
    host: Option<String>,
    /// Port to listen on, overrides PORT
    #[arg(long, short)]
    port: Option<u16>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();
    let args = Args::parse();

    init_tracing();

    let mut server_config = ServerConfig::from_env();
    if let Some(host) = args.host {
        server_config.host = host;
    }
    if let Some(port) = args.port {
        server_config.port = port;
    }

    let state = AppState::from_env();
    let mut app = init_router(state);

    if let Some(handle) = init_metrics() {
        app = app.merge(metrics_app(handle));
    }

    let address = server_config.bind_address();
    let listener = tokio::net::TcpListener::bind(&address)
        .await
        .with_context(|| format!("Failed to bind {}", address))?;

    info!(address = %address, "Server running");
    info!("Swagger UI available at http://{}/swagger-ui", address);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to listen for shutdown signal");
    }
}
