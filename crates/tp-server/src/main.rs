//! Team-process tool server.
//!
//! Serves principles, practices, the insight log and the protocol document
//! to local clients over a small JSON API.

use tokio::net::TcpListener;
use tracing_subscriber::EnvFilter;

use tp_server::config::ServerConfig;
use tp_server::routes;
use tp_server::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .init();

    tracing::info!(version = env!("CARGO_PKG_VERSION"), "tp-server starting");

    // ── Load config ─────────────────────────────────────────────
    let config_path = std::env::args().nth(1).or_else(|| std::env::var("TP_CONFIG").ok());
    let config = ServerConfig::load(config_path.as_deref())?;
    tracing::info!(
        insights_path = %config.insights_path.display(),
        protocol_path = %config.protocol_path.display(),
        engagement_level = %config.engagement_level,
        "config loaded"
    );

    let addr = config.bind_addr();
    let state = AppState::new(config);
    tracing::info!(tool_count = state.registry.len(), "tool registry initialized");

    let app = routes::build_router(state);

    let listener = TcpListener::bind(&addr).await?;
    tracing::info!(addr = %addr, "listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(async {
            if let Err(e) = tokio::signal::ctrl_c().await {
                tracing::error!(error = %e, "failed to listen for shutdown signal");
            }
            tracing::info!("shutdown signal received");
        })
        .await?;

    tracing::info!("tp-server stopped");
    Ok(())
}
