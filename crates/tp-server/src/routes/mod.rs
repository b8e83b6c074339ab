//! API route definitions and router builder.

pub mod health;
pub mod metrics;
pub mod resources;
pub mod tools;

use axum::Router;
use axum::routing::{get, post};
use tower_http::compression::CompressionLayer;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::state::AppState;

/// Build the Axum router with all routes and middleware.
pub fn build_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let api = Router::new()
        // Tool endpoints
        .route("/tools", get(tools::list_tools))
        .route("/tools/call", post(tools::call_tool))
        // Resource endpoints
        .route("/resources", get(resources::list_resources))
        .route("/resources/read", post(resources::read_resource))
        // Session metrics
        .route("/metrics", get(metrics::get_metrics))
        .route("/metrics/reset", post(metrics::reset_metrics));

    Router::new()
        .route("/health", get(health::health))
        .nest("/api/v1", api)
        .layer(TraceLayer::new_for_http())
        .layer(CompressionLayer::new())
        .layer(cors)
        .with_state(state)
}
