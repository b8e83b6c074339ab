//! Resource listing and read endpoints.

use axum::Json;
use axum::extract::State;
use tp_protocol::{ResourceContent, ResourceDescriptor, ResourceReadRequest};

use crate::error::ApiResult;
use crate::resources;
use crate::state::AppState;

/// GET /api/v1/resources — every readable resource.
pub async fn list_resources() -> Json<Vec<ResourceDescriptor>> {
    Json(resources::list())
}

/// POST /api/v1/resources/read — read one resource by URI.
pub async fn read_resource(
    State(state): State<AppState>,
    Json(req): Json<ResourceReadRequest>,
) -> ApiResult<Json<ResourceContent>> {
    let content = resources::read(
        &req.uri,
        state.store.as_ref(),
        &state.config.protocol_path,
    )
    .await?;
    state.metrics.write().await.record_resource_read(&req.uri);
    tracing::debug!(uri = %req.uri, bytes = content.text.len(), "resource read");
    Ok(Json(content))
}
