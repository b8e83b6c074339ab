//! Tool listing and dispatch endpoints.

use axum::Json;
use axum::extract::State;
use tp_protocol::{ToolCallRequest, ToolCallResponse, ToolDescriptor};

use crate::error::ApiResult;
use crate::metrics::UNKNOWN_TOOL;
use crate::state::AppState;

/// GET /api/v1/tools — tools advertised at the configured engagement level.
pub async fn list_tools(State(state): State<AppState>) -> Json<Vec<ToolDescriptor>> {
    Json(state.registry.advertised(state.config.engagement_level))
}

/// POST /api/v1/tools/call — run one tool.
pub async fn call_tool(
    State(state): State<AppState>,
    Json(req): Json<ToolCallRequest>,
) -> ApiResult<Json<ToolCallResponse>> {
    // Unregistered names share one key so clients can't grow the maps.
    let key = match state.registry.lookup(&req.tool) {
        Some(_) => req.tool.as_str(),
        None => UNKNOWN_TOOL,
    };
    state.metrics.write().await.record_tool_call(key);

    match state
        .registry
        .execute(&req.tool, req.arguments, state.store.as_ref())
        .await
    {
        Ok(result) => {
            let response = ToolCallResponse::new(result);
            tracing::info!(
                tool = %req.tool,
                request_id = %response.request_id,
                "tool call completed"
            );
            Ok(Json(response))
        }
        Err(e) => {
            state.metrics.write().await.record_tool_error(key);
            tracing::warn!(tool = %req.tool, error = %e, "tool call failed");
            Err(e)
        }
    }
}
