//! Read-only documents addressed by `process://` URIs.

use std::path::Path;

use tp_insight_log::InsightStore;
use tp_protocol::{
    INSIGHTS_URI, PRACTICES_URI, PRINCIPLES_URI, PROTOCOL_URI, ResourceContent,
    ResourceDescriptor,
};

use crate::catalog::{PRACTICES, PRINCIPLES};
use crate::error::{ApiError, ApiResult};

const JSON: &str = "application/json";
const MARKDOWN: &str = "text/markdown";

/// Every resource the server can read.
pub fn list() -> Vec<ResourceDescriptor> {
    [
        (PRINCIPLES_URI, "principles", "Team principles", JSON),
        (PRACTICES_URI, "practices", "Team practices and the principles they serve", JSON),
        (INSIGHTS_URI, "insights", "Raw insight log", MARKDOWN),
        (PROTOCOL_URI, "protocol", "Team protocol document", MARKDOWN),
    ]
    .into_iter()
    .map(|(uri, name, description, mime_type)| ResourceDescriptor {
        uri: uri.to_string(),
        name: name.to_string(),
        description: description.to_string(),
        mime_type: mime_type.to_string(),
    })
    .collect()
}

/// Read one resource.
pub async fn read(
    uri: &str,
    store: &dyn InsightStore,
    protocol_path: &Path,
) -> ApiResult<ResourceContent> {
    let (mime_type, text) = match uri {
        PRINCIPLES_URI => (JSON, to_json(&PRINCIPLES)?),
        PRACTICES_URI => (JSON, to_json(&PRACTICES)?),
        INSIGHTS_URI => (MARKDOWN, store.read_document().await?.unwrap_or_default()),
        PROTOCOL_URI => (MARKDOWN, read_protocol(protocol_path).await?),
        other => return Err(ApiError::NotFound(format!("resource '{other}' not found"))),
    };
    Ok(ResourceContent {
        uri: uri.to_string(),
        mime_type: mime_type.to_string(),
        text,
    })
}

fn to_json<T: serde::Serialize>(value: &T) -> ApiResult<String> {
    serde_json::to_string_pretty(value).map_err(|e| ApiError::Internal(e.to_string()))
}

async fn read_protocol(path: &Path) -> ApiResult<String> {
    tokio::fs::read_to_string(path).await.map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            ApiError::NotFound(format!("protocol file {} not found", path.display()))
        } else {
            tracing::error!(path = %path.display(), error = %e, "protocol read failed");
            ApiError::Internal(format!("{}: {e}", path.display()))
        }
    })
}
