use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Envelope a client POSTs to invoke a tool.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToolCallRequest {
    /// Registered tool name (e.g., "log_insight").
    pub tool: String,
    /// Tool arguments as a JSON object. Missing means `{}`.
    #[serde(default = "empty_arguments")]
    pub arguments: serde_json::Value,
}

fn empty_arguments() -> serde_json::Value {
    serde_json::Value::Object(serde_json::Map::new())
}

/// Envelope returned for a successful dispatch.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToolCallResponse {
    /// Unique request ID (UUIDv7 for time-sortability).
    pub request_id: Uuid,
    /// The tool's own result.
    pub result: ToolResult,
    /// When the call completed.
    pub completed_at: DateTime<Utc>,
}

impl ToolCallResponse {
    pub fn new(result: ToolResult) -> Self {
        Self {
            request_id: Uuid::now_v7(),
            result,
            completed_at: Utc::now(),
        }
    }
}

/// Result of executing a tool.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToolResult {
    /// Tool name that produced this result.
    pub tool_name: String,
    /// Whether the tool execution succeeded.
    pub success: bool,
    /// Structured result data (JSON).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<serde_json::Value>,
    /// Human-readable summary.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
    /// Error message if success is false.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl ToolResult {
    pub fn success(
        tool_name: impl Into<String>,
        data: serde_json::Value,
        summary: impl Into<String>,
    ) -> Self {
        Self {
            tool_name: tool_name.into(),
            success: true,
            data: Some(data),
            summary: Some(summary.into()),
            error: None,
        }
    }
}

/// Advertised metadata for one tool (returned by the tool listing).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToolDescriptor {
    pub name: String,
    pub description: String,
    /// JSON Schema describing accepted arguments.
    pub input_schema: serde_json::Value,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn call_request_defaults_arguments() {
        let req: ToolCallRequest = serde_json::from_str(r#"{"tool":"get_principles"}"#).unwrap();
        assert_eq!(req.tool, "get_principles");
        assert!(req.arguments.as_object().unwrap().is_empty());
    }

    #[test]
    fn success_result_omits_error() {
        let result = ToolResult::success("get_insights", json!({"count": 0}), "0 entries");
        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(json["success"], true);
        assert!(json.get("error").is_none());
        assert_eq!(json["data"]["count"], 0);
    }

    #[test]
    fn response_gets_fresh_request_id() {
        let a = ToolCallResponse::new(ToolResult::success("x", json!({}), ""));
        let b = ToolCallResponse::new(ToolResult::success("x", json!({}), ""));
        assert_ne!(a.request_id, b.request_id);
    }
}
