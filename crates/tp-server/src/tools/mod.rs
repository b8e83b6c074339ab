//! Catalog tools and the unified tool registry.

pub mod check_alignment;
pub mod get_practices;
pub mod get_principles;
pub mod registry;

use tp_protocol::ToolResult;

use crate::error::ApiResult;

pub use check_alignment::CheckAlignment;
pub use get_practices::GetPractices;
pub use get_principles::GetPrinciples;
pub use registry::{ToolKind, ToolRegistry};

/// A tool answered from the static catalog. No I/O, so no async.
pub trait CatalogTool: Send + Sync {
    /// Tool name (e.g., "get_principles").
    fn name(&self) -> &str;

    /// Human-readable description.
    fn description(&self) -> &str;

    /// JSON Schema describing accepted arguments.
    fn parameters_schema(&self) -> serde_json::Value;

    fn execute(&self, args: &serde_json::Value) -> ApiResult<ToolResult>;
}

/// Every catalog tool, in registration order.
pub fn all_tools() -> Vec<Box<dyn CatalogTool>> {
    vec![
        Box::new(GetPrinciples),
        Box::new(GetPractices),
        Box::new(CheckAlignment),
    ]
}

/// Optional string argument; present but not a string is a bad request.
pub(crate) fn optional_str<'a>(
    args: &'a serde_json::Value,
    key: &str,
) -> ApiResult<Option<&'a str>> {
    match &args[key] {
        serde_json::Value::Null => Ok(None),
        serde_json::Value::String(s) => Ok(Some(s.as_str())),
        _ => Err(crate::error::ApiError::BadRequest(format!(
            "'{key}' must be a string"
        ))),
    }
}
