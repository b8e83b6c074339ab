//! get_insights — filtered, sorted, limited view of the insight log.

use async_trait::async_trait;
use serde_json::json;
use tp_protocol::ToolResult;

use crate::error::{InsightError, InsightResult};
use crate::query;
use crate::store::InsightStore;
use crate::types::{InsightTool, QueryParams};

pub struct GetInsights;

#[async_trait]
impl InsightTool for GetInsights {
    fn name(&self) -> &str {
        "get_insights"
    }

    fn description(&self) -> &str {
        "Query logged insights by category and tag, newest or oldest first"
    }

    fn parameters_schema(&self) -> serde_json::Value {
        json!({
            "type": "object",
            "properties": {
                "limit": {
                    "type": "integer",
                    "minimum": 0,
                    "description": "Maximum number of entries, 0 for all (default: 10)",
                    "default": 10
                },
                "category": {
                    "type": "string",
                    "description": "Only entries with this category (case-insensitive)"
                },
                "tag": {
                    "type": "string",
                    "description": "Only entries carrying this tag (case-insensitive)"
                },
                "recent": {
                    "type": "boolean",
                    "description": "Most recent first (default: true)",
                    "default": true
                }
            }
        })
    }

    async fn execute(
        &self,
        args: serde_json::Value,
        store: &dyn InsightStore,
    ) -> InsightResult<ToolResult> {
        let params: QueryParams = if args.is_null() {
            QueryParams::default()
        } else {
            serde_json::from_value(args)
                .map_err(|e| InsightError::validation(format!("invalid query arguments: {e}")))?
        };

        let result = query::query(store, &params).await?;
        let summary = format!(
            "{} of {} insights from {}",
            result.count,
            result.total,
            store.location()
        );
        Ok(ToolResult::success(
            "get_insights",
            serde_json::to_value(&result)?,
            summary,
        ))
    }
}
