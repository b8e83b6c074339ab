//! log_insight — append a new insight to the log.

use async_trait::async_trait;
use serde_json::json;
use tp_protocol::ToolResult;

use crate::error::{InsightError, InsightResult};
use crate::store::InsightStore;
use crate::types::{Category, InsightTool};
use crate::writer;

pub struct LogInsight;

#[async_trait]
impl InsightTool for LogInsight {
    fn name(&self) -> &str {
        "log_insight"
    }

    fn description(&self) -> &str {
        "Record a team insight in the append-only insight log"
    }

    fn parameters_schema(&self) -> serde_json::Value {
        json!({
            "type": "object",
            "properties": {
                "insight": {
                    "type": "string",
                    "description": "The insight text"
                },
                "category": {
                    "type": "string",
                    "enum": Category::labels(),
                    "description": "Insight category (default: other)"
                },
                "tags": {
                    "type": "array",
                    "items": { "type": "string" },
                    "description": "Short tags; a comma-separated string is also accepted"
                }
            },
            "required": ["insight"]
        })
    }

    async fn execute(
        &self,
        args: serde_json::Value,
        store: &dyn InsightStore,
    ) -> InsightResult<ToolResult> {
        let insight = args["insight"]
            .as_str()
            .ok_or_else(|| InsightError::validation("missing 'insight' argument"))?;
        let category = match &args["category"] {
            serde_json::Value::Null => None,
            serde_json::Value::String(s) => Some(s.as_str()),
            _ => return Err(InsightError::validation("'category' must be a string")),
        };
        let tags = parse_tags_arg(&args["tags"])?;

        let record = writer::append(store, insight, category, &tags).await?;
        let summary = format!("Logged {} insight for {}", record.category, record.date);
        Ok(ToolResult::success(
            "log_insight",
            serde_json::to_value(&record)?,
            summary,
        ))
    }
}

fn parse_tags_arg(value: &serde_json::Value) -> InsightResult<Vec<String>> {
    match value {
        serde_json::Value::Null => Ok(Vec::new()),
        serde_json::Value::String(s) => Ok(crate::parser::split_tags(s)),
        serde_json::Value::Array(items) => items
            .iter()
            .map(|v| {
                v.as_str()
                    .map(String::from)
                    .ok_or_else(|| InsightError::validation("'tags' must contain only strings"))
            })
            .collect(),
        _ => Err(InsightError::validation(
            "'tags' must be an array of strings",
        )),
    }
}
