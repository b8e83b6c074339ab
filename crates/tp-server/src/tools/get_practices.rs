//! get_practices — list practices, by id or by the principle they serve.

use serde_json::json;
use tp_protocol::ToolResult;

use super::{CatalogTool, optional_str};
use crate::catalog::{self, PRACTICES, Practice};
use crate::error::{ApiError, ApiResult};

pub struct GetPractices;

impl CatalogTool for GetPractices {
    fn name(&self) -> &str {
        "get_practices"
    }

    fn description(&self) -> &str {
        "List team practices, optionally only those supporting a principle"
    }

    fn parameters_schema(&self) -> serde_json::Value {
        json!({
            "type": "object",
            "properties": {
                "id": {
                    "type": "string",
                    "description": "Practice id"
                },
                "principle": {
                    "type": "string",
                    "description": "Only practices supporting this principle id"
                }
            }
        })
    }

    fn execute(&self, args: &serde_json::Value) -> ApiResult<ToolResult> {
        if let Some(id) = optional_str(args, "id")? {
            let practice = catalog::practice(id)
                .ok_or_else(|| ApiError::NotFound(format!("practice '{id}' not found")))?;
            return Ok(ToolResult::success(
                "get_practices",
                json!({ "practice": practice }),
                practice.name,
            ));
        }

        let practices: Vec<&Practice> = match optional_str(args, "principle")? {
            Some(pid) => {
                let principle = catalog::principle(pid)
                    .ok_or_else(|| ApiError::NotFound(format!("principle '{pid}' not found")))?;
                catalog::practices_for(principle.id)
            }
            None => PRACTICES.iter().collect(),
        };

        let count = practices.len();
        Ok(ToolResult::success(
            "get_practices",
            json!({
                "practices": practices,
                "count": count,
            }),
            format!("{count} practices"),
        ))
    }
}
