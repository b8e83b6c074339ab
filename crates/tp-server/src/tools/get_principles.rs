//! get_principles — list team principles, or fetch one by id.

use serde_json::json;
use tp_protocol::ToolResult;

use super::{CatalogTool, optional_str};
use crate::catalog::{self, PRINCIPLES};
use crate::error::{ApiError, ApiResult};

pub struct GetPrinciples;

impl CatalogTool for GetPrinciples {
    fn name(&self) -> &str {
        "get_principles"
    }

    fn description(&self) -> &str {
        "List the team's principles, or fetch one by id"
    }

    fn parameters_schema(&self) -> serde_json::Value {
        json!({
            "type": "object",
            "properties": {
                "id": {
                    "type": "string",
                    "enum": PRINCIPLES.iter().map(|p| p.id).collect::<Vec<_>>(),
                    "description": "Principle id (all principles if omitted)"
                }
            }
        })
    }

    fn execute(&self, args: &serde_json::Value) -> ApiResult<ToolResult> {
        match optional_str(args, "id")? {
            Some(id) => {
                let principle = catalog::principle(id)
                    .ok_or_else(|| ApiError::NotFound(format!("principle '{id}' not found")))?;
                let practices: Vec<_> = catalog::practices_for(principle.id)
                    .iter()
                    .map(|p| p.id)
                    .collect();
                Ok(ToolResult::success(
                    "get_principles",
                    json!({
                        "principle": principle,
                        "practices": practices,
                    }),
                    principle.name,
                ))
            }
            None => Ok(ToolResult::success(
                "get_principles",
                json!({
                    "principles": PRINCIPLES,
                    "count": PRINCIPLES.len(),
                }),
                format!("{} principles", PRINCIPLES.len()),
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lists_all() {
        let result = GetPrinciples.execute(&json!({})).unwrap();
        let data = result.data.unwrap();
        assert_eq!(data["count"], PRINCIPLES.len());
        assert_eq!(data["principles"][0]["id"], "ship-small");
    }

    #[test]
    fn fetches_one_with_practices() {
        let result = GetPrinciples.execute(&json!({"id": "Learn-Openly"})).unwrap();
        let data = result.data.unwrap();
        assert_eq!(data["principle"]["name"], "Learn Openly");
        let practices = data["practices"].as_array().unwrap();
        assert!(practices.contains(&json!("insight-logging")));
    }

    #[test]
    fn unknown_id_not_found() {
        let err = GetPrinciples.execute(&json!({"id": "move-fast"})).unwrap_err();
        assert!(matches!(err, ApiError::NotFound(_)));
    }

    #[test]
    fn non_string_id_bad_request() {
        let err = GetPrinciples.execute(&json!({"id": 3})).unwrap_err();
        assert!(matches!(err, ApiError::BadRequest(_)));
    }
}
