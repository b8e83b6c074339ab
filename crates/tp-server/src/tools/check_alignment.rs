//! check_alignment — score free text against the principles.

use serde_json::json;
use tp_protocol::ToolResult;

use super::{CatalogTool, optional_str};
use crate::alignment;
use crate::catalog::{self, PRINCIPLES};
use crate::error::{ApiError, ApiResult};

pub struct CheckAlignment;

impl CatalogTool for CheckAlignment {
    fn name(&self) -> &str {
        "check_alignment"
    }

    fn description(&self) -> &str {
        "Estimate how well a piece of text lines up with the team's principles"
    }

    fn parameters_schema(&self) -> serde_json::Value {
        json!({
            "type": "object",
            "properties": {
                "text": {
                    "type": "string",
                    "description": "Plan, decision or insight to check"
                },
                "principle": {
                    "type": "string",
                    "description": "Only score against this principle id"
                }
            },
            "required": ["text"]
        })
    }

    fn execute(&self, args: &serde_json::Value) -> ApiResult<ToolResult> {
        let text = optional_str(args, "text")?
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .ok_or_else(|| ApiError::BadRequest("missing 'text' argument".into()))?;

        let scores = match optional_str(args, "principle")? {
            Some(pid) => {
                let principle = catalog::principle(pid)
                    .ok_or_else(|| ApiError::NotFound(format!("principle '{pid}' not found")))?;
                vec![alignment::score(text, principle)]
            }
            None => alignment::rank(text, PRINCIPLES),
        };

        let summary = match scores.first() {
            Some(best) if best.score > 0 => {
                format!("Best match: {} ({}%)", best.principle_name, best.score)
            }
            _ => "No overlap with any principle".to_string(),
        };

        Ok(ToolResult::success(
            "check_alignment",
            json!({
                "scores": scores,
                "best_match": scores.first().filter(|s| s.score > 0).map(|s| s.principle_id),
            }),
            summary,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ranks_all_principles() {
        let result = CheckAlignment
            .execute(&json!({"text": "pair early and ask for review before polishing"}))
            .unwrap();
        let data = result.data.unwrap();
        assert_eq!(data["scores"].as_array().unwrap().len(), PRINCIPLES.len());
        assert_eq!(data["best_match"], "collaborate-early");
        assert!(result.summary.unwrap().contains("Collaborate Early"));
    }

    #[test]
    fn single_principle() {
        let data = CheckAlignment
            .execute(&json!({"text": "steady pace", "principle": "sustainable-pace"}))
            .unwrap()
            .data
            .unwrap();
        let scores = data["scores"].as_array().unwrap();
        assert_eq!(scores.len(), 1);
        assert!(scores[0]["score"].as_u64().unwrap() > 0);
    }

    #[test]
    fn no_overlap_has_no_best_match() {
        let result = CheckAlignment.execute(&json!({"text": "zebra quokka"})).unwrap();
        assert!(result.data.unwrap()["best_match"].is_null());
        assert_eq!(result.summary.unwrap(), "No overlap with any principle");
    }

    #[test]
    fn empty_text_bad_request() {
        let err = CheckAlignment.execute(&json!({"text": "  "})).unwrap_err();
        assert!(matches!(err, ApiError::BadRequest(_)));
        let err = CheckAlignment.execute(&json!({})).unwrap_err();
        assert!(matches!(err, ApiError::BadRequest(_)));
    }

    #[test]
    fn unknown_principle_not_found() {
        let err = CheckAlignment
            .execute(&json!({"text": "x", "principle": "nope"}))
            .unwrap_err();
        assert!(matches!(err, ApiError::NotFound(_)));
    }
}
