//! Core insight log types and the InsightTool trait.

use async_trait::async_trait;
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use tp_protocol::ToolResult;

use crate::error::{InsightError, InsightResult};

/// Date format used in entry headers (`MM/DD/YYYY`).
pub const DATE_FORMAT: &str = "%m/%d/%Y";

// ── Category ──────────────────────────────────────────────────

/// Fixed label set accepted when appending an insight.
///
/// Parsed entries keep their category as free text, so a hand-edited log
/// may contain labels outside this set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Spirit,
    Code,
    Process,
    Collaboration,
    Learning,
    #[default]
    Other,
}

impl Category {
    pub const ALL: [Category; 6] = [
        Self::Spirit,
        Self::Code,
        Self::Process,
        Self::Collaboration,
        Self::Learning,
        Self::Other,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Spirit => "spirit",
            Self::Code => "code",
            Self::Process => "process",
            Self::Collaboration => "collaboration",
            Self::Learning => "learning",
            Self::Other => "other",
        }
    }

    /// All labels, in declaration order (used for JSON Schema enums).
    pub fn labels() -> Vec<&'static str> {
        Self::ALL.iter().map(Category::as_str).collect()
    }
}

impl std::str::FromStr for Category {
    type Err = InsightError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase();
        Self::ALL
            .iter()
            .copied()
            .find(|c| c.as_str() == wanted)
            .ok_or_else(|| {
                InsightError::validation(format!(
                    "invalid category '{}', expected one of: {}",
                    s.trim(),
                    Self::labels().join(", ")
                ))
            })
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

// ── Entry ─────────────────────────────────────────────────────

/// One record parsed from a delimited block of the log.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entry {
    /// Date text as written in the header (normally `MM/DD/YYYY`).
    pub date: String,
    /// Bolded label. `None` for entries that only matched the simple form.
    pub category: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
    pub content: String,
    /// Original block text, untrimmed.
    pub raw_block: String,
}

impl Entry {
    /// Calendar date, if the header date parses.
    pub fn parsed_date(&self) -> Option<NaiveDate> {
        NaiveDate::parse_from_str(self.date.trim(), DATE_FORMAT).ok()
    }

    pub fn has_category(&self, wanted: &str) -> bool {
        self.category
            .as_deref()
            .is_some_and(|c| c.eq_ignore_ascii_case(wanted.trim()))
    }

    pub fn has_tag(&self, wanted: &str) -> bool {
        let wanted = wanted.trim();
        self.tags.iter().any(|t| t.eq_ignore_ascii_case(wanted))
    }
}

/// The record written by a successful append.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntryRecord {
    pub content: String,
    pub category: Category,
    pub tags: Vec<String>,
    /// Header date as written (`MM/DD/YYYY`).
    pub date: String,
    pub timestamp: DateTime<Utc>,
}

// ── Query ─────────────────────────────────────────────────────

/// Filters and ordering for a query.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueryParams {
    /// Maximum entries returned; `0` means unbounded.
    #[serde(default = "default_limit")]
    pub limit: usize,
    /// Case-insensitive exact category match.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    /// Case-insensitive exact match against any tag.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tag: Option<String>,
    /// Most recent first when true, oldest first when false.
    #[serde(default = "default_recent")]
    pub recent: bool,
}

fn default_limit() -> usize {
    10
}

fn default_recent() -> bool {
    true
}

impl Default for QueryParams {
    fn default() -> Self {
        Self {
            limit: default_limit(),
            category: None,
            tag: None,
            recent: default_recent(),
        }
    }
}

impl QueryParams {
    /// No filters, no limit, most recent first.
    pub fn unbounded() -> Self {
        Self {
            limit: 0,
            ..Self::default()
        }
    }
}

/// Result of a query.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QueryResult {
    pub entries: Vec<Entry>,
    /// Number of entries returned.
    pub count: usize,
    /// Number of parsed entries before filtering.
    pub total: usize,
    /// Echo of the applied parameters.
    pub filters: QueryParams,
    /// Blocks dropped by the parser because no header form matched.
    pub skipped: usize,
}

/// Field to tally in an aggregation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Dimension {
    Category,
    Tag,
}

// ── InsightTool Trait ─────────────────────────────────────────

/// Trait for tools backed by the insight log.
///
/// The server's registry adapts these next to the static catalog tools.
#[async_trait]
pub trait InsightTool: Send + Sync {
    /// Tool name (e.g., "get_insights").
    fn name(&self) -> &str;

    /// Human-readable description.
    fn description(&self) -> &str;

    /// JSON Schema describing accepted arguments.
    fn parameters_schema(&self) -> serde_json::Value;

    /// Execute the tool with JSON arguments against an insight store.
    async fn execute(
        &self,
        args: serde_json::Value,
        store: &dyn crate::store::InsightStore,
    ) -> InsightResult<ToolResult>;
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(date: &str, category: Option<&str>, tags: &[&str]) -> Entry {
        Entry {
            date: date.into(),
            category: category.map(String::from),
            tags: tags.iter().map(|t| t.to_string()).collect(),
            content: "x".into(),
            raw_block: "x".into(),
        }
    }

    #[test]
    fn category_parse_case_insensitive() {
        assert_eq!("CODE".parse::<Category>().unwrap(), Category::Code);
        assert_eq!(" Spirit ".parse::<Category>().unwrap(), Category::Spirit);
    }

    #[test]
    fn category_parse_rejects_unknown() {
        let err = "vibes".parse::<Category>().unwrap_err();
        assert!(err.is_validation());
        assert!(err.to_string().contains("vibes"));
    }

    #[test]
    fn default_category_is_other() {
        assert_eq!(Category::default(), Category::Other);
    }

    #[test]
    fn parsed_date_accepts_mm_dd_yyyy() {
        let e = entry("03/01/2024", None, &[]);
        assert_eq!(e.parsed_date(), NaiveDate::from_ymd_opt(2024, 3, 1));
    }

    #[test]
    fn parsed_date_rejects_garbage() {
        assert!(entry("sometime last week", None, &[]).parsed_date().is_none());
        assert!(entry("2024-03-01", None, &[]).parsed_date().is_none());
    }

    #[test]
    fn category_and_tag_matching_ignore_case() {
        let e = entry("01/01/2024", Some("Code"), &["Rust", "review"]);
        assert!(e.has_category("code"));
        assert!(!e.has_category("cod"));
        assert!(e.has_tag("RUST"));
        assert!(!e.has_tag("rus"));
        assert!(!entry("01/01/2024", None, &[]).has_category("other"));
    }

    #[test]
    fn query_params_defaults() {
        let params: QueryParams = serde_json::from_str("{}").unwrap();
        assert_eq!(params.limit, 10);
        assert!(params.recent);
        assert!(params.category.is_none());
        assert!(params.tag.is_none());
    }

    #[test]
    fn query_params_reject_negative_limit() {
        assert!(serde_json::from_str::<QueryParams>(r#"{"limit": -1}"#).is_err());
    }
}
