use serde::{Deserialize, Serialize};

/// Named bundle controlling which tools are advertised to a client.
///
/// Levels are cumulative: every tool in `Minimal` is also in `Standard`,
/// and every tool in `Standard` is also in `Full`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EngagementLevel {
    Minimal,
    #[default]
    Standard,
    Full,
}

const MINIMAL_TOOLS: &[&str] = &["get_principles", "log_insight"];
const STANDARD_TOOLS: &[&str] = &["get_practices", "get_insights", "check_alignment"];
const FULL_TOOLS: &[&str] = &["insight_stats"];

/// Error returned when parsing an unknown level name.
#[derive(Debug, thiserror::Error)]
#[error("unknown engagement level: {0}")]
pub struct UnknownEngagementLevel(pub String);

impl EngagementLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Minimal => "minimal",
            Self::Standard => "standard",
            Self::Full => "full",
        }
    }

    /// Tool names advertised at this level.
    pub fn tool_names(&self) -> Vec<&'static str> {
        let mut names = MINIMAL_TOOLS.to_vec();
        if *self >= Self::Standard {
            names.extend_from_slice(STANDARD_TOOLS);
        }
        if *self >= Self::Full {
            names.extend_from_slice(FULL_TOOLS);
        }
        names
    }

    pub fn advertises(&self, tool_name: &str) -> bool {
        self.tool_names().contains(&tool_name)
    }
}

impl std::str::FromStr for EngagementLevel {
    type Err = UnknownEngagementLevel;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "minimal" => Ok(Self::Minimal),
            "standard" => Ok(Self::Standard),
            "full" => Ok(Self::Full),
            other => Err(UnknownEngagementLevel(other.to_string())),
        }
    }
}

impl std::fmt::Display for EngagementLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
