//! Insight log tools exposed through the dispatch layer.

pub mod get_insights;
pub mod insight_stats;
pub mod log_insight;

use crate::types::InsightTool;

pub use get_insights::GetInsights;
pub use insight_stats::InsightStats;
pub use log_insight::LogInsight;

/// Every insight tool, in registration order.
pub fn all_tools() -> Vec<Box<dyn InsightTool>> {
    vec![
        Box::new(LogInsight),
        Box::new(GetInsights),
        Box::new(InsightStats),
    ]
}
