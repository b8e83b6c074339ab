//! insight_stats — category and tag counts, date range, skipped blocks.

use async_trait::async_trait;
use serde_json::json;
use tp_protocol::ToolResult;

use crate::aggregate::aggregate;
use crate::error::InsightResult;
use crate::query;
use crate::store::InsightStore;
use crate::types::{DATE_FORMAT, Dimension, InsightTool};

pub struct InsightStats;

#[async_trait]
impl InsightTool for InsightStats {
    fn name(&self) -> &str {
        "insight_stats"
    }

    fn description(&self) -> &str {
        "Summarise the insight log: counts by category and tag, date range"
    }

    fn parameters_schema(&self) -> serde_json::Value {
        json!({
            "type": "object",
            "properties": {}
        })
    }

    async fn execute(
        &self,
        _args: serde_json::Value,
        store: &dyn InsightStore,
    ) -> InsightResult<ToolResult> {
        let doc = query::load(store).await?;
        let categories = aggregate(store, Dimension::Category).await?;
        let tags = aggregate(store, Dimension::Tag).await?;

        // Most used tags first (top 10)
        let mut top_tags: Vec<_> = tags.iter().collect();
        top_tags.sort_by(|a, b| b.1.cmp(a.1).then_with(|| a.0.cmp(b.0)));
        top_tags.truncate(10);

        let dates: Vec<_> = doc.entries.iter().filter_map(|e| e.parsed_date()).collect();
        let earliest = dates.iter().min().map(|d| d.format(DATE_FORMAT).to_string());
        let latest = dates.iter().max().map(|d| d.format(DATE_FORMAT).to_string());

        let total = doc.entries.len();
        let data = json!({
            "total_entries": total,
            "skipped_blocks": doc.skipped,
            "undated_entries": total - dates.len(),
            "category_counts": categories,
            "tag_counts": tags,
            "top_tags": top_tags.iter().map(|(tag, count)| json!({
                "tag": tag,
                "count": count,
            })).collect::<Vec<_>>(),
            "date_range": {
                "earliest": earliest,
                "latest": latest,
            },
        });

        Ok(ToolResult::success(
            "insight_stats",
            data,
            format!(
                "{total} insights across {} categories and {} tags",
                categories.len(),
                tags.len()
            ),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mock::MockInsightStore;

    #[tokio::test]
    async fn stats_sample() {
        let store = MockInsightStore::with_sample();
        let result = InsightStats.execute(json!({}), &store).await.unwrap();
        assert!(result.success);
        let data = result.data.as_ref().unwrap();
        assert_eq!(data["total_entries"], 6);
        assert_eq!(data["skipped_blocks"], 1);
        assert_eq!(data["undated_entries"], 0);
        assert_eq!(data["category_counts"]["code"], 2);
        assert_eq!(data["tag_counts"]["review"], 2);
        assert_eq!(data["date_range"]["earliest"], "01/08/2024");
        assert_eq!(data["date_range"]["latest"], "03/05/2024");
    }

    #[tokio::test]
    async fn top_tags_sorted_descending() {
        let store = MockInsightStore::with_sample();
        let result = InsightStats.execute(json!({}), &store).await.unwrap();
        let top = result.data.as_ref().unwrap()["top_tags"].as_array().unwrap().clone();
        assert_eq!(top[0]["tag"], "review");
        let counts: Vec<u64> = top.iter().map(|t| t["count"].as_u64().unwrap()).collect();
        for w in counts.windows(2) {
            assert!(w[0] >= w[1], "tags should be sorted by count descending");
        }
    }

    #[tokio::test]
    async fn counts_match_aggregate() {
        let store = MockInsightStore::with_sample();
        let result = InsightStats.execute(json!({}), &store).await.unwrap();
        let data = result.data.unwrap();
        let tags = aggregate(&store, Dimension::Tag).await.unwrap();
        assert_eq!(data["tag_counts"], serde_json::to_value(&tags).unwrap());
        let categories = aggregate(&store, Dimension::Category).await.unwrap();
        assert_eq!(data["category_counts"], serde_json::to_value(&categories).unwrap());
    }

    #[tokio::test]
    async fn stats_empty_log() {
        let result = InsightStats
            .execute(json!({}), &MockInsightStore::new())
            .await
            .unwrap();
        let data = result.data.as_ref().unwrap();
        assert_eq!(data["total_entries"], 0);
        assert!(data["date_range"]["earliest"].is_null());
    }
}
