//! Append path: validate, format and write one entry block.

use chrono::{DateTime, NaiveDate, Utc};

use crate::error::{InsightError, InsightResult};
use crate::store::InsightStore;
use crate::types::{Category, DATE_FORMAT, EntryRecord};

/// First line written to a new log file.
pub const LOG_HEADER: &str = "# Team Insights Log\n";

/// Render one entry block, ready to append.
///
/// The bracket segment is omitted when there are no tags.
pub fn format_block(date: NaiveDate, category: Category, tags: &[String], content: &str) -> String {
    let tags = if tags.is_empty() {
        String::new()
    } else {
        format!(" [{}]", tags.join(", "))
    };
    format!(
        "\n---\n\n*({})* - **{}**{}\n\n{}\n",
        date.format(DATE_FORMAT),
        category,
        tags,
        content
    )
}

/// Validate inputs and build the record plus the block text for `now`.
pub fn prepare(
    insight: &str,
    category: Option<&str>,
    tags: &[String],
    now: DateTime<Utc>,
) -> InsightResult<(EntryRecord, String)> {
    let content = insight.trim();
    if content.is_empty() {
        return Err(InsightError::validation("insight text is required"));
    }
    if content.lines().any(|l| l.trim() == "---") {
        return Err(InsightError::validation(
            "insight text must not contain a '---' line",
        ));
    }

    let category = match category.map(str::trim).filter(|c| !c.is_empty()) {
        Some(label) => label.parse::<Category>()?,
        None => Category::default(),
    };

    let tags = clean_tags(tags)?;
    let date = now.date_naive();
    let block = format_block(date, category, &tags, content);

    let record = EntryRecord {
        content: content.to_string(),
        category,
        tags,
        date: date.format(DATE_FORMAT).to_string(),
        timestamp: now,
    };
    Ok((record, block))
}

/// Append a new insight dated today (UTC).
pub async fn append(
    store: &dyn InsightStore,
    insight: &str,
    category: Option<&str>,
    tags: &[String],
) -> InsightResult<EntryRecord> {
    let (record, block) = prepare(insight, category, tags, Utc::now())?;
    store.append_block(&block).await?;
    tracing::info!(
        category = %record.category,
        tags = record.tags.len(),
        location = %store.location(),
        "insight appended"
    );
    Ok(record)
}

fn clean_tags(tags: &[String]) -> InsightResult<Vec<String>> {
    let mut cleaned = Vec::with_capacity(tags.len());
    for tag in tags {
        let tag = tag.trim();
        if tag.is_empty() {
            continue;
        }
        if tag.contains([',', '[', ']', '\n']) {
            return Err(InsightError::validation(format!(
                "tag '{tag}' must not contain commas, brackets or newlines"
            )));
        }
        cleaned.push(tag.to_string());
    }
    Ok(cleaned)
}
