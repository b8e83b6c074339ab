//! Filter, sort and limit parsed entries.

use std::cmp::Ordering;

use crate::error::InsightResult;
use crate::parser::{self, ParsedDocument};
use crate::store::InsightStore;
use crate::types::{Entry, QueryParams, QueryResult};

/// Read and parse the whole document. A missing file is an empty document.
pub async fn load(store: &dyn InsightStore) -> InsightResult<ParsedDocument> {
    Ok(store
        .read_document()
        .await?
        .map(|text| parser::parse_document(&text))
        .unwrap_or_default())
}

/// Run a query against the store, re-parsing the file.
pub async fn query(store: &dyn InsightStore, params: &QueryParams) -> InsightResult<QueryResult> {
    let doc = load(store).await?;
    Ok(apply(doc, params))
}

/// Apply filters, sort and limit to an already parsed document.
///
/// Order is category filter, tag filter, sort, then truncation.
pub fn apply(doc: ParsedDocument, params: &QueryParams) -> QueryResult {
    let total = doc.entries.len();

    let mut entries: Vec<Entry> = doc
        .entries
        .into_iter()
        .filter(|e| params.category.as_deref().is_none_or(|c| e.has_category(c)))
        .filter(|e| params.tag.as_deref().is_none_or(|t| e.has_tag(t)))
        .collect();

    sort_by_date(&mut entries, params.recent);

    if params.limit > 0 {
        entries.truncate(params.limit);
    }

    QueryResult {
        count: entries.len(),
        entries,
        total,
        filters: params.clone(),
        skipped: doc.skipped,
    }
}

/// Stable sort by parsed date. Entries without a parseable date go last in
/// either direction and keep file order among themselves.
pub fn sort_by_date(entries: &mut [Entry], recent: bool) {
    entries.sort_by(|a, b| match (a.parsed_date(), b.parsed_date()) {
        (Some(da), Some(db)) => {
            if recent {
                db.cmp(&da)
            } else {
                da.cmp(&db)
            }
        }
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    });
}
