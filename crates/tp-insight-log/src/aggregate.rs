//! Category and tag tallies over the full log.

use std::collections::HashMap;

use crate::error::InsightResult;
use crate::query;
use crate::store::InsightStore;
use crate::types::{Dimension, Entry, QueryParams};

/// Count entries per category, or tag occurrences per tag.
///
/// Entries without a category (simple-form headers) are not counted under
/// `Dimension::Category`. Keys are kept as written in the log.
pub fn tally(entries: &[Entry], dimension: Dimension) -> HashMap<String, usize> {
    let mut counts: HashMap<String, usize> = HashMap::new();
    for entry in entries {
        match dimension {
            Dimension::Category => {
                if let Some(ref category) = entry.category {
                    *counts.entry(category.clone()).or_default() += 1;
                }
            }
            Dimension::Tag => {
                for tag in &entry.tags {
                    *counts.entry(tag.clone()).or_default() += 1;
                }
            }
        }
    }
    counts
}

/// Tally over an unrestricted query of the whole store.
pub async fn aggregate(
    store: &dyn InsightStore,
    dimension: Dimension,
) -> InsightResult<HashMap<String, usize>> {
    let result = query::query(store, &QueryParams::unbounded()).await?;
    Ok(tally(&result.entries, dimension))
}
