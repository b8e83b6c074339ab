//! Insight log for the team-process service.
//!
//! The log is a hand-written markdown file of `---`-delimited blocks. This
//! crate parses it into structured entries (two tolerant regex forms),
//! answers filtered/sorted/limited queries, appends new blocks, and tallies
//! categories and tags. Storage sits behind the `InsightStore` trait so tests
//! can swap the file for an in-memory mock.
//!
//! Three tools wrap those operations for the dispatch layer: log_insight,
//! get_insights, insight_stats.

pub mod aggregate;
pub mod error;
pub mod mock;
pub mod parser;
pub mod query;
pub mod store;
pub mod tools;
pub mod types;
pub mod writer;

// Re-export key types for convenience
pub use error::{InsightError, InsightResult};
pub use mock::MockInsightStore;
pub use store::{FileInsightStore, InsightStore};
pub use types::{Category, Dimension, Entry, EntryRecord, InsightTool, QueryParams, QueryResult};
