//! Mock insight store for testing — holds the document in memory.

use async_trait::async_trait;
use tokio::sync::Mutex;

use crate::error::{InsightError, InsightResult};
use crate::store::InsightStore;
use crate::writer::LOG_HEADER;

const MOCK_LOCATION: &str = "memory://insights.md";

/// An in-memory insight store with optional injected I/O failures.
pub struct MockInsightStore {
    document: Mutex<Option<String>>,
    fail_reads: bool,
    fail_writes: bool,
}

impl MockInsightStore {
    /// A store whose document does not exist yet.
    pub fn new() -> Self {
        Self {
            document: Mutex::new(None),
            fail_reads: false,
            fail_writes: false,
        }
    }

    pub fn with_document(text: impl Into<String>) -> Self {
        Self {
            document: Mutex::new(Some(text.into())),
            ..Self::new()
        }
    }

    /// Every read fails with a permission error.
    pub fn failing_reads() -> Self {
        Self {
            fail_reads: true,
            ..Self::new()
        }
    }

    /// Every append fails with a permission error.
    pub fn failing_writes() -> Self {
        Self {
            fail_writes: true,
            ..Self::new()
        }
    }

    /// A small hand-written log: five dated entries, one simple-form entry,
    /// one block without a header.
    pub fn with_sample() -> Self {
        Self::with_document(
            "# Team Insights Log\n\
             \n---\n\n\
             *(01/08/2024)* - **code** [review, small-prs]\n\n\
             Small pull requests get reviewed the same day.\n\
             \n---\n\n\
             *(01/15/2024)* - **spirit** [morale]\n\n\
             Demo days keep everyone excited about shipping.\n\
             \n---\n\n\
             *(02/02/2024)* - **process** [retro, review]\n\n\
             Retro action items need an owner or they evaporate.\n\
             \n---\n\n\
             Scratch notes that never got a header.\n\
             \n---\n\n\
             *(02/20/2024)* - Pairing beat async review on the flaky test hunt\n\
             \n---\n\n\
             *(03/01/2024)* - **code** [testing]\n\n\
             Write the failing test before touching the parser.\n\
             \n---\n\n\
             *(03/05/2024)* - **collaboration**\n\n\
             Rotate the on-call buddy weekly.\n",
        )
    }

    /// Current document text.
    pub async fn contents(&self) -> Option<String> {
        self.document.lock().await.clone()
    }
}

impl Default for MockInsightStore {
    fn default() -> Self {
        Self::new()
    }
}

fn permission_denied() -> std::io::Error {
    std::io::Error::new(std::io::ErrorKind::PermissionDenied, "permission denied")
}

#[async_trait]
impl InsightStore for MockInsightStore {
    async fn read_document(&self) -> InsightResult<Option<String>> {
        if self.fail_reads {
            return Err(InsightError::ReadFailure {
                path: MOCK_LOCATION.to_string(),
                source: permission_denied(),
            });
        }
        Ok(self.document.lock().await.clone())
    }

    async fn append_block(&self, block: &str) -> InsightResult<()> {
        if self.fail_writes {
            return Err(InsightError::WriteFailure {
                path: MOCK_LOCATION.to_string(),
                source: permission_denied(),
            });
        }
        let mut doc = self.document.lock().await;
        let text = doc.get_or_insert_with(|| LOG_HEADER.to_string());
        if !text.is_empty() && !text.ends_with('\n') {
            text.push('\n');
        }
        text.push_str(block);
        Ok(())
    }

    fn location(&self) -> String {
        MOCK_LOCATION.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::parse_document;

    #[tokio::test]
    async fn sample_parses_with_one_skip() {
        let store = MockInsightStore::with_sample();
        let text = store.read_document().await.unwrap().unwrap();
        let doc = parse_document(&text);
        assert_eq!(doc.entries.len(), 6);
        assert_eq!(doc.skipped, 1);
        assert!(doc.entries[3].category.is_none());
    }

    #[tokio::test]
    async fn new_store_has_no_document() {
        assert!(MockInsightStore::new().read_document().await.unwrap().is_none());
    }

    #[tokio::test]
    async fn append_adds_header_once() {
        let store = MockInsightStore::new();
        store.append_block("a\n").await.unwrap();
        store.append_block("b\n").await.unwrap();
        assert_eq!(store.contents().await.unwrap(), format!("{LOG_HEADER}a\nb\n"));
    }

    #[tokio::test]
    async fn append_after_unterminated_header_still_parses() {
        let store = MockInsightStore::with_document("# My Log");
        crate::writer::append(&store, "appended", Some("spirit"), &[])
            .await
            .unwrap();
        let doc = parse_document(&store.contents().await.unwrap());
        assert_eq!(doc.entries.len(), 1);
        assert_eq!(doc.entries[0].content, "appended");
    }

    #[tokio::test]
    async fn append_after_unterminated_entry_keeps_both() {
        let store = MockInsightStore::with_document(
            "# Team Insights Log\n\n---\n\n*(01/01/2024)* - **code**\n\nhand written",
        );
        crate::writer::append(&store, "appended", Some("spirit"), &[])
            .await
            .unwrap();
        let doc = parse_document(&store.contents().await.unwrap());
        assert_eq!(doc.entries.len(), 2);
        assert_eq!(doc.entries[0].content, "hand written");
        assert_eq!(doc.entries[1].content, "appended");
    }

    #[tokio::test]
    async fn injected_failures() {
        assert!(MockInsightStore::failing_reads().read_document().await.is_err());
        assert!(MockInsightStore::failing_writes().append_block("x").await.is_err());
    }
}
