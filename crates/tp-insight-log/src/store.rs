//! Insight store abstraction — where the log document lives.

use std::io::SeekFrom;
use std::path::PathBuf;

use async_trait::async_trait;
use tokio::io::{AsyncReadExt, AsyncSeekExt, AsyncWriteExt};
use tokio::sync::Mutex;

use crate::error::{InsightError, InsightResult};
use crate::writer::LOG_HEADER;

/// Backing storage for the insight log.
///
/// Enables mocking for tests; the server holds one behind an `Arc`.
#[async_trait]
pub trait InsightStore: Send + Sync {
    /// Full document text, or `None` if it does not exist yet.
    async fn read_document(&self) -> InsightResult<Option<String>>;

    /// Append a formatted block, creating the document (with the header
    /// line) first if it does not exist.
    async fn append_block(&self, block: &str) -> InsightResult<()>;

    /// Human-readable location, for logs and error messages.
    fn location(&self) -> String;
}

/// Reads and appends to a markdown file on the local filesystem.
///
/// Appends from this process are serialised; nothing guards against other
/// processes writing the same file.
pub struct FileInsightStore {
    path: PathBuf,
    write_lock: Mutex<()>,
}

impl FileInsightStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            write_lock: Mutex::new(()),
        }
    }

    /// Whether the last byte of a non-empty file is `\n`. Writes still go to
    /// the end since the file is opened in append mode.
    async fn ends_with_newline(&self, file: &mut tokio::fs::File) -> InsightResult<bool> {
        let mut last = [0u8; 1];
        let read = async {
            file.seek(SeekFrom::End(-1)).await?;
            file.read_exact(&mut last).await
        }
        .await;
        read.map_err(|e| self.write_failure(e))?;
        Ok(last[0] == b'\n')
    }

    fn write_failure(&self, source: std::io::Error) -> InsightError {
        InsightError::WriteFailure {
            path: self.location(),
            source,
        }
    }
}

#[async_trait]
impl InsightStore for FileInsightStore {
    async fn read_document(&self) -> InsightResult<Option<String>> {
        match tokio::fs::read_to_string(&self.path).await {
            Ok(text) => Ok(Some(text)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(source) => Err(InsightError::ReadFailure {
                path: self.location(),
                source,
            }),
        }
    }

    async fn append_block(&self, block: &str) -> InsightResult<()> {
        let _guard = self.write_lock.lock().await;

        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            tokio::fs::create_dir_all(parent)
                .await
                .map_err(|e| self.write_failure(e))?;
        }

        let mut file = tokio::fs::OpenOptions::new()
            .create(true)
            .read(true)
            .append(true)
            .open(&self.path)
            .await
            .map_err(|e| self.write_failure(e))?;

        let len = file
            .metadata()
            .await
            .map_err(|e| self.write_failure(e))?
            .len();

        let mut buf = String::with_capacity(LOG_HEADER.len() + block.len() + 1);
        if len == 0 {
            tracing::info!(path = %self.location(), "creating insight log");
            buf.push_str(LOG_HEADER);
        } else if !self.ends_with_newline(&mut file).await? {
            buf.push('\n');
        }
        buf.push_str(block);

        let written = async {
            file.write_all(buf.as_bytes()).await?;
            file.flush().await
        }
        .await;
        if let Err(e) = written {
            tracing::warn!(path = %self.location(), error = %e, "insight append failed");
            return Err(self.write_failure(e));
        }
        Ok(())
    }

    fn location(&self) -> String {
        self.path.display().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn missing_file_reads_as_none() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileInsightStore::new(dir.path().join("insights.md"));
        assert!(store.read_document().await.unwrap().is_none());
    }

    #[tokio::test]
    async fn directory_path_is_a_read_failure() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileInsightStore::new(dir.path());
        let err = store.read_document().await.unwrap_err();
        assert!(matches!(err, InsightError::ReadFailure { .. }));
    }

    #[tokio::test]
    async fn first_append_writes_header_and_creates_parents() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested/deeper/insights.md");
        let store = FileInsightStore::new(&path);
        store.append_block("\n---\n\nblock\n").await.unwrap();

        let text = tokio::fs::read_to_string(&path).await.unwrap();
        assert_eq!(text, format!("{LOG_HEADER}\n---\n\nblock\n"));
    }

    #[tokio::test]
    async fn later_appends_skip_header() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileInsightStore::new(dir.path().join("insights.md"));
        store.append_block("A\n").await.unwrap();
        store.append_block("B\n").await.unwrap();
        let text = store.read_document().await.unwrap().unwrap();
        assert_eq!(text, format!("{LOG_HEADER}A\nB\n"));
    }

    #[tokio::test]
    async fn existing_content_is_preserved() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("insights.md");
        tokio::fs::write(&path, "# Hand-written title\n").await.unwrap();
        let store = FileInsightStore::new(&path);
        store.append_block("X").await.unwrap();
        let text = store.read_document().await.unwrap().unwrap();
        assert_eq!(text, "# Hand-written title\nX");
    }

    #[tokio::test]
    async fn missing_trailing_newline_is_added_before_block() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("insights.md");
        tokio::fs::write(&path, "# My Log").await.unwrap();
        let store = FileInsightStore::new(&path);
        store.append_block("\n---\n\nX\n").await.unwrap();
        let text = store.read_document().await.unwrap().unwrap();
        assert_eq!(text, "# My Log\n\n---\n\nX\n");
    }

    #[tokio::test]
    async fn hand_edited_entry_stays_separate_from_append() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("insights.md");
        tokio::fs::write(
            &path,
            "# Team Insights Log\n\n---\n\n*(01/01/2024)* - **code**\n\nhand written",
        )
        .await
        .unwrap();
        let store = FileInsightStore::new(&path);
        crate::writer::append(&store, "appended", Some("spirit"), &[])
            .await
            .unwrap();

        let result = crate::query::query(&store, &crate::QueryParams::unbounded())
            .await
            .unwrap();
        assert_eq!(result.total, 2);
        let contents: Vec<_> = result.entries.iter().map(|e| e.content.as_str()).collect();
        assert!(contents.contains(&"hand written"));
        assert!(contents.contains(&"appended"));
    }

    #[tokio::test]
    async fn append_into_directory_path_is_write_failure() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileInsightStore::new(dir.path());
        let err = store.append_block("X").await.unwrap_err();
        assert!(matches!(err, InsightError::WriteFailure { .. }));
    }

    #[tokio::test]
    async fn concurrent_appends_all_land() {
        let dir = tempfile::tempdir().unwrap();
        let store = std::sync::Arc::new(FileInsightStore::new(dir.path().join("insights.md")));
        let mut handles = Vec::new();
        for i in 0..16 {
            let store = store.clone();
            handles.push(tokio::spawn(async move {
                store.append_block(&format!("[{i}]")).await.unwrap();
            }));
        }
        for h in handles {
            h.await.unwrap();
        }
        let text = store.read_document().await.unwrap().unwrap();
        assert_eq!(text.matches(LOG_HEADER).count(), 1);
        for i in 0..16 {
            assert!(text.contains(&format!("[{i}]")));
        }
    }
}
