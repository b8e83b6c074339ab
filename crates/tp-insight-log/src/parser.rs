//! Block splitter and header parser for the insight log.
//!
//! A document is a header block followed by entry blocks separated by a
//! `---` line with blank lines on both sides. Each block's first line is
//! matched against two header shapes:
//!
//! - structured: `*(DATE)* - **CATEGORY** [tag1, tag2]` (bold and bracket
//!   segments optional)
//! - simple: `*(DATE)* - free text`
//!
//! Blocks matching neither are dropped and only counted.

use regex::Regex;
use std::sync::LazyLock;

use crate::types::Entry;

/// Category assigned to structured headers without a bold segment.
pub const DEFAULT_CATEGORY: &str = "other";

static RE_DELIMITER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\n[ \t]*\n---[ \t]*\n[ \t]*\n").unwrap());

static RE_STRUCTURED: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^\*\(([^)]*)\)\*[ \t]*-[ \t]*(?:\*\*([^*]+)\*\*)?[ \t]*(?:\[([^\]]*)\])?[ \t]*$",
    )
    .unwrap()
});

static RE_SIMPLE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\*\(([^)]*)\)\*[ \t]*-[ \t]*(.*)$").unwrap());

/// Entries parsed from a document, in file order.
#[derive(Debug, Clone, Default)]
pub struct ParsedDocument {
    pub entries: Vec<Entry>,
    /// Non-blank blocks that matched neither header form.
    pub skipped: usize,
}

/// Parse a whole log document.
pub fn parse_document(raw_text: &str) -> ParsedDocument {
    let text = raw_text.replace("\r\n", "\n");
    let mut doc = ParsedDocument::default();

    // First segment is the document header.
    for block in RE_DELIMITER.split(&text).skip(1) {
        if block.trim().is_empty() {
            continue;
        }
        match parse_block(block) {
            Some(entry) => doc.entries.push(entry),
            None => doc.skipped += 1,
        }
    }
    doc
}

/// Parse one block. Returns `None` if no header form matches.
pub fn parse_block(block: &str) -> Option<Entry> {
    let trimmed = block.trim();
    let (header, body) = match trimmed.split_once('\n') {
        Some((header, body)) => (header.trim_end(), body),
        None => (trimmed, ""),
    };

    if let Some(caps) = RE_STRUCTURED.captures(header) {
        let category = caps
            .get(2)
            .map(|m| m.as_str().trim())
            .filter(|c| !c.is_empty())
            .unwrap_or(DEFAULT_CATEGORY);
        let tags = caps.get(3).map(|m| split_tags(m.as_str())).unwrap_or_default();
        return Some(Entry {
            date: caps[1].trim().to_string(),
            category: Some(category.to_string()),
            tags,
            content: body.trim().to_string(),
            raw_block: block.to_string(),
        });
    }

    let caps = RE_SIMPLE.captures(header)?;
    let mut content = caps[2].trim().to_string();
    let body = body.trim();
    if !body.is_empty() {
        if !content.is_empty() {
            content.push('\n');
        }
        content.push_str(body);
    }
    Some(Entry {
        date: caps[1].trim().to_string(),
        category: None,
        tags: Vec::new(),
        content,
        raw_block: block.to_string(),
    })
}

/// Comma-split a bracket segment, trimming and dropping empty items.
pub fn split_tags(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .map(String::from)
        .collect()
}
