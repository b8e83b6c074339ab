//! Keyword-overlap alignment between free text and principle descriptions.
//!
//! The score for a principle is the share of its description keywords that
//! also appear in the text, as a whole percentage. A heuristic, nothing more.

use std::collections::BTreeSet;

use serde::Serialize;

use crate::catalog::Principle;

const MIN_WORD_LEN: usize = 3;

static STOP_WORDS: &[&str] = &[
    "the", "and", "for", "are", "but", "not", "you", "all", "any", "can", "her", "was", "one",
    "our", "out", "has", "have", "had", "how", "its", "into", "than", "that", "then", "them",
    "they", "this", "those", "what", "when", "where", "which", "while", "who", "why", "will",
    "with", "would", "from", "your", "their", "there", "these", "rather", "instead", "whole",
    "also", "just", "more", "most", "some", "such", "only", "over", "very",
];

/// Alignment of a text with one principle.
#[derive(Debug, Clone, Serialize)]
pub struct AlignmentScore {
    pub principle_id: &'static str,
    pub principle_name: &'static str,
    /// 0–100.
    pub score: u8,
    /// Principle keywords found in the text, sorted.
    pub matched: Vec<String>,
}

/// Lower-case keywords of a text, minus stop words and short words.
pub fn keywords(text: &str) -> BTreeSet<String> {
    text.split(|c: char| !c.is_alphanumeric())
        .filter(|w| w.chars().count() >= MIN_WORD_LEN)
        .map(str::to_lowercase)
        .filter(|w| !STOP_WORDS.contains(&w.as_str()))
        .collect()
}

/// Score `text` against one principle.
pub fn score(text: &str, principle: &'static Principle) -> AlignmentScore {
    let text_words = keywords(text);
    score_keywords(&text_words, principle)
}

fn score_keywords(text_words: &BTreeSet<String>, principle: &'static Principle) -> AlignmentScore {
    let principle_words = keywords(principle.description);
    let matched: Vec<String> = principle_words
        .intersection(text_words)
        .cloned()
        .collect();
    let score = if principle_words.is_empty() {
        0
    } else {
        ((matched.len() as f64 / principle_words.len() as f64) * 100.0).round() as u8
    };
    AlignmentScore {
        principle_id: principle.id,
        principle_name: principle.name,
        score,
        matched,
    }
}

/// Score `text` against every given principle, best match first (ties by id).
pub fn rank(text: &str, principles: &'static [Principle]) -> Vec<AlignmentScore> {
    let text_words = keywords(text);
    let mut scores: Vec<_> = principles
        .iter()
        .map(|p| score_keywords(&text_words, p))
        .collect();
    scores.sort_by(|a, b| {
        b.score
            .cmp(&a.score)
            .then_with(|| a.principle_id.cmp(b.principle_id))
    });
    scores
}
