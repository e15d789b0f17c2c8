//! The search pipeline: scan, rank, and excerpt.

use super::index::{Document, Index};
use super::scoring::{ContentMatch, score_document};
use super::tokenize::{searchable, tokenize};

/// Maximum number of results returned per query.
pub const MAX_RESULTS: usize = 10;

/// Bytes of context kept before a content match.
const EXCERPT_BEFORE: usize = 60;
/// Bytes of context kept after a content match, beyond the token itself.
const EXCERPT_AFTER: usize = 100;
/// Length in characters of the fallback content prefix.
const FALLBACK_PREFIX_LEN: usize = 150;

const ELLIPSIS: &str = "...";

/// A matched document with its relevance score and preview excerpt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScoredResult {
    pub url: String,
    pub title: String,
    pub score: u32,
    pub excerpt: String,
}

/// Score the whole index against `query` and return the ranked result set.
///
/// Queries shorter than two characters (after trimming) and queries with no
/// usable tokens return an empty set without scanning the index. Results are
/// ordered by descending score; ties keep the original index order, which
/// reflects site navigation order. At most [`MAX_RESULTS`] results are
/// returned.
pub fn search(query: &str, index: &Index) -> Vec<ScoredResult> {
    let query = query.trim();
    if !searchable(query) {
        return Vec::new();
    }
    let tokens = tokenize(query);
    if tokens.is_empty() {
        return Vec::new();
    }

    let mut results: Vec<ScoredResult> = index
        .documents()
        .iter()
        .filter_map(|doc| {
            let scored = score_document(doc, &tokens);
            if scored.score == 0 {
                return None;
            }
            Some(ScoredResult {
                url: doc.url.clone(),
                title: doc.title.clone(),
                score: scored.score,
                excerpt: excerpt_for(doc, scored.content_match),
            })
        })
        .collect();

    // Stable sort: equal scores preserve index order.
    results.sort_by(|a, b| b.score.cmp(&a.score));
    results.truncate(MAX_RESULTS);
    results
}

/// Build the preview excerpt for a matched document.
///
/// A window around the first content match wins; otherwise the description,
/// then a truncated content prefix, then nothing.
fn excerpt_for(doc: &Document, content_match: Option<ContentMatch>) -> String {
    if let Some(m) = content_match
        && let Some(content) = doc.content.as_deref()
    {
        return window_around(content, m);
    }

    if let Some(description) = doc.description.as_deref()
        && !description.is_empty()
    {
        return description.to_string();
    }

    match doc.content.as_deref() {
        Some(content) if !content.is_empty() => {
            let prefix: String = content.chars().take(FALLBACK_PREFIX_LEN).collect();
            format!("{prefix}{ELLIPSIS}")
        }
        _ => String::new(),
    }
}

/// Cut the excerpt window `[match - 60, match + token + 100)` out of the
/// content, clamped to its bounds, with an ellipsis on each side that was
/// clamped away from the content edge.
fn window_around(content: &str, m: ContentMatch) -> String {
    let start = floor_boundary(content, m.offset.saturating_sub(EXCERPT_BEFORE));
    let end = ceil_boundary(content, m.offset + m.token_len + EXCERPT_AFTER);

    let mut excerpt = String::with_capacity(end - start + 2 * ELLIPSIS.len());
    if start > 0 {
        excerpt.push_str(ELLIPSIS);
    }
    excerpt.push_str(&content[start..end]);
    if end < content.len() {
        excerpt.push_str(ELLIPSIS);
    }
    excerpt
}

/// Largest char boundary at or below `at`.
///
/// Match offsets are found in the lower-cased content; the rare characters
/// whose lower-casing changes byte length can leave `at` inside a multi-byte
/// character of the original.
fn floor_boundary(text: &str, at: usize) -> usize {
    let mut at = at.min(text.len());
    while !text.is_char_boundary(at) {
        at -= 1;
    }
    at
}

/// Smallest char boundary at or above `at`, clamped to the text length.
fn ceil_boundary(text: &str, at: usize) -> usize {
    let mut at = at.min(text.len());
    while !text.is_char_boundary(at) {
        at += 1;
    }
    at
}
