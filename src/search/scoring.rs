//! Heuristic relevance scoring.
//!
//! Each document is scored against every query token with a fixed additive
//! weight per matched field. A token matching several fields contributes for
//! each of them; documents that accumulate no score at all are excluded from
//! results rather than ranked last.

use super::index::Document;

/// Token equals the whole title.
const TITLE_EXACT: u32 = 100;
/// Token appears inside the title (but is not the whole title).
const TITLE_CONTAINS: u32 = 50;
/// Token appears in the URL.
const URL_CONTAINS: u32 = 30;
/// Token appears in the description.
const DESCRIPTION_CONTAINS: u32 = 20;
/// Token appears in the content body.
const CONTENT_CONTAINS: u32 = 10;
/// Ceiling for the per-token content repetition bonus.
const REPETITION_CAP: usize = 10;

/// Location of the first content match, used for excerpt extraction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct ContentMatch {
    /// Byte offset of the match in the lower-cased content.
    pub(crate) offset: usize,
    /// Byte length of the matched token.
    pub(crate) token_len: usize,
}

/// Outcome of scoring one document against the full token set.
#[derive(Debug, Clone, Copy)]
pub(crate) struct DocumentScore {
    pub(crate) score: u32,
    /// First token's first match in the content. Set once; later tokens do
    /// not overwrite it.
    pub(crate) content_match: Option<ContentMatch>,
}

/// Score a document against the query tokens.
///
/// All matching is case-insensitive. The repetition bonus deliberately
/// counts the first occurrence a second time: N occurrences of a token in
/// the content contribute `10 + min(N, 10)` in total.
pub(crate) fn score_document(doc: &Document, tokens: &[String]) -> DocumentScore {
    let title = doc.title.to_lowercase();
    let url = doc.url.to_lowercase();
    let description = doc.description.as_deref().map(str::to_lowercase);
    let content = doc.content.as_deref().map(str::to_lowercase);

    let mut score = 0;
    let mut content_match = None;

    for token in tokens {
        let token = token.as_str();

        if title == token {
            score += TITLE_EXACT;
        } else if title.contains(token) {
            score += TITLE_CONTAINS;
        }

        if url.contains(token) {
            score += URL_CONTAINS;
        }

        if let Some(description) = &description
            && description.contains(token)
        {
            score += DESCRIPTION_CONTAINS;
        }

        if let Some(content) = &content
            && let Some(offset) = content.find(token)
        {
            score += CONTENT_CONTAINS + repetition_bonus(content, token);
            if content_match.is_none() {
                content_match = Some(ContentMatch {
                    offset,
                    token_len: token.len(),
                });
            }
        }
    }

    DocumentScore {
        score,
        content_match,
    }
}

fn repetition_bonus(content: &str, token: &str) -> u32 {
    content.matches(token).count().min(REPETITION_CAP) as u32
}
