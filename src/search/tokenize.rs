//! Query tokenization for search matching.

/// Minimum trimmed query length before any search is performed.
pub(crate) const MIN_QUERY_LEN: usize = 2;

/// Minimum token length. Single-character fragments match too broadly to be
/// useful and are discarded.
const MIN_TOKEN_LEN: usize = 2;

/// Decompose a raw query into matching tokens.
///
/// The query is lower-cased and split on whitespace runs; fragments shorter
/// than [`MIN_TOKEN_LEN`] characters are dropped. An empty result means no
/// search should be performed.
pub(crate) fn tokenize(query: &str) -> Vec<String> {
    query
        .to_lowercase()
        .split_whitespace()
        .filter(|fragment| fragment.chars().count() >= MIN_TOKEN_LEN)
        .map(str::to_string)
        .collect()
}

/// Whether a trimmed query is long enough to search at all.
pub(crate) fn searchable(query: &str) -> bool {
    query.trim().chars().count() >= MIN_QUERY_LEN
}
