//! HTML escaping and query-match highlighting.

use super::tokenize::tokenize;
use regex::RegexBuilder;

/// Escape text for safe interpolation into markup.
pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

/// Escape `text` and wrap every case-insensitive occurrence of each query
/// token in `<mark>` tags.
///
/// Tokens are applied in query order against the already-escaped text. Each
/// token is regex-escaped first so metacharacters in the query ("c++", "2.0")
/// match literally.
pub fn highlight(text: &str, query: &str) -> String {
    let mut markup = escape_html(text);

    for token in tokenize(query) {
        let pattern = match RegexBuilder::new(&regex::escape(&token))
            .case_insensitive(true)
            .build()
        {
            Ok(pattern) => pattern,
            Err(e) => {
                tracing::warn!("skipping unusable highlight token '{}': {}", token, e);
                continue;
            }
        };
        markup = pattern
            .replace_all(&markup, "<mark>${0}</mark>")
            .into_owned();
    }

    markup
}
