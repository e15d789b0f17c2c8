//! Markup builders for the two result surfaces.
//!
//! Pure functions from the ranked result set to HTML strings; the
//! controller pushes their output through the host's [`SearchSurface`].
//! Keeping them separate from the state machine leaves scoring and ranking
//! testable without any display environment.
//!
//! [`SearchSurface`]: super::SearchSurface

use crate::search::ScoredResult;
use crate::search::highlight::{escape_html, highlight};
use std::fmt::Write;

/// Hint appended below every dropdown.
pub const ENTER_HINT: &str = "Press Enter to see all results";

/// Message shown when a query matches nothing.
pub const NO_RESULTS: &str = "No results found";

/// Header line of the overlay: result count with singular handling.
pub fn results_heading(count: usize) -> String {
    if count == 1 {
        "1 result found".to_string()
    } else {
        format!("{count} results found")
    }
}

fn result_item(markup: &mut String, query: &str, result: &ScoredResult) {
    let _ = write!(
        markup,
        "<a class=\"search-result\" href=\"{url}\">\
         <span class=\"search-result-title\">{title}</span>\
         <span class=\"search-result-excerpt\">{excerpt}</span>\
         </a>",
        url = escape_html(&result.url),
        title = highlight(&result.title, query),
        excerpt = highlight(&result.excerpt, query),
    );
}

/// Markup for the inline suggestion dropdown.
pub fn dropdown_html(query: &str, results: &[ScoredResult]) -> String {
    let mut markup = String::from("<div class=\"search-dropdown\">");
    if results.is_empty() {
        let _ = write!(markup, "<div class=\"search-empty\">{NO_RESULTS}</div>");
    } else {
        for result in results {
            result_item(&mut markup, query, result);
        }
    }
    let _ = write!(markup, "<div class=\"search-hint\">{ENTER_HINT}</div></div>");
    markup
}

/// Markup for the full-screen results overlay.
pub fn overlay_html(query: &str, results: &[ScoredResult]) -> String {
    let mut markup = String::from(
        "<div class=\"search-overlay-backdrop\"><div class=\"search-overlay\">\
         <header class=\"search-overlay-header\">",
    );
    let _ = write!(
        markup,
        "<h2>Results for &quot;{query}&quot;</h2>\
         <span class=\"search-overlay-count\">{heading}</span>\
         <button class=\"search-overlay-close\" aria-label=\"Close\">&times;</button>\
         </header><div class=\"search-overlay-results\">",
        query = escape_html(query),
        heading = results_heading(results.len()),
    );
    if results.is_empty() {
        let _ = write!(markup, "<div class=\"search-empty\">{NO_RESULTS}</div>");
    } else {
        for result in results {
            result_item(&mut markup, query, result);
        }
    }
    markup.push_str("</div></div></div>");
    markup
}
