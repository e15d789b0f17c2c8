//! Full-text search over the site's document index.
//!
//! This module provides the in-memory search pipeline: index loading and
//! memoization, query tokenization, heuristic scoring with excerpt
//! extraction, and match highlighting for rendered results.

// Module declarations
pub(crate) mod highlight;
pub(crate) mod index;
pub(crate) mod query;
pub(crate) mod scoring;
pub(crate) mod tokenize;

// Public re-exports (used via lib.rs)
pub use highlight::{escape_html, highlight};
pub use index::{Document, HttpFetcher, Index, IndexFetcher, IndexLoader};
pub use query::{MAX_RESULTS, ScoredResult, search};

// Internal re-exports
pub(crate) use tokenize::searchable;
