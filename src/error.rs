//! Error handling types and utilities.

use thiserror::Error;

/// A specialized Result type for docsite-search operations.
///
/// This is an alias for `anyhow::Result` with context added via `.context()` and
/// `.with_context()` methods throughout the codebase.
pub type Result<T> = anyhow::Result<T>;

/// Error raised while retrieving or decoding the document index.
///
/// Both variants are recoverable: the loader logs them and substitutes an
/// empty index, so no caller above the loader ever observes one.
#[derive(Debug, Clone, Error)]
pub enum IndexError {
    /// The network request for the index resource failed.
    #[error("request for {url} failed: {reason}")]
    Fetch { url: String, reason: String },
    /// The fetched body was not a valid document list.
    #[error("malformed search index at {url}: {reason}")]
    Malformed { url: String, reason: String },
}
