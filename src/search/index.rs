//! Document index loading and memoization.
//!
//! The index is a flat JSON array served alongside the site. It is fetched
//! lazily on the first search, decoded once, and memoized for the lifetime
//! of the loader. Failure to fetch or decode degrades to an empty index so
//! the rest of the pipeline renders "no results" instead of failing.

use crate::config::SiteConfig;
use crate::error::IndexError;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tokio::sync::OnceCell;

/// Path of the index resource relative to the configured base URL.
const INDEX_PATH: &str = "/search-index.json";

/// A single searchable page of the site.
///
/// `url` doubles as the link target and the document identity; the index is
/// assumed not to carry two entries with the same `url`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Document {
    pub url: String,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub content: Option<String>,
}

/// The ordered, immutable collection of searchable documents.
///
/// Document order is meaningful: it reflects site navigation order and is
/// the tie-breaker for equally-scored results.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Index {
    documents: Vec<Document>,
}

impl Index {
    pub fn new(documents: Vec<Document>) -> Self {
        Self { documents }
    }

    pub fn documents(&self) -> &[Document] {
        &self.documents
    }

    pub fn len(&self) -> usize {
        self.documents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }
}

/// Network boundary for retrieving the index resource.
///
/// Swappable so the pipeline is testable without a server.
#[async_trait]
pub trait IndexFetcher: Send + Sync {
    async fn fetch(&self, url: &str) -> Result<String, IndexError>;
}

/// Production fetcher backed by an HTTP client.
#[derive(Debug, Default)]
pub struct HttpFetcher {
    client: reqwest::Client,
}

#[async_trait]
impl IndexFetcher for HttpFetcher {
    async fn fetch(&self, url: &str) -> Result<String, IndexError> {
        let fetch_error = |e: reqwest::Error| IndexError::Fetch {
            url: url.to_string(),
            reason: e.to_string(),
        };

        let response = self
            .client
            .get(url)
            .send()
            .await
            .and_then(reqwest::Response::error_for_status)
            .map_err(fetch_error)?;

        response.text().await.map_err(fetch_error)
    }
}

/// Lazily fetches the document index and memoizes it for the page session.
///
/// The memoized slot is written exactly once; concurrent first-time callers
/// share the single in-flight fetch. The index is never refreshed.
pub struct IndexLoader {
    endpoint: String,
    fetcher: Box<dyn IndexFetcher>,
    cached: OnceCell<Index>,
}

impl IndexLoader {
    pub fn new(config: &SiteConfig, fetcher: Box<dyn IndexFetcher>) -> Self {
        Self {
            endpoint: format!("{}{}", config.base_url, INDEX_PATH),
            fetcher,
            cached: OnceCell::new(),
        }
    }

    /// Loader wired to the real network.
    pub fn over_http(config: &SiteConfig) -> Self {
        Self::new(config, Box::new(HttpFetcher::default()))
    }

    /// The index, fetching it on first call.
    ///
    /// Never fails: an unavailable or malformed index is logged and memoized
    /// as empty, and later calls do not retry.
    pub async fn load(&self) -> &Index {
        self.cached
            .get_or_init(|| async {
                match self.fetch_index().await {
                    Ok(index) => {
                        tracing::debug!("loaded search index with {} documents", index.len());
                        index
                    }
                    Err(e) => {
                        tracing::warn!("search index unavailable: {}", e);
                        Index::default()
                    }
                }
            })
            .await
    }

    async fn fetch_index(&self) -> Result<Index, IndexError> {
        let body = self.fetcher.fetch(&self.endpoint).await?;
        serde_json::from_str(&body).map_err(|e| IndexError::Malformed {
            url: self.endpoint.clone(),
            reason: e.to_string(),
        })
    }
}

impl std::fmt::Debug for IndexLoader {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("IndexLoader")
            .field("endpoint", &self.endpoint)
            .field("loaded", &self.cached.initialized())
            .finish()
    }
}
