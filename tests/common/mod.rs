//! Shared test fixtures for the presentation controller tests.
//!
//! The two host boundaries are replaced here: [`StubFetcher`] serves a
//! canned index body (or a canned failure) instead of the network, and
//! [`RecordingSurface`] records every display command instead of touching a
//! page. Tests assert on the recorded call sequence and on the markup the
//! controller pushed.

// Fixtures used across different integration test crates
#![allow(dead_code)]

use async_trait::async_trait;
use docsite_search::SiteConfig;
use docsite_search::search::{Document, IndexFetcher, IndexLoader};
use docsite_search::ui::SearchSurface;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex, PoisonError};

/// One display command received by [`RecordingSurface`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Call {
    ShowDropdown(String),
    HideDropdown,
    OpenOverlay(String),
    CloseOverlay,
    FocusInput,
    SelectInput,
    FocusResult(usize),
}

impl Call {
    pub fn is_show_dropdown(&self) -> bool {
        matches!(self, Self::ShowDropdown(_))
    }

    pub fn is_open_overlay(&self) -> bool {
        matches!(self, Self::OpenOverlay(_))
    }
}

/// Display surface that records every command it receives.
pub struct RecordingSurface {
    calls: Arc<Mutex<Vec<Call>>>,
    present: bool,
}

impl RecordingSurface {
    /// A page with both search elements present.
    pub fn new() -> (Self, Recorder) {
        let calls = Arc::new(Mutex::new(Vec::new()));
        let surface = Self {
            calls: Arc::clone(&calls),
            present: true,
        };
        (surface, Recorder { calls })
    }

    /// A page missing the search input / results container.
    pub fn detached() -> Self {
        Self {
            calls: Arc::new(Mutex::new(Vec::new())),
            present: false,
        }
    }

    fn record(&self, call: Call) {
        self.calls
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(call);
    }
}

impl SearchSurface for RecordingSurface {
    fn has_search_elements(&self) -> bool {
        self.present
    }

    fn show_dropdown(&self, markup: &str) {
        self.record(Call::ShowDropdown(markup.to_string()));
    }

    fn hide_dropdown(&self) {
        self.record(Call::HideDropdown);
    }

    fn open_overlay(&self, markup: &str) {
        self.record(Call::OpenOverlay(markup.to_string()));
    }

    fn close_overlay(&self) {
        self.record(Call::CloseOverlay);
    }

    fn focus_input(&self) {
        self.record(Call::FocusInput);
    }

    fn select_input(&self) {
        self.record(Call::SelectInput);
    }

    fn focus_result(&self, index: usize) {
        self.record(Call::FocusResult(index));
    }
}

/// Test-side view of the commands a [`RecordingSurface`] received.
#[derive(Clone)]
pub struct Recorder {
    calls: Arc<Mutex<Vec<Call>>>,
}

impl Recorder {
    pub fn calls(&self) -> Vec<Call> {
        self.calls
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    pub fn count(&self, predicate: impl Fn(&Call) -> bool) -> usize {
        self.calls().iter().filter(|c| predicate(c)).count()
    }

    pub fn last_dropdown_markup(&self) -> Option<String> {
        self.calls().into_iter().rev().find_map(|c| match c {
            Call::ShowDropdown(markup) => Some(markup),
            _ => None,
        })
    }

    pub fn last_overlay_markup(&self) -> Option<String> {
        self.calls().into_iter().rev().find_map(|c| match c {
            Call::OpenOverlay(markup) => Some(markup),
            _ => None,
        })
    }
}

/// Index fetcher serving a canned response, counting every fetch.
pub struct StubFetcher {
    body: Option<String>,
    fetches: Arc<AtomicUsize>,
}

#[async_trait]
impl IndexFetcher for StubFetcher {
    async fn fetch(&self, url: &str) -> Result<String, docsite_search::error::IndexError> {
        self.fetches.fetch_add(1, Ordering::SeqCst);
        match &self.body {
            Some(body) => Ok(body.clone()),
            None => Err(docsite_search::error::IndexError::Fetch {
                url: url.to_string(),
                reason: "connection refused".to_string(),
            }),
        }
    }
}

/// Loader over a stub index; returns the loader and its fetch counter.
pub fn stub_loader(documents: &[Document]) -> (IndexLoader, Arc<AtomicUsize>) {
    let body = serde_json::to_string(documents).expect("serialize stub index");
    let fetches = Arc::new(AtomicUsize::new(0));
    let fetcher = StubFetcher {
        body: Some(body),
        fetches: Arc::clone(&fetches),
    };
    (
        IndexLoader::new(&SiteConfig::default(), Box::new(fetcher)),
        fetches,
    )
}

/// Loader whose every fetch fails.
pub fn failing_loader() -> IndexLoader {
    let fetcher = StubFetcher {
        body: None,
        fetches: Arc::new(AtomicUsize::new(0)),
    };
    IndexLoader::new(&SiteConfig::default(), Box::new(fetcher))
}

/// A small site index with two pages about installation.
pub fn install_documents() -> Vec<Document> {
    vec![
        Document {
            url: "/install".to_string(),
            title: "Install Guide".to_string(),
            description: None,
            content: Some("Run install steps here install install".to_string()),
        },
        Document {
            url: "/faq".to_string(),
            title: "FAQ".to_string(),
            description: None,
            content: Some("install is easy".to_string()),
        },
    ]
}

/// Let spawned controller tasks run to completion without advancing time.
pub async fn settle() {
    for _ in 0..16 {
        tokio::task::yield_now().await;
    }
}
