pub mod config;
pub mod error;
pub mod prefs;
pub mod search;
pub mod tracing;
pub mod ui;

pub use config::SiteConfig;
pub use search::{Document, Index, IndexLoader, ScoredResult, search};
pub use ui::{SearchEvent, SearchSurface, SearchUi, Surface};
