//! Persisted reader preferences.
//!
//! Theme and sidebar state are owned by the surrounding page; this module
//! only models their storage boundary: the typed values, the keys they are
//! stored under, and a durable string-keyed store. Write failures are logged
//! and absorbed so preference persistence can never take down search.

use crate::error::Result;
use anyhow::Context;
use std::collections::BTreeMap;
use std::fs;
use std::path::PathBuf;

/// Storage key for the color theme.
pub const THEME_KEY: &str = "theme";
/// Storage key for the sidebar collapse state.
pub const SIDEBAR_KEY: &str = "sidebar-state";

/// Color theme of the documentation pages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    pub fn from_stored(value: &str) -> Option<Self> {
        match value {
            "light" => Some(Self::Light),
            "dark" => Some(Self::Dark),
            _ => None,
        }
    }
}

/// Collapse state of the navigation sidebar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SidebarState {
    #[default]
    Expanded,
    Collapsed,
}

impl SidebarState {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Expanded => "expanded",
            Self::Collapsed => "collapsed",
        }
    }

    pub fn from_stored(value: &str) -> Option<Self> {
        match value {
            "expanded" => Some(Self::Expanded),
            "collapsed" => Some(Self::Collapsed),
            _ => None,
        }
    }
}

/// Durable string-keyed preference storage.
pub trait PreferenceStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str);
}

/// Read the stored theme, falling back to the default for absent or
/// unrecognized values.
pub fn theme(store: &dyn PreferenceStore) -> Theme {
    store
        .get(THEME_KEY)
        .and_then(|v| Theme::from_stored(&v))
        .unwrap_or_default()
}

pub fn set_theme(store: &dyn PreferenceStore, theme: Theme) {
    store.set(THEME_KEY, theme.as_str());
}

/// Read the stored sidebar state, falling back to the default for absent or
/// unrecognized values.
pub fn sidebar_state(store: &dyn PreferenceStore) -> SidebarState {
    store
        .get(SIDEBAR_KEY)
        .and_then(|v| SidebarState::from_stored(&v))
        .unwrap_or_default()
}

pub fn set_sidebar_state(store: &dyn PreferenceStore, state: SidebarState) {
    store.set(SIDEBAR_KEY, state.as_str());
}

/// Preference store backed by a single JSON file.
#[derive(Debug)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    fn read_all(&self) -> BTreeMap<String, String> {
        let Ok(body) = fs::read_to_string(&self.path) else {
            return BTreeMap::new();
        };
        match serde_json::from_str(&body) {
            Ok(prefs) => prefs,
            Err(e) => {
                tracing::warn!("unreadable preferences at {}: {}", self.path.display(), e);
                BTreeMap::new()
            }
        }
    }

    fn persist(&self, prefs: &BTreeMap<String, String>) -> Result<()> {
        let body = serde_json::to_string_pretty(prefs)?;
        fs::write(&self.path, body)
            .with_context(|| format!("writing preferences to {}", self.path.display()))?;
        Ok(())
    }
}

impl PreferenceStore for JsonFileStore {
    fn get(&self, key: &str) -> Option<String> {
        self.read_all().remove(key)
    }

    fn set(&self, key: &str, value: &str) {
        let mut prefs = self.read_all();
        prefs.insert(key.to_string(), value.to_string());
        if let Err(e) = self.persist(&prefs) {
            tracing::warn!("failed to persist preference '{}': {:#}", key, e);
        }
    }
}
