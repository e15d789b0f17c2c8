//! Page-level configuration supplied by the embedding site.

use serde::Deserialize;

/// Configuration the host page hands to the search subsystem.
///
/// Read once at startup. A missing or malformed configuration value degrades
/// to the defaults rather than failing; the search endpoint then resolves
/// relative to the site root.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SiteConfig {
    /// Prefix prepended to the index resource path. Empty by default.
    #[serde(default, rename = "baseUrl")]
    pub base_url: String,
}

impl SiteConfig {
    /// Parse a configuration value from its JSON form.
    ///
    /// Invalid input yields the default configuration with a logged warning.
    pub fn from_json(raw: &str) -> Self {
        match serde_json::from_str(raw) {
            Ok(config) => config,
            Err(e) => {
                tracing::warn!("invalid site configuration, using defaults: {}", e);
                Self::default()
            }
        }
    }
}
