use std::fmt::Display;
use std::time::Duration;

use serde::{Deserialize, Serialize};

/// A single offer scraped from the deals page.
///
/// Price and discount are kept exactly as displayed on the page, no numeric
/// parsing is attempted.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Deal {
    pub name: String,
    pub description: String,
    pub price: String,
    pub discount: String,
    pub store: String,
    pub validity: String,
}

impl Display for Deal {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}] {} - {}", self.store, self.name, self.price)?;
        if !self.discount.is_empty() {
            write!(f, " ({})", self.discount)?;
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WatchConfig {
    /// Deals page to fetch. Redirects are only followed within its host.
    pub url: String,
    /// Brand token looked up in deal names.
    pub brand: String,
    /// Stores whose descriptions are replaced by the name-derived fallback.
    pub fallback_store_marker: String,
    pub timeout: Duration,
}

impl Default for WatchConfig {
    fn default() -> Self {
        Self {
            url: crate::DEALS_URL.to_string(),
            brand: crate::DEFAULT_BRAND.to_string(),
            fallback_store_marker: crate::FALLBACK_STORE_MARKER.to_string(),
            timeout: Duration::from_secs(30),
        }
    }
}

impl WatchConfig {
    pub fn with_brand(mut self, brand: impl Into<String>) -> Self {
        self.brand = brand.into();
        self
    }

    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.url = url.into();
        self
    }
}
