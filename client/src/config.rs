//! Endpoint configuration for the test case generation service.
//!
//! DESIGN
//! ======
//! The base URL is resolved once: the host reads it from its environment and
//! provides it as context during server render, and the shell mirrors it into
//! a `<meta>` tag that the hydrated bundle reads on startup. Nothing else in
//! the crate hard-codes a service address.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

/// Base URL used when nothing is configured.
pub const DEFAULT_API_BASE_URL: &str = "http://localhost:5000";

/// Path of the generation endpoint, appended to the base URL.
pub const GENERATE_PATH: &str = "/generate-test-cases";

/// `name` of the `<meta>` tag carrying the base URL into the browser.
pub const API_BASE_META_NAME: &str = "testgen-api-base";

/// Resolved location of the generation service.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApiConfig {
    base_url: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self { base_url: DEFAULT_API_BASE_URL.to_owned() }
    }
}

impl ApiConfig {
    /// Build a config from a raw base URL. Surrounding whitespace and trailing
    /// slashes are dropped; a blank value falls back to the default.
    pub fn new(raw: &str) -> Self {
        let base_url = normalize_base_url(raw);
        if base_url.is_empty() {
            return Self::default();
        }
        Self { base_url }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Full URL of the generation endpoint.
    pub fn endpoint(&self) -> String {
        format!("{}{GENERATE_PATH}", self.base_url)
    }

    /// Read the base URL the server rendered into the document head.
    /// Returns `None` outside the browser or when the tag is absent.
    pub fn from_document() -> Option<Self> {
        #[cfg(feature = "hydrate")]
        {
            let document = web_sys::window()?.document()?;
            let selector = format!("meta[name=\"{API_BASE_META_NAME}\"]");
            let meta = document.query_selector(&selector).ok()??;
            meta.get_attribute("content").map(|content| Self::new(&content))
        }
        #[cfg(not(feature = "hydrate"))]
        {
            None
        }
    }
}

fn normalize_base_url(raw: &str) -> String {
    raw.trim().trim_end_matches('/').to_owned()
}
