//! Client configuration

use crate::{HttpStore, StoreResult};
use shared::link::DEFAULT_DOMAIN_SUFFIX;

/// Maximum documents the hosted store returns per query
pub const DEFAULT_PAGE_SIZE: u64 = 20;

/// Client configuration for the catalog store
///
/// # Environment variables
///
/// | variable | default |
/// |----------|---------|
/// | CATALOG_BASE_URL | http://localhost:3100 |
/// | CATALOG_TOKEN | (none) |
/// | CATALOG_TIMEOUT_SECS | 30 |
/// | CATALOG_PAGE_SIZE | 20 |
/// | CATALOG_DOMAIN_SUFFIX | tcb.qcloud.la |
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Store base URL (e.g., "http://localhost:3100")
    pub base_url: String,

    /// Bearer token sent with every request
    pub token: Option<String>,

    /// Request timeout in seconds
    pub timeout: u64,

    /// Documents requested per page, never below 1
    pub page_size: u64,

    /// Public domain storage links are rewritten to
    pub domain_suffix: String,
}

impl ClientConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            token: None,
            timeout: 30,
            page_size: DEFAULT_PAGE_SIZE,
            domain_suffix: DEFAULT_DOMAIN_SUFFIX.to_string(),
        }
    }

    /// Load from the environment (and `.env` if present)
    pub fn from_env() -> Self {
        dotenv::dotenv().ok();

        let mut config = Self::new(
            std::env::var("CATALOG_BASE_URL").unwrap_or_else(|_| "http://localhost:3100".into()),
        );
        if let Ok(token) = std::env::var("CATALOG_TOKEN")
            && !token.is_empty()
        {
            config.token = Some(token);
        }
        if let Some(timeout) = std::env::var("CATALOG_TIMEOUT_SECS")
            .ok()
            .and_then(|v| v.parse().ok())
        {
            config.timeout = timeout;
        }
        if let Some(page_size) = std::env::var("CATALOG_PAGE_SIZE")
            .ok()
            .and_then(|v| v.parse().ok())
        {
            config = config.with_page_size(page_size);
        }
        if let Ok(suffix) = std::env::var("CATALOG_DOMAIN_SUFFIX")
            && !suffix.is_empty()
        {
            config.domain_suffix = suffix;
        }
        config
    }

    /// Set the bearer token
    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    /// Set the request timeout
    pub fn with_timeout(mut self, seconds: u64) -> Self {
        self.timeout = seconds;
        self
    }

    /// Set the page size; zero is raised to one
    pub fn with_page_size(mut self, page_size: u64) -> Self {
        self.page_size = page_size.max(1);
        self
    }

    /// Set the public storage domain
    pub fn with_domain_suffix(mut self, suffix: impl Into<String>) -> Self {
        self.domain_suffix = suffix.into();
        self
    }

    /// Create an HTTP store from this configuration
    pub fn build_http_store(&self) -> StoreResult<HttpStore> {
        HttpStore::new(self)
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::new("http://localhost:3100")
    }
}
