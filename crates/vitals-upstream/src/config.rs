//! Upstream client configuration

use crate::retry::RetryPolicy;
use std::time::Duration;

/// Connection settings for the upstream clinical API
#[derive(Debug, Clone)]
pub struct UpstreamConfig {
    /// Base URL, without a trailing slash (e.g. "https://api.example.com")
    pub base_url: String,

    /// Sent as the `x-api-key` header when set
    pub api_key: Option<String>,

    /// Per-request timeout
    pub timeout: Duration,

    /// Page size requested while flattening pagination
    pub page_limit: u32,

    /// Upper bound on pages fetched by one `fetch_all`
    pub max_pages: u32,

    pub retry: RetryPolicy,
}

impl UpstreamConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url: String = base_url.into();
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key: None,
            timeout: Duration::from_secs(30),
            page_limit: 20,
            max_pages: 50,
            retry: RetryPolicy::default(),
        }
    }

    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn with_page_limit(mut self, page_limit: u32) -> Self {
        self.page_limit = page_limit.max(1);
        self
    }

    pub fn with_max_pages(mut self, max_pages: u32) -> Self {
        self.max_pages = max_pages.max(1);
        self
    }

    pub fn with_retry(mut self, retry: RetryPolicy) -> Self {
        self.retry = retry;
        self
    }
}
