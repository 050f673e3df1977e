//! HTTP backend abstraction for page fetches.
//!
//! A trait-based backend keeps the scraping logic testable against canned
//! HTML. The production implementation uses reqwest.

use async_trait::async_trait;
use std::time::Duration;
use url::Url;

use crate::error::{ScrapeError, ScrapeResult};

/// A fetched HTML page.
#[derive(Debug, Clone)]
pub struct Page {
    /// URL after redirects.
    pub url: Url,
    pub body: String,
}

// ============================================================================
// HTTP Backend Trait
// ============================================================================

/// Trait for HTTP backends that can fetch HTML pages.
///
/// This is an implementation detail - external code should use the
/// `VideoSourcePort` trait.
#[async_trait]
pub trait HttpBackend: Send + Sync + 'static {
    /// Fetch a page, following redirects.
    async fn get_page(&self, url: &Url) -> ScrapeResult<Page>;
}

// ============================================================================
// Reqwest Backend
// ============================================================================

/// Production HTTP backend using reqwest.
///
/// No retries: a failed fetch is reported to the caller as-is.
pub struct ReqwestBackend {
    client: reqwest::Client,
}

impl ReqwestBackend {
    /// Create a new reqwest backend.
    pub fn new(user_agent: &str, timeout: Duration) -> ScrapeResult<Self> {
        let client = reqwest::Client::builder()
            .user_agent(user_agent)
            .timeout(timeout)
            .build()?;

        Ok(Self { client })
    }
}

#[async_trait]
impl HttpBackend for ReqwestBackend {
    async fn get_page(&self, url: &Url) -> ScrapeResult<Page> {
        tracing::debug!(url = %url, "Fetching upstream page");

        let response = self.client.get(url.as_str()).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(ScrapeError::RequestFailed {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }

        let final_url = response.url().clone();
        let body = response.text().await?;

        Ok(Page {
            url: final_url,
            body,
        })
    }
}

// ============================================================================
// Fake Backend for Testing
// ============================================================================
