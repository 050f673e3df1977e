//! Upstream video source port.
//!
//! The upstream site is reached only through these traits. The scraping
//! implementation lives in `vidrelay-source`.

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::TopSort;

/// Errors from upstream source operations.
///
/// Implementation-specific errors (HTTP, HTML parsing) are mapped to these.
/// The message is relayed verbatim to HTTP clients as the error detail.
#[derive(Debug, Clone, Error)]
pub enum SourceError {
    /// The requested video or listing does not exist upstream.
    #[error("Not found: {0}")]
    NotFound(String),

    /// The caller supplied a URL the source cannot use.
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    /// Network or connectivity error.
    #[error("Network error: {0}")]
    Network(String),

    /// The upstream returned something that could not be understood.
    #[error("Invalid upstream response: {0}")]
    InvalidResponse(String),

    /// The source is misconfigured (bad base URL, bad selector).
    #[error("Configuration error: {0}")]
    Configuration(String),
}

/// Result type alias for source operations.
pub type SourceResult<T> = Result<T, SourceError>;

/// One video as exposed by the upstream client.
///
/// Every accessor except `url` has a default implementation reporting the
/// field as absent, so an implementation may expose as little as a URL.
/// Accessors are fallible because implementations may load details lazily.
#[async_trait]
pub trait SourceVideo: Send + Sync {
    /// Canonical page URL, if known.
    fn url(&self) -> Option<&str>;

    async fn title(&self) -> SourceResult<Option<String>> {
        Ok(None)
    }

    async fn performers(&self) -> SourceResult<Vec<String>> {
        Ok(Vec::new())
    }

    async fn length(&self) -> SourceResult<Option<String>> {
        Ok(None)
    }

    async fn publish_date(&self) -> SourceResult<Option<String>> {
        Ok(None)
    }

    async fn thumbnails(&self) -> SourceResult<Vec<String>> {
        Ok(Vec::new())
    }

    async fn direct_download_urls(&self) -> SourceResult<Vec<String>> {
        Ok(Vec::new())
    }
}

/// Boxed video handle returned by source operations.
pub type VideoHandle = Box<dyn SourceVideo>;

/// Port trait for the upstream content site.
#[async_trait]
pub trait VideoSourcePort: Send + Sync {
    /// Search videos, collecting results from the first `pages` result pages.
    async fn search(&self, query: &str, pages: u32) -> SourceResult<Vec<VideoHandle>>;

    /// Load a single video by its canonical page URL.
    async fn get_video(&self, url: &str) -> SourceResult<VideoHandle>;

    /// Top-ranked videos for a ranking window.
    async fn top(&self, sort: TopSort) -> SourceResult<Vec<VideoHandle>>;

    /// Videos featuring a performer.
    async fn by_performer(&self, name: &str) -> SourceResult<Vec<VideoHandle>>;

    /// One random video.
    async fn random(&self) -> SourceResult<VideoHandle>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    // Verify the traits are object-safe
    fn _assert_object_safe(_: Arc<dyn VideoSourcePort>, _: Box<dyn SourceVideo>) {}

    struct UrlOnly;

    impl SourceVideo for UrlOnly {
        fn url(&self) -> Option<&str> {
            Some("https://example.test/v/1")
        }
    }

    #[tokio::test]
    async fn test_default_accessors_report_absent() {
        let video = UrlOnly;
        assert_eq!(video.title().await.unwrap(), None);
        assert!(video.performers().await.unwrap().is_empty());
        assert_eq!(video.length().await.unwrap(), None);
        assert_eq!(video.publish_date().await.unwrap(), None);
        assert!(video.thumbnails().await.unwrap().is_empty());
        assert!(video.direct_download_urls().await.unwrap().is_empty());
    }

    #[test]
    fn test_error_display_keeps_message() {
        let err = SourceError::NotFound("https://example.test/v/9".to_string());
        assert!(err.to_string().contains("https://example.test/v/9"));
    }
}
