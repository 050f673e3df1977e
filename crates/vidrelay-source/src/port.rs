//! Port trait implementation for `SourceClient`.
//!
//! Implements the core-owned `VideoSourcePort`, converting internal
//! scraping errors into core `SourceError`s.

use async_trait::async_trait;
use vidrelay_core::TopSort;
use vidrelay_core::ports::{SourceError, SourceResult, VideoHandle, VideoSourcePort};

use crate::client::{ScrapedVideo, SourceClient};
use crate::error::ScrapeError;
use crate::http::HttpBackend;

// ============================================================================
// Error Mapping
// ============================================================================

/// Convert internal `ScrapeError` to core `SourceError`.
pub(crate) fn map_error(err: ScrapeError) -> SourceError {
    match err {
        ScrapeError::RequestFailed { status: 404, url } => SourceError::NotFound(url),
        ScrapeError::RequestFailed { status, url } => {
            SourceError::Network(format!("upstream returned status {status} for {url}"))
        }
        err @ ScrapeError::UnexpectedLayout { .. } => SourceError::InvalidResponse(err.to_string()),
        err @ ScrapeError::UnsupportedUrl { .. } => SourceError::InvalidUrl(err.to_string()),
        err @ ScrapeError::InvalidSelector { .. } => SourceError::Configuration(err.to_string()),
        ScrapeError::Network(e) => SourceError::Network(e.to_string()),
        ScrapeError::InvalidUrl(e) => SourceError::InvalidUrl(e.to_string()),
    }
}

fn into_handles<B: HttpBackend>(videos: Vec<ScrapedVideo<B>>) -> Vec<VideoHandle> {
    videos
        .into_iter()
        .map(|video| Box::new(video) as VideoHandle)
        .collect()
}

// ============================================================================
// Port Implementation
// ============================================================================

#[async_trait]
impl<B: HttpBackend> VideoSourcePort for SourceClient<B> {
    async fn search(&self, query: &str, pages: u32) -> SourceResult<Vec<VideoHandle>> {
        self.search_videos(query, pages)
            .await
            .map(into_handles)
            .map_err(map_error)
    }

    async fn get_video(&self, url: &str) -> SourceResult<VideoHandle> {
        let video = self.load_video(url).await.map_err(map_error)?;
        Ok(Box::new(video))
    }

    async fn top(&self, sort: TopSort) -> SourceResult<Vec<VideoHandle>> {
        self.top_videos(sort).await.map(into_handles).map_err(map_error)
    }

    async fn by_performer(&self, name: &str) -> SourceResult<Vec<VideoHandle>> {
        self.performer_videos(name)
            .await
            .map(into_handles)
            .map_err(map_error)
    }

    async fn random(&self) -> SourceResult<VideoHandle> {
        let video = self.random_video().await.map_err(map_error)?;
        Ok(Box::new(video))
    }
}
