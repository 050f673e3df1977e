//! Lazily-loaded video handle.

use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::OnceCell;
use url::Url;
use vidrelay_core::ports::{SourceResult, SourceVideo};

use super::Scraper;
use crate::http::HttpBackend;
use crate::parsing::VideoPage;
use crate::port::map_error;

/// A video known by URL whose page is scraped on first field access.
///
/// Listing routes return many of these; only the ones a caller actually
/// reads cost a page fetch, and each page is fetched at most once.
pub(crate) struct ScrapedVideo<B: HttpBackend> {
    url: Url,
    scraper: Arc<Scraper<B>>,
    details: OnceCell<VideoPage>,
}

impl<B: HttpBackend> ScrapedVideo<B> {
    pub(crate) fn lazy(url: Url, scraper: Arc<Scraper<B>>) -> Self {
        Self {
            url,
            scraper,
            details: OnceCell::new(),
        }
    }

    pub(crate) fn loaded(url: Url, scraper: Arc<Scraper<B>>, page: VideoPage) -> Self {
        Self {
            url,
            scraper,
            details: OnceCell::new_with(Some(page)),
        }
    }

    async fn details(&self) -> SourceResult<&VideoPage> {
        self.details
            .get_or_try_init(|| self.scraper.video_page(&self.url))
            .await
            .map_err(map_error)
    }
}

#[async_trait]
impl<B: HttpBackend> SourceVideo for ScrapedVideo<B> {
    fn url(&self) -> Option<&str> {
        Some(self.url.as_str())
    }

    async fn title(&self) -> SourceResult<Option<String>> {
        Ok(self.details().await?.title.clone())
    }

    async fn performers(&self) -> SourceResult<Vec<String>> {
        Ok(self.details().await?.performers.clone())
    }

    async fn length(&self) -> SourceResult<Option<String>> {
        Ok(self.details().await?.length.clone())
    }

    async fn publish_date(&self) -> SourceResult<Option<String>> {
        Ok(self.details().await?.publish_date.clone())
    }

    async fn thumbnails(&self) -> SourceResult<Vec<String>> {
        Ok(self.details().await?.thumbnails.clone())
    }

    async fn direct_download_urls(&self) -> SourceResult<Vec<String>> {
        Ok(self.details().await?.downloads.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::super::tests::{BASE, client, listing_html, video_html};
    use crate::http::testing::{CannedPage, FakeBackend};
    use vidrelay_core::SourceError;
    use vidrelay_core::ports::SourceVideo;

    #[tokio::test]
    async fn test_details_fetched_once_on_first_access() {
        let backend = FakeBackend::new()
            .with_page(
                &format!("{BASE}/top"),
                CannedPage::html(&listing_html(&["/v/1"])),
            )
            .with_page(&format!("{BASE}/v/1"), CannedPage::html(&video_html("One")));
        let log = backend.request_log();

        let videos = client(backend)
            .top_videos(vidrelay_core::TopSort::AllTime)
            .await
            .unwrap();
        let video = &videos[0];
        assert_eq!(log.lock().unwrap().len(), 1);

        assert_eq!(video.title().await.unwrap().as_deref(), Some("One"));
        assert_eq!(
            video.direct_download_urls().await.unwrap(),
            [format!("{BASE}/media/One.mp4")]
        );
        assert_eq!(log.lock().unwrap().len(), 2);
    }

    #[tokio::test]
    async fn test_unreachable_page_surfaces_as_accessor_error() {
        let backend = FakeBackend::new().with_page(
            &format!("{BASE}/top"),
            CannedPage::html(&listing_html(&["/v/404"])),
        );

        let videos = client(backend)
            .top_videos(vidrelay_core::TopSort::AllTime)
            .await
            .unwrap();

        assert_eq!(videos[0].url(), Some(format!("{BASE}/v/404").as_str()));
        assert!(matches!(
            videos[0].title().await,
            Err(SourceError::NotFound(_))
        ));
    }
}
