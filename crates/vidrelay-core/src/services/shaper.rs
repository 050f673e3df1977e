//! Response shaper: turns an upstream video into a [`VideoRecord`].
//!
//! Shaping never fails. When a field accessor or the optional media fetch
//! errors, the outcome is [`ShapeOutcome::Degraded`], which serializes to a
//! record carrying only the URL.

use std::sync::Arc;

use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use serde::Serialize;
use thiserror::Error;

use crate::domain::VideoRecord;
use crate::ports::{MediaFetchError, MediaFetcherPort, SourceError, SourceVideo};
use crate::utils::inline_base64_payload;

/// Why a record was degraded.
#[derive(Debug, Error)]
pub enum ShapeError {
    #[error("upstream video has no URL")]
    MissingUrl,

    #[error(transparent)]
    Source(#[from] SourceError),

    #[error(transparent)]
    Fetch(#[from] MediaFetchError),
}

/// Result of shaping one video.
#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum ShapeOutcome {
    /// Every accessor succeeded.
    Complete(VideoRecord),
    /// Shaping failed part way; only the URL survives.
    Degraded {
        url: Option<String>,
        #[serde(skip)]
        cause: ShapeError,
    },
}

impl ShapeOutcome {
    pub const fn is_degraded(&self) -> bool {
        matches!(self, Self::Degraded { .. })
    }
}

/// Builds [`VideoRecord`]s, optionally embedding the first download as base64.
pub struct VideoShaper {
    fetcher: Arc<dyn MediaFetcherPort>,
}

impl VideoShaper {
    pub fn new(fetcher: Arc<dyn MediaFetcherPort>) -> Self {
        Self { fetcher }
    }

    /// Shape one video. Errors are folded into [`ShapeOutcome::Degraded`].
    pub async fn shape(&self, video: &dyn SourceVideo, include_base64: bool) -> ShapeOutcome {
        match self.try_shape(video, include_base64).await {
            Ok(record) => ShapeOutcome::Complete(record),
            Err(cause) => {
                tracing::warn!(
                    url = video.url().unwrap_or("<none>"),
                    error = %cause,
                    "Degrading video record"
                );
                ShapeOutcome::Degraded {
                    url: video.url().map(str::to_owned),
                    cause,
                }
            }
        }
    }

    async fn try_shape(
        &self,
        video: &dyn SourceVideo,
        include_base64: bool,
    ) -> Result<VideoRecord, ShapeError> {
        let url = video.url().ok_or(ShapeError::MissingUrl)?.to_owned();

        let mut record = VideoRecord {
            url,
            title: video.title().await?,
            performers: video.performers().await?,
            length: video.length().await?,
            publish_date: video.publish_date().await?,
            thumbnails: video.thumbnails().await?,
            direct_download_urls: video.direct_download_urls().await?,
            download_base64: None,
        };

        if include_base64 {
            if let Some(first) = record.direct_download_urls.first() {
                record.download_base64 = Some(self.encode_media(first).await?);
            }
        }

        Ok(record)
    }

    async fn encode_media(&self, url: &str) -> Result<String, ShapeError> {
        if let Some(payload) = inline_base64_payload(url) {
            return Ok(payload.to_owned());
        }

        let body = self.fetcher.fetch(url).await?;
        tracing::debug!(url, bytes = body.len(), "Encoding media body as base64");
        Ok(STANDARD.encode(body))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::SourceResult;
    use crate::ports::media_fetcher::MockMediaFetcherPort;
    use async_trait::async_trait;
    use serde_json::json;

    impl ShapeOutcome {
        fn url(&self) -> Option<&str> {
            match self {
                Self::Complete(record) => Some(&record.url),
                Self::Degraded { url, .. } => url.as_deref(),
            }
        }

        fn into_record(self) -> Option<VideoRecord> {
            match self {
                Self::Complete(record) => Some(record),
                Self::Degraded { .. } => None,
            }
        }
    }

    const VIDEO_URL: &str = "https://example.test/v/123";

    /// Upstream object that implements only the URL accessor.
    struct BareVideo(Option<&'static str>);

    impl SourceVideo for BareVideo {
        fn url(&self) -> Option<&str> {
            self.0
        }
    }

    #[derive(Default)]
    struct FullVideo {
        downloads: Vec<String>,
        fail_thumbnails: bool,
    }

    #[async_trait]
    impl SourceVideo for FullVideo {
        fn url(&self) -> Option<&str> {
            Some(VIDEO_URL)
        }

        async fn title(&self) -> SourceResult<Option<String>> {
            Ok(Some("Demo".to_string()))
        }

        async fn performers(&self) -> SourceResult<Vec<String>> {
            Ok(vec!["Jane Roe".to_string(), "Ann Poe".to_string()])
        }

        async fn length(&self) -> SourceResult<Option<String>> {
            Ok(Some("12:34".to_string()))
        }

        async fn thumbnails(&self) -> SourceResult<Vec<String>> {
            if self.fail_thumbnails {
                return Err(SourceError::Network("connection reset".to_string()));
            }
            Ok(vec!["https://img.example.test/1.jpg".to_string()])
        }

        async fn direct_download_urls(&self) -> SourceResult<Vec<String>> {
            Ok(self.downloads.clone())
        }
    }

    fn shaper_without_fetch() -> VideoShaper {
        let mut fetcher = MockMediaFetcherPort::new();
        fetcher.expect_fetch().times(0);
        VideoShaper::new(Arc::new(fetcher))
    }

    #[tokio::test]
    async fn test_bare_video_yields_empty_record() {
        let outcome = shaper_without_fetch()
            .shape(&BareVideo(Some(VIDEO_URL)), true)
            .await;

        assert_eq!(
            serde_json::to_value(&outcome).unwrap(),
            json!({
                "url": VIDEO_URL,
                "title": null,
                "performers": [],
                "length": null,
                "publishDate": null,
                "thumbnails": [],
                "directDownloadUrls": [],
            })
        );
    }

    #[tokio::test]
    async fn test_missing_url_degrades_to_null_url() {
        let outcome = shaper_without_fetch().shape(&BareVideo(None), false).await;

        assert!(matches!(
            outcome,
            ShapeOutcome::Degraded {
                cause: ShapeError::MissingUrl,
                ..
            }
        ));
        assert_eq!(serde_json::to_value(&outcome).unwrap(), json!({"url": null}));
    }

    #[tokio::test]
    async fn test_failing_accessor_degrades_to_url_only() {
        let video = FullVideo {
            fail_thumbnails: true,
            ..Default::default()
        };

        let outcome = shaper_without_fetch().shape(&video, false).await;

        assert!(outcome.is_degraded());
        assert_eq!(outcome.url(), Some(VIDEO_URL));
        assert_eq!(
            serde_json::to_value(&outcome).unwrap(),
            json!({"url": VIDEO_URL})
        );
    }

    #[tokio::test]
    async fn test_full_video_without_base64() {
        let video = FullVideo {
            downloads: vec!["https://cdn.example.test/1080.mp4".to_string()],
            ..Default::default()
        };

        let record = shaper_without_fetch()
            .shape(&video, false)
            .await
            .into_record()
            .unwrap();

        assert_eq!(record.title.as_deref(), Some("Demo"));
        assert_eq!(record.performers, vec!["Jane Roe", "Ann Poe"]);
        assert_eq!(record.length.as_deref(), Some("12:34"));
        assert_eq!(record.publish_date, None);
        assert_eq!(record.direct_download_urls.len(), 1);
        assert_eq!(record.download_base64, None);
    }

    #[tokio::test]
    async fn test_data_url_payload_extracted_without_fetch() {
        let video = FullVideo {
            downloads: vec![
                "data:video/mp4;base64,AAAAGGZ0eXBtcDQy".to_string(),
                "https://cdn.example.test/720.mp4".to_string(),
            ],
            ..Default::default()
        };

        let record = shaper_without_fetch()
            .shape(&video, true)
            .await
            .into_record()
            .unwrap();

        assert_eq!(record.download_base64.as_deref(), Some("AAAAGGZ0eXBtcDQy"));
    }

    #[tokio::test]
    async fn test_first_download_fetched_and_encoded() {
        let mut fetcher = MockMediaFetcherPort::new();
        fetcher
            .expect_fetch()
            .withf(|url| url == "https://cdn.example.test/1080.mp4")
            .times(1)
            .returning(|_| Ok(b"hello".to_vec()));
        let shaper = VideoShaper::new(Arc::new(fetcher));

        let video = FullVideo {
            downloads: vec![
                "https://cdn.example.test/1080.mp4".to_string(),
                "https://cdn.example.test/720.mp4".to_string(),
            ],
            ..Default::default()
        };

        let record = shaper.shape(&video, true).await.into_record().unwrap();
        assert_eq!(record.download_base64.as_deref(), Some("aGVsbG8="));
    }

    #[tokio::test]
    async fn test_fetch_failure_degrades() {
        let mut fetcher = MockMediaFetcherPort::new();
        fetcher.expect_fetch().returning(|url| {
            Err(MediaFetchError::TooLarge {
                url: url.to_string(),
                limit: 1024,
            })
        });
        let shaper = VideoShaper::new(Arc::new(fetcher));

        let video = FullVideo {
            downloads: vec!["https://cdn.example.test/1080.mp4".to_string()],
            ..Default::default()
        };

        let outcome = shaper.shape(&video, true).await;
        assert!(matches!(
            outcome,
            ShapeOutcome::Degraded {
                cause: ShapeError::Fetch(MediaFetchError::TooLarge { .. }),
                ..
            }
        ));
    }

    #[tokio::test]
    async fn test_base64_requested_without_downloads_is_complete() {
        let outcome = shaper_without_fetch()
            .shape(&FullVideo::default(), true)
            .await;

        let record = outcome.into_record().unwrap();
        assert!(record.direct_download_urls.is_empty());
        assert_eq!(record.download_base64, None);
    }
}
