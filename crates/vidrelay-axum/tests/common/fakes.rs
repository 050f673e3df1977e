//! In-memory port implementations.

use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use vidrelay_core::ports::{
    MediaFetchError, MediaFetcherPort, SourceError, SourceResult, SourceVideo, VideoHandle,
    VideoSourcePort,
};
use vidrelay_core::TopSort;

/// A video with fixed fields.
#[derive(Debug, Clone, Default)]
pub struct FakeVideo {
    pub url: Option<String>,
    pub title: Option<String>,
    pub downloads: Vec<String>,
    /// When set, the title accessor fails.
    pub broken: bool,
}

impl FakeVideo {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: Some(url.into()),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn titled(mut self, title: &str) -> Self {
        self.title = Some(title.to_string());
        self
    }

    #[must_use]
    pub fn with_download(mut self, url: &str) -> Self {
        self.downloads.push(url.to_string());
        self
    }

    #[must_use]
    pub const fn broken(mut self) -> Self {
        self.broken = true;
        self
    }
}

#[async_trait]
impl SourceVideo for FakeVideo {
    fn url(&self) -> Option<&str> {
        self.url.as_deref()
    }

    async fn title(&self) -> SourceResult<Option<String>> {
        if self.broken {
            return Err(SourceError::InvalidResponse("title element missing".into()));
        }
        Ok(self.title.clone())
    }

    async fn direct_download_urls(&self) -> SourceResult<Vec<String>> {
        Ok(self.downloads.clone())
    }
}

/// Upstream that serves a fixed listing and counts calls.
#[derive(Default)]
pub struct FakeSource {
    pub listing: Vec<FakeVideo>,
    pub failure: Option<SourceError>,
    calls: AtomicUsize,
    searches: Mutex<Vec<(String, u32)>>,
    sorts: Mutex<Vec<TopSort>>,
}

impl FakeSource {
    /// `count` videos at `https://example.test/v/{i}` titled `Video {i}`.
    pub fn with_videos(count: usize) -> Self {
        let listing = (0..count)
            .map(|i| FakeVideo::new(format!("https://example.test/v/{i}")).titled(&format!("Video {i}")))
            .collect();
        Self::with_listing(listing)
    }

    pub fn with_listing(listing: Vec<FakeVideo>) -> Self {
        Self {
            listing,
            ..Self::default()
        }
    }

    pub fn failing(err: SourceError) -> Self {
        Self {
            failure: Some(err),
            ..Self::default()
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn searches(&self) -> Vec<(String, u32)> {
        self.searches.lock().unwrap().clone()
    }

    pub fn sorts(&self) -> Vec<TopSort> {
        self.sorts.lock().unwrap().clone()
    }

    fn begin(&self) -> SourceResult<()> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        match &self.failure {
            Some(err) => Err(err.clone()),
            None => Ok(()),
        }
    }

    fn handles(&self) -> Vec<VideoHandle> {
        self.listing
            .iter()
            .cloned()
            .map(|v| Box::new(v) as VideoHandle)
            .collect()
    }
}

#[async_trait]
impl VideoSourcePort for FakeSource {
    async fn search(&self, query: &str, pages: u32) -> SourceResult<Vec<VideoHandle>> {
        self.begin()?;
        self.searches.lock().unwrap().push((query.to_string(), pages));
        Ok(self.handles())
    }

    async fn get_video(&self, url: &str) -> SourceResult<VideoHandle> {
        self.begin()?;
        Ok(Box::new(FakeVideo::new(url).titled("Demo")))
    }

    async fn top(&self, sort: TopSort) -> SourceResult<Vec<VideoHandle>> {
        self.begin()?;
        self.sorts.lock().unwrap().push(sort);
        Ok(self.handles())
    }

    async fn by_performer(&self, _name: &str) -> SourceResult<Vec<VideoHandle>> {
        self.begin()?;
        Ok(self.handles())
    }

    async fn random(&self) -> SourceResult<VideoHandle> {
        self.begin()?;
        self.handles()
            .into_iter()
            .next()
            .ok_or_else(|| SourceError::NotFound("random listing is empty".into()))
    }
}

/// Media fetcher returning fixed bytes and counting calls.
#[derive(Default)]
pub struct FakeFetcher {
    calls: AtomicUsize,
}

impl FakeFetcher {
    pub const BODY: &'static [u8] = b"clip";

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl MediaFetcherPort for FakeFetcher {
    async fn fetch(&self, url: &str) -> Result<Vec<u8>, MediaFetchError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if url.contains("unreachable") {
            return Err(MediaFetchError::Network(format!("connection refused: {url}")));
        }
        Ok(Self::BODY.to_vec())
    }
}
