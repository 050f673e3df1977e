//! Upstream site client: listing and video page scraping.

mod video;

use std::sync::Arc;

use url::Url;
use vidrelay_core::ports::SourceResult;
use vidrelay_core::{SEARCH_RESULT_CAP, TopSort};

use crate::config::SourceClientConfig;
use crate::error::{ScrapeError, ScrapeResult};
use crate::http::{HttpBackend, ReqwestBackend};
use crate::parsing::{Selectors, VideoPage, parse_listing, parse_video_page};
use crate::port::map_error;
use crate::profile::{SiteProfile, render_path};

pub(crate) use video::ScrapedVideo;

// ============================================================================
// Type Aliases
// ============================================================================

/// Default source client using the reqwest HTTP backend.
pub type DefaultSourceClient = SourceClient<ReqwestBackend>;

// ============================================================================
// Client
// ============================================================================

/// Client for the upstream content site.
///
/// Generic over an HTTP backend for testing. Use [`DefaultSourceClient`]
/// in production code and talk to it through `VideoSourcePort`.
pub struct SourceClient<B: HttpBackend> {
    pub(crate) scraper: Arc<Scraper<B>>,
}

/// Shared scraping state, also held by every lazily-loaded video handle.
pub(crate) struct Scraper<B: HttpBackend> {
    backend: B,
    base_url: Url,
    profile: SiteProfile,
    selectors: Selectors,
}

impl DefaultSourceClient {
    /// Create a new client with the given configuration.
    ///
    /// Fails when the base URL or a profile selector is invalid.
    pub fn new(config: &SourceClientConfig) -> SourceResult<Self> {
        let backend = ReqwestBackend::new(&config.user_agent, config.timeout).map_err(map_error)?;
        Self::with_backend(config, backend).map_err(map_error)
    }
}

impl<B: HttpBackend> SourceClient<B> {
    /// Create a client over an arbitrary backend.
    pub(crate) fn with_backend(config: &SourceClientConfig, backend: B) -> ScrapeResult<Self> {
        let base_url = Url::parse(&config.base_url)?;
        if !is_http(&base_url) {
            return Err(ScrapeError::UnsupportedUrl {
                url: config.base_url.clone(),
                reason: "scheme must be http or https".to_string(),
            });
        }

        let selectors = Selectors::compile(&config.profile)?;

        Ok(Self {
            scraper: Arc::new(Scraper {
                backend,
                base_url,
                profile: config.profile.clone(),
                selectors,
            }),
        })
    }

    /// Collect video links from result pages `1..=pages`.
    ///
    /// Stops once [`SEARCH_RESULT_CAP`] links are collected, at the first
    /// page that adds no new links, or at a missing page after the first.
    /// Links repeated across pages are kept once.
    pub(crate) async fn search_videos(
        &self,
        query: &str,
        pages: u32,
    ) -> ScrapeResult<Vec<ScrapedVideo<B>>> {
        let mut links: Vec<Url> = Vec::new();

        for page in 1..=pages.max(1) {
            let page_param = page.to_string();
            let url = self.scraper.endpoint(
                &self.scraper.profile.search_path,
                &[("query", query), ("page", &page_param)],
            )?;

            let found = match self.scraper.listing(&url).await {
                Ok(found) => found,
                // Past the last page some sites answer 404 instead of an empty listing
                Err(ScrapeError::RequestFailed { status: 404, .. }) if page > 1 => break,
                Err(e) => return Err(e),
            };
            let before = links.len();
            for link in found {
                if !links.contains(&link) {
                    links.push(link);
                }
            }
            // An empty page, or one that repeats earlier results, ends the walk
            if links.len() == before || links.len() >= SEARCH_RESULT_CAP {
                break;
            }
        }
        links.truncate(SEARCH_RESULT_CAP);

        tracing::debug!(query, pages, results = links.len(), "Search complete");
        Ok(self.lazy_videos(links))
    }

    /// Load a single video page by URL.
    ///
    /// The URL must be absolute and on the configured site.
    pub(crate) async fn load_video(&self, url: &str) -> ScrapeResult<ScrapedVideo<B>> {
        let url = self.scraper.video_url(url)?;
        let page = self.scraper.video_page(&url).await?;
        Ok(ScrapedVideo::loaded(url, Arc::clone(&self.scraper), page))
    }

    pub(crate) async fn top_videos(&self, sort: TopSort) -> ScrapeResult<Vec<ScrapedVideo<B>>> {
        let template = match sort {
            TopSort::AllTime => &self.scraper.profile.top_all_time_path,
            TopSort::Week => &self.scraper.profile.top_week_path,
        };
        let url = self.scraper.endpoint(template, &[])?;
        let links = self.scraper.listing(&url).await?;

        tracing::debug!(sort = %sort, results = links.len(), "Top listing loaded");
        Ok(self.lazy_videos(links))
    }

    pub(crate) async fn performer_videos(
        &self,
        name: &str,
    ) -> ScrapeResult<Vec<ScrapedVideo<B>>> {
        let url = self
            .scraper
            .endpoint(&self.scraper.profile.performer_path, &[("name", name)])?;
        let links = self.scraper.listing(&url).await?;

        tracing::debug!(name, results = links.len(), "Performer listing loaded");
        Ok(self.lazy_videos(links))
    }

    /// Pick a random video.
    ///
    /// A redirect away from the random path lands on the video itself;
    /// otherwise the first listed video is taken.
    pub(crate) async fn random_video(&self) -> ScrapeResult<ScrapedVideo<B>> {
        let url = self
            .scraper
            .endpoint(&self.scraper.profile.random_path, &[])?;
        let page = self.scraper.backend.get_page(&url).await?;

        if page.url != url {
            let details = parse_video_page(&page.body, &page.url, &self.scraper.selectors)?;
            return Ok(ScrapedVideo::loaded(
                page.url,
                Arc::clone(&self.scraper),
                details,
            ));
        }

        if let Some(first) = parse_listing(&page.body, &page.url, &self.scraper.selectors)
            .into_iter()
            .next()
        {
            return Ok(ScrapedVideo::lazy(first, Arc::clone(&self.scraper)));
        }

        let details = parse_video_page(&page.body, &page.url, &self.scraper.selectors)?;
        Ok(ScrapedVideo::loaded(
            page.url,
            Arc::clone(&self.scraper),
            details,
        ))
    }

    fn lazy_videos(&self, links: Vec<Url>) -> Vec<ScrapedVideo<B>> {
        links
            .into_iter()
            .map(|link| ScrapedVideo::lazy(link, Arc::clone(&self.scraper)))
            .collect()
    }
}

impl<B: HttpBackend> Scraper<B> {
    /// Resolve a profile path template against the base URL.
    fn endpoint(&self, template: &str, params: &[(&str, &str)]) -> ScrapeResult<Url> {
        Ok(self.base_url.join(&render_path(template, params))?)
    }

    /// Validate a caller-supplied video URL.
    fn video_url(&self, raw: &str) -> ScrapeResult<Url> {
        let url = Url::parse(raw.trim())?;
        if !is_http(&url) {
            return Err(ScrapeError::UnsupportedUrl {
                url: raw.to_string(),
                reason: "scheme must be http or https".to_string(),
            });
        }
        if url.host_str() != self.base_url.host_str() {
            return Err(ScrapeError::UnsupportedUrl {
                url: raw.to_string(),
                reason: format!(
                    "host must be {}",
                    self.base_url.host_str().unwrap_or_default()
                ),
            });
        }
        Ok(url)
    }

    async fn listing(&self, url: &Url) -> ScrapeResult<Vec<Url>> {
        let page = self.backend.get_page(url).await?;
        Ok(parse_listing(&page.body, &page.url, &self.selectors))
    }

    pub(crate) async fn video_page(&self, url: &Url) -> ScrapeResult<VideoPage> {
        let page = self.backend.get_page(url).await?;
        parse_video_page(&page.body, &page.url, &self.selectors)
    }
}

fn is_http(url: &Url) -> bool {
    matches!(url.scheme(), "http" | "https")
}
