//! HTML parsing for listing and video pages.
//!
//! All functions here are synchronous: `scraper::Html` is not `Send`, so
//! documents are parsed and dropped without crossing an await point.

use scraper::{ElementRef, Html, Selector};
use url::Url;

use crate::error::{ScrapeError, ScrapeResult};
use crate::profile::SiteProfile;

/// Attributes that may carry a media or image URL, in preference order.
const URL_ATTRIBUTES: &[&str] = &["src", "data-src", "href", "content", "poster"];

/// Profile selectors compiled once at client construction.
#[derive(Debug)]
pub struct Selectors {
    listing_link: Selector,
    title: Selector,
    performers: Selector,
    length: Selector,
    publish_date: Selector,
    thumbnails: Selector,
    downloads: Selector,
}

impl Selectors {
    pub fn compile(profile: &SiteProfile) -> ScrapeResult<Self> {
        Ok(Self {
            listing_link: compile("listingLink", &profile.listing_link)?,
            title: compile("title", &profile.title)?,
            performers: compile("performers", &profile.performers)?,
            length: compile("length", &profile.length)?,
            publish_date: compile("publishDate", &profile.publish_date)?,
            thumbnails: compile("thumbnails", &profile.thumbnails)?,
            downloads: compile("downloads", &profile.downloads)?,
        })
    }
}

fn compile(field: &'static str, selector: &str) -> ScrapeResult<Selector> {
    Selector::parse(selector).map_err(|_| ScrapeError::InvalidSelector {
        field,
        selector: selector.to_string(),
    })
}

/// Details scraped from a single video page.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VideoPage {
    pub title: Option<String>,
    pub performers: Vec<String>,
    pub length: Option<String>,
    pub publish_date: Option<String>,
    pub thumbnails: Vec<String>,
    pub downloads: Vec<String>,
}

/// Extract video page links from a listing page, in page order, deduplicated.
pub fn parse_listing(body: &str, page_url: &Url, selectors: &Selectors) -> Vec<Url> {
    let document = Html::parse_document(body);
    let mut links: Vec<Url> = Vec::new();

    for element in document.select(&selectors.listing_link) {
        let Some(href) = element.value().attr("href") else {
            continue;
        };
        let Ok(link) = page_url.join(href.trim()) else {
            continue;
        };
        if matches!(link.scheme(), "http" | "https") && !links.contains(&link) {
            links.push(link);
        }
    }

    links
}

/// Extract video details from a video page.
///
/// Fails only when the page has no title, which means the URL did not
/// point at a video page at all.
pub fn parse_video_page(
    body: &str,
    page_url: &Url,
    selectors: &Selectors,
) -> ScrapeResult<VideoPage> {
    let document = Html::parse_document(body);

    let title = first_text(&document, &selectors.title).ok_or_else(|| {
        ScrapeError::UnexpectedLayout {
            url: page_url.to_string(),
            message: "no title element".to_string(),
        }
    })?;

    let mut performers: Vec<String> = Vec::new();
    for name in document.select(&selectors.performers).filter_map(element_text) {
        if !performers.contains(&name) {
            performers.push(name);
        }
    }

    Ok(VideoPage {
        title: Some(title),
        performers,
        length: first_text(&document, &selectors.length),
        publish_date: first_text(&document, &selectors.publish_date),
        thumbnails: collect_urls(&document, &selectors.thumbnails, page_url),
        downloads: collect_urls(&document, &selectors.downloads, page_url),
    })
}

/// Text of an element, or its `content` attribute for `<meta>`-style tags.
fn element_text(element: ElementRef<'_>) -> Option<String> {
    let text = element.value().attr("content").map_or_else(
        || element.text().collect::<String>(),
        ToString::to_string,
    );
    let text = text.split_whitespace().collect::<Vec<_>>().join(" ");
    (!text.is_empty()).then_some(text)
}

fn first_text(document: &Html, selector: &Selector) -> Option<String> {
    document.select(selector).find_map(element_text)
}

fn collect_urls(document: &Html, selector: &Selector, page_url: &Url) -> Vec<String> {
    let mut urls: Vec<String> = Vec::new();

    for element in document.select(selector) {
        let Some(raw) = URL_ATTRIBUTES
            .iter()
            .find_map(|attr| element.value().attr(attr))
            .map(str::trim)
            .filter(|raw| !raw.is_empty())
        else {
            continue;
        };

        // Inline payloads are relayed untouched
        let resolved = if raw.starts_with("data:") {
            Some(raw.to_string())
        } else {
            page_url.join(raw).ok().map(String::from)
        };

        if let Some(url) = resolved {
            if !urls.contains(&url) {
                urls.push(url);
            }
        }
    }

    urls
}
