//! The flattened video shape returned by every video route.

use serde::{Deserialize, Serialize};

/// A video flattened into a JSON-friendly record.
///
/// Built fresh for each request from an upstream [`SourceVideo`] and never
/// stored. Only `url` is guaranteed; every other field degrades to
/// `null` or an empty list when the upstream page lacks it.
///
/// [`SourceVideo`]: crate::ports::SourceVideo
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VideoRecord {
    /// Canonical page URL of the video.
    pub url: String,
    pub title: Option<String>,
    /// Performer names in page order.
    pub performers: Vec<String>,
    /// Human-readable duration as shown by the site (e.g. `"12:34"`).
    pub length: Option<String>,
    pub publish_date: Option<String>,
    pub thumbnails: Vec<String>,
    /// Direct download URLs, best quality first when the site orders them so.
    pub direct_download_urls: Vec<String>,
    /// Base64 body of the first direct download URL.
    ///
    /// Present only when the caller asked for it and extraction succeeded.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub download_base64: Option<String>,
}

impl VideoRecord {
    /// Create a record with only the URL populated.
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            ..Default::default()
        }
    }
}
