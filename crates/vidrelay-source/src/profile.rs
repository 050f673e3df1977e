//! Site profile: where the upstream site keeps its listings and how its
//! video pages are laid out.
//!
//! Profiles are plain data so a new site layout needs a JSON file, not a
//! rebuild. Any field missing from the file keeps its default.

use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors loading a site profile.
#[derive(Debug, Error)]
pub enum ProfileError {
    #[error("failed to read site profile {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse site profile: {0}")]
    Json(#[from] serde_json::Error),
}

/// Paths and CSS selectors describing one upstream site.
///
/// Path templates are relative to the client's base URL and may contain
/// `{query}`, `{page}` and `{name}` placeholders, which are URL-encoded
/// on substitution.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SiteProfile {
    /// Search results page; placeholders `{query}` and `{page}` (1-based).
    pub search_path: String,
    /// All-time top listing.
    pub top_all_time_path: String,
    /// This week's top listing.
    pub top_week_path: String,
    /// Performer listing; placeholder `{name}`.
    pub performer_path: String,
    /// Page that serves (or redirects to) a random video.
    pub random_path: String,

    /// Links to video pages on any listing page.
    pub listing_link: String,
    pub title: String,
    pub performers: String,
    pub length: String,
    pub publish_date: String,
    pub thumbnails: String,
    /// Elements whose `src`/`href` point at downloadable video files.
    pub downloads: String,
}

impl Default for SiteProfile {
    fn default() -> Self {
        Self {
            search_path: "/search?q={query}&page={page}".to_string(),
            top_all_time_path: "/top".to_string(),
            top_week_path: "/top/week".to_string(),
            performer_path: "/performer/{name}".to_string(),
            random_path: "/random".to_string(),
            listing_link: "a.video-link".to_string(),
            title: "h1".to_string(),
            performers: "a.performer".to_string(),
            length: ".duration".to_string(),
            publish_date: "time".to_string(),
            thumbnails: "meta[property='og:image'], video[poster]".to_string(),
            downloads: "video source, a.download".to_string(),
        }
    }
}

impl SiteProfile {
    /// Parse a profile from JSON text.
    pub fn from_json_str(json: &str) -> Result<Self, ProfileError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Load a profile from a JSON file.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, ProfileError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| ProfileError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_json_str(&text)
    }
}

/// Substitute `{key}` placeholders in a path template, URL-encoding values.
pub(crate) fn render_path(template: &str, params: &[(&str, &str)]) -> String {
    params
        .iter()
        .fold(template.to_string(), |path, (key, value)| {
            path.replace(&format!("{{{key}}}"), &urlencoding::encode(value))
        })
}
