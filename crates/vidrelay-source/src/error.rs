//! Internal error types for scraping operations.
//!
//! These errors are internal to `vidrelay-source` and are mapped to the
//! core `SourceError` at the port boundary.

use thiserror::Error;

/// Result type alias for scraping operations.
pub type ScrapeResult<T> = Result<T, ScrapeError>;

/// Errors raised while talking to or parsing the upstream site.
#[derive(Debug, Error)]
pub enum ScrapeError {
    /// Request failed with an HTTP error status.
    #[error("upstream request failed with status {status}: {url}")]
    RequestFailed {
        /// HTTP status code
        status: u16,
        /// The URL that was requested
        url: String,
    },

    /// A video page did not contain the expected markup.
    #[error("unexpected page layout at {url}: {message}")]
    UnexpectedLayout {
        /// The page that was parsed
        url: String,
        /// What was missing
        message: String,
    },

    /// A URL supplied by the caller was rejected.
    #[error("unsupported video URL '{url}': {reason}")]
    UnsupportedUrl {
        /// The rejected URL
        url: String,
        /// Why it was rejected
        reason: String,
    },

    /// A CSS selector in the site profile does not parse.
    #[error("invalid selector for {field}: {selector}")]
    InvalidSelector {
        /// Profile field holding the selector
        field: &'static str,
        /// The selector text
        selector: String,
    },

    /// Network or HTTP client error.
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    /// URL parsing error.
    #[error("invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_failed_error_message() {
        let error = ScrapeError::RequestFailed {
            status: 503,
            url: "https://videos.example.test/top".to_string(),
        };
        let msg = error.to_string();
        assert!(msg.contains("503"));
        assert!(msg.contains("videos.example.test"));
    }

    #[test]
    fn test_unsupported_url_error_message() {
        let error = ScrapeError::UnsupportedUrl {
            url: "ftp://x".to_string(),
            reason: "scheme must be http or https".to_string(),
        };
        assert!(error.to_string().contains("ftp://x"));
    }

    #[test]
    fn test_invalid_selector_names_field() {
        let error = ScrapeError::InvalidSelector {
            field: "title",
            selector: "h1[".to_string(),
        };
        assert!(error.to_string().contains("title"));
    }
}
