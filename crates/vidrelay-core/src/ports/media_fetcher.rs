//! Media fetcher port used when a caller asks for an inline base64 body.

use async_trait::async_trait;
use thiserror::Error;

/// Errors from fetching a media body.
#[derive(Debug, Clone, Error)]
pub enum MediaFetchError {
    /// The request did not finish within the configured timeout.
    #[error("media fetch timed out: {url}")]
    Timeout { url: String },

    /// The body exceeded the configured size cap.
    #[error("media body exceeds {limit} bytes: {url}")]
    TooLarge { url: String, limit: u64 },

    /// The server answered with a non-success status.
    #[error("media fetch failed with status {status}: {url}")]
    Status { url: String, status: u16 },

    /// Network or connectivity error.
    #[error("media fetch failed: {0}")]
    Network(String),
}

/// Port for downloading a media body into memory.
///
/// Implementations must bound both time and size; the whole body is held
/// in memory before it is encoded.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait MediaFetcherPort: Send + Sync {
    async fn fetch(&self, url: &str) -> Result<Vec<u8>, MediaFetchError>;
}
