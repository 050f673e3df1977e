//! Bounded media downloads for base64 embedding.

use std::time::Duration;

use async_trait::async_trait;
use vidrelay_core::ports::{MediaFetchError, MediaFetcherPort};

/// Limits for media downloads.
#[derive(Debug, Clone)]
pub struct MediaFetcherConfig {
    /// Whole-request timeout, body included
    pub timeout: Duration,
    /// Largest body accepted, in bytes
    pub max_bytes: u64,
    pub user_agent: String,
}

impl Default for MediaFetcherConfig {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(60),
            max_bytes: 64 * 1024 * 1024, // 64 MiB
            user_agent: concat!("vidrelay/", env!("CARGO_PKG_VERSION")).to_string(),
        }
    }
}

/// `MediaFetcherPort` implementation over reqwest.
///
/// The body is read chunk by chunk so an oversized response is abandoned
/// as soon as it crosses `max_bytes`, even without a `Content-Length`.
pub struct ReqwestMediaFetcher {
    client: reqwest::Client,
    max_bytes: u64,
}

impl ReqwestMediaFetcher {
    pub fn new(config: &MediaFetcherConfig) -> Result<Self, MediaFetchError> {
        let client = reqwest::Client::builder()
            .user_agent(config.user_agent.as_str())
            .timeout(config.timeout)
            .build()
            .map_err(|e| MediaFetchError::Network(e.to_string()))?;

        Ok(Self {
            client,
            max_bytes: config.max_bytes,
        })
    }
}

fn map_reqwest_error(url: &str, err: &reqwest::Error) -> MediaFetchError {
    if err.is_timeout() {
        MediaFetchError::Timeout {
            url: url.to_string(),
        }
    } else {
        MediaFetchError::Network(err.to_string())
    }
}

#[async_trait]
impl MediaFetcherPort for ReqwestMediaFetcher {
    async fn fetch(&self, url: &str) -> Result<Vec<u8>, MediaFetchError> {
        let too_large = || MediaFetchError::TooLarge {
            url: url.to_string(),
            limit: self.max_bytes,
        };

        let mut response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| map_reqwest_error(url, &e))?;

        let status = response.status();
        if !status.is_success() {
            return Err(MediaFetchError::Status {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }

        if response.content_length().is_some_and(|len| len > self.max_bytes) {
            return Err(too_large());
        }

        let mut body: Vec<u8> = Vec::new();
        while let Some(chunk) = response
            .chunk()
            .await
            .map_err(|e| map_reqwest_error(url, &e))?
        {
            if body.len() as u64 + chunk.len() as u64 > self.max_bytes {
                return Err(too_large());
            }
            body.extend_from_slice(&chunk);
        }

        tracing::debug!(url, bytes = body.len(), "Media body downloaded");
        Ok(body)
    }
}
