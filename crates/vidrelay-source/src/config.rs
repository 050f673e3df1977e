//! Public configuration for the source client.
//!
//! Use the builder pattern methods to customize the client.
//!
//! # Example
//!
//! ```
//! use vidrelay_source::{SiteProfile, SourceClientConfig};
//! use std::time::Duration;
//!
//! let config = SourceClientConfig::new("https://videos.example.test")
//!     .with_timeout(Duration::from_secs(10))
//!     .with_profile(SiteProfile::default());
//! ```

use std::time::Duration;

use crate::profile::SiteProfile;

/// Configuration for the upstream site client.
#[derive(Debug, Clone)]
pub struct SourceClientConfig {
    /// Root URL of the upstream site
    pub(crate) base_url: String,
    /// User agent string for HTTP requests
    pub(crate) user_agent: String,
    /// Per-request timeout for page fetches
    pub(crate) timeout: Duration,
    /// Site layout
    pub(crate) profile: SiteProfile,
}

impl SourceClientConfig {
    /// Create a configuration for the site at `base_url` with default settings.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            user_agent: concat!("vidrelay/", env!("CARGO_PKG_VERSION")).to_string(),
            timeout: Duration::from_secs(30),
            profile: SiteProfile::default(),
        }
    }

    /// Set the user agent string for HTTP requests.
    #[must_use]
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    /// Set the page request timeout.
    ///
    /// Defaults to 30 seconds.
    #[must_use]
    pub const fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Set the site profile.
    #[must_use]
    pub fn with_profile(mut self, profile: SiteProfile) -> Self {
        self.profile = profile;
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}
