//! Conversion from parsed flags to server configuration.

use std::time::Duration;

use anyhow::{Context, Result};
use vidrelay_axum::ServerConfig;
use vidrelay_source::{MediaFetcherConfig, SiteProfile, SourceClientConfig};

use crate::parser::Cli;

impl Cli {
    /// Assemble the server configuration, loading the site profile if given.
    pub fn server_config(&self) -> Result<ServerConfig> {
        let profile = match &self.site_profile {
            Some(path) => SiteProfile::from_json_file(path)
                .with_context(|| format!("Failed to load site profile {}", path.display()))?,
            None => SiteProfile::default(),
        };

        let source = SourceClientConfig::new(self.source_url.clone())
            .with_timeout(Duration::from_secs(self.source_timeout_secs))
            .with_profile(profile);

        let media = MediaFetcherConfig {
            timeout: Duration::from_secs(self.media_timeout_secs),
            max_bytes: self.media_max_bytes,
            ..MediaFetcherConfig::default()
        };

        let mut config = ServerConfig::new(source)
            .with_address(self.host.clone(), self.port)
            .with_api_key(self.api_key.clone())
            .with_media(media);
        if !self.cors_origins.is_empty() {
            config = config.with_allowed_origins(self.cors_origins.clone());
        }
        Ok(config)
    }
}
