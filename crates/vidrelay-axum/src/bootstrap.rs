//! Axum server bootstrap - the composition root.
//!
//! This module is the ONLY place where the upstream client and the media
//! fetcher are instantiated. Handlers see them only through `AxumContext`.

use std::sync::Arc;

use anyhow::{Context, Result};
use vidrelay_core::ports::{MediaFetcherPort, VideoSourcePort};
use vidrelay_core::services::VideoShaper;
use vidrelay_source::{
    DefaultSourceClient, MediaFetcherConfig, ReqwestMediaFetcher, SourceClientConfig,
};

/// CORS configuration for the web server.
#[derive(Debug, Clone, Default)]
pub enum CorsConfig {
    /// Allow all origins.
    #[default]
    AllowAll,
    /// Allow specific origins.
    AllowOrigins(Vec<String>),
}

/// Server configuration for the Axum adapter.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Interface to bind.
    pub host: String,
    /// Port for the HTTP server.
    pub port: u16,
    /// Shared secret expected in `X-API-Key`. `None` disables the check.
    pub api_key: Option<String>,
    /// CORS configuration.
    pub cors: CorsConfig,
    /// Upstream site client settings.
    pub source: SourceClientConfig,
    /// Limits for base64 media downloads.
    pub media: MediaFetcherConfig,
}

impl ServerConfig {
    /// Create config for the given upstream with default server settings.
    pub fn new(source: SourceClientConfig) -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8000,
            api_key: None,
            cors: CorsConfig::default(),
            source,
            media: MediaFetcherConfig::default(),
        }
    }

    /// Set the bind address.
    #[must_use]
    pub fn with_address(mut self, host: impl Into<String>, port: u16) -> Self {
        self.host = host.into();
        self.port = port;
        self
    }

    /// Set the shared secret. An empty key leaves the API open.
    #[must_use]
    pub fn with_api_key(mut self, key: Option<String>) -> Self {
        self.api_key = key.filter(|k| !k.is_empty());
        self
    }

    /// Set CORS to allow specific origins.
    #[must_use]
    pub fn with_allowed_origins(mut self, origins: Vec<String>) -> Self {
        self.cors = CorsConfig::AllowOrigins(origins);
        self
    }

    /// Set the media download limits.
    #[must_use]
    pub fn with_media(mut self, media: MediaFetcherConfig) -> Self {
        self.media = media;
        self
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Application context for the Axum adapter.
///
/// Built once at startup and shared immutably by every request.
pub struct AxumContext {
    /// Upstream site client.
    pub source: Arc<dyn VideoSourcePort>,
    /// Response shaper, holding the media fetcher.
    pub shaper: Arc<VideoShaper>,
    /// Expected `X-API-Key` value, if auth is enabled.
    pub api_key: Option<Arc<str>>,
}

impl AxumContext {
    /// Assemble a context from already-built ports.
    pub fn new(
        source: Arc<dyn VideoSourcePort>,
        fetcher: Arc<dyn MediaFetcherPort>,
        api_key: Option<String>,
    ) -> Self {
        Self {
            source,
            shaper: Arc::new(VideoShaper::new(fetcher)),
            api_key: api_key.filter(|k| !k.is_empty()).map(Arc::from),
        }
    }

    pub const fn auth_enabled(&self) -> bool {
        self.api_key.is_some()
    }
}

/// Build the upstream client and media fetcher from configuration.
pub fn bootstrap(config: &ServerConfig) -> Result<AxumContext> {
    let source = DefaultSourceClient::new(&config.source)
        .with_context(|| format!("Invalid upstream source '{}'", config.source.base_url()))?;
    let fetcher = ReqwestMediaFetcher::new(&config.media).context("Failed to build media fetcher")?;

    let ctx = AxumContext::new(
        Arc::new(source),
        Arc::new(fetcher),
        config.api_key.clone(),
    );

    tracing::info!(
        source_url = config.source.base_url(),
        media_timeout_secs = config.media.timeout.as_secs(),
        media_max_bytes = config.media.max_bytes,
        auth_enabled = ctx.auth_enabled(),
        "Axum bootstrap complete"
    );

    Ok(ctx)
}

/// Start the web server and serve until it fails.
pub async fn start_server(config: ServerConfig) -> Result<()> {
    use tokio::net::TcpListener;
    use tracing::info;

    let ctx = bootstrap(&config)?;
    let app = crate::routes::create_router(ctx, &config.cors);

    let addr = config.bind_address();
    let listener = TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {addr}"))?;

    info!("vidrelay listening on http://{}", addr);

    axum::serve(listener, app).await?;
    Ok(())
}
