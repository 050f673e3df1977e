//! Main CLI parser.
//!
//! Every option can also be set through a `VIDRELAY_*` environment variable
//! (or a `.env` file, loaded before parsing).

use std::path::PathBuf;

use clap::Parser;

/// 64 MiB.
const DEFAULT_MEDIA_MAX_BYTES: u64 = 64 * 1024 * 1024;

/// HTTP relay for a video content site.
#[derive(Debug, Parser)]
#[command(name = "vidrelay")]
#[command(about = "Serve search and browse results from a video site as JSON")]
#[command(version)]
pub struct Cli {
    /// Interface to bind
    #[arg(long, env = "VIDRELAY_HOST", default_value = "0.0.0.0")]
    pub host: String,

    /// Port to listen on
    #[arg(long, env = "VIDRELAY_PORT", default_value_t = 8000)]
    pub port: u16,

    /// Shared secret required in the X-API-Key header (unset or empty disables auth)
    #[arg(long = "api-key", env = "VIDRELAY_API_KEY", hide_env_values = true)]
    pub api_key: Option<String>,

    /// Base URL of the upstream site
    #[arg(long = "source-url", env = "VIDRELAY_SOURCE_URL")]
    pub source_url: String,

    /// JSON file describing the upstream site's paths and selectors
    #[arg(long = "site-profile", env = "VIDRELAY_SITE_PROFILE")]
    pub site_profile: Option<PathBuf>,

    /// Timeout for upstream page requests, in seconds
    #[arg(long = "source-timeout-secs", env = "VIDRELAY_SOURCE_TIMEOUT_SECS", default_value_t = 30)]
    pub source_timeout_secs: u64,

    /// Timeout for media downloads embedded as base64, in seconds
    #[arg(long = "media-timeout-secs", env = "VIDRELAY_MEDIA_TIMEOUT_SECS", default_value_t = 60)]
    pub media_timeout_secs: u64,

    /// Largest media body embedded as base64, in bytes
    #[arg(
        long = "media-max-bytes",
        env = "VIDRELAY_MEDIA_MAX_BYTES",
        default_value_t = DEFAULT_MEDIA_MAX_BYTES
    )]
    pub media_max_bytes: u64,

    /// Allowed CORS origin (repeatable; all origins when omitted)
    #[arg(
        long = "cors-origin",
        env = "VIDRELAY_CORS_ORIGINS",
        value_delimiter = ','
    )]
    pub cors_origins: Vec<String>,

    /// Enable verbose/debug output
    #[arg(short = 'v', long = "verbose")]
    pub verbose: bool,
}
