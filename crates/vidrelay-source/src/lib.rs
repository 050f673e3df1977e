//! Upstream site client for vidrelay.
//!
//! Implements the core `VideoSourcePort` by scraping a content site whose
//! layout is described by a [`SiteProfile`], and the `MediaFetcherPort`
//! with a size- and time-bounded reqwest download.
//!
//! ```no_run
//! use vidrelay_source::{DefaultSourceClient, SourceClientConfig};
//!
//! let config = SourceClientConfig::new("https://videos.example.test");
//! let client = DefaultSourceClient::new(&config).expect("valid config");
//! ```

#![deny(unsafe_code)]
#![deny(unused_crate_dependencies)]
// DefaultSourceClient is meant to be used through the VideoSourcePort trait,
// not its internal generic structure
#![allow(private_interfaces)]

mod client;
mod config;
mod error;
mod http;
mod media;
mod parsing;
mod port;
mod profile;

// ============================================================================
// Public API
// ============================================================================

// Client
pub use client::DefaultSourceClient;

// Media downloads
pub use media::{MediaFetcherConfig, ReqwestMediaFetcher};

// Configuration
pub use config::SourceClientConfig;
pub use profile::{ProfileError, SiteProfile};
