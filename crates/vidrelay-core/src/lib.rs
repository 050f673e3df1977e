//! Core domain types, port definitions and services for vidrelay.
//!
//! This crate has no HTTP server or scraping dependencies. Adapters
//! (`vidrelay-source`, `vidrelay-axum`) depend on it, never the reverse.

#![deny(unused_crate_dependencies)]

pub mod domain;
pub mod ports;
pub mod services;
pub mod utils;

// Re-export commonly used types for convenience
pub use domain::{
    BrowseLimit, DEFAULT_BROWSE_LIMIT, MAX_BROWSE_LIMIT, SEARCH_RESULT_CAP, TopSort, VideoRecord,
};
pub use ports::{
    MediaFetchError, MediaFetcherPort, SourceError, SourceResult, SourceVideo, VideoHandle,
    VideoSourcePort,
};
pub use services::{ShapeError, ShapeOutcome, VideoShaper};
