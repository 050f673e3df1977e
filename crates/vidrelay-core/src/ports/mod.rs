//! Port definitions (trait abstractions) for external systems.
//!
//! Ports define what the core expects from infrastructure: an upstream
//! video source and a media fetcher. They use only domain types.

pub mod media_fetcher;
pub mod video_source;

pub use media_fetcher::{MediaFetchError, MediaFetcherPort};
pub use video_source::{SourceError, SourceResult, SourceVideo, VideoHandle, VideoSourcePort};
