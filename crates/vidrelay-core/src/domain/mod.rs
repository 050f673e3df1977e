//! Core domain types.
//!
//! These types describe what the service hands back to HTTP clients,
//! independent of how the upstream site is scraped.
//!
//! # Structure
//!
//! - `video` - The flattened `VideoRecord` returned for every video
//! - `browse` - Sort keys and result limits for listing routes

mod browse;
mod video;

pub use browse::{
    BrowseLimit, DEFAULT_BROWSE_LIMIT, InvalidLimit, InvalidSort, MAX_BROWSE_LIMIT,
    SEARCH_RESULT_CAP, TopSort,
};
pub use video::VideoRecord;
