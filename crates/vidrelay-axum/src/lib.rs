//! Axum HTTP adapter for vidrelay.
//!
//! Exposes the search/browse/download routes, gates them behind the
//! optional `X-API-Key` check and maps upstream failures to HTTP errors.
//! [`bootstrap`] is the composition root: it builds the upstream client and
//! media fetcher once and hands them to the router.

#![deny(unsafe_code)]
#![deny(unused_crate_dependencies)]

// Silence unused dev-dependency warnings (used by integration tests)
#[cfg(test)]
use async_trait as _;
#[cfg(test)]
use http_body_util as _;
#[cfg(test)]
use serde_json as _;
#[cfg(test)]
use tower as _;

pub mod auth;
pub mod bootstrap;
pub mod dto;
pub mod error;
pub mod handlers;
pub mod routes;
pub mod state;

// Re-export primary types
pub use bootstrap::{AxumContext, CorsConfig, ServerConfig, bootstrap, start_server};
pub use error::HttpError;
pub use routes::create_router;
pub use state::AppState;
