//! Shared application state type.

use crate::bootstrap::AxumContext;
use std::sync::Arc;

/// Application state shared across all handlers.
///
/// An Arc-wrapped `AxumContext`, built once at startup and never mutated.
pub type AppState = Arc<AxumContext>;
