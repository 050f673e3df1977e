//! Response envelopes.

use serde::Serialize;
use vidrelay_core::{ShapeOutcome, TopSort};

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
}

impl HealthResponse {
    pub const fn ok() -> Self {
        Self { status: "ok" }
    }
}

#[derive(Debug, Serialize)]
pub struct SearchResponse {
    pub query: String,
    pub page: u32,
    pub count: usize,
    pub results: Vec<ShapeOutcome>,
}

#[derive(Debug, Serialize)]
pub struct TopResponse {
    pub sort: TopSort,
    pub count: usize,
    pub results: Vec<ShapeOutcome>,
}

/// Performer listing. The `actress` key is the wire name clients expect.
#[derive(Debug, Serialize)]
pub struct ActorResponse {
    pub actress: String,
    pub count: usize,
    pub results: Vec<ShapeOutcome>,
}
