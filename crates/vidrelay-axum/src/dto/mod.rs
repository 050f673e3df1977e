//! Request and response shapes for the HTTP API.

pub mod query;
pub mod response;

pub use query::{
    ActorParams, ActorRequest, LookupParams, LookupRequest, RandomParams, SearchParams,
    SearchRequest, TopParams, TopRequest, ValidQuery,
};
pub use response::{ActorResponse, HealthResponse, SearchResponse, TopResponse};
