//! Top-list and performer handlers.

use axum::Json;
use axum::extract::State;

use super::{shape_all, upstream_failure};
use crate::dto::{
    ActorParams, ActorRequest, ActorResponse, TopParams, TopRequest, TopResponse, ValidQuery,
};
use crate::error::{HttpError, UpstreamStatus};
use crate::state::AppState;

/// Top-ranked videos for a sort window.
pub async fn top(
    State(state): State<AppState>,
    ValidQuery(params): ValidQuery<TopParams>,
) -> Result<Json<TopResponse>, HttpError> {
    let req = TopRequest::try_from(params)?;

    let mut videos = state
        .source
        .top(req.sort)
        .await
        .map_err(upstream_failure("top", UpstreamStatus::Internal))?;
    videos.truncate(req.limit.as_usize());

    let results = shape_all(&state.shaper, videos, req.as_base64).await;
    Ok(Json(TopResponse {
        sort: req.sort,
        count: results.len(),
        results,
    }))
}

/// Videos featuring a performer.
pub async fn actor(
    State(state): State<AppState>,
    ValidQuery(params): ValidQuery<ActorParams>,
) -> Result<Json<ActorResponse>, HttpError> {
    let req = ActorRequest::try_from(params)?;

    let mut videos = state
        .source
        .by_performer(&req.name)
        .await
        .map_err(upstream_failure("actor", UpstreamStatus::BadRequest))?;
    videos.truncate(req.limit.as_usize());

    let results = shape_all(&state.shaper, videos, req.as_base64).await;
    Ok(Json(ActorResponse {
        actress: req.name,
        count: results.len(),
        results,
    }))
}
