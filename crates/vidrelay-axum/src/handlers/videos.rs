//! Single-video handlers.

use axum::Json;
use axum::extract::State;
use vidrelay_core::ShapeOutcome;

use super::upstream_failure;
use crate::dto::{LookupParams, LookupRequest, RandomParams, ValidQuery};
use crate::error::{HttpError, UpstreamStatus};
use crate::state::AppState;

async fn lookup(
    state: &AppState,
    operation: &'static str,
    req: LookupRequest,
) -> Result<Json<ShapeOutcome>, HttpError> {
    let video = state
        .source
        .get_video(&req.url)
        .await
        .map_err(upstream_failure(operation, UpstreamStatus::BadRequest))?;

    Ok(Json(state.shaper.shape(video.as_ref(), req.as_base64).await))
}

/// Details for one video page.
pub async fn video(
    State(state): State<AppState>,
    ValidQuery(params): ValidQuery<LookupParams>,
) -> Result<Json<ShapeOutcome>, HttpError> {
    lookup(&state, "video", params.into()).await
}

/// Details for one video page, for clients that want its download links.
pub async fn download_links(
    State(state): State<AppState>,
    ValidQuery(params): ValidQuery<LookupParams>,
) -> Result<Json<ShapeOutcome>, HttpError> {
    lookup(&state, "download_links", params.into()).await
}

/// A random video.
pub async fn random(
    State(state): State<AppState>,
    ValidQuery(params): ValidQuery<RandomParams>,
) -> Result<Json<ShapeOutcome>, HttpError> {
    let video = state
        .source
        .random()
        .await
        .map_err(upstream_failure("random", UpstreamStatus::Internal))?;

    Ok(Json(state.shaper.shape(video.as_ref(), params.as_base64).await))
}
