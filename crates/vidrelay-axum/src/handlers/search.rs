//! Search handler.

use axum::Json;
use axum::extract::State;
use vidrelay_core::SEARCH_RESULT_CAP;

use super::{shape_all, upstream_failure};
use crate::dto::{SearchParams, SearchRequest, SearchResponse, ValidQuery};
use crate::error::{HttpError, UpstreamStatus};
use crate::state::AppState;

/// Search the upstream site.
///
/// `page` is the number of result pages read, so larger values widen the
/// candidate pool; the response never holds more than
/// [`SEARCH_RESULT_CAP`] entries.
pub async fn search(
    State(state): State<AppState>,
    ValidQuery(params): ValidQuery<SearchParams>,
) -> Result<Json<SearchResponse>, HttpError> {
    let req = SearchRequest::try_from(params)?;

    let mut videos = state
        .source
        .search(&req.query, req.page)
        .await
        .map_err(upstream_failure("search", UpstreamStatus::Internal))?;
    videos.truncate(SEARCH_RESULT_CAP);

    let results = shape_all(&state.shaper, videos, req.as_base64).await;
    Ok(Json(SearchResponse {
        query: req.query,
        page: req.page,
        count: results.len(),
        results,
    }))
}
