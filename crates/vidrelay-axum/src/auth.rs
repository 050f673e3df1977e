//! `X-API-Key` gate for the API routes.

use axum::extract::{Request, State};
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};

use crate::error::HttpError;
use crate::state::AppState;

/// Header carrying the shared secret.
pub const API_KEY_HEADER: &str = "x-api-key";

/// Auth middleware: validate the `X-API-Key` header.
///
/// Passes every request through when no key is configured. Otherwise the
/// header must equal the configured key byte for byte, or the request is
/// answered with 401 before reaching the handler.
pub async fn require_api_key(State(state): State<AppState>, req: Request, next: Next) -> Response {
    let Some(expected) = state.api_key.as_deref() else {
        return next.run(req).await;
    };

    let provided = req.headers().get(API_KEY_HEADER).map(|v| v.as_bytes());

    match provided {
        Some(key) if key == expected.as_bytes() => next.run(req).await,
        _ => {
            tracing::warn!(
                path = %req.uri().path(),
                header_present = provided.is_some(),
                "Unauthorized API request - missing or invalid API key"
            );
            HttpError::Unauthorized.into_response()
        }
    }
}
