//! Route definitions and router construction.

use axum::routing::get;
use axum::{Json, Router, middleware};
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::auth::require_api_key;
use crate::bootstrap::{AxumContext, CorsConfig};
use crate::dto::HealthResponse;
use crate::handlers;
use crate::state::AppState;

/// Build CORS layer from configuration.
fn build_cors_layer(config: &CorsConfig) -> CorsLayer {
    match config {
        CorsConfig::AllowAll => CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any),
        CorsConfig::AllowOrigins(origins) => {
            use axum::http::HeaderValue;
            let allowed: Vec<HeaderValue> = origins.iter().filter_map(|o| o.parse().ok()).collect();
            CorsLayer::new()
                .allow_origin(allowed)
                .allow_methods(Any)
                .allow_headers(Any)
        }
    }
}

/// Routes behind the API key gate.
///
/// Returned without `.with_state()` so the caller can attach the auth
/// `route_layer` first.
pub(crate) fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/search", get(handlers::search::search))
        .route("/video", get(handlers::videos::video))
        .route("/download-links", get(handlers::videos::download_links))
        .route("/random", get(handlers::videos::random))
        .route("/top", get(handlers::browse::top))
        .route("/actor", get(handlers::browse::actor))
}

/// Create the main router.
///
/// `/health` is always open; every other route requires the `X-API-Key`
/// header when the context carries a key.
pub fn create_router(ctx: AxumContext, cors_config: &CorsConfig) -> Router {
    let state: AppState = Arc::new(ctx);
    let auth_layer = middleware::from_fn_with_state(state.clone(), require_api_key);

    Router::new()
        .route("/health", get(health_check))
        .merge(api_routes().route_layer(auth_layer))
        .with_state(state)
        .layer(build_cors_layer(cors_config))
        .layer(TraceLayer::new_for_http())
}

/// Liveness probe.
pub(crate) async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse::ok())
}
