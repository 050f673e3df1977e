//! Shared helpers for the router integration tests.

#![allow(dead_code)]

pub mod fakes;

use std::sync::Arc;

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use http_body_util::BodyExt;
use tower::ServiceExt;

use fakes::{FakeFetcher, FakeSource};
use vidrelay_axum::bootstrap::{AxumContext, CorsConfig};
use vidrelay_axum::routes::create_router;

pub const API_KEY: &str = "test-secret";

/// Router over the given fakes.
pub fn app_with(source: Arc<FakeSource>, fetcher: Arc<FakeFetcher>, api_key: Option<&str>) -> Router {
    let ctx = AxumContext::new(source, fetcher, api_key.map(str::to_string));
    create_router(ctx, &CorsConfig::AllowAll)
}

/// Router over `source` with a default fetcher and no API key.
pub fn app(source: Arc<FakeSource>) -> Router {
    app_with(source, Arc::new(FakeFetcher::default()), None)
}

/// Issue a GET and decode the JSON body.
pub async fn get_json(app: &Router, uri: &str, api_key: Option<&str>) -> (StatusCode, serde_json::Value) {
    let mut builder = Request::builder().uri(uri);
    if let Some(key) = api_key {
        builder = builder.header("X-API-Key", key);
    }

    let response = app
        .clone()
        .oneshot(builder.body(Body::empty()).unwrap())
        .await
        .unwrap();

    let status = response.status();
    let body = response.into_body().collect().await.unwrap().to_bytes();
    let json = if body.is_empty() {
        serde_json::Value::Null
    } else {
        serde_json::from_slice(&body).unwrap_or_else(|e| {
            panic!("non-JSON body for {uri}: {e}: {}", String::from_utf8_lossy(&body))
        })
    };
    (status, json)
}
