//! Query-string parameters and their validation.
//!
//! Each route has a raw `*Params` struct deserialized from the query string
//! and a validated `*Request` built from it. Both deserialization and
//! validation failures surface as [`HttpError::Validation`] (422).

use axum::extract::{FromRequestParts, Query};
use axum::http::request::Parts;
use serde::{Deserialize, Deserializer};
use vidrelay_core::{BrowseLimit, TopSort};

use crate::error::HttpError;

/// `Query` extractor whose rejection is a 422 `HttpError`.
pub struct ValidQuery<T>(pub T);

impl<S, T> FromRequestParts<S> for ValidQuery<T>
where
    T: serde::de::DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = HttpError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Query(value) = Query::<T>::from_request_parts(parts, state)
            .await
            .map_err(|rejection| HttpError::Validation(rejection.body_text()))?;
        Ok(Self(value))
    }
}

/// Lenient boolean: `true/false/1/0/yes/no/on/off`, any case.
fn deserialize_flag<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    parse_flag(&raw).ok_or_else(|| {
        serde::de::Error::custom(format!("invalid boolean value for as_base64: {raw:?}"))
    })
}

fn parse_flag(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" | "on" => Some(true),
        "false" | "0" | "no" | "off" => Some(false),
        _ => None,
    }
}

fn validate_limit(raw: Option<i64>) -> Result<BrowseLimit, HttpError> {
    raw.map_or_else(
        || Ok(BrowseLimit::default()),
        |value| BrowseLimit::new(value).map_err(|e| HttpError::Validation(e.to_string())),
    )
}

// ============================================================================
// /search
// ============================================================================

#[derive(Debug, Deserialize)]
pub struct SearchParams {
    pub query: String,
    pub page: Option<i64>,
    #[serde(default, deserialize_with = "deserialize_flag")]
    pub as_base64: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchRequest {
    pub query: String,
    /// Number of result pages to read, starting at page 1.
    pub page: u32,
    pub as_base64: bool,
}

impl TryFrom<SearchParams> for SearchRequest {
    type Error = HttpError;

    fn try_from(params: SearchParams) -> Result<Self, Self::Error> {
        if params.query.is_empty() {
            return Err(HttpError::Validation(
                "query must contain at least 1 character".to_string(),
            ));
        }
        let page = match params.page {
            None => 1,
            Some(p) => u32::try_from(p)
                .ok()
                .filter(|p| *p >= 1)
                .ok_or_else(|| HttpError::Validation(format!("page must be >= 1, got {p}")))?,
        };
        Ok(Self {
            query: params.query,
            page,
            as_base64: params.as_base64,
        })
    }
}

// ============================================================================
// /video and /download-links
// ============================================================================

#[derive(Debug, Deserialize)]
pub struct LookupParams {
    pub url: String,
    #[serde(default, deserialize_with = "deserialize_flag")]
    pub as_base64: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LookupRequest {
    pub url: String,
    pub as_base64: bool,
}

impl From<LookupParams> for LookupRequest {
    fn from(params: LookupParams) -> Self {
        Self {
            url: params.url,
            as_base64: params.as_base64,
        }
    }
}

// ============================================================================
// /top
// ============================================================================

#[derive(Debug, Deserialize)]
pub struct TopParams {
    pub sort: Option<String>,
    pub limit: Option<i64>,
    #[serde(default, deserialize_with = "deserialize_flag")]
    pub as_base64: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TopRequest {
    pub sort: TopSort,
    pub limit: BrowseLimit,
    pub as_base64: bool,
}

impl TryFrom<TopParams> for TopRequest {
    type Error = HttpError;

    fn try_from(params: TopParams) -> Result<Self, Self::Error> {
        let sort = match params.sort.as_deref() {
            None => TopSort::default(),
            Some(raw) => raw
                .parse::<TopSort>()
                .map_err(|e| HttpError::Validation(e.to_string()))?,
        };
        Ok(Self {
            sort,
            limit: validate_limit(params.limit)?,
            as_base64: params.as_base64,
        })
    }
}

// ============================================================================
// /actor
// ============================================================================

#[derive(Debug, Deserialize)]
pub struct ActorParams {
    pub name: String,
    pub limit: Option<i64>,
    #[serde(default, deserialize_with = "deserialize_flag")]
    pub as_base64: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActorRequest {
    pub name: String,
    pub limit: BrowseLimit,
    pub as_base64: bool,
}

impl TryFrom<ActorParams> for ActorRequest {
    type Error = HttpError;

    fn try_from(params: ActorParams) -> Result<Self, Self::Error> {
        Ok(Self {
            limit: validate_limit(params.limit)?,
            name: params.name,
            as_base64: params.as_base64,
        })
    }
}

// ============================================================================
// /random
// ============================================================================

#[derive(Debug, Default, Deserialize)]
pub struct RandomParams {
    #[serde(default, deserialize_with = "deserialize_flag")]
    pub as_base64: bool,
}
