//! Axum-specific error types and mappings.
//!
//! Every error body has the shape `{"detail": "<message>"}`.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use thiserror::Error;
use vidrelay_core::SourceError;

/// Status an upstream failure is reported with.
///
/// Lookups of a caller-supplied URL or name report 400; listing operations
/// that take no caller-supplied identifier report 500.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpstreamStatus {
    BadRequest,
    Internal,
}

impl UpstreamStatus {
    const fn status_code(self) -> StatusCode {
        match self {
            Self::BadRequest => StatusCode::BAD_REQUEST,
            Self::Internal => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

/// Axum-specific error type.
#[derive(Debug, Error)]
pub enum HttpError {
    /// Missing or wrong `X-API-Key`.
    #[error("Invalid or missing API Key")]
    Unauthorized,

    /// Query parameters failed validation.
    #[error("{0}")]
    Validation(String),

    /// The upstream client failed.
    #[error("{message}")]
    Upstream {
        status: UpstreamStatus,
        message: String,
    },
}

impl HttpError {
    pub fn upstream(status: UpstreamStatus, err: &SourceError) -> Self {
        Self::Upstream {
            status,
            message: err.to_string(),
        }
    }

    pub const fn status_code(&self) -> StatusCode {
        match self {
            Self::Unauthorized => StatusCode::UNAUTHORIZED,
            Self::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
            Self::Upstream { status, .. } => status.status_code(),
        }
    }
}

/// JSON error response body.
#[derive(Serialize)]
struct ErrorBody {
    detail: String,
}

impl IntoResponse for HttpError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = ErrorBody {
            detail: self.to_string(),
        };
        (status, axum::Json(body)).into_response()
    }
}
