//! API error types with `IntoResponse` implementations
//!
//! Every failure crossing the HTTP boundary is one of four kinds, so callers
//! can tell bad input, missing authentication, upstream failures, and
//! gateway bugs apart. Each handler still catches at its own boundary and
//! renders its route's JSON error shape.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use desk_breeze::BreezeError;
use desk_genai::GenAiError;
use serde_json::json;
use thiserror::Error;

/// Gateway API error
#[derive(Debug, Error)]
pub enum ApiError {
    /// Request body failed validation
    #[error("{0}")]
    Validation(String),

    /// Upstream rejected or requires authentication
    #[error("{0}")]
    UpstreamAuth(String),

    /// Upstream call failed
    #[error("{0}")]
    Upstream(String),

    /// Gateway-side failure
    #[error("{0}")]
    Internal(String),
}

impl ApiError {
    /// HTTP status for this error kind
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::Validation(_) | Self::UpstreamAuth(_) => StatusCode::BAD_REQUEST,
            Self::Upstream(_) | Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    /// Breeze-route error shape: `{"status":"error","message":<text>}`
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = Json(json!({
            "status": "error",
            "message": self.to_string(),
        }));
        (status, body).into_response()
    }
}

impl From<BreezeError> for ApiError {
    fn from(err: BreezeError) -> Self {
        match err {
            BreezeError::NotAuthenticated | BreezeError::AuthenticationFailed(_) => {
                Self::UpstreamAuth(err.to_string())
            }
            other => Self::Upstream(other.to_string()),
        }
    }
}

impl From<GenAiError> for ApiError {
    fn from(err: GenAiError) -> Self {
        Self::Upstream(err.to_string())
    }
}

/// Error wrapper for the analysis route, which uses `{"error":<text>}`
#[derive(Debug, Error)]
#[error("{0}")]
pub struct AnalysisError(pub ApiError);

impl From<ApiError> for AnalysisError {
    fn from(err: ApiError) -> Self {
        Self(err)
    }
}

impl From<GenAiError> for AnalysisError {
    fn from(err: GenAiError) -> Self {
        Self(ApiError::from(err))
    }
}

impl IntoResponse for AnalysisError {
    fn into_response(self) -> Response {
        let status = self.0.status_code();
        let body = Json(json!({ "error": self.0.to_string() }));
        (status, body).into_response()
    }
}
