//! Error envelopes shared by every endpoint.
//!
//! Two shapes exist:
//! - 422 `{error, details, tip}` for requests that cannot be parsed or have
//!   empty fields
//! - 400/500 `{detail}` for everything else

use axum::extract::rejection::{JsonRejection, QueryRejection};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;

/// Fixed `error` value of the 422 envelope.
pub const INVALID_REQUEST_ERROR: &str = "Invalid request format";

/// Fixed `tip` value of the 422 envelope.
pub const INVALID_REQUEST_TIP: &str =
    "Make sure your JSON is properly formatted. Escape quotes with \\ and newlines with \\n";

/// Body of a 422 response.
#[derive(Debug, Clone, Serialize)]
pub struct InvalidRequestResponse {
    pub error: &'static str,
    pub details: String,
    pub tip: &'static str,
}

impl InvalidRequestResponse {
    pub fn new(details: impl Into<String>) -> Self {
        Self {
            error: INVALID_REQUEST_ERROR,
            details: details.into(),
            tip: INVALID_REQUEST_TIP,
        }
    }
}

/// Body of a 400/500 response.
#[derive(Debug, Clone, Serialize)]
pub struct DetailResponse {
    pub detail: String,
}

/// API error type that converts handler errors to HTTP responses.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// 422 with the parser or field message as `details`.
    InvalidRequest(String),
    /// 400 with `detail`.
    BadRequest(String),
    /// 500 with `detail`.
    Internal(String),
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::InvalidRequest(rejection.body_text())
    }
}

impl From<QueryRejection> for ApiError {
    fn from(rejection: QueryRejection) -> Self {
        ApiError::InvalidRequest(rejection.body_text())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::InvalidRequest(details) => (
                StatusCode::UNPROCESSABLE_ENTITY,
                Json(InvalidRequestResponse::new(details)),
            )
                .into_response(),
            ApiError::BadRequest(detail) => {
                (StatusCode::BAD_REQUEST, Json(DetailResponse { detail })).into_response()
            }
            ApiError::Internal(detail) => {
                (StatusCode::INTERNAL_SERVER_ERROR, Json(DetailResponse { detail })).into_response()
            }
        }
    }
}
