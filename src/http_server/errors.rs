//! # HTTP Errors
//!
//! Maps request and engine failures onto status codes and a JSON body.

use axum::http::{header, HeaderValue, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use thiserror::Error;

use crate::search::SearchError;

/// Result type for HTTP handlers
pub type ApiResult<T> = Result<T, ApiError>;

/// HTTP layer errors
#[derive(Debug, Clone, Error)]
pub enum ApiError {
    /// Malformed query parameter
    #[error("Invalid query parameter: {0}")]
    BadRequest(String),

    /// Failure reported by the search engine
    #[error("{0}")]
    Search(#[from] SearchError),
}

impl ApiError {
    /// Get HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::Search(SearchError::InvalidQuery(_)) => StatusCode::UNPROCESSABLE_ENTITY,
            ApiError::Search(SearchError::Overloaded { .. }) => StatusCode::SERVICE_UNAVAILABLE,
        }
    }
}

/// Error response body
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub code: u16,
}

impl From<&ApiError> for ErrorResponse {
    fn from(err: &ApiError) -> Self {
        Self {
            error: err.to_string(),
            code: err.status_code().as_u16(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let mut response = (status, Json(ErrorResponse::from(&self))).into_response();
        if matches!(self, ApiError::Search(ref e) if e.is_retryable()) {
            response
                .headers_mut()
                .insert(header::RETRY_AFTER, HeaderValue::from_static("1"));
        }
        response
    }
}
