//! HTTP error mapping.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use thiserror::Error;

use crate::generation::{domain::GenerationDomainError, services::GenerationServiceError};

/// Errors returned to HTTP callers as `{"detail": <message>}`.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The request was malformed or failed validation (400).
    #[error("{0}")]
    BadRequest(String),
    /// The store could not serve a read (500).
    #[error("{0}")]
    Internal(String),
}

impl ApiError {
    /// Returns the HTTP status for this error.
    #[must_use]
    pub const fn status(&self) -> StatusCode {
        match self {
            Self::BadRequest(_) => StatusCode::BAD_REQUEST,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<GenerationServiceError> for ApiError {
    fn from(err: GenerationServiceError) -> Self {
        match err {
            GenerationServiceError::Validation(_) | GenerationServiceError::Render(_) => {
                Self::BadRequest(err.to_string())
            }
            GenerationServiceError::Store(_) => Self::Internal(err.to_string()),
        }
    }
}

impl From<GenerationDomainError> for ApiError {
    fn from(err: GenerationDomainError) -> Self {
        Self::BadRequest(err.to_string())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        (status, Json(json!({ "detail": self.to_string() }))).into_response()
    }
}
