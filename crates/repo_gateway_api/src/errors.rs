//! Error handling and HTTP error conversion
//!
//! This module defines how failures are translated to HTTP error responses.
//! Every failure path in the service terminates in exactly one [`ApiError`],
//! which renders as a JSON body of the form `{"error": "<message>"}` — plus a
//! `missing_params` array when request parameters were absent.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};

#[cfg(test)]
#[path = "errors_tests.rs"]
mod tests;

/// The error taxonomy of the HTTP surface.
///
/// Upstream errors that carry a recognizable status code are mapped 1:1 onto
/// these variants (see `translation`); anything unrecognized defaults to
/// [`ApiError::Internal`]. The `thiserror` display strings double as the
/// user-visible `error` field of the response body.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// One or more required request parameters were empty or absent (400).
    #[error("Missing required parameters")]
    MissingParameters(Vec<String>),

    /// The request body could not be parsed into the expected shape (400).
    #[error("Invalid request payload")]
    InvalidPayload,

    /// The supplied token failed validation (401).
    #[error("Invalid access token")]
    Unauthenticated,

    /// The token is valid but lacks permission for the operation (403).
    #[error("Forbidden")]
    Forbidden,

    /// The referenced repository or user does not exist (404).
    #[error("Resource not found")]
    NotFound,

    /// The repository to create already exists (409).
    #[error("Conflict, repository already exists")]
    Conflict,

    /// The upstream API rejected the input as semantically invalid (422).
    #[error("Unprocessable entity: {0}")]
    UnprocessableEntity(String),

    /// An upstream or internal failure with no more specific mapping (500).
    #[error("Internal server error: {0}")]
    Internal(String),
}

impl ApiError {
    /// Build a missing-parameters error naming the absent fields.
    pub fn missing_params(params: impl IntoIterator<Item = impl Into<String>>) -> Self {
        ApiError::MissingParameters(params.into_iter().map(Into::into).collect())
    }

    /// Build an internal error from any displayable failure.
    pub fn internal(err: impl std::fmt::Display) -> Self {
        ApiError::Internal(err.to_string())
    }

    /// The HTTP status code this error renders as.
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::MissingParameters(_) | ApiError::InvalidPayload => StatusCode::BAD_REQUEST,
            ApiError::Unauthenticated => StatusCode::UNAUTHORIZED,
            ApiError::Forbidden => StatusCode::FORBIDDEN,
            ApiError::NotFound => StatusCode::NOT_FOUND,
            ApiError::Conflict => StatusCode::CONFLICT,
            ApiError::UnprocessableEntity(_) => StatusCode::UNPROCESSABLE_ENTITY,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

/// The JSON body of every error response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorBody {
    /// Human-readable error message
    pub error: String,

    /// Names of the missing request parameters, when that is the failure
    #[serde(skip_serializing_if = "Option::is_none")]
    pub missing_params: Option<Vec<String>>,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        log_error(&self, status);

        let missing_params = match &self {
            ApiError::MissingParameters(params) => Some(params.clone()),
            _ => None,
        };
        let body = ErrorBody {
            error: self.to_string(),
            missing_params,
        };

        (status, Json(body)).into_response()
    }
}

/// Log error with appropriate level based on HTTP status
fn log_error(error: &ApiError, status: StatusCode) {
    match status {
        StatusCode::INTERNAL_SERVER_ERROR | StatusCode::BAD_GATEWAY => {
            tracing::error!("API error: {} - {}", status, error);
        }
        StatusCode::BAD_REQUEST | StatusCode::NOT_FOUND => {
            tracing::warn!("API error: {} - {}", status, error);
        }
        _ => {
            tracing::info!("API error: {} - {}", status, error);
        }
    }
}
