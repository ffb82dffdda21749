//! Translation between upstream results and HTTP types
//!
//! This module is the response-mapping half of the service: it converts
//! `github_client` and `auth_handler` errors into the [`ApiError`] taxonomy,
//! and inbound request bodies into upstream payloads. Translation happens at
//! the API boundary only; handlers contain no status-code knowledge of their
//! own.

use github_client::RepositoryCreatePayload;

use crate::{errors::ApiError, models::request::CreateRepositoryRequest};

#[cfg(test)]
#[path = "translation_tests.rs"]
mod tests;

/// Map an upstream client error onto the HTTP error taxonomy.
///
/// Upstream status codes translate 1:1 where a taxonomy entry exists;
/// everything else — including failures that never produced a status —
/// defaults to an internal error.
pub fn map_github_error(err: github_client::Error) -> ApiError {
    use github_client::Error;

    match err {
        Error::NotFound => ApiError::NotFound,
        Error::AuthError(message) => ApiError::Internal(message),
        Error::ApiError { status, message } => match status {
            400 => ApiError::InvalidPayload,
            401 => ApiError::Unauthenticated,
            403 => ApiError::Forbidden,
            404 => ApiError::NotFound,
            409 => ApiError::Conflict,
            422 => ApiError::UnprocessableEntity(message),
            _ => ApiError::Internal(message),
        },
        other => ApiError::internal(other),
    }
}

/// Map a token-validation failure onto the HTTP error taxonomy.
pub fn map_auth_error(err: auth_handler::AuthError) -> ApiError {
    use auth_handler::AuthError;

    match err {
        AuthError::MissingToken => ApiError::missing_params(["token"]),
        AuthError::InvalidCredentials => ApiError::Unauthenticated,
    }
}

/// Convert the inbound create-repository body into the upstream payload.
pub fn create_payload_from_request(request: CreateRepositoryRequest) -> RepositoryCreatePayload {
    RepositoryCreatePayload {
        name: request.name,
        private: request.private,
        ..Default::default()
    }
}
