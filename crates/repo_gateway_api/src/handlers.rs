//! HTTP request handlers
//!
//! This module contains all request handlers for the REST API endpoints.
//! Handlers translate HTTP requests to upstream operations and upstream
//! results to HTTP responses.
//!
//! # Architecture
//!
//! Each handler is a straight-line sequence with no loops and no retries:
//! 1. Extract HTTP request data (path params, body)
//! 2. Validate the token, yielding a request-scoped client handle
//! 3. Call one upstream operation through the handle
//! 4. Map the result to a response, or terminate with an [`ApiError`]
//!
//! Token validation always precedes the upstream operation it guards, and
//! the client handle is dropped when the handler returns.

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    Json,
};
use github_client::{PullRequest, PullRequestListOptions, Repository, RepositoryListOptions};

use crate::{
    errors::ApiError,
    models::{
        request::{CreateRepositoryRequest, DeleteRepositoryRequest},
        response::{DataEnvelope, HealthResponse},
    },
    translation::{create_payload_from_request, map_auth_error, map_github_error},
    AppState,
};

#[cfg(test)]
#[path = "handlers_tests.rs"]
mod tests;

/// GET /
///
/// Root endpoint; answers with an empty envelope so callers can probe the
/// service without credentials.
pub async fn index() -> Json<DataEnvelope<serde_json::Value>> {
    Json(DataEnvelope::new(serde_json::Value::Null))
}

/// GET /health
///
/// Health check endpoint. Returns service status with version and timestamp;
/// no auth required and no upstream call made.
pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        version: Some(env!("CARGO_PKG_VERSION").to_string()),
        timestamp: chrono::Utc::now().to_rfc3339(),
    })
}

/// POST /repositories/{token}
///
/// Create a repository in the authenticated user's account.
///
/// Not idempotent: a second call with the same name hits the existence check
/// and returns 409.
pub async fn create_repository(
    State(state): State<AppState>,
    Path(token): Path<String>,
    body: Result<Json<CreateRepositoryRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<DataEnvelope<Repository>>), ApiError> {
    if token.is_empty() {
        return Err(ApiError::missing_params(["token"]));
    }

    let Json(request) = body.map_err(|_| ApiError::InvalidPayload)?;
    if request.name.is_empty() {
        return Err(ApiError::InvalidPayload);
    }

    let client = state
        .validator
        .validate(&token)
        .await
        .map_err(map_auth_error)?;

    // The repository lands in the caller's own account, so the existence
    // check runs against the authenticated user.
    let user = client.get_user().await.map_err(map_github_error)?;
    match client.get_repository(&user.login, &request.name).await {
        Ok(_) => return Err(ApiError::Conflict),
        Err(github_client::Error::NotFound) => {}
        Err(err) => return Err(map_github_error(err)),
    }

    let payload = create_payload_from_request(request);
    let repository = client
        .create_repository(&payload)
        .await
        .map_err(map_github_error)?;

    Ok((StatusCode::CREATED, Json(DataEnvelope::new(repository))))
}

/// DELETE /repositories/{token}
///
/// Delete a repository. Irreversible.
///
/// The repository must exist: the handler checks first and returns 404
/// rather than letting a blind delete surface an opaque upstream error.
pub async fn delete_repository(
    State(state): State<AppState>,
    Path(token): Path<String>,
    body: Result<Json<DeleteRepositoryRequest>, JsonRejection>,
) -> Result<StatusCode, ApiError> {
    if token.is_empty() {
        return Err(ApiError::missing_params(["token"]));
    }

    let Json(request) = body.map_err(|_| ApiError::InvalidPayload)?;
    if request.name.is_empty() {
        return Err(ApiError::InvalidPayload);
    }

    let client = state
        .validator
        .validate(&token)
        .await
        .map_err(map_auth_error)?;

    // An explicit owner in the body wins; otherwise the token's own account
    // is the acting owner.
    let owner = match request.owner {
        Some(owner) if !owner.is_empty() => owner,
        _ => client.get_user().await.map_err(map_github_error)?.login,
    };

    match client.get_repository(&owner, &request.name).await {
        Ok(_) => {}
        Err(github_client::Error::NotFound) => return Err(ApiError::NotFound),
        Err(err) => return Err(map_github_error(err)),
    }

    client
        .delete_repository(&owner, &request.name)
        .await
        .map_err(map_github_error)?;

    Ok(StatusCode::NO_CONTENT)
}

/// GET /repositories/{token}
///
/// List the authenticated caller's own repositories, most recently updated
/// first. Read-only; never mutates upstream state.
pub async fn list_repositories(
    State(state): State<AppState>,
    Path(token): Path<String>,
) -> Result<Json<DataEnvelope<Vec<Repository>>>, ApiError> {
    if token.is_empty() {
        return Err(ApiError::missing_params(["token"]));
    }

    let client = state
        .validator
        .validate(&token)
        .await
        .map_err(map_auth_error)?;

    let user = client.get_user().await.map_err(map_github_error)?;
    let repositories = client
        .list_repositories(&user.login, &RepositoryListOptions::default())
        .await
        .map_err(ApiError::internal)?;

    Ok(Json(DataEnvelope::new(repositories)))
}

/// GET /pull-requests/{username}/{repo_name}/{token}
///
/// List the open pull requests of a repository, newest first. Read-only;
/// never mutates upstream state.
pub async fn list_pull_requests(
    State(state): State<AppState>,
    Path((username, repo_name, token)): Path<(String, String, String)>,
) -> Result<Json<DataEnvelope<Vec<PullRequest>>>, ApiError> {
    let mut missing = Vec::new();
    if token.is_empty() {
        missing.push("token");
    }
    if username.is_empty() {
        missing.push("username");
    }
    if repo_name.is_empty() {
        missing.push("repoName");
    }
    if !missing.is_empty() {
        return Err(ApiError::missing_params(missing));
    }

    let client = state
        .validator
        .validate(&token)
        .await
        .map_err(map_auth_error)?;

    // Distinguish "repository does not exist" from "repository has no open
    // pull requests" before listing.
    match client.get_repository(&username, &repo_name).await {
        Ok(_) => {}
        Err(github_client::Error::NotFound) => return Err(ApiError::NotFound),
        Err(err) => return Err(map_github_error(err)),
    }

    let pull_requests = client
        .list_pull_requests(&username, &repo_name, &PullRequestListOptions::default())
        .await
        .map_err(map_github_error)?;

    Ok(Json(DataEnvelope::new(pull_requests)))
}
