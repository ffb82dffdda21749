//! Tests for routing configuration

use super::*;
use std::sync::Arc;

use async_trait::async_trait;
use auth_handler::{AuthError, AuthResult, TokenValidator};
use axum::{
    body::Body,
    http::{Request, StatusCode},
};
use github_client::GitHubOperations;
use tower::ServiceExt;

/// Validator that rejects everything; routing tests never get past it.
struct RejectAllValidator;

#[async_trait]
impl TokenValidator for RejectAllValidator {
    async fn validate(&self, _token: &str) -> AuthResult<Arc<dyn GitHubOperations>> {
        Err(AuthError::InvalidCredentials)
    }
}

fn test_app() -> axum::Router {
    create_router(AppState::new(Arc::new(RejectAllValidator)))
}

#[tokio::test]
async fn test_unknown_route_is_404() {
    let response = test_app()
        .oneshot(
            Request::builder()
                .uri("/no-such-route")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_unsupported_method_is_405() {
    let response = test_app()
        .oneshot(
            Request::builder()
                .method("PUT")
                .uri("/repositories/some-token")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
}

#[tokio::test]
async fn test_index_and_health_require_no_token() {
    for uri in ["/", "/health"] {
        let response = test_app()
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK, "uri: {uri}");
    }
}

#[tokio::test]
async fn test_responses_carry_a_request_id() {
    let response = test_app()
        .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
        .await
        .unwrap();

    let request_id = response
        .headers()
        .get("x-request-id")
        .expect("x-request-id header should be set");
    assert!(!request_id.to_str().unwrap().is_empty());
}

#[tokio::test]
async fn test_pull_request_route_requires_all_segments() {
    // Two segments instead of three never reaches the handler.
    let response = test_app()
        .oneshot(
            Request::builder()
                .uri("/pull-requests/octocat/some-token")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
