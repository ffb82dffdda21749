//! Unit tests for the GitHub-backed token validator.

use super::*;
use serde_json::json;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[tokio::test]
async fn test_validate_empty_token_fails_without_upstream_call() {
    let mock_server = MockServer::start().await;

    // Any request reaching the server would violate the contract.
    Mock::given(method("GET"))
        .and(path("/user"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&mock_server)
        .await;

    let validator = GitHubTokenValidator::with_api_root(mock_server.uri());
    let result = validator.validate("").await;

    assert!(matches!(result, Err(AuthError::MissingToken)));
}

#[tokio::test]
async fn test_validate_accepts_token_the_user_endpoint_accepts() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/user"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "login": "octocat",
            "id": 583231
        })))
        .mount(&mock_server)
        .await;

    let validator = GitHubTokenValidator::with_api_root(mock_server.uri());
    let client = validator
        .validate("ghp_goodtoken")
        .await
        .expect("validation should succeed");

    // The returned handle is already authenticated and usable.
    let user = client.get_user().await.expect("handle should work");
    assert_eq!(user.login, "octocat");
}

#[tokio::test]
async fn test_validate_rejects_token_the_user_endpoint_rejects() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/user"))
        .respond_with(ResponseTemplate::new(401).set_body_json(json!({
            "message": "Bad credentials",
            "documentation_url": "https://docs.github.com/rest"
        })))
        .mount(&mock_server)
        .await;

    let validator = GitHubTokenValidator::with_api_root(mock_server.uri());
    let result = validator.validate("ghp_badtoken").await;

    assert!(matches!(result, Err(AuthError::InvalidCredentials)));
}

#[tokio::test]
async fn test_validate_collapses_unreachable_api_to_invalid_credentials() {
    // Nothing listens on this port; the network failure must look exactly
    // like a bad token to the caller.
    let validator = GitHubTokenValidator::with_api_root("http://127.0.0.1:1");
    let result = validator.validate("ghp_sometoken").await;

    assert!(matches!(result, Err(AuthError::InvalidCredentials)));
}

#[test]
fn test_debug_does_not_require_token() {
    let validator = GitHubTokenValidator::new();
    let rendered = format!("{:?}", validator);

    assert!(rendered.contains("api.github.com"));
}
