//! Tests for translation module

use super::*;
use auth_handler::AuthError;
use github_client::Error;

use crate::errors::ApiError;
use crate::models::request::CreateRepositoryRequest;

fn api_error(status: u16) -> Error {
    Error::ApiError {
        status,
        message: format!("upstream said {status}"),
    }
}

#[test]
fn test_upstream_statuses_map_one_to_one() {
    assert!(matches!(
        map_github_error(api_error(400)),
        ApiError::InvalidPayload
    ));
    assert!(matches!(
        map_github_error(api_error(401)),
        ApiError::Unauthenticated
    ));
    assert!(matches!(
        map_github_error(api_error(403)),
        ApiError::Forbidden
    ));
    assert!(matches!(
        map_github_error(api_error(404)),
        ApiError::NotFound
    ));
    assert!(matches!(
        map_github_error(api_error(409)),
        ApiError::Conflict
    ));
    assert!(matches!(
        map_github_error(api_error(422)),
        ApiError::UnprocessableEntity(_)
    ));
}

#[test]
fn test_unrecognized_statuses_default_to_internal() {
    assert!(matches!(
        map_github_error(api_error(500)),
        ApiError::Internal(_)
    ));
    assert!(matches!(
        map_github_error(api_error(502)),
        ApiError::Internal(_)
    ));
    assert!(matches!(
        map_github_error(api_error(418)),
        ApiError::Internal(_)
    ));
}

#[test]
fn test_not_found_variant_maps_to_not_found() {
    assert!(matches!(
        map_github_error(Error::NotFound),
        ApiError::NotFound
    ));
}

#[test]
fn test_statusless_failures_default_to_internal() {
    assert!(matches!(
        map_github_error(Error::InvalidResponse),
        ApiError::Internal(_)
    ));
    assert!(matches!(
        map_github_error(Error::AuthError("no client".to_string())),
        ApiError::Internal(_)
    ));
}

#[test]
fn test_auth_errors_map_to_request_errors() {
    match map_auth_error(AuthError::MissingToken) {
        ApiError::MissingParameters(params) => assert_eq!(params, vec!["token"]),
        other => panic!("Expected MissingParameters, got {other:?}"),
    }
    assert!(matches!(
        map_auth_error(AuthError::InvalidCredentials),
        ApiError::Unauthenticated
    ));
}

#[test]
fn test_create_payload_carries_name_and_visibility() {
    let payload = create_payload_from_request(CreateRepositoryRequest {
        name: "x".to_string(),
        private: Some(true),
    });

    assert_eq!(payload.name, "x");
    assert_eq!(payload.private, Some(true));
    assert!(payload.description.is_none());
}
