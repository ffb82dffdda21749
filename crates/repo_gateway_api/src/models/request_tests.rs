//! Tests for request models

use super::request::*;
use serde_json::json;

#[test]
fn test_create_request_deserializes_full_body() {
    let request: CreateRepositoryRequest =
        serde_json::from_value(json!({"name": "x", "private": true})).unwrap();

    assert_eq!(request.name, "x");
    assert_eq!(request.private, Some(true));
}

#[test]
fn test_create_request_private_is_optional() {
    let request: CreateRepositoryRequest = serde_json::from_value(json!({"name": "x"})).unwrap();

    assert_eq!(request.private, None);
}

#[test]
fn test_create_request_requires_name() {
    let result = serde_json::from_value::<CreateRepositoryRequest>(json!({"private": false}));

    assert!(result.is_err());
}

#[test]
fn test_delete_request_owner_is_optional() {
    let request: DeleteRepositoryRequest =
        serde_json::from_value(json!({"name": "doomed"})).unwrap();

    assert_eq!(request.name, "doomed");
    assert_eq!(request.owner, None);

    let request: DeleteRepositoryRequest =
        serde_json::from_value(json!({"name": "doomed", "owner": "some-org"})).unwrap();

    assert_eq!(request.owner.as_deref(), Some("some-org"));
}
