//! Tests for error handling module

use super::*;
use axum::response::IntoResponse;

async fn response_json(error: ApiError) -> (StatusCode, serde_json::Value) {
    let response = error.into_response();
    let status = response.status();
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    (status, serde_json::from_slice(&body).unwrap())
}

#[test]
fn test_status_codes_follow_the_taxonomy() {
    assert_eq!(
        ApiError::missing_params(["token"]).status_code(),
        StatusCode::BAD_REQUEST
    );
    assert_eq!(ApiError::InvalidPayload.status_code(), StatusCode::BAD_REQUEST);
    assert_eq!(
        ApiError::Unauthenticated.status_code(),
        StatusCode::UNAUTHORIZED
    );
    assert_eq!(ApiError::Forbidden.status_code(), StatusCode::FORBIDDEN);
    assert_eq!(ApiError::NotFound.status_code(), StatusCode::NOT_FOUND);
    assert_eq!(ApiError::Conflict.status_code(), StatusCode::CONFLICT);
    assert_eq!(
        ApiError::UnprocessableEntity("bad name".to_string()).status_code(),
        StatusCode::UNPROCESSABLE_ENTITY
    );
    assert_eq!(
        ApiError::internal("boom").status_code(),
        StatusCode::INTERNAL_SERVER_ERROR
    );
}

#[tokio::test]
async fn test_missing_parameters_body_lists_fields() {
    let (status, json) = response_json(ApiError::missing_params(["token", "username"])).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["error"], "Missing required parameters");
    assert_eq!(
        json["missing_params"]
            .as_array()
            .unwrap()
            .iter()
            .map(|v| v.as_str().unwrap())
            .collect::<Vec<_>>(),
        vec!["token", "username"]
    );
}

#[tokio::test]
async fn test_other_errors_omit_missing_params_key() {
    let (status, json) = response_json(ApiError::Conflict).await;

    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(json["error"], "Conflict, repository already exists");
    assert!(json.get("missing_params").is_none());
}

#[tokio::test]
async fn test_internal_error_message_is_prefixed() {
    let (status, json) = response_json(ApiError::internal("upstream exploded")).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(json["error"], "Internal server error: upstream exploded");
}

#[tokio::test]
async fn test_unprocessable_entity_carries_upstream_message() {
    let (status, json) =
        response_json(ApiError::UnprocessableEntity("name already exists".to_string())).await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(json["error"], "Unprocessable entity: name already exists");
}
