use crate::ApiError;

use lg_auth::AuthError;
use lg_core::{CoreError, ErrorLocation, FieldErrors};
use lg_db::DbError;

use std::panic::Location;

use axum::response::IntoResponse;
use googletest::prelude::*;
use http::StatusCode;
use http_body_util::BodyExt;

async fn render(error: ApiError) -> (StatusCode, serde_json::Value) {
    let response = error.into_response();
    let status = response.status();
    let body = response.into_body().collect().await.unwrap().to_bytes();
    (status, serde_json::from_slice(&body).unwrap())
}

#[tokio::test]
async fn given_two_field_failures_when_rendered_then_message_is_a_field_map() {
    let mut fields = FieldErrors::new();
    fields.add("name", "Name is required");
    fields.add("password", "Password must be at least 6 characters long");
    let error = ApiError::from(CoreError::ValidationFailed {
        fields,
        location: ErrorLocation::from(Location::caller()),
    });

    let (status, json) = render(error).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(
        json["message"],
        serde_json::json!({
            "name": ["Name is required"],
            "password": ["Password must be at least 6 characters long"],
        })
    );
    assert_eq!(json["error"], "Bad Request");
    assert_eq!(json["success"], false);
}

#[tokio::test]
async fn given_duplicate_email_when_rendered_then_409_with_message() {
    let error = ApiError::from(AuthError::DuplicateEmail {
        email: "john@example.com".to_string(),
        location: ErrorLocation::from(Location::caller()),
    });

    let (status, json) = render(error).await;

    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(
        json["message"],
        serde_json::json!(["User with email john@example.com already exists"])
    );
    assert_eq!(json["error"], "Conflict");
}

#[tokio::test]
async fn given_token_failures_when_rendered_then_all_collapse_to_unauthorized() {
    let failures = [
        AuthError::TokenExpired {
            location: ErrorLocation::from(Location::caller()),
        },
        AuthError::InvalidSignature {
            location: ErrorLocation::from(Location::caller()),
        },
        AuthError::MissingHeader {
            location: ErrorLocation::from(Location::caller()),
        },
        AuthError::InvalidScheme {
            location: ErrorLocation::from(Location::caller()),
        },
        AuthError::TokenMalformed {
            message: "bad segment count".to_string(),
            location: ErrorLocation::from(Location::caller()),
        },
    ];

    for failure in failures {
        let (status, json) = render(ApiError::from(failure)).await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);
        assert_eq!(json["message"], serde_json::json!(["Unauthorized"]));
        assert_eq!(json["error"], "Unauthorized");
    }
}

#[tokio::test]
async fn given_user_not_found_when_rendered_then_404_names_the_id() {
    let error = ApiError::from(AuthError::user_not_found("abc"));

    let (status, json) = render(error).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(json["message"], serde_json::json!(["User with ID abc not found"]));
}

#[tokio::test]
async fn given_forbidden_when_rendered_then_403_keeps_gate_message() {
    let error = ApiError::from(AuthError::forbidden("Admin access required"));

    let (status, json) = render(error).await;

    assert_eq!(status, StatusCode::FORBIDDEN);
    assert_eq!(json["message"], serde_json::json!(["Admin access required"]));
    assert_eq!(json["error"], "Forbidden");
}

#[tokio::test]
async fn given_store_failure_when_rendered_then_details_are_not_leaked() {
    let error = ApiError::from(AuthError::from(DbError::Initialization {
        message: "disk /var/secret is full".to_string(),
        location: ErrorLocation::from(Location::caller()),
    }));

    let (status, json) = render(error).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(json["message"], serde_json::json!(["Internal server error"]));
    assert_eq!(json["error"], "Internal Server Error");
    assert_that!(json.to_string(), not(contains_substring("/var/secret")));
}

#[tokio::test]
async fn given_invalid_uuid_when_converted_then_400_invalid_id() {
    let parse_error = uuid::Uuid::parse_str("not-a-uuid").unwrap_err();

    let (status, json) = render(ApiError::from(parse_error)).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["message"], serde_json::json!(["Invalid user ID format"]));
}

#[gtest]
fn given_invalid_email_error_when_converted_then_reported_on_email_field() {
    let error = ApiError::from(CoreError::InvalidEmail {
        value: "nope".to_string(),
        location: ErrorLocation::from(Location::caller()),
    });

    let envelope = error.to_envelope();
    let json = serde_json::to_value(&envelope).unwrap();

    assert_eq!(
        json["message"]["email"],
        serde_json::json!(["Email must be a valid email address"])
    );
}
