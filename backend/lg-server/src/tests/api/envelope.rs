use crate::{ApiResponse, ErrorEnvelope, ErrorMessage};

use std::collections::BTreeMap;

use axum::response::IntoResponse;
use chrono::DateTime;
use googletest::prelude::*;
use http::StatusCode;
use http_body_util::BodyExt;

#[tokio::test]
async fn given_created_response_when_rendered_then_success_envelope_has_201_and_data() {
    let response = ApiResponse::created(serde_json::json!({"id": 7}), "User created successfully")
        .into_response();

    assert_eq!(response.status(), StatusCode::CREATED);

    let body = response.into_body().collect().await.unwrap().to_bytes();
    let json: serde_json::Value = serde_json::from_slice(&body).unwrap();

    assert_eq!(json["success"], true);
    assert_eq!(json["statusCode"], 201);
    assert_eq!(json["message"], serde_json::json!(["User created successfully"]));
    assert_eq!(json["data"]["id"], 7);
}

#[tokio::test]
async fn given_success_envelope_when_rendered_then_timestamp_is_rfc3339_utc() {
    let response = ApiResponse::ok("pong", "ok").into_response();

    let body = response.into_body().collect().await.unwrap().to_bytes();
    let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
    let timestamp = json["timestamp"].as_str().unwrap();

    assert_that!(timestamp, ends_with("Z"));
    assert_that!(DateTime::parse_from_rfc3339(timestamp), ok(anything()));
}

#[gtest]
fn given_field_messages_when_serialized_then_message_is_an_object() {
    let mut fields = BTreeMap::new();
    fields.insert("name".to_string(), vec!["Name is required".to_string()]);

    let envelope = ErrorEnvelope::new(StatusCode::BAD_REQUEST, ErrorMessage::Fields(fields));
    let json = serde_json::to_value(&envelope).unwrap();

    assert_eq!(json["success"], false);
    assert_eq!(json["error"], "Bad Request");
    assert_eq!(json["message"]["name"], serde_json::json!(["Name is required"]));
}

#[gtest]
fn given_list_message_when_serialized_then_message_is_an_array() {
    let envelope = ErrorEnvelope::new(
        StatusCode::CONFLICT,
        ErrorMessage::List(vec!["taken".to_string()]),
    );
    let json = serde_json::to_value(&envelope).unwrap();

    assert_eq!(json["statusCode"], 409);
    assert_eq!(json["error"], "Conflict");
    assert_eq!(json["message"], serde_json::json!(["taken"]));
}
