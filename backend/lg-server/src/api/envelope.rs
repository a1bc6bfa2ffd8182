//! Uniform response envelopes
//!
//! Every enveloped response, success or failure, carries `success`,
//! `statusCode`, `message` and an RFC 3339 `timestamp`.

use std::collections::BTreeMap;

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use chrono::{SecondsFormat, Utc};
use serde::Serialize;

/// Current instant as `2026-01-01T00:00:00.000Z`.
pub fn timestamp() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true)
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SuccessEnvelope<T> {
    pub success: bool,
    pub status_code: u16,
    pub message: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    pub timestamp: String,
}

/// Either a flat list or per-field messages.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum ErrorMessage {
    List(Vec<String>),
    Fields(BTreeMap<String, Vec<String>>),
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorEnvelope {
    pub success: bool,
    pub status_code: u16,
    pub message: ErrorMessage,
    /// Canonical reason phrase of `status_code`
    pub error: String,
    pub timestamp: String,
}

impl ErrorEnvelope {
    pub fn new(status: StatusCode, message: ErrorMessage) -> Self {
        Self {
            success: false,
            status_code: status.as_u16(),
            message,
            error: status.canonical_reason().unwrap_or("Error").to_string(),
            timestamp: timestamp(),
        }
    }
}

/// Handler return type for enveloped successes.
#[derive(Debug)]
pub struct ApiResponse<T> {
    pub status: StatusCode,
    pub message: String,
    pub data: Option<T>,
}

impl<T> ApiResponse<T> {
    pub fn ok(data: T, message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::OK,
            message: message.into(),
            data: Some(data),
        }
    }

    pub fn created(data: T, message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::CREATED,
            message: message.into(),
            data: Some(data),
        }
    }
}

impl<T: Serialize> IntoResponse for ApiResponse<T> {
    fn into_response(self) -> Response {
        let body = SuccessEnvelope {
            success: true,
            status_code: self.status.as_u16(),
            message: vec![self.message],
            data: self.data,
            timestamp: timestamp(),
        };

        (self.status, Json(body)).into_response()
    }
}
