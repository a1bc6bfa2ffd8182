#![allow(dead_code)]

//! Test infrastructure for lg-server API tests

use lg_auth::{PasswordHasher, TokenConfig, TokenService};
use lg_db::{UserRepository, UserStore};
use lg_server::{AppState, build_router};

use std::sync::Arc;
use std::time::Duration;

use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode, header},
};
use http_body_util::BodyExt;
use serde_json::{Value, json};
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use tower::ServiceExt;

pub const SECRET: &str = "integration-secret-integration-secret-42";
pub const PASSWORD: &str = "password123";

/// Create AppState over an in-memory SQLite store with cheap hashing
pub async fn create_test_app_state() -> AppState {
    let options = SqliteConnectOptions::new()
        .filename(":memory:")
        .create_if_missing(true);

    // In-memory needs single connection
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect_with(options)
        .await
        .expect("Failed to create test pool");

    lg_db::run_migrations(&pool)
        .await
        .expect("Failed to run migrations");

    let params = argon2::Params::new(8, 1, 1, None).expect("valid argon2 params");
    let store: Arc<dyn UserStore> = Arc::new(UserRepository::new(pool));

    AppState::new(
        store,
        PasswordHasher::with_params(params),
        TokenService::new(TokenConfig::new(SECRET, Duration::from_secs(3600))),
    )
}

pub async fn create_test_app() -> (AppState, Router) {
    let state = create_test_app_state().await;
    let app = build_router(state.clone());
    (state, app)
}

/// Send one request through the router and decode the JSON body (Null when empty)
pub async fn send(
    app: &Router,
    method: &str,
    uri: &str,
    body: Option<Value>,
    token: Option<&str>,
) -> (StatusCode, Value) {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(token) = token {
        builder = builder.header(header::AUTHORIZATION, format!("Bearer {}", token));
    }

    let request = match body {
        Some(body) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();

    let json = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };

    (status, json)
}

/// Register through the API and return the created profile
pub async fn register(app: &Router, name: &str, email: &str) -> Value {
    let (status, json) = send(
        app,
        "POST",
        "/api/v1/auth/register",
        Some(json!({"name": name, "email": email, "password": PASSWORD})),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::CREATED, "register failed: {}", json);
    json["data"].clone()
}

/// Log in through the API and return the access token
pub async fn login(app: &Router, email: &str) -> String {
    let (status, json) = send(
        app,
        "POST",
        "/api/v1/auth/login",
        Some(json!({"email": email, "password": PASSWORD})),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK, "login failed: {}", json);
    json["data"]["accessToken"].as_str().unwrap().to_string()
}

/// Register, promote to admin, and return a token for the admin
pub async fn admin_token(state: &AppState, app: &Router) -> String {
    register(app, "Admin", "admin@example.com").await;
    state
        .users
        .grant_admin("admin@example.com")
        .await
        .expect("Failed to grant admin");
    login(app, "admin@example.com").await
}
