use crate::tests::{signed_in, test_state};
use crate::{AdminUser, ApiError, AppState, CurrentUser, GuestUser, OptionalUser, RealUser};

use axum::{body::Body, extract::FromRequestParts, http::Request, http::request::Parts};
use googletest::prelude::*;

fn parts_with(authorization: Option<&str>) -> Parts {
    let mut builder = Request::builder().uri("/api/v1/auth/profile");
    if let Some(value) = authorization {
        builder = builder.header("Authorization", value);
    }
    let (parts, _body) = builder.body(Body::empty()).unwrap().into_parts();
    parts
}

async fn extract<T>(state: &AppState, authorization: Option<&str>) -> Result<T, ApiError>
where
    T: FromRequestParts<AppState, Rejection = ApiError>,
{
    let mut parts = parts_with(authorization);
    T::from_request_parts(&mut parts, state).await
}

fn is_unauthorized(result: &Result<impl Sized, ApiError>) -> bool {
    matches!(result, Err(ApiError::Unauthorized { .. }))
}

fn forbidden_message<T>(result: Result<T, ApiError>) -> Option<String> {
    match result {
        Err(ApiError::Forbidden { message, .. }) => Some(message),
        _ => None,
    }
}

#[tokio::test]
async fn given_valid_token_when_extracting_current_user_then_profile_is_resolved() {
    let state = test_state().await;
    let (user, token) = signed_in(&state, "alice@example.com", false).await;

    let CurrentUser(resolved) = extract::<CurrentUser>(&state, Some(&format!("Bearer {token}")))
        .await
        .unwrap();

    assert_that!(resolved.id, eq(user.id));
    assert_that!(resolved.email, eq("alice@example.com"));
}

#[tokio::test]
async fn given_missing_header_when_extracting_current_user_then_unauthorized() {
    let state = test_state().await;

    let result = extract::<CurrentUser>(&state, None).await;

    assert!(is_unauthorized(&result));
}

#[tokio::test]
async fn given_basic_scheme_when_extracting_current_user_then_unauthorized() {
    let state = test_state().await;

    let result = extract::<CurrentUser>(&state, Some("Basic dXNlcjpwYXNz")).await;

    assert!(is_unauthorized(&result));
}

#[tokio::test]
async fn given_garbage_token_when_extracting_current_user_then_unauthorized() {
    let state = test_state().await;

    let result = extract::<CurrentUser>(&state, Some("Bearer not.a.jwt")).await;

    assert!(is_unauthorized(&result));
}

#[tokio::test]
async fn given_token_for_deleted_user_when_extracting_then_unauthorized() {
    let state = test_state().await;
    let (user, token) = signed_in(&state, "gone@example.com", false).await;
    state.users.delete(user.id).await.unwrap();

    let result = extract::<CurrentUser>(&state, Some(&format!("Bearer {token}"))).await;

    assert!(is_unauthorized(&result));
}

#[tokio::test]
async fn given_no_token_when_extracting_optional_user_then_anonymous() {
    let state = test_state().await;

    let OptionalUser(user) = extract::<OptionalUser>(&state, None).await.unwrap();

    assert_that!(user, none());
}

#[tokio::test]
async fn given_bad_token_when_extracting_optional_user_then_anonymous() {
    let state = test_state().await;

    let OptionalUser(user) = extract::<OptionalUser>(&state, Some("Bearer junk"))
        .await
        .unwrap();

    assert_that!(user, none());
}

#[tokio::test]
async fn given_valid_token_when_extracting_optional_user_then_identity_is_present() {
    let state = test_state().await;
    let (user, token) = signed_in(&state, "opt@example.com", false).await;

    let OptionalUser(resolved) =
        extract::<OptionalUser>(&state, Some(&format!("Bearer {token}")))
            .await
            .unwrap();

    assert_that!(resolved.map(|u| u.id), some(eq(user.id)));
}

#[tokio::test]
async fn given_guest_when_extracting_real_user_then_forbidden() {
    let state = test_state().await;
    let (_, token) = signed_in(&state, "guest@example.com", true).await;
    let header = format!("Bearer {token}");

    let real = extract::<RealUser>(&state, Some(&header)).await;
    let guest = extract::<GuestUser>(&state, Some(&header)).await;

    assert_that!(
        forbidden_message(real),
        some(eq("This action is not available for guest users"))
    );
    assert_that!(guest.map(|GuestUser(u)| u.is_guest), ok(eq(true)));
}

#[tokio::test]
async fn given_real_user_when_extracting_guest_user_then_forbidden() {
    let state = test_state().await;
    let (_, token) = signed_in(&state, "real@example.com", false).await;
    let header = format!("Bearer {token}");

    let guest = extract::<GuestUser>(&state, Some(&header)).await;
    let real = extract::<RealUser>(&state, Some(&header)).await;

    assert_that!(
        forbidden_message(guest),
        some(eq("This action is only available for guest users"))
    );
    assert_that!(real.map(|RealUser(u)| u.is_guest), ok(eq(false)));
}

#[tokio::test]
async fn given_non_admin_when_extracting_admin_user_then_forbidden() {
    let state = test_state().await;
    let (_, token) = signed_in(&state, "plain@example.com", false).await;

    let result = extract::<AdminUser>(&state, Some(&format!("Bearer {token}"))).await;

    assert_that!(forbidden_message(result), some(eq("Admin access required")));
}

#[tokio::test]
async fn given_granted_admin_when_extracting_admin_user_then_allowed() {
    let state = test_state().await;
    let (user, token) = signed_in(&state, "boss@example.com", false).await;
    state.users.grant_admin("boss@example.com").await.unwrap();

    let AdminUser(admin) = extract::<AdminUser>(&state, Some(&format!("Bearer {token}")))
        .await
        .unwrap();

    assert_that!(admin.id, eq(user.id));
    assert_that!(admin.is_admin, eq(true));
}

#[tokio::test]
async fn given_no_token_when_extracting_admin_user_then_unauthorized_not_forbidden() {
    let state = test_state().await;

    let result = extract::<AdminUser>(&state, None).await;

    assert!(is_unauthorized(&result));
}
