/// Router-level tests that need no database
///
/// These drive the full axum router over a lazily-connected pool. The
/// health and validation paths never reach the database, so they run
/// anywhere.

mod common;

use axum::http::StatusCode;
use common::{error_fields, expect_json, TestContext};
use serde_json::json;

#[tokio::test]
async fn test_health_returns_fixed_payload() {
    let ctx = TestContext::new();

    let response = ctx.get("/health").await;
    let body = expect_json(response, StatusCode::OK).await;

    assert_eq!(
        body,
        json!({
            "status": "ok",
            "message": "Users service is running"
        })
    );
}

#[tokio::test]
async fn test_create_user_missing_email_returns_400() {
    let ctx = TestContext::new();

    let response = ctx.post_json("/users", r#"{"username":"bob"}"#).await;
    let body = expect_json(response, StatusCode::BAD_REQUEST).await;

    assert_eq!(body["error"], "validation_error");
    assert_eq!(error_fields(&body), vec!["email"]);
}

#[tokio::test]
async fn test_create_user_missing_both_fields_returns_400() {
    let ctx = TestContext::new();

    let response = ctx.post_json("/users", "{}").await;
    let body = expect_json(response, StatusCode::BAD_REQUEST).await;

    assert_eq!(error_fields(&body), vec!["email", "username"]);
}

#[tokio::test]
async fn test_create_user_empty_username_returns_400() {
    let ctx = TestContext::new();

    let response = ctx
        .post_json("/users", r#"{"username":"","email":"a@x.com"}"#)
        .await;
    let body = expect_json(response, StatusCode::BAD_REQUEST).await;

    assert_eq!(error_fields(&body), vec!["username"]);
}

#[tokio::test]
async fn test_create_user_malformed_json_returns_400() {
    let ctx = TestContext::new();

    let response = ctx.post_json("/users", "{not json").await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_get_user_non_numeric_id_returns_400() {
    let ctx = TestContext::new();

    let response = ctx.get("/users/abc").await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}
