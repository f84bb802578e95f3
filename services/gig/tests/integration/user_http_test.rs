use axum::http::StatusCode;
use serde_json::{Value, json};

use crate::helpers::server;

#[tokio::test]
async fn should_reject_signup_without_email() {
    let response = server()
        .post("/users")
        .json(&json!({"password": "secret1"}))
        .await;

    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
    assert_eq!(response.json::<Value>()["kind"], "INVALID_EMAIL");
}

#[tokio::test]
async fn should_reject_short_password() {
    let response = server()
        .post("/users")
        .json(&json!({"email": "test@TEST.COM", "password": "abc"}))
        .await;

    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
    assert_eq!(response.json::<Value>()["kind"], "INVALID_PASSWORD");
}

#[tokio::test]
async fn should_require_auth_for_me() {
    let response = server().get("/users/@me").await;
    assert_eq!(response.status_code(), StatusCode::UNAUTHORIZED);
}
