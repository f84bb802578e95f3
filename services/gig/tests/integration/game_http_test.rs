use axum::http::StatusCode;
use serde_json::{Value, json};

use gig_testing::auth::MockAuth;

use crate::helpers::server;

#[tokio::test]
async fn should_reject_non_integer_tag_filter() {
    let response = server().get("/gig/games?genres=1,abc").await;

    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
    assert_eq!(response.json::<Value>()["kind"], "INVALID_QUERY");
}

#[tokio::test]
async fn should_reject_malformed_rating_bound() {
    let response = server().get("/gig/games?rating__gte=high").await;
    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn should_require_auth_to_create_game() {
    let response = server()
        .post("/gig/games")
        .json(&json!({"name": "Celeste"}))
        .await;
    assert_eq!(response.status_code(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn should_forbid_non_staff_writes() {
    let (name, value) = MockAuth::user(1).header();
    let server = server();

    let create = server
        .post("/gig/games")
        .add_header(name.clone(), value.clone())
        .json(&json!({"name": "Celeste"}))
        .await;
    assert_eq!(create.status_code(), StatusCode::FORBIDDEN);

    let delete = server.delete("/gig/games/3").add_header(name, value).await;
    assert_eq!(delete.status_code(), StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn should_reject_negative_offset() {
    let response = server().get("/gig/games?offset=-1").await;

    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
    assert_eq!(response.json::<Value>()["kind"], "INVALID_QUERY");
}
