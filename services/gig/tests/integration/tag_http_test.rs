use axum::http::StatusCode;

use crate::helpers::{garbage_token, server};

#[tokio::test]
async fn should_reject_invalid_token_on_tag_list() {
    let (name, value) = garbage_token();
    let response = server().get("/gig/themes").add_header(name, value).await;
    assert_eq!(response.status_code(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn should_reject_unknown_auth_scheme_on_tag_list() {
    let response = server()
        .get("/gig/publishers")
        .add_header("authorization", "Basic dXNlcjpwYXNz")
        .await;
    assert_eq!(response.status_code(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn should_only_serve_reads_on_tag_lists() {
    let response = server().post("/gig/genres").await;
    assert_eq!(response.status_code(), StatusCode::METHOD_NOT_ALLOWED);
}
