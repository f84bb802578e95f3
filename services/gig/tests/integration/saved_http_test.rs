use axum::http::StatusCode;

use crate::helpers::{garbage_token, server};

#[tokio::test]
async fn should_require_auth_for_saved_list() {
    let response = server().get("/gig/saved").await;
    assert_eq!(response.status_code(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn should_reject_invalid_token_on_add_to_saved() {
    let (name, value) = garbage_token();
    let server = server();

    let via_get = server
        .get("/gig/games/1/add-to-saved")
        .add_header(name.clone(), value.clone())
        .await;
    assert_eq!(via_get.status_code(), StatusCode::UNAUTHORIZED);

    let via_post = server
        .post("/gig/games/1/remove-from-saved")
        .add_header(name, value)
        .await;
    assert_eq!(via_post.status_code(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn should_not_route_other_methods_on_saved_actions() {
    let response = server().delete("/gig/games/1/add-to-saved").await;
    assert_eq!(response.status_code(), StatusCode::METHOD_NOT_ALLOWED);
}
