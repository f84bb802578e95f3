use axum::http::StatusCode;

use crate::helpers::server;

#[tokio::test]
async fn should_report_live_without_database() {
    assert_eq!(server().get("/healthz").await.status_code(), StatusCode::OK);
}

#[tokio::test]
async fn should_report_not_ready_when_database_unreachable() {
    assert_eq!(
        server().get("/readyz").await.status_code(),
        StatusCode::SERVICE_UNAVAILABLE
    );
}

#[tokio::test]
async fn should_echo_request_id() {
    let response = server()
        .get("/healthz")
        .add_header("x-request-id", "req-123")
        .await;
    assert_eq!(response.header("x-request-id"), "req-123");
}

#[tokio::test]
async fn should_generate_request_id_when_absent() {
    let response = server().get("/healthz").await;
    assert!(!response.header("x-request-id").is_empty());
}
