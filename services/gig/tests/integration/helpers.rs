use axum::http::{HeaderName, HeaderValue, header::AUTHORIZATION};
use axum_test::TestServer;
use sea_orm::DatabaseConnection;

use gig::router::build_router;
use gig::state::AppState;
use gig_auth_types::identity::TokenSecret;
use gig_testing::auth::TEST_JWT_SECRET;

/// Router over a disconnected database. Every query fails, so tests only
/// reach code paths that answer before touching storage.
pub fn server() -> TestServer {
    let state = AppState {
        db: DatabaseConnection::Disconnected,
        token_secret: TokenSecret::new(TEST_JWT_SECRET),
        token_ttl_secs: 3600,
    };
    TestServer::new(build_router(state)).unwrap()
}

pub fn garbage_token() -> (HeaderName, HeaderValue) {
    (AUTHORIZATION, HeaderValue::from_static("Bearer not-a-jwt"))
}
