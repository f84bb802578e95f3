//! Bearer-token helpers for HTTP tests.
//!
//! `MockAuth` signs a real access token with a test secret so requests pass
//! through the same `Identity` extractor as production traffic.

use axum::http::{HeaderName, HeaderValue, header::AUTHORIZATION};

use gig_auth_types::token::issue_access_token;

/// Secret shared between `MockAuth` and the application state under test.
pub const TEST_JWT_SECRET: &str = "test-jwt-secret-for-unit-tests-only";

/// Configurable identity injected into test requests.
pub struct MockAuth {
    pub user_id: i32,
    pub is_staff: bool,
}

impl MockAuth {
    pub fn user(user_id: i32) -> Self {
        Self {
            user_id,
            is_staff: false,
        }
    }

    pub fn staff(user_id: i32) -> Self {
        Self {
            user_id,
            is_staff: true,
        }
    }

    /// Signed token for this identity, valid for one hour.
    pub fn token(&self) -> String {
        issue_access_token(self.user_id, self.is_staff, 3600, TEST_JWT_SECRET)
            .map(|(token, _)| token)
            .unwrap()
    }

    /// `Authorization: Bearer <token>` header pair.
    pub fn header(&self) -> (HeaderName, HeaderValue) {
        (
            AUTHORIZATION,
            HeaderValue::from_str(&format!("Bearer {}", self.token())).unwrap(),
        )
    }
}
