//! Bearer-token identity extractor.

use std::sync::Arc;

use axum::extract::{FromRef, FromRequestParts, OptionalFromRequestParts};
use http::StatusCode;
use http::header::AUTHORIZATION;
use http::request::Parts;

use crate::token::validate_access_token;

/// HMAC secret used to validate access tokens. Provide it from the router
/// state through [`FromRef`].
#[derive(Debug, Clone)]
pub struct TokenSecret(pub Arc<str>);

impl TokenSecret {
    pub fn new(secret: impl Into<Arc<str>>) -> Self {
        Self(secret.into())
    }
}

/// Authenticated caller, taken from `Authorization: Bearer <jwt>`.
///
/// The `Token <jwt>` scheme is accepted as an alias.
///
/// - As `Identity`: 401 when the header is absent or the token is invalid.
/// - As `Option<Identity>`: `None` when the header is absent, 401 when a
///   token is supplied but invalid.
#[derive(Debug, Clone)]
pub struct Identity {
    pub user_id: i32,
    pub is_staff: bool,
}

fn resolve(parts: &Parts, secret: &TokenSecret) -> Result<Option<Identity>, StatusCode> {
    let Some(header) = parts.headers.get(AUTHORIZATION) else {
        return Ok(None);
    };
    let value = header.to_str().map_err(|_| StatusCode::UNAUTHORIZED)?;
    let (scheme, token) = value
        .trim()
        .split_once(' ')
        .ok_or(StatusCode::UNAUTHORIZED)?;
    if !(scheme.eq_ignore_ascii_case("bearer") || scheme.eq_ignore_ascii_case("token")) {
        return Err(StatusCode::UNAUTHORIZED);
    }
    let info = validate_access_token(token.trim(), &secret.0).map_err(|e| {
        tracing::debug!(error = %e, "rejected access token");
        StatusCode::UNAUTHORIZED
    })?;
    Ok(Some(Identity {
        user_id: info.user_id,
        is_staff: info.is_staff,
    }))
}

impl<S> FromRequestParts<S> for Identity
where
    TokenSecret: FromRef<S>,
    S: Send + Sync,
{
    type Rejection = StatusCode;

    // Resolve synchronously and return a 'static future so the returned
    // future does not borrow `parts`.
    fn from_request_parts(
        parts: &mut Parts,
        state: &S,
    ) -> impl std::future::Future<Output = Result<Self, Self::Rejection>> + Send {
        let resolved = resolve(parts, &TokenSecret::from_ref(state));
        async move { resolved?.ok_or(StatusCode::UNAUTHORIZED) }
    }
}

impl<S> OptionalFromRequestParts<S> for Identity
where
    TokenSecret: FromRef<S>,
    S: Send + Sync,
{
    type Rejection = StatusCode;

    fn from_request_parts(
        parts: &mut Parts,
        state: &S,
    ) -> impl std::future::Future<Output = Result<Option<Self>, Self::Rejection>> + Send {
        let resolved = resolve(parts, &TokenSecret::from_ref(state));
        async move { resolved }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::token::issue_access_token;
    use http::Request;

    const SECRET: &str = "identity-test-secret";

    fn parts_with(headers: Vec<(&str, String)>) -> Parts {
        let mut builder = Request::builder().method("GET").uri("/test");
        for (name, value) in headers {
            builder = builder.header(name, value);
        }
        builder.body(()).unwrap().into_parts().0
    }

    fn secret() -> TokenSecret {
        TokenSecret::new(SECRET)
    }

    async fn required(headers: Vec<(&str, String)>) -> Result<Identity, StatusCode> {
        let mut parts = parts_with(headers);
        <Identity as FromRequestParts<TokenSecret>>::from_request_parts(&mut parts, &secret()).await
    }

    async fn optional(headers: Vec<(&str, String)>) -> Result<Option<Identity>, StatusCode> {
        let mut parts = parts_with(headers);
        <Identity as OptionalFromRequestParts<TokenSecret>>::from_request_parts(
            &mut parts,
            &secret(),
        )
        .await
    }

    #[tokio::test]
    async fn should_extract_identity_from_bearer_token() {
        let (token, _) = issue_access_token(5, true, 60, SECRET).unwrap();
        let identity = required(vec![("authorization", format!("Bearer {token}"))])
            .await
            .unwrap();
        assert_eq!(identity.user_id, 5);
        assert!(identity.is_staff);
    }

    #[tokio::test]
    async fn should_accept_token_scheme_alias() {
        let (token, _) = issue_access_token(9, false, 60, SECRET).unwrap();
        let identity = required(vec![("authorization", format!("Token {token}"))])
            .await
            .unwrap();
        assert_eq!(identity.user_id, 9);
        assert!(!identity.is_staff);
    }

    #[tokio::test]
    async fn should_reject_missing_header_when_required() {
        assert_eq!(required(vec![]).await.unwrap_err(), StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn should_reject_unknown_scheme() {
        let (token, _) = issue_access_token(5, false, 60, SECRET).unwrap();
        let result = required(vec![("authorization", format!("Basic {token}"))]).await;
        assert_eq!(result.unwrap_err(), StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn should_reject_token_signed_with_other_secret() {
        let (token, _) = issue_access_token(5, false, 60, "other").unwrap();
        let result = required(vec![("authorization", format!("Bearer {token}"))]).await;
        assert_eq!(result.unwrap_err(), StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn should_yield_none_for_anonymous_optional() {
        assert!(optional(vec![]).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn should_reject_invalid_token_even_when_optional() {
        let result = optional(vec![("authorization", "Bearer garbage".to_owned())]).await;
        assert_eq!(result.unwrap_err(), StatusCode::UNAUTHORIZED);
    }
}
