use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

/// Gig service domain error variants.
#[derive(Debug, thiserror::Error)]
pub enum GigServiceError {
    #[error("game not found")]
    GameNotFound,
    #[error("user not found")]
    UserNotFound,
    #[error("authentication required")]
    Unauthorized,
    #[error("forbidden")]
    Forbidden,
    #[error("user already exists")]
    UserAlreadyExists,
    #[error("invalid email")]
    InvalidEmail,
    #[error("password too short")]
    InvalidPassword,
    #[error("invalid credentials")]
    InvalidCredentials,
    #[error("invalid query: {0}")]
    InvalidQuery(String),
    #[error("unknown {kind} id {id}")]
    UnknownTag { kind: gig_domain::tag::TagKind, id: i32 },
    #[error("missing data")]
    MissingData,
    #[error("internal error")]
    Internal(#[from] anyhow::Error),
}

impl GigServiceError {
    pub fn kind(&self) -> &'static str {
        match self {
            Self::GameNotFound => "GAME_NOT_FOUND",
            Self::UserNotFound => "USER_NOT_FOUND",
            Self::Unauthorized => "UNAUTHORIZED",
            Self::Forbidden => "FORBIDDEN",
            Self::UserAlreadyExists => "USER_ALREADY_EXISTS",
            Self::InvalidEmail => "INVALID_EMAIL",
            Self::InvalidPassword => "INVALID_PASSWORD",
            Self::InvalidCredentials => "INVALID_CREDENTIALS",
            Self::InvalidQuery(_) => "INVALID_QUERY",
            Self::UnknownTag { .. } => "UNKNOWN_TAG",
            Self::MissingData => "MISSING_DATA",
            Self::Internal(_) => "INTERNAL",
        }
    }
}

impl IntoResponse for GigServiceError {
    fn into_response(self) -> Response {
        let status = match &self {
            Self::GameNotFound | Self::UserNotFound => StatusCode::NOT_FOUND,
            Self::Unauthorized => StatusCode::UNAUTHORIZED,
            Self::Forbidden => StatusCode::FORBIDDEN,
            Self::UserAlreadyExists => StatusCode::CONFLICT,
            Self::InvalidEmail
            | Self::InvalidPassword
            | Self::InvalidCredentials
            | Self::InvalidQuery(_)
            | Self::UnknownTag { .. }
            | Self::MissingData => StatusCode::BAD_REQUEST,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };
        // TraceLayer already records method/uri/status; only 500s carry a cause worth logging.
        if let Self::Internal(ref e) = self {
            tracing::error!(error = %format!("{e:#}"), kind = "INTERNAL", "internal error");
        }
        let body = serde_json::json!({
            "kind": self.kind(),
            "message": self.to_string(),
        });
        (status, axum::Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::to_bytes;
    use gig_domain::tag::TagKind;

    async fn assert_error(
        error: GigServiceError,
        expected_status: StatusCode,
        expected_kind: &str,
        expected_message: &str,
    ) {
        let resp = error.into_response();
        assert_eq!(resp.status(), expected_status);
        let bytes = to_bytes(resp.into_body(), usize::MAX).await.unwrap();
        let json: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(json["kind"], expected_kind);
        assert_eq!(json["message"], expected_message);
    }

    #[tokio::test]
    async fn should_return_game_not_found() {
        assert_error(
            GigServiceError::GameNotFound,
            StatusCode::NOT_FOUND,
            "GAME_NOT_FOUND",
            "game not found",
        )
        .await;
    }

    #[tokio::test]
    async fn should_return_user_not_found() {
        assert_error(
            GigServiceError::UserNotFound,
            StatusCode::NOT_FOUND,
            "USER_NOT_FOUND",
            "user not found",
        )
        .await;
    }

    #[tokio::test]
    async fn should_return_unauthorized() {
        assert_error(
            GigServiceError::Unauthorized,
            StatusCode::UNAUTHORIZED,
            "UNAUTHORIZED",
            "authentication required",
        )
        .await;
    }

    #[tokio::test]
    async fn should_return_forbidden() {
        assert_error(
            GigServiceError::Forbidden,
            StatusCode::FORBIDDEN,
            "FORBIDDEN",
            "forbidden",
        )
        .await;
    }

    #[tokio::test]
    async fn should_return_user_already_exists() {
        assert_error(
            GigServiceError::UserAlreadyExists,
            StatusCode::CONFLICT,
            "USER_ALREADY_EXISTS",
            "user already exists",
        )
        .await;
    }

    #[tokio::test]
    async fn should_return_invalid_email() {
        assert_error(
            GigServiceError::InvalidEmail,
            StatusCode::BAD_REQUEST,
            "INVALID_EMAIL",
            "invalid email",
        )
        .await;
    }

    #[tokio::test]
    async fn should_return_invalid_password() {
        assert_error(
            GigServiceError::InvalidPassword,
            StatusCode::BAD_REQUEST,
            "INVALID_PASSWORD",
            "password too short",
        )
        .await;
    }

    #[tokio::test]
    async fn should_return_invalid_credentials() {
        assert_error(
            GigServiceError::InvalidCredentials,
            StatusCode::BAD_REQUEST,
            "INVALID_CREDENTIALS",
            "invalid credentials",
        )
        .await;
    }

    #[tokio::test]
    async fn should_return_invalid_query_with_detail() {
        assert_error(
            GigServiceError::InvalidQuery("genres".to_owned()),
            StatusCode::BAD_REQUEST,
            "INVALID_QUERY",
            "invalid query: genres",
        )
        .await;
    }

    #[tokio::test]
    async fn should_return_unknown_tag() {
        assert_error(
            GigServiceError::UnknownTag {
                kind: TagKind::Platform,
                id: 42,
            },
            StatusCode::BAD_REQUEST,
            "UNKNOWN_TAG",
            "unknown platform id 42",
        )
        .await;
    }

    #[tokio::test]
    async fn should_return_missing_data() {
        assert_error(
            GigServiceError::MissingData,
            StatusCode::BAD_REQUEST,
            "MISSING_DATA",
            "missing data",
        )
        .await;
    }

    #[tokio::test]
    async fn should_return_internal_without_leaking_cause() {
        assert_error(
            GigServiceError::Internal(anyhow::anyhow!("db error")),
            StatusCode::INTERNAL_SERVER_ERROR,
            "INTERNAL",
            "internal error",
        )
        .await;
    }
}
