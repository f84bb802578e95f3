use anyhow::Context as _;
use tracing::info;

use gig_auth_types::token::issue_access_token;
use gig_domain::user::{normalize_email, validate_password};

use crate::domain::password::{hash_password, verify_password};
use crate::domain::repository::UserRepository;
use crate::domain::types::{NewUser, User};
use crate::error::GigServiceError;

// ── CreateUser ───────────────────────────────────────────────────────────────

pub struct CreateUserInput {
    pub email: String,
    pub password: String,
    pub name: String,
    /// Grants both the staff and the superuser flag.
    pub superuser: bool,
}

pub struct CreateUserUseCase<R: UserRepository> {
    pub repo: R,
}

impl<R: UserRepository> CreateUserUseCase<R> {
    pub async fn execute(&self, input: CreateUserInput) -> Result<User, GigServiceError> {
        let email = normalize_email(&input.email).map_err(|_| GigServiceError::InvalidEmail)?;
        if !validate_password(&input.password) {
            return Err(GigServiceError::InvalidPassword);
        }
        if self.repo.find_by_email(&email).await?.is_some() {
            return Err(GigServiceError::UserAlreadyExists);
        }
        let password_hash = hash_password(&input.password)?;
        let user = self
            .repo
            .create(&NewUser {
                email,
                name: input.name,
                password_hash,
                is_staff: input.superuser,
                is_superuser: input.superuser,
            })
            .await?;
        info!(user_id = user.id, superuser = user.is_superuser, "user created");
        Ok(user)
    }
}

// ── IssueToken ───────────────────────────────────────────────────────────────

pub struct IssueTokenInput {
    pub email: String,
    pub password: String,
}

pub struct IssuedToken {
    pub token: String,
    /// Expiry as seconds since the epoch.
    pub expires_at: u64,
}

pub struct IssueTokenUseCase<R: UserRepository> {
    pub repo: R,
    pub jwt_secret: String,
    pub ttl_secs: u64,
}

impl<R: UserRepository> IssueTokenUseCase<R> {
    pub async fn execute(&self, input: IssueTokenInput) -> Result<IssuedToken, GigServiceError> {
        let email =
            normalize_email(&input.email).map_err(|_| GigServiceError::InvalidCredentials)?;
        let user = self
            .repo
            .find_by_email(&email)
            .await?
            .filter(|u| u.is_active)
            .ok_or(GigServiceError::InvalidCredentials)?;
        if !verify_password(&user.password_hash, &input.password) {
            return Err(GigServiceError::InvalidCredentials);
        }
        let (token, expires_at) =
            issue_access_token(user.id, user.is_staff, self.ttl_secs, &self.jwt_secret)
                .context("sign access token")?;
        Ok(IssuedToken { token, expires_at })
    }
}

// ── GetUser ──────────────────────────────────────────────────────────────────

pub struct GetUserUseCase<R: UserRepository> {
    pub repo: R,
}

impl<R: UserRepository> GetUserUseCase<R> {
    pub async fn execute(&self, user_id: i32) -> Result<User, GigServiceError> {
        self.repo
            .find_by_id(user_id)
            .await?
            .ok_or(GigServiceError::UserNotFound)
    }
}

// ── UpdateUser ───────────────────────────────────────────────────────────────

pub struct UpdateUserInput {
    pub name: Option<String>,
    pub password: Option<String>,
}

pub struct UpdateUserUseCase<R: UserRepository> {
    pub repo: R,
}

impl<R: UserRepository> UpdateUserUseCase<R> {
    pub async fn execute(
        &self,
        user_id: i32,
        input: UpdateUserInput,
    ) -> Result<(), GigServiceError> {
        if input.name.is_none() && input.password.is_none() {
            return Err(GigServiceError::MissingData);
        }
        if let Some(ref password) = input.password {
            if !validate_password(password) {
                return Err(GigServiceError::InvalidPassword);
            }
        }
        if self.repo.find_by_id(user_id).await?.is_none() {
            return Err(GigServiceError::UserNotFound);
        }
        let password_hash = input.password.as_deref().map(hash_password).transpose()?;
        self.repo
            .update(user_id, input.name.as_deref(), password_hash.as_deref())
            .await
    }
}
