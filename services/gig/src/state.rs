use axum::extract::FromRef;
use sea_orm::DatabaseConnection;

use gig_auth_types::identity::TokenSecret;

use crate::config::GigConfig;
use crate::infra::db::{
    DbGameRepository, DbSavedGameRepository, DbTagRepository, DbUserRepository,
};

/// Shared application state passed to every handler via axum `State`.
#[derive(Clone)]
pub struct AppState {
    pub db: DatabaseConnection,
    pub token_secret: TokenSecret,
    pub token_ttl_secs: u64,
}

impl AppState {
    pub fn new(db: DatabaseConnection, config: &GigConfig) -> Self {
        Self {
            db,
            token_secret: TokenSecret::new(config.jwt_secret.as_str()),
            token_ttl_secs: config.token_ttl_secs,
        }
    }

    pub fn user_repo(&self) -> DbUserRepository {
        DbUserRepository {
            db: self.db.clone(),
        }
    }

    pub fn tag_repo(&self) -> DbTagRepository {
        DbTagRepository {
            db: self.db.clone(),
        }
    }

    pub fn game_repo(&self) -> DbGameRepository {
        DbGameRepository {
            db: self.db.clone(),
        }
    }

    pub fn saved_repo(&self) -> DbSavedGameRepository {
        DbSavedGameRepository {
            db: self.db.clone(),
        }
    }
}

impl FromRef<AppState> for TokenSecret {
    fn from_ref(state: &AppState) -> Self {
        state.token_secret.clone()
    }
}
