#![allow(async_fn_in_trait)]

use gig_domain::game::{GameFilter, GameOrdering};
use gig_domain::pagination::{Page, PageRequest};
use gig_domain::tag::{Tag, TagKind};

use crate::domain::types::{GameDetail, GameInput, GamePatch, GameSummary, NewUser, User};
use crate::error::GigServiceError;

/// Repository for user accounts.
pub trait UserRepository: Send + Sync {
    async fn find_by_id(&self, id: i32) -> Result<Option<User>, GigServiceError>;
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, GigServiceError>;
    /// Insert a user. A duplicate email yields `UserAlreadyExists`.
    async fn create(&self, user: &NewUser) -> Result<User, GigServiceError>;
    async fn update(
        &self,
        id: i32,
        name: Option<&str>,
        password_hash: Option<&str>,
    ) -> Result<(), GigServiceError>;
}

/// Read access to the five tag tables.
pub trait TagRepository: Send + Sync {
    /// Tags of one kind ordered by name descending. With `assigned_only`,
    /// only tags linked to at least one game.
    async fn list(&self, kind: TagKind, assigned_only: bool) -> Result<Vec<Tag>, GigServiceError>;

    /// The subset of `ids` that exist for `kind`.
    async fn existing_ids(&self, kind: TagKind, ids: &[i32]) -> Result<Vec<i32>, GigServiceError>;
}

/// Repository for the game catalogue.
pub trait GameRepository: Send + Sync {
    async fn list(
        &self,
        filter: &GameFilter,
        ordering: &GameOrdering,
        page: PageRequest,
    ) -> Result<Page<GameSummary>, GigServiceError>;

    async fn find(&self, id: i32) -> Result<Option<GameDetail>, GigServiceError>;

    async fn exists(&self, id: i32) -> Result<bool, GigServiceError>;

    /// Insert a game with its tag links. Returns the new id.
    async fn create(&self, input: &GameInput) -> Result<i32, GigServiceError>;

    /// Overwrite every field and tag link. Returns `false` if the game is missing.
    async fn replace(&self, id: i32, input: &GameInput) -> Result<bool, GigServiceError>;

    /// Apply a partial update. Returns `false` if the game is missing.
    async fn update(&self, id: i32, patch: &GamePatch) -> Result<bool, GigServiceError>;

    /// Returns `true` if a row was deleted.
    async fn delete(&self, id: i32) -> Result<bool, GigServiceError>;
}

/// Per-user saved-games set.
pub trait SavedGameRepository: Send + Sync {
    /// Idempotent: adding an already saved game is a no-op.
    async fn add(&self, user_id: i32, game_id: i32) -> Result<(), GigServiceError>;

    /// Idempotent: removing an unsaved game is a no-op.
    async fn remove(&self, user_id: i32, game_id: i32) -> Result<(), GigServiceError>;

    async fn list(
        &self,
        user_id: i32,
        ordering: &GameOrdering,
        page: PageRequest,
    ) -> Result<Page<GameSummary>, GigServiceError>;
}
