use tracing::info;

use gig_domain::game::GameOrdering;
use gig_domain::pagination::{Page, PageRequest};

use crate::domain::repository::{GameRepository, SavedGameRepository, UserRepository};
use crate::domain::types::GameSummary;
use crate::error::GigServiceError;

/// Resolve the target game, then the caller. A missing game wins over a
/// missing or unknown caller.
async fn resolve<G, U>(
    games: &G,
    users: &U,
    user_id: Option<i32>,
    game_id: i32,
) -> Result<i32, GigServiceError>
where
    G: GameRepository,
    U: UserRepository,
{
    if !games.exists(game_id).await? {
        return Err(GigServiceError::GameNotFound);
    }
    let user_id = user_id.ok_or(GigServiceError::Unauthorized)?;
    match users.find_by_id(user_id).await? {
        Some(user) if user.is_active => Ok(user.id),
        _ => Err(GigServiceError::Unauthorized),
    }
}

// ── AddToSaved ───────────────────────────────────────────────────────────────

pub struct AddSavedGameUseCase<G: GameRepository, U: UserRepository, S: SavedGameRepository> {
    pub games: G,
    pub users: U,
    pub saved: S,
}

impl<G: GameRepository, U: UserRepository, S: SavedGameRepository> AddSavedGameUseCase<G, U, S> {
    pub async fn execute(&self, user_id: Option<i32>, game_id: i32) -> Result<(), GigServiceError> {
        let user_id = resolve(&self.games, &self.users, user_id, game_id).await?;
        self.saved.add(user_id, game_id).await?;
        info!(user_id, game_id, "game saved");
        Ok(())
    }
}

// ── RemoveFromSaved ──────────────────────────────────────────────────────────

pub struct RemoveSavedGameUseCase<G: GameRepository, U: UserRepository, S: SavedGameRepository> {
    pub games: G,
    pub users: U,
    pub saved: S,
}

impl<G: GameRepository, U: UserRepository, S: SavedGameRepository>
    RemoveSavedGameUseCase<G, U, S>
{
    pub async fn execute(&self, user_id: Option<i32>, game_id: i32) -> Result<(), GigServiceError> {
        let user_id = resolve(&self.games, &self.users, user_id, game_id).await?;
        self.saved.remove(user_id, game_id).await?;
        info!(user_id, game_id, "game unsaved");
        Ok(())
    }
}

// ── ListSaved ────────────────────────────────────────────────────────────────

pub struct ListSavedGamesUseCase<S: SavedGameRepository> {
    pub saved: S,
}

impl<S: SavedGameRepository> ListSavedGamesUseCase<S> {
    pub async fn execute(
        &self,
        user_id: Option<i32>,
        ordering: GameOrdering,
        page: PageRequest,
    ) -> Result<Page<GameSummary>, GigServiceError> {
        let user_id = user_id.ok_or(GigServiceError::Unauthorized)?;
        self.saved.list(user_id, &ordering, page.clamped()).await
    }
}
