use tracing::info;

use gig_domain::game::{GameFilter, GameOrdering};
use gig_domain::pagination::{Page, PageRequest};

use crate::domain::repository::{GameRepository, TagRepository};
use crate::domain::types::{GameDetail, GameInput, GamePatch, GameSummary};
use crate::error::GigServiceError;
use crate::usecase::tag::ensure_tags_exist;

// ── ListGames ────────────────────────────────────────────────────────────────

pub struct ListGamesUseCase<R: GameRepository> {
    pub repo: R,
}

impl<R: GameRepository> ListGamesUseCase<R> {
    pub async fn execute(
        &self,
        filter: GameFilter,
        ordering: GameOrdering,
        page: PageRequest,
    ) -> Result<Page<GameSummary>, GigServiceError> {
        self.repo.list(&filter, &ordering, page.clamped()).await
    }
}

// ── GetGame ──────────────────────────────────────────────────────────────────

pub struct GetGameUseCase<R: GameRepository> {
    pub repo: R,
}

impl<R: GameRepository> GetGameUseCase<R> {
    pub async fn execute(&self, id: i32) -> Result<GameDetail, GigServiceError> {
        self.repo
            .find(id)
            .await?
            .ok_or(GigServiceError::GameNotFound)
    }
}

async fn validate_input<T: TagRepository>(
    tags: &T,
    input: &GameInput,
) -> Result<(), GigServiceError> {
    if input.name.trim().is_empty() {
        return Err(GigServiceError::MissingData);
    }
    for (kind, ids) in input.tags.iter() {
        ensure_tags_exist(tags, kind, ids).await?;
    }
    Ok(())
}

// ── CreateGame ───────────────────────────────────────────────────────────────

pub struct CreateGameUseCase<R: GameRepository, T: TagRepository> {
    pub games: R,
    pub tags: T,
}

impl<R: GameRepository, T: TagRepository> CreateGameUseCase<R, T> {
    pub async fn execute(&self, input: GameInput) -> Result<GameDetail, GigServiceError> {
        validate_input(&self.tags, &input).await?;
        let id = self.games.create(&input).await?;
        info!(game_id = id, name = %input.name, "game created");
        self.games
            .find(id)
            .await?
            .ok_or(GigServiceError::GameNotFound)
    }
}

// ── ReplaceGame (PUT) ────────────────────────────────────────────────────────

pub struct ReplaceGameUseCase<R: GameRepository, T: TagRepository> {
    pub games: R,
    pub tags: T,
}

impl<R: GameRepository, T: TagRepository> ReplaceGameUseCase<R, T> {
    pub async fn execute(&self, id: i32, input: GameInput) -> Result<GameDetail, GigServiceError> {
        validate_input(&self.tags, &input).await?;
        if !self.games.replace(id, &input).await? {
            return Err(GigServiceError::GameNotFound);
        }
        self.games
            .find(id)
            .await?
            .ok_or(GigServiceError::GameNotFound)
    }
}

// ── UpdateGame (PATCH) ───────────────────────────────────────────────────────

pub struct UpdateGameUseCase<R: GameRepository, T: TagRepository> {
    pub games: R,
    pub tags: T,
}

impl<R: GameRepository, T: TagRepository> UpdateGameUseCase<R, T> {
    pub async fn execute(&self, id: i32, patch: GamePatch) -> Result<GameDetail, GigServiceError> {
        if patch.is_empty() {
            return Err(GigServiceError::MissingData);
        }
        if patch.name.as_deref().is_some_and(|n| n.trim().is_empty()) {
            return Err(GigServiceError::MissingData);
        }
        for (kind, ids) in patch.tags.iter() {
            if let Some(ids) = ids {
                ensure_tags_exist(&self.tags, kind, ids).await?;
            }
        }
        if !self.games.update(id, &patch).await? {
            return Err(GigServiceError::GameNotFound);
        }
        self.games
            .find(id)
            .await?
            .ok_or(GigServiceError::GameNotFound)
    }
}

// ── DeleteGame ───────────────────────────────────────────────────────────────

pub struct DeleteGameUseCase<R: GameRepository> {
    pub repo: R,
}

impl<R: GameRepository> DeleteGameUseCase<R> {
    pub async fn execute(&self, id: i32) -> Result<(), GigServiceError> {
        if !self.repo.delete(id).await? {
            return Err(GigServiceError::GameNotFound);
        }
        info!(game_id = id, "game deleted");
        Ok(())
    }
}
