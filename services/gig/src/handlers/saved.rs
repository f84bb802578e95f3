use axum::{
    Json,
    extract::{Path, RawQuery, State},
    http::StatusCode,
};

use gig_auth_types::identity::Identity;

use crate::error::GigServiceError;
use crate::handlers::game::GameSummaryResponse;
use crate::handlers::{ListParams, PageResponse, parse_query};
use crate::state::AppState;
use crate::usecase::saved::{AddSavedGameUseCase, ListSavedGamesUseCase, RemoveSavedGameUseCase};

// ── GET|POST /gig/games/{id}/add-to-saved ────────────────────────────────────

pub async fn add_to_saved(
    identity: Option<Identity>,
    State(state): State<AppState>,
    Path(game_id): Path<i32>,
) -> Result<StatusCode, GigServiceError> {
    let usecase = AddSavedGameUseCase {
        games: state.game_repo(),
        users: state.user_repo(),
        saved: state.saved_repo(),
    };
    usecase
        .execute(identity.map(|i| i.user_id), game_id)
        .await?;
    Ok(StatusCode::OK)
}

// ── GET|POST /gig/games/{id}/remove-from-saved ───────────────────────────────

pub async fn remove_from_saved(
    identity: Option<Identity>,
    State(state): State<AppState>,
    Path(game_id): Path<i32>,
) -> Result<StatusCode, GigServiceError> {
    let usecase = RemoveSavedGameUseCase {
        games: state.game_repo(),
        users: state.user_repo(),
        saved: state.saved_repo(),
    };
    usecase
        .execute(identity.map(|i| i.user_id), game_id)
        .await?;
    Ok(StatusCode::OK)
}

// ── GET /gig/saved ───────────────────────────────────────────────────────────

pub async fn list_saved(
    identity: Option<Identity>,
    State(state): State<AppState>,
    RawQuery(raw_query): RawQuery,
) -> Result<Json<PageResponse<GameSummaryResponse>>, GigServiceError> {
    // Anonymous callers are rejected before the query is looked at.
    let user_id = identity
        .map(|i| i.user_id)
        .ok_or(GigServiceError::Unauthorized)?;
    let params: ListParams = parse_query(raw_query.as_deref())?;
    let usecase = ListSavedGamesUseCase {
        saved: state.saved_repo(),
    };
    let page = usecase
        .execute(Some(user_id), params.ordering(), params.page())
        .await?;
    Ok(Json(PageResponse::from_page(page, GameSummaryResponse::from)))
}
