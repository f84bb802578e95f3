use axum::{
    Json,
    extract::{RawQuery, State},
};
use serde::Deserialize;

use gig_auth_types::identity::Identity;
use gig_domain::tag::{Tag, TagKind, is_truthy_flag};

use crate::error::GigServiceError;
use crate::handlers::parse_query;
use crate::state::AppState;
use crate::usecase::tag::ListTagsUseCase;

#[derive(Deserialize, Default)]
pub struct TagListQuery {
    pub assigned_only: Option<String>,
}

async fn list_tags(
    state: AppState,
    kind: TagKind,
    raw_query: Option<String>,
) -> Result<Json<Vec<Tag>>, GigServiceError> {
    let query: TagListQuery = parse_query(raw_query.as_deref())?;
    let usecase = ListTagsUseCase {
        repo: state.tag_repo(),
    };
    let tags = usecase
        .execute(kind, is_truthy_flag(query.assigned_only.as_deref()))
        .await?;
    Ok(Json(tags))
}

// ── GET /gig/genres ──────────────────────────────────────────────────────────

pub async fn list_genres(
    _identity: Option<Identity>,
    State(state): State<AppState>,
    RawQuery(raw_query): RawQuery,
) -> Result<Json<Vec<Tag>>, GigServiceError> {
    list_tags(state, TagKind::Genre, raw_query).await
}

// ── GET /gig/themes ──────────────────────────────────────────────────────────

pub async fn list_themes(
    _identity: Option<Identity>,
    State(state): State<AppState>,
    RawQuery(raw_query): RawQuery,
) -> Result<Json<Vec<Tag>>, GigServiceError> {
    list_tags(state, TagKind::Theme, raw_query).await
}

// ── GET /gig/platforms ───────────────────────────────────────────────────────

pub async fn list_platforms(
    _identity: Option<Identity>,
    State(state): State<AppState>,
    RawQuery(raw_query): RawQuery,
) -> Result<Json<Vec<Tag>>, GigServiceError> {
    list_tags(state, TagKind::Platform, raw_query).await
}

// ── GET /gig/developers ──────────────────────────────────────────────────────

pub async fn list_developers(
    _identity: Option<Identity>,
    State(state): State<AppState>,
    RawQuery(raw_query): RawQuery,
) -> Result<Json<Vec<Tag>>, GigServiceError> {
    list_tags(state, TagKind::Developer, raw_query).await
}

// ── GET /gig/publishers ──────────────────────────────────────────────────────

pub async fn list_publishers(
    _identity: Option<Identity>,
    State(state): State<AppState>,
    RawQuery(raw_query): RawQuery,
) -> Result<Json<Vec<Tag>>, GigServiceError> {
    list_tags(state, TagKind::Publisher, raw_query).await
}
