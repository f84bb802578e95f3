use axum::{
    Json,
    extract::{Path, RawQuery, State},
    http::StatusCode,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

use gig_auth_types::identity::Identity;
use gig_domain::game::{GameFilter, RangeFilter, parse_id_list};
use gig_domain::tag::Tag;

use crate::domain::types::{GameDetail, GameInput, GamePatch, GameSummary, TagSet};
use crate::error::GigServiceError;
use crate::handlers::{ListParams, PageResponse, parse_query};
use crate::state::AppState;
use crate::usecase::game::{
    CreateGameUseCase, DeleteGameUseCase, GetGameUseCase, ListGamesUseCase, ReplaceGameUseCase,
    UpdateGameUseCase,
};

// ── Response types ───────────────────────────────────────────────────────────

#[derive(Debug, Serialize)]
pub struct GameSummaryResponse {
    pub id: i32,
    pub name: String,
    pub cover: Option<String>,
    pub rating: f64,
    pub popularity: f64,
    #[serde(serialize_with = "gig_core::serde::to_rfc3339_ms_opt")]
    pub first_release_date: Option<DateTime<Utc>>,
    pub genres: Vec<i32>,
    pub themes: Vec<i32>,
    pub platforms: Vec<i32>,
    pub developers: Vec<i32>,
    pub publishers: Vec<i32>,
}

impl From<GameSummary> for GameSummaryResponse {
    fn from(game: GameSummary) -> Self {
        let TagSet {
            genres,
            themes,
            platforms,
            developers,
            publishers,
        } = game.tags;
        Self {
            id: game.id,
            name: game.name,
            cover: game.cover,
            rating: game.rating,
            popularity: game.popularity,
            first_release_date: game.first_release_date,
            genres,
            themes,
            platforms,
            developers,
            publishers,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct GameDetailResponse {
    pub id: i32,
    pub name: String,
    pub summary: Option<String>,
    pub cover: Option<String>,
    pub rating: f64,
    pub popularity: f64,
    #[serde(serialize_with = "gig_core::serde::to_rfc3339_ms_opt")]
    pub first_release_date: Option<DateTime<Utc>>,
    pub genres: Vec<Tag>,
    pub themes: Vec<Tag>,
    pub platforms: Vec<Tag>,
    pub developers: Vec<Tag>,
    pub publishers: Vec<Tag>,
    #[serde(serialize_with = "gig_core::serde::to_rfc3339_ms")]
    pub created_at: DateTime<Utc>,
    #[serde(serialize_with = "gig_core::serde::to_rfc3339_ms")]
    pub updated_at: DateTime<Utc>,
}

impl From<GameDetail> for GameDetailResponse {
    fn from(game: GameDetail) -> Self {
        let TagSet {
            genres,
            themes,
            platforms,
            developers,
            publishers,
        } = game.tags;
        Self {
            id: game.id,
            name: game.name,
            summary: game.summary,
            cover: game.cover,
            rating: game.rating,
            popularity: game.popularity,
            first_release_date: game.first_release_date,
            genres,
            themes,
            platforms,
            developers,
            publishers,
            created_at: game.created_at,
            updated_at: game.updated_at,
        }
    }
}

// ── Query params ─────────────────────────────────────────────────────────────

/// `GET /gig/games` filter params. Tag and id lists are comma-separated
/// (`?genres=1,4`); range bounds use a `__lte` / `__gte` suffix. Ordering and
/// paging are read separately as [`ListParams`].
#[derive(Debug, Deserialize, Default)]
pub struct GameListQuery {
    pub genres: Option<String>,
    pub themes: Option<String>,
    pub platforms: Option<String>,
    pub developers: Option<String>,
    pub publishers: Option<String>,
    pub ids: Option<String>,
    pub first_release_date: Option<DateTime<Utc>>,
    #[serde(rename = "first_release_date__lte")]
    pub first_release_date_lte: Option<DateTime<Utc>>,
    #[serde(rename = "first_release_date__gte")]
    pub first_release_date_gte: Option<DateTime<Utc>>,
    pub rating: Option<f64>,
    #[serde(rename = "rating__lte")]
    pub rating_lte: Option<f64>,
    #[serde(rename = "rating__gte")]
    pub rating_gte: Option<f64>,
    pub search: Option<String>,
}

fn id_list(raw: Option<&str>) -> Result<Option<Vec<i32>>, GigServiceError> {
    raw.map(parse_id_list)
        .transpose()
        .map(Option::flatten)
        .map_err(|e| GigServiceError::InvalidQuery(e.to_string()))
}

impl GameListQuery {
    pub fn filter(&self) -> Result<GameFilter, GigServiceError> {
        Ok(GameFilter {
            genres: id_list(self.genres.as_deref())?,
            themes: id_list(self.themes.as_deref())?,
            platforms: id_list(self.platforms.as_deref())?,
            developers: id_list(self.developers.as_deref())?,
            publishers: id_list(self.publishers.as_deref())?,
            ids: id_list(self.ids.as_deref())?,
            first_release_date: RangeFilter {
                exact: self.first_release_date,
                lte: self.first_release_date_lte,
                gte: self.first_release_date_gte,
            },
            rating: RangeFilter {
                exact: self.rating,
                lte: self.rating_lte,
                gte: self.rating_gte,
            },
            search: self.search.clone(),
        })
    }
}

// ── GET /gig/games ───────────────────────────────────────────────────────────

pub async fn list_games(
    _identity: Option<Identity>,
    State(state): State<AppState>,
    RawQuery(raw_query): RawQuery,
) -> Result<Json<PageResponse<GameSummaryResponse>>, GigServiceError> {
    let query: GameListQuery = parse_query(raw_query.as_deref())?;
    let params: ListParams = parse_query(raw_query.as_deref())?;
    let filter = query.filter()?;
    let usecase = ListGamesUseCase {
        repo: state.game_repo(),
    };
    let page = usecase
        .execute(filter, params.ordering(), params.page())
        .await?;
    Ok(Json(PageResponse::from_page(page, GameSummaryResponse::from)))
}

// ── GET /gig/games/{id} ──────────────────────────────────────────────────────

pub async fn get_game(
    _identity: Option<Identity>,
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<GameDetailResponse>, GigServiceError> {
    let usecase = GetGameUseCase {
        repo: state.game_repo(),
    };
    let game = usecase.execute(id).await?;
    Ok(Json(game.into()))
}

// ── Write bodies ─────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct GameRequest {
    pub name: String,
    #[serde(default)]
    pub summary: Option<String>,
    #[serde(default)]
    pub cover: Option<String>,
    #[serde(default)]
    pub rating: f64,
    #[serde(default)]
    pub popularity: f64,
    #[serde(default)]
    pub first_release_date: Option<DateTime<Utc>>,
    #[serde(default)]
    pub genres: Vec<i32>,
    #[serde(default)]
    pub themes: Vec<i32>,
    #[serde(default)]
    pub platforms: Vec<i32>,
    #[serde(default)]
    pub developers: Vec<i32>,
    #[serde(default)]
    pub publishers: Vec<i32>,
}

impl From<GameRequest> for GameInput {
    fn from(body: GameRequest) -> Self {
        Self {
            name: body.name,
            summary: body.summary,
            cover: body.cover,
            rating: body.rating,
            popularity: body.popularity,
            first_release_date: body.first_release_date,
            tags: TagSet {
                genres: body.genres,
                themes: body.themes,
                platforms: body.platforms,
                developers: body.developers,
                publishers: body.publishers,
            },
        }
    }
}

/// Distinguishes an absent field (`None`) from an explicit `null` (`Some(None)`).
fn double_option<'de, T, D>(de: D) -> Result<Option<Option<T>>, D::Error>
where
    T: Deserialize<'de>,
    D: Deserializer<'de>,
{
    Option::<T>::deserialize(de).map(Some)
}

#[derive(Debug, Deserialize)]
pub struct GamePatchRequest {
    pub name: Option<String>,
    #[serde(default, deserialize_with = "double_option")]
    pub summary: Option<Option<String>>,
    #[serde(default, deserialize_with = "double_option")]
    pub cover: Option<Option<String>>,
    pub rating: Option<f64>,
    pub popularity: Option<f64>,
    #[serde(default, deserialize_with = "double_option")]
    pub first_release_date: Option<Option<DateTime<Utc>>>,
    pub genres: Option<Vec<i32>>,
    pub themes: Option<Vec<i32>>,
    pub platforms: Option<Vec<i32>>,
    pub developers: Option<Vec<i32>>,
    pub publishers: Option<Vec<i32>>,
}

impl From<GamePatchRequest> for GamePatch {
    fn from(body: GamePatchRequest) -> Self {
        Self {
            name: body.name,
            summary: body.summary,
            cover: body.cover,
            rating: body.rating,
            popularity: body.popularity,
            first_release_date: body.first_release_date,
            tags: TagSet {
                genres: body.genres,
                themes: body.themes,
                platforms: body.platforms,
                developers: body.developers,
                publishers: body.publishers,
            },
        }
    }
}

fn require_staff(identity: &Identity) -> Result<(), GigServiceError> {
    if identity.is_staff {
        Ok(())
    } else {
        Err(GigServiceError::Forbidden)
    }
}

// ── POST /gig/games ──────────────────────────────────────────────────────────

pub async fn create_game(
    identity: Identity,
    State(state): State<AppState>,
    Json(body): Json<GameRequest>,
) -> Result<(StatusCode, Json<GameDetailResponse>), GigServiceError> {
    require_staff(&identity)?;
    let usecase = CreateGameUseCase {
        games: state.game_repo(),
        tags: state.tag_repo(),
    };
    let game = usecase.execute(body.into()).await?;
    Ok((StatusCode::CREATED, Json(game.into())))
}

// ── PUT /gig/games/{id} ──────────────────────────────────────────────────────

pub async fn replace_game(
    identity: Identity,
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(body): Json<GameRequest>,
) -> Result<Json<GameDetailResponse>, GigServiceError> {
    require_staff(&identity)?;
    let usecase = ReplaceGameUseCase {
        games: state.game_repo(),
        tags: state.tag_repo(),
    };
    let game = usecase.execute(id, body.into()).await?;
    Ok(Json(game.into()))
}

// ── PATCH /gig/games/{id} ────────────────────────────────────────────────────

pub async fn update_game(
    identity: Identity,
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(body): Json<GamePatchRequest>,
) -> Result<Json<GameDetailResponse>, GigServiceError> {
    require_staff(&identity)?;
    let usecase = UpdateGameUseCase {
        games: state.game_repo(),
        tags: state.tag_repo(),
    };
    let game = usecase.execute(id, body.into()).await?;
    Ok(Json(game.into()))
}

// ── DELETE /gig/games/{id} ───────────────────────────────────────────────────

pub async fn delete_game(
    identity: Identity,
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<StatusCode, GigServiceError> {
    require_staff(&identity)?;
    let usecase = DeleteGameUseCase {
        repo: state.game_repo(),
    };
    usecase.execute(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn query(raw: &str) -> GameListQuery {
        parse_query(Some(raw)).unwrap()
    }

    #[test]
    fn should_parse_comma_separated_tag_filters() {
        let filter = query("genres=1,2&platforms=6&ids=3").filter().unwrap();
        assert_eq!(filter.genres, Some(vec![1, 2]));
        assert_eq!(filter.platforms, Some(vec![6]));
        assert_eq!(filter.ids, Some(vec![3]));
        assert_eq!(filter.themes, None);
    }

    #[test]
    fn should_treat_empty_list_as_absent() {
        let filter = query("genres=").filter().unwrap();
        assert_eq!(filter.genres, None);
    }

    #[test]
    fn should_reject_non_integer_ids() {
        let result = query("developers=1,abc").filter();
        assert!(matches!(result, Err(GigServiceError::InvalidQuery(_))));
    }

    #[test]
    fn should_parse_range_suffixes() {
        let q = query("rating__gte=70.5&rating__lte=90&first_release_date__lte=2020-01-01T00:00:00Z");
        let filter = q.filter().unwrap();
        assert_eq!(filter.rating.gte, Some(70.5));
        assert_eq!(filter.rating.lte, Some(90.0));
        assert_eq!(filter.rating.exact, None);
        assert_eq!(
            filter.first_release_date.lte.map(|d| d.to_rfc3339()),
            Some("2020-01-01T00:00:00+00:00".to_owned())
        );
    }

    #[test]
    fn should_split_search_into_terms() {
        let filter = query("search=zelda%20wild,breath").filter().unwrap();
        let terms: Vec<_> = filter.search_terms().collect();
        assert_eq!(terms, vec!["zelda", "wild", "breath"]);
    }

    #[test]
    fn should_reject_malformed_number() {
        let result: Result<GameListQuery, _> = parse_query(Some("rating=high"));
        assert!(matches!(result, Err(GigServiceError::InvalidQuery(_))));
    }

    #[test]
    fn should_distinguish_null_from_absent_in_patch() {
        let body: GamePatchRequest =
            serde_json::from_str(r#"{"summary": null, "genres": [2]}"#).unwrap();
        let patch: GamePatch = body.into();
        assert_eq!(patch.summary, Some(None));
        assert_eq!(patch.cover, None);
        assert_eq!(patch.tags.genres, Some(vec![2]));
        assert_eq!(patch.tags.themes, None);
    }

    #[test]
    fn should_default_optional_create_fields() {
        let body: GameRequest = serde_json::from_str(r#"{"name": "Celeste"}"#).unwrap();
        let input: GameInput = body.into();
        assert_eq!(input.name, "Celeste");
        assert_eq!(input.rating, 0.0);
        assert!(input.tags.genres.is_empty());
    }

    #[test]
    fn should_forbid_non_staff_writes() {
        let user = Identity {
            user_id: 1,
            is_staff: false,
        };
        assert!(matches!(require_staff(&user), Err(GigServiceError::Forbidden)));
        let staff = Identity {
            user_id: 2,
            is_staff: true,
        };
        assert!(require_staff(&staff).is_ok());
    }
}
