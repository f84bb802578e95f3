use std::collections::HashMap;

use anyhow::{Context as _, anyhow};
use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue::Set, ColumnTrait, ConnectionTrait, DatabaseConnection,
    EntityTrait, FromQueryResult, IntoActiveModel as _, Order, PaginatorTrait, QueryFilter,
    QueryOrder, QuerySelect, Select, SqlErr, TransactionTrait, Value,
    sea_query::{Alias, Expr, OnConflict, Query, SelectStatement},
};

use gig_core::sea_ext::icontains;
use gig_domain::game::{GameFilter, GameOrderField, GameOrdering, RangeFilter};
use gig_domain::pagination::{Page, PageRequest, Sort};
use gig_domain::tag::{Tag, TagKind};
use gig_schema::{games, user_saved_games, users};

use crate::domain::repository::{
    GameRepository, SavedGameRepository, TagRepository, UserRepository,
};
use crate::domain::types::{
    GameDetail, GameInput, GamePatch, GameSummary, NewUser, TagSet, User,
};
use crate::error::GigServiceError;

// ── Tag tables ───────────────────────────────────────────────────────────────

/// Table names for one tag kind: `genres`, `game_genres`, `genre_id`.
struct TagTables {
    table: Alias,
    link: Alias,
    column: Alias,
}

fn tag_tables(kind: TagKind) -> TagTables {
    TagTables {
        table: Alias::new(kind.plural()),
        link: Alias::new(format!("game_{}", kind.plural())),
        column: Alias::new(format!("{kind}_id")),
    }
}

fn game_id_col() -> Alias {
    Alias::new("game_id")
}

#[derive(Debug, FromQueryResult)]
struct TagRow {
    id: i32,
    name: String,
}

#[derive(Debug, FromQueryResult)]
struct IdRow {
    id: i32,
}

#[derive(Debug, FromQueryResult)]
struct LinkRow {
    game_id: i32,
    tag_id: i32,
}

/// `SELECT game_id FROM game_<kind>s WHERE <kind>_id IN (...)`
fn linked_games(kind: TagKind, tag_ids: &[i32]) -> SelectStatement {
    let t = tag_tables(kind);
    Query::select()
        .column(game_id_col())
        .from(t.link)
        .and_where(Expr::col(t.column).is_in(tag_ids.iter().copied()))
        .to_owned()
}

/// Replace every `kind` link of `game_id` with `tag_ids`.
async fn replace_links<C: ConnectionTrait>(
    db: &C,
    game_id: i32,
    kind: TagKind,
    tag_ids: &[i32],
) -> Result<(), GigServiceError> {
    let t = tag_tables(kind);
    let backend = db.get_database_backend();
    let delete = Query::delete()
        .from_table(t.link.clone())
        .and_where(Expr::col(game_id_col()).eq(game_id))
        .to_owned();
    db.execute(backend.build(&delete))
        .await
        .with_context(|| format!("clear {kind} links"))?;

    let mut unique = tag_ids.to_vec();
    unique.sort_unstable();
    unique.dedup();
    if unique.is_empty() {
        return Ok(());
    }
    let mut insert = Query::insert();
    insert.into_table(t.link).columns([game_id_col(), t.column]);
    for tag_id in unique {
        insert
            .values([game_id.into(), tag_id.into()])
            .map_err(|e| anyhow!("build {kind} link insert: {e:?}"))?;
    }
    db.execute(backend.build(&insert))
        .await
        .with_context(|| format!("insert {kind} links"))?;
    Ok(())
}

/// Linked tag ids of every game in `game_ids`, keyed by game id.
async fn load_tag_ids<C: ConnectionTrait>(
    db: &C,
    game_ids: &[i32],
) -> Result<HashMap<i32, TagSet<Vec<i32>>>, GigServiceError> {
    let mut out: HashMap<i32, TagSet<Vec<i32>>> = HashMap::new();
    if game_ids.is_empty() {
        return Ok(out);
    }
    for kind in TagKind::ALL {
        let t = tag_tables(kind);
        let stmt = Query::select()
            .column(game_id_col())
            .expr_as(Expr::col(t.column.clone()), Alias::new("tag_id"))
            .from(t.link)
            .and_where(Expr::col(game_id_col()).is_in(game_ids.iter().copied()))
            .order_by(t.column, Order::Asc)
            .to_owned();
        let rows = LinkRow::find_by_statement(db.get_database_backend().build(&stmt))
            .all(db)
            .await
            .with_context(|| format!("load {kind} ids"))?;
        for row in rows {
            out.entry(row.game_id)
                .or_default()
                .get_mut(kind)
                .push(row.tag_id);
        }
    }
    Ok(out)
}

/// Linked tags of one game, each kind ordered by name.
async fn load_tags<C: ConnectionTrait>(
    db: &C,
    game_id: i32,
) -> Result<TagSet<Vec<Tag>>, GigServiceError> {
    let mut out: TagSet<Vec<Tag>> = TagSet::default();
    for kind in TagKind::ALL {
        let t = tag_tables(kind);
        let linked = Query::select()
            .column(t.column)
            .from(t.link)
            .and_where(Expr::col(game_id_col()).eq(game_id))
            .to_owned();
        let stmt = Query::select()
            .columns([Alias::new("id"), Alias::new("name")])
            .from(t.table)
            .and_where(Expr::col(Alias::new("id")).in_subquery(linked))
            .order_by(Alias::new("name"), Order::Asc)
            .to_owned();
        let rows = TagRow::find_by_statement(db.get_database_backend().build(&stmt))
            .all(db)
            .await
            .with_context(|| format!("load {kind} tags"))?;
        *out.get_mut(kind) = rows.into_iter().map(tag_from_row).collect();
    }
    Ok(out)
}

fn tag_from_row(row: TagRow) -> Tag {
    Tag {
        id: row.id,
        name: row.name,
    }
}

// ── Game queries ─────────────────────────────────────────────────────────────

fn apply_range<T>(
    mut query: Select<games::Entity>,
    col: games::Column,
    range: &RangeFilter<T>,
) -> Select<games::Entity>
where
    T: Copy + Into<Value>,
{
    if let Some(v) = range.exact {
        query = query.filter(col.eq(v));
    }
    if let Some(v) = range.lte {
        query = query.filter(col.lte(v));
    }
    if let Some(v) = range.gte {
        query = query.filter(col.gte(v));
    }
    query
}

/// Games matching every condition of `filter`.
///
/// Tag filters are `IN` subqueries on the join tables rather than joins, so a
/// game linked to several matching tags is still returned once.
pub(crate) fn filtered_games(filter: &GameFilter) -> Select<games::Entity> {
    let mut query = games::Entity::find();
    for (kind, ids) in filter.tag_filters() {
        query = query.filter(games::Column::Id.in_subquery(linked_games(kind, ids)));
    }
    if let Some(ids) = &filter.ids {
        query = query.filter(games::Column::Id.is_in(ids.iter().copied()));
    }
    query = apply_range(
        query,
        games::Column::FirstReleaseDate,
        &filter.first_release_date,
    );
    query = apply_range(query, games::Column::Rating, &filter.rating);
    for term in filter.search_terms() {
        query = query.filter(icontains(games::Column::Name, term));
    }
    query
}

/// Apply the requested sort keys followed by `id ASC` so pages are stable.
pub(crate) fn apply_ordering(
    mut query: Select<games::Entity>,
    ordering: &GameOrdering,
) -> Select<games::Entity> {
    for &(field, sort) in ordering.keys() {
        let col = match field {
            GameOrderField::Rating => games::Column::Rating,
            GameOrderField::Popularity => games::Column::Popularity,
            GameOrderField::FirstReleaseDate => games::Column::FirstReleaseDate,
        };
        let order = match sort {
            Sort::Asc => Order::Asc,
            Sort::Desc => Order::Desc,
        };
        query = query.order_by(col, order);
    }
    query.order_by_asc(games::Column::Id)
}

async fn fetch_page<C: ConnectionTrait>(
    db: &C,
    query: Select<games::Entity>,
    ordering: &GameOrdering,
    page: PageRequest,
) -> Result<Page<GameSummary>, GigServiceError> {
    let count = query.clone().count(db).await.context("count games")?;
    let models = apply_ordering(query, ordering)
        .offset(page.offset)
        .limit(page.limit)
        .all(db)
        .await
        .context("list games")?;
    let ids: Vec<i32> = models.iter().map(|m| m.id).collect();
    let mut links = load_tag_ids(db, &ids).await?;
    let items = models
        .into_iter()
        .map(|m| {
            let tags = links.remove(&m.id).unwrap_or_default();
            summary_from_model(m, tags)
        })
        .collect();
    Ok(Page {
        count,
        items,
        request: page,
    })
}

fn summary_from_model(model: games::Model, tags: TagSet<Vec<i32>>) -> GameSummary {
    GameSummary {
        id: model.id,
        name: model.name,
        cover: model.cover,
        rating: model.rating,
        popularity: model.popularity,
        first_release_date: model.first_release_date,
        tags,
    }
}

fn detail_from_model(model: games::Model, tags: TagSet<Vec<Tag>>) -> GameDetail {
    GameDetail {
        id: model.id,
        name: model.name,
        summary: model.summary,
        cover: model.cover,
        rating: model.rating,
        popularity: model.popularity,
        first_release_date: model.first_release_date,
        created_at: model.created_at,
        updated_at: model.updated_at,
        tags,
    }
}

// ── User repository ──────────────────────────────────────────────────────────

#[derive(Clone)]
pub struct DbUserRepository {
    pub db: DatabaseConnection,
}

impl UserRepository for DbUserRepository {
    async fn find_by_id(&self, id: i32) -> Result<Option<User>, GigServiceError> {
        let model = users::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .context("find user by id")?;
        Ok(model.map(user_from_model))
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, GigServiceError> {
        let model = users::Entity::find()
            .filter(users::Column::Email.eq(email))
            .one(&self.db)
            .await
            .context("find user by email")?;
        Ok(model.map(user_from_model))
    }

    async fn create(&self, user: &NewUser) -> Result<User, GigServiceError> {
        let now = Utc::now();
        let result = users::ActiveModel {
            email: Set(user.email.clone()),
            name: Set(user.name.clone()),
            password_hash: Set(user.password_hash.clone()),
            is_active: Set(true),
            is_staff: Set(user.is_staff),
            is_superuser: Set(user.is_superuser),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        }
        .insert(&self.db)
        .await;
        match result {
            Ok(model) => Ok(user_from_model(model)),
            Err(e) if matches!(e.sql_err(), Some(SqlErr::UniqueConstraintViolation(_))) => {
                Err(GigServiceError::UserAlreadyExists)
            }
            Err(e) => Err(anyhow::Error::new(e).context("create user").into()),
        }
    }

    async fn update(
        &self,
        id: i32,
        name: Option<&str>,
        password_hash: Option<&str>,
    ) -> Result<(), GigServiceError> {
        let mut am = users::ActiveModel {
            id: Set(id),
            ..Default::default()
        };
        if let Some(name) = name {
            am.name = Set(name.to_owned());
        }
        if let Some(hash) = password_hash {
            am.password_hash = Set(hash.to_owned());
        }
        am.updated_at = Set(Utc::now());
        am.update(&self.db).await.context("update user")?;
        Ok(())
    }
}

fn user_from_model(model: users::Model) -> User {
    User {
        id: model.id,
        email: model.email,
        name: model.name,
        password_hash: model.password_hash,
        is_active: model.is_active,
        is_staff: model.is_staff,
        is_superuser: model.is_superuser,
        created_at: model.created_at,
        updated_at: model.updated_at,
    }
}

// ── Tag repository ───────────────────────────────────────────────────────────

#[derive(Clone)]
pub struct DbTagRepository {
    pub db: DatabaseConnection,
}

impl TagRepository for DbTagRepository {
    async fn list(&self, kind: TagKind, assigned_only: bool) -> Result<Vec<Tag>, GigServiceError> {
        let t = tag_tables(kind);
        let mut stmt = Query::select();
        stmt.columns([Alias::new("id"), Alias::new("name")])
            .from(t.table)
            .order_by(Alias::new("name"), Order::Desc);
        if assigned_only {
            let assigned = Query::select().column(t.column).from(t.link).to_owned();
            stmt.and_where(Expr::col(Alias::new("id")).in_subquery(assigned));
        }
        let rows = TagRow::find_by_statement(self.db.get_database_backend().build(&stmt))
            .all(&self.db)
            .await
            .with_context(|| format!("list {}", kind.plural()))?;
        Ok(rows.into_iter().map(tag_from_row).collect())
    }

    async fn existing_ids(&self, kind: TagKind, ids: &[i32]) -> Result<Vec<i32>, GigServiceError> {
        let t = tag_tables(kind);
        let stmt = Query::select()
            .column(Alias::new("id"))
            .from(t.table)
            .and_where(Expr::col(Alias::new("id")).is_in(ids.iter().copied()))
            .to_owned();
        let rows = IdRow::find_by_statement(self.db.get_database_backend().build(&stmt))
            .all(&self.db)
            .await
            .with_context(|| format!("check {kind} ids"))?;
        Ok(rows.into_iter().map(|r| r.id).collect())
    }
}

// ── Game repository ──────────────────────────────────────────────────────────

#[derive(Clone)]
pub struct DbGameRepository {
    pub db: DatabaseConnection,
}

impl GameRepository for DbGameRepository {
    async fn list(
        &self,
        filter: &GameFilter,
        ordering: &GameOrdering,
        page: PageRequest,
    ) -> Result<Page<GameSummary>, GigServiceError> {
        fetch_page(&self.db, filtered_games(filter), ordering, page).await
    }

    async fn find(&self, id: i32) -> Result<Option<GameDetail>, GigServiceError> {
        let Some(model) = games::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .context("find game")?
        else {
            return Ok(None);
        };
        let tags = load_tags(&self.db, id).await?;
        Ok(Some(detail_from_model(model, tags)))
    }

    async fn exists(&self, id: i32) -> Result<bool, GigServiceError> {
        let count = games::Entity::find_by_id(id)
            .count(&self.db)
            .await
            .context("check game exists")?;
        Ok(count > 0)
    }

    async fn create(&self, input: &GameInput) -> Result<i32, GigServiceError> {
        let txn = self.db.begin().await.context("begin create game")?;
        let now = Utc::now();
        let model = games::ActiveModel {
            name: Set(input.name.clone()),
            summary: Set(input.summary.clone()),
            cover: Set(input.cover.clone()),
            rating: Set(input.rating),
            popularity: Set(input.popularity),
            first_release_date: Set(input.first_release_date),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        }
        .insert(&txn)
        .await
        .context("insert game")?;
        for (kind, ids) in input.tags.iter() {
            replace_links(&txn, model.id, kind, ids).await?;
        }
        txn.commit().await.context("commit create game")?;
        Ok(model.id)
    }

    async fn replace(&self, id: i32, input: &GameInput) -> Result<bool, GigServiceError> {
        let txn = self.db.begin().await.context("begin replace game")?;
        let Some(model) = games::Entity::find_by_id(id)
            .one(&txn)
            .await
            .context("find game for replace")?
        else {
            return Ok(false);
        };
        let mut am = model.into_active_model();
        am.name = Set(input.name.clone());
        am.summary = Set(input.summary.clone());
        am.cover = Set(input.cover.clone());
        am.rating = Set(input.rating);
        am.popularity = Set(input.popularity);
        am.first_release_date = Set(input.first_release_date);
        am.updated_at = Set(Utc::now());
        am.update(&txn).await.context("replace game")?;
        for (kind, ids) in input.tags.iter() {
            replace_links(&txn, id, kind, ids).await?;
        }
        txn.commit().await.context("commit replace game")?;
        Ok(true)
    }

    async fn update(&self, id: i32, patch: &GamePatch) -> Result<bool, GigServiceError> {
        let txn = self.db.begin().await.context("begin update game")?;
        let Some(model) = games::Entity::find_by_id(id)
            .one(&txn)
            .await
            .context("find game for update")?
        else {
            return Ok(false);
        };
        let mut am = model.into_active_model();
        if let Some(name) = &patch.name {
            am.name = Set(name.clone());
        }
        if let Some(summary) = &patch.summary {
            am.summary = Set(summary.clone());
        }
        if let Some(cover) = &patch.cover {
            am.cover = Set(cover.clone());
        }
        if let Some(rating) = patch.rating {
            am.rating = Set(rating);
        }
        if let Some(popularity) = patch.popularity {
            am.popularity = Set(popularity);
        }
        if let Some(date) = patch.first_release_date {
            am.first_release_date = Set(date);
        }
        am.updated_at = Set(Utc::now());
        am.update(&txn).await.context("update game")?;
        for (kind, ids) in patch.tags.iter() {
            if let Some(ids) = ids {
                replace_links(&txn, id, kind, ids).await?;
            }
        }
        txn.commit().await.context("commit update game")?;
        Ok(true)
    }

    async fn delete(&self, id: i32) -> Result<bool, GigServiceError> {
        let result = games::Entity::delete_by_id(id)
            .exec(&self.db)
            .await
            .context("delete game")?;
        Ok(result.rows_affected > 0)
    }
}

// ── Saved-games repository ───────────────────────────────────────────────────

#[derive(Clone)]
pub struct DbSavedGameRepository {
    pub db: DatabaseConnection,
}

/// `SELECT game_id FROM user_saved_games WHERE user_id = ?`
fn saved_by(user_id: i32) -> SelectStatement {
    Query::select()
        .column(user_saved_games::Column::GameId)
        .from(user_saved_games::Entity)
        .and_where(user_saved_games::Column::UserId.eq(user_id))
        .to_owned()
}

impl SavedGameRepository for DbSavedGameRepository {
    async fn add(&self, user_id: i32, game_id: i32) -> Result<(), GigServiceError> {
        let row = user_saved_games::ActiveModel {
            user_id: Set(user_id),
            game_id: Set(game_id),
            created_at: Set(Utc::now()),
        };
        user_saved_games::Entity::insert(row)
            .on_conflict(
                OnConflict::columns([
                    user_saved_games::Column::UserId,
                    user_saved_games::Column::GameId,
                ])
                .do_nothing()
                .to_owned(),
            )
            .exec_without_returning(&self.db)
            .await
            .context("save game")?;
        Ok(())
    }

    async fn remove(&self, user_id: i32, game_id: i32) -> Result<(), GigServiceError> {
        user_saved_games::Entity::delete_many()
            .filter(user_saved_games::Column::UserId.eq(user_id))
            .filter(user_saved_games::Column::GameId.eq(game_id))
            .exec(&self.db)
            .await
            .context("unsave game")?;
        Ok(())
    }

    async fn list(
        &self,
        user_id: i32,
        ordering: &GameOrdering,
        page: PageRequest,
    ) -> Result<Page<GameSummary>, GigServiceError> {
        let query = games::Entity::find().filter(games::Column::Id.in_subquery(saved_by(user_id)));
        fetch_page(&self.db, query, ordering, page).await
    }
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;
    use sea_orm::QueryTrait;
    use sea_orm::sea_query::{Iden, PostgresQueryBuilder};

    use super::*;

    fn sql(query: Select<games::Entity>) -> String {
        query.as_query().to_string(PostgresQueryBuilder)
    }

    #[test]
    fn should_derive_tag_table_names_from_kind() {
        let t = tag_tables(TagKind::Developer);
        assert_eq!(t.table.to_string(), "developers");
        assert_eq!(t.link.to_string(), "game_developers");
        assert_eq!(t.column.to_string(), "developer_id");
    }

    #[test]
    fn should_filter_genres_through_subquery_without_join() {
        let filter = GameFilter {
            genres: Some(vec![1, 2]),
            ..Default::default()
        };
        let sql = sql(filtered_games(&filter));
        assert!(
            sql.contains(r#"IN (SELECT "game_id" FROM "game_genres" WHERE "genre_id" IN (1, 2))"#),
            "{sql}"
        );
        assert!(!sql.contains("JOIN"), "{sql}");
        assert!(!sql.contains("game_themes"), "{sql}");
    }

    #[test]
    fn should_compose_tag_filters_conjunctively() {
        let filter = GameFilter {
            genres: Some(vec![1]),
            platforms: Some(vec![6]),
            ..Default::default()
        };
        let sql = sql(filtered_games(&filter));
        assert!(sql.contains(r#"FROM "game_genres" WHERE "genre_id" IN (1)"#), "{sql}");
        assert!(sql.contains(r#"FROM "game_platforms" WHERE "platform_id" IN (6)"#), "{sql}");
        assert!(sql.contains(") AND "), "{sql}");
    }

    #[test]
    fn should_apply_range_and_id_filters() {
        let filter = GameFilter {
            ids: Some(vec![3, 4]),
            rating: RangeFilter {
                gte: Some(80.0),
                ..Default::default()
            },
            first_release_date: RangeFilter {
                lte: Some(Utc.with_ymd_and_hms(2020, 1, 1, 0, 0, 0).unwrap()),
                ..Default::default()
            },
            ..Default::default()
        };
        let sql = sql(filtered_games(&filter));
        assert!(sql.contains(r#""games"."id" IN (3, 4)"#), "{sql}");
        assert!(sql.contains(r#""games"."rating" >= 80"#), "{sql}");
        assert!(sql.contains(r#""games"."first_release_date" <= '2020-01-01"#), "{sql}");
    }

    #[test]
    fn should_search_name_case_insensitively() {
        let filter = GameFilter {
            search: Some("Zel".to_owned()),
            ..Default::default()
        };
        let sql = sql(filtered_games(&filter));
        assert!(sql.contains("LOWER("), "{sql}");
        assert!(sql.contains("LIKE '%zel%'"), "{sql}");
    }

    #[test]
    fn should_require_every_search_term() {
        let filter = GameFilter {
            search: Some("zelda wild".to_owned()),
            ..Default::default()
        };
        let sql = sql(filtered_games(&filter));
        assert!(sql.contains("LIKE '%zelda%'"), "{sql}");
        assert!(sql.contains("LIKE '%wild%'"), "{sql}");
        assert!(!sql.contains("zelda wild"), "{sql}");
        assert!(sql.contains(" AND "), "{sql}");
    }

    #[test]
    fn should_skip_blank_search() {
        let filter = GameFilter {
            search: Some("  ".to_owned()),
            ..Default::default()
        };
        assert!(!sql(filtered_games(&filter)).contains("WHERE"));
    }

    #[test]
    fn should_order_by_default_keys_then_id() {
        let sql = sql(apply_ordering(
            games::Entity::find(),
            &GameOrdering::default(),
        ));
        let rating = sql.find(r#""rating" DESC"#).expect(&sql);
        let popularity = sql.find(r#""popularity" DESC"#).expect(&sql);
        let id = sql.find(r#""id" ASC"#).expect(&sql);
        assert!(rating < popularity && popularity < id, "{sql}");
    }

    #[test]
    fn should_order_by_requested_keys() {
        let sql = sql(apply_ordering(
            games::Entity::find(),
            &GameOrdering::parse("first_release_date"),
        ));
        assert!(sql.contains(r#""first_release_date" ASC"#), "{sql}");
        assert!(!sql.contains(r#""rating" DESC"#), "{sql}");
    }

    #[test]
    fn should_restrict_saved_listing_to_user() {
        let query = games::Entity::find().filter(games::Column::Id.in_subquery(saved_by(7)));
        let sql = sql(query);
        assert!(
            sql.contains(r#"IN (SELECT "game_id" FROM "user_saved_games" WHERE "#),
            "{sql}"
        );
        assert!(sql.contains(r#""user_id" = 7"#), "{sql}");
    }
}
