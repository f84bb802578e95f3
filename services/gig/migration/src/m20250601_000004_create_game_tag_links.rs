use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

/// Join table `(game_id, <tag>_id)` with a composite primary key. Rows are
/// removed together with either side.
fn link_table<L, C, T>(link: L, game_col: C, tag_col: C, tag_table: T) -> TableCreateStatement
where
    L: Iden + Copy + 'static,
    C: Iden + Copy + 'static,
    T: Iden + 'static,
{
    Table::create()
        .table(link)
        .if_not_exists()
        .col(ColumnDef::new(game_col).integer().not_null())
        .col(ColumnDef::new(tag_col).integer().not_null())
        .primary_key(Index::create().col(game_col).col(tag_col))
        .foreign_key(
            ForeignKey::create()
                .from(link, game_col)
                .to(Games::Table, Games::Id)
                .on_delete(ForeignKeyAction::Cascade),
        )
        .foreign_key(
            ForeignKey::create()
                .from(link, tag_col)
                .to(tag_table, Tag::Id)
                .on_delete(ForeignKeyAction::Cascade),
        )
        .to_owned()
}

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(link_table(
                GameGenres::Table,
                GameGenres::GameId,
                GameGenres::GenreId,
                Alias::new("genres"),
            ))
            .await?;
        manager
            .create_table(link_table(
                GameThemes::Table,
                GameThemes::GameId,
                GameThemes::ThemeId,
                Alias::new("themes"),
            ))
            .await?;
        manager
            .create_table(link_table(
                GamePlatforms::Table,
                GamePlatforms::GameId,
                GamePlatforms::PlatformId,
                Alias::new("platforms"),
            ))
            .await?;
        manager
            .create_table(link_table(
                GameDevelopers::Table,
                GameDevelopers::GameId,
                GameDevelopers::DeveloperId,
                Alias::new("developers"),
            ))
            .await?;
        manager
            .create_table(link_table(
                GamePublishers::Table,
                GamePublishers::GameId,
                GamePublishers::PublisherId,
                Alias::new("publishers"),
            ))
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(
                Table::drop()
                    .table(GameGenres::Table)
                    .table(GameThemes::Table)
                    .table(GamePlatforms::Table)
                    .table(GameDevelopers::Table)
                    .table(GamePublishers::Table)
                    .to_owned(),
            )
            .await
    }
}

#[derive(Iden)]
enum Games {
    Table,
    Id,
}

#[derive(Iden)]
enum Tag {
    Id,
}

#[derive(Iden, Clone, Copy)]
enum GameGenres {
    Table,
    GameId,
    GenreId,
}

#[derive(Iden, Clone, Copy)]
enum GameThemes {
    Table,
    GameId,
    ThemeId,
}

#[derive(Iden, Clone, Copy)]
enum GamePlatforms {
    Table,
    GameId,
    PlatformId,
}

#[derive(Iden, Clone, Copy)]
enum GameDevelopers {
    Table,
    GameId,
    DeveloperId,
}

#[derive(Iden, Clone, Copy)]
enum GamePublishers {
    Table,
    GameId,
    PublisherId,
}
