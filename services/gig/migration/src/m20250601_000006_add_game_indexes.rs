use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

const INDEXES: [(&str, &str, &str); 8] = [
    ("idx_games_rating", "games", "rating"),
    ("idx_games_popularity", "games", "popularity"),
    ("idx_games_first_release_date", "games", "first_release_date"),
    ("idx_game_genres_genre_id", "game_genres", "genre_id"),
    ("idx_game_themes_theme_id", "game_themes", "theme_id"),
    ("idx_game_platforms_platform_id", "game_platforms", "platform_id"),
    ("idx_game_developers_developer_id", "game_developers", "developer_id"),
    ("idx_game_publishers_publisher_id", "game_publishers", "publisher_id"),
];

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        for (name, table, column) in INDEXES {
            manager
                .create_index(
                    Index::create()
                        .table(Alias::new(table))
                        .col(Alias::new(column))
                        .name(name)
                        .to_owned(),
                )
                .await?;
        }
        manager
            .create_index(
                Index::create()
                    .table(UserSavedGames::Table)
                    .col(UserSavedGames::GameId)
                    .name("idx_user_saved_games_game_id")
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(Index::drop().name("idx_user_saved_games_game_id").to_owned())
            .await?;
        for (name, _, _) in INDEXES {
            manager.drop_index(Index::drop().name(name).to_owned()).await?;
        }
        Ok(())
    }
}

#[derive(Iden)]
enum UserSavedGames {
    Table,
    GameId,
}
