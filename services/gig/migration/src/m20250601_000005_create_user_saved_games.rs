use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(UserSavedGames::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(UserSavedGames::UserId).integer().not_null())
                    .col(ColumnDef::new(UserSavedGames::GameId).integer().not_null())
                    .col(
                        ColumnDef::new(UserSavedGames::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .primary_key(
                        Index::create()
                            .col(UserSavedGames::UserId)
                            .col(UserSavedGames::GameId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(UserSavedGames::Table, UserSavedGames::UserId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(UserSavedGames::Table, UserSavedGames::GameId)
                            .to(Games::Table, Games::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(UserSavedGames::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum UserSavedGames {
    Table,
    UserId,
    GameId,
    CreatedAt,
}

#[derive(Iden)]
enum Users {
    Table,
    Id,
}

#[derive(Iden)]
enum Games {
    Table,
    Id,
}
