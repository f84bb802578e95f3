use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

/// Every tag table has the same shape: serial id plus a unique name.
fn tag_table<T, C>(table: T, id: C, name: C) -> TableCreateStatement
where
    T: Iden + 'static,
    C: Iden + 'static,
{
    Table::create()
        .table(table)
        .if_not_exists()
        .col(
            ColumnDef::new(id)
                .integer()
                .not_null()
                .auto_increment()
                .primary_key(),
        )
        .col(ColumnDef::new(name).string().not_null().unique_key())
        .to_owned()
}

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(tag_table(Genres::Table, Genres::Id, Genres::Name))
            .await?;
        manager
            .create_table(tag_table(Themes::Table, Themes::Id, Themes::Name))
            .await?;
        manager
            .create_table(tag_table(Platforms::Table, Platforms::Id, Platforms::Name))
            .await?;
        manager
            .create_table(tag_table(
                Developers::Table,
                Developers::Id,
                Developers::Name,
            ))
            .await?;
        manager
            .create_table(tag_table(
                Publishers::Table,
                Publishers::Id,
                Publishers::Name,
            ))
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(
                Table::drop()
                    .table(Genres::Table)
                    .table(Themes::Table)
                    .table(Platforms::Table)
                    .table(Developers::Table)
                    .table(Publishers::Table)
                    .to_owned(),
            )
            .await
    }
}

#[derive(Iden)]
enum Genres {
    Table,
    Id,
    Name,
}

#[derive(Iden)]
enum Themes {
    Table,
    Id,
    Name,
}

#[derive(Iden)]
enum Platforms {
    Table,
    Id,
    Name,
}

#[derive(Iden)]
enum Developers {
    Table,
    Id,
    Name,
}

#[derive(Iden)]
enum Publishers {
    Table,
    Id,
    Name,
}
