use sea_orm_migration::prelude::*;

mod m20250601_000001_create_users;
mod m20250601_000002_create_tags;
mod m20250601_000003_create_games;
mod m20250601_000004_create_game_tag_links;
mod m20250601_000005_create_user_saved_games;
mod m20250601_000006_add_game_indexes;

pub use sea_orm_migration::MigratorTrait;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20250601_000001_create_users::Migration),
            Box::new(m20250601_000002_create_tags::Migration),
            Box::new(m20250601_000003_create_games::Migration),
            Box::new(m20250601_000004_create_game_tag_links::Migration),
            Box::new(m20250601_000005_create_user_saved_games::Migration),
            Box::new(m20250601_000006_add_game_indexes::Migration),
        ]
    }
}
