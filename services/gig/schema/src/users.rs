use sea_orm::entity::prelude::*;

/// Account record. `email` is stored normalized (lowercase domain).
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "users")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique)]
    pub email: String,
    pub name: String,
    pub password_hash: String,
    pub is_active: bool,
    pub is_staff: bool,
    pub is_superuser: bool,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::user_saved_games::Entity")]
    SavedGames,
}

impl Related<super::user_saved_games::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::SavedGames.def()
    }
}

impl Related<super::games::Entity> for Entity {
    fn to() -> RelationDef {
        super::user_saved_games::Relation::Game.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::user_saved_games::Relation::User.def().rev())
    }
}

impl ActiveModelBehavior for ActiveModel {}
