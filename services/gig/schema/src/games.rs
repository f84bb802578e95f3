use sea_orm::entity::prelude::*;

/// Catalogue entry for a single video game.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "games")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    #[sea_orm(column_type = "Text", nullable)]
    pub summary: Option<String>,
    pub cover: Option<String>,
    pub rating: f64,
    pub popularity: f64,
    pub first_release_date: Option<chrono::DateTime<chrono::Utc>>,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::game_genres::Entity")]
    GameGenres,
    #[sea_orm(has_many = "super::game_themes::Entity")]
    GameThemes,
    #[sea_orm(has_many = "super::game_platforms::Entity")]
    GamePlatforms,
    #[sea_orm(has_many = "super::game_developers::Entity")]
    GameDevelopers,
    #[sea_orm(has_many = "super::game_publishers::Entity")]
    GamePublishers,
    #[sea_orm(has_many = "super::user_saved_games::Entity")]
    SavedBy,
}

impl Related<super::game_genres::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::GameGenres.def()
    }
}

impl Related<super::game_themes::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::GameThemes.def()
    }
}

impl Related<super::game_platforms::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::GamePlatforms.def()
    }
}

impl Related<super::game_developers::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::GameDevelopers.def()
    }
}

impl Related<super::game_publishers::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::GamePublishers.def()
    }
}

impl Related<super::user_saved_games::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::SavedBy.def()
    }
}

impl Related<super::genres::Entity> for Entity {
    fn to() -> RelationDef {
        super::game_genres::Relation::Tag.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::game_genres::Relation::Game.def().rev())
    }
}

impl Related<super::themes::Entity> for Entity {
    fn to() -> RelationDef {
        super::game_themes::Relation::Tag.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::game_themes::Relation::Game.def().rev())
    }
}

impl Related<super::platforms::Entity> for Entity {
    fn to() -> RelationDef {
        super::game_platforms::Relation::Tag.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::game_platforms::Relation::Game.def().rev())
    }
}

impl Related<super::developers::Entity> for Entity {
    fn to() -> RelationDef {
        super::game_developers::Relation::Tag.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::game_developers::Relation::Game.def().rev())
    }
}

impl Related<super::publishers::Entity> for Entity {
    fn to() -> RelationDef {
        super::game_publishers::Relation::Tag.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::game_publishers::Relation::Game.def().rev())
    }
}

impl Related<super::users::Entity> for Entity {
    fn to() -> RelationDef {
        super::user_saved_games::Relation::User.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::user_saved_games::Relation::Game.def().rev())
    }
}

impl ActiveModelBehavior for ActiveModel {}
