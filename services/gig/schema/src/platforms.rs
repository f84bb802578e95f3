use std::fmt;

use sea_orm::entity::prelude::*;

/// Platform label attachable to games.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "platforms")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique)]
    pub name: String,
}

impl fmt::Display for Model {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::game_platforms::Entity")]
    GameLinks,
}

impl Related<super::game_platforms::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::GameLinks.def()
    }
}

impl Related<super::games::Entity> for Entity {
    fn to() -> RelationDef {
        super::game_platforms::Relation::Game.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::game_platforms::Relation::Tag.def().rev())
    }
}

impl ActiveModelBehavior for ActiveModel {}
