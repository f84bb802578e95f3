use std::fmt;

use sea_orm::entity::prelude::*;

/// Developer studio label attachable to games.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "developers")]
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
    #[sea_orm(has_many = "super::game_developers::Entity")]
    GameLinks,
}

impl Related<super::game_developers::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::GameLinks.def()
    }
}

impl Related<super::games::Entity> for Entity {
    fn to() -> RelationDef {
        super::game_developers::Relation::Game.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::game_developers::Relation::Tag.def().rev())
    }
}

impl ActiveModelBehavior for ActiveModel {}
