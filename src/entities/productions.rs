//! SeaORM Entity for production recipes
//!
//! A recipe describes how an item is crafted: game ticks per action, the
//! facility it needs, and the material/skill requirements hanging off it.

use chrono::Utc;
use sea_orm::entity::prelude::*;
use sea_orm::{ConnectionTrait, DbErr, Set};
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "productions")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    /// Item produced by this recipe
    pub item_id: i32,
    /// Game ticks per production action
    pub ticks: i32,
    /// Facility required (e.g. "Furnace")
    pub facilities: String,
    /// Members-only recipe
    pub members: bool,
    /// Flat coin cost per action
    pub cost: i64,
    /// Output quantity per action
    pub quantity: i32,
    pub created: DateTime,
    pub updated: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::items::Entity",
        from = "Column::ItemId",
        to = "super::items::Column::Id"
    )]
    Items,
    #[sea_orm(has_many = "super::materials::Entity")]
    Materials,
    #[sea_orm(has_many = "super::skills::Entity")]
    Skills,
}

impl Related<super::items::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Items.def()
    }
}

impl Related<super::materials::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Materials.def()
    }
}

impl Related<super::skills::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Skills.def()
    }
}

#[async_trait::async_trait]
impl ActiveModelBehavior for ActiveModel {
    async fn before_save<C>(mut self, _db: &C, insert: bool) -> Result<Self, DbErr>
    where
        C: ConnectionTrait,
    {
        let now = Utc::now().naive_utc();
        if insert {
            self.created = Set(now);
        }
        self.updated = Set(now);
        Ok(self)
    }
}
