//! SeaORM Entity for recipe materials
//!
//! References the consumed item by display name (the recipe export keys on
//! names); items.name is unique so the foreign key holds.

use chrono::Utc;
use sea_orm::entity::prelude::*;
use sea_orm::{ConnectionTrait, DbErr, Set};
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "materials")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub production_id: i32,
    /// Consumed item's display name, foreign-keyed to items.name
    pub name: String,
    pub quantity: i32,
    pub created: DateTime,
    pub updated: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::productions::Entity",
        from = "Column::ProductionId",
        to = "super::productions::Column::Id"
    )]
    Productions,
    #[sea_orm(
        belongs_to = "super::items::Entity",
        from = "Column::Name",
        to = "super::items::Column::Name"
    )]
    Items,
}

impl Related<super::productions::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Productions.def()
    }
}

impl Related<super::items::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Items.def()
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
