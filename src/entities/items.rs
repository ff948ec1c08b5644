//! SeaORM Entity for tradeable items
//!
//! Aggregate root of the schema: categories, price observations and
//! production recipes all hang off an item.

use chrono::Utc;
use sea_orm::entity::prelude::*;
use sea_orm::{ConnectionTrait, DbErr, Set};
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "items")]
pub struct Model {
    /// In-game item id, assigned by the caller (game data export), never
    /// generated by the database.
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: i32,
    /// Display name, unique across the table
    #[sea_orm(unique)]
    pub name: String,
    /// Market id on the exchange
    pub market: i32,
    /// Buy limit per trading window
    pub limit: i32,
    /// Members-only flag
    pub members: bool,
    pub high_alch: i32,
    pub low_alch: i32,
    pub created: DateTime,
    pub updated: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::categories::Entity")]
    Categories,
    #[sea_orm(has_many = "super::latest_prices::Entity")]
    LatestPrices,
    #[sea_orm(has_many = "super::average_prices::Entity")]
    AveragePrices,
    #[sea_orm(has_many = "super::daily_prices::Entity")]
    DailyPrices,
    #[sea_orm(has_many = "super::productions::Entity")]
    Productions,
}

impl Related<super::categories::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Categories.def()
    }
}

impl Related<super::latest_prices::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::LatestPrices.def()
    }
}

impl Related<super::average_prices::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::AveragePrices.def()
    }
}

impl Related<super::daily_prices::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::DailyPrices.def()
    }
}

impl Related<super::productions::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Productions.def()
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
