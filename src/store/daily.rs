//! Daily price accessors

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, DatabaseConnection, EntityTrait, ModelTrait, QueryOrder, QuerySelect, Set,
};

use super::StoreError;
use crate::entities::daily_prices;
use crate::entities::prelude::{DailyPrices, Items};
use crate::models::daily::DailyCreate;

/// Insert a new daily observation. The date defaults to today when the
/// caller omits it; a duplicate date fails with [`StoreError::Constraint`].
pub async fn create_daily(
    db: &DatabaseConnection,
    input: DailyCreate,
) -> Result<daily_prices::Model, StoreError> {
    let row = daily_prices::ActiveModel {
        item_id: Set(input.item_id),
        price: Set(input.price),
        volume: Set(input.volume),
        date: Set(input.date.unwrap_or_else(|| Utc::now().date_naive())),
        ..Default::default()
    };
    Ok(row.insert(db).await?)
}

pub async fn get_daily(
    db: &DatabaseConnection,
    daily_id: i32,
) -> Result<Option<daily_prices::Model>, StoreError> {
    Ok(DailyPrices::find_by_id(daily_id).one(db).await?)
}

pub async fn get_daily_all(
    db: &DatabaseConnection,
    limit: u64,
) -> Result<Vec<daily_prices::Model>, StoreError> {
    Ok(DailyPrices::find()
        .order_by_desc(daily_prices::Column::Date)
        .limit(limit)
        .all(db)
        .await?)
}

/// Two-step lookup: a missing parent item yields `Ok(None)`.
pub async fn get_daily_by_item(
    db: &DatabaseConnection,
    item_id: i32,
) -> Result<Option<Vec<daily_prices::Model>>, StoreError> {
    let Some(item) = Items::find_by_id(item_id).one(db).await? else {
        return Ok(None);
    };
    let rows = item
        .find_related(DailyPrices)
        .order_by_desc(daily_prices::Column::Date)
        .all(db)
        .await?;
    Ok(Some(rows))
}

pub async fn delete_daily(db: &DatabaseConnection, daily_id: i32) -> Result<(), StoreError> {
    let Some(daily) = DailyPrices::find_by_id(daily_id).one(db).await? else {
        return Ok(());
    };
    daily.delete(db).await?;
    Ok(())
}
